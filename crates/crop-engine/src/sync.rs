// File: crates/crop-engine/src/sync.rs
// Summary: One-way sink from derived series into a chart surface.

use tracing::debug;

use crate::derive::SeriesDescriptor;

/// A live chart owned by some rendering backend.
pub trait ChartSurface {
    /// Replace the whole series configuration (no diffing).
    fn replace_series(&mut self, series: Vec<SeriesDescriptor>);
    /// Ask the backend to re-render with its current configuration.
    fn request_redraw(&mut self);
}

/// Pushes series into a surface and requests a redraw.
///
/// A sync can only be built around an existing surface; backends that need a
/// drawing target allocate it when the surface is constructed.
pub struct ChartSync<S> {
    surface: S,
}

impl<S: ChartSurface> ChartSync<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn apply(&mut self, series: Vec<SeriesDescriptor>) {
        debug!(series = series.len(), "applying series to chart");
        self.surface.replace_series(series);
        self.surface.request_redraw();
    }

    pub fn surface(&self) -> &S { &self.surface }

    pub fn surface_mut(&mut self) -> &mut S { &mut self.surface }
}

/// In-memory surface: keeps the last applied series and counts redraw requests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemorySurface {
    pub series: Vec<SeriesDescriptor>,
    pub redraws: u64,
}

impl ChartSurface for MemorySurface {
    fn replace_series(&mut self, series: Vec<SeriesDescriptor>) {
        self.series = series;
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }
}
