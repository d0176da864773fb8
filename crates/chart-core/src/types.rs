// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, legend metrics).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Height of one legend row, in pixels.
pub const LEGEND_ROW: f32 = 20.0;
/// Side of the colour swatch drawn next to each legend entry.
pub const LEGEND_SWATCH: f32 = 12.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    // Bottom leaves room for category ticks, the x title and one legend row.
    fn default() -> Self {
        Self::new(80, 24, 48, 96)
    }
}
