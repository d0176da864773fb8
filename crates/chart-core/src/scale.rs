// File: crates/chart-core/src/scale.rs
// Summary: Linear domain-to-pixel transform used for both axes.

/// Maps a data interval `[d0, d1]` onto a pixel interval `[r0, r1]`.
/// For Y axes pass `r0 = bottom`, `r1 = top` so larger values go up.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f32,
    r1: f32,
}

impl LinearScale {
    pub fn new(d0: f64, d1: f64, r0: f32, r1: f32) -> Self {
        let d1 = if (d1 - d0).abs() < 1e-12 { d0 + 1.0 } else { d1 };
        Self { d0, d1, r0, r1 }
    }

    #[inline]
    pub fn map(&self, v: f64) -> f32 {
        self.r0 + ((v - self.d0) / (self.d1 - self.d0)) as f32 * (self.r1 - self.r0)
    }

    /// Pixel distance covered by one data unit.
    pub fn unit_px(&self) -> f32 {
        (self.map(self.d0 + 1.0) - self.map(self.d0)).abs()
    }
}
