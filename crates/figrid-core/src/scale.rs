// File: crates/figrid-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for a region's x and y axes.

/// Maps the data interval [d0, d1] onto the pixel interval [p0, p1].
/// Either interval may be decreasing; y scales usually map d0 to the bottom pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub p0: f32,
    pub p1: f32,
}

impl LinearScale {
    pub fn new(data: (f64, f64), pixels: (f32, f32)) -> Self {
        let (d0, mut d1) = data;
        if (d1 - d0).abs() < 1e-12 {
            d1 = d0 + 1.0;
        }
        Self { d0, d1, p0: pixels.0, p1: pixels.1 }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.d0) / (self.d1 - self.d0);
        self.p0 + t as f32 * (self.p1 - self.p0)
    }
}
