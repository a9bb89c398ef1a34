// File: crates/figrid-core/src/geometry.rs
// Summary: Lightweight geometry helpers: figure-fraction boxes and pixel rects.

/// Box in figure fractions, y upward (0 = bottom edge, 1 = top edge).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bbox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Bbox {
    pub const fn from_extents(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }
    pub fn width(&self) -> f64 { self.x1 - self.x0 }
    pub fn height(&self) -> f64 { self.y1 - self.y0 }

    /// Map to a pixel rect on a `width` x `height` surface (y downward).
    pub fn to_pixels(&self, width: i32, height: i32) -> RectF {
        let w = width as f64;
        let h = height as f64;
        RectF::from_ltrb(
            (self.x0 * w) as f32,
            ((1.0 - self.y1) * h) as f32,
            (self.x1 * w) as f32,
            ((1.0 - self.y0) * h) as f32,
        )
    }
}

/// Pixel rectangle, y downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bbox_flips_y_into_pixels() {
        let r = Bbox::from_extents(0.25, 0.5, 0.75, 1.0).to_pixels(400, 200);
        assert_eq!(r, RectF::from_ltrb(100.0, 0.0, 300.0, 100.0));
    }
}
