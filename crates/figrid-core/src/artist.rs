// File: crates/figrid-core/src/artist.rs
// Summary: Drawable elements held by a region: lines, text, raster images, scatter markers.

use crate::color::Color;
use crate::text::TextStyle;

/// Polyline in data coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub points: Vec<(f64, f64)>,
    pub color: Color,
    /// Width in points.
    pub linewidth: f32,
}

impl Line {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points, color: Color::BLACK, linewidth: 1.5 }
    }

    /// Build from separate x and y sequences; extra values on either side are dropped.
    pub fn from_xy(xs: &[f64], ys: &[f64]) -> Self {
        Self::new(xs.iter().copied().zip(ys.iter().copied()).collect())
    }

    pub fn with_color(mut self, color: Color) -> Self { self.color = color; self }
    pub fn with_linewidth(mut self, linewidth: f32) -> Self { self.linewidth = linewidth; self }
}

/// Text anchored at a point in data coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub style: TextStyle,
}

/// Row-major scalar field shown with a gray colormap.
/// Row 0 is drawn at the top, like an image.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f64>,
}

impl Image {
    /// `None` when `data` does not hold exactly `rows * cols` values.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Option<Self> {
        (rows * cols == data.len() && !data.is_empty()).then_some(Self { rows, cols, data })
    }

    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Finite minimum and maximum used for color normalization.
    pub fn value_range(&self) -> (f64, f64) {
        let (lo, hi) = self
            .data
            .iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        if !lo.is_finite() { (0.0, 1.0) } else if (hi - lo).abs() < 1e-12 { (lo, lo + 1.0) } else { (lo, hi) }
    }

    /// Data extent: pixel centers sit on integer coordinates.
    pub fn extent(&self) -> ((f64, f64), (f64, f64)) {
        ((-0.5, self.cols as f64 - 0.5), (self.rows as f64 - 0.5, -0.5))
    }
}

/// Point markers in data coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Scatter {
    pub points: Vec<(f64, f64)>,
    /// Marker area in points squared.
    pub size: f32,
    pub color: Color,
}

impl Scatter {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points, size: 36.0, color: Color::rgb(31, 119, 180) }
    }
    pub fn with_size(mut self, size: f32) -> Self { self.size = size; self }
    pub fn with_color(mut self, color: Color) -> Self { self.color = color; self }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_rejects_mismatched_data() {
        assert!(Image::new(2, 2, vec![0.0; 3]).is_none());
        assert!(Image::new(0, 0, Vec::new()).is_none());
    }

    #[test]
    fn image_range_ignores_nan_and_widens_constant() {
        let img = Image::new(1, 3, vec![2.0, f64::NAN, 2.0]).unwrap();
        assert_eq!(img.value_range(), (2.0, 3.0));
    }
}
