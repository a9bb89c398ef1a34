// File: crates/figrid-core/src/types.rs
// Summary: Shared types and constants (figure size, dpi, subplot margins).

use serde::{Deserialize, Serialize};

/// Default figure width in inches.
pub const FIG_WIDTH_IN: f32 = 6.4;
/// Default figure height in inches.
pub const FIG_HEIGHT_IN: f32 = 4.8;
/// Default resolution in pixels per inch.
pub const DPI: f32 = 100.0;
/// Resolution of the outer placement grid along each axis.
pub const GRID_RESOLUTION: usize = 100;

/// Margins and default spacing of a grid, in figure fractions.
/// `bottom`/`top` are measured upward from the bottom edge of the figure.
/// `wspace`/`hspace` are fractions of the mean cell width/height.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubplotParams {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub wspace: f64,
    pub hspace: f64,
}

impl SubplotParams {
    pub const fn new(left: f64, right: f64, bottom: f64, top: f64, wspace: f64, hspace: f64) -> Self {
        Self { left, right, bottom, top, wspace, hspace }
    }
    /// Usable width between the left and right margins.
    pub fn width(&self) -> f64 { self.right - self.left }
    /// Usable height between the bottom and top margins.
    pub fn height(&self) -> f64 { self.top - self.bottom }
}

impl Default for SubplotParams {
    fn default() -> Self {
        Self::new(0.125, 0.9, 0.11, 0.88, 0.2, 0.2)
    }
}
