// File: crates/figrid-core/src/label.rs
// Summary: Panel labels placed on the figure canvas through a tiny grid region.

use serde::Deserialize;

use crate::color::Color;
use crate::error::Result;
use crate::figure::{AxesId, Figure};
use crate::place::{place_axes_on_grid, GridPlacement};
use crate::text::{FontWeight, HAlign, TextStyle, VAlign};
use crate::types::GRID_RESOLUTION;

/// Span covering exactly the grid cell that holds `pos`.
/// The ends sit half a cell inside the boundaries so flooring cannot slip.
fn cell_span(pos: f64) -> (f64, f64) {
    let scale = GRID_RESOLUTION as f64;
    let cell = (scale * pos).floor();
    ((cell + 0.5) / scale, (cell + 1.5) / scale)
}

/// Write `label_text` at canvas position (`xpos`, `ypos`) (0 = left/top,
/// 1 = right/bottom). The backing region is the single grid cell holding
/// that position, with its axis turned off.
pub fn add_label(fig: &mut Figure, label_text: &str, xpos: f64, ypos: f64, style: TextStyle) -> Result<AxesId> {
    let (x0, x1) = cell_span(xpos);
    let (y0, y1) = cell_span(ypos);
    let placement = GridPlacement::new().xspan(x0, x1).yspan(y0, y1);
    let id = place_axes_on_grid(fig, &placement)?.first();
    let ax = fig.axes_mut(id)?;
    ax.text(0.0, 0.0, label_text, style);
    ax.axis_off();
    tracing::debug!(label = label_text, xpos, ypos, "added label");
    Ok(id)
}

/// One label for `add_labels`. Deserializes from TOML/JSON tables; keys
/// other than the ones below are rejected.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelSpec {
    pub label_text: String,
    pub xpos: f64,
    pub ypos: f64,
    #[serde(default)]
    pub fontsize: Option<f32>,
    #[serde(default)]
    pub weight: Option<FontWeight>,
    #[serde(default)]
    pub ha: Option<HAlign>,
    #[serde(default)]
    pub va: Option<VAlign>,
    #[serde(default)]
    pub color: Option<Color>,
}

impl LabelSpec {
    pub fn new(label_text: impl Into<String>, xpos: f64, ypos: f64) -> Self {
        Self {
            label_text: label_text.into(),
            xpos,
            ypos,
            fontsize: None,
            weight: None,
            ha: None,
            va: None,
            color: None,
        }
    }

    pub fn style(&self) -> TextStyle {
        let base = TextStyle::default();
        TextStyle {
            color: self.color.unwrap_or(base.color),
            fontsize: self.fontsize.unwrap_or(base.fontsize),
            weight: self.weight.unwrap_or(base.weight),
            ha: self.ha.unwrap_or(base.ha),
            va: self.va.unwrap_or(base.va),
        }
    }
}

/// Add every label in order; stops at the first failure.
pub fn add_labels(fig: &mut Figure, labels: &[LabelSpec]) -> Result<Vec<AxesId>> {
    labels
        .iter()
        .map(|l| add_label(fig, &l.label_text, l.xpos, l.ypos, l.style()))
        .collect()
}
