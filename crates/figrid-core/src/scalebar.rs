// File: crates/figrid-core/src/scalebar.rs
// Summary: Horizontal/vertical scale bars with text, drawn in a region's data coordinates.

use crate::artist::Line;
use crate::color::Color;
use crate::error::Result;
use crate::figure::{AxesId, Figure};
use crate::text::{HAlign, TextStyle, VAlign};

/// Scale bar anchored at (`x_pos`, `y_pos`) in data coordinates.
/// A bar is drawn for each length that is set.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleBar {
    pub x_pos: f64,
    pub y_pos: f64,
    pub x_length: Option<f64>,
    pub y_length: Option<f64>,
    pub x_text: Option<String>,
    pub y_text: Option<String>,
    /// Horizontal gap between the vertical bar and its text.
    pub x_buffer: f64,
    /// Vertical gap between the horizontal bar and its text.
    pub y_buffer: f64,
    pub scalebar_color: Color,
    pub text_color: Color,
    pub fontsize: f32,
    pub linewidth: f32,
}

impl ScaleBar {
    pub fn new(x_pos: f64, y_pos: f64) -> Self {
        Self {
            x_pos,
            y_pos,
            x_length: None,
            y_length: None,
            x_text: None,
            y_text: None,
            x_buffer: 0.25,
            y_buffer: 0.25,
            scalebar_color: Color::BLACK,
            text_color: Color::BLACK,
            fontsize: 10.0,
            linewidth: 3.0,
        }
    }

    pub fn horizontal(mut self, length: f64, text: impl Into<String>) -> Self {
        self.x_length = Some(length);
        self.x_text = Some(text.into());
        self
    }

    pub fn vertical(mut self, length: f64, text: impl Into<String>) -> Self {
        self.y_length = Some(length);
        self.y_text = Some(text.into());
        self
    }

    pub fn buffers(mut self, x_buffer: f64, y_buffer: f64) -> Self {
        self.x_buffer = x_buffer;
        self.y_buffer = y_buffer;
        self
    }

    pub fn colors(mut self, scalebar_color: Color, text_color: Color) -> Self {
        self.scalebar_color = scalebar_color;
        self.text_color = text_color;
        self
    }

    pub fn fontsize(mut self, fontsize: f32) -> Self { self.fontsize = fontsize; self }
    pub fn linewidth(mut self, linewidth: f32) -> Self { self.linewidth = linewidth; self }

    fn text_style(&self, ha: HAlign, va: VAlign) -> TextStyle {
        TextStyle::new().color(self.text_color).fontsize(self.fontsize).ha(ha).va(va)
    }
}

/// Draw `bar` onto region `axes`. Each bar adds one line and one text
/// element (empty when no text is given).
pub fn scalebar(fig: &mut Figure, axes: AxesId, bar: &ScaleBar) -> Result<()> {
    let ax = fig.axes_mut(axes)?;
    let (x, y) = (bar.x_pos, bar.y_pos);

    if let Some(len) = bar.x_length {
        ax.plot(
            Line::new(vec![(x, y), (x + len, y)])
                .with_color(bar.scalebar_color)
                .with_linewidth(bar.linewidth),
        );
        ax.text(
            x + len / 2.0,
            y - bar.y_buffer,
            bar.x_text.clone().unwrap_or_default(),
            bar.text_style(HAlign::Center, VAlign::Top),
        );
    }

    if let Some(len) = bar.y_length {
        ax.plot(
            Line::new(vec![(x, y), (x, y + len)])
                .with_color(bar.scalebar_color)
                .with_linewidth(bar.linewidth),
        );
        ax.text(
            x - bar.x_buffer,
            y + len / 2.0,
            bar.y_text.clone().unwrap_or_default(),
            bar.text_style(HAlign::Right, VAlign::Center),
        );
    }
    Ok(())
}
