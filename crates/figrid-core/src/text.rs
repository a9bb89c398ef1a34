// File: crates/figrid-core/src/text.rs
// Summary: Text styling options and a Skia textlayout shaper for aligned drawing.

use serde::Deserialize;
use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle as SkTextStyle};

use crate::color::Color;
use crate::error::LayoutError;

/// Default font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 10.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    Top,
    Center,
    Bottom,
    #[default]
    Baseline,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Recognized styling options for a text element.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    /// Size in points.
    pub fontsize: f32,
    pub weight: FontWeight,
    pub ha: HAlign,
    pub va: VAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            fontsize: DEFAULT_FONT_SIZE,
            weight: FontWeight::Normal,
            ha: HAlign::Left,
            va: VAlign::Baseline,
        }
    }
}

impl TextStyle {
    pub fn new() -> Self { Self::default() }

    pub fn color(mut self, color: Color) -> Self { self.color = color; self }
    pub fn fontsize(mut self, size: f32) -> Self { self.fontsize = size; self }
    pub fn weight(mut self, weight: FontWeight) -> Self { self.weight = weight; self }
    pub fn ha(mut self, ha: HAlign) -> Self { self.ha = ha; self }
    pub fn va(mut self, va: VAlign) -> Self { self.va = va; self }

    /// Apply one keyword-style option such as `("fontsize", "20")`.
    /// Unknown keys and unparsable values are errors.
    pub fn with_option(mut self, key: &str, value: &str) -> Result<Self, LayoutError> {
        let bad = || LayoutError::InvalidTextOption { key: key.to_string(), value: value.to_string() };
        match key {
            "color" | "c" => self.color = value.parse()?,
            "fontsize" | "size" => {
                self.fontsize = value.trim().parse::<f32>().ok().filter(|s| *s > 0.0).ok_or_else(bad)?
            }
            "weight" | "fontweight" => {
                self.weight = match value {
                    "normal" => FontWeight::Normal,
                    "bold" => FontWeight::Bold,
                    _ => return Err(bad()),
                }
            }
            "ha" | "horizontalalignment" => {
                self.ha = match value {
                    "left" => HAlign::Left,
                    "center" => HAlign::Center,
                    "right" => HAlign::Right,
                    _ => return Err(bad()),
                }
            }
            "va" | "verticalalignment" => {
                self.va = match value {
                    "top" => VAlign::Top,
                    "center" => VAlign::Center,
                    "bottom" => VAlign::Bottom,
                    "baseline" => VAlign::Baseline,
                    _ => return Err(bad()),
                }
            }
            other => return Err(LayoutError::UnknownTextOption(other.to_string())),
        }
        Ok(self)
    }

    /// Apply a list of keyword-style options in order.
    pub fn with_options<'a, I>(self, options: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        options.into_iter().try_fold(self, |style, (k, v)| style.with_option(k, v))
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size_px: f32, color: Color, weight: FontWeight) -> SkTextStyle {
        let mut ts = SkTextStyle::new();
        ts.set_font_size(size_px.max(1.0));
        ts.set_color(color.to_skia());
        ts.set_font_families(&["DejaVu Sans", "Arial", "Helvetica", "Segoe UI", "Roboto", "sans-serif"]);
        if weight == FontWeight::Bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size_px: f32, color: Color, weight: FontWeight) -> Paragraph {
        let pstyle = ParagraphStyle::new();
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size_px, color, weight));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` anchored at pixel (x, y) with the style's alignment.
    pub fn draw_aligned(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size_px: f32, style: &TextStyle) {
        if text.is_empty() {
            return;
        }
        let p = self.layout(text, size_px, style.color, style.weight);
        let w = p.longest_line();
        let h = p.height();
        let left = match style.ha {
            HAlign::Left => x,
            HAlign::Center => x - w * 0.5,
            HAlign::Right => x - w,
        };
        let top = match style.va {
            VAlign::Top => y,
            VAlign::Center => y - h * 0.5,
            VAlign::Bottom => y - h,
            VAlign::Baseline => y - p.alphabetic_baseline(),
        };
        p.paint(canvas, (left, top));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_apply_in_order() {
        let style = TextStyle::new()
            .with_options([("fontsize", "20"), ("weight", "bold"), ("ha", "right"), ("va", "bottom")])
            .unwrap();
        assert_eq!(style.fontsize, 20.0);
        assert_eq!(style.weight, FontWeight::Bold);
        assert_eq!(style.ha, HAlign::Right);
        assert_eq!(style.va, VAlign::Bottom);
    }

    #[test]
    fn unknown_option_is_rejected() {
        let err = TextStyle::new().with_option("fontfamily", "serif").unwrap_err();
        assert_eq!(err, LayoutError::UnknownTextOption("fontfamily".into()));
    }

    #[test]
    fn bad_value_is_rejected() {
        let err = TextStyle::new().with_option("ha", "middle").unwrap_err();
        assert!(matches!(err, LayoutError::InvalidTextOption { .. }));
        assert!(TextStyle::new().with_option("fontsize", "-3").is_err());
    }
}
