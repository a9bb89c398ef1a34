// File: crates/figrid-core/src/theme.rs
// Summary: Light/Dark theming for figure rendering colors (background, frames, ticks).

use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axes_face: Color,
    pub frame: Color,
    pub tick: Color,
    pub tick_label: Color,
    pub title: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::WHITE,
            axes_face: Color::WHITE,
            frame: Color::BLACK,
            tick: Color::BLACK,
            tick_label: Color::BLACK,
            title: Color::BLACK,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            axes_face: Color::rgb(18, 18, 20),
            frame: Color::rgb(180, 180, 190),
            tick: Color::rgb(150, 150, 160),
            tick_label: Color::rgb(235, 235, 245),
            title: Color::rgb(235, 235, 245),
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Color::rgb(0xfd, 0xf6, 0xe3), // base3
            axes_face: Color::rgb(0xfd, 0xf6, 0xe3),
            frame: Color::rgb(0x65, 0x7b, 0x83),      // base00
            tick: Color::rgb(0x58, 0x6e, 0x75),       // base01
            tick_label: Color::rgb(0x00, 0x2b, 0x36), // base03
            title: Color::rgb(0x00, 0x2b, 0x36),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::solarized_light()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(|| {
            tracing::warn!("unknown theme '{}', using light", name);
            Theme::light()
        })
}
