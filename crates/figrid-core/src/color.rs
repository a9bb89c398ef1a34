// File: crates/figrid-core/src/color.rs
// Summary: RGBA color value with parsing of names, hex codes, and gray levels.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::LayoutError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Gray level from an intensity in [0, 1] (0 = black).
    pub fn gray(level: f64) -> Self {
        let v = (level.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::rgb(v, v, v)
    }

    pub fn to_skia(self) -> skia_safe::Color {
        skia_safe::Color::from_argb(self.a, self.r, self.g, self.b)
    }

    fn named(name: &str) -> Option<Self> {
        let c = match name {
            "black" | "k" => Color::BLACK,
            "white" | "w" => Color::WHITE,
            "red" | "r" => Color::rgb(255, 0, 0),
            "green" | "g" => Color::rgb(0, 128, 0),
            "blue" | "b" => Color::rgb(0, 0, 255),
            "cyan" | "c" => Color::rgb(0, 191, 191),
            "magenta" | "m" => Color::rgb(191, 0, 191),
            "yellow" | "y" => Color::rgb(191, 191, 0),
            "gray" | "grey" => Color::rgb(128, 128, 128),
            "orange" => Color::rgb(255, 165, 0),
            _ => return None,
        };
        Some(c)
    }
}

fn hex_byte(s: &str) -> Option<u8> {
    u8::from_str_radix(s, 16).ok()
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let alpha = match hex.len() {
        6 => 255,
        8 => hex_byte(&hex[6..8])?,
        _ => return None,
    };
    Some(Color::rgba(hex_byte(&hex[0..2])?, hex_byte(&hex[2..4])?, hex_byte(&hex[4..6])?, alpha))
}

impl FromStr for Color {
    type Err = LayoutError;

    /// Accepts a color name, `#rrggbb`, `#rrggbbaa`, or a gray level such as `".15"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_ascii_lowercase();
        if let Some(c) = Color::named(&t) {
            return Ok(c);
        }
        if let Some(hex) = t.strip_prefix('#') {
            let parsed = parse_hex(hex);
            return parsed.ok_or_else(|| LayoutError::InvalidColor(s.to_string()));
        }
        match t.parse::<f64>() {
            Ok(level) if (0.0..=1.0).contains(&level) => Ok(Color::gray(level)),
            _ => Err(LayoutError::InvalidColor(s.to_string())),
        }
    }
}

impl Default for Color {
    fn default() -> Self { Color::BLACK }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
