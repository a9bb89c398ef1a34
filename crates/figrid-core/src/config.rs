// File: crates/figrid-core/src/config.rs
// Summary: Figure configuration (size, resolution, margins, theme) loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::types::{SubplotParams, DPI, FIG_HEIGHT_IN, FIG_WIDTH_IN};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    /// Figure width in inches
    pub width_in: f32,
    /// Figure height in inches
    pub height_in: f32,
    /// Pixels per inch; also converts point sizes (fonts, line widths) to pixels
    pub dpi: f32,
    /// Margins and default spacing of the outer placement grid
    pub subplot: SubplotParams,
    /// Theme preset name (see `theme::presets`)
    pub theme: String,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width_in: FIG_WIDTH_IN,
            height_in: FIG_HEIGHT_IN,
            dpi: DPI,
            subplot: SubplotParams::default(),
            theme: "light".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl FigureConfig {
    /// Square figure of `size` inches, handy for multi-panel layouts.
    pub fn square(size: f32) -> Self {
        Self { width_in: size, height_in: size, ..Self::default() }
    }

    /// Load config from a path
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: FigureConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width_in > 0.0 && self.height_in > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "figure size must be positive, got {}x{} in",
                self.width_in, self.height_in
            )));
        }
        if !(self.dpi > 0.0) {
            return Err(ConfigError::Invalid(format!("dpi must be positive, got {}", self.dpi)));
        }
        let s = &self.subplot;
        if !(s.left < s.right && s.bottom < s.top) {
            return Err(ConfigError::Invalid(format!(
                "subplot margins must satisfy left < right and bottom < top, got {s:?}"
            )));
        }
        if s.wspace < 0.0 || s.hspace < 0.0 {
            return Err(ConfigError::Invalid("wspace and hspace must be non-negative".into()));
        }
        Ok(())
    }

    /// Surface size in whole pixels.
    pub fn pixel_size(&self) -> (i32, i32) {
        (
            (self.width_in * self.dpi).round().max(1.0) as i32,
            (self.height_in * self.dpi).round().max(1.0) as i32,
        )
    }

    /// Convert a size in points to pixels at this resolution.
    pub fn points_to_px(&self, points: f32) -> f32 {
        points * self.dpi / 72.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = FigureConfig::from_toml_str("width_in = 10.0\n[subplot]\nhspace = 0.5\n").unwrap();
        assert_eq!(cfg.width_in, 10.0);
        assert_eq!(cfg.height_in, FIG_HEIGHT_IN);
        assert_eq!(cfg.subplot.hspace, 0.5);
        assert_eq!(cfg.subplot.left, 0.125);
    }

    #[test]
    fn rejects_inverted_margins() {
        let err = FigureConfig::from_toml_str("[subplot]\nleft = 0.9\nright = 0.1\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn pixel_size_uses_dpi() {
        let cfg = FigureConfig::square(10.0);
        assert_eq!(cfg.pixel_size(), (1000, 1000));
        assert_eq!(cfg.points_to_px(72.0), 100.0);
    }
}
