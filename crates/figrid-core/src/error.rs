// File: crates/figrid-core/src/error.rs
// Summary: Configuration errors raised by grid placement, styling, and handle lookup.

use crate::figure::AxesId;

/// Which canvas axis a span belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpanAxis {
    X,
    Y,
}

impl std::fmt::Display for SpanAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpanAxis::X => f.write_str("xspan"),
            SpanAxis::Y => f.write_str("yspan"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("dim must be at least 1x1, got {rows}x{cols}")]
    InvalidDim { rows: usize, cols: usize },

    #[error("{axis} must satisfy start < end with finite values, got [{start}, {end}]")]
    InvalidSpan { axis: SpanAxis, start: f64, end: f64 },

    #[error("{axis} [{start}, {end}] covers no cell of the 100x100 grid")]
    EmptyCellRange { axis: SpanAxis, start: f64, end: f64 },

    #[error("{name} must be a finite non-negative fraction, got {value}")]
    InvalidSpacing { name: &'static str, value: f64 },

    #[error("unknown text option '{0}'")]
    UnknownTextOption(String),

    #[error("invalid value '{value}' for text option '{key}'")]
    InvalidTextOption { key: String, value: String },

    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("axes {0:?} does not belong to this figure")]
    UnknownAxes(AxesId),
}

pub type Result<T, E = LayoutError> = std::result::Result<T, E>;
