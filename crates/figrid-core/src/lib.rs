// File: crates/figrid-core/src/lib.rs
// Summary: Core library entry point; grid placement of plot regions, annotations, and rendering.

pub mod error;
pub mod types;
pub mod geometry;
pub mod color;
pub mod config;
pub mod theme;
pub mod gridspec;
pub mod grid;
pub mod scale;
pub mod text;
pub mod artist;
pub mod axes;
pub mod figure;
pub mod place;
pub mod label;
pub mod scalebar;
pub mod render;

pub use error::{LayoutError, SpanAxis};
pub use types::SubplotParams;
pub use color::Color;
pub use config::{ConfigError, FigureConfig};
pub use theme::Theme;
pub use gridspec::GridSpec;
pub use text::{FontWeight, HAlign, TextStyle, VAlign};
pub use artist::{Image, Line, Scatter, Text};
pub use axes::Axes;
pub use figure::{AxesId, Figure, ViewLimits};
pub use place::{place_axes_on_grid, GridPlacement, Placement};
pub use label::{add_label, add_labels, LabelSpec};
pub use scalebar::{scalebar, ScaleBar};
pub use render::RenderOptions;
