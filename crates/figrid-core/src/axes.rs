// File: crates/figrid-core/src/axes.rs
// Summary: A plot region bound to one grid cell, with its drawing primitives and decorations.

use crate::artist::{Image, Line, Scatter, Text};
use crate::figure::AxesId;
use crate::geometry::Bbox;
use crate::text::TextStyle;

/// Which side of the region carries tick marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickPosition {
    Bottom,
    Left,
}

/// Tick and tick-label visibility for one axis of a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisTicks {
    pub position: TickPosition,
    pub show_ticks: bool,
    pub show_labels: bool,
}

impl AxisTicks {
    fn new(position: TickPosition) -> Self {
        Self { position, show_ticks: true, show_labels: true }
    }
}

#[derive(Clone, Debug)]
pub struct Axes {
    pub position: Bbox,
    pub frame_on: bool,
    /// `false` hides frame, ticks, and tick labels together.
    pub axis_on: bool,
    pub share_x: Option<AxesId>,
    pub share_y: Option<AxesId>,
    pub xaxis: AxisTicks,
    pub yaxis: AxisTicks,
    pub title: Option<String>,
    pub lines: Vec<Line>,
    pub texts: Vec<Text>,
    pub images: Vec<Image>,
    pub collections: Vec<Scatter>,
    pub(crate) xlim: Option<(f64, f64)>,
    pub(crate) ylim: Option<(f64, f64)>,
}

impl Axes {
    pub fn new(position: Bbox) -> Self {
        Self {
            position,
            frame_on: true,
            axis_on: true,
            share_x: None,
            share_y: None,
            xaxis: AxisTicks::new(TickPosition::Bottom),
            yaxis: AxisTicks::new(TickPosition::Left),
            title: None,
            lines: Vec::new(),
            texts: Vec::new(),
            images: Vec::new(),
            collections: Vec::new(),
            xlim: None,
            ylim: None,
        }
    }

    pub fn with_frame(mut self, frame_on: bool) -> Self {
        self.frame_on = frame_on;
        self
    }

    pub fn plot(&mut self, line: Line) -> &mut Self {
        self.lines.push(line);
        self
    }

    pub fn text(&mut self, x: f64, y: f64, content: impl Into<String>, style: TextStyle) -> &mut Self {
        self.texts.push(Text { x, y, content: content.into(), style });
        self
    }

    pub fn imshow(&mut self, image: Image) -> &mut Self {
        self.images.push(image);
        self
    }

    pub fn scatter(&mut self, scatter: Scatter) -> &mut Self {
        self.collections.push(scatter);
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Hide frame, ticks, and tick labels.
    pub fn axis_off(&mut self) -> &mut Self {
        self.axis_on = false;
        self
    }

    pub fn set_frame_on(&mut self, on: bool) -> &mut Self {
        self.frame_on = on;
        self
    }

    /// Frame drawn only when both the frame and the axis are on.
    pub fn frame_visible(&self) -> bool {
        self.axis_on && self.frame_on
    }

    pub fn x_ticklabels_visible(&self) -> bool {
        self.axis_on && self.xaxis.show_ticks && self.xaxis.show_labels
    }

    pub fn y_ticklabels_visible(&self) -> bool {
        self.axis_on && self.yaxis.show_ticks && self.yaxis.show_labels
    }

    /// Bounds of the drawable content: ((xmin, xmax), (ymin, ymax)).
    /// Text does not take part, like tick labels and titles.
    pub fn data_bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let points = self
            .lines
            .iter()
            .flat_map(|l| l.points.iter())
            .chain(self.collections.iter().flat_map(|s| s.points.iter()));
        for &(x, y) in points {
            if !(x.is_finite() && y.is_finite()) {
                continue;
            }
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        for img in &self.images {
            let ((x0, x1), (y0, y1)) = img.extent();
            x_min = x_min.min(x0.min(x1));
            x_max = x_max.max(x0.max(x1));
            y_min = y_min.min(y0.min(y1));
            y_max = y_max.max(y0.max(y1));
        }
        if x_min.is_finite() && x_max.is_finite() && y_min.is_finite() && y_max.is_finite() {
            Some(((x_min, x_max), (y_min, y_max)))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_off_hides_frame_and_labels() {
        let mut ax = Axes::new(Bbox::from_extents(0.0, 0.0, 1.0, 1.0));
        assert!(ax.frame_visible());
        ax.axis_off();
        assert!(!ax.frame_visible());
        assert!(!ax.x_ticklabels_visible());
        assert!(!ax.y_ticklabels_visible());
    }

    #[test]
    fn bounds_cover_lines_and_images_but_not_text() {
        let mut ax = Axes::new(Bbox::from_extents(0.0, 0.0, 1.0, 1.0));
        assert!(ax.data_bounds().is_none());
        ax.text(100.0, 100.0, "far away", TextStyle::default());
        assert!(ax.data_bounds().is_none());
        ax.plot(Line::new(vec![(1.0, 2.0), (3.0, -1.0)]));
        ax.imshow(Image::new(2, 2, vec![0.0; 4]).unwrap());
        assert_eq!(ax.data_bounds(), Some(((-0.5, 3.0), (-1.0, 2.0))));
    }
}
