// File: crates/figrid-core/src/figure.rs
// Summary: Figure owning its plot regions; handle lookup and shared-scale view limits.

use crate::axes::Axes;
use crate::config::FigureConfig;
use crate::error::{LayoutError, Result};
use crate::theme::{self, Theme};

/// Handle to a region owned by a `Figure`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AxesId(pub(crate) usize);

impl AxesId {
    /// Position of the region in creation order.
    pub fn index(self) -> usize { self.0 }
}

/// Visible data ranges of a region. A range may be decreasing (inverted axis).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewLimits {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

/// Relative padding added around autoscaled data.
const AUTOSCALE_MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Dir {
    X,
    Y,
}

pub struct Figure {
    config: FigureConfig,
    axes: Vec<Axes>,
}

impl Default for Figure {
    fn default() -> Self { Self::new() }
}

impl Figure {
    pub fn new() -> Self {
        Self::with_config(FigureConfig::default())
    }

    pub fn with_config(config: FigureConfig) -> Self {
        Self { config, axes: Vec::new() }
    }

    pub fn config(&self) -> &FigureConfig { &self.config }

    pub fn theme(&self) -> Theme { theme::find(&self.config.theme) }

    /// Attach a region; it is rendered with the figure from now on.
    pub fn add_axes(&mut self, axes: Axes) -> AxesId {
        self.axes.push(axes);
        AxesId(self.axes.len() - 1)
    }

    pub fn axes(&self, id: AxesId) -> Result<&Axes> {
        self.axes.get(id.0).ok_or(LayoutError::UnknownAxes(id))
    }

    pub fn axes_mut(&mut self, id: AxesId) -> Result<&mut Axes> {
        self.axes.get_mut(id.0).ok_or(LayoutError::UnknownAxes(id))
    }

    pub fn len(&self) -> usize { self.axes.len() }

    pub fn is_empty(&self) -> bool { self.axes.is_empty() }

    /// All regions in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (AxesId, &Axes)> {
        self.axes.iter().enumerate().map(|(i, a)| (AxesId(i), a))
    }

    /// Text content of every text element in the figure.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.axes.iter().flat_map(|a| a.texts.iter().map(|t| t.content.as_str()))
    }

    fn share_parent(&self, id: AxesId, dir: Dir) -> Option<AxesId> {
        let a = self.axes.get(id.0)?;
        match dir {
            Dir::X => a.share_x,
            Dir::Y => a.share_y,
        }
    }

    fn share_root(&self, id: AxesId, dir: Dir) -> AxesId {
        let mut cur = id;
        // Sharing links always point at earlier regions; the bound guards hand-edited links.
        for _ in 0..self.axes.len() {
            match self.share_parent(cur, dir) {
                Some(next) if next != cur => cur = next,
                _ => break,
            }
        }
        cur
    }

    /// Region holding the x scale that `id` uses.
    pub fn x_share_root(&self, id: AxesId) -> AxesId { self.share_root(id, Dir::X) }

    /// Region holding the y scale that `id` uses.
    pub fn y_share_root(&self, id: AxesId) -> AxesId { self.share_root(id, Dir::Y) }

    fn group(&self, id: AxesId, dir: Dir) -> Vec<AxesId> {
        let root = self.share_root(id, dir);
        (0..self.axes.len())
            .map(AxesId)
            .filter(|&other| self.share_root(other, dir) == root)
            .collect()
    }

    /// Set x limits; every region sharing this x scale follows.
    pub fn set_xlim(&mut self, id: AxesId, lo: f64, hi: f64) -> Result<()> {
        self.axes(id)?;
        let root = self.x_share_root(id);
        self.axes[root.0].xlim = Some((lo, hi));
        Ok(())
    }

    /// Set y limits; every region sharing this y scale follows.
    pub fn set_ylim(&mut self, id: AxesId, lo: f64, hi: f64) -> Result<()> {
        self.axes(id)?;
        let root = self.y_share_root(id);
        self.axes[root.0].ylim = Some((lo, hi));
        Ok(())
    }

    /// Resolve visible ranges: explicit limits on the scale holder win,
    /// otherwise data across the sharing group is autoscaled.
    pub fn view_limits(&self, id: AxesId) -> Result<ViewLimits> {
        self.axes(id)?;
        Ok(ViewLimits { x: self.resolve(id, Dir::X), y: self.resolve(id, Dir::Y) })
    }

    fn resolve(&self, id: AxesId, dir: Dir) -> (f64, f64) {
        let root = self.share_root(id, dir);
        let explicit = match dir {
            Dir::X => self.axes[root.0].xlim,
            Dir::Y => self.axes[root.0].ylim,
        };
        if let Some(lim) = explicit {
            return lim;
        }

        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        let mut has_image = false;
        for member in self.group(id, dir) {
            let ax = &self.axes[member.0];
            has_image |= !ax.images.is_empty();
            if let Some((xb, yb)) = ax.data_bounds() {
                let (a, b) = if dir == Dir::X { xb } else { yb };
                lo = lo.min(a);
                hi = hi.max(b);
            }
        }
        if !lo.is_finite() || !hi.is_finite() {
            return (0.0, 1.0);
        }
        if (hi - lo).abs() < 1e-9 {
            hi = lo + 1.0;
        }
        if has_image {
            // Images fill their region exactly, row 0 on top.
            return if dir == Dir::Y { (hi, lo) } else { (lo, hi) };
        }
        let m = (hi - lo) * AUTOSCALE_MARGIN;
        (lo - m, hi + m)
    }
}
