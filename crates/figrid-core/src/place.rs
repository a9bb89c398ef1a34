// File: crates/figrid-core/src/place.rs
// Summary: Places a rows x cols array of regions on a fractional span of the 100x100 figure grid.

use std::ops::Range;

use crate::axes::Axes;
use crate::error::{LayoutError, Result, SpanAxis};
use crate::figure::{AxesId, Figure};
use crate::geometry::Bbox;
use crate::gridspec::GridSpec;
use crate::types::GRID_RESOLUTION;

/// Arguments of a placement call. Spans are fractions of the figure:
/// x runs left (0) to right (1), y runs top (0) to bottom (1).
#[derive(Clone, Debug, PartialEq)]
pub struct GridPlacement {
    pub dim: (usize, usize),
    pub xspan: (f64, f64),
    pub yspan: (f64, f64),
    /// Horizontal gap between columns; `None` uses the figure's default.
    pub wspace: Option<f64>,
    /// Vertical gap between rows; `None` uses the figure's default.
    pub hspace: Option<f64>,
    pub sharex: bool,
    pub sharey: bool,
    pub frameon: bool,
}

impl Default for GridPlacement {
    fn default() -> Self {
        Self {
            dim: (1, 1),
            xspan: (0.0, 1.0),
            yspan: (0.0, 1.0),
            wspace: None,
            hspace: None,
            sharex: false,
            sharey: false,
            frameon: true,
        }
    }
}

impl GridPlacement {
    pub fn new() -> Self { Self::default() }

    pub fn dim(mut self, rows: usize, cols: usize) -> Self { self.dim = (rows, cols); self }
    pub fn xspan(mut self, start: f64, end: f64) -> Self { self.xspan = (start, end); self }
    pub fn yspan(mut self, start: f64, end: f64) -> Self { self.yspan = (start, end); self }
    pub fn wspace(mut self, wspace: f64) -> Self { self.wspace = Some(wspace); self }
    pub fn hspace(mut self, hspace: f64) -> Self { self.hspace = Some(hspace); self }
    pub fn sharex(mut self, share: bool) -> Self { self.sharex = share; self }
    pub fn sharey(mut self, share: bool) -> Self { self.sharey = share; self }
    pub fn frameon(mut self, on: bool) -> Self { self.frameon = on; self }
}

/// Handles returned by a placement, with unit dimensions squeezed out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    /// `dim = (1, 1)`
    Single(AxesId),
    /// `dim = (n, 1)` or `(1, n)`, n > 1
    Row(Vec<AxesId>),
    /// `dim = (m, n)`, m, n > 1; indexed `[row][col]`
    Grid(Vec<Vec<AxesId>>),
}

impl Placement {
    /// Collapse every dimension of size 1 from a rows x cols arrangement.
    fn squeeze(mut rows: Vec<Vec<AxesId>>) -> Self {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        match (nrows, ncols) {
            (1, 1) => Placement::Single(rows[0][0]),
            (1, _) => Placement::Row(rows.swap_remove(0)),
            (_, 1) => Placement::Row(rows.into_iter().map(|r| r[0]).collect()),
            _ => Placement::Grid(rows),
        }
    }

    pub fn single(&self) -> Option<AxesId> {
        match self {
            Placement::Single(id) => Some(*id),
            _ => None,
        }
    }

    /// Top-left handle; every placement holds at least one.
    pub fn first(&self) -> AxesId {
        match self {
            Placement::Single(id) => *id,
            Placement::Row(ids) => ids[0],
            Placement::Grid(rows) => rows[0][0],
        }
    }

    pub fn as_row(&self) -> Option<&[AxesId]> {
        match self {
            Placement::Row(ids) => Some(ids),
            _ => None,
        }
    }

    pub fn as_grid(&self) -> Option<&[Vec<AxesId>]> {
        match self {
            Placement::Grid(rows) => Some(rows),
            _ => None,
        }
    }

    /// Length of the outermost dimension (1 for a single handle).
    pub fn len(&self) -> usize {
        match self {
            Placement::Single(_) => 1,
            Placement::Row(ids) => ids.len(),
            Placement::Grid(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool { false }

    /// Every handle in row-major order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = AxesId> + '_> {
        match self {
            Placement::Single(id) => Box::new(std::iter::once(*id)),
            Placement::Row(ids) => Box::new(ids.iter().copied()),
            Placement::Grid(rows) => Box::new(rows.iter().flatten().copied()),
        }
    }
}

/// Half-open range of outer-grid cells covered by `span`, truncating the scaled ends.
pub fn span_to_cells(axis: SpanAxis, span: (f64, f64)) -> Result<Range<i64>> {
    let (start, end) = span;
    if !(start.is_finite() && end.is_finite()) || start >= end {
        return Err(LayoutError::InvalidSpan { axis, start, end });
    }
    let scale = GRID_RESOLUTION as f64;
    let first = (scale * start).floor() as i64;
    let last = (scale * end).floor() as i64;
    if last <= first {
        return Err(LayoutError::EmptyCellRange { axis, start, end });
    }
    Ok(first..last)
}

fn check_spacing(name: &'static str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(LayoutError::InvalidSpacing { name, value: v }),
        _ => Ok(()),
    }
}

/// Create a `dim.0` x `dim.1` array of regions covering the given spans of
/// the figure and attach them to it.
///
/// With `sharex`, regions below row 0 share the x scale of the row-0 region
/// in their column and only the last row shows x tick labels. With
/// `sharey`, regions right of column 0 share the y scale of the column-0
/// region in their row and only column 0 shows y tick labels.
///
/// Arguments are validated before any region is created. A failure part
/// way through leaves the regions created so far attached.
pub fn place_axes_on_grid(fig: &mut Figure, placement: &GridPlacement) -> Result<Placement> {
    let (rows, cols) = placement.dim;
    if rows == 0 || cols == 0 {
        return Err(LayoutError::InvalidDim { rows, cols });
    }
    let col_cells = span_to_cells(SpanAxis::X, placement.xspan)?;
    let row_cells = span_to_cells(SpanAxis::Y, placement.yspan)?;
    check_spacing("wspace", placement.wspace)?;
    check_spacing("hspace", placement.hspace)?;

    tracing::debug!(
        rows,
        cols,
        ?col_cells,
        ?row_cells,
        sharex = placement.sharex,
        sharey = placement.sharey,
        "placing axes on grid"
    );

    let outer = GridSpec::new(GRID_RESOLUTION, GRID_RESOLUTION, fig.config().subplot);
    let inner = outer.subgrid(row_cells, col_cells, rows, cols, placement.wspace, placement.hspace);

    // Geometry first, so sharing below only looks up handles that already exist.
    let cells: Vec<Bbox> = (0..rows * cols).map(|i| inner.cell(i)).collect();

    let mut grid: Vec<Vec<AxesId>> = Vec::with_capacity(rows);
    for row in 0..rows {
        let mut ids: Vec<AxesId> = Vec::with_capacity(cols);
        for col in 0..cols {
            let mut ax = Axes::new(cells[row * cols + col]).with_frame(placement.frameon);
            if placement.sharex {
                ax.share_x = (row > 0).then(|| grid[0][col]);
                ax.xaxis.show_labels = row == rows - 1;
            }
            if placement.sharey {
                ax.share_y = (col > 0).then(|| ids[0]);
                ax.yaxis.show_labels = col == 0;
            }
            ids.push(fig.add_axes(ax));
        }
        grid.push(ids);
    }

    Ok(Placement::squeeze(grid))
}
