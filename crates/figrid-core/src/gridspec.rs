// File: crates/figrid-core/src/gridspec.rs
// Summary: Grid partitioner mapping (row, col) cell ranges to figure-fraction boxes.

use std::ops::Range;

use crate::geometry::Bbox;
use crate::types::SubplotParams;

/// A rows x cols partition of a rectangle of the figure.
///
/// Cells are equal-sized. Row 0 is the top row. Gaps between cells are
/// `wspace`/`hspace` times the cell width/height, so an n-column grid spans
/// `n` cells plus `n - 1` gaps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    pub nrows: usize,
    pub ncols: usize,
    pub params: SubplotParams,
}

impl GridSpec {
    pub fn new(nrows: usize, ncols: usize, params: SubplotParams) -> Self {
        Self { nrows, ncols, params }
    }

    fn cell_width(&self) -> f64 {
        let n = self.ncols as f64;
        self.params.width() / (n + self.params.wspace * (n - 1.0))
    }

    fn cell_height(&self) -> f64 {
        let n = self.nrows as f64;
        self.params.height() / (n + self.params.hspace * (n - 1.0))
    }

    /// Left edge of column `col`. Indices outside the grid extrapolate.
    pub fn col_left(&self, col: i64) -> f64 {
        let w = self.cell_width();
        self.params.left + col as f64 * w * (1.0 + self.params.wspace)
    }

    pub fn col_right(&self, col: i64) -> f64 {
        self.col_left(col) + self.cell_width()
    }

    /// Top edge of row `row`, rows counting down from the top margin.
    pub fn row_top(&self, row: i64) -> f64 {
        let h = self.cell_height();
        self.params.top - row as f64 * h * (1.0 + self.params.hspace)
    }

    pub fn row_bottom(&self, row: i64) -> f64 {
        self.row_top(row) - self.cell_height()
    }

    /// Box covering the half-open cell ranges `rows` x `cols`.
    /// Callers guarantee both ranges are non-empty.
    pub fn span_bbox(&self, rows: Range<i64>, cols: Range<i64>) -> Bbox {
        Bbox::from_extents(
            self.col_left(cols.start),
            self.row_bottom(rows.end - 1),
            self.col_right(cols.end - 1),
            self.row_top(rows.start),
        )
    }

    /// Box of a single cell addressed by its row-major index.
    pub fn cell(&self, index: usize) -> Bbox {
        let row = (index / self.ncols) as i64;
        let col = (index % self.ncols) as i64;
        self.span_bbox(row..row + 1, col..col + 1)
    }

    /// Partition the box covered by `rows` x `cols` into a new grid.
    /// `None` spacing keeps this grid's spacing.
    pub fn subgrid(
        &self,
        rows: Range<i64>,
        cols: Range<i64>,
        nrows: usize,
        ncols: usize,
        wspace: Option<f64>,
        hspace: Option<f64>,
    ) -> GridSpec {
        let b = self.span_bbox(rows, cols);
        let params = SubplotParams::new(
            b.x0,
            b.x1,
            b.y0,
            b.y1,
            wspace.unwrap_or(self.params.wspace),
            hspace.unwrap_or(self.params.hspace),
        );
        GridSpec::new(nrows, ncols, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_params(wspace: f64, hspace: f64) -> SubplotParams {
        SubplotParams::new(0.0, 1.0, 0.0, 1.0, wspace, hspace)
    }

    #[test]
    fn cells_without_spacing_tile_the_box() {
        let gs = GridSpec::new(2, 4, unit_params(0.0, 0.0));
        let b = gs.cell(5); // row 1, col 1
        assert!((b.x0 - 0.25).abs() < 1e-12);
        assert!((b.x1 - 0.5).abs() < 1e-12);
        assert!((b.y0 - 0.0).abs() < 1e-12);
        assert!((b.y1 - 0.5).abs() < 1e-12);
    }

    #[test]
    fn spacing_is_relative_to_cell_size() {
        // 3 rows, hspace 0.5: 3 cells + 2 gaps of half a cell = 4 cells tall.
        let gs = GridSpec::new(3, 1, unit_params(0.0, 0.5));
        let top = gs.cell(0);
        assert!((top.y1 - 1.0).abs() < 1e-12);
        assert!((top.y0 - 0.75).abs() < 1e-12);
        let bottom = gs.cell(2);
        assert!((bottom.y0 - 0.0).abs() < 1e-12);
    }

    #[test]
    fn span_extrapolates_outside_grid() {
        let gs = GridSpec::new(10, 10, unit_params(0.0, 0.0));
        let b = gs.span_bbox(0..1, -2..0);
        assert!((b.x0 + 0.2).abs() < 1e-12);
        assert!(b.x1.abs() < 1e-12);
    }

    #[test]
    fn subgrid_inherits_spacing_when_unset() {
        let gs = GridSpec::new(10, 10, unit_params(0.3, 0.4));
        let inner = gs.subgrid(0..5, 0..5, 2, 2, None, Some(0.1));
        assert_eq!(inner.params.wspace, 0.3);
        assert_eq!(inner.params.hspace, 0.1);
        assert!((inner.params.top - 1.0).abs() < 1e-12);
    }
}
