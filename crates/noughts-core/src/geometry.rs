//! Board geometry derived from the widget's pixel size.

use crate::mark::{BOARD_DIM, CellPos};
use kurbo::{Line, Point, Rect, Size};

/// Grid lines and cell rectangles for a square board.
///
/// The board is always square: only the width of the layout is used and the
/// height is forced to match it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    /// Side length of the drawable square.
    side: f64,
}

impl BoardGeometry {
    /// Derive geometry from the host-reported size. The height is ignored.
    pub fn from_size(size: Size) -> Self {
        Self::new(size.width)
    }

    /// Create geometry for a square of the given side length.
    pub fn new(side: f64) -> Self {
        Self { side: side.max(0.0) }
    }

    /// Side length of the board.
    pub fn side(&self) -> f64 {
        self.side
    }

    /// Side length of a single cell.
    pub fn cell_size(&self) -> f64 {
        self.side / BOARD_DIM as f64
    }

    /// The drawable square.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.side, self.side)
    }

    /// Coordinates of the four evenly spaced grid lines (`0, W/3, 2W/3, W`).
    pub fn line_offsets(&self) -> [f64; BOARD_DIM + 1] {
        let step = self.cell_size();
        [0.0, step, 2.0 * step, self.side]
    }

    /// The four vertical grid lines, left to right.
    pub fn vertical_lines(&self) -> [Line; BOARD_DIM + 1] {
        self.line_offsets()
            .map(|x| Line::new(Point::new(x, 0.0), Point::new(x, self.side)))
    }

    /// The four horizontal grid lines, top to bottom.
    pub fn horizontal_lines(&self) -> [Line; BOARD_DIM + 1] {
        self.line_offsets()
            .map(|y| Line::new(Point::new(0.0, y), Point::new(self.side, y)))
    }

    /// Bounds of the cell at `pos`.
    pub fn cell_rect(&self, pos: CellPos) -> Rect {
        let step = self.cell_size();
        let x0 = pos.col() as f64 * step;
        let y0 = pos.row() as f64 * step;
        Rect::new(x0, y0, x0 + step, y0 + step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_is_ignored() {
        let geometry = BoardGeometry::from_size(Size::new(300.0, 900.0));
        assert!((geometry.side() - 300.0).abs() < f64::EPSILON);
        assert_eq!(geometry.bounds(), Rect::new(0.0, 0.0, 300.0, 300.0));
    }

    #[test]
    fn test_line_offsets() {
        let geometry = BoardGeometry::new(300.0);
        let offsets = geometry.line_offsets();
        assert!((offsets[0] - 0.0).abs() < f64::EPSILON);
        assert!((offsets[1] - 100.0).abs() < f64::EPSILON);
        assert!((offsets[2] - 200.0).abs() < f64::EPSILON);
        assert!((offsets[3] - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_grid_lines_span_board() {
        let geometry = BoardGeometry::new(300.0);
        for line in geometry.vertical_lines() {
            assert!((line.p0.y).abs() < f64::EPSILON);
            assert!((line.p1.y - 300.0).abs() < f64::EPSILON);
            assert!((line.p0.x - line.p1.x).abs() < f64::EPSILON);
        }
        for line in geometry.horizontal_lines() {
            assert!((line.p0.x).abs() < f64::EPSILON);
            assert!((line.p1.x - 300.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_cells_tile_board() {
        let geometry = BoardGeometry::new(300.0);
        let total: f64 = CellPos::all().map(|pos| geometry.cell_rect(pos).area()).sum();
        assert!((total - geometry.bounds().area()).abs() < 1e-9);

        let rect = geometry.cell_rect(CellPos::new(1, 2).unwrap());
        assert_eq!(rect, Rect::new(200.0, 100.0, 300.0, 200.0));
    }
}
