//! The 3x3 grid of cells and win detection.

use crate::geometry::BoardGeometry;
use crate::mark::{BOARD_DIM, CellPos, Mark};
use kurbo::{Point, Rect};

/// A single board cell: its screen bounds and current occupant.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cell {
    pub bounds: Rect,
    pub occupant: Mark,
}

impl Cell {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            occupant: Mark::None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.occupant == Mark::None
    }
}

/// The first and last cell of a winning triple.
///
/// The middle cell is implied by the three-in-a-row rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLine {
    pub start: CellPos,
    pub end: CellPos,
}

/// Candidate triples in scan priority order: rows, then columns, then the
/// anti-diagonal, then the main diagonal. The first full triple wins.
const WIN_LINES: [[CellPos; 3]; 8] = [
    // Rows
    [CellPos::at(0, 0), CellPos::at(0, 1), CellPos::at(0, 2)],
    [CellPos::at(1, 0), CellPos::at(1, 1), CellPos::at(1, 2)],
    [CellPos::at(2, 0), CellPos::at(2, 1), CellPos::at(2, 2)],
    // Columns
    [CellPos::at(0, 0), CellPos::at(1, 0), CellPos::at(2, 0)],
    [CellPos::at(0, 1), CellPos::at(1, 1), CellPos::at(2, 1)],
    [CellPos::at(0, 2), CellPos::at(1, 2), CellPos::at(2, 2)],
    // Diagonals
    [CellPos::at(0, 2), CellPos::at(1, 1), CellPos::at(2, 0)],
    [CellPos::at(0, 0), CellPos::at(1, 1), CellPos::at(2, 2)],
];

/// Row-major 3x3 grid of cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    cells: [[Cell; BOARD_DIM]; BOARD_DIM],
}

impl Board {
    /// An empty board whose cells have zero-sized bounds.
    ///
    /// Used before the first layout; nothing hit-tests against it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fresh, empty board tiling the given geometry.
    pub fn from_geometry(geometry: &BoardGeometry) -> Self {
        let mut board = Self::default();
        for pos in CellPos::all() {
            board.cells[pos.row()][pos.col()] = Cell::new(geometry.cell_rect(pos));
        }
        board
    }

    pub fn cell(&self, pos: CellPos) -> &Cell {
        &self.cells[pos.row()][pos.col()]
    }

    pub fn occupant(&self, pos: CellPos) -> Mark {
        self.cell(pos).occupant
    }

    /// Overwrite a cell's occupant without any turn bookkeeping.
    pub fn set_occupant(&mut self, pos: CellPos, mark: Mark) {
        self.cells[pos.row()][pos.col()].occupant = mark;
    }

    /// Iterate over `(position, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellPos, &Cell)> {
        CellPos::all().map(move |pos| (pos, self.cell(pos)))
    }

    /// Find the cell containing `point`.
    ///
    /// Cells are scanned in row-major order and containment is half-open
    /// (`x0 <= x < x1`), so a point on a shared edge belongs to the cell
    /// to its right or below.
    pub fn hit_test(&self, point: Point) -> Option<CellPos> {
        self.iter()
            .find(|(_, cell)| cell.bounds.contains(point))
            .map(|(pos, _)| pos)
    }

    /// Center of the cell at `pos`.
    pub fn cell_center(&self, pos: CellPos) -> Point {
        self.cell(pos).bounds.center()
    }

    /// Scan for the first winning triple.
    pub fn check_win(&self) -> Option<WinLine> {
        WIN_LINES.iter().find_map(|&[a, b, c]| {
            let mark = self.occupant(a);
            (mark.is_some() && mark == self.occupant(b) && mark == self.occupant(c))
                .then_some(WinLine { start: a, end: c })
        })
    }
}
