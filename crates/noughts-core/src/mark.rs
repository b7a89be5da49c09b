//! Player marks and cell coordinates.

use serde::{Deserialize, Serialize};

/// Number of rows (and columns) on the board.
pub const BOARD_DIM: usize = 3;

/// The occupant of a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Empty cell.
    #[default]
    None,
    X,
    O,
}

impl Mark {
    /// Glyph drawn for this mark. `None` has no glyph.
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::None => "",
            Mark::X => "X",
            Mark::O => "O",
        }
    }

    /// Whether this mark occupies a cell.
    pub fn is_some(self) -> bool {
        self != Mark::None
    }

    /// The mark that plays after this one. `None` is treated like `X`.
    pub fn toggled(self) -> Self {
        match self {
            Mark::O => Mark::X,
            Mark::X | Mark::None => Mark::O,
        }
    }
}

/// A validated `(row, col)` coordinate on the 3x3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPos {
    row: usize,
    col: usize,
}

impl CellPos {
    /// Create a position, or `None` if either coordinate is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_DIM && col < BOARD_DIM).then_some(Self { row, col })
    }

    /// Const constructor for positions known to be in range.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// All nine positions in row-major order.
    pub fn all() -> impl Iterator<Item = CellPos> {
        (0..BOARD_DIM).flat_map(|row| (0..BOARD_DIM).map(move |col| CellPos { row, col }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(Mark::X.toggled(), Mark::O);
        assert_eq!(Mark::O.toggled(), Mark::X);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Mark::X.symbol(), "X");
        assert_eq!(Mark::O.symbol(), "O");
        assert!(Mark::None.symbol().is_empty());
    }

    #[test]
    fn test_cell_pos_bounds() {
        assert!(CellPos::new(2, 2).is_some());
        assert!(CellPos::new(3, 0).is_none());
        assert!(CellPos::new(0, 3).is_none());
    }

    #[test]
    fn test_all_is_row_major() {
        let all: Vec<_> = CellPos::all().collect();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], CellPos::at(0, 0));
        assert_eq!(all[1], CellPos::at(0, 1));
        assert_eq!(all[3], CellPos::at(1, 0));
        assert_eq!(all[8], CellPos::at(2, 2));
    }
}
