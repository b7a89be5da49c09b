//! Turn-taking and placement rules.

use crate::board::{Board, WinLine};
use crate::geometry::BoardGeometry;
use crate::mark::{CellPos, Mark};

/// Whose turn is next and whether the game has been won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    pub next_mark: Mark,
    pub has_win: bool,
}

impl Default for TurnState {
    fn default() -> Self {
        Self {
            next_mark: Mark::X,
            has_win: false,
        }
    }
}

/// What a placement attempt did. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// The mark was written and the turn passed.
    Placed(Mark),
    /// The cell already had an occupant; nothing changed.
    Occupied,
    /// The game is already won; the attempt was ignored.
    GameOver,
}

/// Result of [`Game::place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub outcome: PlaceOutcome,
    /// Set only when this attempt produced the game's first win.
    pub win: Option<WinLine>,
}

/// Board occupancy plus turn state.
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    turn: TurnState,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for hosts that inject positions.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    pub fn next_mark(&self) -> Mark {
        self.turn.next_mark
    }

    pub fn has_win(&self) -> bool {
        self.turn.has_win
    }

    /// Replace the board with empty cells laid out on `geometry`.
    ///
    /// Occupancy is discarded; turn state is left untouched.
    pub fn rebuild(&mut self, geometry: &BoardGeometry) {
        self.board = Board::from_geometry(geometry);
    }

    /// Clear the win latch. `next_mark` carries over.
    pub fn clear_win(&mut self) {
        self.turn.has_win = false;
    }

    /// Attempt to put the current player's mark at `pos`.
    ///
    /// Win detection runs after every attempt that is not short-circuited by
    /// an already won game, including attempts on occupied cells.
    pub fn place(&mut self, pos: CellPos) -> Placement {
        if self.turn.has_win {
            return Placement {
                outcome: PlaceOutcome::GameOver,
                win: None,
            };
        }

        let outcome = if self.board.cell(pos).is_empty() {
            let mark = self.turn.next_mark;
            self.board.set_occupant(pos, mark);
            self.turn.next_mark = mark.toggled();
            PlaceOutcome::Placed(mark)
        } else {
            PlaceOutcome::Occupied
        };

        let win = self.board.check_win();
        if win.is_some() {
            self.turn.has_win = true;
        }

        Placement { outcome, win }
    }
}
