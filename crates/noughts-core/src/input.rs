//! Pointer/touch state machine.

use crate::mark::CellPos;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Horizontal distance between two consecutive move samples that resets the board.
pub const DRAG_RESET_THRESHOLD: f64 = 20.0;

/// Initial value of the last sampled x coordinate before any move arrives.
const NO_SAMPLE_X: f64 = -1.0;

/// Pointer events in the widget's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
    Cancel,
}

/// What the widget should do in response to a pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchAction {
    /// A touch began at this point; hit-test and place.
    Press(Point),
    /// A drag crossed the reset threshold.
    Reset,
    /// The touch ended.
    Release,
    /// Nothing to do.
    Ignore,
}

/// Tracks an in-progress touch.
///
/// `Idle -> Touching` on down, `Touching -> Idle` on up. A move whose x
/// coordinate advanced by at least [`DRAG_RESET_THRESHOLD`] since the previous
/// sample requests a reset. The comparison is against the previous sample,
/// not the gesture origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchState {
    /// Whether a pointer is currently down.
    pub active: bool,
    /// Cell under the pointer at touch-down, if any.
    pub selected_cell: Option<CellPos>,
    /// x coordinate of the previous move sample.
    pub last_sample_x: f64,
}

impl Default for TouchState {
    fn default() -> Self {
        Self {
            active: false,
            selected_cell: None,
            last_sample_x: NO_SAMPLE_X,
        }
    }
}

impl TouchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the state machine by one event.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> TouchAction {
        match event {
            PointerEvent::Down { position } => {
                self.active = true;
                TouchAction::Press(position)
            }
            PointerEvent::Move { position } => {
                let crossed = position.x - self.last_sample_x >= DRAG_RESET_THRESHOLD;
                self.last_sample_x = position.x;
                if crossed {
                    TouchAction::Reset
                } else {
                    TouchAction::Ignore
                }
            }
            PointerEvent::Up { .. } => {
                self.active = false;
                TouchAction::Release
            }
            PointerEvent::Cancel => TouchAction::Ignore,
        }
    }

    /// The cell to highlight, if a touch is in progress over one.
    pub fn highlighted_cell(&self) -> Option<CellPos> {
        if self.active { self.selected_cell } else { None }
    }
}
