//! Noughts Core Library
//!
//! Platform-agnostic state and rules for an interactive tic-tac-toe board:
//! geometry, turn-taking, win detection, pointer handling and the win-line
//! animation. Drawing lives in `noughts-render`.

pub mod animation;
pub mod board;
pub mod config;
pub mod game;
pub mod geometry;
pub mod input;
pub mod mark;
pub mod widget;

pub use animation::{ValueAnimator, WIN_ANIMATION_DURATION, WinLineAnimation};
pub use board::{Board, Cell, WinLine};
pub use config::{ConfigError, ConfigResult, DEFAULT_TEXT_SIZE, SerializableColor, WidgetConfig};
pub use game::{Game, PlaceOutcome, Placement, TurnState};
pub use geometry::BoardGeometry;
pub use input::{DRAG_RESET_THRESHOLD, PointerEvent, TouchAction, TouchState};
pub use mark::{BOARD_DIM, CellPos, Mark};
pub use widget::{BoardWidget, Widget};
