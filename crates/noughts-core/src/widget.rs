//! The interactive board widget.
//!
//! `BoardWidget` ties together the geometry model, game state, touch state
//! machine and win-line animation. The host drives it through the [`Widget`]
//! trait: layout changes, pointer events and animation frames come in; redraw
//! requests go out as a latched flag the host drains once per frame.

use crate::animation::WinLineAnimation;
use crate::board::{Board, WinLine};
use crate::config::WidgetConfig;
use crate::game::{Game, PlaceOutcome, TurnState};
use crate::geometry::BoardGeometry;
use crate::input::{PointerEvent, TouchAction, TouchState};
use crate::mark::{CellPos, Mark};
use kurbo::{Point, Size};
use std::time::Duration;

/// Host-facing capabilities of an interactive widget.
pub trait Widget {
    /// The host reports a new layout size.
    fn on_layout(&mut self, size: Size);

    /// Handle a pointer event in local coordinates.
    fn handle_pointer_event(&mut self, event: PointerEvent);

    /// Advance running animations by one frame of `dt`.
    fn advance_animation(&mut self, dt: Duration);

    /// Return and clear the pending redraw request.
    fn take_redraw_request(&mut self) -> bool;
}

/// A 3x3 tic-tac-toe board.
#[derive(Debug, Clone)]
pub struct BoardWidget {
    config: WidgetConfig,
    /// Last size reported by the host.
    size: Size,
    /// Geometry from the last rebuild.
    geometry: BoardGeometry,
    /// When set, the next frame rebuilds geometry and clears the board.
    geometry_dirty: bool,
    game: Game,
    touch: TouchState,
    animation: WinLineAnimation,
    redraw_requested: bool,
}

impl Default for BoardWidget {
    fn default() -> Self {
        Self::new(WidgetConfig::default())
    }
}

impl BoardWidget {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config,
            size: Size::ZERO,
            geometry: BoardGeometry::new(0.0),
            geometry_dirty: true,
            game: Game::new(),
            touch: TouchState::new(),
            animation: WinLineAnimation::new(),
            redraw_requested: false,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: WidgetConfig) {
        self.config = config;
        self.request_redraw();
    }

    /// Size the widget wants for a given available width: always square.
    pub fn measure(available_width: f64) -> Size {
        Size::new(available_width, available_width)
    }

    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    pub fn is_geometry_dirty(&self) -> bool {
        self.geometry_dirty
    }

    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Mutable board access, e.g. for loading a position.
    pub fn board_mut(&mut self) -> &mut Board {
        self.game.board_mut()
    }

    pub fn turn(&self) -> TurnState {
        self.game.turn()
    }

    pub fn next_mark(&self) -> Mark {
        self.game.next_mark()
    }

    pub fn has_win(&self) -> bool {
        self.game.has_win()
    }

    pub fn touch(&self) -> &TouchState {
        &self.touch
    }

    pub fn is_touching(&self) -> bool {
        self.touch.active
    }

    pub fn animation(&self) -> &WinLineAnimation {
        &self.animation
    }

    /// Rebuild geometry if it is stale. Call once before drawing a frame.
    ///
    /// A rebuild lays out fresh, empty cells; this is how a reset clears
    /// the board.
    pub fn prepare_frame(&mut self) {
        if self.geometry_dirty {
            self.rebuild_geometry();
        }
    }

    fn rebuild_geometry(&mut self) {
        self.geometry = BoardGeometry::from_size(self.size);
        self.game.rebuild(&self.geometry);
        self.geometry_dirty = false;
        log::debug!("Board geometry rebuilt for side {}", self.geometry.side());
    }

    /// Place the current player's mark at `pos`. A miss (`None`) is ignored.
    ///
    /// Starts the win-line animation when this placement wins the game.
    /// Stale geometry is rebuilt first, so a placement after a reset lands
    /// on the fresh board.
    pub fn place(&mut self, pos: Option<CellPos>) -> Option<PlaceOutcome> {
        self.prepare_frame();
        let Some(pos) = pos else {
            log::debug!("Touch outside the board");
            return None;
        };

        let placement = self.game.place(pos);
        match placement.outcome {
            PlaceOutcome::Placed(mark) => {
                log::debug!("{:?} placed at ({}, {})", mark, pos.row(), pos.col());
            }
            PlaceOutcome::Occupied => {
                log::debug!("Cell ({}, {}) already occupied", pos.row(), pos.col());
            }
            PlaceOutcome::GameOver => {}
        }

        if let Some(win) = placement.win {
            self.start_win_animation(win);
        }
        Some(placement.outcome)
    }

    /// Begin striking through the winning triple.
    ///
    /// Ignored if an animation is already running.
    pub fn start_win_animation(&mut self, win: WinLine) {
        let board = self.game.board();
        let from = board.cell_center(win.start);
        let to = board.cell_center(win.end);
        if self.animation.start(from, to) {
            log::info!(
                "Win from ({}, {}) to ({}, {})",
                win.start.row(),
                win.start.col(),
                win.end.row(),
                win.end.col()
            );
            self.request_redraw();
        }
    }

    /// Start a new game.
    ///
    /// Clears the touch, the win latch and the animation, and marks the
    /// geometry dirty so the next frame lays out an empty board. Whose turn
    /// it is carries over.
    pub fn reset(&mut self) {
        self.touch.active = false;
        self.geometry_dirty = true;
        self.animation = WinLineAnimation::new();
        self.game.clear_win();
        log::debug!("Board reset, {:?} to play", self.game.next_mark());
        self.request_redraw();
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    fn press(&mut self, position: Point) {
        self.prepare_frame();
        let cell = self.game.board().hit_test(position);
        self.touch.selected_cell = cell;
        self.place(cell);
        self.request_redraw();
    }
}

impl Widget for BoardWidget {
    fn on_layout(&mut self, size: Size) {
        if size == self.size && !self.geometry_dirty {
            return;
        }
        self.size = size;
        self.rebuild_geometry();
        self.request_redraw();
    }

    fn handle_pointer_event(&mut self, event: PointerEvent) {
        match self.touch.handle_pointer_event(event) {
            TouchAction::Press(position) => self.press(position),
            TouchAction::Reset => self.reset(),
            TouchAction::Release => self.request_redraw(),
            TouchAction::Ignore => {}
        }
    }

    fn advance_animation(&mut self, dt: Duration) {
        if self.animation.tick(dt) {
            self.request_redraw();
        }
    }

    fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> CellPos {
        CellPos::new(row, col).unwrap()
    }

    fn laid_out() -> BoardWidget {
        let mut widget = BoardWidget::default();
        widget.on_layout(Size::new(300.0, 300.0));
        widget.take_redraw_request();
        widget
    }

    fn tap(widget: &mut BoardWidget, row: usize, col: usize) {
        let position = Point::new(col as f64 * 100.0 + 50.0, row as f64 * 100.0 + 50.0);
        widget.handle_pointer_event(PointerEvent::Down { position });
        widget.handle_pointer_event(PointerEvent::Up { position });
    }

    #[test]
    fn test_layout_builds_geometry() {
        let widget = laid_out();
        assert!(!widget.is_geometry_dirty());
        assert!((widget.geometry().side() - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_layout_is_square() {
        let mut widget = BoardWidget::default();
        widget.on_layout(Size::new(240.0, 480.0));
        assert!((widget.geometry().side() - 240.0).abs() < f64::EPSILON);
        assert_eq!(BoardWidget::measure(240.0), Size::new(240.0, 240.0));
    }

    #[test]
    fn test_tap_places_and_requests_redraw() {
        let mut widget = laid_out();
        widget.handle_pointer_event(PointerEvent::Down {
            position: Point::new(150.0, 150.0),
        });
        assert!(widget.is_touching());
        assert_eq!(widget.touch().highlighted_cell(), Some(pos(1, 1)));
        assert_eq!(widget.board().occupant(pos(1, 1)), Mark::X);
        assert_eq!(widget.next_mark(), Mark::O);
        assert!(widget.take_redraw_request());
        assert!(!widget.take_redraw_request());

        widget.handle_pointer_event(PointerEvent::Up {
            position: Point::new(150.0, 150.0),
        });
        assert!(!widget.is_touching());
        assert!(widget.take_redraw_request());
    }

    #[test]
    fn test_miss_is_noop() {
        let mut widget = laid_out();
        widget.handle_pointer_event(PointerEvent::Down {
            position: Point::new(500.0, 500.0),
        });
        assert!(widget.is_touching());
        assert_eq!(widget.touch().selected_cell, None);
        assert_eq!(widget.next_mark(), Mark::X);
        assert!(widget.board().iter().all(|(_, cell)| cell.is_empty()));
    }

    #[test]
    fn test_touch_before_layout_misses() {
        let mut widget = BoardWidget::default();
        assert_eq!(widget.place(None), None);
        widget.handle_pointer_event(PointerEvent::Down {
            position: Point::new(0.0, 0.0),
        });
        assert_eq!(widget.next_mark(), Mark::X);
    }

    #[test]
    fn test_win_scenario_starts_animation() {
        let mut widget = laid_out();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
            tap(&mut widget, row, col);
        }
        assert!(!widget.has_win());
        assert!(!widget.animation().is_running());

        tap(&mut widget, 0, 2);
        assert!(widget.has_win());
        let anim = widget.animation();
        assert!(anim.is_running());
        assert_eq!(anim.line().p0, Point::new(50.0, 50.0));
        assert_eq!(anim.line().p1, Point::new(250.0, 50.0));
        assert!((anim.path_length() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_placement_after_win() {
        let mut widget = laid_out();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            tap(&mut widget, row, col);
        }
        let next = widget.next_mark();
        tap(&mut widget, 2, 0);
        assert_eq!(widget.board().occupant(pos(2, 0)), Mark::None);
        assert_eq!(widget.next_mark(), next);
    }

    #[test]
    fn test_animation_frames_request_redraw_and_latch() {
        let mut widget = laid_out();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            tap(&mut widget, row, col);
        }
        widget.take_redraw_request();

        widget.advance_animation(Duration::from_millis(300));
        assert!(widget.take_redraw_request());
        assert!((widget.animation().progress() - 0.5).abs() < 1e-9);

        widget.advance_animation(Duration::from_millis(300));
        assert!(widget.take_redraw_request());
        assert!(widget.animation().progress().abs() < f64::EPSILON);

        widget.advance_animation(Duration::from_millis(16));
        assert!(!widget.take_redraw_request());
        assert!(widget.animation().is_running());
    }

    #[test]
    fn test_reset_clears_win_and_board() {
        let mut widget = laid_out();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            tap(&mut widget, row, col);
        }
        widget.handle_pointer_event(PointerEvent::Down {
            position: Point::new(250.0, 250.0),
        });

        widget.reset();
        assert!(!widget.has_win());
        assert!(!widget.is_touching());
        assert!(!widget.animation().is_running());
        assert!(widget.is_geometry_dirty());
        assert!(widget.take_redraw_request());
        // Turn order carries over: X won, so O opens the next game.
        assert_eq!(widget.next_mark(), Mark::O);

        widget.prepare_frame();
        assert!(!widget.is_geometry_dirty());
        assert!(widget.board().iter().all(|(_, cell)| cell.is_empty()));

        tap(&mut widget, 1, 1);
        assert_eq!(widget.board().occupant(pos(1, 1)), Mark::O);
    }

    #[test]
    fn test_tap_after_reset_without_frame_plays_on_fresh_board() {
        let mut widget = laid_out();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            tap(&mut widget, row, col);
        }
        widget.reset();

        tap(&mut widget, 2, 0);
        assert!(!widget.has_win());
        assert!(!widget.animation().is_running());
        assert_eq!(widget.board().occupant(pos(2, 0)), Mark::O);
        assert_eq!(widget.board().occupant(pos(0, 0)), Mark::None);

        widget.prepare_frame();
        tap(&mut widget, 1, 1);
        assert_eq!(widget.board().occupant(pos(1, 1)), Mark::X);
        assert_eq!(widget.board().occupant(pos(2, 0)), Mark::O);
    }

    #[test]
    fn test_drag_triggers_single_reset() {
        let mut widget = laid_out();
        tap(&mut widget, 0, 0);
        widget.handle_pointer_event(PointerEvent::Down {
            position: Point::new(0.0, 150.0),
        });
        widget.handle_pointer_event(PointerEvent::Move {
            position: Point::new(0.0, 150.0),
        });
        assert!(!widget.is_geometry_dirty());

        widget.handle_pointer_event(PointerEvent::Move {
            position: Point::new(25.0, 150.0),
        });
        assert!(widget.is_geometry_dirty());
        assert!(!widget.is_touching());

        widget.prepare_frame();
        widget.handle_pointer_event(PointerEvent::Move {
            position: Point::new(30.0, 150.0),
        });
        assert!(!widget.is_geometry_dirty());
        assert!(widget.board().iter().all(|(_, cell)| cell.is_empty()));
    }

    #[test]
    fn test_resize_discards_marks() {
        let mut widget = laid_out();
        tap(&mut widget, 0, 0);
        widget.on_layout(Size::new(600.0, 600.0));
        assert!(widget.board().iter().all(|(_, cell)| cell.is_empty()));
        assert_eq!(widget.next_mark(), Mark::O);
        assert!((widget.board().cell(pos(2, 2)).bounds.x1 - 600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_same_layout_keeps_marks() {
        let mut widget = laid_out();
        tap(&mut widget, 0, 0);
        widget.on_layout(Size::new(300.0, 300.0));
        assert_eq!(widget.board().occupant(pos(0, 0)), Mark::X);
    }

    #[test]
    fn test_cancel_keeps_touch() {
        let mut widget = laid_out();
        widget.handle_pointer_event(PointerEvent::Down {
            position: Point::new(50.0, 50.0),
        });
        widget.take_redraw_request();
        widget.handle_pointer_event(PointerEvent::Cancel);
        assert!(widget.is_touching());
        assert!(!widget.take_redraw_request());
    }
}
