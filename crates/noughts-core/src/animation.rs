//! Win-line strike-through animation.

use kurbo::{BezPath, Line, Point};
use std::time::Duration;

/// How long the win line takes to draw itself.
pub const WIN_ANIMATION_DURATION: Duration = Duration::from_millis(600);

/// Linear interpolation of a value over a fixed duration.
///
/// The host's frame clock drives it by calling [`ValueAnimator::advance`]
/// with the time elapsed since the previous frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueAnimator {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
}

impl ValueAnimator {
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Current interpolated value.
    pub fn value(&self) -> f64 {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance the clock and return the new value, or `None` once finished.
    pub fn advance(&mut self, dt: Duration) -> Option<f64> {
        if self.is_finished() {
            return None;
        }
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        Some(self.value())
    }
}

/// Animation state for the line struck through a winning triple.
///
/// `progress` falls from 1 to 0. Stroking the path with a dash pattern of
/// `[length, length]` and an offset of `length * progress` reveals the line
/// from its start to its end.
#[derive(Debug, Clone, PartialEq)]
pub struct WinLineAnimation {
    line: Line,
    length: f64,
    progress: f64,
    running: bool,
    animator: ValueAnimator,
}

impl Default for WinLineAnimation {
    fn default() -> Self {
        Self {
            line: Line::new(Point::ZERO, Point::ZERO),
            length: 0.0,
            progress: 1.0,
            running: false,
            animator: ValueAnimator::new(1.0, 0.0, WIN_ANIMATION_DURATION),
        }
    }
}

impl WinLineAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin animating a line between two cell centers.
    ///
    /// Ignored while an animation is already running. Returns whether the
    /// animation started.
    pub fn start(&mut self, from: Point, to: Point) -> bool {
        if self.running {
            return false;
        }
        let line = Line::new(from, to);
        self.line = line;
        self.length = (to - from).hypot();
        self.progress = 1.0;
        self.animator = ValueAnimator::new(1.0, 0.0, WIN_ANIMATION_DURATION);
        self.running = true;
        true
    }

    /// Advance one frame. Returns `true` if progress changed and a redraw is due.
    ///
    /// `running` stays set after the animation completes; only a reset clears it.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.running {
            return false;
        }
        match self.animator.advance(dt) {
            Some(progress) => {
                self.progress = progress;
                log::trace!("Win line progress {:.3}", progress);
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the interpolation has reached its end value.
    pub fn is_complete(&self) -> bool {
        self.running && self.animator.is_finished()
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn line(&self) -> Line {
        self.line
    }

    pub fn path_length(&self) -> f64 {
        self.length
    }

    /// The straight path from the first to the last winning cell center.
    pub fn path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.line.p0);
        path.line_to(self.line.p1);
        path
    }

    /// Dash pattern for the current frame.
    pub fn dash_pattern(&self) -> [f64; 2] {
        [self.length, self.length]
    }

    /// Dash offset for the current frame.
    pub fn dash_offset(&self) -> f64 {
        self.length * self.progress
    }
}
