//! Headless host for the board widget.

use kurbo::Point;
use noughts_core::{BoardWidget, ConfigError, PointerEvent, Widget, WidgetConfig};
use noughts_render::{DisplayList, RendererError, render_frame};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Render(#[from] RendererError),
}

/// Host settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Layout width reported to the widget.
    pub width: f64,
    /// Time between animation frames.
    pub frame_interval: Duration,
    pub widget: WidgetConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 300.0,
            frame_interval: Duration::from_millis(16),
            widget: WidgetConfig::default(),
        }
    }
}

impl AppConfig {
    /// Default settings with the widget configuration read from `path`.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        Ok(Self {
            widget: WidgetConfig::load(path)?,
            ..Self::default()
        })
    }
}

/// Drives a widget the way a windowing host would: layout, pointer events,
/// animation frames and redraws, with a recording surface in place of a window.
pub struct App {
    config: AppConfig,
    widget: BoardWidget,
    surface: DisplayList,
    frames: usize,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let widget = BoardWidget::new(config.widget.clone());
        Self {
            config,
            widget,
            surface: DisplayList::new(),
            frames: 0,
        }
    }

    pub fn widget(&self) -> &BoardWidget {
        &self.widget
    }

    /// The display list of the last drawn frame.
    pub fn surface(&self) -> &DisplayList {
        &self.surface
    }

    /// Number of frames drawn so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Report the window size to the widget and draw the first frame.
    pub fn start(&mut self) -> Result<(), AppError> {
        self.widget.on_layout(BoardWidget::measure(self.config.width));
        self.redraw_if_requested()
    }

    /// Deliver one pointer event and redraw if the widget asked for it.
    pub fn dispatch(&mut self, event: PointerEvent) -> Result<(), AppError> {
        self.widget.handle_pointer_event(event);
        self.redraw_if_requested()
    }

    /// Tap the center of a cell.
    pub fn tap(&mut self, row: usize, col: usize) -> Result<(), AppError> {
        let cell = self.config.width / 3.0;
        let position = Point::new((col as f64 + 0.5) * cell, (row as f64 + 0.5) * cell);
        self.dispatch(PointerEvent::Down { position })?;
        self.dispatch(PointerEvent::Up { position })
    }

    /// Tick the animation clock until the widget stops requesting redraws.
    pub fn run_animation(&mut self) -> Result<(), AppError> {
        loop {
            self.widget.advance_animation(self.config.frame_interval);
            if !self.widget.take_redraw_request() {
                return Ok(());
            }
            self.redraw()?;
        }
    }

    fn redraw_if_requested(&mut self) -> Result<(), AppError> {
        if self.widget.take_redraw_request() {
            self.redraw()?;
        }
        Ok(())
    }

    fn redraw(&mut self) -> Result<(), AppError> {
        self.surface.clear();
        render_frame(&mut self.widget, &mut self.surface)?;
        self.frames += 1;
        log::trace!("Frame {} with {} commands", self.frames, self.surface.commands().len());
        Ok(())
    }
}

/// Play a fixed game that X wins along the top row, then let the win line
/// finish drawing.
pub fn run_demo(app: &mut App) -> Result<(), AppError> {
    app.start()?;
    for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
        app.tap(row, col)?;
    }
    app.run_animation()
}
