//! Board drawing.

use crate::surface::Surface;
use kurbo::{Point, Stroke};
use noughts_core::BoardWidget;
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Board geometry is stale; call prepare_frame before drawing")]
    StaleGeometry,
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The widget to draw.
    pub widget: &'a BoardWidget,
    /// Grid line and mark color.
    pub stroke_color: Color,
    /// Grid line width.
    pub grid_stroke_width: f64,
    /// Mark glyph size.
    pub text_size: f64,
    /// Touched cell fill.
    pub highlight_color: Color,
    /// Win line color.
    pub win_line_color: Color,
    /// Win line width.
    pub win_line_width: f64,
}

impl<'a> RenderContext<'a> {
    /// Create a render context styled from the widget's configuration.
    pub fn new(widget: &'a BoardWidget) -> Self {
        let config = widget.config();
        Self {
            widget,
            stroke_color: config.stroke(),
            grid_stroke_width: config.grid_stroke_width(),
            text_size: config.mark_text_size(),
            highlight_color: config.highlight(),
            win_line_color: config.win_line(),
            win_line_width: config.win_line_width,
        }
    }

    /// Override the grid/mark color.
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }

    /// Override the mark glyph size.
    pub fn with_text_size(mut self, size: f64) -> Self {
        self.text_size = size;
        self
    }
}

/// Draw the board onto `surface`.
///
/// Layers, bottom to top: touched-cell highlight, win line, grid, marks.
/// Only reads widget state; the geometry must already be up to date.
pub fn draw_board<S: Surface + ?Sized>(ctx: &RenderContext, surface: &mut S) -> RenderResult<()> {
    let widget = ctx.widget;
    if widget.is_geometry_dirty() {
        log::warn!("Skipping draw: board geometry is stale");
        return Err(RendererError::StaleGeometry);
    }
    let board = widget.board();

    if let Some(pos) = widget.touch().highlighted_cell() {
        surface.fill_rect(board.cell(pos).bounds, ctx.highlight_color);
    }

    let animation = widget.animation();
    if animation.is_running() {
        let stroke = Stroke::new(ctx.win_line_width)
            .with_dashes(animation.dash_offset(), animation.dash_pattern());
        surface.stroke_path(&animation.path(), &stroke, ctx.win_line_color);
    }

    let geometry = widget.geometry();
    for line in geometry.vertical_lines().into_iter().chain(geometry.horizontal_lines()) {
        surface.stroke_line(line, ctx.grid_stroke_width, ctx.stroke_color);
    }

    for (_, cell) in board.iter() {
        let symbol = cell.occupant.symbol();
        if symbol.is_empty() {
            continue;
        }
        let metrics = surface.measure_text(symbol, ctx.text_size);
        let center = cell.bounds.center();
        let origin = Point::new(
            center.x - metrics.width * 0.5,
            center.y + metrics.ascent * 0.5,
        );
        surface.draw_text(symbol, origin, ctx.text_size, ctx.stroke_color)?;
    }

    Ok(())
}

/// Bring the widget's geometry up to date, then draw it.
pub fn render_frame<S: Surface + ?Sized>(widget: &mut BoardWidget, surface: &mut S) -> RenderResult<()> {
    widget.prepare_frame();
    draw_board(&RenderContext::new(widget), surface)
}
