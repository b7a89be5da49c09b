//! Recording surface.
//!
//! Stores draw calls instead of rasterizing them. Useful for headless hosts
//! and for asserting on what a frame contains.

use crate::renderer::RenderResult;
use crate::surface::{Surface, TextMetrics};
use kurbo::{BezPath, Line, Point, Rect, Stroke};
use noughts_core::SerializableColor;
use peniko::Color;

/// Average glyph advance as a fraction of the font size.
const ADVANCE_PER_SIZE: f64 = 0.6;
/// Ascent as a fraction of the font size.
const ASCENT_PER_SIZE: f64 = 0.8;

/// A recorded draw call. Colors are stored as RGBA8.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        line: Line,
        width: f64,
        color: SerializableColor,
    },
    FillRect {
        rect: Rect,
        color: SerializableColor,
    },
    Path {
        path: BezPath,
        width: f64,
        dash_pattern: Vec<f64>,
        dash_offset: f64,
        color: SerializableColor,
    },
    Text {
        text: String,
        origin: Point,
        size: f64,
        color: SerializableColor,
    },
}

/// A surface that records draw calls in order.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Fixed-pitch text metrics; no font is consulted.
    pub fn approximate_metrics(text: &str, size: f64) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as f64 * size * ADVANCE_PER_SIZE,
            ascent: size * ASCENT_PER_SIZE,
        }
    }
}

impl Surface for DisplayList {
    fn stroke_line(&mut self, line: Line, width: f64, color: Color) {
        self.commands.push(DrawCommand::Line {
            line,
            width,
            color: color.into(),
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: color.into(),
        });
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, color: Color) {
        self.commands.push(DrawCommand::Path {
            path: path.clone(),
            width: stroke.width,
            dash_pattern: stroke.dash_pattern.iter().copied().collect(),
            dash_offset: stroke.dash_offset,
            color: color.into(),
        });
    }

    fn measure_text(&mut self, text: &str, size: f64) -> TextMetrics {
        Self::approximate_metrics(text, size)
    }

    fn draw_text(&mut self, text: &str, origin: Point, size: f64, color: Color) -> RenderResult<()> {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            origin,
            size,
            color: color.into(),
        });
        Ok(())
    }
}
