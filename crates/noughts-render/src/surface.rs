//! Drawing surface capability.

use crate::renderer::RenderResult;
use kurbo::{BezPath, Line, Point, Rect, Stroke};
use peniko::Color;

/// Measured extent of a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Advance width.
    pub width: f64,
    /// Distance from the baseline to the top of the font, as a positive number.
    pub ascent: f64,
}

/// The drawing primitives the board needs from a host platform.
///
/// All coordinates are in the widget's local pixel space.
pub trait Surface {
    /// Stroke a straight line.
    fn stroke_line(&mut self, line: Line, width: f64, color: Color);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke a path. The stroke carries width and dash pattern/offset.
    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, color: Color);

    /// Measure `text` at the given size.
    fn measure_text(&mut self, text: &str, size: f64) -> TextMetrics;

    /// Draw `text` with its baseline starting at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, size: f64, color: Color) -> RenderResult<()>;
}
