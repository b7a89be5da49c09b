//! Vello-based surface implementation.

use crate::renderer::{RenderResult, RendererError};
use crate::surface::{Surface, TextMetrics};
use kurbo::{Affine, BezPath, Line, Point, Rect, Stroke};
use parley::layout::{Layout, PositionedLayoutItem};
use parley::{FontContext, LayoutContext, StyleProperty};
use peniko::{Brush, Color, Fill};
use vello::Scene;

/// Surface that records the board into a Vello scene for GPU rendering.
///
/// Text is shaped with Parley using the system font collection.
pub struct VelloSurface {
    /// The Vello scene being built.
    scene: Scene,
    /// Font context for text shaping (cached across frames).
    font_cx: FontContext,
    /// Layout context for text shaping.
    layout_cx: LayoutContext<Brush>,
}

impl Default for VelloSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloSurface {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            font_cx: FontContext::new(),
            layout_cx: LayoutContext::new(),
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    /// Clear the scene before building a new frame.
    pub fn reset(&mut self) {
        self.scene.reset();
    }

    fn layout(&mut self, text: &str, size: f64, color: Color) -> Layout<Brush> {
        let mut builder = self.layout_cx.ranged_builder(&mut self.font_cx, text, 1.0, false);
        builder.push_default(StyleProperty::FontSize(size as f32));
        builder.push_default(StyleProperty::Brush(Brush::Solid(color)));
        let mut layout = builder.build(text);
        layout.break_all_lines(None);
        layout.align(None, parley::Alignment::Start, parley::AlignmentOptions::default());
        layout
    }
}

impl Surface for VelloSurface {
    fn stroke_line(&mut self, line: Line, width: f64, color: Color) {
        self.scene
            .stroke(&Stroke::new(width), Affine::IDENTITY, color, None, &line);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, color, None, &rect);
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, color: Color) {
        self.scene.stroke(stroke, Affine::IDENTITY, color, None, path);
    }

    fn measure_text(&mut self, text: &str, size: f64) -> TextMetrics {
        let layout = self.layout(text, size, Color::BLACK);
        let ascent = layout
            .lines()
            .next()
            .map(|line| line.metrics().ascent as f64)
            .unwrap_or(size * 0.8);
        TextMetrics {
            width: layout.width() as f64,
            ascent,
        }
    }

    fn draw_text(&mut self, text: &str, origin: Point, size: f64, color: Color) -> RenderResult<()> {
        let layout = self.layout(text, size, color);
        let brush = Brush::Solid(color);

        // Parley puts y=0 at the top of the layout; shift so the first
        // baseline lands on `origin`.
        let first_baseline = layout
            .lines()
            .next()
            .map(|line| line.metrics().baseline as f64)
            .unwrap_or(0.0);
        let transform = Affine::translate((origin.x, origin.y - first_baseline));

        let mut glyph_count = 0;
        for line in layout.lines() {
            for item in line.items() {
                let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };
                let mut x = glyph_run.offset();
                let y = glyph_run.baseline();
                let run = glyph_run.run();
                let font = run.font();
                let font_size = run.font_size();

                let glyphs: Vec<vello::Glyph> = glyph_run
                    .glyphs()
                    .map(|glyph| {
                        let gx = x + glyph.x;
                        let gy = y - glyph.y;
                        x += glyph.advance;
                        glyph_count += 1;
                        vello::Glyph {
                            id: glyph.id,
                            x: gx,
                            y: gy,
                        }
                    })
                    .collect();

                if !glyphs.is_empty() {
                    self.scene
                        .draw_glyphs(font)
                        .brush(&brush)
                        .hint(true)
                        .transform(transform)
                        .font_size(font_size)
                        .normalized_coords(run.normalized_coords())
                        .draw(Fill::NonZero, glyphs.into_iter());
                }
            }
        }

        if glyph_count == 0 {
            log::warn!("No glyphs shaped for {:?} at size {}", text, size);
            return Err(RendererError::Surface(format!(
                "no font could shape {:?}",
                text
            )));
        }
        Ok(())
    }
}
