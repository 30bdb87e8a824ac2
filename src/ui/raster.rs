//! Offscreen drawing surface backed by a tiny-skia pixmap.
//!
//! Shapes are filled and stroked directly with tiny-skia. Text goes through
//! usvg, which shapes the glyphs with the loaded font database, and resvg,
//! which rasterizes them onto the same pixmap.

use crate::constants::{FONT_FAMILY, TEXT_ASCENT};
use crate::error::{ExportError, Result};
use crate::surface::DrawingSurface;
use crate::types::{Point, Rect, Rgb, TextStyle};
use std::sync::Arc;
use tiny_skia::{
    FillRule, GradientStop, LinearGradient, Paint, Path, PathBuilder, Pixmap, SpreadMode, Stroke,
    Transform,
};

/// A [`DrawingSurface`] that rasterizes into an owned [`Pixmap`].
pub struct RasterSurface {
    pixmap: Pixmap,
    fontdb: Arc<fontdb::Database>,
}

impl RasterSurface {
    /// Allocates a transparent `width` x `height` surface.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Surface`] when either dimension is zero or the
    /// pixmap is too large to allocate.
    pub fn new(width: u32, height: u32, fontdb: Arc<fontdb::Database>) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(ExportError::Surface { width, height })?;
        Ok(Self { pixmap, fontdb })
    }

    /// The rendered pixels.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Consumes the surface, returning the rendered pixels.
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Parses a one-line SVG document holding `text` with its baseline at `(x, baseline)`.
    fn text_tree(&self, text: &str, x: f32, baseline: f32, style: TextStyle) -> Option<usvg::Tree> {
        let Rgb { r, g, b } = style.color;
        let svg = format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}"><text x="{x}" y="{y}" font-family="{family}" font-weight="bold" font-size="{size}" fill="#{r:02x}{g:02x}{b:02x}">{text}</text></svg>"##,
            w = self.pixmap.width(),
            h = self.pixmap.height(),
            x = x,
            y = baseline,
            family = FONT_FAMILY,
            size = style.size_px,
            text = escape_xml(text),
        );

        let mut opt = usvg::Options::default();
        opt.fontdb = Arc::clone(&self.fontdb);
        match usvg::Tree::from_data(svg.as_bytes(), &opt) {
            Ok(tree) => Some(tree),
            Err(e) => {
                log::warn!("Failed to lay out text {:?}: {}", text, e);
                None
            }
        }
    }
}

fn solid(color: Rgb) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 255);
    paint.anti_alias = true;
    paint
}

fn skia_point(point: Point) -> tiny_skia::Point {
    tiny_skia::Point::from_xy(point.x, point.y)
}

fn oval(bounds: Rect) -> Option<Path> {
    if bounds.is_empty() {
        return None;
    }
    let rect = tiny_skia::Rect::from_xywh(bounds.x, bounds.y, bounds.width, bounds.height)?;
    PathBuilder::from_oval(rect)
}

impl DrawingSurface for RasterSurface {
    fn clear(&mut self, color: Rgb) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, 255));
    }

    fn fill_ellipse_gradient(&mut self, bounds: Rect, from: Rgb, to: Rgb) {
        let Some(path) = oval(bounds) else { return };
        let mut paint = solid(from);
        if let Some(shader) = LinearGradient::new(
            skia_point(bounds.min()),
            skia_point(bounds.max()),
            vec![
                GradientStop::new(0.0, tiny_skia::Color::from_rgba8(from.r, from.g, from.b, 255)),
                GradientStop::new(1.0, tiny_skia::Color::from_rgba8(to.r, to.g, to.b, 255)),
            ],
            SpreadMode::Pad,
            Transform::identity(),
        ) {
            paint.shader = shader;
        }
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    fn fill_ellipse(&mut self, bounds: Rect, color: Rgb) {
        let Some(path) = oval(bounds) else { return };
        self.pixmap
            .fill_path(&path, &solid(color), FillRule::Winding, Transform::identity(), None);
    }

    fn stroke_ellipse(&mut self, bounds: Rect, width: f32, color: Rgb) {
        let Some(path) = oval(bounds) else { return };
        let stroke = Stroke { width, ..Stroke::default() };
        self.pixmap
            .stroke_path(&path, &solid(color), &stroke, Transform::identity(), None);
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Rgb) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x, from.y);
        pb.line_to(to.x, to.y);
        let Some(path) = pb.finish() else { return };
        let stroke = Stroke { width, ..Stroke::default() };
        self.pixmap
            .stroke_path(&path, &solid(color), &stroke, Transform::identity(), None);
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgb) {
        let [first, rest @ ..] = points else { return };
        if rest.len() < 2 {
            return;
        }
        let mut pb = PathBuilder::new();
        pb.move_to(first.x, first.y);
        for p in rest {
            pb.line_to(p.x, p.y);
        }
        pb.close();
        let Some(path) = pb.finish() else { return };
        self.pixmap
            .fill_path(&path, &solid(color), FillRule::Winding, Transform::identity(), None);
    }

    /// Width of the shaped glyph outlines. Zero when no font matched.
    fn measure_text(&mut self, text: &str, style: TextStyle) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        match self.text_tree(text, 0.0, style.size_px, style) {
            Some(tree) if tree.root().has_children() => tree.root().bounding_box().width(),
            _ => 0.0,
        }
    }

    fn draw_text(&mut self, text: &str, top_left: Point, style: TextStyle) {
        if text.is_empty() {
            return;
        }
        let baseline = top_left.y + style.size_px * TEXT_ASCENT;
        let Some(tree) = self.text_tree(text, top_left.x, baseline, style) else {
            return;
        };
        if !tree.root().has_children() {
            log::debug!("No font available for {:?}; text skipped", text);
            return;
        }
        resvg::render(&tree, Transform::identity(), &mut self.pixmap.as_mut());
    }
}

fn escape_xml(input: &str) -> String {
    let mut s = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            '\'' => s.push_str("&apos;"),
            _ => s.push(ch),
        }
    }
    s
}
