//! On-screen drawing surface backed by an egui painter.

use crate::constants::BOLD_FONT_NAMES;
use crate::surface::DrawingSurface;
use crate::types::{Point, Rect, Rgb, TextStyle};
use eframe::egui;

/// Number of rim vertices used to approximate the gradient-filled ellipse.
const GRADIENT_SEGMENTS: usize = 96;

/// Name under which the bold logo face is registered with egui.
const BOLD_FAMILY: &str = "logo-bold";

/// Converts a logo colour into an egui colour.
pub(crate) fn to_color32(color: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

/// Registers a bold sans-serif face from `db` with egui.
///
/// Returns the family logo text should be drawn with: the registered bold
/// family, or egui's proportional family when no face matched. The fonts
/// take effect from the next pass of `ctx`.
pub(crate) fn install_bold_font(ctx: &egui::Context, db: &fontdb::Database) -> egui::FontFamily {
    let mut families: Vec<fontdb::Family> =
        BOLD_FONT_NAMES.iter().map(|&name| fontdb::Family::Name(name)).collect();
    families.push(fontdb::Family::SansSerif);
    let query = fontdb::Query {
        families: &families,
        weight: fontdb::Weight::BOLD,
        ..fontdb::Query::default()
    };
    let face = db
        .query(&query)
        .and_then(|id| db.with_face_data(id, |data, index| (data.to_vec(), index)));
    let Some((bytes, index)) = face else {
        log::warn!("No bold sans-serif face found; on-screen text uses the default font");
        return egui::FontFamily::Proportional;
    };

    let mut data = egui::FontData::from_owned(bytes);
    data.index = index;
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(BOLD_FAMILY.to_owned(), std::sync::Arc::new(data));

    // Fall back to the built-in faces for glyphs the bold face lacks.
    let mut chain = vec![BOLD_FAMILY.to_owned()];
    chain.extend(
        fonts
            .families
            .get(&egui::FontFamily::Proportional)
            .cloned()
            .unwrap_or_default(),
    );
    let family = egui::FontFamily::Name(BOLD_FAMILY.into());
    fonts.families.insert(family.clone(), chain);
    ctx.set_fonts(fonts);
    log::debug!("Registered bold face #{} for on-screen text", index);
    family
}

/// A [`DrawingSurface`] that forwards drawing calls to an [`egui::Painter`].
///
/// Canvas coordinates are offset by `origin`, the top-left corner of the
/// region being painted, so the logo can be placed anywhere on screen.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    size: egui::Vec2,
    family: egui::FontFamily,
}

impl<'a> EguiSurface<'a> {
    /// Wraps `painter`, treating `canvas` as the drawable region.
    pub fn new(painter: &'a egui::Painter, canvas: egui::Rect) -> Self {
        Self {
            painter,
            origin: canvas.min,
            size: canvas.size(),
            family: egui::FontFamily::Proportional,
        }
    }

    /// Draws and measures text with `family` instead of the proportional font.
    pub fn with_family(mut self, family: egui::FontFamily) -> Self {
        self.family = family;
        self
    }

    fn pos(&self, point: Point) -> egui::Pos2 {
        self.origin + egui::vec2(point.x, point.y)
    }

    fn center_and_radius(&self, bounds: Rect) -> (egui::Pos2, egui::Vec2) {
        let center = self.pos(bounds.center());
        (center, egui::vec2(bounds.width / 2.0, bounds.height / 2.0))
    }

    fn font(&self, style: TextStyle) -> egui::FontId {
        egui::FontId::new(style.size_px, self.family.clone())
    }
}

impl DrawingSurface for EguiSurface<'_> {
    fn clear(&mut self, color: Rgb) {
        let rect = egui::Rect::from_min_size(self.origin, self.size);
        self.painter.rect_filled(rect, 0.0, to_color32(color));
    }

    /// Builds a triangle fan whose vertex colours are projected onto the
    /// top-left to bottom-right diagonal. Colours interpolate linearly across
    /// each triangle, so the fan reproduces a linear gradient exactly.
    fn fill_ellipse_gradient(&mut self, bounds: Rect, from: Rgb, to: Rgb) {
        if bounds.is_empty() {
            return;
        }
        let diagonal = (bounds.width, bounds.height);
        let length_sq = diagonal.0 * diagonal.0 + diagonal.1 * diagonal.1;
        let color_at = |p: Point| {
            let t = ((p.x - bounds.x) * diagonal.0 + (p.y - bounds.y) * diagonal.1) / length_sq;
            to_color32(from.lerp(to, t))
        };

        let center = bounds.center();
        let (rx, ry) = (bounds.width / 2.0, bounds.height / 2.0);
        let mut mesh = egui::Mesh::default();
        mesh.colored_vertex(self.pos(center), color_at(center));
        for i in 0..GRADIENT_SEGMENTS {
            let angle = i as f32 / GRADIENT_SEGMENTS as f32 * std::f32::consts::TAU;
            let rim = Point::new(center.x + rx * angle.cos(), center.y + ry * angle.sin());
            mesh.colored_vertex(self.pos(rim), color_at(rim));
        }
        for i in 0..GRADIENT_SEGMENTS as u32 {
            let next = (i + 1) % GRADIENT_SEGMENTS as u32;
            mesh.add_triangle(0, i + 1, next + 1);
        }
        self.painter.add(egui::Shape::mesh(mesh));
    }

    fn fill_ellipse(&mut self, bounds: Rect, color: Rgb) {
        if bounds.is_empty() {
            return;
        }
        let (center, radius) = self.center_and_radius(bounds);
        self.painter
            .add(egui::Shape::ellipse_filled(center, radius, to_color32(color)));
    }

    fn stroke_ellipse(&mut self, bounds: Rect, width: f32, color: Rgb) {
        if bounds.is_empty() {
            return;
        }
        let (center, radius) = self.center_and_radius(bounds);
        let stroke = egui::Stroke::new(width, to_color32(color));
        self.painter
            .add(egui::Shape::ellipse_stroke(center, radius, stroke));
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Rgb) {
        let stroke = egui::Stroke::new(width, to_color32(color));
        self.painter
            .line_segment([self.pos(from), self.pos(to)], stroke);
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgb) {
        if points.len() < 3 {
            return;
        }
        let points = points.iter().map(|p| self.pos(*p)).collect();
        self.painter.add(egui::Shape::convex_polygon(
            points,
            to_color32(color),
            egui::Stroke::NONE,
        ));
    }

    fn measure_text(&mut self, text: &str, style: TextStyle) -> f32 {
        self.painter
            .layout_no_wrap(text.to_owned(), self.font(style), to_color32(style.color))
            .size()
            .x
    }

    fn draw_text(&mut self, text: &str, top_left: Point, style: TextStyle) {
        if text.is_empty() {
            return;
        }
        self.painter.text(
            self.pos(top_left),
            egui::Align2::LEFT_TOP,
            text,
            self.font(style),
            to_color32(style.color),
        );
    }
}
