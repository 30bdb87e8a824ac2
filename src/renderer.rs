//! The logo drawing pipeline.
//!
//! [`render_logo`] issues the same ordered sequence of drawing calls against
//! any [`DrawingSurface`], which keeps the window and the exported image
//! identical.

use crate::constants::*;
use crate::layout::LogoLayout;
use crate::surface::DrawingSurface;
use crate::types::Point;

/// Draws the complete logo onto `surface`, sized `width` x `height` pixels.
///
/// Layers are painted back to front: background, sphere, nodes, ring links,
/// grid, keyhole, title, captions. A zero-sized canvas draws nothing.
///
/// # Arguments
///
/// * `surface` - The target receiving the drawing calls
/// * `width` - Canvas width in pixels
/// * `height` - Canvas height in pixels
pub fn render_logo<S: DrawingSurface + ?Sized>(surface: &mut S, width: u32, height: u32) {
    let layout = LogoLayout::compute(width, height);
    if layout.is_degenerate() {
        log::debug!("Skipping logo render for empty {}x{} canvas", width, height);
        return;
    }

    surface.clear(BACKGROUND);
    surface.fill_ellipse_gradient(layout.sphere, SPHERE_LIGHT, SPHERE_DARK);

    for index in 0..layout.nodes.len() {
        surface.fill_ellipse(layout.node_bounds(index), NODE_COLOR);
    }
    for &(from, to) in &layout.links {
        surface.stroke_line(from, to, LINK_WIDTH, LINK_COLOR);
    }

    for ellipse in layout.latitudes.iter().chain(&layout.longitudes) {
        surface.stroke_ellipse(*ellipse, GRID_WIDTH, GRID_COLOR);
    }

    surface.fill_ellipse(layout.keyhole.head, KEYHOLE_COLOR);
    surface.fill_polygon(&layout.keyhole.shank, KEYHOLE_COLOR);

    let title_width = surface.measure_text(TITLE_TEXT, layout.title_style);
    let title_pos = Point::new(layout.title_left(title_width), layout.title_top);
    surface.draw_text(TITLE_TEXT, title_pos, layout.title_style);

    // Captions keep their hand-tuned anchors instead of being measured.
    for caption in &layout.captions {
        surface.draw_text(caption.text, caption.top_left, caption.style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rect, Rgb, TextStyle};

    /// A drawing call as seen by [`RecordingSurface`].
    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear(Rgb),
        Gradient(Rect, Rgb, Rgb),
        FillEllipse(Rect, Rgb),
        StrokeEllipse(Rect, f32, Rgb),
        Line(Point, Point, f32, Rgb),
        Polygon(Vec<Point>, Rgb),
        Text(String, Point, TextStyle),
    }

    /// Records every call; text measures 10px per character.
    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<Op>,
    }

    impl DrawingSurface for RecordingSurface {
        fn clear(&mut self, color: Rgb) {
            self.ops.push(Op::Clear(color));
        }
        fn fill_ellipse_gradient(&mut self, bounds: Rect, from: Rgb, to: Rgb) {
            self.ops.push(Op::Gradient(bounds, from, to));
        }
        fn fill_ellipse(&mut self, bounds: Rect, color: Rgb) {
            self.ops.push(Op::FillEllipse(bounds, color));
        }
        fn stroke_ellipse(&mut self, bounds: Rect, width: f32, color: Rgb) {
            self.ops.push(Op::StrokeEllipse(bounds, width, color));
        }
        fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Rgb) {
            self.ops.push(Op::Line(from, to, width, color));
        }
        fn fill_polygon(&mut self, points: &[Point], color: Rgb) {
            self.ops.push(Op::Polygon(points.to_vec(), color));
        }
        fn measure_text(&mut self, text: &str, _style: TextStyle) -> f32 {
            text.chars().count() as f32 * 10.0
        }
        fn draw_text(&mut self, text: &str, top_left: Point, style: TextStyle) {
            self.ops.push(Op::Text(text.to_string(), top_left, style));
        }
    }

    fn record(width: u32, height: u32) -> Vec<Op> {
        let mut surface = RecordingSurface::default();
        render_logo(&mut surface, width, height);
        surface.ops
    }

    #[test]
    fn layers_are_drawn_back_to_front() {
        let ops = record(800, 800);
        // clear + sphere + 8 nodes + 8 links + 18 grid + head + shank + title + 3 captions
        assert_eq!(ops.len(), 1 + 1 + 8 + 8 + 18 + 2 + 1 + 3);

        assert_eq!(ops[0], Op::Clear(BACKGROUND));
        assert_eq!(
            ops[1],
            Op::Gradient(Rect::new(200.0, 200.0, 400.0, 400.0), SPHERE_LIGHT, SPHERE_DARK)
        );
        assert!(ops[2..10].iter().all(|op| matches!(op, Op::FillEllipse(_, c) if *c == NODE_COLOR)));
        assert!(ops[10..18].iter().all(|op| matches!(op, Op::Line(_, _, w, c) if *w == 2.0 && *c == LINK_COLOR)));
        assert!(ops[18..36].iter().all(|op| matches!(op, Op::StrokeEllipse(_, w, c) if *w == 2.0 && *c == GRID_COLOR)));
        assert!(matches!(&ops[36], Op::FillEllipse(r, c) if *r == Rect::new(370.0, 340.0, 60.0, 60.0) && *c == KEYHOLE_COLOR));
        assert!(matches!(&ops[37], Op::Polygon(points, c) if points.len() == 4 && *c == KEYHOLE_COLOR));
    }

    #[test]
    fn title_is_centered_with_measured_width() {
        let ops = record(800, 800);
        let title = ops
            .iter()
            .find_map(|op| match op {
                Op::Text(text, pos, _) if text == TITLE_TEXT => Some(*pos),
                _ => None,
            })
            .expect("title drawn");
        // 11 characters at 10px each
        assert_eq!(title, Point::new(400.0 - 55.0, 255.0));
    }

    #[test]
    fn captions_follow_title_in_order() {
        let ops = record(800, 800);
        let texts: Vec<&str> = ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(text, _, _) => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            texts,
            vec![TITLE_TEXT, "Secure Peer-to-Peer", "Hosted Encryption Record", "Exchange"]
        );
        assert!(matches!(ops.last(), Some(Op::Text(t, p, _)) if t == "Exchange" && *p == Point::new(340.0, 535.0)));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(record(800, 800), record(800, 800));
        assert_eq!(record(1, 1), record(1, 1));
    }

    #[test]
    fn empty_canvas_draws_nothing() {
        assert!(record(0, 0).is_empty());
        assert!(record(0, 600).is_empty());
        assert!(record(600, 0).is_empty());
    }

    #[test]
    fn widest_canvas_renders_without_panicking() {
        assert_eq!(record(u32::MAX, 1).len(), 42);
        assert_eq!(record(1, u32::MAX).len(), 42);
    }

    #[test]
    fn tiny_canvas_still_draws_full_pipeline() {
        assert_eq!(record(1, 1).len(), 42);
    }
}
