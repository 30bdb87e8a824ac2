//! The drawing capability shared by the on-screen and offscreen targets.

use crate::types::{Point, Rect, Rgb, TextStyle};

/// A target the logo can be drawn onto.
///
/// Implemented once over an egui painter for the window and once over a
/// raster pixmap for export. Shapes are drawn in call order, so later calls
/// cover earlier ones. Implementations must tolerate degenerate input
/// (empty rectangles, zero-length lines, empty text) without panicking.
pub trait DrawingSurface {
    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Rgb);

    /// Fills the ellipse inscribed in `bounds` with a linear gradient running
    /// from `from` at the top-left corner of `bounds` to `to` at its
    /// bottom-right corner.
    fn fill_ellipse_gradient(&mut self, bounds: Rect, from: Rgb, to: Rgb);

    /// Fills the ellipse inscribed in `bounds`.
    fn fill_ellipse(&mut self, bounds: Rect, color: Rgb);

    /// Outlines the ellipse inscribed in `bounds`.
    fn stroke_ellipse(&mut self, bounds: Rect, width: f32, color: Rgb);

    /// Draws a straight line segment.
    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Rgb);

    /// Fills a convex polygon.
    fn fill_polygon(&mut self, points: &[Point], color: Rgb);

    /// Width in pixels `text` would occupy when drawn with `style`.
    fn measure_text(&mut self, text: &str, style: TextStyle) -> f32;

    /// Draws `text` with its layout box's top-left corner at `top_left`.
    fn draw_text(&mut self, text: &str, top_left: Point, style: TextStyle);
}
