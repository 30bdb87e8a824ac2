//! Logo geometry.
//!
//! Every coordinate the renderer needs is derived here from the canvas size
//! alone. Nothing is cached between calls: the same size always produces the
//! same layout.

use crate::constants::*;
use crate::types::{Point, Rect, TextStyle};
use std::f32::consts::PI;

/// A single line of text and where its top-left corner goes.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAnchor {
    /// The text to draw
    pub text: &'static str,
    /// Top-left corner of the text's layout box
    pub top_left: Point,
    /// Font size and colour
    pub style: TextStyle,
}

/// The keyhole silhouette: a round head over a trapezoid shank.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyhole {
    /// Bounding square of the round head
    pub head: Rect,
    /// Trapezoid corners, clockwise from top-left
    pub shank: [Point; 4],
}

/// All derived geometry for one canvas size.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoLayout {
    /// Canvas width the layout was computed for
    pub width: u32,
    /// Canvas height the layout was computed for
    pub height: u32,
    /// Canvas center (integer-divided canvas size)
    pub center: Point,
    /// Bounding box of the gradient sphere
    pub sphere: Rect,
    /// Centers of the orbiting nodes, in angle order
    pub nodes: Vec<Point>,
    /// Ring connections between consecutive node centers
    pub links: Vec<(Point, Point)>,
    /// Horizontal grid ellipses, top to bottom
    pub latitudes: Vec<Rect>,
    /// Vertical grid ellipses, left to right
    pub longitudes: Vec<Rect>,
    /// Keyhole silhouette
    pub keyhole: Keyhole,
    /// Font style of the centered title
    pub title_style: TextStyle,
    /// Top edge of the title; its x depends on the measured width
    pub title_top: f32,
    /// Left-anchored caption lines
    pub captions: Vec<TextAnchor>,
}

impl LogoLayout {
    /// Computes the layout for a `width` x `height` canvas.
    pub fn compute(width: u32, height: u32) -> Self {
        // Widened so constant offsets never overflow for any u32 canvas.
        let cx = i64::from(width / 2);
        let cy = i64::from(height / 2);
        let center = Point::new(cx as f32, cy as f32);
        let radius = SPHERE_RADIUS as f32;

        let nodes = node_centers(center);
        let links = (0..NODE_COUNT)
            .map(|i| (nodes[i], nodes[(i + 1) % NODE_COUNT]))
            .collect();

        let latitudes = grid_extents()
            .map(|(offset, extent)| {
                Rect::new(center.x - radius, center.y + offset - extent / 2.0, radius * 2.0, extent)
            })
            .collect();
        let longitudes = grid_extents()
            .map(|(offset, extent)| {
                Rect::new(center.x + offset - extent / 2.0, center.y - radius, extent, radius * 2.0)
            })
            .collect();

        let head_r = KEYHOLE_CIRCLE_RADIUS;
        let keyhole = Keyhole {
            head: Rect::new(
                offset(cx, -head_r),
                offset(cy, -KEYHOLE_CIRCLE_TOP),
                (head_r * 2) as f32,
                (head_r * 2) as f32,
            ),
            shank: [
                Point::new(offset(cx, -KEYHOLE_WIDTH_TOP / 2), offset(cy, -KEYHOLE_TOP)),
                Point::new(offset(cx, KEYHOLE_WIDTH_TOP / 2), offset(cy, -KEYHOLE_TOP)),
                Point::new(offset(cx, KEYHOLE_WIDTH_BOTTOM / 2), offset(cy, KEYHOLE_HEIGHT)),
                Point::new(offset(cx, -KEYHOLE_WIDTH_BOTTOM / 2), offset(cy, KEYHOLE_HEIGHT)),
            ],
        };

        let caption_style = TextStyle::new(CAPTION_FONT_PT * PIXELS_PER_POINT, TEXT_COLOR);
        let captions = CAPTIONS
            .iter()
            .map(|&(text, dx, dy)| TextAnchor {
                text,
                top_left: Point::new(offset(cx, dx), offset(cy, SPHERE_RADIUS + dy)),
                style: caption_style,
            })
            .collect();

        Self {
            width,
            height,
            center,
            sphere: Rect::around_circle(center, radius),
            nodes,
            links,
            latitudes,
            longitudes,
            keyhole,
            title_style: TextStyle::new(TITLE_FONT_PT * PIXELS_PER_POINT, TEXT_COLOR),
            title_top: offset(cy, TITLE_OFFSET - SPHERE_RADIUS),
            captions,
        }
    }

    /// Whether the canvas has no drawable area.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Bounding square of orbiting node `index`.
    pub fn node_bounds(&self, index: usize) -> Rect {
        Rect::around_circle(self.nodes[index], NODE_RADIUS)
    }

    /// Left edge that horizontally centers a title of `measured_width` pixels.
    pub fn title_left(&self, measured_width: f32) -> f32 {
        self.center.x - measured_width / 2.0
    }
}

/// `base + delta` as a canvas coordinate.
fn offset(base: i64, delta: i32) -> f32 {
    (base + i64::from(delta)) as f32
}

fn node_centers(center: Point) -> Vec<Point> {
    (0..NODE_COUNT)
        .map(|i| {
            let angle = i as f32 * 2.0 * PI / NODE_COUNT as f32;
            Point::new(
                center.x + ORBIT_RADIUS * angle.cos(),
                center.y + ORBIT_RADIUS * angle.sin(),
            )
        })
        .collect()
}

/// `(offset, extent)` pairs for the grid ellipses. Extents shrink linearly
/// towards the sphere's rim; non-positive extents are dropped.
fn grid_extents() -> impl Iterator<Item = (f32, f32)> {
    let radius = SPHERE_RADIUS as f32;
    (-GRID_STEPS..=GRID_STEPS).filter_map(move |i| {
        let offset = i as f32 * (radius / GRID_DIVISIONS);
        let extent = radius * 2.0 - offset.abs() * 2.0;
        (extent > 0.0).then_some((offset, extent))
    })
}
