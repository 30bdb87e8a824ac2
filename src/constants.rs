//! Shared application-wide constants.
//! Centralizes every fixed size, colour and string used to lay out the logo.

use crate::types::Rgb;

// Window
/// Title of the native window.
pub const WINDOW_TITLE: &str = "Sphere Logo Generator";
/// Initial inner size of the window in pixels.
pub const WINDOW_SIZE: [f32; 2] = [800.0, 800.0];
/// Height of the save bar docked to the bottom edge.
pub const SAVE_BAR_HEIGHT: f32 = 40.0;
/// Label of the only interactive control.
pub const SAVE_BUTTON_LABEL: &str = "Save Logo";
/// Fill of the save button (light gray).
pub const SAVE_BUTTON_FILL: Rgb = Rgb::new(211, 211, 211);

// Palette
/// Canvas background.
pub const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
/// Gradient start, top-left of the sphere (dodger blue).
pub const SPHERE_LIGHT: Rgb = Rgb::new(30, 144, 255);
/// Gradient end, bottom-right of the sphere (dark blue).
pub const SPHERE_DARK: Rgb = Rgb::new(0, 0, 139);
/// Orbiting node fill (orange).
pub const NODE_COLOR: Rgb = Rgb::new(255, 165, 0);
/// Ring connection stroke (light blue).
pub const LINK_COLOR: Rgb = Rgb::new(173, 216, 230);
/// Latitude/longitude grid stroke.
pub const GRID_COLOR: Rgb = Rgb::new(0, 0, 0);
/// Keyhole fill.
pub const KEYHOLE_COLOR: Rgb = Rgb::new(0, 0, 0);
/// Title and caption fill.
pub const TEXT_COLOR: Rgb = Rgb::new(255, 255, 255);

// Sphere and orbit
/// Radius of the gradient sphere.
pub const SPHERE_RADIUS: i32 = 200;
/// Distance from the canvas center to every orbiting node's center.
pub const ORBIT_RADIUS: f32 = 300.0;
/// Radius of an orbiting node.
pub const NODE_RADIUS: f32 = 20.0;
/// Number of nodes on the orbit, equally spaced.
pub const NODE_COUNT: usize = 8;
/// Stroke width of the ring connections.
pub const LINK_WIDTH: f32 = 2.0;

// Grid
/// Grid ellipses are placed at `i * SPHERE_RADIUS / GRID_DIVISIONS` for `i` in `-GRID_STEPS..=GRID_STEPS`.
pub const GRID_DIVISIONS: f32 = 5.0;
/// Steps either side of the equator/meridian (9 ellipses per axis).
pub const GRID_STEPS: i32 = 4;
/// Stroke width of the grid ellipses.
pub const GRID_WIDTH: f32 = 2.0;

// Keyhole
/// Radius of the keyhole's round head.
pub const KEYHOLE_CIRCLE_RADIUS: i32 = 30;
/// Distance from canvas center up to the top of the keyhole head.
pub const KEYHOLE_CIRCLE_TOP: i32 = 60;
/// Width of the trapezoid's top edge.
pub const KEYHOLE_WIDTH_TOP: i32 = 28;
/// Width of the trapezoid's bottom edge.
pub const KEYHOLE_WIDTH_BOTTOM: i32 = 55;
/// Distance from canvas center up to the trapezoid's top edge.
pub const KEYHOLE_TOP: i32 = 30;
/// Distance from canvas center down to the trapezoid's bottom edge.
pub const KEYHOLE_HEIGHT: i32 = 60;

// Text
/// Pixels per typographic point (96 DPI).
pub const PIXELS_PER_POINT: f32 = 96.0 / 72.0;
/// Title size in points.
pub const TITLE_FONT_PT: f32 = 24.0;
/// Caption size in points.
pub const CAPTION_FONT_PT: f32 = 12.0;
/// Title drawn centered near the top of the sphere.
pub const TITLE_TEXT: &str = "S.P.H.E.R.E";
/// Offset of the title's top edge below the top of the sphere.
pub const TITLE_OFFSET: i32 = 55;
/// Caption lines with their hand-tuned `(dx, dy)` anchors, relative to
/// `(center.x, center.y + SPHERE_RADIUS)`.
pub const CAPTIONS: [(&str, i32, i32); 3] = [
    ("Secure Peer-to-Peer", -121, -125),
    ("Hosted Encryption Record", -156, -95),
    ("Exchange", -60, -65),
];

// Export
/// Font families tried, in order, when rasterizing text for export.
pub const FONT_FAMILY: &str = "Arial, 'Liberation Sans', 'DejaVu Sans', sans-serif";
/// Named families tried, in order, for the bold on-screen face; the system sans-serif follows.
pub const BOLD_FONT_NAMES: [&str; 3] = ["Arial", "Liberation Sans", "DejaVu Sans"];
/// Distance from the top of a text line to its baseline, as a fraction of the font size.
pub const TEXT_ASCENT: f32 = 0.905;
/// JPEG encoder quality (1-100).
pub const JPEG_QUALITY: u8 = 90;
/// File name suggested by the save dialog.
pub const DEFAULT_FILE_NAME: &str = "logo.png";
