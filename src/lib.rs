//! # Sphere Logo
//!
//! A single-window desktop application that procedurally draws the
//! S.P.H.E.R.E logo and exports it as an image. The logo is composed of:
//! - **Sphere**: a diagonal blue gradient disc with a latitude/longitude grid
//! - **Orbit**: eight orange nodes on a ring, joined by light-blue links
//! - **Keyhole**: a black silhouette at the sphere's center
//! - **Text**: a centered title and three caption lines
//!
//! ## Features
//! - One drawing routine shared by the window and the exported image
//! - PNG or JPEG export through a native save dialog
//! - Deterministic output: the same canvas size always yields the same pixels

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
mod error;
pub mod layout;
mod renderer;
mod surface;
mod types;
mod ui;

// Re-export public types and functions
pub use error::{ExportError, Result};
pub use layout::LogoLayout;
pub use renderer::render_logo;
pub use surface::DrawingSurface;
pub use types::*;
pub use ui::{
    EguiSurface, ExportFormat, LogoApp, LogoExporter, NativePrompt, RasterSurface, SaveOutcome,
    SavePrompt,
};

use eframe::egui;

/// Runs the logo application with its fixed window settings.
///
/// This function opens an 800x800 window and starts the main event loop.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// use sphere_logo::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> std::result::Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(constants::WINDOW_TITLE)
            .with_inner_size(constants::WINDOW_SIZE),
        ..Default::default()
    };
    eframe::run_native(
        constants::WINDOW_TITLE,
        options,
        Box::new(|cc| {
            let mut app = LogoApp::default();
            app.install_fonts(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_default_window() {
        let size = constants::WINDOW_SIZE;
        let layout = LogoLayout::compute(size[0] as u32, size[1] as u32);
        assert_eq!(layout.center, Point::new(400.0, 400.0));
        assert_eq!(layout.title_top, 255.0);
    }

    #[test]
    fn test_export_error_messages() {
        let err = ExportError::Surface { width: 0, height: 5 };
        assert_eq!(err.to_string(), "Cannot create a 0x5 image surface");
        let err = ExportError::from(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(err.to_string(), "Failed to write file: denied");
    }
}
