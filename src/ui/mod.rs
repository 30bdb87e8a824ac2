//! Window, drawing surfaces and export.
//!
//! # Module Organization
//!
//! - `state` - The `LogoApp` application struct
//! - `painter` - On-screen drawing surface over an egui painter
//! - `raster` - Offscreen drawing surface over a tiny-skia pixmap
//! - `export` - Save flow, image encoding and native dialogs

mod export;
mod painter;
mod raster;
mod state;


pub use export::{ExportFormat, LogoExporter, NativePrompt, SaveOutcome, SavePrompt};
pub use painter::EguiSurface;
pub use raster::RasterSurface;
pub use state::LogoApp;

use crate::constants::*;
use crate::renderer::render_logo;
use eframe::egui;

/// Whole-pixel size of a canvas rect, as used for both painting and export.
pub(crate) fn canvas_size(rect: egui::Rect) -> (u32, u32) {
    let dim = |v: f32| if v.is_finite() { v.round().max(0.0) as u32 } else { 0 };
    (dim(rect.width()), dim(rect.height()))
}

impl eframe::App for LogoApp {
    /// Main update function called by egui for each frame.
    ///
    /// Paints the logo and, when the save button was clicked, runs one save
    /// attempt with native dialogs on the UI thread.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.draw(ctx) {
            let (width, height) = canvas_size(ctx.input(|i| i.screen_rect()));
            log::debug!("Save requested for {}x{} canvas", width, height);
            let outcome = self.exporter.save(width, height, &mut NativePrompt);
            self.last_save = Some(outcome);
        }
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        let c = BACKGROUND;
        [c.r as f32 / 255.0, c.g as f32 / 255.0, c.b as f32 / 255.0, 1.0]
    }
}

impl LogoApp {
    /// Paints one frame: the logo across the whole client area, then the
    /// save bar docked over its bottom edge.
    ///
    /// Returns `true` when the save button was clicked this frame.
    pub fn draw(&mut self, ctx: &egui::Context) -> bool {
        let screen = ctx.input(|i| i.screen_rect());
        let (width, height) = canvas_size(screen);
        let background = ctx.layer_painter(egui::LayerId::background());
        let mut surface = EguiSurface::new(&background, screen).with_family(self.text_family.clone());
        render_logo(&mut surface, width, height);

        let mut clicked = false;
        egui::TopBottomPanel::bottom("save_bar")
            .exact_height(SAVE_BAR_HEIGHT)
            .frame(egui::Frame::NONE)
            .show_separator_line(false)
            .show(ctx, |ui| {
                let label = egui::RichText::new(SAVE_BUTTON_LABEL).color(egui::Color32::BLACK);
                let button = egui::Button::new(label)
                    .fill(painter::to_color32(SAVE_BUTTON_FILL))
                    .corner_radius(0.0);
                clicked = ui.add_sized(ui.available_size(), button).clicked();
            });
        clicked
    }
}
