//! Application state.
//!
//! The logo itself is stateless; the app only keeps the exporter (with its
//! loaded fonts), the font family for on-screen text and the result of the
//! last save attempt.

use super::export::{LogoExporter, SaveOutcome};
use super::painter::install_bold_font;
use eframe::egui;

/// The main application structure.
///
/// Implements `eframe::App`: paints the logo every frame and runs a save
/// when the "Save Logo" button is clicked.
pub struct LogoApp {
    /// Offscreen renderer used by the save button
    pub(crate) exporter: LogoExporter,
    /// How the most recent save attempt ended, if any
    pub(crate) last_save: Option<SaveOutcome>,
    /// Font family for on-screen logo text
    pub(crate) text_family: egui::FontFamily,
}

impl Default for LogoApp {
    /// Exports with the fonts installed on the system.
    fn default() -> Self {
        Self::with_exporter(LogoExporter::default())
    }
}

impl LogoApp {
    /// Creates an app that exports with the given exporter.
    pub fn with_exporter(exporter: LogoExporter) -> Self {
        Self {
            exporter,
            last_save: None,
            text_family: egui::FontFamily::Proportional,
        }
    }

    /// Registers the bold face used for on-screen text with `ctx`, using the
    /// exporter's font database so the window matches exported images.
    ///
    /// Returns the family now used for logo text.
    pub fn install_fonts(&mut self, ctx: &egui::Context) -> egui::FontFamily {
        self.text_family = install_bold_font(ctx, self.exporter.fontdb());
        self.text_family.clone()
    }

    /// How the most recent save attempt ended, if any.
    pub fn last_save(&self) -> Option<&SaveOutcome> {
        self.last_save.as_ref()
    }
}
