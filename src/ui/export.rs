//! Export utilities: render the logo offscreen and save it as PNG or JPEG.
//!
//! The flow mirrors the save button: render first, then ask for a
//! destination, then encode and write. The user-facing parts (file dialog,
//! message boxes) sit behind [`SavePrompt`] so the flow itself can run
//! without a desktop session.

use super::raster::RasterSurface;
use crate::constants::{DEFAULT_FILE_NAME, JPEG_QUALITY};
use crate::error::{ExportError, Result};
use crate::renderer::render_logo;
use image::ImageEncoder;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tiny_skia::Pixmap;

/// Image formats offered by the save dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Lossless PNG
    Png,
    /// Baseline JPEG
    Jpeg,
}

impl ExportFormat {
    /// Picks the format implied by a destination path: PNG when the path
    /// ends in `.png` (exact case), JPEG for everything else.
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str().to_string_lossy().ends_with(".png") {
            ExportFormat::Png
        } else {
            ExportFormat::Jpeg
        }
    }

    /// Encodes `pixmap` into this format's file bytes.
    ///
    /// JPEG has no alpha channel, so pixels are un-premultiplied and the
    /// alpha dropped first.
    pub fn encode(self, pixmap: &Pixmap) -> Result<Vec<u8>> {
        match self {
            ExportFormat::Png => pixmap
                .encode_png()
                .map_err(|e| ExportError::Encode(e.to_string())),
            ExportFormat::Jpeg => {
                let mut rgb = Vec::with_capacity(pixmap.pixels().len() * 3);
                for pixel in pixmap.pixels() {
                    let c = pixel.demultiply();
                    rgb.extend_from_slice(&[c.red(), c.green(), c.blue()]);
                }
                let mut bytes = Vec::new();
                image::codecs::jpeg::JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY)
                    .write_image(
                        &rgb,
                        pixmap.width(),
                        pixmap.height(),
                        image::ExtendedColorType::Rgb8,
                    )?;
                Ok(bytes)
            }
        }
    }
}

/// How a save attempt ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// The image was written to the path in the given format
    Saved(PathBuf, ExportFormat),
    /// The user dismissed the dialog; nothing was written
    Cancelled,
    /// The attempt was aborted with the given message
    Failed(String),
}

/// The user-facing side of a save: choosing a file and hearing the result.
pub trait SavePrompt {
    /// Asks for a destination. `None` means the user cancelled.
    fn choose_destination(&mut self) -> Option<PathBuf>;

    /// Tells the user the image was written.
    fn report_saved(&mut self, path: &Path);

    /// Tells the user the save failed.
    fn report_failed(&mut self, error: &ExportError);
}

/// Native dialogs through `rfd`.
#[derive(Debug, Default)]
pub struct NativePrompt;

impl SavePrompt for NativePrompt {
    fn choose_destination(&mut self) -> Option<PathBuf> {
        let dialog = rfd::AsyncFileDialog::new()
            .add_filter("PNG Image", &["png"])
            .add_filter("JPEG Image", &["jpg"])
            .set_title("Save the Logo")
            .set_file_name(DEFAULT_FILE_NAME);
        futures::executor::block_on(dialog.save_file()).map(|handle| handle.path().to_path_buf())
    }

    fn report_saved(&mut self, _path: &Path) {
        let _ = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title("Success")
            .set_description("Logo saved successfully!")
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }

    fn report_failed(&mut self, error: &ExportError) {
        let _ = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title("Save failed")
            .set_description(format!("The logo could not be saved.\n\n{error}"))
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}

/// Renders the logo offscreen and writes it to image files.
pub struct LogoExporter {
    fontdb: Arc<fontdb::Database>,
}

impl Default for LogoExporter {
    /// Uses the fonts installed on the system.
    fn default() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        log::debug!("Loaded {} font faces for export", db.len());
        Self::with_fonts(Arc::new(db))
    }
}

impl LogoExporter {
    /// Creates an exporter that shapes text with `fontdb`.
    pub fn with_fonts(fontdb: Arc<fontdb::Database>) -> Self {
        Self { fontdb }
    }

    /// Font database used to shape text.
    pub(crate) fn fontdb(&self) -> &fontdb::Database {
        &self.fontdb
    }

    /// Renders the logo onto a fresh black `width` x `height` pixmap.
    pub fn render(&self, width: u32, height: u32) -> Result<Pixmap> {
        let mut surface = RasterSurface::new(width, height, Arc::clone(&self.fontdb))?;
        render_logo(&mut surface, width, height);
        Ok(surface.into_pixmap())
    }

    /// Renders, encodes and writes the logo to `path` without any prompt.
    ///
    /// The format follows [`ExportFormat::from_path`].
    pub fn export_to(&self, width: u32, height: u32, path: &Path) -> Result<ExportFormat> {
        let pixmap = self.render(width, height)?;
        write_image(&pixmap, path)
    }

    /// Runs one complete save attempt for a `width` x `height` canvas.
    ///
    /// The logo is rendered before the prompt is shown. Cancelling writes
    /// nothing and reports nothing. A failure is reported through `prompt`
    /// and aborts only this attempt. The pixmap is released when this
    /// returns, on every path.
    pub fn save(&self, width: u32, height: u32, prompt: &mut impl SavePrompt) -> SaveOutcome {
        let pixmap = match self.render(width, height) {
            Ok(pixmap) => pixmap,
            Err(e) => {
                log::warn!("Cannot render logo for export: {}", e);
                prompt.report_failed(&e);
                return SaveOutcome::Failed(e.to_string());
            }
        };

        let Some(path) = prompt.choose_destination() else {
            log::info!("Save cancelled");
            return SaveOutcome::Cancelled;
        };

        match write_image(&pixmap, &path) {
            Ok(format) => {
                log::info!("Logo saved to {} as {:?}", path.display(), format);
                prompt.report_saved(&path);
                SaveOutcome::Saved(path, format)
            }
            Err(e) => {
                log::error!("Failed to save logo to {}: {}", path.display(), e);
                prompt.report_failed(&e);
                SaveOutcome::Failed(e.to_string())
            }
        }
    }
}

fn write_image(pixmap: &Pixmap, path: &Path) -> Result<ExportFormat> {
    let format = ExportFormat::from_path(path);
    let bytes = format.encode(pixmap)?;
    std::fs::write(path, bytes)?;
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];

    /// Scripted prompt recording what the exporter told it.
    #[derive(Default)]
    struct ScriptedPrompt {
        destination: Option<PathBuf>,
        asked: bool,
        saved: Vec<PathBuf>,
        failures: Vec<String>,
    }

    impl ScriptedPrompt {
        fn choosing(path: PathBuf) -> Self {
            Self {
                destination: Some(path),
                ..Self::default()
            }
        }
    }

    impl SavePrompt for ScriptedPrompt {
        fn choose_destination(&mut self) -> Option<PathBuf> {
            self.asked = true;
            self.destination.clone()
        }
        fn report_saved(&mut self, path: &Path) {
            self.saved.push(path.to_path_buf());
        }
        fn report_failed(&mut self, error: &ExportError) {
            self.failures.push(error.to_string());
        }
    }

    fn exporter() -> LogoExporter {
        LogoExporter::with_fonts(Arc::new(fontdb::Database::new()))
    }

    /// A fresh scratch directory under the system temp dir.
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sphere_logo_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn format_follows_path_suffix() {
        assert_eq!(ExportFormat::from_path(Path::new("logo.png")), ExportFormat::Png);
        assert_eq!(ExportFormat::from_path(Path::new("/tmp/out/.png")), ExportFormat::Png);
        assert_eq!(ExportFormat::from_path(Path::new("/tmp/Logo.PNG")), ExportFormat::Jpeg);
        assert_eq!(ExportFormat::from_path(Path::new("logo.jpeg")), ExportFormat::Jpeg);
        assert_eq!(ExportFormat::from_path(Path::new("logo.jpg")), ExportFormat::Jpeg);
        assert_eq!(ExportFormat::from_path(Path::new("logo")), ExportFormat::Jpeg);
        assert_eq!(ExportFormat::from_path(Path::new("logo.png.jpg")), ExportFormat::Jpeg);
    }

    #[test]
    fn png_save_writes_png_magic() {
        let dir = scratch_dir("png");
        let path = dir.join("logo.png");
        let mut prompt = ScriptedPrompt::choosing(path.clone());

        let outcome = exporter().save(800, 800, &mut prompt);

        assert_eq!(outcome, SaveOutcome::Saved(path.clone(), ExportFormat::Png));
        assert_eq!(prompt.saved, vec![path.clone()]);
        assert!(prompt.failures.is_empty());
        let bytes = std::fs::read(&path).expect("read png");
        assert_eq!(&bytes[..8], &PNG_MAGIC);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn jpeg_save_writes_jpeg_magic() {
        let dir = scratch_dir("jpeg");
        let path = dir.join("logo.jpg");
        let mut prompt = ScriptedPrompt::choosing(path.clone());

        let outcome = exporter().save(400, 300, &mut prompt);

        assert_eq!(outcome, SaveOutcome::Saved(path.clone(), ExportFormat::Jpeg));
        let bytes = std::fs::read(&path).expect("read jpeg");
        assert_eq!(&bytes[..3], &JPEG_MAGIC);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn cancel_leaves_filesystem_untouched() {
        let dir = scratch_dir("cancel");
        let mut prompt = ScriptedPrompt::default();

        let outcome = exporter().save(800, 800, &mut prompt);

        assert_eq!(outcome, SaveOutcome::Cancelled);
        assert!(prompt.asked);
        assert!(prompt.saved.is_empty() && prompt.failures.is_empty());
        assert_eq!(std::fs::read_dir(&dir).expect("read dir").count(), 0);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn write_failure_is_reported_not_raised() {
        let dir = scratch_dir("missing");
        let path = dir.join("no_such_dir").join("logo.png");
        let mut prompt = ScriptedPrompt::choosing(path.clone());

        let outcome = exporter().save(200, 200, &mut prompt);

        assert!(matches!(outcome, SaveOutcome::Failed(_)));
        assert_eq!(prompt.failures.len(), 1);
        assert!(prompt.saved.is_empty());
        assert!(!path.exists());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn empty_canvas_fails_before_prompting() {
        let mut prompt = ScriptedPrompt::choosing(std::env::temp_dir().join("never.png"));

        let outcome = exporter().save(0, 800, &mut prompt);

        assert!(matches!(outcome, SaveOutcome::Failed(_)));
        assert!(!prompt.asked);
        assert_eq!(prompt.failures.len(), 1);
    }

    #[test]
    fn export_to_round_trips_through_decoder() {
        let dir = scratch_dir("export_to");
        let path = dir.join("logo.png");

        let format = exporter().export_to(320, 200, &path).expect("export");

        assert_eq!(format, ExportFormat::Png);
        let bytes = std::fs::read(&path).expect("read png");
        let decoded = Pixmap::decode_png(&bytes).expect("decode png");
        assert_eq!((decoded.width(), decoded.height()), (320, 200));
        assert_eq!(decoded.data(), exporter().render(320, 200).expect("render").data());
        let _ = std::fs::remove_dir_all(dir);
    }
}
