use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::codecs::jpeg::JpegEncoder;

const JPEG_QUALITY: u8 = 90;

#[derive(Debug)]
pub struct SavedCapture {
    pub image_path: PathBuf,
    pub text_path: Option<PathBuf>,
}

/// Where captures land: a subfolder of the user's documents directory.
pub fn default_save_dir() -> Result<PathBuf> {
    Ok(dirs::document_dir()
        .context("no documents directory for this user")?
        .join("Lasso"))
}

/// Write the capture as a timestamped JPEG plus a companion `.txt` with
/// the recognized text (skipped when the text is empty).
pub fn save_capture(dir: &Path, png_bytes: &[u8], text: &str) -> Result<SavedCapture> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let stamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S");
    let image_path = dir.join(format!("capture_{stamp}.jpg"));

    let decoded = image::load_from_memory(png_bytes).context("decoding captured image")?;
    let file = File::create(&image_path)
        .with_context(|| format!("creating {}", image_path.display()))?;
    let encoder = JpegEncoder::new_with_quality(BufWriter::new(file), JPEG_QUALITY);
    // JPEG has no alpha channel.
    decoded
        .to_rgb8()
        .write_with_encoder(encoder)
        .context("encoding JPEG")?;

    let text_path = if text.trim().is_empty() {
        None
    } else {
        let path = image_path.with_extension("txt");
        fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
        Some(path)
    };

    tracing::info!(image = %image_path.display(), "capture saved");
    Ok(SavedCapture {
        image_path,
        text_path,
    })
}
