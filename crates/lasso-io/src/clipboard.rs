use std::borrow::Cow;

use anyhow::{Context, Result};
use arboard::{Clipboard, ImageData};

pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("failed to open clipboard")?;
    clipboard
        .set_text(text.to_string())
        .context("failed to write text to clipboard")?;
    Ok(())
}

/// Put raw RGBA pixels on the clipboard, e.g. for pasting into a
/// reverse-image-search page.
pub fn copy_image(width: usize, height: usize, rgba: &[u8]) -> Result<()> {
    let mut clipboard = Clipboard::new().context("failed to open clipboard")?;
    clipboard
        .set_image(ImageData {
            width,
            height,
            bytes: Cow::Borrowed(rgba),
        })
        .context("failed to write image to clipboard")?;
    Ok(())
}

/// Decode a PNG and put its pixels on the clipboard.
pub fn copy_png(png_bytes: &[u8]) -> Result<()> {
    let decoded = image::load_from_memory(png_bytes)
        .context("decoding image for clipboard")?
        .to_rgba8();
    copy_image(
        decoded.width() as usize,
        decoded.height() as usize,
        decoded.as_raw(),
    )
}
