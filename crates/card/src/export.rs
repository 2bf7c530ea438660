//! Encoding and persisting rendered cards.

use crate::error::Result;
use image::{DynamicImage, ImageOutputFormat, RgbaImage};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// JPEG quality used for saved and shared cards
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Sub-directory of the pictures directory that receives saved cards
pub const GALLERY_DIR: &str = "DilSeQuotes";

/// File name of the share temp file, relative to `<cache>/images`
pub const SHARE_FILE: &str = "quote_share.jpg";

/// Output encoding for a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Lossy JPEG with the given quality (1-100)
    Jpeg(u8),
    /// Lossless PNG
    Png,
}

impl Default for ExportFormat {
    fn default() -> Self {
        Self::Jpeg(DEFAULT_JPEG_QUALITY)
    }
}

/// Encode an image to bytes.
pub fn encode(image: &RgbaImage, format: ExportFormat) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());

    match format {
        // JPEG has no alpha channel
        ExportFormat::Jpeg(quality) => {
            let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
            DynamicImage::ImageRgb8(rgb)
                .write_to(&mut buffer, ImageOutputFormat::Jpeg(quality.clamp(1, 100)))?;
        }
        ExportFormat::Png => {
            DynamicImage::ImageRgba8(image.clone())
                .write_to(&mut buffer, ImageOutputFormat::Png)?;
        }
    }

    Ok(buffer.into_inner())
}

/// Save a card to `<pictures_dir>/DilSeQuotes/DilSeQuote_<millis>.jpg`.
///
/// Directories are created as needed. Returns the written path.
pub fn save_to_gallery(image: &RgbaImage, pictures_dir: &Path, quality: u8) -> Result<PathBuf> {
    let dir = pictures_dir.join(GALLERY_DIR);
    let file_name = format!("DilSeQuote_{}.jpg", chrono::Utc::now().timestamp_millis());
    let path = dir.join(file_name);

    write_jpeg(image, &path, quality)?;
    tracing::info!(path = %path.display(), "Card saved to gallery");
    Ok(path)
}

/// Write the share temp file `<cache_dir>/images/quote_share.jpg`,
/// replacing any previous one. Returns the written path.
pub fn write_share_file(image: &RgbaImage, cache_dir: &Path, quality: u8) -> Result<PathBuf> {
    let path = cache_dir.join("images").join(SHARE_FILE);

    write_jpeg(image, &path, quality)?;
    tracing::debug!(path = %path.display(), "Share file written");
    Ok(path)
}

fn write_jpeg(image: &RgbaImage, path: &Path, quality: u8) -> Result<()> {
    let bytes = encode(image, ExportFormat::Jpeg(quality))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}
