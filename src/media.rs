//! Image preview decoding for category forms.
//!
//! A chosen file is decoded off the UI thread into a terminal-renderable
//! preview: dimensions, detected format, and a small shaded thumbnail.
//! Preview generation is cosmetic; a failed preview never blocks the
//! attachment from being submitted.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};
use thiserror::Error;

/// Thumbnail width in terminal cells.
const THUMB_COLS: u32 = 28;
/// Cap on thumbnail rows so the preview fits inside the form.
const THUMB_MAX_ROWS: u32 = 9;
/// Luma ramp from dark to light.
const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("imagen corrupta o formato no soportado: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decoded, displayable summary of an image file.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePreview {
    pub width: u32,
    pub height: u32,
    pub format: Option<&'static str>,
    pub size_bytes: usize,
    /// One string per terminal row, shaded by luminance.
    pub thumbnail: Vec<String>,
}

impl ImagePreview {
    /// Single-line summary, e.g. `640×480 PNG (12 KB)`.
    pub fn caption(&self) -> String {
        let kind = self.format.unwrap_or("imagen");
        format!(
            "{}×{} {} ({} KB)",
            self.width,
            self.height,
            kind,
            self.size_bytes.div_ceil(1024)
        )
    }
}

/// Decode raw file bytes into an [`ImagePreview`].
pub fn decode_preview(bytes: &[u8]) -> Result<ImagePreview, PreviewError> {
    let format = image::guess_format(bytes).ok().map(format_name);
    let img = image::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    Ok(ImagePreview {
        width,
        height,
        format,
        size_bytes: bytes.len(),
        thumbnail: shade_thumbnail(&img),
    })
}

fn format_name(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "PNG",
        ImageFormat::Jpeg => "JPEG",
        ImageFormat::Gif => "GIF",
        ImageFormat::WebP => "WebP",
        _ => "imagen",
    }
}

fn shade_thumbnail(img: &DynamicImage) -> Vec<String> {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Vec::new();
    }
    let cols = THUMB_COLS.min(w.max(1));
    // A terminal cell is roughly twice as tall as it is wide.
    let rows = (h.saturating_mul(cols) / (w * 2)).clamp(1, THUMB_MAX_ROWS);
    let small = img.resize_exact(cols, rows, FilterType::Triangle).to_luma8();
    small
        .rows()
        .map(|row| row.map(|px| shade(px.0[0])).collect())
        .collect()
}

fn shade(luma: u8) -> char {
    let idx = (luma as usize * (SHADES.len() - 1) + 127) / 255;
    SHADES[idx]
}
