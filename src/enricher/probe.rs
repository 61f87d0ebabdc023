use std::io::Cursor;

use image::{ImageFormat, ImageReader};

use crate::app::{IconhoundError, Result};
use crate::domain::ImageMetadata;

/// Sniff the format of `bytes` and read its dimensions without a full decode.
pub fn probe_image(bytes: Vec<u8>) -> Result<ImageMetadata> {
    let reader = ImageReader::new(Cursor::new(bytes.as_slice())).with_guessed_format()?;
    let format = reader
        .format()
        .ok_or_else(|| IconhoundError::ImageDecode("unrecognised image format".into()))?;
    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| IconhoundError::ImageDecode(e.to_string()))?;

    if width == 0 || height == 0 {
        return Err(IconhoundError::ImageDecode(format!(
            "empty image ({width}x{height})"
        )));
    }

    Ok(ImageMetadata {
        width,
        height,
        format: format_token(format),
        size: bytes.len(),
        buffer: bytes,
    })
}

fn format_token(format: ImageFormat) -> String {
    format
        .extensions_str()
        .first()
        .copied()
        .unwrap_or("unknown")
        .to_string()
}
