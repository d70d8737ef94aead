//! Bitmap decoding and lossless tile encoding

use crate::io::error::{Result, TilerError};
use image::{ImageFormat, RgbImage};
use std::io::Cursor;
use std::path::Path;

/// Decode raw file bytes into a 3-channel bitmap
///
/// The format is guessed from the content rather than the file name. Alpha
/// is dropped and grayscale or palette images are expanded to RGB.
///
/// # Errors
///
/// Returns `ImageDecode` if the bytes are not a decodable image
pub fn decode_rgb(path: &Path, bytes: &[u8]) -> Result<RgbImage> {
    let decoded = image::load_from_memory(bytes).map_err(|e| TilerError::ImageDecode {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(decoded.to_rgb8())
}

/// Encode a tile as PNG into memory
///
/// `path` only labels the error; nothing is written.
///
/// # Errors
///
/// Returns `ImageEncode` if the encoder rejects the tile, e.g. a zero-sized one
pub fn encode_png(tile: &RgbImage, path: &Path) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    tile.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .map_err(|e| TilerError::ImageEncode {
            path: path.to_path_buf(),
            source: e,
        })?;
    Ok(buffer)
}
