//! PNG and data URI encoding of the drawing surface.
//!
//! The recognition service receives the whole surface, transparent background
//! included, as `data:image/png;base64,...`.

#[cfg(test)]
#[path = "encode_test.rs"]
mod encode_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::surface::Surface;

/// Prefix of every data URI produced by [`png_data_uri`].
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Errors produced while encoding a surface.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// PNG cannot represent a zero-sized image.
    #[error("cannot encode a {width}x{height} surface")]
    EmptySurface { width: u32, height: u32 },

    /// The PNG encoder rejected the image data.
    #[error("png encoding failed: {0}")]
    Png(#[from] png::EncodingError),
}

/// Encode the surface as an 8-bit RGBA PNG.
///
/// # Errors
///
/// Returns [`EncodeError::EmptySurface`] for a zero-sized surface and
/// [`EncodeError::Png`] if the encoder fails.
pub fn encode_png(surface: &Surface) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = (surface.width(), surface.height());
    if width == 0 || height == 0 {
        return Err(EncodeError::EmptySurface { width, height });
    }

    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(surface.pixels())?;
        writer.finish()?;
    }
    Ok(bytes)
}

/// Encode the surface as a base64 PNG data URI.
///
/// # Errors
///
/// Propagates any [`EncodeError`] from [`encode_png`].
pub fn png_data_uri(surface: &Surface) -> Result<String, EncodeError> {
    let bytes = encode_png(surface)?;
    Ok(format!("{PNG_DATA_URI_PREFIX}{}", STANDARD.encode(bytes)))
}
