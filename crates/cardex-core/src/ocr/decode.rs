//! Decoding uploaded bytes into a colour pixel grid.

use image::{DynamicImage, GenericImageView};
use tracing::debug;

use crate::error::{CardexError, Result};

/// Decode raw upload bytes into an RGB image.
///
/// The codec is guessed from the data itself, so any format the `image`
/// crate understands is accepted regardless of file name.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    if bytes.is_empty() {
        return Err(CardexError::Decode("empty upload".to_string()));
    }

    let format = image::guess_format(bytes)?;
    let decoded = image::load_from_memory_with_format(bytes, format)?;
    let (width, height) = decoded.dimensions();

    if width == 0 || height == 0 {
        return Err(CardexError::Decode(format!(
            "image has no pixels ({}x{})",
            width, height
        )));
    }

    debug!("Decoded {:?} image: {}x{}", format, width, height);

    Ok(DynamicImage::ImageRgb8(decoded.to_rgb8()))
}
