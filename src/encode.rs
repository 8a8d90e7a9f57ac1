//! Base64 encoding of decoded images.

use crate::error::{Error, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

/// Serialize `image` into `format`'s byte encoding and return it as a
/// Base64 string (standard alphabet, padded).
///
/// The input image is not touched; identical pixels and format always
/// produce the same string.
///
/// # Errors
/// [`Error::Encoding`] when the `image` crate cannot serialize to the
/// requested format (encoder not compiled in, or the pixel layout is
/// unsupported by that container).
pub fn to_base64(image: &DynamicImage, format: ImageFormat) -> Result<String> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, format)
        .map_err(Error::Encoding)?;
    Ok(STANDARD.encode(buffer.into_inner()))
}
