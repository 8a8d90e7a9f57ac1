//! Source acquisition: where the image bytes come from and how they become
//! a decoded image.
//!
//! All three locator variants funnel into one in-memory decode path. The
//! container format is sniffed from the magic bytes (never from a file
//! extension) and returned alongside the pixels, so Base64-producing
//! operations can re-encode in the format the image arrived in.

use crate::error::{Result, SourceError};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::{Cursor, Read};
use std::path::Path;

/// Where to obtain the source image. Exactly one variant per call.
pub enum ImageSource<'a> {
    /// An existing, readable image file.
    Path(&'a Path),
    /// An open byte stream; read to end before decoding.
    Reader(&'a mut dyn Read),
    /// A Base64 string (standard alphabet) holding the image bytes.
    Base64(&'a str),
}

impl std::fmt::Debug for ImageSource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSource::Path(p) => f.debug_tuple("Path").field(p).finish(),
            ImageSource::Reader(_) => f.write_str("Reader(..)"),
            ImageSource::Base64(s) => f
                .debug_tuple("Base64")
                .field(&format_args!("{} chars", s.len()))
                .finish(),
        }
    }
}

impl ImageSource<'_> {
    /// Decode the source into memory, capturing the container format.
    pub fn decode(self) -> Result<(DynamicImage, ImageFormat)> {
        let bytes = self.into_bytes()?;
        decode_bytes(bytes).map_err(Into::into)
    }

    fn into_bytes(self) -> std::result::Result<Vec<u8>, SourceError> {
        match self {
            ImageSource::Path(path) => Ok(std::fs::read(path)?),
            ImageSource::Reader(reader) => {
                let mut bytes = Vec::new();
                reader.read_to_end(&mut bytes)?;
                Ok(bytes)
            }
            ImageSource::Base64(text) => Ok(STANDARD.decode(text)?),
        }
    }
}

/// Decode raw container bytes, sniffing the format from magic bytes.
fn decode_bytes(bytes: Vec<u8>) -> std::result::Result<(DynamicImage, ImageFormat), SourceError> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let format = reader.format().ok_or(SourceError::UnknownFormat)?;
    let image = reader.decode()?;
    Ok((image, format))
}
