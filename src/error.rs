//! Crate-wide error taxonomy.
//!
//! One variant per pipeline stage, so callers can branch on *where* an
//! operation failed without parsing message text. Every variant that has an
//! underlying cause carries it as a `source()` for diagnostics.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// What went wrong while acquiring the source image.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading the input file or stream failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The Base64 payload was not valid standard-alphabet Base64.
    #[error(transparent)]
    Base64(#[from] base64::DecodeError),
    /// The bytes were read but could not be decoded as an image.
    #[error(transparent)]
    Decode(#[from] image::ImageError),
    /// The magic bytes matched no decoder compiled into this build.
    #[error("unrecognized image format")]
    UnknownFormat,
}

/// Resampling failure reported by a [`ResampleBackend`](crate::ResampleBackend).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResampleError {
    /// The caller's abort callback fired before or during resampling.
    #[error("operation is aborted")]
    Aborted,
    /// The backend could not produce an image at the requested size.
    #[error("{0}")]
    Failed(String),
}

/// Errors produced by resize and encode operations.
///
/// Each stage of the pipeline maps to exactly one variant:
/// acquire → [`SourceRead`](Error::SourceRead), resolve →
/// [`InvalidDimensions`](Error::InvalidDimensions), resample →
/// [`Resize`](Error::Resize), encode → [`Encoding`](Error::Encoding),
/// persist → [`Save`](Error::Save). All are terminal; nothing is retried
/// internally.
#[derive(Debug, Error)]
pub enum Error {
    /// Unable to read or decode the source image.
    #[error("unable to read the source image: {0}")]
    SourceRead(#[from] SourceError),

    /// Both requested dimensions were zero.
    #[error("invalid target dimensions: width and height cannot both be zero")]
    InvalidDimensions,

    /// Unable to resize the image. [`ResampleError::Aborted`] is the
    /// abort sub-case.
    #[error("unable to resize the image: {0}")]
    Resize(#[from] ResampleError),

    /// Unable to serialize the image into the requested format.
    #[error("unable to encode the image: {0}")]
    Encoding(#[source] image::ImageError),

    /// Unable to write the result to the output path.
    #[error("unable to save the image to file: {0}")]
    Save(#[source] image::ImageError),
}

impl Error {
    /// True when the failure was the caller's own abort callback firing.
    pub fn is_aborted(&self) -> bool {
        matches!(self, Error::Resize(ResampleError::Aborted))
    }
}
