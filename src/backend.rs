//! Resampling backend trait and the production implementation.
//!
//! The [`ResampleBackend`] trait is the seam between orchestration and the
//! actual pixel work, so tests can swap in a recording mock and future
//! builds can swap in a different resampler without touching the
//! [`Resizer`](crate::Resizer).

use crate::error::ResampleError;
use image::DynamicImage;
use image::imageops::FilterType;

/// A pixel resampler. Produces an image with exactly the requested
/// dimensions, or fails.
pub trait ResampleBackend {
    /// Resample `image` to exactly `width` × `height`.
    ///
    /// `abort` is polled at the resample boundary; if it returns `true`
    /// the backend stops with [`ResampleError::Aborted`].
    fn resample(
        &self,
        image: &DynamicImage,
        width: u32,
        height: u32,
        abort: Option<&dyn Fn() -> bool>,
    ) -> Result<DynamicImage, ResampleError>;
}

/// Production backend: `image` crate resampling with the Lanczos3 filter.
///
/// Uses `resize_exact`, never aspect-correcting — dimension resolution
/// happens upstream in [`dimensions`](crate::dimensions), and a fully
/// specified request is honored literally.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lanczos3Backend;

impl Lanczos3Backend {
    pub fn new() -> Self {
        Self
    }
}

impl ResampleBackend for Lanczos3Backend {
    fn resample(
        &self,
        image: &DynamicImage,
        width: u32,
        height: u32,
        abort: Option<&dyn Fn() -> bool>,
    ) -> Result<DynamicImage, ResampleError> {
        if abort.is_some_and(|cancelled| cancelled()) {
            return Err(ResampleError::Aborted);
        }
        Ok(image.resize_exact(width, height, FilterType::Lanczos3))
    }
}
