//! Resize orchestration.
//!
//! One pipeline serves every operation: acquire the source, resolve the
//! target dimensions, resample, then hand the result to the requested sink.
//! The sink decides whether the caller gets Base64 text back (re-encoded in
//! the format the source arrived in) or a file on disk (container format
//! inferred from the output path's extension).

use crate::backend::{Lanczos3Backend, ResampleBackend};
use crate::dimensions;
use crate::encode;
use crate::error::{Error, Result};
use crate::source::ImageSource;
use std::path::{Path, PathBuf};

/// Where the resized image goes.
#[derive(Debug, Clone, Copy)]
pub enum OutputSink<'a> {
    /// Re-encode in the source's own format and return Base64 text.
    Base64,
    /// Save to this path; the container format follows its extension.
    File(&'a Path),
}

/// What a resize produced, mirroring the [`OutputSink`] that was asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResizeOutput {
    /// The resized image, Base64-encoded in its source format.
    Base64(String),
    /// The path the resized image was written to.
    Saved(PathBuf),
}

impl ResizeOutput {
    /// Unwrap the Base64 variant; panics on [`ResizeOutput::Saved`].
    /// Convenience for callers that just asked for [`OutputSink::Base64`].
    pub fn into_base64(self) -> String {
        match self {
            ResizeOutput::Base64(text) => text,
            ResizeOutput::Saved(path) => {
                panic!("resize output was saved to {}, not Base64", path.display())
            }
        }
    }
}

type AbortCallback = Box<dyn Fn() -> bool + Send + Sync>;

/// Resizes images from any [`ImageSource`] into any [`OutputSink`].
///
/// Stateless between calls; a single instance can serve any number of
/// operations, concurrently if desired, as long as concurrent calls write
/// to distinct output paths.
pub struct Resizer<B: ResampleBackend = Lanczos3Backend> {
    backend: B,
    abort: Option<AbortCallback>,
}

impl Resizer {
    /// A resizer using the default Lanczos3 backend.
    pub fn new() -> Self {
        Self::with_backend(Lanczos3Backend::new())
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ResampleBackend> Resizer<B> {
    /// A resizer delegating pixel work to `backend`.
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            abort: None,
        }
    }

    /// Install an abort callback, polled at the resample boundary.
    /// Returning `true` fails the operation with
    /// [`ResampleError::Aborted`](crate::ResampleError::Aborted).
    pub fn abort_with(mut self, callback: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.abort = Some(Box::new(callback));
        self
    }

    /// Resize `source` to `width` × `height` and deliver it to `sink`.
    ///
    /// A zero `width` or `height` is derived from the other via the source
    /// aspect ratio; both zero is rejected. Both non-zero is honored
    /// exactly, with no aspect correction.
    pub fn resize(
        &self,
        source: ImageSource<'_>,
        sink: OutputSink<'_>,
        width: u32,
        height: u32,
    ) -> Result<ResizeOutput> {
        let (image, format) = source.decode()?;
        let (width, height) = dimensions::resolve((image.width(), image.height()), width, height)?;

        let abort = self.abort.as_ref().map(|f| f.as_ref() as &dyn Fn() -> bool);
        let thumbnail = self
            .backend
            .resample(&image, width, height, abort)
            .map_err(Error::Resize)?;

        match sink {
            OutputSink::Base64 => {
                Ok(ResizeOutput::Base64(encode::to_base64(&thumbnail, format)?))
            }
            OutputSink::File(path) => {
                thumbnail.save(path).map_err(Error::Save)?;
                Ok(ResizeOutput::Saved(path.to_path_buf()))
            }
        }
    }

    /// Resize a Base64 payload and return the result as Base64.
    pub fn resize_base64(&self, content: &str, width: u32, height: u32) -> Result<String> {
        self.resize(ImageSource::Base64(content), OutputSink::Base64, width, height)
            .map(ResizeOutput::into_base64)
    }

    /// Resize a Base64 payload and save the result to `output`.
    pub fn resize_base64_to_file(
        &self,
        content: &str,
        output: &Path,
        width: u32,
        height: u32,
    ) -> Result<()> {
        self.resize(
            ImageSource::Base64(content),
            OutputSink::File(output),
            width,
            height,
        )?;
        Ok(())
    }

    /// Resize the image file at `input` and save the result to `output`.
    pub fn resize_file(
        &self,
        input: &Path,
        output: &Path,
        width: u32,
        height: u32,
    ) -> Result<()> {
        self.resize(
            ImageSource::Path(input),
            OutputSink::File(output),
            width,
            height,
        )?;
        Ok(())
    }

    /// Resize the image file at `input` and return the result as Base64.
    pub fn resize_file_to_base64(&self, input: &Path, width: u32, height: u32) -> Result<String> {
        self.resize(ImageSource::Path(input), OutputSink::Base64, width, height)
            .map(ResizeOutput::into_base64)
    }

    /// Resize an image read from `reader` and deliver it to `sink`.
    pub fn resize_reader(
        &self,
        reader: &mut dyn std::io::Read,
        sink: OutputSink<'_>,
        width: u32,
        height: u32,
    ) -> Result<ResizeOutput> {
        self.resize(ImageSource::Reader(reader), sink, width, height)
    }
}
