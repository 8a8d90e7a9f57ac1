//! # thumb64
//!
//! Resize raster images and carry them around as Base64 strings.
//!
//! Two capabilities, both synchronous and stateless:
//!
//! - [`to_base64`]: serialize an in-memory decoded image into a container
//!   format and return the bytes as Base64 text (standard alphabet, padded).
//! - [`Resizer`]: resize an image sourced from a file path, a byte stream,
//!   or a Base64 string, and either get Base64 text back (re-encoded in the
//!   format the source arrived in) or write a file whose container format
//!   follows the output path's extension.
//!
//! # Pipeline
//!
//! Every resize runs the same four stages:
//!
//! ```text
//! acquire (source) → resolve (dimensions) → resample (backend) → sink
//! ```
//!
//! A zero width or height is derived from the other one via the source
//! aspect ratio; both non-zero is honored exactly, even when that distorts
//! the image — fixed thumbnail grids depend on exact-size output. Both zero
//! is rejected.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`resize`] | `Resizer` orchestration and the output-sink types |
//! | [`source`] | `ImageSource` locator (path / reader / Base64) and decoding |
//! | [`dimensions`] | Pure dimension math — resolve a request against source dimensions |
//! | [`backend`] | `ResampleBackend` trait seam + the Lanczos3 production backend |
//! | [`encode`] | Format serialization + Base64 text encoding |
//! | [`error`] | One error kind per pipeline stage, causes preserved |
//!
//! # Example
//!
//! ```no_run
//! use thumb64::Resizer;
//! use std::path::Path;
//!
//! # fn main() -> thumb64::Result<()> {
//! let resizer = Resizer::new();
//!
//! // Fit to width 100, height derived from the aspect ratio
//! resizer.resize_file(Path::new("in.png"), Path::new("thumb.jpg"), 100, 0)?;
//!
//! // Base64 in, Base64 out, exact 64x64 (may distort)
//! # let payload = String::new();
//! let encoded = resizer.resize_base64(&payload, 64, 64)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Failure taxonomy
//!
//! Each pipeline stage fails with its own [`Error`] variant —
//! `SourceRead`, `InvalidDimensions`, `Resize` (with an `Aborted`
//! sub-case for the caller's abort callback), `Encoding`, `Save` — and
//! every variant keeps the underlying cause reachable through
//! `std::error::Error::source()`. Operations either fully complete or
//! fail with no output artifact; nothing is retried internally.

pub mod backend;
pub mod dimensions;
pub mod encode;
pub mod error;
pub mod resize;
pub mod source;

#[cfg(test)]
pub(crate) mod test_images;

pub use backend::{Lanczos3Backend, ResampleBackend};
pub use encode::to_base64;
pub use error::{Error, ResampleError, Result, SourceError};
pub use resize::{OutputSink, ResizeOutput, Resizer};
pub use source::ImageSource;
