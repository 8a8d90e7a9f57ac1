//! Pure dimension math.
//!
//! No I/O and no images here, so everything is unit testable with plain
//! integers.

use crate::error::{Error, Result};

/// Resolve a `(width, height)` request against the source dimensions.
///
/// A zero dimension means "derive me from the other one, preserving the
/// source aspect ratio". Both non-zero means "exactly this, even if it
/// distorts" — callers building fixed thumbnail grids rely on exact-size
/// output, so no aspect correction is applied.
///
/// # Arguments
/// * `source` - Decoded image dimensions (width, height)
/// * `width` - Requested width, or 0 to derive from `height`
/// * `height` - Requested height, or 0 to derive from `width`
///
/// # Errors
/// [`Error::InvalidDimensions`] when both `width` and `height` are zero.
///
/// # Examples
/// ```
/// # use thumb64::dimensions::resolve;
/// // 200x100 source, width pinned to 100 → 100x50
/// assert_eq!(resolve((200, 100), 100, 0).unwrap(), (100, 50));
///
/// // both given: taken literally, no aspect correction
/// assert_eq!(resolve((200, 100), 64, 64).unwrap(), (64, 64));
/// ```
pub fn resolve(source: (u32, u32), width: u32, height: u32) -> Result<(u32, u32)> {
    let (src_w, src_h) = source;

    match (width, height) {
        (0, 0) => Err(Error::InvalidDimensions),
        (0, h) => {
            let w = (src_w as f64 * h as f64 / src_h as f64).round() as u32;
            // Extreme aspect ratios must never round down to a zero-pixel edge
            Ok((w.max(1), h))
        }
        (w, 0) => {
            let h = (src_h as f64 * w as f64 / src_w as f64).round() as u32;
            Ok((w, h.max(1)))
        }
        (w, h) => Ok((w, h)),
    }
}
