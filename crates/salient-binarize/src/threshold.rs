//! Fixed-threshold binarization
//!
//! The primitive every binarizer variant bottoms out in: a pixel becomes
//! foreground iff its intensity is strictly greater than the threshold.

use crate::error::BinarizeResult;
use salient_core::{BinaryMask, GrayImage};

/// Clamp a raw threshold into the valid intensity domain.
///
/// Out-of-range thresholds saturate to the nearest bound: anything at or
/// above 255 behaves as 255 (no pixel is strictly greater), anything at or
/// below 0 behaves as 0.
#[inline]
pub fn clamp_threshold(threshold: i32) -> u8 {
    threshold.clamp(0, 255) as u8
}

/// Binarize an image at a fixed gray level.
///
/// Returns a mask of identical dimensions where every pixel with intensity
/// `> threshold` is foreground (255) and everything else background (0).
pub fn threshold_to_binary(img: &GrayImage, threshold: u8) -> BinarizeResult<BinaryMask> {
    let mask = BinaryMask::from_fn(img.width(), img.height(), |x, y| {
        img.row(y)[x as usize] > threshold
    })?;
    Ok(mask)
}
