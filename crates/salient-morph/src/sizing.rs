//! Structuring-element sizing
//!
//! Derives the elliptical kernel and the minimum salient-region areas
//! (`lam`, `lam_hi`) from the image dimensions. The kernel radius scales
//! with the square root of the image area, so the size tiers track the
//! "equivalent disk" radius of the image rather than either side length.

use crate::error::{MorphError, MorphResult};
use crate::sel::Sel;
use salient_core::GrayImage;
use std::f64::consts::PI;

/// Default fraction of the equivalent image radius used as kernel radius
pub const DEFAULT_SE_SIZE_FACTOR: f64 = 0.15;

/// Default multiplier converting the kernel radius to a minimum area
pub const DEFAULT_LAM_FACTOR: f64 = 5.0;

/// Default shrink factor from the coarse to the fine kernel
pub const DEFAULT_SCALE_SE: f64 = 2.0;

/// Default shrink factor from `lam` to `lam_hi`
pub const DEFAULT_SCALE_LAM: f64 = 10.0;

/// Parameters for structuring-element sizing
#[derive(Debug, Clone, Copy)]
pub struct SeParams {
    /// Fraction of the equivalent image radius used as the kernel radius
    pub se_size_factor: f64,
    /// Multiplier converting the kernel radius to the minimum area `lam`
    pub lam_factor: f64,
}

impl Default for SeParams {
    fn default() -> Self {
        Self {
            se_size_factor: DEFAULT_SE_SIZE_FACTOR,
            lam_factor: DEFAULT_LAM_FACTOR,
        }
    }
}

/// Derive the structuring element and minimum salient-region area for an image.
///
/// The kernel radius is `round(se_size_factor * sqrt(w*h/pi))` and the
/// kernel is an ellipse inscribed in the odd square of side
/// `2*radius - 1`. The minimum component area is
/// `lam = lam_factor * radius`.
///
/// # Errors
///
/// Returns [`MorphError::InvalidSize`] if the computed side is
/// non-positive, which happens when the sizing factor is too small for the
/// image.
///
/// # Example
///
/// ```
/// use salient_core::GrayImage;
/// use salient_morph::{SeParams, get_se};
///
/// let img = GrayImage::new(100, 110).unwrap();
/// let (se, lam) = get_se(
///     &img,
///     &SeParams {
///         se_size_factor: 0.05,
///         lam_factor: 5.0,
///     },
/// )
/// .unwrap();
/// assert_eq!(se.width(), 5);
/// assert_eq!(lam, 15.0);
/// ```
pub fn get_se(img: &GrayImage, params: &SeParams) -> MorphResult<(Sel, f64)> {
    let area = img.area() as f64;
    let se_size = (params.se_size_factor * (area / PI).sqrt()).round() as i64;
    let side = 2 * se_size - 1;
    if side <= 0 {
        return Err(MorphError::InvalidSize {
            width: side,
            height: side,
        });
    }
    let sel = Sel::create_ellipse(side as u32, side as u32)?;
    let lam = params.lam_factor * se_size as f64;
    Ok((sel, lam))
}

/// Derive the fine-scale structuring element and minimum area from the
/// coarse ones.
///
/// Each kernel side shrinks by `floor(side / scale_se)`; the sides may
/// differ if the coarse kernel is not square. The fine minimum area is
/// `lam / scale_lam`.
///
/// # Errors
///
/// Returns [`MorphError::InvalidSize`] if a shrunk side is non-positive.
pub fn get_se_hi(se: &Sel, lam: f64, scale_se: f64, scale_lam: f64) -> MorphResult<(Sel, f64)> {
    let width = (f64::from(se.width()) / scale_se).floor() as i64;
    let height = (f64::from(se.height()) / scale_se).floor() as i64;
    if width <= 0 || height <= 0 {
        return Err(MorphError::InvalidSize { width, height });
    }
    let sel = Sel::create_ellipse(width as u32, height as u32)?;
    Ok((sel, lam / scale_lam))
}
