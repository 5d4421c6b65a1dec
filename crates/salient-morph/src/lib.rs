//! salient-morph - Structuring elements for salient-region detection
//!
//! This crate builds the elliptical structuring elements that parameterize
//! salient-region detection and derives the minimum component areas
//! (`lam`, `lam_hi`) from image dimensions:
//!
//! - [`Sel`] - a boolean elliptical kernel
//! - [`get_se`] - kernel plus coarse minimum area for an image
//! - [`get_se_hi`] - shrunk kernel plus fine minimum area

pub mod error;
pub mod sel;
pub mod sizing;

pub use error::{MorphError, MorphResult};
pub use sel::Sel;
pub use sizing::{
    DEFAULT_LAM_FACTOR, DEFAULT_SCALE_LAM, DEFAULT_SCALE_SE, DEFAULT_SE_SIZE_FACTOR, SeParams,
    get_se, get_se_hi,
};
