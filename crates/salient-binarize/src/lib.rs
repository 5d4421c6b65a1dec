//! salient-binarize - Threshold selection for salient-region detection
//!
//! This crate selects a binarization threshold for a grayscale image so
//! that the resulting foreground/background separation best exposes
//! structurally significant regions. Three binarizer variants share one
//! contract:
//!
//! - [`ThresholdBinarizer`] - fixed gray level, clamped into `[0, 255]`
//! - [`OtsuBinarizer`] - classic between-class-variance maximization
//! - [`DataDrivenBinarizer`] - sweeps a window around the Otsu level and
//!   picks the level maximizing a weighted count of sufficiently large
//!   connected components
//!
//! # Example
//!
//! ```
//! use salient_binarize::{Binarizer, ThresholdBinarizer};
//! use salient_core::GrayImage;
//!
//! let img = GrayImage::from_vec(2, 2, vec![10, 100, 150, 250]).unwrap();
//! let mask = ThresholdBinarizer::new(127).binarize(&img).unwrap();
//! assert_eq!(mask.count_foreground(), 2);
//! ```

pub mod binarizer;
pub mod cancel;
pub mod error;
pub mod otsu;
pub mod score;
pub mod sweep;
pub mod threshold;

pub use binarizer::{
    Binarizer, DataDrivenBinarizer, DataDrivenOptions, OtsuBinarizer, ThresholdBinarizer,
};
pub use cancel::CancelToken;
pub use error::{BinarizeError, BinarizeResult};
pub use otsu::{otsu_level, otsu_threshold};
pub use score::{AreaTiers, LevelCounts, ScoreTable, score_level};
pub use sweep::{DEFAULT_OFFSET, SweepOutcome, SweepParams, select_optimal_threshold};
pub use threshold::{clamp_threshold, threshold_to_binary};
