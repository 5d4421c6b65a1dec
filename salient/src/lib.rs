//! Salient - threshold selection for salient-region detection
//!
//! Selects a binarization threshold for a grayscale image so that the
//! resulting foreground/background separation best exposes structurally
//! significant regions (holes, islands, protrusions, indentations) for a
//! downstream salient-region detector.
//!
//! # Overview
//!
//! - Fixed, Otsu, and data-driven binarizers behind one [`binarize::Binarizer`]
//!   contract
//! - Connected-component labeling and sizing under 4- or 8-way adjacency
//! - Elliptical structuring-element sizing deriving the minimum
//!   salient-region areas from the image dimensions
//!
//! # Example
//!
//! ```
//! use salient::GrayImage;
//! use salient::binarize::{DataDrivenBinarizer, DataDrivenOptions};
//!
//! let mut img = GrayImage::new(64, 64).unwrap();
//! for y in 20..30 {
//!     for x in 20..30 {
//!         img.set_pixel(x, y, 220).unwrap();
//!     }
//! }
//!
//! let binarizer = DataDrivenBinarizer::new(DataDrivenOptions::default().with_lam(10.0));
//! let (threshold, mask) = binarizer.binarize_with_threshold(&img).unwrap();
//! assert!(threshold < 220);
//! assert_eq!(mask.count_foreground(), 100);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use salient_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use salient_binarize as binarize;
pub use salient_morph as morph;
pub use salient_region as region;
