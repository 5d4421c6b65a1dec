//! salient-core - Core data structures for salient-region threshold selection
//!
//! This crate provides the fundamental image containers shared by the rest
//! of the workspace:
//!
//! - [`GrayImage`] - single-channel 8-bit grayscale image
//! - [`BinaryMask`] - two-valued (0/255) mask of identical layout
//! - 256-bin intensity histograms ([`GrayImage::histogram`])
//! - The core [`Error`] type
//!
//! All containers are transient value types: they are created per call,
//! carry no shared state, and validate their dimensions on construction.

mod error;
mod gray;
mod histogram;
mod mask;

pub use error::{Error, Result};
pub use gray::GrayImage;
pub use histogram::HISTOGRAM_BINS;
pub use mask::{BACKGROUND, BinaryMask, FOREGROUND};
