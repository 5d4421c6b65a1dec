//! Binarizer variants
//!
//! One contract, several implementing types: fixed-threshold, Otsu, and
//! data-driven binarization all expose `binarize(image) -> mask`, selected
//! at construction time. The variants that compute a threshold also expose
//! a `binarize_with_threshold` form returning the level they used.

use crate::cancel::CancelToken;
use crate::error::BinarizeResult;
use crate::otsu::otsu_threshold;
use crate::score::AreaTiers;
use crate::sweep::{DEFAULT_OFFSET, SweepOutcome, SweepParams, select_optimal_threshold};
use crate::threshold::{clamp_threshold, threshold_to_binary};
use salient_core::{BinaryMask, GrayImage};
use salient_morph::{SeParams, get_se};
use salient_region::Connectivity;

/// Capability shared by all binarizer variants
pub trait Binarizer {
    /// Binarize the image into a two-valued (0/255) mask of the same
    /// dimensions.
    fn binarize(&self, img: &GrayImage) -> BinarizeResult<BinaryMask>;
}

/// Binarizes at a fixed gray level
///
/// A pixel becomes foreground iff its intensity is strictly greater than
/// the threshold. Thresholds outside `[0, 255]` are clamped to the nearest
/// bound at construction, so `ThresholdBinarizer::new(256)` behaves as
/// `new(255)` and `new(-1)` as `new(0)`.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdBinarizer {
    threshold: u8,
}

impl ThresholdBinarizer {
    /// Default decision boundary
    pub const DEFAULT_THRESHOLD: i32 = 127;

    /// Create a fixed-threshold binarizer, clamping into `[0, 255]`.
    pub fn new(threshold: i32) -> Self {
        Self {
            threshold: clamp_threshold(threshold),
        }
    }

    /// Get the effective (clamped) threshold.
    pub fn threshold(&self) -> u8 {
        self.threshold
    }
}

impl Default for ThresholdBinarizer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

impl Binarizer for ThresholdBinarizer {
    fn binarize(&self, img: &GrayImage) -> BinarizeResult<BinaryMask> {
        threshold_to_binary(img, self.threshold)
    }
}

/// Binarizes with the Otsu method
#[derive(Debug, Clone, Copy, Default)]
pub struct OtsuBinarizer;

impl OtsuBinarizer {
    /// Create an Otsu binarizer.
    pub fn new() -> Self {
        Self
    }

    /// Binarize and also return the estimated threshold.
    pub fn binarize_with_threshold(&self, img: &GrayImage) -> BinarizeResult<(u8, BinaryMask)> {
        let threshold = otsu_threshold(img);
        let mask = threshold_to_binary(img, threshold)?;
        Ok((threshold, mask))
    }
}

impl Binarizer for OtsuBinarizer {
    fn binarize(&self, img: &GrayImage) -> BinarizeResult<BinaryMask> {
        let (_, mask) = self.binarize_with_threshold(img)?;
        Ok(mask)
    }
}

/// Configuration for the data-driven binarizer
#[derive(Debug, Clone, Copy)]
pub struct DataDrivenOptions {
    /// Minimum component area; derived from the structuring-element sizing
    /// with default factors when unset
    pub lam: Option<f64>,
    /// Fraction of the image area defining the "large" tier
    pub area_factor_large: f64,
    /// Fraction of the image area defining the "very large" tier
    pub area_factor_verylarge: f64,
    /// Weights for the three normalized tier counts
    pub weights: (f64, f64, f64),
    /// Half-width of the search window around the Otsu level
    pub offset: u8,
    /// Stride through the search window
    pub stepsize: usize,
    /// Adjacency rule for component labeling
    pub connectivity: Connectivity,
}

impl Default for DataDrivenOptions {
    fn default() -> Self {
        Self {
            lam: None,
            area_factor_large: 0.001,
            area_factor_verylarge: 0.1,
            weights: (0.33, 0.33, 0.33),
            offset: DEFAULT_OFFSET,
            stepsize: 1,
            connectivity: Connectivity::default(),
        }
    }
}

impl DataDrivenOptions {
    /// Set an explicit minimum component area.
    pub fn with_lam(mut self, lam: f64) -> Self {
        self.lam = Some(lam);
        self
    }

    /// Set the large / very-large area fractions.
    pub fn with_area_factors(mut self, large: f64, verylarge: f64) -> Self {
        self.area_factor_large = large;
        self.area_factor_verylarge = verylarge;
        self
    }

    /// Set the tier weights.
    pub fn with_weights(mut self, weights: (f64, f64, f64)) -> Self {
        self.weights = weights;
        self
    }

    /// Set the search-window half-width.
    pub fn with_offset(mut self, offset: u8) -> Self {
        self.offset = offset;
        self
    }

    /// Set the search-window stride.
    pub fn with_stepsize(mut self, stepsize: usize) -> Self {
        self.stepsize = stepsize;
        self
    }

    /// Set the labeling connectivity.
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }
}

/// Binarizes such that the weighted number of (large) connected components
/// is maximized
///
/// Estimates the Otsu level, then sweeps a window of candidate levels
/// around it, scoring each by the number of components clearing the three
/// area tiers.
#[derive(Debug, Clone, Default)]
pub struct DataDrivenBinarizer {
    options: DataDrivenOptions,
}

impl DataDrivenBinarizer {
    /// Create a data-driven binarizer with the given options.
    pub fn new(options: DataDrivenOptions) -> Self {
        Self { options }
    }

    /// Get the configured options.
    pub fn options(&self) -> &DataDrivenOptions {
        &self.options
    }

    fn run(&self, img: &GrayImage, cancel: Option<&CancelToken>) -> BinarizeResult<SweepOutcome> {
        let t_otsu = otsu_threshold(img);
        let lam = match self.options.lam {
            Some(lam) => lam,
            None => get_se(img, &SeParams::default())?.1,
        };
        let tiers = AreaTiers::from_factors(
            img.area() as f64,
            lam,
            self.options.area_factor_large,
            self.options.area_factor_verylarge,
        );
        let params = SweepParams {
            offset: self.options.offset,
            stepsize: self.options.stepsize,
            weights: self.options.weights,
            connectivity: self.options.connectivity,
        };
        select_optimal_threshold(img, t_otsu, &tiers, &params, cancel)
    }

    /// Binarize and also return the selected threshold.
    pub fn binarize_with_threshold(&self, img: &GrayImage) -> BinarizeResult<(u8, BinaryMask)> {
        let outcome = self.run(img, None)?;
        Ok((outcome.threshold, outcome.mask))
    }

    /// Binarize and return the full per-level score table alongside the
    /// threshold and mask, for diagnostics.
    pub fn binarize_with_scores(&self, img: &GrayImage) -> BinarizeResult<SweepOutcome> {
        self.run(img, None)
    }

    /// Binarize under a cancellation token. Levels not yet scored when the
    /// token fires keep zero counts; the selection still completes.
    pub fn binarize_cancellable(
        &self,
        img: &GrayImage,
        cancel: &CancelToken,
    ) -> BinarizeResult<SweepOutcome> {
        self.run(img, Some(cancel))
    }
}

impl Binarizer for DataDrivenBinarizer {
    fn binarize(&self, img: &GrayImage) -> BinarizeResult<BinaryMask> {
        let (_, mask) = self.binarize_with_threshold(img)?;
        Ok(mask)
    }
}
