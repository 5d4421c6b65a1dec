//! Per-level component scoring
//!
//! For one candidate gray level: binarize, label, and count how many
//! components clear each of the three area tiers. The [`ScoreTable`]
//! accumulates those counts across the sweep and reduces them to a single
//! weighted score per level.

use crate::error::BinarizeResult;
use crate::threshold::threshold_to_binary;
use salient_core::GrayImage;
use salient_region::{Connectivity, find_connected_components};

/// The three minimum-area tiers, in absolute pixel counts
#[derive(Debug, Clone, Copy)]
pub struct AreaTiers {
    /// Minimum area for a component to count at all (`lam`)
    pub lam: f64,
    /// Minimum area of a "large" component
    pub large: f64,
    /// Minimum area of a "very large" component
    pub verylarge: f64,
}

impl AreaTiers {
    /// Build the tiers from `lam` and the two image-area fractions.
    pub fn from_factors(
        image_area: f64,
        lam: f64,
        area_factor_large: f64,
        area_factor_verylarge: f64,
    ) -> Self {
        Self {
            lam,
            large: area_factor_large * image_area,
            verylarge: area_factor_verylarge * image_area,
        }
    }
}

/// Component counts for one candidate level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelCounts {
    /// Components with area >= lam
    pub any: u32,
    /// Components with area >= the large tier
    pub large: u32,
    /// Components with area >= the very large tier
    pub verylarge: u32,
}

/// Score one candidate gray level.
///
/// Binarizes the image at `level` (foreground iff intensity > level),
/// labels the connected components, and counts those clearing each tier.
/// Pure function of its inputs; the sweep owns writing the result into the
/// [`ScoreTable`].
pub fn score_level(
    img: &GrayImage,
    level: u8,
    tiers: &AreaTiers,
    connectivity: Connectivity,
) -> BinarizeResult<LevelCounts> {
    let mask = threshold_to_binary(img, level)?;
    let components = find_connected_components(&mask, connectivity);

    let mut counts = LevelCounts::default();
    for component in components {
        let area = f64::from(component.pixel_count);
        if area >= tiers.lam {
            counts.any += 1;
        }
        if area >= tiers.large {
            counts.large += 1;
        }
        if area >= tiers.verylarge {
            counts.verylarge += 1;
        }
    }
    Ok(counts)
}

/// Per-level count and score arrays for a full sweep
///
/// Indexed by gray level 0..=255. Entries outside the searched window stay
/// at zero.
#[derive(Debug, Clone)]
pub struct ScoreTable {
    /// Raw counts of components with area >= lam
    pub counts_any: [u32; 256],
    /// Raw counts of components with area >= the large tier
    pub counts_large: [u32; 256],
    /// Raw counts of components with area >= the very large tier
    pub counts_verylarge: [u32; 256],
    /// `counts_any` normalized by its maximum
    pub norm_any: [f64; 256],
    /// `counts_large` normalized by its maximum
    pub norm_large: [f64; 256],
    /// `counts_verylarge` normalized by its maximum
    pub norm_verylarge: [f64; 256],
    /// Weighted combination of the three normalized arrays
    pub scores: [f64; 256],
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreTable {
    /// Create an all-zero table.
    pub fn new() -> Self {
        Self {
            counts_any: [0; 256],
            counts_large: [0; 256],
            counts_verylarge: [0; 256],
            norm_any: [0.0; 256],
            norm_large: [0.0; 256],
            norm_verylarge: [0.0; 256],
            scores: [0.0; 256],
        }
    }

    /// Write the counts for one level into its slot.
    pub fn set_counts(&mut self, level: u8, counts: LevelCounts) {
        let idx = usize::from(level);
        self.counts_any[idx] = counts.any;
        self.counts_large[idx] = counts.large;
        self.counts_verylarge[idx] = counts.verylarge;
    }

    /// Normalize each count array by its own maximum.
    ///
    /// An all-zero count array normalizes to all-zero; a zero maximum never
    /// produces NaN or infinity.
    pub fn normalize(&mut self) {
        normalize_counts(&self.counts_any, &mut self.norm_any);
        normalize_counts(&self.counts_large, &mut self.norm_large);
        normalize_counts(&self.counts_verylarge, &mut self.norm_verylarge);
    }

    /// Combine the normalized arrays into the per-level scores.
    ///
    /// The weights are not required to sum to 1.
    pub fn combine(&mut self, weights: (f64, f64, f64)) {
        for idx in 0..256 {
            self.scores[idx] = weights.0 * self.norm_any[idx]
                + weights.1 * self.norm_large[idx]
                + weights.2 * self.norm_verylarge[idx];
        }
    }

    /// Index of the best score, ties broken to the lowest index.
    ///
    /// If every score is zero no level was ever evaluated positively, and
    /// `fallback` (the sweep-window start) is returned instead of index 0.
    pub fn best_level(&self, fallback: u8) -> u8 {
        let mut best = 0usize;
        let mut best_score = 0.0;
        for (idx, &score) in self.scores.iter().enumerate() {
            if score > best_score {
                best_score = score;
                best = idx;
            }
        }
        if best_score > 0.0 { best as u8 } else { fallback }
    }
}

fn normalize_counts(counts: &[u32; 256], out: &mut [f64; 256]) {
    let max = counts.iter().copied().max().unwrap_or(0);
    if max == 0 {
        out.fill(0.0);
        return;
    }
    let max = f64::from(max);
    for (slot, &count) in out.iter_mut().zip(counts.iter()) {
        *slot = f64::from(count) / max;
    }
}
