//! Optimal-threshold sweep
//!
//! Sweeps a window of candidate gray levels around the Otsu level, scores
//! each level independently, and selects the level with the best weighted
//! component score. Each level reads only the shared input image and
//! produces its own table slot, so the sweep runs in parallel; the
//! normalization and argmax reduction run after all workers have joined.

use crate::cancel::CancelToken;
use crate::error::{BinarizeError, BinarizeResult};
use crate::score::{AreaTiers, LevelCounts, ScoreTable, score_level};
use crate::threshold::threshold_to_binary;
use log::debug;
use rayon::prelude::*;
use salient_core::{BinaryMask, GrayImage};
use salient_region::Connectivity;

/// Default half-width of the search window around the Otsu level
pub const DEFAULT_OFFSET: u8 = 80;

/// Parameters for the optimal-threshold sweep
#[derive(Debug, Clone, Copy)]
pub struct SweepParams {
    /// Half-width of the search window around the Otsu level
    pub offset: u8,
    /// Stride through the search window (>= 1)
    pub stepsize: usize,
    /// Weights for the any / large / very-large normalized counts
    pub weights: (f64, f64, f64),
    /// Adjacency rule for component labeling
    pub connectivity: Connectivity,
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            stepsize: 1,
            weights: (0.33, 0.33, 0.33),
            connectivity: Connectivity::default(),
        }
    }
}

/// Result of an optimal-threshold sweep
#[derive(Debug, Clone)]
pub struct SweepOutcome {
    /// The selected gray level
    pub threshold: u8,
    /// The image binarized at the selected level
    pub mask: BinaryMask,
    /// The full per-level score table, for diagnostics
    pub table: ScoreTable,
}

/// Select the optimal threshold in a window around the Otsu level.
///
/// The window is `[max(t_otsu - offset, 0), min(t_otsu + offset, 255))`,
/// stepped by `stepsize`. Every swept level is scored via
/// [`score_level`]; levels outside the window (and levels skipped after
/// cancellation) keep zero counts. After normalization and weighting, the
/// best level is the lowest argmax of the combined score; if no level
/// scored positive, the window start is returned so that the result is
/// always a level the sweep was asked to consider.
///
/// # Errors
///
/// Returns [`BinarizeError::InvalidParameter`] if `stepsize` is 0.
pub fn select_optimal_threshold(
    img: &GrayImage,
    t_otsu: u8,
    tiers: &AreaTiers,
    params: &SweepParams,
    cancel: Option<&CancelToken>,
) -> BinarizeResult<SweepOutcome> {
    if params.stepsize == 0 {
        return Err(BinarizeError::InvalidParameter(
            "stepsize must be >= 1".to_string(),
        ));
    }

    let lo = usize::from(t_otsu).saturating_sub(usize::from(params.offset));
    let hi = (usize::from(t_otsu) + usize::from(params.offset)).min(255);
    let levels: Vec<usize> = (lo..hi).step_by(params.stepsize).collect();
    debug!(
        "sweeping {} candidate levels in [{}, {}) around otsu level {}",
        levels.len(),
        lo,
        hi,
        t_otsu
    );

    let scored: Vec<Option<(usize, LevelCounts)>> = levels
        .into_par_iter()
        .map(|level| {
            if cancel.is_some_and(CancelToken::is_cancelled) {
                return Ok(None);
            }
            score_level(img, level as u8, tiers, params.connectivity)
                .map(|counts| Some((level, counts)))
        })
        .collect::<BinarizeResult<_>>()?;

    let mut table = ScoreTable::new();
    for (level, counts) in scored.into_iter().flatten() {
        table.set_counts(level as u8, counts);
    }
    table.normalize();
    table.combine(params.weights);

    let threshold = table.best_level(lo as u8);
    debug!("selected threshold {}", threshold);

    let mask = threshold_to_binary(img, threshold)?;
    Ok(SweepOutcome {
        threshold,
        mask,
        table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 40x40 image: dark background with two bright blobs.
    fn blob_image() -> GrayImage {
        let mut img = GrayImage::new(40, 40).unwrap();
        for y in 0..40 {
            for x in 0..40 {
                img.set_pixel(x, y, 30).unwrap();
            }
        }
        for y in 5..10 {
            for x in 5..10 {
                img.set_pixel(x, y, 220).unwrap();
            }
        }
        for y in 25..35 {
            for x in 25..35 {
                img.set_pixel(x, y, 220).unwrap();
            }
        }
        img
    }

    fn tiers_for(img: &GrayImage) -> AreaTiers {
        AreaTiers::from_factors(img.area() as f64, 10.0, 0.001, 0.1)
    }

    #[test]
    fn test_threshold_within_window() {
        let img = blob_image();
        let t_otsu = crate::otsu::otsu_threshold(&img);
        let params = SweepParams::default();
        let outcome =
            select_optimal_threshold(&img, t_otsu, &tiers_for(&img), &params, None).unwrap();

        let lo = usize::from(t_otsu).saturating_sub(usize::from(params.offset));
        let hi = (usize::from(t_otsu) + usize::from(params.offset)).min(255);
        let t = usize::from(outcome.threshold);
        assert!(t >= lo && t < hi, "threshold {t} outside [{lo}, {hi})");
    }

    #[test]
    fn test_scores_confined_to_window() {
        let img = blob_image();
        let t_otsu = crate::otsu::otsu_threshold(&img);
        let params = SweepParams {
            offset: 10,
            ..SweepParams::default()
        };
        let outcome =
            select_optimal_threshold(&img, t_otsu, &tiers_for(&img), &params, None).unwrap();

        let lo = usize::from(t_otsu).saturating_sub(10);
        let hi = (usize::from(t_otsu) + 10).min(255);
        for (idx, &count) in outcome.table.counts_any.iter().enumerate() {
            if idx < lo || idx >= hi {
                assert_eq!(count, 0, "out-of-window level {idx} was scored");
            }
        }
    }

    #[test]
    fn test_stepsize_zero_rejected() {
        let img = blob_image();
        let params = SweepParams {
            stepsize: 0,
            ..SweepParams::default()
        };
        assert!(matches!(
            select_optimal_threshold(&img, 128, &tiers_for(&img), &params, None),
            Err(BinarizeError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_stepsize_strides_window() {
        let img = blob_image();
        let t_otsu = crate::otsu::otsu_threshold(&img);
        let params = SweepParams {
            stepsize: 4,
            ..SweepParams::default()
        };
        let outcome =
            select_optimal_threshold(&img, t_otsu, &tiers_for(&img), &params, None).unwrap();

        let lo = usize::from(t_otsu).saturating_sub(usize::from(params.offset));
        for (idx, &count) in outcome.table.counts_any.iter().enumerate() {
            if count > 0 {
                assert_eq!((idx - lo) % 4, 0, "level {idx} off the stride grid");
            }
        }
    }

    #[test]
    fn test_all_zero_scores_fall_back_to_window_start() {
        // Tiers no component can reach: every level scores zero.
        let img = blob_image();
        let t_otsu = crate::otsu::otsu_threshold(&img);
        let tiers = AreaTiers {
            lam: 1e9,
            large: 1e9,
            verylarge: 1e9,
        };
        let params = SweepParams::default();
        let outcome = select_optimal_threshold(&img, t_otsu, &tiers, &params, None).unwrap();

        let lo = usize::from(t_otsu).saturating_sub(usize::from(params.offset));
        assert_eq!(usize::from(outcome.threshold), lo);
    }

    #[test]
    fn test_cancelled_sweep_still_selects() {
        let img = blob_image();
        let t_otsu = crate::otsu::otsu_threshold(&img);
        let token = CancelToken::new();
        token.cancel();
        let params = SweepParams::default();
        let outcome =
            select_optimal_threshold(&img, t_otsu, &tiers_for(&img), &params, Some(&token))
                .unwrap();

        // Nothing was evaluated, so the table is zero and the fallback wins.
        assert!(outcome.table.counts_any.iter().all(|&c| c == 0));
        let lo = usize::from(t_otsu).saturating_sub(usize::from(params.offset));
        assert_eq!(usize::from(outcome.threshold), lo);
        assert_eq!(outcome.mask.width(), img.width());
    }

    #[test]
    fn test_parallel_sweep_deterministic() {
        let img = blob_image();
        let t_otsu = crate::otsu::otsu_threshold(&img);
        let params = SweepParams::default();
        let a = select_optimal_threshold(&img, t_otsu, &tiers_for(&img), &params, None).unwrap();
        let b = select_optimal_threshold(&img, t_otsu, &tiers_for(&img), &params, None).unwrap();
        assert_eq!(a.threshold, b.threshold);
        assert_eq!(a.mask, b.mask);
        assert_eq!(a.table.scores, b.table.scores);
    }
}
