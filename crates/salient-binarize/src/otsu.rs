//! Otsu's global threshold estimation
//!
//! Selects the gray level maximizing between-class variance over the
//! normalized 256-bin histogram. Used standalone by the Otsu binarizer and
//! as the search-window center for the data-driven sweep.

use salient_core::{GrayImage, HISTOGRAM_BINS};

/// Compute Otsu's threshold from a 256-bin intensity histogram.
///
/// Maximizes the between-class variance between pixels `<= t` and pixels
/// `> t`. Ties break to the lowest qualifying level, so a perfectly
/// bimodal histogram yields the lowest level that fully separates the two
/// clusters. A degenerate single-level histogram yields 0.
pub fn otsu_level(hist: &[u32; HISTOGRAM_BINS]) -> u8 {
    let total: f64 = hist.iter().map(|&c| f64::from(c)).sum();
    let sum_all: f64 = hist
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * f64::from(c))
        .sum();

    let mut sum_bg = 0.0;
    let mut weight_bg = 0.0;
    let mut max_variance = 0.0;
    let mut best = 0u8;

    for (level, &count) in hist.iter().enumerate() {
        let count = f64::from(count);
        weight_bg += count;
        if weight_bg == 0.0 {
            continue;
        }
        let weight_fg = total - weight_bg;
        if weight_fg == 0.0 {
            break;
        }
        sum_bg += level as f64 * count;

        let mean_bg = sum_bg / weight_bg;
        let mean_fg = (sum_all - sum_bg) / weight_fg;
        let diff = mean_bg - mean_fg;
        let variance = weight_bg * weight_fg * diff * diff;

        // Strict comparison keeps the lowest level on a plateau.
        if variance > max_variance {
            max_variance = variance;
            best = level as u8;
        }
    }

    best
}

/// Compute Otsu's threshold for a grayscale image.
pub fn otsu_threshold(img: &GrayImage) -> u8 {
    otsu_level(&img.histogram())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bimodal_spikes_tie_low() {
        // Two pure clusters at 50 and 200: every level in [50, 199]
        // separates them with identical between-class variance, so the
        // tie-break picks 50.
        let mut hist = [0u32; HISTOGRAM_BINS];
        hist[50] = 500;
        hist[200] = 500;
        assert_eq!(otsu_level(&hist), 50);
    }

    #[test]
    fn test_spread_clusters_separated() {
        let mut img = GrayImage::new(20, 20).unwrap();
        for y in 0..20 {
            for x in 0..20 {
                let v = if (x + y) % 3 == 0 {
                    190 + ((x * 7 + y) % 20) as u8
                } else {
                    40 + ((x + y * 3) % 20) as u8
                };
                img.set_pixel(x, y, v).unwrap();
            }
        }
        let t = otsu_threshold(&img);
        // Any level in [59, 189] splits the clusters exactly.
        assert!((59..190).contains(&(t as usize)), "threshold {t}");
    }

    #[test]
    fn test_degenerate_single_level() {
        let mut hist = [0u32; HISTOGRAM_BINS];
        hist[77] = 1000;
        assert_eq!(otsu_level(&hist), 0);
    }

    #[test]
    fn test_deterministic() {
        let img = GrayImage::from_vec(4, 2, vec![10, 10, 10, 10, 240, 240, 240, 240]).unwrap();
        assert_eq!(otsu_threshold(&img), otsu_threshold(&img));
        assert_eq!(otsu_threshold(&img), 10);
    }
}
