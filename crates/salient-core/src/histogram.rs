//! Histogram generation for grayscale images
//!
//! The 256-bin intensity histogram drives global threshold estimation.

use crate::gray::GrayImage;

/// Number of bins in an 8-bit intensity histogram
pub const HISTOGRAM_BINS: usize = 256;

impl GrayImage {
    /// Compute the 256-bin intensity histogram of the image.
    ///
    /// Bin `i` counts the pixels with intensity exactly `i`.
    /// The bin counts always sum to `width * height`.
    ///
    /// # Example
    ///
    /// ```
    /// use salient_core::GrayImage;
    ///
    /// let img = GrayImage::from_vec(2, 2, vec![0, 0, 200, 255]).unwrap();
    /// let hist = img.histogram();
    /// assert_eq!(hist[0], 2);
    /// assert_eq!(hist[200], 1);
    /// assert_eq!(hist[255], 1);
    /// ```
    pub fn histogram(&self) -> [u32; HISTOGRAM_BINS] {
        let mut hist = [0u32; HISTOGRAM_BINS];
        for &v in self.data() {
            hist[v as usize] += 1;
        }
        hist
    }
}
