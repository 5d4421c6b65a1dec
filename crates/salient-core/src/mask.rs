//! Binary mask container
//!
//! A `BinaryMask` is the output of binarization: an image of the same
//! dimensions as its source where every pixel is either foreground (255)
//! or background (0). The two-valued invariant is enforced by the API;
//! pixels are only ever written from a `bool`.

use crate::error::{Error, Result};

/// Foreground pixel value in a binary mask
pub const FOREGROUND: u8 = 255;

/// Background pixel value in a binary mask
pub const BACKGROUND: u8 = 0;

/// Two-valued image mask
///
/// Same row-major layout as [`GrayImage`](crate::GrayImage); every element
/// is exactly [`FOREGROUND`] or [`BACKGROUND`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl BinaryMask {
    /// Create a new mask with all pixels set to background.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width` or `height` is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let data = vec![BACKGROUND; width as usize * height as usize];
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a mask by evaluating a predicate at every (x, y).
    ///
    /// The two-valued invariant holds by construction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width` or `height` is 0.
    pub fn from_fn<F>(width: u32, height: u32, mut foreground: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> bool,
    {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(if foreground(x, y) { FOREGROUND } else { BACKGROUND });
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Get the mask width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the mask height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Check whether the pixel at (x, y) is foreground.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize] == FOREGROUND)
    }

    /// Set the pixel at (x, y) to foreground or background.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set(&mut self, x: u32, y: u32, foreground: bool) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.data[y as usize * self.width as usize + x as usize] =
            if foreground { FOREGROUND } else { BACKGROUND };
        Ok(())
    }

    /// Get a single row of mask values.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Get raw access to the mask buffer. Values are 0 or 255 only.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Count the foreground pixels.
    pub fn count_foreground(&self) -> u64 {
        self.data.iter().filter(|&&v| v == FOREGROUND).count() as u64
    }

    /// Check if two masks have the same width and height.
    pub fn sizes_equal(&self, other: &BinaryMask) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Count the pixels at which two masks differ.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the masks have different sizes.
    pub fn diff_count(&self, other: &BinaryMask) -> Result<u64> {
        if !self.sizes_equal(other) {
            return Err(Error::InvalidParameter(format!(
                "mask sizes differ: {}x{} vs {}x{}",
                self.width, self.height, other.width, other.height
            )));
        }
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .filter(|(a, b)| a != b)
            .count() as u64)
    }
}
