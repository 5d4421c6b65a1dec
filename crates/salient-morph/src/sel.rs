//! Structuring Element (SEL)
//!
//! A structuring element defines the neighborhood shape used to
//! parameterize salient-region detection. Only the elliptical form is
//! needed here: a boolean kernel whose hits approximate an ellipse
//! inscribed in the kernel rectangle.

use crate::error::{MorphError, MorphResult};

/// Structuring Element (SEL)
///
/// A rectangular boolean kernel. `true` elements are hits; the origin is
/// the kernel center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sel {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl Sel {
    /// Create an elliptical structuring element inscribed in the
    /// `width` x `height` rectangle.
    ///
    /// For each row, the hit span is the horizontal chord of the inscribed
    /// ellipse at that row, rounded to the nearest pixel. A 1x1 kernel is a
    /// single hit; odd square sizes produce the classic rounded-cross
    /// shapes (a 5x5 kernel hits everything except the four corners' outer
    /// pairs).
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidSize`] if either dimension is 0.
    pub fn create_ellipse(width: u32, height: u32) -> MorphResult<Self> {
        if width == 0 || height == 0 {
            return Err(MorphError::InvalidSize {
                width: i64::from(width),
                height: i64::from(height),
            });
        }

        let mut data = vec![false; width as usize * height as usize];
        let r = (height / 2) as i32;
        let c = (width / 2) as i32;
        let inv_r2 = if r > 0 { 1.0 / f64::from(r * r) } else { 0.0 };

        for i in 0..height as i32 {
            let dy = i - r;
            if dy.abs() > r {
                continue;
            }
            let (j1, j2) = if r == 0 {
                (0, width as i32)
            } else {
                let chord = f64::from(r * r - dy * dy) * inv_r2;
                let dx = (f64::from(c) * chord.sqrt()).round() as i32;
                ((c - dx).max(0), (c + dx + 1).min(width as i32))
            };
            let row = i as usize * width as usize;
            for j in j1..j2 {
                data[row + j as usize] = true;
            }
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Get the kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get an element at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Get raw access to the kernel elements, row-major.
    pub fn data(&self) -> &[bool] {
        &self.data
    }

    /// Count the number of hit elements.
    pub fn hit_count(&self) -> usize {
        self.data.iter().filter(|&&e| e).count()
    }

    /// Iterate over hit positions relative to the kernel center.
    pub fn hit_offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let cx = (self.width / 2) as i32;
        let cy = (self.height / 2) as i32;
        let width = self.width;

        self.data.iter().enumerate().filter_map(move |(idx, &hit)| {
            if hit {
                let x = (idx as u32 % width) as i32;
                let y = (idx as u32 / width) as i32;
                Some((x - cx, y - cy))
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(sel: &Sel) -> Vec<Vec<u8>> {
        (0..sel.height())
            .map(|y| {
                (0..sel.width())
                    .map(|x| u8::from(sel.get(x, y).unwrap()))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_single_pixel() {
        let sel = Sel::create_ellipse(1, 1).unwrap();
        assert_eq!(sel.hit_count(), 1);
        assert_eq!(sel.get(0, 0), Some(true));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            Sel::create_ellipse(0, 5),
            Err(MorphError::InvalidSize { .. })
        ));
        assert!(Sel::create_ellipse(5, 0).is_err());
    }

    #[test]
    fn test_ellipse_3x3() {
        let sel = Sel::create_ellipse(3, 3).unwrap();
        assert_eq!(
            rows(&sel),
            vec![vec![0, 1, 0], vec![1, 1, 1], vec![0, 1, 0]]
        );
    }

    #[test]
    fn test_ellipse_5x5() {
        let sel = Sel::create_ellipse(5, 5).unwrap();
        assert_eq!(
            rows(&sel),
            vec![
                vec![0, 0, 1, 0, 0],
                vec![1, 1, 1, 1, 1],
                vec![1, 1, 1, 1, 1],
                vec![1, 1, 1, 1, 1],
                vec![0, 0, 1, 0, 0],
            ]
        );
    }

    #[test]
    fn test_hit_offsets_centered() {
        let sel = Sel::create_ellipse(3, 3).unwrap();
        let offsets: Vec<(i32, i32)> = sel.hit_offsets().collect();
        assert_eq!(offsets.len(), sel.hit_count());
        assert!(offsets.contains(&(0, 0)));
        assert!(offsets.contains(&(-1, 0)));
        assert!(offsets.contains(&(0, 1)));
        assert!(!offsets.contains(&(-1, -1)));
    }
}
