//! Structuring-element sizing regression test
//!
//! Pins the reference kernel and minimum-area outputs for a 100x110 image
//! with sizing factors (0.05, 5): a 5x5 cross-shaped ellipse and lam = 15.
//!
//! Run with:
//! ```
//! cargo test -p salient-morph --test se_sizing_reg
//! ```

use salient_core::GrayImage;
use salient_morph::{SeParams, get_se};

#[test]
fn se_sizing_reg() {
    let img = GrayImage::new(100, 110).unwrap();
    let params = SeParams {
        se_size_factor: 0.05,
        lam_factor: 5.0,
    };

    let (se, lam) = get_se(&img, &params).unwrap();

    assert_eq!(se.width(), 5);
    assert_eq!(se.height(), 5);
    assert_eq!(lam, 15.0);

    let expected = [
        [0u8, 0, 1, 0, 0],
        [1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1],
        [0, 0, 1, 0, 0],
    ];
    for (y, row) in expected.iter().enumerate() {
        for (x, &want) in row.iter().enumerate() {
            assert_eq!(
                se.get(x as u32, y as u32),
                Some(want == 1),
                "kernel mismatch at ({x}, {y})"
            );
        }
    }
    assert_eq!(se.hit_count(), 21);
}
