//! Subpixel sampling of multi-band rasters.
//!
//! Integer coordinates refer to pixel centers. Sampling uses the floor-based
//! 2x2 bilinear neighborhood and is strictly interior-only: if any of the four
//! neighbors `(x0, y0)`, `(x0 + 1, y0)`, `(x0, y0 + 1)`, `(x0 + 1, y0 + 1)` lies
//! outside the raster, the sample is invalid. There is no clamping, reflection
//! or constant fill.

use crate::color_pairs::raster::Raster;

/// Top-left neighbor and fractional offsets of a valid bilinear sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighborhood {
    pub x0: usize,
    pub y0: usize,
    pub dx: f64,
    pub dy: f64,
}

/// Locates the 2x2 neighborhood of `(x, y)`, or `None` when it is not fully
/// inside `[0, width - 1] x [0, height - 1]`.
pub fn neighborhood(raster: &Raster, x: f64, y: f64) -> Option<Neighborhood> {
    if !x.is_finite() || !y.is_finite() {
        return None;
    }

    let fx = x.floor();
    let fy = y.floor();

    if fx < 0.0 || fy < 0.0 {
        return None;
    }
    // Compared in floating point so that huge coordinates cannot wrap.
    if fx + 1.0 > raster.width() as f64 - 1.0 || fy + 1.0 > raster.height() as f64 - 1.0 {
        return None;
    }

    Some(Neighborhood {
        x0: fx as usize,
        y0: fy as usize,
        dx: x - fx,
        dy: y - fy,
    })
}

/// Rounds to nearest and clamps into the `u8` range.
pub fn quantize_u8(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn interpolate(raster: &Raster, n: &Neighborhood, band: usize) -> f64 {
    let bands = raster.bands();
    let stride = raster.width() * bands;
    let data = raster.data();
    let base = n.y0 * stride + n.x0 * bands + band;

    let p00 = data[base] as f64;
    let p10 = data[base + bands] as f64;
    let p01 = data[base + stride] as f64;
    let p11 = data[base + stride + bands] as f64;

    let top = p00 * (1.0 - n.dx) + p10 * n.dx;
    let bottom = p01 * (1.0 - n.dx) + p11 * n.dx;
    top * (1.0 - n.dy) + bottom * n.dy
}

/// Bilinear sample of every band at `(x, y)` without quantization.
pub fn sample_bilinear_f64(raster: &Raster, x: f64, y: f64) -> Option<Vec<f64>> {
    let n = neighborhood(raster, x, y)?;
    Some(
        (0..raster.bands())
            .map(|band| interpolate(raster, &n, band))
            .collect(),
    )
}

/// Bilinear sample of every band at `(x, y)`, quantized to `u8`.
pub fn sample_bilinear(raster: &Raster, x: f64, y: f64) -> Option<Vec<u8>> {
    let mut out = vec![0; raster.bands()];
    sample_bilinear_into(raster, x, y, &mut out).then_some(out)
}

/// Writes the quantized bilinear sample into `out` and reports validity.
///
/// `out` must hold exactly `raster.bands()` values. On an invalid sample its
/// contents are left untouched.
pub fn sample_bilinear_into(raster: &Raster, x: f64, y: f64, out: &mut [u8]) -> bool {
    debug_assert_eq!(out.len(), raster.bands());
    let Some(n) = neighborhood(raster, x, y) else {
        return false;
    };
    for (band, value) in out.iter_mut().enumerate() {
        *value = quantize_u8(interpolate(raster, &n, band));
    }
    true
}

#[cfg(test)]
mod tests {
    use super::{neighborhood, quantize_u8, sample_bilinear, sample_bilinear_f64};
    use crate::color_pairs::raster::Raster;

    fn gradient_4x4() -> Raster {
        // band 0: 10x + y, band 1: 100 + y * 20, band 2: 255 - 7x
        Raster::from_fn(4, 4, 3, |x, y, b| match b {
            0 => (10 * x + y) as u8,
            1 => (100 + 20 * y) as u8,
            _ => (255 - 7 * x) as u8,
        })
    }

    #[test]
    fn integer_coordinates_return_stored_values() {
        let raster = gradient_4x4();
        for y in 0..3 {
            for x in 0..3 {
                let values = sample_bilinear(&raster, x as f64, y as f64).expect("interior");
                assert_eq!(values.as_slice(), raster.pixel(x, y).expect("pixel"));
            }
        }
    }

    #[test]
    fn fractional_coordinates_use_bilinear_weights() {
        let raster = Raster::from_vec(2, 2, 1, vec![0, 10, 20, 30]).expect("valid raster");

        let center = sample_bilinear_f64(&raster, 0.5, 0.5).expect("interior");
        assert!((center[0] - 15.0).abs() < 1e-12);

        // (0.25, 0.75): top = 2.5, bottom = 22.5 -> 2.5 * 0.25 + 22.5 * 0.75 = 17.5
        let off = sample_bilinear_f64(&raster, 0.25, 0.75).expect("interior");
        assert!((off[0] - 17.5).abs() < 1e-12);
        assert_eq!(sample_bilinear(&raster, 0.25, 0.75), Some(vec![18]));
    }

    #[test]
    fn bands_are_interpolated_independently() {
        let raster = gradient_4x4();
        let values = sample_bilinear_f64(&raster, 1.5, 2.25).expect("interior");
        assert!((values[0] - (15.0 + 2.25)).abs() < 1e-9);
        assert!((values[1] - (100.0 + 45.0)).abs() < 1e-9);
        assert!((values[2] - (255.0 - 10.5)).abs() < 1e-9);
    }

    #[test]
    fn constant_raster_is_invariant() {
        let raster = Raster::new_fill(5, 4, 3, 93);
        for &(x, y) in &[(0.0, 0.0), (0.3, 0.9), (2.5, 1.5), (3.999, 2.999), (1.0, 2.0)] {
            assert_eq!(sample_bilinear(&raster, x, y), Some(vec![93, 93, 93]));
        }
    }

    #[test]
    fn any_missing_neighbor_is_invalid() {
        let raster = gradient_4x4();

        // Last row/column have no +1 neighbor, even at integer positions.
        assert_eq!(sample_bilinear(&raster, 3.0, 1.0), None);
        assert_eq!(sample_bilinear(&raster, 1.0, 3.0), None);
        assert!(sample_bilinear(&raster, 2.999, 2.999).is_some());
        assert_eq!(sample_bilinear(&raster, -0.001, 1.0), None);
        assert_eq!(sample_bilinear(&raster, 1.0, -0.5), None);
        assert_eq!(sample_bilinear(&raster, 1e300, 1.0), None);
        assert_eq!(sample_bilinear(&raster, f64::NAN, 1.0), None);
    }

    #[test]
    fn tiny_rasters_have_no_interior() {
        let single_column = Raster::new_fill(1, 5, 1, 7);
        assert_eq!(sample_bilinear(&single_column, 0.0, 1.0), None);

        let empty = Raster::new_fill(0, 0, 3, 0);
        assert_eq!(sample_bilinear(&empty, 0.0, 0.0), None);
    }

    #[test]
    fn neighborhood_reports_offsets() {
        let raster = gradient_4x4();
        let n = neighborhood(&raster, 1.25, 0.5).expect("interior");
        assert_eq!((n.x0, n.y0), (1, 0));
        assert!((n.dx - 0.25).abs() < 1e-12);
        assert!((n.dy - 0.5).abs() < 1e-12);
    }

    #[test]
    fn quantize_rounds_and_clamps() {
        assert_eq!(quantize_u8(17.5), 18);
        assert_eq!(quantize_u8(17.49), 17);
        assert_eq!(quantize_u8(-0.4), 0);
        assert_eq!(quantize_u8(255.4), 255);
        assert_eq!(quantize_u8(300.0), 255);
    }
}
