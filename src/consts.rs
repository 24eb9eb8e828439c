//! This file provides the constant matrices used for OKLab conversion, along with the tuning
//! constants that shape a journey. The matrices are written out in full, with the precision
//! published by Björn Ottosson, rather than derived at runtime: every platform then starts from the
//! exact same bits, which is what makes journeys reproducible.

use crate::coord::Mat3;

/// Linear sRGB to approximate cone responses (LMS).
pub const RGB_TO_LMS: Mat3 = [
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
];

/// Cube-rooted LMS to OKLab.
pub const LMS_TO_OKLAB: Mat3 = [
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
];

/// OKLab to cube-rooted LMS; the inverse of `LMS_TO_OKLAB`.
pub const OKLAB_TO_LMS: Mat3 = [
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
];

/// LMS to linear sRGB; the inverse of `RGB_TO_LMS`.
pub const LMS_TO_RGB: Mat3 = [
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.7076147010],
];

/// Upper bound on OKLab chroma for colors the journey produces.
pub const MAX_CHROMA: f32 = 0.4;

/// Maximum number of anchors a configuration may hold.
pub const MAX_ANCHORS: usize = 8;

/// Seed used when a configuration doesn't specify one.
pub const DEFAULT_SEED: u64 = 0x123456789ABCDEF0;

// Bias resolution.
pub(crate) const LIGHTNESS_BIAS_STRENGTH: f32 = 0.2;
pub(crate) const CHROMA_MUTED: f32 = 0.6;
pub(crate) const CHROMA_VIVID: f32 = 1.4;
pub(crate) const TEMPERATURE_SHIFT: f32 = 0.3;
pub(crate) const VIBRANCY_GAIN: f32 = 0.6;

// Single-anchor shaping.
pub(crate) const OPEN_ROTATION: f32 = 5.0 * std::f32::consts::PI / 3.0;
pub(crate) const LIGHTNESS_WAVE: f32 = 0.05;
pub(crate) const CHROMA_ENVELOPE: f32 = 0.2;

// Contrast thresholds, as OKLab distances.
pub(crate) const CONTRAST_LOW: f32 = 0.05;
pub(crate) const CONTRAST_MEDIUM: f32 = 0.10;
pub(crate) const CONTRAST_HIGH: f32 = 0.15;
pub(crate) const CONTRAST_MAX_ITERATIONS: u32 = 8;
pub(crate) const CONTRAST_MARGIN: f32 = 1e-3;
pub(crate) const CHROMA_NUDGE_GAIN: f32 = 1.15;
pub(crate) const CHROMA_NUDGE_STEP: f32 = 0.01;

// Variation magnitudes, as fractions of each channel's range.
pub(crate) const VARIATION_SUBTLE: f32 = 0.02;
pub(crate) const VARIATION_NOTICEABLE: f32 = 0.05;

// Readability window on OKLab lightness.
pub(crate) const READABLE_MIN_L: f32 = 0.2;
pub(crate) const READABLE_MAX_L: f32 = 0.95;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coord;

    fn assert_inverse(m: &Mat3, inv: &Mat3) {
        for (i, row) in [[1., 0., 0.], [0., 1., 0.], [0., 0., 1.]].iter().enumerate() {
            let p = Coord{x: row[0], y: row[1], z: row[2]};
            let back = p.transform(m).transform(inv);
            let expected = [back.x, back.y, back.z];
            for j in 0..3 {
                let target = if i == j { 1. } else { 0. };
                assert!((expected[j] - target).abs() <= 1e-6, "{:?}", back);
            }
        }
    }

    #[test]
    fn test_rgb_lms_inverse() {
        assert_inverse(&RGB_TO_LMS, &LMS_TO_RGB);
    }
    #[test]
    fn test_oklab_lms_inverse() {
        assert_inverse(&LMS_TO_OKLAB, &OKLAB_TO_LMS);
    }
    #[test]
    fn test_white_has_unit_lightness() {
        let white = Coord{x: 1., y: 1., z: 1.}.transform(&RGB_TO_LMS).map(libm::cbrt);
        let lab = white.transform(&LMS_TO_OKLAB);
        assert!((lab.x - 1.).abs() <= 1e-6);
        assert!(lab.y.abs() <= 1e-6 && lab.z.abs() <= 1e-6);
    }
}
