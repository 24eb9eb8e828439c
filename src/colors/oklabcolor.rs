//! A module that implements the [OKLab color space](https://bottosson.github.io/posts/oklab/), a
//! perceptually uniform space built on an approximation of cone responses. Like CIELAB it has a
//! lightness axis `L` and two opponent axes `a` (green-red) and `b` (blue-yellow), but its
//! Euclidean distance tracks perceived difference well enough that this crate uses it directly as
//! ΔE.
//!
//! # Accuracy and reproducibility
//! The forward transform needs a cube root. This crate always uses the exact (sub-ulp accurate)
//! `libm::cbrt` in `f64` and never a bit-trick approximation: a fast cube root with ~1e-3 relative
//! error would be close enough for the eye, but it would change the low bits of every output, and
//! swapping between the two per platform would break the guarantee that identical configurations
//! produce identical colors everywhere. Because `libm` is a pure Rust implementation, the result
//! doesn't depend on the platform's C library either.

use crate::color::RGBColor;
use crate::consts::{LMS_TO_OKLAB, LMS_TO_RGB, OKLAB_TO_LMS, READABLE_MAX_L, READABLE_MIN_L, RGB_TO_LMS};
use crate::coord::Coord;

/// A color in the OKLab color space.
///
/// # Example
/// ```
/// # use colorjourney::prelude::*;
/// # use colorjourney::colors::OklabColor;
/// let red = OklabColor::from_rgb(RGBColor{r: 1., g: 0., b: 0.});
/// let blue = OklabColor::from_rgb(RGBColor{r: 0., g: 0., b: 1.});
/// let de = red.distance(&blue);
/// assert!(de > 0.3 && de < 0.6);
/// assert_eq!(de, blue.distance(&red));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct OklabColor {
    /// Perceived lightness, from 0 (black) to 1 (diffuse white).
    pub l: f32,
    /// The green-red opponent axis, roughly in [-0.4, 0.4]. Negative is greenish.
    pub a: f32,
    /// The blue-yellow opponent axis, roughly in [-0.4, 0.4]. Negative is bluish.
    pub b: f32,
}

impl OklabColor {
    /// Converts linear RGB to OKLab: a linear map to cone responses, a cube root, and a second
    /// linear map to the opponent axes. Out-of-range RGB is accepted and converted as-is.
    pub fn from_rgb(rgb: RGBColor) -> OklabColor {
        let lms = Coord::from(rgb).transform(&RGB_TO_LMS);
        OklabColor::from(lms.map(libm::cbrt).transform(&LMS_TO_OKLAB))
    }
    /// Converts back to linear RGB. The result is **not** clamped: OKLab colors outside the
    /// display gamut produce channels outside [0, 1], and it's up to the caller to call
    /// [`RGBColor::clamp`].
    pub fn to_rgb(&self) -> RGBColor {
        let lms_ = Coord::from(*self).transform(&OKLAB_TO_LMS);
        RGBColor::from(lms_.map(|x| x * x * x).transform(&LMS_TO_RGB))
    }
    /// The perceptual distance ΔE between two colors: their Euclidean distance in OKLab. This is
    /// never negative, is symmetric, and is zero only for identical colors. As rough guidance,
    /// 0.02 is barely noticeable, 0.1 is clearly different, and 0.2 or more is bold contrast.
    pub fn distance(&self, other: &OklabColor) -> f32 {
        Coord::from(*self).euclidean_distance(&Coord::from(*other)) as f32
    }
    /// Returns `true` if the color is neither too dark nor too light to work as a foreground
    /// element without any further contrast treatment: lightness between 0.2 and 0.95. This is a
    /// heuristic that knows nothing about the background.
    pub fn is_readable(&self) -> bool {
        self.l >= READABLE_MIN_L && self.l <= READABLE_MAX_L
    }
}

impl From<RGBColor> for OklabColor {
    fn from(rgb: RGBColor) -> OklabColor {
        OklabColor::from_rgb(rgb)
    }
}

impl From<OklabColor> for RGBColor {
    fn from(lab: OklabColor) -> RGBColor {
        lab.to_rgb()
    }
}

impl From<Coord> for OklabColor {
    fn from(c: Coord) -> OklabColor {
        OklabColor {
            l: c.x as f32,
            a: c.y as f32,
            b: c.z as f32,
        }
    }
}

impl From<OklabColor> for Coord {
    fn from(c: OklabColor) -> Coord {
        Coord {
            x: f64::from(c.l),
            y: f64::from(c.a),
            z: f64::from(c.b),
        }
    }
}

/// The perceptual distance between two OKLab colors; see [`OklabColor::distance`].
pub fn distance(a: &OklabColor, b: &OklabColor) -> f32 {
    a.distance(b)
}
