//! This file implements OKLCh, a cylindrical transformation of OKLab that uses chroma and hue
//! instead of two opponent color axes. Journeys are designed in this space (hue rotation, chroma
//! scaling, lightness shifts) and converted back to OKLab for distance and to RGB for output.

use std::f32::consts::{PI, TAU};

use super::oklabcolor::OklabColor;
use crate::color::RGBColor;
use crate::coord::Coord;

/// Wraps an angle in radians into [0, 2π). Non-finite input maps to 0, so a NaN hue never leaks
/// into a color.
///
/// # Example
/// ```
/// # use colorjourney::colors::oklchcolor::normalize_hue;
/// use std::f32::consts::PI;
/// assert_eq!(normalize_hue(-PI / 2.), 1.5 * PI);
/// assert_eq!(normalize_hue(0.), 0.);
/// assert!(normalize_hue(7. * PI) < 2. * PI);
/// ```
pub fn normalize_hue(h: f32) -> f32 {
    if !h.is_finite() {
        return 0.;
    }
    let wrapped = h.rem_euclid(TAU);
    // rem_euclid can round up to exactly 2π for tiny negative inputs
    if wrapped >= TAU {
        0.
    } else {
        wrapped
    }
}

/// The signed difference `to - from` along the shorter arc of the hue circle, in [-π, π]. A
/// difference of exactly π is reported as positive.
pub fn shortest_hue_delta(from: f32, to: f32) -> f32 {
    let mut diff = to - from;
    if diff > PI {
        diff -= TAU;
    } else if diff < -PI {
        diff += TAU;
    }
    diff
}

/// A cylindrical form of OKLab, analogous to the relationship between HSL and RGB.
/// # Example
///
/// ```
/// # use colorjourney::prelude::*;
/// # use colorjourney::colors::OklchColor;
/// // rotate red halfway around the hue circle, keeping lightness and chroma
/// let red = RGBColor{r: 0.7, g: 0.1, b: 0.1};
/// let mut lch = OklchColor::from_rgb(red);
/// lch.h = lch.h + std::f32::consts::PI;
/// let cyanish = lch.to_rgb().clamp();
/// assert!(cyanish.g > cyanish.r && cyanish.b > cyanish.r);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct OklchColor {
    /// The lightness component, identical to OKLab's. Ranges between 0 and 1.
    pub l: f32,
    /// The chroma component: distance from the neutral axis, the radius in cylindrical
    /// coordinates. Displayable colors stay below roughly 0.4.
    pub c: f32,
    /// The hue angle in radians. Conversions produce values in [0, 2π); 0 is pinkish red, about
    /// π/2 is yellow, π is cyan-green and about 3π/2 is blue.
    pub h: f32,
}

impl OklchColor {
    /// Converts from OKLab. Hue is `atan2(b, a)` wrapped into [0, 2π); a neutral gray gets
    /// whatever angle its (tiny) opponent components imply, or 0 for exact black.
    pub fn from_oklab(lab: OklabColor) -> OklchColor {
        OklchColor {
            l: lab.l,
            c: libm::hypotf(lab.a, lab.b),
            h: normalize_hue(libm::atan2f(lab.b, lab.a)),
        }
    }
    /// Converts back to OKLab: `a = c cos h`, `b = c sin h`.
    pub fn to_oklab(&self) -> OklabColor {
        OklabColor {
            l: self.l,
            a: self.c * libm::cosf(self.h),
            b: self.c * libm::sinf(self.h),
        }
    }
    /// Converts linear RGB to OKLCh by way of OKLab.
    pub fn from_rgb(rgb: RGBColor) -> OklchColor {
        OklchColor::from_oklab(OklabColor::from_rgb(rgb))
    }
    /// Converts to linear RGB by way of OKLab. Like [`OklabColor::to_rgb`], this doesn't clamp.
    pub fn to_rgb(&self) -> RGBColor {
        self.to_oklab().to_rgb()
    }
    /// The perceptual distance to another color, measured in OKLab.
    pub fn distance(&self, other: &OklchColor) -> f32 {
        self.to_oklab().distance(&other.to_oklab())
    }
}

impl From<OklabColor> for OklchColor {
    fn from(lab: OklabColor) -> OklchColor {
        OklchColor::from_oklab(lab)
    }
}

impl From<OklchColor> for OklabColor {
    fn from(lch: OklchColor) -> OklabColor {
        lch.to_oklab()
    }
}

impl From<Coord> for OklchColor {
    fn from(c: Coord) -> OklchColor {
        OklchColor {
            l: c.x as f32,
            c: c.y as f32,
            h: c.z as f32,
        }
    }
}

impl From<OklchColor> for Coord {
    fn from(c: OklchColor) -> Coord {
        Coord {
            x: f64::from(c.l),
            y: f64::from(c.c),
            z: f64::from(c.h),
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use float_cmp::approx_eq;

    fn angular_gap(a: f32, b: f32) -> f32 {
        shortest_hue_delta(a, b).abs()
    }

    #[test]
    fn test_hue_wraps_full_turns() {
        for i in -40..40 {
            let theta = i as f32 * 0.37;
            let a = normalize_hue(theta);
            let b = normalize_hue(theta + TAU);
            assert!(a >= 0. && a < TAU);
            assert!(b >= 0. && b < TAU);
            assert!(angular_gap(a, b) <= 1e-5, "{} vs {}", a, b);
        }
    }
    #[test]
    fn test_hue_edge_cases() {
        assert_eq!(normalize_hue(TAU), 0.);
        assert_eq!(normalize_hue(-1e-9), 0.);
        assert_eq!(normalize_hue(f32::NAN), 0.);
        assert_eq!(normalize_hue(f32::INFINITY), 0.);
    }
    #[test]
    fn test_shortest_delta() {
        assert!(approx_eq!(f32, shortest_hue_delta(6.2, 0.2), 0.2 + TAU - 6.2, epsilon = 1e-5));
        assert!(approx_eq!(f32, shortest_hue_delta(0.2, 6.2), 6.2 - TAU - 0.2, epsilon = 1e-5));
        assert_eq!(shortest_hue_delta(1., 2.), 1.);
        assert_eq!(shortest_hue_delta(0., PI), PI);
    }
    #[test]
    fn test_lab_lch_round_trip() {
        let lab = OklabColor{l: 0.6, a: -0.1, b: 0.05};
        let lch = OklchColor::from_oklab(lab);
        assert!(lch.h >= 0. && lch.h < TAU);
        let back = lch.to_oklab();
        assert!(approx_eq!(f32, back.l, lab.l, epsilon = 1e-6));
        assert!(approx_eq!(f32, back.a, lab.a, epsilon = 1e-6));
        assert!(approx_eq!(f32, back.b, lab.b, epsilon = 1e-6));
    }
    #[test]
    fn test_negative_hue_quadrant() {
        // b < 0 gives a negative atan2, which must come back in the upper half of the range
        let lch = OklchColor::from_oklab(OklabColor{l: 0.5, a: 0.1, b: -0.1});
        assert!(approx_eq!(f32, lch.h, 1.75 * PI, epsilon = 1e-5));
        assert!(approx_eq!(f32, lch.c, 0.1 * 2f32.sqrt(), epsilon = 1e-6));
    }
}
