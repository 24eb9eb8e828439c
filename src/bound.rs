//! This module describes the Bound trait, which allows for a description of which component values
//! a color type supports. RGB output is bounded to the unit cube, and the polar form journeys work
//! in is bounded to lightness in [0, 1], chroma in [0, `MAX_CHROMA`] and hue in [0, 2π). Clamping to
//! these bounds is the only gamut handling this crate does.

use std::f32::consts::TAU;

use crate::color::RGBColor;
use crate::colors::oklchcolor::{normalize_hue, OklchColor};
use crate::consts::MAX_CHROMA;

/// Describes a color type whose components have explicit bounds. A type only needs to list its
/// bounds and expose its components as an array; clamping comes for free.
/// # Example
/// ```
/// # use colorjourney::prelude::*;
/// # use colorjourney::colors::OklchColor;
/// let wild = OklchColor{l: 1.4, c: -0.2, h: 7.};
/// let tame = wild.clamp_to_bounds();
/// assert_eq!(tame.l, 1.);
/// assert_eq!(tame.c, 0.);
/// ```
pub trait Bound: Sized {
    /// Returns an array [(min1, max1), (min2, max2), (min3, max3)] that represents the bounds on each
    /// component, in the order that [`Bound::components`] lists them.
    fn bounds() -> [(f32, f32); 3];
    /// The three components of the color.
    fn components(&self) -> [f32; 3];
    /// Builds a color from its three components.
    fn from_components(components: [f32; 3]) -> Self;
    /// Returns a copy with each component clamped to its bounds. NaN components clamp to the lower
    /// bound, so the result is always a usable color.
    fn clamp_to_bounds(&self) -> Self {
        Self::from_components(clamp_components(self.components(), Self::bounds()))
    }
}

fn clamp_components(mut vals: [f32; 3], ranges: [(f32, f32); 3]) -> [f32; 3] {
    for (val, (min, max)) in vals.iter_mut().zip(ranges.iter()) {
        *val = if *val >= *max {
            *max
        } else if *val > *min {
            *val
        } else {
            *min
        };
    }
    vals
}

impl Bound for RGBColor {
    fn bounds() -> [(f32, f32); 3] {
        [(0., 1.), (0., 1.), (0., 1.)]
    }
    fn components(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
    fn from_components(c: [f32; 3]) -> RGBColor {
        RGBColor{r: c[0], g: c[1], b: c[2]}
    }
}

// Hue is cyclic, so it wraps around into its range instead of sticking to an end.
impl Bound for OklchColor {
    fn bounds() -> [(f32, f32); 3] {
        [(0., 1.), (0., MAX_CHROMA), (0., TAU)]
    }
    fn components(&self) -> [f32; 3] {
        [self.l, self.c, self.h]
    }
    fn from_components(c: [f32; 3]) -> OklchColor {
        OklchColor{l: c[0], c: c[1], h: c[2]}
    }
    fn clamp_to_bounds(&self) -> OklchColor {
        let [l, c, _] = clamp_components(self.components(), Self::bounds());
        OklchColor{l, c, h: normalize_hue(self.h)}
    }
}

impl OklchColor {
    /// Clamps lightness and chroma to their bounds and wraps hue into [0, 2π). Every color a
    /// journey hands on to the next stage goes through this.
    pub fn normalized(&self) -> OklchColor {
        self.clamp_to_bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::Bound;
    use crate::color::RGBColor;
    use crate::colors::OklchColor;
    use crate::consts::MAX_CHROMA;
    use std::f32::consts::TAU;

    #[test]
    fn test_zero_one_bounds() {
        let color1 = RGBColor{r: 0.1, g: -0.2, b: 1.2};
        assert_eq!(color1.clamp_to_bounds(), RGBColor{r: 0.1, g: 0., b: 1.});
    }
    #[test]
    fn test_lch_bounds() {
        let color = OklchColor{l: -0.1, c: 0.9, h: -1.};
        let clamped = color.normalized();
        assert_eq!(clamped.l, 0.);
        assert_eq!(clamped.c, MAX_CHROMA);
        assert!(clamped.h >= 0. && clamped.h < TAU);
        assert!((clamped.h - (TAU - 1.)).abs() <= 1e-6);
    }
    #[test]
    fn test_in_bounds_is_unchanged() {
        let color = OklchColor{l: 0.5, c: 0.1, h: 2.};
        assert_eq!(color.normalized(), color);
    }
    #[test]
    fn test_nan_clamps_low() {
        let color = OklchColor{l: std::f32::NAN, c: std::f32::NAN, h: std::f32::NAN};
        assert_eq!(color.normalized(), OklchColor{l: 0., c: 0., h: 0.});
    }
    #[test]
    fn test_trait_clamp_wraps_hue() {
        let color = OklchColor{l: 0.5, c: 0.1, h: std::f32::NAN};
        assert_eq!(color.clamp_to_bounds().h, 0.);
        let turned = OklchColor{l: 0.5, c: 0.1, h: 2. * TAU + 1.}.clamp_to_bounds();
        assert!(turned.h >= 0. && turned.h < TAU);
        assert!((turned.h - 1.).abs() <= 1e-5);
        for h in [-1e9, -TAU, -0., TAU, 1e9, std::f32::INFINITY].iter() {
            let c = OklchColor{l: 0.5, c: 0.1, h: *h}.clamp_to_bounds();
            assert!(c.h >= 0. && c.h < TAU, "{} -> {}", h, c.h);
        }
    }
}
