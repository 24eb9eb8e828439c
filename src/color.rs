//! This file defines [`RGBColor`], the color type journeys take as anchors and hand back as
//! output, along with hex-code parsing and formatting.
//!
//! Every `RGBColor` in this crate is *linear* RGB in a fixed working space: there is no transfer
//! function and no color management anywhere. Hex codes are simply an 8-bit encoding of those same
//! linear channels, which is all the wrapper layers that print or read palettes need.

use float_cmp::approx_eq;
use regex::Regex;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::bound::Bound;
use crate::coord::Coord;

lazy_static! {
    static ref HEX_CODE: Regex = Regex::new(r"^#?([0-9a-fA-F]{6}|[0-9a-fA-F]{3})$").unwrap();
}

/// A color in linear RGB. Channels are nominally in [0, 1], but intermediate results (for
/// example, an OKLab color outside the display gamut converted back to RGB) may leave that range
/// until they are explicitly clamped.
///
/// # Example
/// ```
/// # use colorjourney::prelude::*;
/// let teal = RGBColor::from_hex_code("#008080").unwrap();
/// assert_eq!(teal.to_string(), "#008080");
/// let out_of_range = RGBColor{r: 1.3, g: -0.2, b: 0.5};
/// assert_eq!(out_of_range.clamp(), RGBColor{r: 1., g: 0., b: 0.5});
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel.
    pub r: f32,
    /// The green channel.
    pub g: f32,
    /// The blue channel.
    pub b: f32,
}

/// An error when parsing a hex code into an [`RGBColor`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RGBParseError {
    /// The string wasn't `#` followed by three or six hex digits.
    InvalidHexSyntax,
}

impl fmt::Display for RGBParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RGBParseError::InvalidHexSyntax => write!(f, "invalid hex color syntax"),
        }
    }
}

impl Error for RGBParseError {}

impl RGBColor {
    /// Pure black, the sentinel returned for queries that have no meaningful answer.
    pub const BLACK: RGBColor = RGBColor{r: 0., g: 0., b: 0.};
    /// Pure white.
    pub const WHITE: RGBColor = RGBColor{r: 1., g: 1., b: 1.};

    /// Clamps every channel to [0, 1]. This is the only gamut mapping this crate does: colors are
    /// never clamped implicitly during conversion. NaN channels clamp to 0.
    pub fn clamp(self) -> RGBColor {
        self.clamp_to_bounds()
    }
    /// Returns `true` if every channel is within [0, 1].
    pub fn in_gamut(&self) -> bool {
        [self.r, self.g, self.b].iter().all(|x| (0.0..=1.0).contains(x))
    }
    /// Returns the channels as 8-bit integers, clamping beforehand and rounding half away from 0.
    pub fn int_rgb_tup(&self) -> (u8, u8, u8) {
        let c = self.clamp();
        let q = |x: f32| (x * 255.).round() as u8;
        (q(c.r), q(c.g), q(c.b))
    }
    /// Parses a hex code: `#` (optional) followed by either six or three hex digits, in either
    /// case. `#ABC` is shorthand for `#AABBCC`.
    /// # Errors
    /// Returns `RGBParseError::InvalidHexSyntax` for anything else.
    /// # Example
    /// ```
    /// # use colorjourney::prelude::*;
    /// let short = RGBColor::from_hex_code("#fa0").unwrap();
    /// let long = RGBColor::from_hex_code("FFAA00").unwrap();
    /// assert_eq!(short, long);
    /// assert!(RGBColor::from_hex_code("#12345").is_err());
    /// ```
    pub fn from_hex_code(hex: &str) -> Result<RGBColor, RGBParseError> {
        let caps = HEX_CODE
            .captures(hex.trim())
            .ok_or(RGBParseError::InvalidHexSyntax)?;
        let digits = &caps[1];
        let expanded: String = if digits.len() == 3 {
            digits.chars().flat_map(|c| vec![c, c]).collect()
        } else {
            digits.to_string()
        };
        let value = u32::from_str_radix(&expanded, 16).map_err(|_| RGBParseError::InvalidHexSyntax)?;
        Ok(RGBColor::from((
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )))
    }
    /// Returns `true` if every channel of the two colors is within `epsilon` of the other.
    pub fn approx_equal(&self, other: &RGBColor, epsilon: f32) -> bool {
        approx_eq!(f32, self.r, other.r, epsilon = epsilon)
            && approx_eq!(f32, self.g, other.g, epsilon = epsilon)
            && approx_eq!(f32, self.b, other.b, epsilon = epsilon)
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from(rgb: (u8, u8, u8)) -> RGBColor {
        let (r, g, b) = rgb;
        RGBColor {
            r: f32::from(r) / 255.,
            g: f32::from(g) / 255.,
            b: f32::from(b) / 255.,
        }
    }
}

impl From<Coord> for RGBColor {
    fn from(c: Coord) -> RGBColor {
        RGBColor {
            r: c.x as f32,
            g: c.y as f32,
            b: c.z as f32,
        }
    }
}

impl From<RGBColor> for Coord {
    fn from(c: RGBColor) -> Coord {
        Coord {
            x: f64::from(c.r),
            y: f64::from(c.g),
            z: f64::from(c.b),
        }
    }
}

impl FromStr for RGBColor {
    type Err = RGBParseError;
    fn from_str(s: &str) -> Result<RGBColor, RGBParseError> {
        RGBColor::from_hex_code(s)
    }
}

/// Formats as an uppercase `#RRGGBB` hex code, clamping first.
impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (r, g, b) = self.int_rgb_tup();
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}
