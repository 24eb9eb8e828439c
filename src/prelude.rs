//! This module simply brings the most common functionality under a single namespace, to prevent
//! excessive imports. As of now, this prelude includes every trait in the crate, the ubiquitous
//! [`RGBColor`] with its parse error, [`Journey`] and everything needed to configure one, and nothing
//! else. Of particular note is that the color spaces in the [`colors`](../colors/index.html) module
//! are not included.

pub use crate::bound::Bound;
pub use crate::color::{RGBColor, RGBParseError};
pub use crate::colormap::ColorMap;
pub use crate::config::{
    ChromaBias, ConfigError, Configuration, LightnessBias, LoopMode, TemperatureBias,
};
pub use crate::contrast::ContrastLevel;
pub use crate::journey::Journey;
pub use crate::variation::{Dimensions, Strength, VariationSpec};
