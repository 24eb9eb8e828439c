//! This module contains the perceptual color spaces journeys work in. For convenience, each main
//! type is imported into this module's namespace directly.
//!
//! [`RGBColor`](../color/struct.RGBColor.html) lives in the `color` module, since it's the input
//! and output type of everything else.
pub mod oklabcolor;
pub mod oklchcolor;

pub use self::oklabcolor::{distance, OklabColor};
pub use self::oklchcolor::{normalize_hue, shortest_hue_delta, OklchColor};
