//! Colorjourney generates sequences of colors, *journeys*, that are perceptually well spaced and
//! pleasant to look at, from one or more anchor colors and a handful of high-level aesthetic
//! controls: lightness and chroma bias, hue temperature, a minimum contrast between neighbours, what
//! happens at the ends, and optional seeded variation.
//!
//! A journey can be read in two ways. [`Journey::sample`] gives the color at any position `t`, for
//! smooth gradients. [`Journey::discrete`] and its siblings give distinct swatches for palettes,
//! with adjacent swatches kept apart by the configured contrast; any single swatch or range of them
//! can be computed on its own and always matches the full palette.
//!
//! All of the work happens in [OKLab](https://bottosson.github.io/posts/oklab/), where straight-line
//! distance tracks how different two colors look. Results are reproducible: the same configuration
//! gives bit-identical colors on every platform.
//!
//! # Example
//! ```
//! use colorjourney::prelude::*;
//!
//! let config = Configuration::new(vec![
//!     RGBColor::from_hex_code("#1B3A8C").unwrap(),
//!     RGBColor::from_hex_code("#F2A541").unwrap(),
//! ])
//! .with_chroma(ChromaBias::Vivid)
//! .with_contrast(ContrastLevel::High);
//! let journey = Journey::new(config).unwrap();
//!
//! let gradient: Vec<RGBColor> = (0..=10).map(|i| journey.sample(i as f32 / 10.)).collect();
//! let palette = journey.discrete(6);
//! assert_eq!(palette[4], journey.discrete_at(4));
//! assert_eq!(gradient.len(), 11);
//! ```
//!
//! [`Journey::sample`]: journey/struct.Journey.html#method.sample
//! [`Journey::discrete`]: journey/struct.Journey.html#method.discrete

#![doc(html_root_url = "https://docs.rs/colorjourney/1.0.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare 0.4122214708 with 0.412_221_470_8
#![allow(clippy::unreadable_literal)]

extern crate csv;
extern crate libm;
extern crate num;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate tracing;

pub mod access;
pub mod bound;
pub mod color;
pub mod colormap;
pub mod colors;
pub mod config;
pub mod consts;
pub mod contrast;
pub mod coord;
pub mod export;
pub mod journey;
pub mod prelude;
pub mod rng;
pub mod variation;
