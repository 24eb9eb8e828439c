//! This module defines a generalized trait for a colormap: a mapping of the numbers between 0 and 1
//! to colors in a continuous way. Every [`Journey`] is one, through [`Journey::sample`], so it can be
//! dropped in wherever code expects a colormap for data visualization.

use crate::color::RGBColor;
use crate::journey::Journey;

/// A trait that models a colormap, a continuous mapping of the numbers between 0 and 1 to
/// colors. Any color output format is supported, but it must be consistent.
pub trait ColorMap<T> {
    /// Maps a given number between 0 and 1 to a given output color. This should never fail or panic
    /// except for NaN and similar: there should be some color that marks out-of-range data.
    fn transform_single(&self, x: f64) -> T;
    /// Maps a given collection of numbers between 0 and 1 to a vector of colors. Does not evaluate
    /// lazily.
    fn transform<U: IntoIterator<Item = f64>>(&self, inputs: U) -> Vec<T> {
        inputs.into_iter().map(|x| self.transform_single(x)).collect()
    }
}

/// A journey maps data through [`Journey::sample`], so out-of-range values follow the loop mode
/// and NaN maps to black.
///
/// # Example
/// ```
/// # use colorjourney::prelude::*;
/// let journey = Journey::new(Configuration::new(vec![
///     RGBColor{r: 0.1, g: 0.1, b: 0.4},
///     RGBColor{r: 0.9, g: 0.8, b: 0.2},
/// ])).unwrap();
/// let colors = journey.transform(vec![0., 0.5, 1.]);
/// assert_eq!(colors[1], journey.sample(0.5));
/// assert_eq!(journey.transform_single(std::f64::NAN), RGBColor::BLACK);
/// ```
impl ColorMap<RGBColor> for Journey {
    fn transform_single(&self, x: f64) -> RGBColor {
        self.sample(x as f32)
    }
}
