//! Querying a [`Journey`]: continuous samples for gradients, and discrete palettes of distinct
//! swatches.
//!
//! Discrete access is order-independent. Swatch `i` sits at a position that depends only on `i`
//! (never on how many swatches were asked for), its variation depends only on `i` and the seed, and
//! the color it's kept apart from is the *un-enforced* color of swatch `i - 1`, recomputed from the
//! model on demand. So asking for one swatch, a range of them, or a whole palette always yields the
//! same colors, and a journey never needs to remember what it has already produced.
//!
//! Positions follow a bisection order: for open and ping-pong journeys, the start, the end, the
//! middle, the quarter points, the eighths, and so on; for closed journeys the same without the end,
//! which is the start again. Any prefix of the sequence therefore covers the whole journey about as
//! evenly as it can.

use std::iter::FusedIterator;
use std::ops::Range;

use crate::color::RGBColor;
use crate::colors::OklchColor;
use crate::config::LoopMode;
use crate::consts::CONTRAST_MAX_ITERATIONS;
use crate::contrast::{enforce_toward, Side};
use crate::journey::Journey;

// Base-2 radical inverse: the bits of `i` mirrored around the binary point, kept to the 24 bits an
// f32 holds exactly so the result stays below 1.
fn radical_inverse(i: u32) -> f32 {
    (i.reverse_bits() >> 8) as f32 / (1u32 << 24) as f32
}

/// The position in [0, 1] of the `index`-th discrete swatch.
///
/// # Example
/// ```
/// # use colorjourney::prelude::*;
/// # use colorjourney::access::position_for_index;
/// let open: Vec<f32> = (0..6).map(|i| position_for_index(i, LoopMode::Open)).collect();
/// assert_eq!(open, vec![0., 1., 0.5, 0.25, 0.75, 0.125]);
/// let closed: Vec<f32> = (0..5).map(|i| position_for_index(i, LoopMode::Closed)).collect();
/// assert_eq!(closed, vec![0., 0.5, 0.25, 0.75, 0.125]);
/// ```
pub fn position_for_index(index: u32, loop_mode: LoopMode) -> f32 {
    match loop_mode {
        LoopMode::Closed => radical_inverse(index),
        LoopMode::Open | LoopMode::PingPong => match index {
            0 => 0.,
            1 => 1.,
            i => radical_inverse(i - 1),
        },
    }
}

// Odd swatches land on the light side of their reference and even ones on the dark side. Since a
// swatch only ever moves past its own slot, the pair (i - 1, i) ends up a full threshold apart too.
fn side_for_index(index: u32) -> Side {
    if index % 2 == 1 {
        Side::Lighter
    } else {
        Side::Darker
    }
}

impl Journey {
    /// The color at position `t` along the journey, for drawing continuous gradients. Positions
    /// outside [0, 1] are handled by the loop mode. No contrast enforcement or variation is applied,
    /// so samples change smoothly with `t`. A position with no meaning (NaN, or infinite on a
    /// repeating journey) gives black.
    ///
    /// # Example
    /// ```
    /// # use colorjourney::prelude::*;
    /// let journey = Journey::new(Configuration::new(vec![
    ///     RGBColor{r: 1., g: 0.2, b: 0.2},
    ///     RGBColor{r: 0.2, g: 1., b: 0.2},
    ///     RGBColor{r: 0.2, g: 0.2, b: 1.},
    /// ]).with_loop_mode(LoopMode::Closed)).unwrap();
    /// assert_eq!(journey.sample(0.), journey.sample(1.));
    /// assert_eq!(journey.sample(std::f32::NAN), RGBColor::BLACK);
    /// ```
    pub fn sample(&self, t: f32) -> RGBColor {
        match self.map_position(t) {
            Some(u) => self.color_at(u).to_rgb().clamp(),
            None => RGBColor::BLACK,
        }
    }

    /// The `index`-th swatch's color before contrast enforcement: the model at the swatch's
    /// position, plus its variation.
    pub fn pre_enforcement(&self, index: u32) -> OklchColor {
        let u = position_for_index(index, self.loop_mode());
        self.configuration()
            .variation
            .apply(u64::from(index), self.color_at(u))
    }

    /// The color the `index`-th swatch is kept apart from: the previous swatch's pre-enforcement
    /// color. The first swatch has none.
    pub fn reference_color_for(&self, index: u32) -> Option<OklchColor> {
        if index == 0 {
            None
        } else {
            Some(self.pre_enforcement(index - 1))
        }
    }

    fn finish(&self, index: u32, candidate: OklchColor, reference: Option<OklchColor>) -> RGBColor {
        let color = match reference {
            Some(reference) => enforce_toward(
                candidate,
                reference,
                self.contrast_threshold(),
                CONTRAST_MAX_ITERATIONS,
                side_for_index(index),
            ),
            None => candidate,
        };
        color.to_rgb().clamp()
    }

    /// The `index`-th swatch of the journey's discrete palette. This is always equal to element
    /// `index` of [`Journey::discrete`] for any longer palette, and costs the same no matter how
    /// large `index` is.
    pub fn discrete_at(&self, index: u32) -> RGBColor {
        self.finish(index, self.pre_enforcement(index), self.reference_color_for(index))
    }

    /// A palette of `count` swatches: the first `count` elements of the journey's discrete
    /// sequence. Adjacent swatches are separated by at least the configured contrast, as far as
    /// the journey's colors allow.
    ///
    /// # Example
    /// ```
    /// # use colorjourney::prelude::*;
    /// let journey = Journey::new(Configuration::single(RGBColor{r: 0.5, g: 0.5, b: 0.5})).unwrap();
    /// let palette = journey.discrete(5);
    /// assert_eq!(palette.len(), 5);
    /// assert_eq!(palette[3], journey.discrete_at(3));
    /// assert_eq!(&palette[1..4], &journey.discrete_range(1..4)[..]);
    /// ```
    pub fn discrete(&self, count: u32) -> Vec<RGBColor> {
        self.discrete_range(0..count)
    }

    /// The swatches with indices in `range`, in order. Each pre-enforcement color is computed once
    /// and reused as the next swatch's reference, but the results are identical to calling
    /// [`Journey::discrete_at`] for every index. An empty or reversed range gives an empty palette.
    pub fn discrete_range(&self, range: Range<u32>) -> Vec<RGBColor> {
        if range.start >= range.end {
            return vec![];
        }
        let mut previous = self.reference_color_for(range.start);
        let mut out = Vec::with_capacity((range.end - range.start) as usize);
        for index in range {
            let current = self.pre_enforcement(index);
            out.push(self.finish(index, current, previous));
            previous = Some(current);
        }
        out
    }

    /// An iterator over the whole discrete sequence, starting at index 0. It ends only after index
    /// `u32::MAX`, so take as many as needed.
    pub fn discrete_iter(&self) -> DiscreteIter<'_> {
        DiscreteIter {
            journey: self,
            next: Some(0),
            previous: None,
        }
    }
}

/// An iterator over a journey's discrete swatches in index order, created by
/// [`Journey::discrete_iter`]. Yields the same colors as [`Journey::discrete_at`].
#[derive(Debug, Clone)]
pub struct DiscreteIter<'a> {
    journey: &'a Journey,
    next: Option<u32>,
    previous: Option<OklchColor>,
}

impl<'a> Iterator for DiscreteIter<'a> {
    type Item = RGBColor;
    fn next(&mut self) -> Option<RGBColor> {
        let index = self.next?;
        let current = self.journey.pre_enforcement(index);
        let color = self.journey.finish(index, current, self.previous);
        self.previous = Some(current);
        self.next = index.checked_add(1);
        Some(color)
    }
}

impl<'a> FusedIterator for DiscreteIter<'a> {}
