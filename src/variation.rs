//! Seeded micro-variation for discrete palettes. Variation nudges each swatch by a small, bounded
//! amount in hue, lightness and/or chroma so that long palettes look less mechanical, while staying
//! exactly reproducible: the nudge for index `i` depends only on the seed, `i`, and the settings, and
//! never on which other indices were generated or in what order.

use std::f32::consts::TAU;
use std::ops::BitOr;

use crate::consts::{DEFAULT_SEED, MAX_CHROMA, VARIATION_NOTICEABLE, VARIATION_SUBTLE};
use crate::colors::OklchColor;
use crate::rng::CounterRng;

/// A set of channels that variation is allowed to touch. Combine with `|`.
///
/// # Example
/// ```
/// # use colorjourney::variation::Dimensions;
/// let dims = Dimensions::HUE | Dimensions::CHROMA;
/// assert!(dims.contains(Dimensions::HUE));
/// assert!(!dims.contains(Dimensions::LIGHTNESS));
/// assert_eq!(Dimensions::default(), Dimensions::ALL);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions(u8);

impl Dimensions {
    /// No channels.
    pub const NONE: Dimensions = Dimensions(0);
    /// The hue angle.
    pub const HUE: Dimensions = Dimensions(1);
    /// Lightness.
    pub const LIGHTNESS: Dimensions = Dimensions(2);
    /// Chroma.
    pub const CHROMA: Dimensions = Dimensions(4);
    /// Every channel.
    pub const ALL: Dimensions = Dimensions(7);

    /// Returns `true` if every channel in `other` is also in `self`.
    pub fn contains(self, other: Dimensions) -> bool {
        self.0 & other.0 == other.0
    }
    /// Returns `true` if no channel is selected.
    pub fn is_empty(self) -> bool {
        self.0 & Dimensions::ALL.0 == 0
    }
}

impl Default for Dimensions {
    fn default() -> Dimensions {
        Dimensions::ALL
    }
}

impl BitOr for Dimensions {
    type Output = Dimensions;
    fn bitor(self, rhs: Dimensions) -> Dimensions {
        Dimensions(self.0 | rhs.0)
    }
}

/// How far variation may move a channel, as a fraction of that channel's full range (2π for hue,
/// 1 for lightness, `MAX_CHROMA` for chroma).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    /// Up to 2% of each range: barely noticeable side by side.
    Subtle,
    /// Up to 5% of each range.
    Noticeable,
    /// An explicit fraction in [0, 1].
    Custom(f32),
}

impl Default for Strength {
    fn default() -> Strength {
        Strength::Subtle
    }
}

impl Strength {
    /// The maximum displacement as a fraction of channel range.
    pub fn magnitude(self) -> f32 {
        match self {
            Strength::Subtle => VARIATION_SUBTLE,
            Strength::Noticeable => VARIATION_NOTICEABLE,
            Strength::Custom(m) => m,
        }
    }
}

/// Additive offsets to an [`OklchColor`]'s channels. Hue is in radians.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarDelta {
    /// Offset to the hue angle, in radians.
    pub hue: f32,
    /// Offset to lightness.
    pub lightness: f32,
    /// Offset to chroma.
    pub chroma: f32,
}

impl PolarDelta {
    /// No change at all.
    pub const ZERO: PolarDelta = PolarDelta{hue: 0., lightness: 0., chroma: 0.};

    /// Adds the offsets to a color, then brings it back within bounds: hue wraps, lightness and
    /// chroma clamp.
    pub fn apply(&self, color: OklchColor) -> OklchColor {
        OklchColor {
            l: color.l + self.lightness,
            c: color.c + self.chroma,
            h: color.h + self.hue,
        }
        .normalized()
    }
}

/// Computes the perturbation for one index. Each enabled channel gets an independent offset drawn
/// uniformly from `[-m·range, m·range)`, where `m` is the strength's magnitude; disabled channels get
/// exactly 0. The result depends only on the arguments.
///
/// # Example
/// ```
/// # use colorjourney::variation::{perturb, Dimensions, Strength};
/// let delta = perturb(99, 4, Dimensions::LIGHTNESS, Strength::Noticeable);
/// assert_eq!(delta.hue, 0.);
/// assert_eq!(delta.chroma, 0.);
/// assert!(delta.lightness.abs() <= 0.05);
/// assert_eq!(delta, perturb(99, 4, Dimensions::LIGHTNESS, Strength::Noticeable));
/// ```
pub fn perturb(seed: u64, index: u64, dimensions: Dimensions, strength: Strength) -> PolarDelta {
    let rng = CounterRng::new(seed);
    let magnitude = strength.magnitude();
    // three streams per index, one per channel, so channels never share a draw
    let base = index.wrapping_mul(3);
    let channel = |dim: Dimensions, offset: u64, range: f32| -> f32 {
        if dimensions.contains(dim) {
            (2. * rng.unit(base.wrapping_add(offset)) - 1.) * magnitude * range
        } else {
            0.
        }
    };
    PolarDelta {
        hue: channel(Dimensions::HUE, 0, TAU),
        lightness: channel(Dimensions::LIGHTNESS, 1, 1.),
        chroma: channel(Dimensions::CHROMA, 2, MAX_CHROMA),
    }
}

/// Settings for seeded variation. Disabled by default, in which case every palette is fully
/// determined by the rest of the configuration.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariationSpec {
    /// Whether variation is applied at all.
    pub enabled: bool,
    /// The channels variation may move.
    pub dimensions: Dimensions,
    /// How far they may move.
    pub strength: Strength,
    /// The seed. Identical seeds give identical palettes.
    pub seed: u64,
}

impl Default for VariationSpec {
    fn default() -> VariationSpec {
        VariationSpec {
            enabled: false,
            dimensions: Dimensions::ALL,
            strength: Strength::Subtle,
            seed: DEFAULT_SEED,
        }
    }
}

impl VariationSpec {
    /// The perturbation for `index`, or [`PolarDelta::ZERO`] when variation is disabled.
    pub fn delta_for(&self, index: u64) -> PolarDelta {
        if !self.enabled {
            return PolarDelta::ZERO;
        }
        perturb(self.seed, index, self.dimensions, self.strength)
    }
    /// Applies the perturbation for `index` to a color.
    pub fn apply(&self, index: u64, color: OklchColor) -> OklchColor {
        if !self.enabled {
            return color;
        }
        self.delta_for(index).apply(color)
    }
}
