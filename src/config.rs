//! This module describes how a journey is configured: its anchors, its aesthetic biases, how its
//! ends behave, and whether it carries seeded variation. A [`Configuration`] is plain data that can be
//! built in code (every field is public, and there are `with_*` helpers) or loaded from JSON, and is
//! checked once, by [`Configuration::validate`], when a journey is created from it.

use std::error::Error;
use std::fmt;

use crate::color::RGBColor;
use crate::consts::{
    CHROMA_MUTED, CHROMA_VIVID, MAX_ANCHORS, TEMPERATURE_SHIFT,
};
use crate::contrast::ContrastLevel;
use crate::variation::{Strength, VariationSpec};

/// Shifts the whole journey toward light or dark.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightnessBias {
    /// No shift.
    Neutral,
    /// Toward white.
    Lighter,
    /// Toward black.
    Darker,
    /// A weight in [-1, 1]: positive is lighter, negative is darker, and ±1 matches the named
    /// variants.
    Custom(f32),
}

impl Default for LightnessBias {
    fn default() -> LightnessBias {
        LightnessBias::Neutral
    }
}

impl LightnessBias {
    /// The signed weight, in [-1, 1] for a valid configuration.
    pub fn weight(self) -> f32 {
        match self {
            LightnessBias::Neutral => 0.,
            LightnessBias::Lighter => 1.,
            LightnessBias::Darker => -1.,
            LightnessBias::Custom(w) => w,
        }
    }
}

/// Scales chroma across the whole journey.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChromaBias {
    /// Chroma is left alone.
    Neutral,
    /// Chroma is reduced to 60%.
    Muted,
    /// Chroma is increased to 140%.
    Vivid,
    /// An explicit multiplier in [0.5, 2].
    Custom(f32),
}

impl Default for ChromaBias {
    fn default() -> ChromaBias {
        ChromaBias::Neutral
    }
}

impl ChromaBias {
    /// The chroma multiplier.
    pub fn multiplier(self) -> f32 {
        match self {
            ChromaBias::Neutral => 1.,
            ChromaBias::Muted => CHROMA_MUTED,
            ChromaBias::Vivid => CHROMA_VIVID,
            ChromaBias::Custom(m) => m,
        }
    }
}

/// Rotates every hue slightly toward warm or cool.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureBias {
    /// No rotation.
    Neutral,
    /// Hues rotate 0.3 radians in the positive direction.
    Warm,
    /// Hues rotate 0.3 radians in the negative direction.
    Cool,
}

impl Default for TemperatureBias {
    fn default() -> TemperatureBias {
        TemperatureBias::Neutral
    }
}

impl TemperatureBias {
    /// The hue offset in radians.
    pub fn hue_shift(self) -> f32 {
        match self {
            TemperatureBias::Neutral => 0.,
            TemperatureBias::Warm => TEMPERATURE_SHIFT,
            TemperatureBias::Cool => -TEMPERATURE_SHIFT,
        }
    }
}

/// What happens at and beyond the ends of a journey.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopMode {
    /// The journey has a start and an end; positions outside [0, 1] clamp.
    Open,
    /// The journey is a loop: the end joins back to the start, and positions wrap.
    Closed,
    /// The journey runs to the end and back: positions in [1, 2] retrace [0, 1] in reverse.
    #[serde(rename = "pingpong", alias = "ping-pong")]
    PingPong,
}

impl Default for LoopMode {
    fn default() -> LoopMode {
        LoopMode::Open
    }
}

/// A reason a configuration can't be turned into a journey.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The configuration has no anchors.
    NoAnchors,
    /// More anchors were given than the maximum of 8; holds the number given.
    TooManyAnchors(usize),
    /// The anchor at this index has a NaN or infinite channel.
    InvalidAnchor(usize),
    /// A custom lightness weight outside [-1, 1].
    LightnessOutOfRange(f32),
    /// A custom chroma multiplier outside [0.5, 2].
    ChromaOutOfRange(f32),
    /// A custom contrast threshold outside [0, 1].
    ContrastOutOfRange(f32),
    /// A vibrancy outside [0, 1].
    VibrancyOutOfRange(f32),
    /// A custom variation magnitude outside [0, 1].
    VariationOutOfRange(f32),
    /// The configuration couldn't be read; holds the parser's message.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ConfigError::NoAnchors => write!(f, "a journey needs at least one anchor"),
            ConfigError::TooManyAnchors(n) => {
                write!(f, "{} anchors given, but at most {} are supported", n, MAX_ANCHORS)
            }
            ConfigError::InvalidAnchor(i) => write!(f, "anchor {} has a non-finite channel", i),
            ConfigError::LightnessOutOfRange(w) => {
                write!(f, "lightness weight {} is outside [-1, 1]", w)
            }
            ConfigError::ChromaOutOfRange(m) => {
                write!(f, "chroma multiplier {} is outside [0.5, 2]", m)
            }
            ConfigError::ContrastOutOfRange(x) => {
                write!(f, "contrast threshold {} is outside [0, 1]", x)
            }
            ConfigError::VibrancyOutOfRange(v) => write!(f, "vibrancy {} is outside [0, 1]", v),
            ConfigError::VariationOutOfRange(m) => {
                write!(f, "variation magnitude {} is outside [0, 1]", m)
            }
            ConfigError::Parse(ref msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl Error for ConfigError {}

/// Everything that determines a journey. Two journeys built from equal configurations produce
/// identical colors.
///
/// # Example
/// ```
/// # use colorjourney::prelude::*;
/// let config = Configuration::new(vec![RGBColor{r: 0.3, g: 0.5, b: 0.8}])
///     .with_contrast(ContrastLevel::High)
///     .with_loop_mode(LoopMode::Closed);
/// assert!(config.validate().is_ok());
/// assert_eq!(Configuration::default().validate(), Err(ConfigError::NoAnchors));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// The colors the journey passes through, in order; between 1 and 8 of them.
    pub anchors: Vec<RGBColor>,
    /// Overall lightness shift.
    pub lightness: LightnessBias,
    /// Overall chroma scaling.
    pub chroma: ChromaBias,
    /// Minimum separation between adjacent discrete colors.
    pub contrast: ContrastLevel,
    /// Overall hue rotation.
    pub temperature: TemperatureBias,
    /// How much extra chroma the middle of the journey gets, in [0, 1].
    pub mid_journey_vibrancy: f32,
    /// Behavior at the ends.
    pub loop_mode: LoopMode,
    /// Seeded per-swatch variation.
    pub variation: VariationSpec,
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration {
            anchors: vec![],
            lightness: LightnessBias::Neutral,
            chroma: ChromaBias::Neutral,
            contrast: ContrastLevel::Medium,
            temperature: TemperatureBias::Neutral,
            mid_journey_vibrancy: 0.3,
            loop_mode: LoopMode::Open,
            variation: VariationSpec::default(),
        }
    }
}

fn within(x: f32, lo: f32, hi: f32) -> bool {
    x >= lo && x <= hi
}

impl Configuration {
    /// A default configuration with the given anchors.
    pub fn new(anchors: Vec<RGBColor>) -> Configuration {
        Configuration {
            anchors,
            ..Configuration::default()
        }
    }
    /// A default configuration with a single anchor.
    pub fn single(anchor: RGBColor) -> Configuration {
        Configuration::new(vec![anchor])
    }
    /// Reads a configuration from JSON and validates it. Fields that are left out take their
    /// default values.
    /// # Errors
    /// Returns `ConfigError::Parse` if the text isn't a valid configuration document, or the
    /// validation error if it is but its values aren't acceptable.
    /// # Example
    /// ```
    /// # use colorjourney::prelude::*;
    /// let config = Configuration::from_json(r#"{
    ///     "anchors": [{"r": 0.9, "g": 0.2, "b": 0.1}, {"r": 0.1, "g": 0.3, "b": 0.9}],
    ///     "chroma": "vivid",
    ///     "contrast": {"custom": 0.2},
    ///     "loop_mode": "pingpong"
    /// }"#).unwrap();
    /// assert_eq!(config.chroma, ChromaBias::Vivid);
    /// assert_eq!(config.contrast, ContrastLevel::Custom(0.2));
    /// assert_eq!(config.mid_journey_vibrancy, 0.3);
    /// ```
    pub fn from_json(json: &str) -> Result<Configuration, ConfigError> {
        let config: Configuration =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
    /// Serializes the configuration to JSON in the format [`Configuration::from_json`] reads.
    /// # Errors
    /// Returns `ConfigError::Parse` if serialization fails, which only happens for non-finite
    /// numbers.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
    /// Checks every value against its allowed range. Anchors are checked first, then the other
    /// fields in declaration order; the first problem found is returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.anchors.is_empty() {
            return Err(ConfigError::NoAnchors);
        }
        if self.anchors.len() > MAX_ANCHORS {
            return Err(ConfigError::TooManyAnchors(self.anchors.len()));
        }
        if let Some(i) = self
            .anchors
            .iter()
            .position(|c| !(c.r.is_finite() && c.g.is_finite() && c.b.is_finite()))
        {
            return Err(ConfigError::InvalidAnchor(i));
        }
        if let LightnessBias::Custom(w) = self.lightness {
            if !within(w, -1., 1.) {
                return Err(ConfigError::LightnessOutOfRange(w));
            }
        }
        if let ChromaBias::Custom(m) = self.chroma {
            if !within(m, 0.5, 2.) {
                return Err(ConfigError::ChromaOutOfRange(m));
            }
        }
        if let ContrastLevel::Custom(x) = self.contrast {
            if !within(x, 0., 1.) {
                return Err(ConfigError::ContrastOutOfRange(x));
            }
        }
        if !within(self.mid_journey_vibrancy, 0., 1.) {
            return Err(ConfigError::VibrancyOutOfRange(self.mid_journey_vibrancy));
        }
        if let Strength::Custom(m) = self.variation.strength {
            if !within(m, 0., 1.) {
                return Err(ConfigError::VariationOutOfRange(m));
            }
        }
        Ok(())
    }

    /// Replaces the anchors.
    pub fn with_anchors(mut self, anchors: Vec<RGBColor>) -> Configuration {
        self.anchors = anchors;
        self
    }
    /// Sets the lightness bias.
    pub fn with_lightness(mut self, lightness: LightnessBias) -> Configuration {
        self.lightness = lightness;
        self
    }
    /// Sets the chroma bias.
    pub fn with_chroma(mut self, chroma: ChromaBias) -> Configuration {
        self.chroma = chroma;
        self
    }
    /// Sets the contrast level.
    pub fn with_contrast(mut self, contrast: ContrastLevel) -> Configuration {
        self.contrast = contrast;
        self
    }
    /// Sets the temperature bias.
    pub fn with_temperature(mut self, temperature: TemperatureBias) -> Configuration {
        self.temperature = temperature;
        self
    }
    /// Sets the mid-journey vibrancy.
    pub fn with_vibrancy(mut self, vibrancy: f32) -> Configuration {
        self.mid_journey_vibrancy = vibrancy;
        self
    }
    /// Sets the loop mode.
    pub fn with_loop_mode(mut self, loop_mode: LoopMode) -> Configuration {
        self.loop_mode = loop_mode;
        self
    }
    /// Sets the variation settings.
    pub fn with_variation(mut self, variation: VariationSpec) -> Configuration {
        self.variation = variation;
        self
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn gray() -> RGBColor {
        RGBColor{r: 0.5, g: 0.5, b: 0.5}
    }

    #[test]
    fn test_defaults() {
        let config = Configuration::single(gray());
        assert_eq!(config.lightness, LightnessBias::Neutral);
        assert_eq!(config.chroma, ChromaBias::Neutral);
        assert_eq!(config.contrast, ContrastLevel::Medium);
        assert_eq!(config.temperature, TemperatureBias::Neutral);
        assert_eq!(config.mid_journey_vibrancy, 0.3);
        assert_eq!(config.loop_mode, LoopMode::Open);
        assert!(!config.variation.enabled);
        assert_eq!(config.variation.seed, 0x123456789ABCDEF0);
        assert_eq!(config.validate(), Ok(()));
    }
    #[test]
    fn test_anchor_count() {
        assert_eq!(Configuration::new(vec![]).validate(), Err(ConfigError::NoAnchors));
        assert!(Configuration::new(vec![gray(); 8]).validate().is_ok());
        assert_eq!(
            Configuration::new(vec![gray(); 9]).validate(),
            Err(ConfigError::TooManyAnchors(9))
        );
    }
    #[test]
    fn test_non_finite_anchor() {
        let bad = RGBColor{r: 0.1, g: std::f32::NAN, b: 0.2};
        assert_eq!(
            Configuration::new(vec![gray(), bad]).validate(),
            Err(ConfigError::InvalidAnchor(1))
        );
        let inf = RGBColor{r: std::f32::INFINITY, g: 0., b: 0.};
        assert_eq!(Configuration::single(inf).validate(), Err(ConfigError::InvalidAnchor(0)));
    }
    #[test]
    fn test_out_of_gamut_anchor_is_accepted() {
        let wide = RGBColor{r: 1.2, g: -0.1, b: 0.5};
        assert!(Configuration::single(wide).validate().is_ok());
    }
    #[test]
    fn test_custom_ranges() {
        let base = Configuration::single(gray());
        assert_eq!(
            base.clone().with_lightness(LightnessBias::Custom(1.5)).validate(),
            Err(ConfigError::LightnessOutOfRange(1.5))
        );
        assert!(base.clone().with_lightness(LightnessBias::Custom(-1.)).validate().is_ok());
        assert_eq!(
            base.clone().with_chroma(ChromaBias::Custom(0.4)).validate(),
            Err(ConfigError::ChromaOutOfRange(0.4))
        );
        assert_eq!(
            base.clone().with_contrast(ContrastLevel::Custom(-0.1)).validate(),
            Err(ConfigError::ContrastOutOfRange(-0.1))
        );
        assert!(base.clone().with_contrast(ContrastLevel::Custom(0.)).validate().is_ok());
        assert!(base.clone().with_vibrancy(std::f32::NAN).validate().is_err());
        let variation = VariationSpec{enabled: true, strength: Strength::Custom(2.), ..VariationSpec::default()};
        assert_eq!(
            base.with_variation(variation).validate(),
            Err(ConfigError::VariationOutOfRange(2.))
        );
    }
    #[test]
    fn test_bias_values() {
        assert_eq!(LightnessBias::Lighter.weight(), 1.);
        assert_eq!(LightnessBias::Darker.weight(), -1.);
        assert_eq!(LightnessBias::Custom(0.25).weight(), 0.25);
        assert_eq!(ChromaBias::Muted.multiplier(), 0.6);
        assert_eq!(ChromaBias::Vivid.multiplier(), 1.4);
        assert_eq!(TemperatureBias::Warm.hue_shift(), 0.3);
        assert_eq!(TemperatureBias::Cool.hue_shift(), -0.3);
    }
    #[test]
    fn test_json_round_trip() {
        let config = Configuration::new(vec![gray(), RGBColor{r: 0.9, g: 0.1, b: 0.2}])
            .with_temperature(TemperatureBias::Warm)
            .with_loop_mode(LoopMode::PingPong)
            .with_lightness(LightnessBias::Custom(-0.25));
        let json = config.to_json().unwrap();
        assert_eq!(Configuration::from_json(&json), Ok(config));
    }
    #[test]
    fn test_json_errors() {
        match Configuration::from_json("{\"anchors\": [") {
            Err(ConfigError::Parse(_)) => {}
            other => panic!("expected a parse error, got {:?}", other),
        }
        assert_eq!(Configuration::from_json("{}"), Err(ConfigError::NoAnchors));
        let json = r#"{"anchors": [{"r": 0.5, "g": 0.5, "b": 0.5}], "mid_journey_vibrancy": 3.0}"#;
        assert_eq!(Configuration::from_json(json), Err(ConfigError::VibrancyOutOfRange(3.)));
        let aliased = r#"{"anchors": [{"r": 0.5, "g": 0.5, "b": 0.5}], "loop_mode": "ping-pong"}"#;
        assert_eq!(Configuration::from_json(aliased).map(|c| c.loop_mode), Ok(LoopMode::PingPong));
    }
    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::TooManyAnchors(9).to_string(),
            "9 anchors given, but at most 8 are supported"
        );
        assert_eq!(ConfigError::NoAnchors.to_string(), "a journey needs at least one anchor");
    }
}
