//! This module turns a validated [`Configuration`] into a [`Journey`] and defines the journey's
//! model: the color at every position along it, before any contrast treatment or conversion to
//! RGB. Querying a journey (continuous samples and discrete palettes) lives in the `access` module.
//!
//! A journey with a single anchor orbits the anchor's hue, with a slight lightness wave and a chroma
//! swell in the middle so successive colors don't differ in hue alone. With several anchors, the
//! journey walks through them in order, interpolating lightness and chroma linearly and hue along
//! the shorter arc. Either way, the result then gets its mid-journey vibrancy boost, and finally the
//! lightness, chroma and temperature biases.

use std::f32::consts::{PI, TAU};

use crate::colors::{shortest_hue_delta, OklchColor};
use crate::config::{ConfigError, Configuration, LoopMode};
use crate::consts::{
    CHROMA_ENVELOPE, LIGHTNESS_BIAS_STRENGTH, LIGHTNESS_WAVE, MAX_ANCHORS, OPEN_ROTATION,
    VIBRANCY_GAIN,
};
use crate::coord::Coord;

/// A color journey: an immutable, precomputed description of a path through color space built from
/// a [`Configuration`]. Journeys have no interior state, so they can be shared between threads and
/// queried from all of them at once.
///
/// # Example
/// ```
/// # use colorjourney::prelude::*;
/// let config = Configuration::new(vec![
///     RGBColor{r: 0.8, g: 0.2, b: 0.2},
///     RGBColor{r: 0.2, g: 0.3, b: 0.8},
/// ]);
/// let journey = Journey::new(config).unwrap();
/// assert_eq!(journey.anchors().len(), 2);
/// assert!(Journey::new(Configuration::default()).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Journey {
    config: Configuration,
    anchors: [OklchColor; MAX_ANCHORS],
    anchor_count: usize,
    lightness_weight: f32,
    chroma_multiplier: f32,
    hue_shift: f32,
    vibrancy: f32,
    contrast_threshold: f32,
}

impl Journey {
    /// Validates the configuration and builds a journey from it, converting the anchors to OKLCh
    /// and resolving every bias to the number it stands for.
    /// # Errors
    /// Returns the first problem [`Configuration::validate`] finds. No journey is built.
    pub fn new(config: Configuration) -> Result<Journey, ConfigError> {
        if let Err(e) = config.validate() {
            debug!(error = %e, "rejected journey configuration");
            return Err(e);
        }
        let mut anchors = [OklchColor{l: 0., c: 0., h: 0.}; MAX_ANCHORS];
        for (slot, rgb) in anchors.iter_mut().zip(config.anchors.iter()) {
            *slot = OklchColor::from_rgb(*rgb);
        }
        let journey = Journey {
            anchors,
            anchor_count: config.anchors.len(),
            lightness_weight: config.lightness.weight(),
            chroma_multiplier: config.chroma.multiplier(),
            hue_shift: config.temperature.hue_shift(),
            vibrancy: config.mid_journey_vibrancy,
            contrast_threshold: config.contrast.threshold(),
            config,
        };
        debug!(
            anchors = journey.anchor_count,
            loop_mode = ?journey.config.loop_mode,
            contrast = f64::from(journey.contrast_threshold),
            variation = journey.config.variation.enabled,
            "created journey"
        );
        Ok(journey)
    }

    /// The configuration this journey was built from.
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }
    /// The anchors, converted to OKLCh, in order.
    pub fn anchors(&self) -> &[OklchColor] {
        &self.anchors[..self.anchor_count]
    }
    /// The journey's loop mode.
    pub fn loop_mode(&self) -> LoopMode {
        self.config.loop_mode
    }
    /// The minimum OKLab distance enforced between adjacent discrete colors; 0 if enforcement is
    /// off.
    pub fn contrast_threshold(&self) -> f32 {
        self.contrast_threshold
    }

    /// Maps a raw position onto [0, 1] according to the loop mode: open journeys clamp, closed
    /// journeys wrap with period 1, and ping-pong journeys fold with period 2 so that 1.2 maps to
    /// 0.8. Returns `None` when there's no sensible answer: NaN anywhere, or an infinite position on
    /// a journey that repeats.
    /// # Example
    /// ```
    /// # use colorjourney::prelude::*;
    /// let config = Configuration::single(RGBColor{r: 0.5, g: 0.4, b: 0.3});
    /// let open = Journey::new(config.clone()).unwrap();
    /// let closed = Journey::new(config.with_loop_mode(LoopMode::Closed)).unwrap();
    /// assert_eq!(open.map_position(-3.), Some(0.));
    /// assert_eq!(open.map_position(std::f32::INFINITY), Some(1.));
    /// assert_eq!(closed.map_position(1.), Some(0.));
    /// assert_eq!(closed.map_position(-0.25), Some(0.75));
    /// assert_eq!(closed.map_position(std::f32::NAN), None);
    /// ```
    pub fn map_position(&self, t: f32) -> Option<f32> {
        if t.is_nan() {
            return None;
        }
        match self.config.loop_mode {
            LoopMode::Open => Some(t.max(0.).min(1.)),
            _ if t.is_infinite() => None,
            LoopMode::Closed => {
                let wrapped = t.rem_euclid(1.);
                // rem_euclid rounds up to the period itself for tiny negative inputs
                Some(if wrapped >= 1. { 0. } else { wrapped })
            }
            LoopMode::PingPong => {
                let folded = t.rem_euclid(2.);
                Some(if folded >= 2. {
                    0.
                } else if folded > 1. {
                    2. - folded
                } else {
                    folded
                })
            }
        }
    }

    /// The journey's color at a position `u` in [0, 1] that has already been through
    /// [`Journey::map_position`]. This is the model before contrast enforcement, variation, or
    /// conversion to RGB; the result always has lightness in [0, 1], chroma in [0, 0.4] and hue in
    /// [0, 2π).
    pub fn color_at(&self, u: f32) -> OklchColor {
        let base = if self.anchor_count == 1 {
            self.orbit(u)
        } else {
            self.waypoints(u)
        };
        self.shape(base, u)
    }

    // Single anchor: rotate around its hue.
    fn orbit(&self, u: f32) -> OklchColor {
        let anchor = self.anchors[0];
        let span = match self.config.loop_mode {
            LoopMode::Closed => TAU,
            LoopMode::Open | LoopMode::PingPong => OPEN_ROTATION,
        };
        let theta = u * span;
        OklchColor {
            l: anchor.l * (1. + LIGHTNESS_WAVE * libm::sinf(theta)),
            c: anchor.c * (1. + CHROMA_ENVELOPE * libm::sinf(PI * u)),
            h: anchor.h + theta,
        }
    }

    // Several anchors: piecewise-linear interpolation, with a closing segment for closed loops.
    fn waypoints(&self, u: f32) -> OklchColor {
        let n = self.anchor_count;
        let segments = match self.config.loop_mode {
            LoopMode::Closed => n,
            LoopMode::Open | LoopMode::PingPong => n - 1,
        };
        let scaled = u * segments as f32;
        let segment = (scaled.floor() as usize).min(segments - 1);
        let local = scaled - segment as f32;
        let from = self.anchors[segment];
        let to = self.anchors[(segment + 1) % n];
        let start = Coord::from(from);
        let end = Coord::from(OklchColor {
            h: from.h + shortest_hue_delta(from.h, to.h),
            ..to
        });
        OklchColor::from(start.lerp(&end, f64::from(local)))
    }

    // Vibrancy, then the three biases, then bounds.
    fn shape(&self, color: OklchColor, u: f32) -> OklchColor {
        let bump = 0.5 * (1. - libm::cosf(TAU * u));
        let mut out = color;
        out.c *= 1. + self.vibrancy * VIBRANCY_GAIN * bump;
        let w = self.lightness_weight;
        if w != 0. {
            let target = if w > 0. { 1. } else { 0. };
            out.l += (target - out.l) * LIGHTNESS_BIAS_STRENGTH * w.abs();
        }
        out.c *= self.chroma_multiplier;
        out.h += self.hue_shift;
        out.normalized()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::color::RGBColor;
    use crate::config::{ChromaBias, LightnessBias, TemperatureBias};
    use float_cmp::approx_eq;

    fn rgb(r: f32, g: f32, b: f32) -> RGBColor {
        RGBColor{r, g, b}
    }
    fn journey(config: Configuration) -> Journey {
        Journey::new(config).unwrap()
    }
    fn hue_gap(a: f32, b: f32) -> f32 {
        shortest_hue_delta(a, b).abs()
    }

    #[test]
    fn test_rejects_invalid() {
        assert_eq!(Journey::new(Configuration::default()).unwrap_err(), ConfigError::NoAnchors);
        let config = Configuration::single(rgb(0.5, 0.5, 0.5)).with_vibrancy(1.5);
        assert_eq!(Journey::new(config).unwrap_err(), ConfigError::VibrancyOutOfRange(1.5));
    }
    #[test]
    fn test_resolved_parameters() {
        let config = Configuration::single(rgb(0.5, 0.5, 0.5))
            .with_chroma(ChromaBias::Vivid)
            .with_temperature(TemperatureBias::Cool);
        let j = journey(config.clone());
        assert_eq!(j.chroma_multiplier, 1.4);
        assert_eq!(j.hue_shift, -0.3);
        assert_eq!(j.contrast_threshold(), 0.1);
        assert_eq!(j.configuration(), &config);
    }
    #[test]
    fn test_position_mapping() {
        let base = Configuration::single(rgb(0.5, 0.4, 0.3));
        let open = journey(base.clone());
        let closed = journey(base.clone().with_loop_mode(LoopMode::Closed));
        let pingpong = journey(base.with_loop_mode(LoopMode::PingPong));
        assert_eq!(open.map_position(1.2), Some(1.));
        assert_eq!(open.map_position(0.3), Some(0.3));
        assert!(approx_eq!(f32, closed.map_position(1.1).unwrap(), 0.1, epsilon = 1e-6));
        assert_eq!(closed.map_position(-1e-9), Some(0.));
        assert!(approx_eq!(f32, pingpong.map_position(1.2).unwrap(), 0.8, epsilon = 1e-6));
        assert!(approx_eq!(f32, pingpong.map_position(-0.3).unwrap(), 0.3, epsilon = 1e-6));
        assert_eq!(pingpong.map_position(2.), Some(0.));
        assert_eq!(pingpong.map_position(1.), Some(1.));
        assert_eq!(pingpong.map_position(std::f32::NEG_INFINITY), None);
    }
    #[test]
    fn test_multi_anchor_hits_anchors() {
        let anchors = vec![rgb(0.9, 0.2, 0.2), rgb(0.2, 0.8, 0.3), rgb(0.2, 0.3, 0.9)];
        let j = journey(Configuration::new(anchors).with_vibrancy(0.));
        for (u, anchor) in [0., 0.5, 1.].iter().zip(j.anchors().iter()) {
            let c = j.color_at(*u);
            assert!(approx_eq!(f32, c.l, anchor.l, epsilon = 1e-5));
            assert!(approx_eq!(f32, c.c, anchor.c, epsilon = 1e-5));
            assert!(hue_gap(c.h, anchor.h) <= 1e-4);
        }
    }
    #[test]
    fn test_hue_takes_short_arc() {
        // two reds either side of hue 0; the midpoint must stay red rather than pass through cyan
        let a = OklchColor{l: 0.6, c: 0.15, h: 6.1};
        let b = OklchColor{l: 0.6, c: 0.15, h: 0.2};
        let j = journey(
            Configuration::new(vec![a.to_rgb(), b.to_rgb()]).with_vibrancy(0.),
        );
        let mid = j.color_at(0.5);
        let expected = j.anchors()[0].h + shortest_hue_delta(j.anchors()[0].h, j.anchors()[1].h) / 2.;
        assert!(hue_gap(mid.h, expected) <= 1e-4, "{} vs {}", mid.h, expected);
        assert!(hue_gap(mid.h, 0.) < 0.3);
    }
    #[test]
    fn test_closed_multi_anchor_returns_home() {
        let anchors = vec![rgb(1., 0.2, 0.2), rgb(0.2, 1., 0.2), rgb(0.2, 0.2, 1.)];
        let j = journey(Configuration::new(anchors).with_loop_mode(LoopMode::Closed));
        let start = j.color_at(0.);
        let almost = j.color_at(0.9999);
        assert!(start.distance(&almost) < 1e-3);
    }
    #[test]
    fn test_single_anchor_rotates() {
        let j = journey(Configuration::single(rgb(0.7, 0.3, 0.2)).with_vibrancy(0.));
        let start = j.color_at(0.);
        let end = j.color_at(1.);
        assert!(hue_gap(start.h, j.anchors()[0].h) <= 1e-5);
        // open journeys stop short of a full turn so the ends stay distinct
        assert!(approx_eq!(f32, hue_gap(start.h, end.h), TAU - OPEN_ROTATION, epsilon = 1e-4));
        let closed = journey(
            Configuration::single(rgb(0.7, 0.3, 0.2)).with_loop_mode(LoopMode::Closed),
        );
        assert!(closed.color_at(0.).distance(&closed.color_at(0.9999)) < 1e-3);
    }
    #[test]
    fn test_vibrancy_peaks_midway() {
        let anchors = vec![rgb(0.6, 0.3, 0.3), rgb(0.6, 0.3, 0.3)];
        let flat = journey(Configuration::new(anchors.clone()).with_vibrancy(0.));
        let vivid = journey(Configuration::new(anchors).with_vibrancy(1.));
        let ratio = vivid.color_at(0.5).c / flat.color_at(0.5).c;
        assert!(approx_eq!(f32, ratio, 1.6, epsilon = 1e-4));
        assert!(approx_eq!(f32, vivid.color_at(0.).c, flat.color_at(0.).c, epsilon = 1e-6));
    }
    #[test]
    fn test_biases() {
        let anchors = vec![rgb(0.4, 0.4, 0.6), rgb(0.4, 0.4, 0.6)];
        let plain = journey(Configuration::new(anchors.clone()).with_vibrancy(0.)).color_at(0.25);
        let lighter = journey(
            Configuration::new(anchors.clone()).with_vibrancy(0.).with_lightness(LightnessBias::Lighter),
        )
        .color_at(0.25);
        let darker = journey(
            Configuration::new(anchors.clone()).with_vibrancy(0.).with_lightness(LightnessBias::Darker),
        )
        .color_at(0.25);
        assert!(approx_eq!(f32, lighter.l, plain.l + (1. - plain.l) * 0.2, epsilon = 1e-6));
        assert!(approx_eq!(f32, darker.l, plain.l * 0.8, epsilon = 1e-6));
        let muted = journey(
            Configuration::new(anchors.clone()).with_vibrancy(0.).with_chroma(ChromaBias::Muted),
        )
        .color_at(0.25);
        assert!(approx_eq!(f32, muted.c, plain.c * 0.6, epsilon = 1e-6));
        let warm = journey(
            Configuration::new(anchors).with_vibrancy(0.).with_temperature(TemperatureBias::Warm),
        )
        .color_at(0.25);
        assert!(approx_eq!(f32, shortest_hue_delta(plain.h, warm.h), 0.3, epsilon = 1e-5));
    }
    #[test]
    fn test_model_stays_in_bounds() {
        let anchors = vec![rgb(1., 0., 0.), rgb(0., 0., 1.), rgb(1., 1., 1.), rgb(0., 0., 0.)];
        for mode in [LoopMode::Open, LoopMode::Closed, LoopMode::PingPong].iter() {
            let j = journey(
                Configuration::new(anchors.clone())
                    .with_loop_mode(*mode)
                    .with_chroma(ChromaBias::Custom(2.))
                    .with_vibrancy(1.),
            );
            for i in 0..=100 {
                let c = j.color_at(i as f32 / 100.);
                assert!(c.l >= 0. && c.l <= 1.);
                assert!(c.c >= 0. && c.c <= 0.4);
                assert!(c.h >= 0. && c.h < TAU);
            }
        }
    }
}
