//! Minimum-contrast enforcement between neighbouring colors. Given a candidate color and a reference
//! it has to stand apart from, this module moves the candidate just far enough (measured as OKLab
//! distance) to reach a threshold, preferring lightness changes, which keep hue and chroma intact,
//! and falling back to chroma only when lightness runs out of room.

use crate::colors::{OklabColor, OklchColor};
use crate::consts::{
    CHROMA_NUDGE_GAIN, CHROMA_NUDGE_STEP, CONTRAST_HIGH, CONTRAST_LOW, CONTRAST_MARGIN,
    CONTRAST_MEDIUM, MAX_CHROMA,
};

/// How strongly adjacent colors must differ, as a minimum OKLab distance.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastLevel {
    /// A distance of at least 0.05: neighbours are distinguishable but related.
    Low,
    /// A distance of at least 0.10: neighbours are clearly different.
    Medium,
    /// A distance of at least 0.15: bold separation.
    High,
    /// An explicit distance in [0, 1]. Zero turns enforcement off.
    Custom(f32),
}

impl Default for ContrastLevel {
    fn default() -> ContrastLevel {
        ContrastLevel::Medium
    }
}

impl ContrastLevel {
    /// The minimum OKLab distance this level asks for.
    pub fn threshold(self) -> f32 {
        match self {
            ContrastLevel::Low => CONTRAST_LOW,
            ContrastLevel::Medium => CONTRAST_MEDIUM,
            ContrastLevel::High => CONTRAST_HIGH,
            ContrastLevel::Custom(x) => x,
        }
    }
}

/// Which way along the lightness axis to move a candidate, relative to its reference.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    /// End up lighter than the reference.
    Lighter,
    /// End up darker than the reference.
    Darker,
}

impl Side {
    fn sign(self) -> f32 {
        match self {
            Side::Lighter => 1.,
            Side::Darker => -1.,
        }
    }
    /// The opposite side.
    pub fn flipped(self) -> Side {
        match self {
            Side::Lighter => Side::Darker,
            Side::Darker => Side::Lighter,
        }
    }
}

/// Returns a color at least `min_distance` away from `reference` in OKLab, derived from
/// `candidate` with as little change as possible. A candidate that already meets the threshold, or
/// a threshold that isn't positive, returns the candidate unchanged.
///
/// Otherwise the candidate moves in whichever lightness direction it already leans relative to the
/// reference. Each iteration sets lightness to the value that reaches the threshold given the
/// current hue-chroma separation, plus a small margin. If that would leave [0, 1], the other
/// direction is tried; if both are out of range, lightness goes as far from the reference as it can
/// and chroma is pushed away from the reference's instead. After `max_iterations` attempts the
/// farthest candidate seen is returned even if it falls short.
///
/// # Example
/// ```
/// # use colorjourney::prelude::*;
/// # use colorjourney::colors::OklchColor;
/// # use colorjourney::contrast::enforce;
/// let reference = OklchColor{l: 0.5, c: 0.1, h: 1.};
/// let candidate = OklchColor{l: 0.52, c: 0.1, h: 1.05};
/// let adjusted = enforce(candidate, reference, 0.1, 8);
/// assert!(adjusted.distance(&reference) >= 0.1);
/// assert!(adjusted.l > reference.l);
/// assert_eq!(adjusted.h, candidate.h);
/// ```
pub fn enforce(
    candidate: OklchColor,
    reference: OklchColor,
    min_distance: f32,
    max_iterations: u32,
) -> OklchColor {
    if !(min_distance > 0.) || candidate.distance(&reference) >= min_distance {
        return candidate;
    }
    let ref_lab = reference.to_oklab();
    let mut side = if candidate.l >= reference.l {
        Side::Lighter
    } else {
        Side::Darker
    };
    refine(candidate, reference, min_distance, max_iterations, |current| {
        let lab = current.to_oklab();
        let planar = libm::hypotf(lab.a - ref_lab.a, lab.b - ref_lab.b);
        if planar >= min_distance {
            return true;
        }
        let needed = libm::sqrtf(min_distance * min_distance - planar * planar) + CONTRAST_MARGIN;
        let target = reference.l + side.sign() * needed;
        let fallback = reference.l - side.sign() * needed;
        if (0.0..=1.0).contains(&target) {
            current.l = target;
            true
        } else if (0.0..=1.0).contains(&fallback) {
            side = side.flipped();
            current.l = fallback;
            true
        } else {
            false
        }
    })
}

/// The two lightness values a color has to reach, one darker and one lighter, to sit `gap` away
/// from `l` along the lightness axis. Near either end of the axis, where one of them wouldn't
/// exist, both move to the side that has room, `gap` apart.
///
/// # Example
/// ```
/// # use colorjourney::contrast::lightness_slots;
/// assert_eq!(lightness_slots(0.5, 0.25), (0.25, 0.75));
/// assert_eq!(lightness_slots(0.875, 0.25), (0.375, 0.625));
/// assert_eq!(lightness_slots(0.125, 0.25), (0.375, 0.625));
/// ```
pub fn lightness_slots(l: f32, gap: f32) -> (f32, f32) {
    if l + gap > 1. {
        (l - 2. * gap, l - gap)
    } else if l - gap < 0. {
        (l + gap, l + 2. * gap)
    } else {
        (l - gap, l + gap)
    }
}

/// Places `candidate` on the given `side` of `reference`, at least `min_distance` away from it in
/// lightness alone, which also puts it at least that far away in OKLab.
///
/// The target lightness is the matching slot from [`lightness_slots`], so near the ends of the
/// axis a "lighter" result can still be darker than the reference; it is then the lighter of the
/// two colors that fit. A candidate already past its slot and at least `min_distance` away is
/// returned unchanged, as is any candidate when the threshold isn't positive. If the slot is
/// outside [0, 1], lightness goes as far from the reference as it can and chroma is pushed away
/// from the reference's, up to `max_iterations` times, keeping the farthest result.
///
/// Discrete palettes alternate sides from one swatch to the next. Each swatch then lands past its
/// own slot or stays put, which keeps it a full threshold of lightness away from its neighbours as
/// well as from its reference.
///
/// # Example
/// ```
/// # use colorjourney::colors::OklchColor;
/// # use colorjourney::contrast::{enforce_toward, Side};
/// let reference = OklchColor{l: 0.5, c: 0.15, h: 0.};
/// // already far away through hue alone, but on the wrong side
/// let candidate = OklchColor{l: 0.48, c: 0.15, h: 3.};
/// let placed = enforce_toward(candidate, reference, 0.1, 8, Side::Lighter);
/// assert!(placed.l - reference.l >= 0.1);
/// assert_eq!((placed.c, placed.h), (candidate.c, candidate.h));
/// ```
pub fn enforce_toward(
    candidate: OklchColor,
    reference: OklchColor,
    min_distance: f32,
    max_iterations: u32,
    side: Side,
) -> OklchColor {
    if !(min_distance > 0.) {
        return candidate;
    }
    let (low, high) = lightness_slots(reference.l, min_distance + CONTRAST_MARGIN);
    let target = match side {
        Side::Lighter => high,
        Side::Darker => low,
    };
    let past_slot = match side {
        Side::Lighter => candidate.l >= high,
        Side::Darker => candidate.l <= low,
    };
    if past_slot && candidate.distance(&reference) >= min_distance {
        return candidate;
    }
    refine(candidate, reference, min_distance, max_iterations, |current| {
        if (0.0..=1.0).contains(&target) {
            current.l = target;
            true
        } else {
            false
        }
    })
}

// Runs `place` until the result is far enough from `reference`. When `place` finds no room on the
// lightness axis, lightness goes to the far end and chroma moves away from the reference's.
fn refine<F>(
    candidate: OklchColor,
    reference: OklchColor,
    min_distance: f32,
    max_iterations: u32,
    mut place: F,
) -> OklchColor
where
    F: FnMut(&mut OklchColor) -> bool,
{
    let ref_lab = reference.to_oklab();
    let mut current = candidate;
    let mut best = candidate;
    let mut best_distance = candidate.to_oklab().distance(&ref_lab);
    for _ in 0..max_iterations {
        if !place(&mut current) {
            current.l = if reference.l < 0.5 { 1. } else { 0. };
            current.c = if current.c >= reference.c {
                (current.c * CHROMA_NUDGE_GAIN + CHROMA_NUDGE_STEP).min(MAX_CHROMA)
            } else {
                (current.c * (2. - CHROMA_NUDGE_GAIN) - CHROMA_NUDGE_STEP).max(0.)
            };
        }
        let distance = OklabColor::from(current).distance(&ref_lab);
        if distance > best_distance {
            best = current;
            best_distance = distance;
        }
        if distance >= min_distance {
            return current;
        }
    }
    trace!(
        best = f64::from(best_distance),
        threshold = f64::from(min_distance),
        "contrast enforcement ran out of iterations"
    );
    best
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn gray(l: f32) -> OklchColor {
        OklchColor{l, c: 0., h: 0.}
    }

    #[test]
    fn test_levels() {
        assert_eq!(ContrastLevel::default(), ContrastLevel::Medium);
        assert_eq!(ContrastLevel::Low.threshold(), 0.05);
        assert_eq!(ContrastLevel::High.threshold(), 0.15);
        assert_eq!(ContrastLevel::Custom(0.3).threshold(), 0.3);
    }
    #[test]
    fn test_already_far_enough() {
        let a = gray(0.2);
        let b = gray(0.8);
        assert_eq!(enforce(a, b, 0.1, 8), a);
    }
    #[test]
    fn test_disabled_threshold() {
        let a = gray(0.5);
        assert_eq!(enforce(a, a, 0., 8), a);
        assert_eq!(enforce(a, a, std::f32::NAN, 8), a);
    }
    #[test]
    fn test_identical_colors_separate() {
        let a = OklchColor{l: 0.6, c: 0.05, h: 2.};
        for threshold in [0.05, 0.1, 0.15, 0.3].iter() {
            let lighter = enforce_toward(a, a, *threshold, 8, Side::Lighter);
            let darker = enforce_toward(a, a, *threshold, 8, Side::Darker);
            assert!(lighter.distance(&a) >= *threshold);
            assert!(darker.distance(&a) >= *threshold);
            assert!(lighter.l > a.l && darker.l < a.l);
            assert_eq!(lighter.c, a.c);
            assert_eq!(lighter.h, a.h);
        }
    }
    #[test]
    fn test_enforce_flips_at_the_edge() {
        let reference = gray(0.97);
        let out = enforce(gray(0.975), reference, 0.1, 8);
        assert!(out.l < reference.l);
        assert!(out.distance(&reference) >= 0.1);
    }
    #[test]
    fn test_slots_shift_at_the_edge() {
        let reference = gray(0.97);
        let lighter = enforce_toward(gray(0.96), reference, 0.1, 8, Side::Lighter);
        let darker = enforce_toward(gray(0.96), reference, 0.1, 8, Side::Darker);
        assert!(lighter.l < reference.l);
        assert!(lighter.distance(&reference) >= 0.1);
        assert!(lighter.l - darker.l >= 0.1);
        let (low, high) = lightness_slots(0.02, 0.15);
        assert!(low > 0.02);
        assert!((high - low - 0.15).abs() < 1e-6);
    }
    #[test]
    fn test_toward_moves_colors_on_the_wrong_side() {
        let reference = OklchColor{l: 0.5, c: 0.15, h: 0.};
        let candidate = OklchColor{l: 0.48, c: 0.15, h: 3.};
        assert!(candidate.distance(&reference) >= 0.1);
        // the general entry point leaves a distant color alone
        assert_eq!(enforce(candidate, reference, 0.1, 8), candidate);
        let placed = enforce_toward(candidate, reference, 0.1, 8, Side::Lighter);
        assert!(placed.l >= 0.6);
        // already past the darker slot and far enough: untouched
        let dark = OklchColor{l: 0.35, ..candidate};
        assert_eq!(enforce_toward(dark, reference, 0.1, 8, Side::Darker), dark);
    }
    #[test]
    fn test_alternating_sides_keep_neighbours_apart() {
        // references close together in lightness, as on a gray journey
        let pre: Vec<OklchColor> = [0.79, 0.83, 0.76, 0.81, 0.77, 0.8, 0.75, 0.82]
            .iter()
            .map(|l| gray(*l))
            .collect();
        for threshold in [0.05, 0.1, 0.15].iter() {
            let mut out = vec![pre[0]];
            for i in 1..pre.len() {
                let side = if i % 2 == 1 { Side::Lighter } else { Side::Darker };
                out.push(enforce_toward(pre[i], pre[i - 1], *threshold, 8, side));
            }
            for pair in out.windows(2) {
                assert!(pair[0].distance(&pair[1]) >= *threshold, "{:?}", pair);
            }
        }
    }
    #[test]
    fn test_enforce_follows_lean() {
        let reference = gray(0.5);
        assert!(enforce(gray(0.49), reference, 0.1, 8).l < 0.5);
        assert!(enforce(gray(0.51), reference, 0.1, 8).l > 0.5);
    }
    #[test]
    fn test_unreachable_threshold_returns_best() {
        let reference = OklchColor{l: 0.5, c: 0.05, h: 1.};
        let out = enforce_toward(reference, reference, 0.9, 8, Side::Lighter);
        assert_eq!(out.l, 0.);
        assert!(out.c > reference.c && out.c <= 0.4);
        assert!(out.distance(&reference) < 0.9);
        assert!(out.distance(&reference) >= 0.5);
    }
    #[test]
    fn test_deterministic() {
        let a = OklchColor{l: 0.3, c: 0.12, h: 4.};
        let b = OklchColor{l: 0.31, c: 0.11, h: 4.1};
        assert_eq!(enforce(a, b, 0.15, 8), enforce(a, b, 0.15, 8));
    }
}
