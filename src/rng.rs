//! A counter-based pseudo-random generator. Every output is a pure function of a seed and a stream
//! index: there is no internal state to advance, so the value at index 1000 can be computed without
//! generating the 999 before it, and two callers asking for the same index in different orders get
//! the same answer.
//!
//! The construction is the SplitMix64 generator addressed directly: stream index `i` corresponds to
//! the state SplitMix64 would reach after `i + 1` steps from `seed`, and the output is that state run
//! through the SplitMix64 finalizer. The bit stream is therefore exactly SplitMix64's, and is fixed
//! for good: changing it would change every seeded palette ever produced.

/// The SplitMix64 increment, 2^64 divided by the golden ratio.
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

// Stafford's "Mix13" finalizer, as used by SplitMix64.
fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// The `stream_index`-th 64-bit output for `seed`. Depends on nothing but its arguments.
///
/// # Example
/// ```
/// # use colorjourney::rng::next;
/// // the first outputs of SplitMix64 seeded with 0
/// assert_eq!(next(0, 0), 0xE220_A839_7B1D_CDAF);
/// assert_eq!(next(0, 1), 0x6E78_9E6A_A1B9_65F4);
/// // order doesn't matter
/// assert_eq!(next(7, 1000), next(7, 1000));
/// ```
pub fn next(seed: u64, stream_index: u64) -> u64 {
    mix64(seed.wrapping_add(stream_index.wrapping_add(1).wrapping_mul(GOLDEN_GAMMA)))
}

/// Converts a 64-bit output to a float uniformly distributed in [0, 1), using the top 24 bits so
/// that every value is exactly representable in an `f32`.
pub fn unit_f32(bits: u64) -> f32 {
    (bits >> 40) as f32 / (1u64 << 24) as f32
}

/// A seeded handle onto the counter-based stream. This is a convenience wrapper around [`next`]:
/// it holds only the seed and never changes, so it can be shared freely.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CounterRng {
    seed: u64,
}

impl CounterRng {
    /// Creates a generator for the given seed.
    pub fn new(seed: u64) -> CounterRng {
        CounterRng { seed }
    }
    /// The raw 64-bit output at `stream_index`.
    pub fn bits(&self, stream_index: u64) -> u64 {
        next(self.seed, stream_index)
    }
    /// The output at `stream_index` as a float in [0, 1).
    pub fn unit(&self, stream_index: u64) -> f32 {
        unit_f32(self.bits(stream_index))
    }
}
