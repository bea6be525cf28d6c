//! Randomness sources for fixture generation.
//!
//! Every generator in this crate draws from an explicit [`RandomSource`]
//! passed in by the caller. Two sources are provided:
//!
//! - [`SeededRng`], a small linear congruential generator whose output is
//!   reproducible for a given seed
//! - [`SeedSource`], which picks the seeded generator when a seed is supplied
//!   and falls back to the thread-local platform generator otherwise
//!
//! Any [`rand::RngCore`] implementation is also a [`RandomSource`], so seeded
//! `rand` generators such as `ChaCha8Rng` can drive the generators directly.

use rand::rngs::ThreadRng;
use rand::{Rng, RngCore};

/// Multiplier of the linear congruential recurrence.
const LCG_MULTIPLIER: u64 = 9301;

/// Increment of the linear congruential recurrence.
const LCG_INCREMENT: u64 = 49_297;

/// Modulus of the linear congruential recurrence.
const LCG_MODULUS: u64 = 233_280;

/// A capability supplying uniformly distributed floats in `[0, 1)`.
///
/// Generators consume a fixed, documented number of draws per call, so two
/// sources that yield the same sequence always produce the same fixtures.
pub trait RandomSource {
    /// Returns the next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl<R: RngCore> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Reproducible generator using `v' = (v * 9301 + 49297) mod 233280`.
///
/// Each draw advances the state and yields `v' / 233280`.
///
/// # Example
///
/// ```
/// use tax_fixtures::{RandomSource, SeededRng};
///
/// let mut first = SeededRng::new(42);
/// let mut second = SeededRng::new(42);
///
/// assert_eq!(first.next_f64(), second.next_f64());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Creates a generator from a seed.
    ///
    /// The seed is reduced modulo 233280 up front, which leaves the emitted
    /// sequence unchanged while keeping the recurrence free of overflow.
    #[must_use]
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "the recurrence is defined in modular arithmetic"
    )]
    pub const fn new(seed: u64) -> Self {
        Self {
            state: seed % LCG_MODULUS,
        }
    }
}

impl RandomSource for SeededRng {
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "the recurrence is defined in modular arithmetic"
    )]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "state is below 233280 and converts to f64 exactly"
    )]
    fn next_f64(&mut self) -> f64 {
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.state as f64 / LCG_MODULUS as f64
    }
}

/// Source selected from an optional seed.
///
/// `Some(seed)` yields a [`SeededRng`]; `None` delegates to the platform's
/// thread-local generator and is not reproducible.
#[derive(Debug, Clone)]
pub enum SeedSource {
    /// Reproducible linear congruential sequence.
    Seeded(SeededRng),
    /// Non-deterministic platform randomness.
    Platform(ThreadRng),
}

impl SeedSource {
    /// Builds a source from an optional seed.
    ///
    /// # Example
    ///
    /// ```
    /// use tax_fixtures::{SeedSource, generate_pin};
    ///
    /// let pin = generate_pin(&mut SeedSource::from_seed(Some(7)));
    /// assert_eq!(pin, generate_pin(&mut SeedSource::from_seed(Some(7))));
    /// ```
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(
            || Self::Platform(rand::rng()),
            |value| Self::Seeded(SeededRng::new(value)),
        )
    }
}

impl RandomSource for SeedSource {
    fn next_f64(&mut self) -> f64 {
        match self {
            Self::Seeded(rng) => rng.next_f64(),
            Self::Platform(rng) => rng.next_f64(),
        }
    }
}

/// Draws an integer in `[0, bound)` as `floor(r * bound)`.
///
/// Returns `0` when `bound` is zero.
pub fn draw_below<S: RandomSource + ?Sized>(source: &mut S, bound: u64) -> u64 {
    draw_between(source, 0, bound)
}

/// Draws an integer in `[low, low + span)` as `floor(r * span + low)`.
///
/// The result is clamped below `low + span` so rounding at the top of the
/// float range never spills into an extra digit.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "scaling a unit draw into an integer range is float arithmetic"
)]
pub fn draw_between<S: RandomSource + ?Sized>(source: &mut S, low: u64, span: u64) -> u64 {
    let value = source.next_f64() * span as f64 + low as f64;
    let top = low.saturating_add(span.saturating_sub(1));
    floor_to_u64(value).clamp(low, top.max(low))
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "`as` saturates and the callers clamp the result"
)]
fn floor_to_u64(value: f64) -> u64 {
    value.floor() as u64
}

/// Source replaying a fixed list of unit draws, shared by unit tests.
#[cfg(test)]
pub(crate) struct Scripted {
    draws: Vec<f64>,
    pub(crate) consumed: usize,
}

#[cfg(test)]
impl Scripted {
    pub(crate) fn new(draws: &[f64]) -> Self {
        Self {
            draws: draws.to_vec(),
            consumed: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for Scripted {
    fn next_f64(&mut self) -> f64 {
        let value = self.draws.get(self.consumed).copied().unwrap_or(0.0);
        self.consumed += 1;
        value
    }
}
