//! Bulk generation with optional uniqueness.
//!
//! Unique batches are built by rejection sampling against the values already
//! produced. Sampling stops after a fixed attempt budget so an undersized
//! value space surfaces as [`GenerationError::UniquenessExhausted`] rather
//! than a loop that never ends.

use std::collections::HashSet;
use std::hash::Hash;

use tracing::{debug, warn};

use crate::error::GenerationError;
use crate::identifiers::{generate_eslip, generate_pin, generate_tcc};
use crate::rng::RandomSource;

/// Attempts allowed per requested value when sampling uniquely.
pub const UNIQUE_ATTEMPT_FACTOR: usize = 10;

/// Minimum attempt budget for unique sampling.
pub const MIN_UNIQUE_ATTEMPTS: usize = 100;

/// Hard ceiling on the attempt budget for unique sampling.
pub const MAX_UNIQUE_ATTEMPTS: usize = 10_000_000;

/// Largest capacity reserved up front for a batch.
const MAX_PREALLOCATION: usize = 1024;

/// Whether a batch may contain repeated values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Uniqueness {
    /// Every value in the batch is distinct.
    #[default]
    Unique,
    /// Values are independent draws and may repeat.
    AllowDuplicates,
}

/// Returns the attempt budget for a unique batch of `count` values.
///
/// The budget is `count * 10`, at least [`MIN_UNIQUE_ATTEMPTS`] and at most
/// [`MAX_UNIQUE_ATTEMPTS`].
#[must_use]
pub fn unique_attempt_budget(count: usize) -> usize {
    count
        .saturating_mul(UNIQUE_ATTEMPT_FACTOR)
        .clamp(MIN_UNIQUE_ATTEMPTS, MAX_UNIQUE_ATTEMPTS)
}

/// Produces `count` values by calling `generator` repeatedly.
///
/// With [`Uniqueness::Unique`], repeated values are discarded and the result
/// keeps the order in which each distinct value first appeared. A `count` of
/// zero returns an empty batch without drawing.
///
/// # Errors
///
/// Returns [`GenerationError::UniquenessExhausted`] when unique sampling
/// spends [`unique_attempt_budget`] draws without reaching `count`. A
/// `count` larger than its budget fails before drawing, since each attempt
/// adds at most one value.
///
/// # Example
///
/// ```
/// use tax_fixtures::{SeededRng, Uniqueness, generate_many, generate_obligation_id};
///
/// let ids = generate_many(&mut SeededRng::new(1), 5, Uniqueness::Unique, generate_obligation_id)
///     .expect("obligation space is large enough");
/// assert_eq!(ids.len(), 5);
/// ```
pub fn generate_many<S, T, F>(
    source: &mut S,
    count: usize,
    uniqueness: Uniqueness,
    mut generator: F,
) -> Result<Vec<T>, GenerationError>
where
    S: RandomSource + ?Sized,
    T: Eq + Hash + Clone,
    F: FnMut(&mut S) -> T,
{
    if count == 0 {
        return Ok(Vec::new());
    }

    if uniqueness == Uniqueness::AllowDuplicates {
        let mut values = Vec::with_capacity(count.min(MAX_PREALLOCATION));
        for _ in 0..count {
            values.push(generator(source));
        }
        return Ok(values);
    }

    let budget = unique_attempt_budget(count);
    if count > budget {
        warn!(
            requested = count,
            attempts = budget,
            "unique batch exceeds its attempt budget"
        );
        return Err(GenerationError::UniquenessExhausted {
            requested: count,
            produced: 0,
            attempts: 0,
        });
    }

    let mut seen = HashSet::with_capacity(count.min(MAX_PREALLOCATION));
    let mut values = Vec::with_capacity(count.min(MAX_PREALLOCATION));

    for _ in 0..budget {
        let candidate = generator(source);
        if seen.insert(candidate.clone()) {
            values.push(candidate);
            if values.len() == count {
                debug!(count, "unique batch generated");
                return Ok(values);
            }
        }
    }

    warn!(
        requested = count,
        produced = values.len(),
        attempts = budget,
        "unique sampling exhausted its attempt budget"
    );
    Err(GenerationError::UniquenessExhausted {
        requested: count,
        produced: values.len(),
        attempts: budget,
    })
}

/// Generates a batch of PINs.
///
/// # Errors
///
/// See [`generate_many`].
pub fn generate_pins<S: RandomSource + ?Sized>(
    source: &mut S,
    count: usize,
    uniqueness: Uniqueness,
) -> Result<Vec<String>, GenerationError> {
    generate_many(source, count, uniqueness, generate_pin)
}

/// Generates a batch of tax compliance certificate numbers.
///
/// # Errors
///
/// See [`generate_many`].
pub fn generate_tccs<S: RandomSource + ?Sized>(
    source: &mut S,
    count: usize,
    uniqueness: Uniqueness,
) -> Result<Vec<String>, GenerationError> {
    generate_many(source, count, uniqueness, generate_tcc)
}

/// Generates a batch of e-slip references.
///
/// # Errors
///
/// See [`generate_many`].
pub fn generate_eslips<S: RandomSource + ?Sized>(
    source: &mut S,
    count: usize,
    uniqueness: Uniqueness,
) -> Result<Vec<String>, GenerationError> {
    generate_many(source, count, uniqueness, generate_eslip)
}
