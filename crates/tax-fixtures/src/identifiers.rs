//! Tax identifier generators.
//!
//! Each generator consumes a fixed number of draws from the supplied
//! [`RandomSource`] in a fixed order, so a given source sequence always maps
//! to the same identifier. The formats produced here are strict subsets of
//! what the matching `is_valid_*` validators accept.

use chrono::{Datelike, Utc};

use crate::rng::{RandomSource, draw_below, draw_between};

/// Letters available for the PIN check suffix.
const LETTERS: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Lower bound of a nine-digit block.
const NINE_DIGIT_LOW: u64 = 100_000_000;

/// Width of the nine-digit range.
const NINE_DIGIT_SPAN: u64 = 900_000_000;

/// Lower bound of the eight-digit block a TCC is cut from.
const EIGHT_DIGIT_LOW: u64 = 10_000_000;

/// Width of the eight-digit range.
const EIGHT_DIGIT_SPAN: u64 = 90_000_000;

/// Number of digits kept in a TCC.
const TCC_DIGITS: usize = 6;

/// Highest obligation number.
const MAX_OBLIGATION: u64 = 999;

/// Number of months in a tax year.
const MONTHS: u64 = 12;

/// Generates a taxpayer PIN such as `P051234567Q`.
///
/// Draws: one for the nine-digit block, one for the trailing letter.
///
/// # Example
///
/// ```
/// use tax_fixtures::{SeededRng, generate_pin, is_valid_pin};
///
/// let pin = generate_pin(&mut SeededRng::new(42));
/// assert!(is_valid_pin(&pin));
/// ```
pub fn generate_pin<S: RandomSource + ?Sized>(source: &mut S) -> String {
    let digits = draw_between(source, NINE_DIGIT_LOW, NINE_DIGIT_SPAN);
    let letter = usize::try_from(draw_below(source, 26))
        .ok()
        .and_then(|index| LETTERS.get(index).copied())
        .unwrap_or('A');
    format!("P{digits}{letter}")
}

/// Generates a tax compliance certificate number such as `TCC482913`.
///
/// Draws one eight-digit block and keeps its leading six digits.
pub fn generate_tcc<S: RandomSource + ?Sized>(source: &mut S) -> String {
    let block = draw_between(source, EIGHT_DIGIT_LOW, EIGHT_DIGIT_SPAN).to_string();
    let digits: String = block.chars().take(TCC_DIGITS).collect();
    format!("TCC{digits}")
}

/// Generates an e-slip payment reference such as `ESLIP304918273`.
///
/// Draws one nine-digit block.
pub fn generate_eslip<S: RandomSource + ?Sized>(source: &mut S) -> String {
    let digits = draw_between(source, NINE_DIGIT_LOW, NINE_DIGIT_SPAN);
    format!("ESLIP{digits}")
}

/// Generates an obligation identifier between `OBL001` and `OBL999`.
///
/// Draws one value.
pub fn generate_obligation_id<S: RandomSource + ?Sized>(source: &mut S) -> String {
    let number = draw_between(source, 1, MAX_OBLIGATION);
    format!("OBL{number:03}")
}

/// Generates a `YYYYMM` tax period relative to the current UTC year.
///
/// See [`tax_period_for`] for the draw rules.
pub fn generate_tax_period<S: RandomSource + ?Sized>(
    source: &mut S,
    years_ago: u32,
    month: Option<u32>,
) -> String {
    tax_period_for(source, Utc::now().year(), years_ago, month)
}

/// Generates a `YYYYMM` tax period `years_ago` years before `reference_year`.
///
/// A supplied month is clamped into `1..=12` and consumes no draws. Without
/// one, a single draw picks the month from the same source as every other
/// generator, keeping the period reproducible under a seed.
///
/// # Example
///
/// ```
/// use tax_fixtures::{SeededRng, tax_period_for};
///
/// let period = tax_period_for(&mut SeededRng::new(1), 2025, 1, Some(3));
/// assert_eq!(period, "202403");
/// ```
pub fn tax_period_for<S: RandomSource + ?Sized>(
    source: &mut S,
    reference_year: i32,
    years_ago: u32,
    month: Option<u32>,
) -> String {
    let offset = i32::try_from(years_ago).unwrap_or(i32::MAX);
    let year = reference_year.saturating_sub(offset);
    let resolved_month = month.map_or_else(
        || draw_between(source, 1, MONTHS),
        |value| u64::from(value.clamp(1, 12)),
    );
    format!("{year}{resolved_month:02}")
}
