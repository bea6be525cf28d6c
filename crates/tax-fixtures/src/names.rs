//! Taxpayer name generation from fixed corpora.
//!
//! Names are assembled from small, fixed word lists so test suites can assert
//! on membership without depending on a locale database.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::{RandomSource, draw_below};

/// Given names used for individuals.
pub const FIRST_NAMES: [&str; 12] = [
    "Amina", "Brian", "Cynthia", "David", "Esther", "Francis", "Grace", "Hassan", "Irene", "James",
    "Njeri", "Otieno",
];

/// Family names used for individuals and partnerships.
pub const LAST_NAMES: [&str; 12] = [
    "Achieng", "Barasa", "Chebet", "Kamau", "Kariuki", "Kiprono", "Mutua", "Mwangi", "Njoroge",
    "Odhiambo", "Wafula", "Wanjiru",
];

/// Leading words of company names.
pub const COMPANY_PREFIXES: [&str; 8] = [
    "Acacia", "Baobab", "Jambo", "Kilima", "Savanna", "Simba", "Tana", "Umoja",
];

/// Business-line words of company names.
pub const COMPANY_TYPES: [&str; 6] = [
    "Enterprises",
    "Holdings",
    "Logistics",
    "Supplies",
    "Traders",
    "Ventures",
];

/// Optional legal suffixes of company names.
pub const COMPANY_SUFFIXES: [&str; 3] = ["Limited", "Ltd", "Group"];

/// Shape of a generated taxpayer name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxpayerKind {
    /// A natural person, `First Last`.
    #[default]
    Individual,
    /// A company, `Prefix Type` with an optional suffix.
    Company,
    /// A partnership, `Name & Name Partners`.
    Partnership,
}

impl TaxpayerKind {
    /// Every kind, in draw order.
    pub const ALL: [Self; 3] = [Self::Individual, Self::Company, Self::Partnership];

    /// Returns the lowercase label used in fixtures and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Company => "company",
            Self::Partnership => "partnership",
        }
    }

    /// Picks a kind uniformly using one draw.
    pub fn random<S: RandomSource + ?Sized>(source: &mut S) -> Self {
        usize::try_from(draw_below(source, 3))
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .unwrap_or_default()
    }
}

impl fmt::Display for TaxpayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no [`TaxpayerKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown taxpayer kind: {value}")]
pub struct ParseTaxpayerKindError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for TaxpayerKind {
    type Err = ParseTaxpayerKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseTaxpayerKindError {
                value: s.to_owned(),
            })
    }
}

/// Generates a taxpayer name of the requested kind.
///
/// Draws: two for individuals (first, last), three for companies (prefix,
/// type, suffix slot), two for partnerships (each partner).
///
/// # Example
///
/// ```
/// use tax_fixtures::{SeededRng, TaxpayerKind, generate_taxpayer_name};
///
/// let name = generate_taxpayer_name(&mut SeededRng::new(4), TaxpayerKind::Partnership);
/// assert!(name.ends_with(" Partners"));
/// assert!(name.contains(" & "));
/// ```
pub fn generate_taxpayer_name<S: RandomSource + ?Sized>(
    source: &mut S,
    kind: TaxpayerKind,
) -> String {
    match kind {
        TaxpayerKind::Individual => {
            let first = pick(source, &FIRST_NAMES);
            let last = pick(source, &LAST_NAMES);
            format!("{first} {last}")
        }
        TaxpayerKind::Company => {
            let prefix = pick(source, &COMPANY_PREFIXES);
            let line = pick(source, &COMPANY_TYPES);
            // One extra slot past the list means "no suffix".
            let slots = u64::try_from(COMPANY_SUFFIXES.len()).map_or(u64::MAX, |len| len + 1);
            let slot = usize::try_from(draw_below(source, slots))
                .ok()
                .and_then(|index| COMPANY_SUFFIXES.get(index));
            match slot {
                Some(suffix) => format!("{prefix} {line} {suffix}"),
                None => format!("{prefix} {line}"),
            }
        }
        TaxpayerKind::Partnership => {
            let first = pick(source, &LAST_NAMES);
            let second = pick(source, &LAST_NAMES);
            format!("{first} & {second} Partners")
        }
    }
}

fn pick<'a, S: RandomSource + ?Sized>(source: &mut S, words: &[&'a str]) -> &'a str {
    let bound = u64::try_from(words.len()).unwrap_or(u64::MAX);
    usize::try_from(draw_below(source, bound))
        .ok()
        .and_then(|index| words.get(index).copied())
        .unwrap_or_default()
}
