//! Deterministic tax identifier and taxpayer fixtures for test suites.
//!
//! This crate generates syntactically valid but randomized tax-domain values
//! (PINs, compliance certificate numbers, e-slip references, names, phone
//! numbers, emails, amounts, dates) together with the format validators they
//! are guaranteed to satisfy.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - An explicit randomness capability, [`RandomSource`], passed to every
//!   generator; [`SeededRng`] makes output reproducible
//! - Scalar generators with a fixed number of draws per call
//! - Bulk generation with bounded rejection sampling for uniqueness
//! - Regular-expression validators for each identifier format
//! - Whole taxpayer fixture batches driven by a JSON registry of named seeds
//!
//! # Example
//!
//! ```
//! use tax_fixtures::{SeededRng, Uniqueness, generate_pins, is_valid_pin};
//!
//! let mut rng = SeededRng::new(2026);
//! let pins = generate_pins(&mut rng, 10, Uniqueness::Unique).expect("unique pins");
//!
//! assert_eq!(pins.len(), 10);
//! assert!(pins.iter().all(|pin| is_valid_pin(pin)));
//!
//! // The same seed reproduces the same batch.
//! let again = generate_pins(&mut SeededRng::new(2026), 10, Uniqueness::Unique)
//!     .expect("unique pins");
//! assert_eq!(pins, again);
//! ```

mod atomic_io;
mod bulk;
mod contact;
mod error;
mod fixture;
pub mod fixture_cli;
mod generator;
mod identifiers;
mod names;
mod registry;
mod rng;
mod validation;
mod values;

pub use bulk::{
    MAX_UNIQUE_ATTEMPTS, MIN_UNIQUE_ATTEMPTS, UNIQUE_ATTEMPT_FACTOR, Uniqueness, generate_eslips,
    generate_many, generate_pins, generate_tccs, unique_attempt_budget,
};
pub use contact::{DEFAULT_EMAIL_DOMAIN, generate_email, generate_phone_number};
pub use error::{GenerationError, RegistryError};
pub use fixture::TaxpayerFixture;
pub use generator::generate_taxpayer_fixtures;
pub use identifiers::{
    generate_eslip, generate_obligation_id, generate_pin, generate_tax_period, generate_tcc,
    tax_period_for,
};
pub use names::{
    COMPANY_PREFIXES, COMPANY_SUFFIXES, COMPANY_TYPES, FIRST_NAMES, LAST_NAMES,
    ParseTaxpayerKindError, TaxpayerKind, generate_taxpayer_name,
};
pub use registry::{FixtureRegistry, SeedDefinition};
pub use rng::{RandomSource, SeedSource, SeededRng, draw_below, draw_between};
pub use validation::{
    ESLIP_PATTERN, PIN_PATTERN, TCC_PATTERN, is_valid_eslip, is_valid_pin, is_valid_tcc,
};
pub use values::{
    AmountRange, DEFAULT_AMOUNT_DECIMALS, DateWindow, MAX_AMOUNT_DECIMALS, MAX_AMOUNT_MAGNITUDE,
    format_date, generate_amount, generate_date, generate_date_around,
};
