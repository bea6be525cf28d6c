//! Deterministic taxpayer fixture batches from seed definitions.
//!
//! This module produces reproducible batches of [`TaxpayerFixture`] records.
//! The same seed definition and reference date always produce identical
//! output.

use chrono::{DateTime, Datelike, Utc};
use tracing::debug;

use crate::bulk::{Uniqueness, generate_eslips, generate_pins, generate_tccs};
use crate::contact::{generate_email, generate_phone_number};
use crate::error::GenerationError;
use crate::fixture::TaxpayerFixture;
use crate::identifiers::{generate_obligation_id, tax_period_for};
use crate::names::{TaxpayerKind, generate_taxpayer_name};
use crate::registry::{FixtureRegistry, SeedDefinition};
use crate::rng::{RandomSource, SeededRng, draw_below};
use crate::values::{format_date, generate_amount, generate_date_around};

/// Number of past years a generated tax period may reach back.
const MAX_PERIOD_YEARS_AGO: u64 = 2;

/// Generates a batch of taxpayer fixtures from a seed definition.
///
/// A [`SeededRng`] built from the seed drives every draw in a fixed order:
/// the batch's PINs, then TCCs, then e-slips (each unique across the batch),
/// then each record's kind, name, phone, email, obligation, period, amount,
/// and payment date. Dates fall inside the registry's window around `today`.
///
/// # Errors
///
/// Returns [`GenerationError::UniquenessExhausted`] if the batch is too large
/// for unique identifiers to be found within the attempt budget.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use tax_fixtures::{FixtureRegistry, generate_taxpayer_fixtures};
///
/// let json = r#"{
///     "version": 1,
///     "seeds": [{"name": "nairobi-batch", "seed": 42, "count": 3}]
/// }"#;
///
/// let registry = FixtureRegistry::from_json(json).expect("valid");
/// let seed_def = registry.find_seed("nairobi-batch").expect("found");
/// let today = Utc::now();
/// let fixtures = generate_taxpayer_fixtures(&registry, seed_def, today).expect("generated");
///
/// assert_eq!(fixtures.len(), 3);
/// // Same seed produces identical fixtures
/// let again = generate_taxpayer_fixtures(&registry, seed_def, today).expect("generated");
/// assert_eq!(fixtures, again);
/// ```
pub fn generate_taxpayer_fixtures(
    registry: &FixtureRegistry,
    seed_def: &SeedDefinition,
    today: DateTime<Utc>,
) -> Result<Vec<TaxpayerFixture>, GenerationError> {
    let count = seed_def.count();
    let mut rng = SeededRng::new(seed_def.seed());

    let pins = generate_pins(&mut rng, count, Uniqueness::Unique)?;
    let tccs = generate_tccs(&mut rng, count, Uniqueness::Unique)?;
    let eslips = generate_eslips(&mut rng, count, Uniqueness::Unique)?;

    let fixtures: Vec<TaxpayerFixture> = pins
        .into_iter()
        .zip(tccs)
        .zip(eslips)
        .map(|((pin, tcc), eslip)| {
            let identifiers = Identifiers { pin, tcc, eslip };
            generate_single_fixture(&mut rng, registry, identifiers, today)
        })
        .collect();

    debug!(
        seed_name = seed_def.name(),
        seed = seed_def.seed(),
        count = fixtures.len(),
        "taxpayer fixtures generated"
    );

    Ok(fixtures)
}

/// Batch-unique identifiers assigned to one record.
struct Identifiers {
    pin: String,
    tcc: String,
    eslip: String,
}

/// Fills in the per-record fields around pre-drawn identifiers.
fn generate_single_fixture<S: RandomSource + ?Sized>(
    source: &mut S,
    registry: &FixtureRegistry,
    identifiers: Identifiers,
    today: DateTime<Utc>,
) -> TaxpayerFixture {
    let kind = TaxpayerKind::random(source);
    let name = generate_taxpayer_name(source, kind);
    let phone_number = generate_phone_number(source);
    let email = generate_email(source, Some(registry.email_domain()));
    let obligation_id = generate_obligation_id(source);

    let years_ago = u32::try_from(draw_below(source, MAX_PERIOD_YEARS_AGO + 1)).unwrap_or(0);
    let tax_period = tax_period_for(source, today.year(), years_ago, None);

    let amount = generate_amount(source, registry.amount());
    let payment_date = format_date(generate_date_around(source, today, registry.date_window()));

    TaxpayerFixture {
        pin: identifiers.pin,
        name,
        kind,
        phone_number,
        email,
        obligation_id,
        tax_period,
        tcc: identifiers.tcc,
        eslip: identifiers.eslip,
        amount,
        payment_date,
    }
}
