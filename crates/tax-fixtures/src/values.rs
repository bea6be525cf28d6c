//! Monetary amount and date generators.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::rng::{RandomSource, draw_below};

/// Milliseconds in one day.
const MILLIS_PER_DAY: u64 = 86_400_000;

/// Largest supported number of fractional digits for amounts.
pub const MAX_AMOUNT_DECIMALS: u32 = 6;

/// Default number of fractional digits for amounts.
pub const DEFAULT_AMOUNT_DECIMALS: u32 = 2;

/// Largest magnitude an amount bound may take.
pub const MAX_AMOUNT_MAGNITUDE: f64 = 1.0e15;

/// Inclusive bounds and precision for generated amounts.
///
/// Bounds supplied in the wrong order are swapped, and precision is capped
/// at [`MAX_AMOUNT_DECIMALS`]. Bounds are kept finite: a NaN bound takes the
/// other bound's value (zero if both are NaN) and magnitudes are limited to
/// [`MAX_AMOUNT_MAGNITUDE`].
///
/// # Example
///
/// ```
/// use tax_fixtures::AmountRange;
///
/// let range = AmountRange::new(2000.0, 1000.0, 2);
/// assert_eq!(range.min(), 1000.0);
/// assert_eq!(range.max(), 2000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawAmountRange", into = "RawAmountRange")]
pub struct AmountRange {
    min: f64,
    max: f64,
    decimals: u32,
}

impl AmountRange {
    /// Creates a range, ordering the bounds and capping the precision.
    #[must_use]
    pub const fn new(first: f64, second: f64, decimals: u32) -> Self {
        let (a, b) = match (first.is_nan(), second.is_nan()) {
            (true, true) => (0.0, 0.0),
            (true, false) => (second, second),
            (false, true) => (first, first),
            (false, false) => (first, second),
        };
        let (low, high) = (limit_magnitude(a), limit_magnitude(b));
        let (min, max) = if low <= high { (low, high) } else { (high, low) };
        let capped = if decimals > MAX_AMOUNT_DECIMALS {
            MAX_AMOUNT_DECIMALS
        } else {
            decimals
        };
        Self {
            min,
            max,
            decimals: capped,
        }
    }

    /// Returns the lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Returns the number of fractional digits kept.
    #[must_use]
    pub const fn decimals(&self) -> u32 {
        self.decimals
    }
}

const fn limit_magnitude(value: f64) -> f64 {
    if value > MAX_AMOUNT_MAGNITUDE {
        MAX_AMOUNT_MAGNITUDE
    } else if value < -MAX_AMOUNT_MAGNITUDE {
        -MAX_AMOUNT_MAGNITUDE
    } else {
        value
    }
}

impl Default for AmountRange {
    fn default() -> Self {
        Self::new(0.0, 1_000_000.0, DEFAULT_AMOUNT_DECIMALS)
    }
}

/// Wire shape of [`AmountRange`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAmountRange {
    min: f64,
    max: f64,
    #[serde(default = "default_decimals")]
    decimals: u32,
}

const fn default_decimals() -> u32 {
    DEFAULT_AMOUNT_DECIMALS
}

impl From<RawAmountRange> for AmountRange {
    fn from(raw: RawAmountRange) -> Self {
        Self::new(raw.min, raw.max, raw.decimals)
    }
}

impl From<AmountRange> for RawAmountRange {
    fn from(range: AmountRange) -> Self {
        Self {
            min: range.min,
            max: range.max,
            decimals: range.decimals,
        }
    }
}

/// Window of days around a reference instant.
///
/// Offsets are unsigned, so a window can never be inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateWindow {
    /// Days before the reference instant.
    pub days_ago: u32,
    /// Days after the reference instant.
    pub days_future: u32,
}

impl DateWindow {
    /// Creates a window spanning `days_ago` back and `days_future` forward.
    #[must_use]
    pub const fn new(days_ago: u32, days_future: u32) -> Self {
        Self {
            days_ago,
            days_future,
        }
    }
}

impl Default for DateWindow {
    fn default() -> Self {
        Self::new(30, 30)
    }
}

/// Generates an amount in `range`, rounded to its precision.
///
/// Draws one value. The result never leaves `[min, max]` and is drawn from
/// the values in that range with at most `decimals` fractional digits. When
/// the range holds no such value, `min` is returned unchanged.
///
/// # Example
///
/// ```
/// use tax_fixtures::{AmountRange, SeededRng, generate_amount};
///
/// let amount = generate_amount(&mut SeededRng::new(3), AmountRange::new(1000.0, 2000.0, 2));
/// assert!((1000.0..=2000.0).contains(&amount));
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "amounts are scaled and rounded as floats"
)]
pub fn generate_amount<S: RandomSource + ?Sized>(source: &mut S, range: AmountRange) -> f64 {
    let draw = source.next_f64();
    let factor = 10_f64.powi(i32::try_from(range.decimals).unwrap_or(0));
    let lower = ((range.min * factor).ceil() / factor).max(range.min);
    let upper = ((range.max * factor).floor() / factor).min(range.max);
    if lower > upper {
        return range.min;
    }

    let raw = lower + draw * (upper - lower);
    let rounded = (raw * factor).round() / factor;
    rounded.max(lower).min(upper)
}

/// Generates an instant within `window` of the current time.
///
/// See [`generate_date_around`].
pub fn generate_date<S: RandomSource + ?Sized>(
    source: &mut S,
    window: DateWindow,
) -> DateTime<Utc> {
    generate_date_around(source, Utc::now(), window)
}

/// Generates an instant within `window` of `now`, at millisecond precision.
///
/// Draws one value, even for an empty window, which always yields `now`.
pub fn generate_date_around<S: RandomSource + ?Sized>(
    source: &mut S,
    now: DateTime<Utc>,
    window: DateWindow,
) -> DateTime<Utc> {
    let span_days = u64::from(window.days_ago) + u64::from(window.days_future);
    let offset = draw_below(source, span_days * MILLIS_PER_DAY);
    let start = now
        .checked_sub_signed(days(window.days_ago))
        .unwrap_or(now);
    let delta = TimeDelta::try_milliseconds(i64::try_from(offset).unwrap_or(i64::MAX))
        .unwrap_or(TimeDelta::zero());
    start.checked_add_signed(delta).unwrap_or(now)
}

/// Formats an instant as a `YYYY-MM-DD` calendar date.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tax_fixtures::format_date;
///
/// let date = Utc.with_ymd_and_hms(2024, 3, 9, 17, 45, 0).single().expect("valid date");
/// assert_eq!(format_date(date), "2024-03-09");
/// ```
#[must_use]
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn days(count: u32) -> TimeDelta {
    TimeDelta::try_days(i64::from(count)).unwrap_or(TimeDelta::zero())
}
