//! Format validators for tax identifiers.
//!
//! The validators accept every identifier the generators produce and are
//! deliberately wider where externally issued numbers vary in length.
//!
//! # Validation Rules
//!
//! - PIN: `P`, nine digits, one uppercase letter
//! - TCC: `TCC` followed by six to eight digits
//! - E-slip: `ESLIP` followed by nine to twelve digits

use std::sync::OnceLock;

use regex::Regex;

/// Pattern matched by [`is_valid_pin`].
pub const PIN_PATTERN: &str = r"^P\d{9}[A-Z]$";

/// Pattern matched by [`is_valid_tcc`].
pub const TCC_PATTERN: &str = r"^TCC\d{6,8}$";

/// Pattern matched by [`is_valid_eslip`].
pub const ESLIP_PATTERN: &str = r"^ESLIP\d{9,12}$";

static PIN_RE: OnceLock<Option<Regex>> = OnceLock::new();
static TCC_RE: OnceLock<Option<Regex>> = OnceLock::new();
static ESLIP_RE: OnceLock<Option<Regex>> = OnceLock::new();

/// Validates a taxpayer PIN.
///
/// # Examples
///
/// ```
/// use tax_fixtures::is_valid_pin;
///
/// assert!(is_valid_pin("P051234567Q"));
/// assert!(!is_valid_pin("P05123456Q"));   // Eight digits
/// assert!(!is_valid_pin("p051234567q"));  // Lowercase
/// ```
#[must_use]
pub fn is_valid_pin(value: &str) -> bool {
    matches_pattern(&PIN_RE, PIN_PATTERN, value)
}

/// Validates a tax compliance certificate number.
///
/// # Examples
///
/// ```
/// use tax_fixtures::is_valid_tcc;
///
/// assert!(is_valid_tcc("TCC123456"));
/// assert!(is_valid_tcc("TCC12345678"));
/// assert!(!is_valid_tcc("TCC12345"));
/// ```
#[must_use]
pub fn is_valid_tcc(value: &str) -> bool {
    matches_pattern(&TCC_RE, TCC_PATTERN, value)
}

/// Validates an e-slip payment reference.
///
/// # Examples
///
/// ```
/// use tax_fixtures::is_valid_eslip;
///
/// assert!(is_valid_eslip("ESLIP123456789"));
/// assert!(!is_valid_eslip("ESLIPX"));
/// ```
#[must_use]
pub fn is_valid_eslip(value: &str) -> bool {
    matches_pattern(&ESLIP_RE, ESLIP_PATTERN, value)
}

/// Compiles `pattern` once and tests `value` against it.
///
/// A pattern that fails to compile rejects every value.
fn matches_pattern(cell: &OnceLock<Option<Regex>>, pattern: &str, value: &str) -> bool {
    cell.get_or_init(|| Regex::new(pattern).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(value))
}

#[cfg(test)]
mod tests {
    //! Covers the accepted and rejected shapes of each identifier.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("P000000000A", true)]
    #[case("P123456789Z", true)]
    #[case("P12345678Z", false)] // Eight digits
    #[case("P1234567890Z", false)] // Ten digits
    #[case("P123456789", false)] // Missing letter
    #[case("P123456789z", false)] // Lowercase letter
    #[case("A123456789Z", false)] // Wrong prefix
    #[case(" P123456789Z", false)] // Leading space
    #[case("", false)]
    fn pin_shapes(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_pin(value), expected);
    }

    #[rstest]
    #[case("TCC123456", true)]
    #[case("TCC1234567", true)]
    #[case("TCC12345678", true)]
    #[case("TCC12345", false)] // Below minimum
    #[case("TCC123456789", false)] // Above maximum
    #[case("tcc123456", false)]
    #[case("TCC12345A", false)]
    fn tcc_shapes(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_tcc(value), expected);
    }

    #[rstest]
    #[case("ESLIP123456789", true)]
    #[case("ESLIP123456789012", true)]
    #[case("ESLIP12345678", false)] // Eight digits
    #[case("ESLIP1234567890123", false)] // Thirteen digits
    #[case("ESLIPX", false)]
    #[case("ESLIP", false)]
    fn eslip_shapes(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_eslip(value), expected);
    }

    #[test]
    fn invalid_pattern_rejects_everything() {
        let cell = OnceLock::new();
        assert!(!matches_pattern(&cell, "(", "("));
    }
}
