//! Taxpayer contact detail generators.

use crate::rng::{RandomSource, draw_below};

/// Country calling code prefixed to every phone number.
const COUNTRY_CODE: &str = "+254";

/// Leading digits of the mobile ranges.
const MOBILE_PREFIXES: [char; 2] = ['7', '1'];

/// Exclusive upper bound of the eight-digit subscriber number.
const SUBSCRIBER_SPAN: u64 = 100_000_000;

/// Exclusive upper bound of the numeric email suffix.
const EMAIL_SPAN: u64 = 1_000_000;

/// Domain used when no email domain is supplied.
pub const DEFAULT_EMAIL_DOMAIN: &str = "example.com";

/// Generates a mobile number such as `+254712345678`.
///
/// Draws: one for the mobile prefix, one for the zero-padded eight-digit
/// subscriber number.
///
/// # Example
///
/// ```
/// use tax_fixtures::{SeededRng, generate_phone_number};
///
/// let phone = generate_phone_number(&mut SeededRng::new(5));
/// assert!(phone.starts_with("+2547") || phone.starts_with("+2541"));
/// assert_eq!(phone.len(), 13);
/// ```
pub fn generate_phone_number<S: RandomSource + ?Sized>(source: &mut S) -> String {
    let prefix = usize::try_from(draw_below(source, 2))
        .ok()
        .and_then(|index| MOBILE_PREFIXES.get(index).copied())
        .unwrap_or('7');
    let subscriber = draw_below(source, SUBSCRIBER_SPAN);
    format!("{COUNTRY_CODE}{prefix}{subscriber:08}")
}

/// Generates an address such as `taxpayer48213@example.com`.
///
/// `domain` defaults to [`DEFAULT_EMAIL_DOMAIN`]. Draws one value.
pub fn generate_email<S: RandomSource + ?Sized>(source: &mut S, domain: Option<&str>) -> String {
    let number = draw_below(source, EMAIL_SPAN);
    let resolved_domain = domain.unwrap_or(DEFAULT_EMAIL_DOMAIN);
    format!("taxpayer{number}@{resolved_domain}")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::rng::{Scripted, SeededRng};

    #[rstest]
    #[case(0.0, "+2547")]
    #[case(0.6, "+2541")]
    fn phone_prefix_follows_first_draw(#[case] draw: f64, #[case] expected: &str) {
        let mut source = Scripted::new(&[draw, 0.0]);
        let phone = generate_phone_number(&mut source);
        assert_eq!(phone, format!("{expected}00000000"));
        assert_eq!(source.consumed, 2);
    }

    #[test]
    fn phone_numbers_have_thirteen_characters() {
        let mut rng = SeededRng::new(77);
        for _ in 0..100 {
            let phone = generate_phone_number(&mut rng);
            assert_eq!(phone.len(), 13, "unexpected phone {phone}");
            assert!(phone.chars().skip(1).all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn email_uses_default_domain() {
        let email = generate_email(&mut SeededRng::new(1), None);
        assert!(email.starts_with("taxpayer"));
        assert!(email.ends_with("@example.com"));
    }

    #[test]
    fn email_uses_supplied_domain() {
        let email = generate_email(&mut SeededRng::new(1), Some("kra.test"));
        assert!(email.ends_with("@kra.test"));
    }

    #[test]
    fn email_is_reproducible_under_seed() {
        assert_eq!(
            generate_email(&mut SeededRng::new(9), None),
            generate_email(&mut SeededRng::new(9), None)
        );
    }
}
