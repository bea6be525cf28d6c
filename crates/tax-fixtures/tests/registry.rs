//! File-backed tests for the fixture registry.
//!
//! These tests validate loading registries from disk, the defaults applied
//! to omitted settings, and the errors reported for unreadable files.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]


use rstest::rstest;
use tax_fixtures::{AmountRange, DateWindow, FixtureRegistry, RegistryError};
use test_support::{unique_temp_path, write_temp_file};

const FULL_JSON: &str = r#"{
    "version": 1,
    "emailDomain": "kra.test",
    "amount": {"min": 500.0, "max": 2500.0, "decimals": 0},
    "dateWindow": {"daysAgo": 7, "daysFuture": 14},
    "seeds": [
        {"name": "nairobi-batch", "seed": 2026, "count": 12},
        {"name": "mombasa-batch", "seed": 1234, "count": 5}
    ]
}"#;

const MINIMAL_JSON: &str = r#"{
    "version": 1,
    "seeds": [{"name": "nairobi-batch", "seed": 2026, "count": 12}]
}"#;

#[test]
fn loads_registry_from_file() {
    let path = write_temp_file("registry-full", "fixtures.json", FULL_JSON).expect("temp file");

    let registry = FixtureRegistry::from_file(path.as_std_path()).expect("valid registry");

    assert_eq!(registry.version(), 1);
    assert_eq!(registry.email_domain(), "kra.test");
    assert_eq!(registry.amount(), AmountRange::new(500.0, 2500.0, 0));
    assert_eq!(registry.date_window(), DateWindow::new(7, 14));
    assert_eq!(registry.seeds().len(), 2);

    let seed = registry.find_seed("mombasa-batch").expect("seed found");
    assert_eq!(seed.seed(), 1234);
    assert_eq!(seed.count(), 5);
}

#[test]
fn applies_defaults_for_omitted_settings() {
    let path =
        write_temp_file("registry-minimal", "fixtures.json", MINIMAL_JSON).expect("temp file");

    let registry = FixtureRegistry::from_file(path.as_std_path()).expect("valid registry");

    assert_eq!(registry.email_domain(), "example.com");
    assert_eq!(registry.amount(), AmountRange::default());
    assert_eq!(registry.date_window(), DateWindow::default());
    assert_eq!(
        registry.default_seed().map(|seed| seed.name()),
        Some("nairobi-batch")
    );
}

#[test]
fn reports_io_error_for_missing_file() {
    let path = unique_temp_path("registry-missing", "absent.json").expect("temp path");

    let result = FixtureRegistry::from_file(path.as_std_path());

    match result {
        Err(RegistryError::IoError { path: reported, .. }) => {
            assert_eq!(reported, path.as_std_path());
        }
        other => panic!("Expected IoError, got: {other:?}"),
    }
}

#[rstest]
#[case::empty_seeds(r#"{"version": 1, "seeds": []}"#, RegistryError::EmptySeeds)]
#[case::unsupported_version(
    r#"{"version": 3, "seeds": [{"name": "a", "seed": 1, "count": 1}]}"#,
    RegistryError::UnsupportedVersion { expected: 1, actual: 3 }
)]
fn reports_invalid_registry_files(#[case] json: &str, #[case] expected: RegistryError) {
    let path = write_temp_file("registry-invalid", "fixtures.json", json).expect("temp file");

    let result = FixtureRegistry::from_file(path.as_std_path());

    assert_eq!(result, Err(expected));
}

#[test]
fn reports_parse_error_for_malformed_file() {
    let path = write_temp_file("registry-malformed", "fixtures.json", "{ nope").expect("temp file");

    let result = FixtureRegistry::from_file(path.as_std_path());

    assert!(matches!(result, Err(RegistryError::ParseError { .. })));
}
