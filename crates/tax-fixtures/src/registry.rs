//! Fixture registry types and JSON parsing.
//!
//! The registry names reproducible fixture batches and carries the shared
//! generation settings (email domain, amount range, date window). It is
//! loaded from JSON and provides seed lookups by name.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::contact::DEFAULT_EMAIL_DOMAIN;
use crate::error::RegistryError;
use crate::values::{AmountRange, DateWindow};

/// Current supported registry version.
const SUPPORTED_VERSION: u32 = 1;

/// Named fixture seeds plus shared generation settings.
///
/// # Example
///
/// ```
/// use tax_fixtures::FixtureRegistry;
///
/// let json = r#"{
///     "version": 1,
///     "seeds": [{"name": "nairobi-batch", "seed": 42, "count": 5}]
/// }"#;
///
/// let registry = FixtureRegistry::from_json(json).expect("valid registry");
/// assert_eq!(registry.seeds().len(), 1);
/// assert_eq!(registry.email_domain(), "example.com");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureRegistry {
    version: u32,
    email_domain: String,
    amount: AmountRange,
    date_window: DateWindow,
    seeds: Vec<SeedDefinition>,
}

impl FixtureRegistry {
    /// Parses a fixture registry from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if:
    /// - The JSON is malformed
    /// - Required fields are missing
    /// - The version is unsupported
    /// - The seeds array is empty
    /// - Two seeds share a name
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawFixtureRegistry =
            serde_json::from_str(json).map_err(|e| RegistryError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a fixture registry from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let contents = fs::read_to_string(path).map_err(|e| RegistryError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawFixtureRegistry) -> Result<Self, RegistryError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if raw.seeds.is_empty() {
            return Err(RegistryError::EmptySeeds);
        }

        let mut names = HashSet::with_capacity(raw.seeds.len());
        for seed in &raw.seeds {
            if !names.insert(seed.name.as_str()) {
                return Err(RegistryError::DuplicateSeedName {
                    name: seed.name.clone(),
                });
            }
        }

        let seeds = raw
            .seeds
            .into_iter()
            .map(|s| SeedDefinition::new(s.name, s.seed, s.count))
            .collect();

        Ok(Self {
            version: raw.version,
            email_domain: raw
                .email_domain
                .unwrap_or_else(|| DEFAULT_EMAIL_DOMAIN.to_owned()),
            amount: raw.amount.unwrap_or_default(),
            date_window: raw.date_window.unwrap_or_default(),
            seeds,
        })
    }

    /// Returns the registry version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the domain used for generated email addresses.
    #[must_use]
    pub fn email_domain(&self) -> &str {
        &self.email_domain
    }

    /// Returns the range for generated payment amounts.
    #[must_use]
    pub const fn amount(&self) -> AmountRange {
        self.amount
    }

    /// Returns the window for generated payment dates.
    #[must_use]
    pub const fn date_window(&self) -> DateWindow {
        self.date_window
    }

    /// Returns all seed definitions in file order.
    #[must_use]
    pub fn seeds(&self) -> &[SeedDefinition] {
        &self.seeds
    }

    /// Returns the first seed definition, used when no name is given.
    #[must_use]
    pub fn default_seed(&self) -> Option<&SeedDefinition> {
        self.seeds.first()
    }

    /// Finds a seed definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SeedNotFound`] if no seed with the given name
    /// exists.
    pub fn find_seed(&self, name: &str) -> Result<&SeedDefinition, RegistryError> {
        self.seeds
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| RegistryError::SeedNotFound {
                name: name.to_owned(),
            })
    }
}

/// A named seed for a reproducible fixture batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDefinition {
    name: String,
    seed: u64,
    count: usize,
}

impl SeedDefinition {
    /// Creates a seed definition.
    #[must_use]
    pub const fn new(name: String, seed: u64, count: usize) -> Self {
        Self { name, seed, count }
    }

    /// Returns a copy with the fixture count replaced.
    #[must_use]
    pub fn with_count(&self, count: usize) -> Self {
        Self {
            count,
            ..self.clone()
        }
    }

    /// Returns the seed name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the RNG seed value.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of fixtures to generate.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFixtureRegistry {
    version: u32,
    #[serde(default)]
    email_domain: Option<String>,
    #[serde(default)]
    amount: Option<AmountRange>,
    #[serde(default)]
    date_window: Option<DateWindow>,
    seeds: Vec<RawSeedDefinition>,
}

/// Raw JSON representation of a seed definition.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedDefinition {
    name: String,
    seed: u64,
    count: usize,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const VALID_JSON: &str = r#"{
        "version": 1,
        "emailDomain": "kra.test",
        "amount": {"min": 1000.0, "max": 2000.0, "decimals": 2},
        "dateWindow": {"daysAgo": 7, "daysFuture": 0},
        "seeds": [
            {"name": "nairobi-batch", "seed": 2026, "count": 12},
            {"name": "mombasa-batch", "seed": 1234, "count": 5}
        ]
    }"#;

    #[test]
    fn parses_valid_registry() {
        let registry = FixtureRegistry::from_json(VALID_JSON).expect("valid registry");

        assert_eq!(registry.version(), 1);
        assert_eq!(registry.email_domain(), "kra.test");
        assert_eq!(registry.amount(), AmountRange::new(1000.0, 2000.0, 2));
        assert_eq!(registry.date_window(), DateWindow::new(7, 0));
        assert_eq!(registry.seeds().len(), 2);
    }

    #[test]
    fn optional_settings_fall_back_to_defaults() {
        let json = r#"{"version": 1, "seeds": [{"name": "a", "seed": 1, "count": 1}]}"#;
        let registry = FixtureRegistry::from_json(json).expect("valid registry");

        assert_eq!(registry.email_domain(), DEFAULT_EMAIL_DOMAIN);
        assert_eq!(registry.amount(), AmountRange::default());
        assert_eq!(registry.date_window(), DateWindow::default());
    }

    #[test]
    fn finds_seed_by_name() {
        let registry = FixtureRegistry::from_json(VALID_JSON).expect("valid registry");
        let seed = registry.find_seed("nairobi-batch").expect("seed found");

        assert_eq!(seed.name(), "nairobi-batch");
        assert_eq!(seed.seed(), 2026);
        assert_eq!(seed.count(), 12);
    }

    #[test]
    fn default_seed_is_first_in_file() {
        let registry = FixtureRegistry::from_json(VALID_JSON).expect("valid registry");
        let seed = registry.default_seed().expect("seed present");
        assert_eq!(seed.name(), "nairobi-batch");
    }

    #[test]
    fn returns_error_for_unknown_seed() {
        let registry = FixtureRegistry::from_json(VALID_JSON).expect("valid registry");
        let result = registry.find_seed("unknown");

        assert_eq!(
            result,
            Err(RegistryError::SeedNotFound {
                name: "unknown".to_owned()
            })
        );
    }

    #[rstest]
    #[case::malformed_json("not valid json")]
    #[case::missing_version(r#"{"seeds": [{"name": "a", "seed": 1, "count": 1}]}"#)]
    #[case::negative_count(r#"{"version": 1, "seeds": [{"name": "a", "seed": 1, "count": -1}]}"#)]
    #[case::negative_days(
        r#"{"version": 1, "dateWindow": {"daysAgo": -1, "daysFuture": 0}, "seeds": [{"name": "a", "seed": 1, "count": 1}]}"#
    )]
    fn rejects_json_with_parse_error(#[case] json: &str) {
        let result = FixtureRegistry::from_json(json);
        assert!(matches!(result, Err(RegistryError::ParseError { .. })));
    }

    #[rstest]
    #[case::unsupported_version(
        r#"{"version": 99, "seeds": [{"name": "a", "seed": 1, "count": 1}]}"#,
        RegistryError::UnsupportedVersion { expected: 1, actual: 99 }
    )]
    #[case::empty_seeds(r#"{"version": 1, "seeds": []}"#, RegistryError::EmptySeeds)]
    #[case::duplicate_names(
        r#"{"version": 1, "seeds": [{"name": "a", "seed": 1, "count": 1}, {"name": "a", "seed": 2, "count": 1}]}"#,
        RegistryError::DuplicateSeedName { name: "a".to_owned() }
    )]
    fn rejects_invalid_registry(#[case] json: &str, #[case] expected: RegistryError) {
        let result = FixtureRegistry::from_json(json);
        assert_eq!(result, Err(expected));
    }

    #[test]
    fn inverted_amount_bounds_are_normalised() {
        let json = r#"{"version": 1, "amount": {"min": 50.0, "max": 5.0}, "seeds": [{"name": "a", "seed": 1, "count": 1}]}"#;
        let registry = FixtureRegistry::from_json(json).expect("valid registry");
        assert_eq!(registry.amount(), AmountRange::new(5.0, 50.0, 2));
    }

    #[test]
    fn with_count_overrides_only_count() {
        let seed = SeedDefinition::new("a".to_owned(), 9, 3);
        let resized = seed.with_count(40);
        assert_eq!(resized.name(), "a");
        assert_eq!(resized.seed(), 9);
        assert_eq!(resized.count(), 40);
    }
}
