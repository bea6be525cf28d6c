//! CLI support for generating fixture batches from a registry.
//!
//! This module provides parsing, generation, and output helpers for the
//! fixture CLI. The binary delegates to these functions so they can be
//! exercised in tests without spawning a subprocess.

mod error;

use std::fmt;
use std::path::{Path, PathBuf};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use chrono::{DateTime, Utc};
use tracing::info;

pub use self::error::CliError;
use crate::atomic_io::write_atomic;
use crate::error::RegistryError;
use crate::generator::generate_taxpayer_fixtures;
use crate::registry::FixtureRegistry;

/// Parsed options for the fixture CLI.
#[derive(Debug, Clone)]
pub struct Options {
    registry_path: PathBuf,
    seed_name: Option<String>,
    count: Option<usize>,
    output: Option<Utf8PathBuf>,
}

impl Options {
    /// Returns the registry path supplied on the command line.
    ///
    /// # Example
    ///
    /// ```
    /// use tax_fixtures::fixture_cli::{ParseOutcome, parse_args};
    ///
    /// let args = vec!["--registry".to_string(), "fixtures.json".to_string()];
    /// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
    ///     panic!("expected options");
    /// };
    ///
    /// assert!(options.registry_path().ends_with("fixtures.json"));
    /// ```
    #[must_use]
    pub fn registry_path(&self) -> &Path {
        &self.registry_path
    }

    /// Returns the output file, if fixtures should be written to disk.
    #[must_use]
    pub fn output(&self) -> Option<&Utf8Path> {
        self.output.as_deref()
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// A generated batch ready for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Name of the seed the batch was generated from.
    pub seed_name: String,
    /// Number of fixtures in the batch.
    pub count: usize,
    /// Pretty-printed JSON array of fixtures.
    pub json: String,
}

/// Parses CLI arguments into generation options.
///
/// # Errors
///
/// Returns [`CliError`] when required flags are missing or values cannot be
/// parsed.
///
/// # Example
///
/// ```
/// use tax_fixtures::fixture_cli::{ParseOutcome, parse_args};
///
/// let args = vec![
///     "--registry".to_string(),
///     "fixtures.json".to_string(),
///     "--count".to_string(),
///     "25".to_string(),
/// ];
///
/// let outcome = parse_args(args.into_iter()).expect("parse args");
/// assert!(matches!(outcome, ParseOutcome::Options(_)));
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut registry_path: Option<PathBuf> = None;
    let mut seed_name: Option<String> = None;
    let mut count: Option<usize> = None;
    let mut output: Option<Utf8PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--registry" => {
                let value = next_value(&mut args, "--registry")?;
                registry_path = Some(PathBuf::from(value));
            }
            "--seed-name" => {
                seed_name = Some(next_value(&mut args, "--seed-name")?);
            }
            "--count" => {
                let value = next_value(&mut args, "--count")?;
                count = Some(parse_number(&value, "--count")?);
            }
            "--output" => {
                let value = next_value(&mut args, "--output")?;
                output = Some(parse_output_path(value)?);
            }
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    let resolved_registry_path = registry_path.ok_or(CliError::MissingRegistryPath)?;
    Ok(ParseOutcome::Options(Options {
        registry_path: resolved_registry_path,
        seed_name,
        count,
        output,
    }))
}

/// Loads the registry and generates the requested batch.
///
/// Uses the named seed, or the registry's first seed when none is given,
/// with the count override applied.
///
/// # Errors
///
/// Returns [`CliError`] when the registry cannot be loaded, the seed is
/// unknown, generation fails, or serialization fails.
pub fn generate(options: &Options, today: DateTime<Utc>) -> Result<Report, CliError> {
    let registry = FixtureRegistry::from_file(&options.registry_path)?;
    let seed_def = match options.seed_name.as_deref() {
        Some(name) => registry.find_seed(name)?,
        None => registry.default_seed().ok_or(RegistryError::EmptySeeds)?,
    };
    let resolved = options
        .count
        .map_or_else(|| seed_def.clone(), |count| seed_def.with_count(count));

    let fixtures = generate_taxpayer_fixtures(&registry, &resolved, today)?;
    let json = serde_json::to_string_pretty(&fixtures).map_err(|err| CliError::Serialize {
        message: err.to_string(),
    })?;

    info!(
        seed_name = resolved.name(),
        count = fixtures.len(),
        "fixture batch ready"
    );

    Ok(Report {
        seed_name: resolved.name().to_owned(),
        count: fixtures.len(),
        json,
    })
}

/// Writes a report's JSON atomically to `path`.
///
/// # Errors
///
/// Returns [`CliError::Registry`] wrapping a write error when the parent
/// directory cannot be opened or the file cannot be written.
pub fn write_output(path: &Utf8Path, report: &Report) -> Result<(), CliError> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .map(Utf8Path::new)
        .ok_or_else(|| CliError::InvalidOutputPath {
            value: path.to_string(),
        })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| {
        RegistryError::WriteError {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    })?;

    write_atomic(&dir, file_name, &report.json)?;
    Ok(())
}

/// Formats the message emitted after writing fixtures to a file.
///
/// # Example
///
/// ```
/// use camino::Utf8Path;
/// use tax_fixtures::fixture_cli::{Report, success_message};
///
/// let report = Report {
///     seed_name: "nairobi-batch".to_string(),
///     count: 12,
///     json: "[]".to_string(),
/// };
/// let message = success_message(&report, Utf8Path::new("out.json"));
///
/// assert!(message.contains("nairobi-batch"));
/// ```
#[must_use]
pub fn success_message(report: &Report, path: &Utf8Path) -> String {
    format!(
        "Wrote {} fixtures from seed \"{}\" to {}",
        report.count, report.seed_name, path
    )
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

fn parse_number<T>(value: &str, flag: &'static str) -> Result<T, CliError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| CliError::InvalidNumber {
        flag,
        value: value.to_owned(),
        message: err.to_string(),
    })
}

fn parse_output_path(value: String) -> Result<Utf8PathBuf, CliError> {
    let path = Utf8PathBuf::from(value);
    if path.file_name().is_none() {
        return Err(CliError::InvalidOutputPath {
            value: path.into_string(),
        });
    }
    Ok(path)
}
