//! Error types for the tax-fixtures crate.
//!
//! Scalar generators are total and never fail. These enums cover the
//! fallible edges: bounded uniqueness sampling and fixture registry parsing.

use std::path::PathBuf;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when loading, querying, or writing a fixture
/// registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry file could not be read.
    #[error("failed to read registry file at '{path}': {message}")]
    IoError {
        /// Path to the registry file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The registry JSON is malformed or missing required fields.
    #[error("invalid registry JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The registry version is not supported.
    #[error("unsupported registry version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the registry.
        actual: u32,
    },

    /// The registry contains no seed definitions.
    #[error("registry contains no seed definitions")]
    EmptySeeds,

    /// Two seed definitions share a name.
    #[error("seed '{name}' is defined more than once")]
    DuplicateSeedName {
        /// The repeated seed name.
        name: String,
    },

    /// The requested seed name was not found in the registry.
    #[error("seed '{name}' not found in registry")]
    SeedNotFound {
        /// The seed name that was not found.
        name: String,
    },

    /// Generated fixtures could not be written.
    #[error("failed to write fixtures to '{path}': {message}")]
    WriteError {
        /// Destination path.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}

/// Errors that can occur during bulk or batch generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Unique sampling ran out of attempts before reaching the target count.
    #[error(
        "produced {produced} of {requested} unique values within {attempts} attempts"
    )]
    UniquenessExhausted {
        /// Number of distinct values requested.
        requested: usize,
        /// Number of distinct values produced before giving up.
        produced: usize,
        /// Number of draws attempted.
        attempts: usize,
    },
}
