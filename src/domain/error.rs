//! Error types for the collection engine.
//!
//! This module defines the centralized error type [`CollectionError`] and a type
//! alias [`Result`]. Errors only arise at the edges of the crate (loading
//! configuration and item fixtures). The engine itself never fails: malformed
//! item attributes, unknown sort keys and missing status regions all degrade to
//! safe defaults instead.

use thiserror::Error;

/// The main error type for collection engine setup.
///
/// Most variants wrap underlying errors from external crates using `#[from]`
/// for automatic conversion.
///
/// # Examples
///
/// ```
/// use faceted_collection::CollectionError;
///
/// fn validate_config() -> Result<(), CollectionError> {
///     Err(CollectionError::Config("stagger_ms must be a number".to_string()))
/// }
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum CollectionError {
    /// Configuration is invalid.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, e.g. reading a
    /// configuration file or an item fixture.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A TOML configuration file could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// An item fixture could not be parsed as JSON.
    #[error("Fixture error: {0}")]
    Fixture(#[from] serde_json::Error),

    /// A command script line could not be understood.
    #[error("Script error on line {line}: {message}")]
    Script {
        /// One-based line number in the script.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },
}

/// A specialized `Result` type for collection engine setup.
pub type Result<T> = std::result::Result<T, CollectionError>;
