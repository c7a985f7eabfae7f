//! Error types for dishboard.
//!
//! This module defines the centralized error type [`DishboardError`] and a type alias
//! [`Result`] for convenient error handling. Errors only arise at the I/O edges of the
//! crate (fixture files, theme files, configuration); the filter and aggregate engine
//! itself is infallible and degrades to empty views or zero counts instead.

use thiserror::Error;

/// The main error type for dishboard operations.
///
/// Most variants wrap underlying errors from external crates using `#[from]` for
/// automatic conversion.
///
/// # Examples
///
/// ```
/// use dishboard::DishboardError;
///
/// fn check_fixture() -> Result<(), DishboardError> {
///     Err(DishboardError::Fixture("duplicate staff id 3".to_string()))
/// }
///
/// assert!(check_fixture().is_err());
/// ```
#[derive(Debug, Error)]
pub enum DishboardError {
    /// Fixture data is structurally valid JSON but violates a collection invariant.
    ///
    /// Raised by fixture validation for duplicate ids or a table whose occupancy
    /// exceeds its capacity.
    #[error("Fixture error: {0}")]
    Fixture(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Fixture JSON could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    ///
    /// The string describes the specific configuration problem, such as an
    /// argument without `=` or an unknown option key.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for dishboard operations.
pub type Result<T> = std::result::Result<T, DishboardError>;
