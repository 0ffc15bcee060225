//! Error types for the Bookcase plugin.
//!
//! This module defines the centralized error type [`BookcaseError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. Only the catalog
//! loading path and configuration helpers can fail; browsing itself is infallible.

use thiserror::Error;

/// The main error type for Bookcase operations.
///
/// Most variants wrap underlying errors from external crates using `#[from]`
/// for automatic conversion with `?`.
///
/// # Examples
///
/// ```
/// use bookcase::BookcaseError;
///
/// fn validate_page_size(size: usize) -> Result<(), BookcaseError> {
///     if size == 0 {
///         return Err(BookcaseError::Catalog("page size must be at least 1".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_page_size(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum BookcaseError {
    /// The catalog document is structurally valid but violates a catalog rule.
    ///
    /// Raised for duplicate entry ids and a zero page size.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON catalog document could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A TOML catalog document could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration is invalid.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Bookcase operations.
pub type Result<T> = std::result::Result<T, BookcaseError>;
