//! Error types for the formshell plugin.
//!
//! This module defines the centralized error type [`FormShellError`] and a type
//! alias [`Result`] used by the ambient layers (form loading and
//! palettes). Shell operations themselves never fail.

use thiserror::Error;

/// The main error type for formshell operations.
///
/// Most variants carry a description string; I/O failures wrap the standard
/// library error through `#[from]`.
///
/// # Examples
///
/// ```
/// use formshell::FormShellError;
///
/// fn load() -> Result<(), FormShellError> {
///     Err(FormShellError::FormConfig("form has no fields".to_string()))
/// }
///
/// assert!(load().unwrap_err().to_string().contains("no fields"));
/// ```
#[derive(Debug, Error)]
pub enum FormShellError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A form definition could not be parsed or is structurally invalid.
    ///
    /// Raised by the builder's file source for syntax errors, duplicate field
    /// names and empty forms.
    #[error("Form definition error: {0}")]
    FormConfig(String),

    /// A theme palette failed to parse.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for formshell operations.
pub type Result<T> = std::result::Result<T, FormShellError>;
