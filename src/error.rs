//! Error types for the portal engines.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all fallible operations: configuration loading, spreadsheet import,
//! snapshot persistence, and payroll calculation. The pagination and
//! classification engines are pure and clamp malformed input instead of
//! returning errors.

use thiserror::Error;

/// The main error type for the portal engines.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use portal_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/attendance.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/attendance.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A bulk attendance import was structurally invalid and aborted.
    ///
    /// Imports are all-or-nothing: when this error is returned, no records
    /// were created or deleted.
    #[error("Attendance import rejected: {message}")]
    ImportRejected {
        /// A description of what made the sheet unusable.
        message: String,
    },

    /// The snapshot store failed to read or write a file.
    #[error("Store operation failed for '{path}': {message}")]
    StoreError {
        /// The file or directory involved.
        path: String,
        /// A description of the failure.
        message: String,
    },

    /// A payroll calculation received inconsistent inputs.
    #[error("Payroll calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
