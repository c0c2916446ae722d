//! Error types for the working-time engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for everything that can go wrong at the edges of the engine: validating
//! freshly entered time text, loading configuration, and touching the roster
//! or the week store. Computation over already stored day entries never fails.

use thiserror::Error;

/// The main error type for the working-time engine.
///
/// # Example
///
/// ```
/// use worktime_engine::error::EngineError;
///
/// let error = EngineError::InvalidTimeFormat {
///     text: "8.30".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid time format: '8.30' (expected HH:MM, e.g. 08:30)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Time text entered by a user did not match the `HH:MM` shape.
    #[error("Invalid time format: '{text}' (expected HH:MM, e.g. 08:30)")]
    InvalidTimeFormat {
        /// The offending text, as entered.
        text: String,
    },

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

    /// No employee with the given id is on the roster.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The (year, week) pair is not an ISO calendar week.
    #[error("Invalid ISO week: {year}-{week:02}")]
    InvalidWeek {
        /// The ISO year.
        year: i32,
        /// The ISO week number.
        week: u32,
    },

    /// Week key text was not of the form `YYYY-WW`.
    #[error("Invalid week key: '{text}' (expected YYYY-WW, e.g. 2026-03)")]
    InvalidWeekKey {
        /// The offending text, as given.
        text: String,
    },

    /// A minute count lies outside the range the ledger accepts.
    #[error("Value out of range for '{field}': {value}")]
    ValueOutOfRange {
        /// The field holding the value.
        field: String,
        /// The rejected value.
        value: i64,
    },

    /// The persisted ledger could not be read or written.
    #[error("Storage error at '{path}': {message}")]
    StorageError {
        /// The file involved.
        path: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
