//! Error types for the Payroll Computation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation functions themselves are total and never fail on numeric
//! input; errors arise only when validating the inputs a caller submits
//! (employee record, pay-head entries) before a calculation is run.

use thiserror::Error;

/// The main error type for the Payroll Computation Engine.
///
/// All validation in the engine returns this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidEmployee {
///     field: "id".to_string(),
///     message: "must not be empty".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid employee field 'id': must not be empty");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A pay-head entry was invalid or contained inconsistent data.
    #[error("Invalid pay head '{name}': {message}")]
    InvalidPayHead {
        /// The name of the invalid pay head.
        name: String,
        /// A description of what made the entry invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
