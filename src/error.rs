//! Error types for the pension projection engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure modes of the engine. Calculation is all-or-nothing: an
//! error is never accompanied by a partial timeline.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the pension projection engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use pension_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "retirement_date".to_string(),
///     message: "must be after the simulation start date".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input 'retirement_date': must be after the simulation start date"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required input was missing or malformed.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that failed validation.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A promotion's target basic pay fell below the pay-protection minimum
    /// of 103% of the basic pay held immediately before the promotion.
    #[error(
        "Promotion effective {effective_date} violates pay protection: \
         basic {offered_basic} is below the minimum acceptable {minimum_basic}"
    )]
    PayProtectionViolation {
        /// The effective date of the offending promotion.
        effective_date: NaiveDate,
        /// The basic pay the promotion offered.
        offered_basic: Decimal,
        /// The smallest basic pay that would have been accepted.
        minimum_basic: Decimal,
    },

    /// An unexpected internal fault during calculation.
    #[error("Calculation error: {message}")]
    Calculation {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
