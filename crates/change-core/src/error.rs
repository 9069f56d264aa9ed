//! # Error Types
//!
//! Domain-specific error types for change-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  change-core errors (this file)                                        │
//! │  ├── InputError       - A field cannot be used for computation         │
//! │  └── BreakdownError   - decompose() called with bad amount or table    │
//! │                                                                         │
//! │  register app errors (apps/register)                                   │
//! │  └── ApiError         - What the front end sees (serialized)           │
//! │                                                                         │
//! │  Flow: InputError → ApiError → Front end                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Receiving less than the amount due is a valid computation. It produces a
//! negative difference on [`ChangeResult`](crate::change::ChangeResult) and
//! never surfaces here.

use thiserror::Error;

use crate::money::Money;
use crate::validation::ValidationStatus;

/// Input errors for a single amount field.
///
/// Both variants are recoverable by correcting the field; there is no fatal
/// error class in the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The field holds no text at all.
    #[error("amount is required")]
    Empty,

    /// The field holds text that is not a non-negative amount with at most
    /// two decimal places.
    #[error("enter a dollar amount like 12.34 (max 2 decimals)")]
    InvalidFormat,
}

impl InputError {
    /// Returns the validation status this error corresponds to.
    pub const fn status(&self) -> ValidationStatus {
        match self {
            InputError::Empty => ValidationStatus::Empty,
            InputError::InvalidFormat => ValidationStatus::InvalidFormat,
        }
    }
}

/// Convenience type alias for Results with InputError.
pub type InputResult<T> = Result<T, InputError>;

/// Errors from decomposing an amount over a caller-supplied table.
///
/// [`compute_change`](crate::change::compute_change) never produces these:
/// it only decomposes non-negative differences over the standard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BreakdownError {
    /// Only non-negative amounts can be handed back as bills and coins.
    #[error("cannot break down a negative amount: {0}")]
    NegativeAmount(Money),

    /// The table must be strictly descending and end with a value of 1.
    #[error("denomination table must be strictly descending and end at 1 cent")]
    MalformedTable,
}

// =============================================================================
// Unit Tests
// =============================================================================
