//! # Validation Module
//!
//! Per-field status for the two amount fields and the gate that decides
//! whether change can be computed.
//!
//! ## Field State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   raw text ──► "" ? ──yes──► Empty                                      │
//! │                 │                                                       │
//! │                 no                                                      │
//! │                 ▼                                                       │
//! │           Money::parse ──Err──► InvalidFormat                           │
//! │                 │                                                       │
//! │                 Ok                                                      │
//! │                 ▼                                                       │
//! │               Valid                                                     │
//! │                                                                         │
//! │   can_compute = due is Valid AND received is Valid                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Not a Validation Rule
//! "Received is less than due" is deliberately absent. Both fields can be
//! perfectly well formed while the customer still owes money; that shows up
//! as a negative difference on the computed result.
//!
//! ## Usage
//! ```rust
//! use change_core::validation::{classify, ValidationStatus};
//!
//! let form = classify("10.00", "7");
//! assert_eq!(form.due, ValidationStatus::Valid);
//! assert!(form.can_compute()); // short payment is still computable
//!
//! let form = classify("", "5.");
//! assert_eq!(form.due, ValidationStatus::Empty);
//! assert_eq!(form.received, ValidationStatus::InvalidFormat);
//! assert!(!form.can_compute());
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{InputError, InputResult};
use crate::money::Money;

/// Status of a single amount field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    /// Nothing entered yet.
    Empty,
    /// Something entered that is not a valid amount.
    InvalidFormat,
    /// A non-negative amount with at most two decimals.
    Valid,
}

impl ValidationStatus {
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, ValidationStatus::Valid)
    }
}

/// Validates one raw field and returns its amount.
///
/// Unlike [`Money::parse`], this tells an empty field apart from a
/// malformed one.
pub fn validate_field(raw: &str) -> InputResult<Money> {
    if raw.is_empty() {
        return Err(InputError::Empty);
    }

    Money::parse(raw)
}

/// Derives the status of one raw field.
pub fn classify_field(raw: &str) -> ValidationStatus {
    match validate_field(raw) {
        Ok(_) => ValidationStatus::Valid,
        Err(err) => err.status(),
    }
}

/// Statuses of both fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FormValidation {
    pub due: ValidationStatus,
    pub received: ValidationStatus,
}

impl FormValidation {
    /// The sole gate for running the change computation.
    ///
    /// Does not look at which amount is larger.
    #[inline]
    pub const fn can_compute(&self) -> bool {
        self.due.is_valid() && self.received.is_valid()
    }

    /// True when neither field holds any text.
    #[inline]
    pub const fn is_blank(&self) -> bool {
        matches!(self.due, ValidationStatus::Empty)
            && matches!(self.received, ValidationStatus::Empty)
    }
}

/// Classifies both fields independently.
pub fn classify(due_raw: &str, received_raw: &str) -> FormValidation {
    FormValidation {
        due: classify_field(due_raw),
        received: classify_field(received_raw),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_field() {
        assert_eq!(classify_field(""), ValidationStatus::Empty);
        assert_eq!(classify_field("12.34"), ValidationStatus::Valid);
        assert_eq!(classify_field("0"), ValidationStatus::Valid);
        assert_eq!(classify_field("12.345"), ValidationStatus::InvalidFormat);
        assert_eq!(classify_field("abc"), ValidationStatus::InvalidFormat);
        assert_eq!(classify_field("-5.00"), ValidationStatus::InvalidFormat);
        // Whitespace is text, not emptiness
        assert_eq!(classify_field(" "), ValidationStatus::InvalidFormat);
    }

    #[test]
    fn test_validate_field() {
        assert_eq!(validate_field(""), Err(InputError::Empty));
        assert_eq!(validate_field("5."), Err(InputError::InvalidFormat));
        assert_eq!(validate_field("5.5"), Ok(Money::from_cents(550)));
    }

    #[test]
    fn test_short_payment_is_computable() {
        let form = classify("10.00", "7.00");
        assert_eq!(form.received, ValidationStatus::Valid);
        assert!(form.can_compute());
    }

    #[test]
    fn test_can_compute_needs_both_fields() {
        assert!(classify("3.00", "10.00").can_compute());
        assert!(!classify("", "10.00").can_compute());
        assert!(!classify("3.00", "").can_compute());
        assert!(!classify("3.00", "ten").can_compute());
        assert!(!classify("3.000", "10").can_compute());
        assert!(!classify("", "").can_compute());
    }

    #[test]
    fn test_fields_are_independent() {
        let form = classify("abc", "");
        assert_eq!(form.due, ValidationStatus::InvalidFormat);
        assert_eq!(form.received, ValidationStatus::Empty);
    }

    #[test]
    fn test_is_blank() {
        assert!(classify("", "").is_blank());
        assert!(!classify("1", "").is_blank());
        assert!(!classify("", "x").is_blank());
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_value(classify("", "1.5.")).unwrap();
        assert_eq!(json["due"], "empty");
        assert_eq!(json["received"], "invalid_format");
    }
}
