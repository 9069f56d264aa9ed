//! # Money Module
//!
//! Provides the `Money` type and the parser that turns raw field text into it.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    parseFloat("3.00") - parseFloat("2.85") = 0.15000000000000036  ❌    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "3.00" → 300, "2.85" → 285, 300 - 285 = 15                           │
//! │    Text goes straight to cents. No float ever exists.                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use change_core::money::Money;
//!
//! let due = Money::parse("2.85").unwrap();
//! let received = Money::parse("3").unwrap();
//! assert_eq!((received - due).cents(), 15);
//!
//! assert!(Money::parse("12.345").is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{InputError, InputResult};

/// Number of cents in one base currency unit.
pub const CENTS_PER_UNIT: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: Parsed input is never negative, but the difference
///   between two amounts can be (the customer still owes money)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money Flows
/// ```text
/// "10.00" ──parse──► Money(1000) ─┐
///                                 ├─► received - due ──► Money(700) ──► breakdown
/// "3.00"  ──parse──► Money(300) ──┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use change_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a raw amount field into Money.
    ///
    /// ## Accepted Shape
    /// One or more ASCII digits, optionally followed by `.` and exactly one
    /// or two digits. Equivalent to `^\d+(\.\d{1,2})?$`.
    ///
    /// ```text
    ///   "12"     ✅  1200        "12.345"  ❌ too many decimals
    ///   "12.3"   ✅  1230        "5."      ❌ no digits after the point
    ///   "12.34"  ✅  1234        "-5.00"   ❌ no sign
    ///   "0.00"   ✅  0           " 5"      ❌ no whitespace
    ///   "007.1"  ✅  710         "1e3"     ❌ no exponent
    /// ```
    ///
    /// Empty input is rejected as [`InputError::InvalidFormat`]; callers that
    /// need to tell "empty" apart check for it first (see
    /// [`classify_field`](crate::validation::classify_field)).
    ///
    /// Amounts too large to fit in i64 cents are also rejected rather than
    /// clamped.
    pub fn parse(raw: &str) -> InputResult<Money> {
        let (whole, fraction) = match raw.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (raw, None),
        };

        if !is_digits(whole) {
            return Err(InputError::InvalidFormat);
        }

        let fraction_cents = match fraction {
            None => 0,
            Some(digits) if is_digits(digits) && digits.len() <= 2 => {
                let value: i64 = digits.parse().map_err(|_| InputError::InvalidFormat)?;
                // "0.1" means ten cents, not one
                if digits.len() == 1 {
                    value * 10
                } else {
                    value
                }
            }
            Some(_) => return Err(InputError::InvalidFormat),
        };

        let units: i64 = whole.parse().map_err(|_| InputError::InvalidFormat)?;

        units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|cents| cents.checked_add(fraction_cents))
            .map(Money)
            .ok_or(InputError::InvalidFormat)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use change_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / CENTS_PER_UNIT
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % CENTS_PER_UNIT).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Renders the amount as plain two-decimal text, without a currency
    /// symbol.
    ///
    /// This is the inverse of [`Money::parse`] for non-negative amounts.
    ///
    /// ## Example
    /// ```rust
    /// use change_core::money::Money;
    ///
    /// let amount = Money::from_cents(1230);
    /// assert_eq!(amount.to_amount_string(), "12.30");
    /// assert_eq!(Money::parse(&amount.to_amount_string()), Ok(amount));
    /// ```
    pub fn to_amount_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money with a dollar sign, e.g. `$10.99` or `-$5.50`.
///
/// ## Note
/// This is for debugging and logs. The register app formats display strings
/// through its configured currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl FromStr for Money {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_accepts_valid_amounts() {
        assert_eq!(Money::parse("12"), Ok(Money::from_cents(1200)));
        assert_eq!(Money::parse("12.3"), Ok(Money::from_cents(1230)));
        assert_eq!(Money::parse("12.34"), Ok(Money::from_cents(1234)));
        assert_eq!(Money::parse("0.00"), Ok(Money::from_cents(0)));
        assert_eq!(Money::parse("007.05"), Ok(Money::from_cents(705)));
    }

    #[test]
    fn test_parse_rejects_invalid_amounts() {
        for raw in [
            "12.345", "abc", "-5.00", "+5", "5.", ".5", "", " 5", "5 ", "1e3", "1,000",
            "1.2.3", "١٢", "5.-1",
        ] {
            assert_eq!(
                Money::parse(raw),
                Err(InputError::InvalidFormat),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_parse_is_exact_for_tenths() {
        // The classic float trap: 0.1 must be exactly ten cents
        assert_eq!(Money::parse("0.1").unwrap().cents(), 10);
        assert_eq!(Money::parse("0.10").unwrap().cents(), 10);
        assert_eq!(Money::parse("0.01").unwrap().cents(), 1);
        assert_eq!(Money::parse("2.85").unwrap().cents(), 285);
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let too_big = "92233720368547758.08";
        assert_eq!(Money::parse(too_big), Err(InputError::InvalidFormat));
        assert_eq!(Money::parse("99999999999999999999"), Err(InputError::InvalidFormat));

        let largest = "92233720368547758.07";
        assert_eq!(Money::parse(largest).unwrap().cents(), i64::MAX);
    }

    #[test]
    fn test_from_str() {
        let money: Money = "4.20".parse().unwrap();
        assert_eq!(money.cents(), 420);
        assert!("4.200".parse::<Money>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(-5)), "-$0.05");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_amount_string() {
        assert_eq!(Money::from_cents(1234).to_amount_string(), "12.34");
        assert_eq!(Money::from_cents(7).to_amount_string(), "0.07");
        assert_eq!(Money::from_cents(-300).to_amount_string(), "-3.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(700);

        assert_eq!((a + b).cents(), 1700);
        assert_eq!((b - a).cents(), -300);
        assert!((b - a).is_negative());
        assert_eq!((b - a).abs().cents(), 300);
        assert!((a - a).is_zero());
    }

    proptest! {
        /// Property: rendering cents as two-decimal text and parsing it back
        /// yields the same cents.
        #[test]
        fn amount_string_round_trips(cents in 0i64..100_000_000_000i64) {
            let money = Money::from_cents(cents);
            prop_assert_eq!(Money::parse(&money.to_amount_string()), Ok(money));
        }

        /// Property: one-decimal text is scaled by ten, never misrounded.
        #[test]
        fn one_decimal_text_scales_exactly(units in 0i64..1_000_000i64, tenth in 0i64..10i64) {
            let raw = format!("{units}.{tenth}");
            prop_assert_eq!(Money::parse(&raw).unwrap().cents(), units * 100 + tenth * 10);
        }
    }
}
