//! # Change Computation
//!
//! Turns two amounts into a signed difference and, when the customer paid
//! enough, a breakdown of the change into bills and coins.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  due_raw ──────┐                                                        │
//! │                ├──► classify ──► can_compute? ──no──► result: None      │
//! │  received_raw ─┘        │              │                                │
//! │                         │             yes + Trigger::Calculate          │
//! │                         │              ▼                                │
//! │                         │        compute_change(due, received)          │
//! │                         │              │                                │
//! │                         │     difference >= 0 ──► greedy breakdown      │
//! │                         │     difference <  0 ──► no breakdown          │
//! │                         ▼              ▼                                │
//! │                       Evaluation { validation, result }                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use change_core::change::compute_change;
//! use change_core::denomination::Denomination;
//! use change_core::money::Money;
//!
//! let due = Money::parse("3.00").unwrap();
//! let received = Money::parse("10.00").unwrap();
//!
//! let result = compute_change(due, received);
//! assert_eq!(result.difference.cents(), 700);
//!
//! let breakdown = result.breakdown.unwrap();
//! assert_eq!(breakdown.count(Denomination::Five), 1);
//! assert_eq!(breakdown.count(Denomination::One), 2);
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::denomination::{is_well_formed, Denomination, STANDARD_DENOMINATIONS};
use crate::error::BreakdownError;
use crate::money::Money;
use crate::validation::{classify, FormValidation};

// =============================================================================
// Breakdown
// =============================================================================

/// How many of one denomination to hand back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DenominationCount {
    pub denomination: Denomination,
    pub count: i64,
}

/// Change split across a denomination table.
///
/// ## Invariants
/// - One entry per table denomination, in table order, zero counts included
/// - `Σ(count × value) == total`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub entries: Vec<DenominationCount>,
}

impl Breakdown {
    /// Count for one denomination (zero if the table did not include it).
    pub fn count(&self, denomination: Denomination) -> i64 {
        self.entries
            .iter()
            .find(|entry| entry.denomination == denomination)
            .map_or(0, |entry| entry.count)
    }

    /// Sum of every entry's value.
    pub fn total(&self) -> Money {
        let cents = self
            .entries
            .iter()
            .map(|entry| entry.count * entry.denomination.value_cents())
            .sum();
        Money::from_cents(cents)
    }

    /// Number of bills and coins handed over.
    pub fn piece_count(&self) -> i64 {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// Entries with a non-zero count.
    pub fn non_zero(&self) -> impl Iterator<Item = &DenominationCount> {
        self.entries.iter().filter(|entry| entry.count > 0)
    }
}

/// Greedy decomposition of a non-negative amount over a table.
///
/// ## Algorithm
/// ```text
/// remainder = amount
/// for each denomination, largest first:
///     count      = remainder / value
///     remainder -= count × value
/// ```
///
/// With a well-formed table (strictly descending, ending at 1) the
/// remainder after the last entry is always zero. For the standard table
/// the greedy answer is also the one with the fewest pieces.
///
/// ## Errors
/// - [`BreakdownError::NegativeAmount`] for an amount below zero
/// - [`BreakdownError::MalformedTable`] for a table that would leave a
///   remainder
///
/// ## Example
/// ```rust
/// use change_core::change::decompose;
/// use change_core::denomination::Denomination;
/// use change_core::money::Money;
///
/// let table = [Denomination::Quarter, Denomination::Penny];
/// let breakdown = decompose(Money::from_cents(60), &table).unwrap();
/// assert_eq!(breakdown.count(Denomination::Quarter), 2);
///
/// assert!(decompose(Money::from_cents(-1), &table).is_err());
/// ```
pub fn decompose(amount: Money, table: &[Denomination]) -> Result<Breakdown, BreakdownError> {
    if amount.is_negative() {
        return Err(BreakdownError::NegativeAmount(amount));
    }

    if !is_well_formed(table) {
        return Err(BreakdownError::MalformedTable);
    }

    Ok(greedy(amount, table))
}

/// The greedy loop itself. Callers have already checked the amount and
/// the table.
fn greedy(amount: Money, table: &[Denomination]) -> Breakdown {
    let mut remainder = amount.cents();
    let entries = table
        .iter()
        .map(|&denomination| {
            let value = denomination.value_cents();
            let count = remainder / value;
            remainder -= count * value;
            DenominationCount { denomination, count }
        })
        .collect();

    debug_assert_eq!(remainder, 0);
    Breakdown { entries }
}

// =============================================================================
// Change Result
// =============================================================================

/// The outcome of a completed computation.
///
/// ## Deficit Handling
/// When the customer paid less than the amount due, `difference` is negative
/// and `breakdown` is `None`. That is a result, not a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ChangeResult {
    /// received − due
    pub difference: Money,
    /// Present exactly when `difference >= 0`.
    pub breakdown: Option<Breakdown>,
}

impl ChangeResult {
    /// True when the customer still owes money.
    #[inline]
    pub const fn is_deficit(&self) -> bool {
        self.difference.is_negative()
    }

    /// How much more the customer owes, if anything.
    pub fn deficit(&self) -> Option<Money> {
        self.is_deficit().then(|| self.difference.abs())
    }

    /// How much change to hand back, if the customer paid enough.
    pub fn change_due(&self) -> Option<Money> {
        (!self.is_deficit()).then_some(self.difference)
    }
}

/// Computes change for already validated amounts.
///
/// ## Precondition
/// Both amounts are non-negative (guaranteed by
/// [`FormValidation::can_compute`]). Not re-checked here.
pub fn compute_change(due: Money, received: Money) -> ChangeResult {
    let difference = received - due;

    // The standard table is well formed and the branch rules out a
    // negative amount, so the unchecked loop is safe here.
    let breakdown = if difference.is_negative() {
        None
    } else {
        Some(greedy(difference, &STANDARD_DENOMINATIONS))
    };

    ChangeResult {
        difference,
        breakdown,
    }
}

// =============================================================================
// Evaluation
// =============================================================================

/// Whether the caller wants the change computed or only the field statuses.
///
/// Validation runs on every keystroke; the breakdown only when the user
/// asks for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Preview,
    Calculate,
}

/// Field statuses plus the result, if one was requested and computable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub validation: FormValidation,
    pub result: Option<ChangeResult>,
}

/// Runs the full pipeline over two raw field values.
pub fn evaluate(due_raw: &str, received_raw: &str, trigger: Trigger) -> Evaluation {
    let validation = classify(due_raw, received_raw);

    let result = if trigger == Trigger::Calculate && validation.can_compute() {
        Money::parse(due_raw)
            .ok()
            .zip(Money::parse(received_raw).ok())
            .map(|(due, received)| compute_change(due, received))
    } else {
        None
    };

    Evaluation { validation, result }
}

// =============================================================================
// Unit Tests
// =============================================================================
