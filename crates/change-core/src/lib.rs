//! # change-core: Pure Business Logic for the Change Register
//!
//! Validates the "amount due" and "amount received" fields and works out the
//! change owed, broken down into bills and coins.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Change Register Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front end (web view)                         │   │
//! │  │     Amount Due ──► Amount Received ──► Calculate ──► Results    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/register (session state)                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ change-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌──────────────┐  ┌────────┐  │   │
//! │  │   │   money   │  │ validation │  │ denomination │  │ change │  │   │
//! │  │   │  parse    │  │  classify  │  │    table     │  │ greedy │  │   │
//! │  │   └───────────┘  └────────────┘  └──────────────┘  └────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type and the amount parser (no floating point!)
//! - [`validation`] - Per-field status and the computation gate
//! - [`denomination`] - The fixed bill and coin table
//! - [`change`] - Difference, greedy breakdown, and the full pipeline
//! - [`error`] - Input error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Same input = same output, every time
//! 2. **Integer Money**: Text goes straight to cents (i64)
//! 3. **Short Payment Is Not an Error**: It is a negative difference
//!
//! ## Example Usage
//!
//! ```rust
//! use change_core::{evaluate, Denomination, Trigger};
//!
//! let evaluation = evaluate("2.85", "3.00", Trigger::Calculate);
//! assert!(evaluation.validation.can_compute());
//!
//! let result = evaluation.result.unwrap();
//! assert_eq!(result.difference.cents(), 15);
//!
//! let breakdown = result.breakdown.unwrap();
//! assert_eq!(breakdown.count(Denomination::Dime), 1);
//! assert_eq!(breakdown.count(Denomination::Nickel), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod change;
pub mod denomination;
pub mod error;
pub mod money;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use change::{
    compute_change, decompose, evaluate, Breakdown, ChangeResult, DenominationCount, Evaluation,
    Trigger,
};
pub use denomination::{Denomination, STANDARD_DENOMINATIONS};
pub use error::{BreakdownError, InputError, InputResult};
pub use money::Money;
pub use validation::{classify, classify_field, validate_field, FormValidation, ValidationStatus};
