//! # Denominations
//!
//! The fixed table of bills and coins that change is paid out in.
//!
//! ## The Table
//! ```text
//! ┌──────────┬─────────┐
//! │ Twenty   │  2000 ¢ │
//! │ Ten      │  1000 ¢ │
//! │ Five     │   500 ¢ │
//! │ One      │   100 ¢ │
//! │ Quarter  │    25 ¢ │
//! │ Dime     │    10 ¢ │
//! │ Nickel   │     5 ¢ │
//! │ Penny    │     1 ¢ │
//! └──────────┴─────────┘
//!   strictly descending, ends at 1
//! ```
//!
//! The table is data. The greedy algorithm in [`crate::change`] walks any
//! slice that passes [`is_well_formed`], and only ever gets
//! [`STANDARD_DENOMINATIONS`] in production.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A named unit of currency with a fixed value in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Denomination {
    Twenty,
    Ten,
    Five,
    One,
    Quarter,
    Dime,
    Nickel,
    Penny,
}

/// The breakdown table, in the order change is counted out.
pub const STANDARD_DENOMINATIONS: [Denomination; 8] = [
    Denomination::Twenty,
    Denomination::Ten,
    Denomination::Five,
    Denomination::One,
    Denomination::Quarter,
    Denomination::Dime,
    Denomination::Nickel,
    Denomination::Penny,
];

impl Denomination {
    /// Value of one unit of this denomination, in cents.
    #[inline]
    pub const fn value_cents(&self) -> i64 {
        match self {
            Denomination::Twenty => 2000,
            Denomination::Ten => 1000,
            Denomination::Five => 500,
            Denomination::One => 100,
            Denomination::Quarter => 25,
            Denomination::Dime => 10,
            Denomination::Nickel => 5,
            Denomination::Penny => 1,
        }
    }

    /// Machine name, identical to the serialized form.
    pub const fn name(&self) -> &'static str {
        match self {
            Denomination::Twenty => "twenty",
            Denomination::Ten => "ten",
            Denomination::Five => "five",
            Denomination::One => "one",
            Denomination::Quarter => "quarter",
            Denomination::Dime => "dime",
            Denomination::Nickel => "nickel",
            Denomination::Penny => "penny",
        }
    }

    /// Plural label for display next to a count, e.g. "3 Quarters".
    pub const fn plural_label(&self) -> &'static str {
        match self {
            Denomination::Twenty => "Twenties",
            Denomination::Ten => "Tens",
            Denomination::Five => "Fives",
            Denomination::One => "Ones",
            Denomination::Quarter => "Quarters",
            Denomination::Dime => "Dimes",
            Denomination::Nickel => "Nickels",
            Denomination::Penny => "Pennies",
        }
    }
}

/// Checks that a table can be walked greedily to a zero remainder.
///
/// ## Rules
/// - Not empty
/// - Values strictly descending
/// - Smallest value is exactly 1 cent
pub fn is_well_formed(table: &[Denomination]) -> bool {
    let descending = table
        .windows(2)
        .all(|pair| pair[0].value_cents() > pair[1].value_cents());

    descending && table.last().map(|d| d.value_cents()) == Some(1)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_well_formed() {
        assert!(is_well_formed(&STANDARD_DENOMINATIONS));
    }

    #[test]
    fn test_standard_table_values() {
        let values: Vec<i64> = STANDARD_DENOMINATIONS
            .iter()
            .map(|d| d.value_cents())
            .collect();
        assert_eq!(values, vec![2000, 1000, 500, 100, 25, 10, 5, 1]);
    }

    #[test]
    fn test_malformed_tables() {
        assert!(!is_well_formed(&[]));
        // Not ending at a penny leaves a remainder
        assert!(!is_well_formed(&[Denomination::Five, Denomination::Nickel]));
        // Out of order
        assert!(!is_well_formed(&[Denomination::Dime, Denomination::Quarter, Denomination::Penny]));
        // Duplicates are not strictly descending
        assert!(!is_well_formed(&[Denomination::One, Denomination::One, Denomination::Penny]));
        // The smallest legal table
        assert!(is_well_formed(&[Denomination::Penny]));
    }

    #[test]
    fn test_serialized_name_matches_name() {
        for denomination in STANDARD_DENOMINATIONS {
            let json = serde_json::to_string(&denomination).unwrap();
            assert_eq!(json, format!("\"{}\"", denomination.name()));
        }
    }
}
