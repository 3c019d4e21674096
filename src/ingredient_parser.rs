//! # Ingredient Parser
//!
//! This module extracts a numeric quantity, a unit token, and the remaining
//! ingredient description from a free-text line such as "2 cups flour",
//! "1/2 tsp salt", or "250ml milk".
//!
//! Two patterns are tried in order: amount + mandatory unit + description,
//! then amount + optional unit + description. The first pattern matching the
//! full line wins. Parsing never fails; a line with no leading amount comes
//! back as a bare trimmed description.
//!
//! ## Usage
//!
//! ```rust
//! use yummio::ingredient_parser::parse_ingredient;
//!
//! let parsed = parse_ingredient("1 1/2 cups flour");
//! assert_eq!(parsed.amount, Some(1.5));
//! assert_eq!(parsed.unit.as_deref(), Some("cups"));
//! assert_eq!(parsed.ingredient, "flour");
//! ```

use crate::measurement_patterns::{AMOUNT_MAYBE_UNIT, AMOUNT_WITH_UNIT};
use crate::measurement_types::ParsedIngredient;
use log::{debug, trace};

/// Parse a single ingredient line into amount, unit, and description.
///
/// The unit token, when captured, is lowercased. Fraction amounts ("1/2") and
/// mixed numbers ("1 1/2") are evaluated to their decimal value. When neither
/// pattern matches, the whole line becomes the trimmed `ingredient` with no
/// numeric fields.
pub fn parse_ingredient(text: &str) -> ParsedIngredient {
    for pattern in [&*AMOUNT_WITH_UNIT, &*AMOUNT_MAYBE_UNIT] {
        if let Some(captures) = pattern.captures(text) {
            let amount = parse_amount(&captures[1]);
            let unit = captures.get(2).map(|m| m.as_str().to_lowercase());
            let ingredient = captures[3].trim().to_string();

            trace!(
                "Parsed '{}' -> amount={}, unit={:?}, ingredient='{}'",
                text,
                amount,
                unit,
                ingredient
            );

            return ParsedIngredient {
                amount: Some(amount),
                unit,
                ingredient,
            };
        }
    }

    debug!("No quantity detected in '{}', passing through as description", text);

    ParsedIngredient {
        amount: None,
        unit: None,
        ingredient: text.trim().to_string(),
    }
}

/// Evaluate an amount token captured by the line patterns.
///
/// Accepts "2", "0.5", "1/2", and "1 1/2". Mixed numbers add the whole part
/// to the fraction; fractions divide numerator by denominator.
fn parse_amount(raw: &str) -> f64 {
    if raw.contains('/') {
        if let Some((whole, fraction)) = raw.split_once(' ') {
            // Mixed number like "1 1/2"
            return parse_number(whole) + parse_fraction(fraction);
        }
        return parse_fraction(raw);
    }

    parse_number(raw)
}

fn parse_fraction(raw: &str) -> f64 {
    match raw.split_once('/') {
        Some((numerator, denominator)) => parse_number(numerator) / parse_number(denominator),
        None => parse_number(raw),
    }
}

fn parse_number(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}
