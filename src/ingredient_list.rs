//! # Ingredient List Conversion
//!
//! Maps whole ingredient lists through the parse -> convert -> format
//! pipeline. Lines without a detected amount and unit are echoed back
//! verbatim, so the output list always has the same length and order as the
//! input.

use crate::ingredient_parser::parse_ingredient;
use crate::measurement_formatter::format_measurement;
use crate::measurement_types::MeasurementSystem;
use crate::unit_converter::convert_measurement;
use log::debug;

/// Convert every line of an ingredient list into the target system.
///
/// Each line is parsed, converted, and re-rendered as
/// `"<formatted measurement> <ingredient description>"`. Lines with no
/// amount, a zero amount, or no unit token pass through unchanged.
pub fn convert_ingredient_list<S: AsRef<str>>(
    ingredients: &[S],
    target_system: MeasurementSystem,
) -> Vec<String> {
    ingredients
        .iter()
        .map(|line| convert_line(line.as_ref(), target_system))
        .collect()
}

fn convert_line(line: &str, target_system: MeasurementSystem) -> String {
    let parsed = parse_ingredient(line);

    let (amount, unit) = match (parsed.amount, parsed.unit.as_deref()) {
        (Some(amount), Some(unit)) if amount != 0.0 => (amount, unit),
        _ => {
            debug!("Line '{}' has no convertible measurement", line);
            return line.to_string();
        }
    };

    let converted = convert_measurement(amount, unit, target_system);
    format!("{} {}", format_measurement(&converted), parsed.ingredient)
}
