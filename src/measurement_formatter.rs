//! # Measurement Formatter
//!
//! Renders a converted measurement back to a display string. Imperial
//! volume/weight values are shown as common culinary fractions where the
//! quarter-rounded value has a table entry ("1/2 cup", "1 3/4 tsp");
//! everything else falls back to a decimal rendering with up to two places
//! and trailing zeros stripped.

use crate::measurement_types::Measurement;

/// Units whose values are rendered as culinary fractions when possible.
pub const FRACTION_UNITS: [&str; 7] = ["tsp", "tbsp", "cup", "cups", "oz", "lb", "lbs"];

/// Decimal-to-fraction display table. Lookups happen after rounding to the
/// nearest quarter, so the thirds entries are never selected in practice.
const COMMON_FRACTIONS: [(f64, &str); 15] = [
    (0.25, "1/4"),
    (0.33, "1/3"),
    (0.5, "1/2"),
    (0.67, "2/3"),
    (0.75, "3/4"),
    (1.25, "1 1/4"),
    (1.33, "1 1/3"),
    (1.5, "1 1/2"),
    (1.67, "1 2/3"),
    (1.75, "1 3/4"),
    (2.25, "2 1/4"),
    (2.33, "2 1/3"),
    (2.5, "2 1/2"),
    (2.67, "2 2/3"),
    (2.75, "2 3/4"),
];

/// Render a measurement as `"<value> <unit>"`.
///
/// Never fails and never produces an empty string.
pub fn format_measurement(measurement: &Measurement) -> String {
    let Measurement { value, unit, .. } = measurement;

    if FRACTION_UNITS.contains(&unit.as_str()) {
        if let Some(fraction) = to_common_fraction(*value) {
            return format!("{} {}", fraction, unit);
        }
    }

    format!("{} {}", format_decimal(*value), unit)
}

/// Look up the common-fraction rendering of a value, rounding it to the
/// nearest quarter first. Whole numbers and values whose quarter-rounded
/// form has no table entry return `None` and are rendered as decimals.
fn to_common_fraction(value: f64) -> Option<&'static str> {
    if value.fract() == 0.0 {
        return None;
    }

    let rounded = (value * 4.0).round() / 4.0;

    COMMON_FRACTIONS
        .iter()
        .find(|(decimal, _)| *decimal == rounded)
        .map(|(_, fraction)| *fraction)
}

/// Render a value with up to two decimal places, stripping trailing zeros
/// and a bare trailing point.
fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{}", value);
    }

    format!("{:.2}", value)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
