//! # Unit Converter
//!
//! Converts a quantity from its source unit into the natural display unit of
//! a target measurement system. Units are classified against the conversion
//! tables in the fixed priority order volume -> weight -> temperature; a unit
//! found in no table passes through unchanged. The converted value is always
//! rounded before being packaged: one decimal for temperatures, two decimals
//! for liters/kilograms, whole numbers for milliliters/grams, and quarter
//! steps for imperial units.

use crate::conversion_tables::{
    G_PER_LB, G_PER_OZ, IMPERIAL_OZ_MAX, IMPERIAL_TBSP_MAX, IMPERIAL_TSP_MAX,
    METRIC_LARGE_THRESHOLD, METRIC_VOLUME_SMALL_MAX_ML, METRIC_VOLUME_UNITS, METRIC_WEIGHT_UNITS,
    ML_PER_CUP, ML_PER_TBSP, ML_PER_TSP, TEMPERATURE_TO_C, VOLUME_TO_ML, WEIGHT_TO_G,
};
use crate::measurement_types::{Measurement, MeasurementSystem};
use log::debug;

/// Convert `amount` of `from_unit` into the preferred unit of `to_system`.
///
/// The result always carries the untouched original value and unit alongside
/// the converted pair. Unknown units degrade to an identity passthrough
/// rather than an error.
pub fn convert_measurement(
    amount: f64,
    from_unit: &str,
    to_system: MeasurementSystem,
) -> Measurement {
    let original_value = amount;
    let original_unit = from_unit.to_string();
    let unit = from_unit.to_lowercase();

    // Category resolution follows the fixed volume -> weight -> temperature
    // priority; a spelling present in more than one table would resolve to
    // the earliest.
    if let Some(&factor) = VOLUME_TO_ML.get(unit.as_str()) {
        return convert_volume(amount * factor, to_system, original_value, original_unit);
    }

    if let Some(&factor) = WEIGHT_TO_G.get(unit.as_str()) {
        return convert_weight(amount * factor, to_system, original_value, original_unit);
    }

    if let Some(&to_celsius) = TEMPERATURE_TO_C.get(unit.as_str()) {
        return convert_temperature(to_celsius(amount), to_system, original_value, original_unit);
    }

    debug!("Unrecognized unit '{}', returning measurement unconverted", unit);

    Measurement {
        value: amount,
        unit,
        original_value,
        original_unit,
    }
}

/// Pick a metric or imperial volume unit for a milliliter magnitude.
fn convert_volume(
    ml_value: f64,
    to_system: MeasurementSystem,
    original_value: f64,
    original_unit: String,
) -> Measurement {
    match to_system {
        MeasurementSystem::Metric => {
            if ml_value >= METRIC_LARGE_THRESHOLD {
                Measurement {
                    value: round_to_2_decimals(ml_value / METRIC_LARGE_THRESHOLD),
                    unit: METRIC_VOLUME_UNITS.large.to_string(),
                    original_value,
                    original_unit,
                }
            } else {
                let band = if ml_value < METRIC_VOLUME_SMALL_MAX_ML {
                    METRIC_VOLUME_UNITS.small
                } else {
                    METRIC_VOLUME_UNITS.medium
                };
                Measurement {
                    value: ml_value.round(),
                    unit: band.to_string(),
                    original_value,
                    original_unit,
                }
            }
        }
        MeasurementSystem::Imperial => {
            let tsp_value = ml_value / ML_PER_TSP;
            let tbsp_value = ml_value / ML_PER_TBSP;
            let cup_value = ml_value / ML_PER_CUP;

            if tsp_value < IMPERIAL_TSP_MAX {
                Measurement {
                    value: round_to_quarter(tsp_value),
                    unit: "tsp".to_string(),
                    original_value,
                    original_unit,
                }
            } else if tbsp_value < IMPERIAL_TBSP_MAX {
                Measurement {
                    value: round_to_quarter(tbsp_value),
                    unit: "tbsp".to_string(),
                    original_value,
                    original_unit,
                }
            } else {
                let unit = if cup_value == 1.0 { "cup" } else { "cups" };
                Measurement {
                    value: round_to_quarter(cup_value),
                    unit: unit.to_string(),
                    original_value,
                    original_unit,
                }
            }
        }
    }
}

/// Pick a metric or imperial weight unit for a gram magnitude.
fn convert_weight(
    g_value: f64,
    to_system: MeasurementSystem,
    original_value: f64,
    original_unit: String,
) -> Measurement {
    match to_system {
        MeasurementSystem::Metric => {
            if g_value >= METRIC_LARGE_THRESHOLD {
                Measurement {
                    value: round_to_2_decimals(g_value / METRIC_LARGE_THRESHOLD),
                    unit: METRIC_WEIGHT_UNITS.large.to_string(),
                    original_value,
                    original_unit,
                }
            } else {
                Measurement {
                    value: g_value.round(),
                    unit: METRIC_WEIGHT_UNITS.small.to_string(),
                    original_value,
                    original_unit,
                }
            }
        }
        MeasurementSystem::Imperial => {
            let oz_value = g_value / G_PER_OZ;
            let lb_value = g_value / G_PER_LB;

            if oz_value < IMPERIAL_OZ_MAX {
                Measurement {
                    value: round_to_quarter(oz_value),
                    unit: "oz".to_string(),
                    original_value,
                    original_unit,
                }
            } else {
                let unit = if lb_value == 1.0 { "lb" } else { "lbs" };
                Measurement {
                    value: round_to_quarter(lb_value),
                    unit: unit.to_string(),
                    original_value,
                    original_unit,
                }
            }
        }
    }
}

/// Render a Celsius value in the target system's temperature unit.
fn convert_temperature(
    celsius: f64,
    to_system: MeasurementSystem,
    original_value: f64,
    original_unit: String,
) -> Measurement {
    match to_system {
        MeasurementSystem::Imperial => Measurement {
            value: round_to_1_decimal(celsius * 9.0 / 5.0 + 32.0),
            unit: "°F".to_string(),
            original_value,
            original_unit,
        },
        MeasurementSystem::Metric => Measurement {
            value: round_to_1_decimal(celsius),
            unit: "°C".to_string(),
            original_value,
            original_unit,
        },
    }
}

fn round_to_1_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round_to_2_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round_to_quarter(value: f64) -> f64 {
    (value * 4.0).round() / 4.0
}
