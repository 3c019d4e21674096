//! # Measurement Types Module
//!
//! This module defines the core types flowing through the conversion pipeline:
//! the measurement system preference, a converted measurement, and the result
//! of parsing a free-text ingredient line.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The measurement system a recipe should be displayed in.
///
/// Supplied by the caller on every conversion call; the crate never reads it
/// from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Milliliters/liters, grams/kilograms, degrees Celsius
    Metric,
    /// Teaspoons/tablespoons/cups, ounces/pounds, degrees Fahrenheit
    Imperial,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasurementSystem::Metric => write!(f, "metric"),
            MeasurementSystem::Imperial => write!(f, "imperial"),
        }
    }
}

/// A quantity converted into the preferred unit of a target system.
///
/// The original value and unit are carried verbatim alongside the converted
/// pair, even when the conversion was a no-op because the unit was not
/// recognized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Converted quantity, already rounded for display
    pub value: f64,
    /// Unit chosen for the target system and magnitude (e.g., "ml", "tbsp", "°F")
    pub unit: String,
    /// The quantity exactly as supplied by the caller
    pub original_value: f64,
    /// The unit token exactly as supplied by the caller
    pub original_unit: String,
}

/// Result of parsing a single ingredient line.
///
/// `amount` and `unit` are absent when no leading quantity was detected;
/// `ingredient` is always present and trimmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// Leading quantity, if one was detected (fractions already evaluated)
    pub amount: Option<f64>,
    /// Lowercased unit token following the quantity, if one was captured
    pub unit: Option<String>,
    /// The remaining descriptive text, trimmed of surrounding whitespace
    pub ingredient: String,
}
