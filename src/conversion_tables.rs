//! # Conversion Tables Module
//!
//! Static conversion tables used by the unit converter: factors into the
//! metric base units (milliliters and grams), temperature conversions into
//! Celsius, and the magnitude thresholds that pick a display unit for each
//! system. All tables are fixed at process start and never mutated; lookup
//! keys are lowercased before table access.

use std::collections::HashMap;
use std::sync::LazyLock;

// Milliliters per imperial volume unit
pub const ML_PER_TSP: f64 = 4.929;
pub const ML_PER_TBSP: f64 = 14.787;
pub const ML_PER_CUP: f64 = 236.588;
pub const ML_PER_FL_OZ: f64 = 29.574;
pub const ML_PER_PINT: f64 = 473.176;
pub const ML_PER_QUART: f64 = 946.353;
pub const ML_PER_GALLON: f64 = 3785.41;
pub const ML_PER_LITER: f64 = 1000.0;

// Grams per weight unit
pub const G_PER_OZ: f64 = 28.3495;
pub const G_PER_LB: f64 = 453.592;
pub const G_PER_KG: f64 = 1000.0;

/// Base-unit magnitude at which metric output switches to liters/kilograms.
pub const METRIC_LARGE_THRESHOLD: f64 = 1000.0;

/// Milliliter magnitude separating the small and medium metric volume bands.
pub const METRIC_VOLUME_SMALL_MAX_ML: f64 = 100.0;

/// Teaspoon count below which imperial volume renders as teaspoons.
pub const IMPERIAL_TSP_MAX: f64 = 3.0;

/// Tablespoon count below which imperial volume renders as tablespoons.
pub const IMPERIAL_TBSP_MAX: f64 = 16.0;

/// Ounce count below which imperial weight renders as ounces.
pub const IMPERIAL_OZ_MAX: f64 = 16.0;

/// Preferred metric volume units by magnitude band. The small and medium
/// bands both map to "ml"; the distinction is kept because the converter
/// selects by band.
pub struct VolumeUnitBands {
    pub small: &'static str,
    pub medium: &'static str,
    pub large: &'static str,
}

pub const METRIC_VOLUME_UNITS: VolumeUnitBands = VolumeUnitBands {
    small: "ml",
    medium: "ml",
    large: "l",
};

/// Preferred metric weight units by magnitude band.
pub struct WeightUnitBands {
    pub small: &'static str,
    pub large: &'static str,
}

pub const METRIC_WEIGHT_UNITS: WeightUnitBands = WeightUnitBands {
    small: "g",
    large: "kg",
};

/// Volume-unit spellings and their milliliter factors. Singular and plural
/// spellings are distinct keys mapping to identical factors.
pub static VOLUME_TO_ML: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    map.insert("ml", 1.0);
    map.insert("l", ML_PER_LITER);
    map.insert("cup", ML_PER_CUP);
    map.insert("cups", ML_PER_CUP);
    map.insert("tbsp", ML_PER_TBSP);
    map.insert("tablespoon", ML_PER_TBSP);
    map.insert("tablespoons", ML_PER_TBSP);
    map.insert("tsp", ML_PER_TSP);
    map.insert("teaspoon", ML_PER_TSP);
    map.insert("teaspoons", ML_PER_TSP);
    map.insert("fl oz", ML_PER_FL_OZ);
    map.insert("fluid ounce", ML_PER_FL_OZ);
    map.insert("fluid ounces", ML_PER_FL_OZ);
    map.insert("pint", ML_PER_PINT);
    map.insert("pints", ML_PER_PINT);
    map.insert("quart", ML_PER_QUART);
    map.insert("quarts", ML_PER_QUART);
    map.insert("gallon", ML_PER_GALLON);
    map.insert("gallons", ML_PER_GALLON);

    map
});

/// Weight-unit spellings and their gram factors.
pub static WEIGHT_TO_G: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    map.insert("g", 1.0);
    map.insert("gram", 1.0);
    map.insert("grams", 1.0);
    map.insert("kg", G_PER_KG);
    map.insert("kilogram", G_PER_KG);
    map.insert("kilograms", G_PER_KG);
    map.insert("oz", G_PER_OZ);
    map.insert("ounce", G_PER_OZ);
    map.insert("ounces", G_PER_OZ);
    map.insert("lb", G_PER_LB);
    map.insert("pound", G_PER_LB);
    map.insert("pounds", G_PER_LB);

    map
});

fn celsius_identity(temp: f64) -> f64 {
    temp
}

fn fahrenheit_to_celsius(temp: f64) -> f64 {
    (temp - 32.0) * 5.0 / 9.0
}

/// Temperature-unit spellings and their Celsius-converting functions.
pub static TEMPERATURE_TO_C: LazyLock<HashMap<&'static str, fn(f64) -> f64>> =
    LazyLock::new(|| {
        let mut map: HashMap<&'static str, fn(f64) -> f64> = HashMap::new();

        map.insert("c", celsius_identity);
        map.insert("celsius", celsius_identity);
        map.insert("f", fahrenheit_to_celsius);
        map.insert("fahrenheit", fahrenheit_to_celsius);

        map
    });
