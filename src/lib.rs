//! # Yummio Core
//!
//! The non-UI core of the Yummio recipe app: parsing free-text ingredient
//! lines, converting measurements between metric and imperial, and rendering
//! them back with common culinary fractions, plus the account and locale
//! plumbing the app's screens plug into.

pub mod account;
pub mod conversion_tables;
pub mod ingredient_list;
pub mod ingredient_parser;
pub mod locale;
pub mod measurement_formatter;
pub mod measurement_patterns;
pub mod measurement_types;
pub mod unit_converter;
