//! # Recipe Conversion Example
//!
//! This example demonstrates the full ingredient pipeline: seeding the
//! measurement preference from a country lookup, parsing ingredient lines,
//! and converting a recipe between metric and imperial display units.

use yummio::ingredient_list::convert_ingredient_list;
use yummio::ingredient_parser::parse_ingredient;
use yummio::locale::{system_for_country, IpApiLookup, MeasurementPreference};
use yummio::measurement_formatter::format_measurement;
use yummio::measurement_types::MeasurementSystem;
use yummio::unit_converter::convert_measurement;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    println!("🍳 Yummio Recipe Converter Example");
    println!("==================================\n");

    // Example 1: Seed the measurement preference
    println!("🌍 Example 1: Measurement Preference");
    println!("------------------------------------");

    let mut preference = MeasurementPreference::new();
    if std::env::var("YUMMIO_GEOLOCATE").is_ok() {
        preference.seed_from(&IpApiLookup::new()).await;
    } else {
        // Offline default: classify a country code directly
        preference.set_system(system_for_country("US"));
    }
    println!("Active measurement system: {}\n", preference.system());

    // Example 2: Parse individual ingredient lines
    println!("🔍 Example 2: Ingredient Parsing");
    println!("--------------------------------");

    for line in ["2 cups flour", "1 1/2 tsp vanilla", "250ml milk", "salt to taste"] {
        let parsed = parse_ingredient(line);
        println!(
            "  \"{}\" → amount={:?}, unit={:?}, ingredient=\"{}\"",
            line, parsed.amount, parsed.unit, parsed.ingredient
        );
    }
    println!();

    // Example 3: Single conversions
    println!("⚖️  Example 3: Single Conversions");
    println!("--------------------------------");

    let conversions = [
        (2.0, "oz", MeasurementSystem::Metric),
        (1.0, "cup", MeasurementSystem::Metric),
        (500.0, "ml", MeasurementSystem::Imperial),
        (350.0, "f", MeasurementSystem::Metric),
        (180.0, "c", MeasurementSystem::Imperial),
    ];

    for (amount, unit, system) in conversions {
        let converted = convert_measurement(amount, unit, system);
        println!(
            "  {} {} → {} ({})",
            amount,
            unit,
            format_measurement(&converted),
            system
        );
    }
    println!();

    // Example 4: Convert a whole recipe
    println!("📖 Example 4: Whole Recipe Conversion");
    println!("-------------------------------------");

    let recipe = [
        "2 1/4 cups all-purpose flour",
        "1 teaspoon baking soda",
        "1 cup unsalted butter",
        "3/4 cup granulated sugar",
        "2 eggs",
        "2 teaspoons vanilla extract",
        "salt to taste",
    ];

    println!("Metric:");
    for line in convert_ingredient_list(&recipe, MeasurementSystem::Metric) {
        println!("  {}", line);
    }

    println!("\nImperial:");
    for line in convert_ingredient_list(&recipe, MeasurementSystem::Imperial) {
        println!("  {}", line);
    }

    println!("\n✨ Recipe conversion examples completed!");
}
