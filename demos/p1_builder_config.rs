//! Pattern 1: Builder
//! Example: Seeding a builder from a TOML configuration file
//!
//! Run with: cargo run --example p1_builder_config [path/to/car.toml]

use colored::Colorize;
use vehicle_patterns::logging::init_logging;
use vehicle_patterns::{CarBuilder, CarKind, Configuration, Result};

const SAMPLE: &str = r#"
wheel_count = 3
fuel_quantity = 999.0

[engine]
designation = "v8"
"#;

fn main() -> Result<()> {
    init_logging(2)?;

    let config = match std::env::args().nth(1) {
        Some(path) => {
            println!("{} {}", "Loading".green(), path);
            Configuration::from_file(path)?
        }
        None => {
            println!("{}", "No file given, using the built-in sample".dimmed());
            Configuration::from_toml_str(SAMPLE)?
        }
    };

    println!("\n{}", "=== Configuration ===".cyan());
    print!("{}", config.to_toml_string()?);

    println!("\n{}", "=== Built Vehicle ===".cyan());
    let builder = CarBuilder::from_configuration(config)?;
    let vehicle = builder.build_as(CarKind::Standard);
    println!("{:#?}", vehicle);

    println!("\n{}", "=== Invalid Configuration ===".cyan());
    let bad = Configuration::from_toml_str("wheel_count = 0")?;
    match CarBuilder::from_configuration(bad) {
        Ok(_) => println!("Unexpected success"),
        Err(e) => println!("{} {}", "Expected error:".yellow(), e),
    }

    Ok(())
}
