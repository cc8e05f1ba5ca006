//! Pattern 1: Builder
//! Example: Building cars with defaults, partial and full configuration
//!
//! Run with: cargo run --example p1_car_builder

use colored::Colorize;
use vehicle_patterns::logging::init_logging;
use vehicle_patterns::{CarBuilder, Engine, Result, Vehicle};

fn describe(label: &str, car: &dyn Vehicle) {
    let engine = car.engine().map(Engine::designation).unwrap_or("none");
    println!(
        "{:<14} wheels={} fuel={:.1} engine={}",
        label.bold(),
        car.wheel_count(),
        car.fuel_quantity(),
        engine
    );
}

fn main() -> Result<()> {
    init_logging(1)?;

    println!("{}", "=== Build Car With Defaults ===".cyan());
    let car = CarBuilder::new().build();
    describe("defaults", &car);

    println!("\n{}", "=== Different Fuel Quantity ===".cyan());
    let car = CarBuilder::new().fuel(999.0)?.build();
    describe("fuel", &car);

    println!("\n{}", "=== Different Wheel Count ===".cyan());
    let car = CarBuilder::new().wheels(3)?.build();
    describe("wheels", &car);

    println!("\n{}", "=== Full Car ===".cyan());
    let car = CarBuilder::new()
        .fuel(999.0)?
        .wheels(3)?
        .engine(Engine::new("v8"))
        .build();
    describe("full", &car);
    println!("as JSON: {}", serde_json::to_string(&car).unwrap_or_default());

    println!("\n{}", "=== Reusing One Builder ===".cyan());
    let mut builder = CarBuilder::new();
    builder.wheels(6)?;
    let truck = builder.build();
    builder.fuel(300.0)?;
    let tanker = builder.build();
    describe("first build", &truck);
    describe("second build", &tanker);

    println!("\n{}", "=== Rejected Values ===".cyan());
    match builder.wheels(0) {
        Ok(_) => println!("Unexpected success"),
        Err(e) => println!("{} {}", "Expected error:".yellow(), e),
    }
    if let Err(e) = builder.fuel(-5.0) {
        println!("{} {}", "Expected error:".yellow(), e);
    }
    describe("unchanged", &builder.build());

    Ok(())
}
