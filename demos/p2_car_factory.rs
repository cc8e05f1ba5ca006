//! Pattern 2: Factory
//! Example: Parameterised and polymorphic car factories
//!
//! Run with: cargo run --example p2_car_factory [sports|minivan|super|standard]

use colored::Colorize;
use vehicle_patterns::logging::init_logging;
use vehicle_patterns::{CarFactory, Result, Vehicle};

fn main() -> Result<()> {
    init_logging(1)?;

    println!("{}", "=== Parameterised Factory ===".cyan());
    let standard = CarFactory::create_default()?;
    println!("default: {:?}", standard);
    let trike = CarFactory::create(3, 40.0)?;
    println!("trike:   {:?}", trike);

    println!("\n{}", "=== Polymorphic Factory ===".cyan());
    let fleet: Vec<Box<dyn Vehicle>> = vec![
        CarFactory::create_sportscar(),
        CarFactory::create_minivan(),
        CarFactory::create_supercar(),
    ];
    for vehicle in &fleet {
        println!(
            "{:<8} fuel={:>5.1} engine={}",
            vehicle.kind().as_str().bold(),
            vehicle.fuel_quantity(),
            vehicle.engine().map(|e| e.designation()).unwrap_or("none")
        );
    }

    println!("\n{}", "=== By Name ===".cyan());
    let requested = std::env::args().nth(1);
    let vehicle = CarFactory::create_named(requested.as_deref())?;
    println!("created a {} car", vehicle.kind());

    match CarFactory::create_named(Some("hovercraft")) {
        Ok(_) => println!("Unexpected success"),
        Err(e) => println!("{} {}", "Expected error:".yellow(), e),
    }

    Ok(())
}
