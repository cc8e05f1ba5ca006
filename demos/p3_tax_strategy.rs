//! Pattern 3: Strategy & Visitor
//! Example: The same sales tax wired two different ways
//!
//! Run with: cargo run --example p3_tax_strategy

use colored::Colorize;
use vehicle_patterns::logging::init_logging;
use vehicle_patterns::pricing::strategy::{Exempt, Product, TaxStrategy};
use vehicle_patterns::pricing::visitor::PricedProduct;
use vehicle_patterns::pricing::ProductTax;
use vehicle_patterns::Result;

fn report<T: TaxStrategy>(label: &str, product: &Product<T>) {
    println!(
        "{:<10} base={:>7.2} total={:>7.2}",
        label,
        product.price(),
        product.calculate_price()
    );
}

fn main() -> Result<()> {
    init_logging(0)?;

    println!("{}", "=== Strategy: Tax Injected Into Product ===".cyan());
    report("standard", &Product::new(50.0, ProductTax::default())?);
    report("reduced", &Product::new(50.0, ProductTax::new(0.05)?)?);
    report("exempt", &Product::new(50.0, Exempt)?);

    println!("\n{}", "=== Visitor: Product Hands Itself To Tax ===".cyan());
    let tax = ProductTax::default();
    for (name, price) in [("widget", 50.0), ("gadget", 19.99)] {
        let product = PricedProduct::new(name, price)?;
        println!(
            "{:<10} total={:>7.2}",
            product.name(),
            product.calculate_price(&tax)
        );
    }

    println!("\n{}", "=== Rejected Rate ===".cyan());
    if let Err(e) = ProductTax::new(-0.2) {
        println!("{} {}", "Expected error:".yellow(), e);
    }

    Ok(())
}
