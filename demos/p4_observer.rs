//! Pattern 4: Observer
//! Example: A gossiper notifying its fans
//!
//! Run with: cargo run --example p4_observer

use std::rc::Rc;

use colored::Colorize;
use vehicle_patterns::logging::init_logging;
use vehicle_patterns::observer::{GossipFan, Observer, Subject};
use vehicle_patterns::Result;

fn main() -> Result<()> {
    init_logging(2)?;

    println!("{}", "=== Gossiper With One Fan ===".cyan());
    let fan = Rc::new(GossipFan::new("gossip fan"));
    let handle: Rc<dyn Observer> = fan.clone();
    let mut gossiper = Subject::with_observer(&handle);

    gossiper.notify();
    gossiper.notify();
    println!("{} heard: {:?}", fan.name().bold(), fan.heard());

    println!("\n{}", "=== New Favorites ===".cyan());
    gossiper.update_favorites("New season announced");
    println!("{} heard: {:?}", fan.name().bold(), fan.heard());

    println!("\n{}", "=== Fan Leaves ===".cyan());
    drop(handle);
    drop(fan);
    gossiper.update_favorites("Nobody is listening");
    println!("observers left: {}", gossiper.observer_count());

    Ok(())
}
