//! # Vehicle Patterns
//!
//! Classic object-oriented design patterns expressed in Rust, all around a
//! small vehicle and product domain.
//!
//! ## Patterns Covered
//!
//! 1. **Builder** ([`builder`])
//!    - Non-consuming builder with `&mut Self` chaining
//!    - Setters validate eagerly and return `Result`
//!    - Reusable: `build()` snapshots without consuming
//!    - Seeding from a TOML [`config::Configuration`]
//!
//! 2. **Factory** ([`factory`])
//!    - Parameterised construction
//!    - Polymorphic presets behind the [`Vehicle`] trait
//!
//! 3. **Strategy & Visitor** ([`pricing`])
//!    - Injected tax strategy
//!    - Tax visiting a priced product
//!
//! 4. **Observer** ([`observer`])
//!    - Subject with `Weak` observer handles
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --example p1_car_builder
//! cargo run --example p1_builder_config
//! cargo run --example p2_car_factory
//! cargo run --example p3_tax_strategy
//! cargo run --example p4_observer
//! ```
//!
//! Set `VEHICLE_PATTERNS_LOG=debug` to watch the builder at work.

pub mod builder;
pub mod config;
pub mod error;
pub mod factory;
pub mod logging;
pub mod observer;
pub mod pricing;
pub mod vehicle;

pub use builder::CarBuilder;
pub use config::Configuration;
pub use error::{PatternError, Result};
pub use factory::CarFactory;
pub use vehicle::{Car, CarKind, Engine, Minivan, Sportscar, Supercar, Vehicle};
