//! Pattern 1: Builder
//!
//! [`CarBuilder`] is a non-consuming builder: setters take `&mut self` and
//! return `&mut Self` so calls chain, and [`CarBuilder::build`] borrows the
//! builder, so one builder can produce any number of cars while its
//! configuration evolves.
//!
//! Setters that can receive out-of-range values return
//! `Result<&mut Self>` and are chained with `?`. A rejected value is
//! reported immediately and leaves the builder exactly as it was.
//!
//! ```
//! use vehicle_patterns::{CarBuilder, Engine, Vehicle};
//!
//! # fn main() -> vehicle_patterns::Result<()> {
//! let car = CarBuilder::new()
//!     .fuel(999.0)?
//!     .wheels(3)?
//!     .engine(Engine::new("v8"))
//!     .build();
//!
//! assert_eq!(car.wheel_count(), 3);
//! assert_eq!(car.fuel_quantity(), 999.0);
//! # Ok(())
//! # }
//! ```

use tracing::{debug, warn};

use crate::config::{check_fuel_quantity, check_wheel_count, Configuration};
use crate::error::Result;
use crate::vehicle::{Car, CarKind, Engine, Vehicle};

#[derive(Debug, Clone, Default)]
#[must_use = "a builder does nothing unless you call `.build()`"]
pub struct CarBuilder {
    config: Configuration,
}

impl CarBuilder {
    pub fn new() -> Self {
        CarBuilder::default()
    }

    /// Seeds a builder from a loaded configuration, applying the same
    /// checks as the individual setters.
    pub fn from_configuration(config: Configuration) -> Result<Self> {
        let mut builder = CarBuilder::new();
        builder.wheels(config.wheel_count)?.fuel(config.fuel_quantity)?;
        if let Some(engine) = config.engine {
            builder.engine(engine);
        }
        Ok(builder)
    }

    pub fn wheels(&mut self, count: u32) -> Result<&mut Self> {
        let count =
            check_wheel_count(count).inspect_err(|err| warn!(%err, "rejected wheel count"))?;
        debug!(wheel_count = count, "set wheel count");
        self.config.wheel_count = count;
        Ok(self)
    }

    pub fn fuel(&mut self, amount: f64) -> Result<&mut Self> {
        let amount =
            check_fuel_quantity(amount).inspect_err(|err| warn!(%err, "rejected fuel quantity"))?;
        debug!(fuel_quantity = amount, "set fuel quantity");
        self.config.fuel_quantity = amount;
        Ok(self)
    }

    pub fn engine(&mut self, engine: Engine) -> &mut Self {
        debug!(engine = engine.designation(), "set engine");
        self.config.engine = Some(engine);
        self
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Snapshots the current configuration into a new car.
    pub fn build(&self) -> Car {
        Car::assemble(
            self.config.wheel_count,
            self.config.fuel_quantity,
            self.config.engine.clone(),
        )
    }

    pub fn build_as(&self, kind: CarKind) -> Box<dyn Vehicle> {
        self.build().into_kind(kind)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Update {
        Wheels(u32),
        Fuel(f64),
        Engine(String),
    }

    fn update() -> impl Strategy<Value = Update> {
        prop_oneof![
            (1u32..=32).prop_map(Update::Wheels),
            (0.0f64..10_000.0).prop_map(Update::Fuel),
            "[a-z0-9]{1,6}".prop_map(Update::Engine),
        ]
    }

    proptest! {
        #[test]
        fn last_write_wins(updates in prop::collection::vec(update(), 0..20)) {
            let mut builder = CarBuilder::new();
            let mut expected = Configuration::default();

            for update in updates {
                match update {
                    Update::Wheels(n) => {
                        builder.wheels(n).unwrap();
                        expected.wheel_count = n;
                    }
                    Update::Fuel(f) => {
                        builder.fuel(f).unwrap();
                        expected.fuel_quantity = f;
                    }
                    Update::Engine(name) => {
                        builder.engine(Engine::new(name.clone()));
                        expected.engine = Some(Engine::new(name));
                    }
                }
            }

            let car = builder.build();
            prop_assert_eq!(car.wheel_count(), expected.wheel_count);
            prop_assert_eq!(car.fuel_quantity(), expected.fuel_quantity);
            prop_assert_eq!(car.engine(), expected.engine.as_ref());
        }

        #[test]
        fn invalid_fuel_never_sticks(valid in 0.0f64..500.0, invalid in -500.0f64..-0.001) {
            let mut builder = CarBuilder::new();
            builder.fuel(valid).unwrap();
            prop_assert!(builder.fuel(invalid).is_err());
            prop_assert_eq!(builder.build().fuel_quantity(), valid);
        }
    }
}
