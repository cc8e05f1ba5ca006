//! Pattern 2: Factory
//!
//! Two flavours: [`CarFactory::create`] takes the parameters directly and
//! always fits a fresh engine, while the polymorphic constructors hand back
//! preset variants behind the [`Vehicle`] trait.

use tracing::info;

use crate::builder::CarBuilder;
use crate::config::{DEFAULT_FUEL_QUANTITY, DEFAULT_WHEEL_COUNT};
use crate::error::Result;
use crate::vehicle::{Car, CarKind, Engine, Vehicle};

pub const DEFAULT_CAR_TYPE: &str = "sports";

pub struct CarFactory;

impl CarFactory {
    pub fn create(wheels: u32, fuel: f64) -> Result<Car> {
        let car = CarBuilder::new()
            .wheels(wheels)?
            .fuel(fuel)?
            .engine(Engine::default())
            .build();
        info!(wheels, fuel, "factory created car");
        Ok(car)
    }

    pub fn create_default() -> Result<Car> {
        Self::create(DEFAULT_WHEEL_COUNT, DEFAULT_FUEL_QUANTITY)
    }

    pub fn create_sportscar() -> Box<dyn Vehicle> {
        Self::create_kind(CarKind::Sports)
    }

    pub fn create_minivan() -> Box<dyn Vehicle> {
        Self::create_kind(CarKind::Minivan)
    }

    pub fn create_supercar() -> Box<dyn Vehicle> {
        Self::create_kind(CarKind::Super)
    }

    pub fn create_kind(kind: CarKind) -> Box<dyn Vehicle> {
        let (fuel, engine) = preset(kind);
        // Presets are known to be in range.
        let car = Car::assemble(DEFAULT_WHEEL_COUNT, fuel, Some(Engine::new(engine)));
        info!(%kind, fuel, engine, "factory created vehicle");
        car.into_kind(kind)
    }

    /// Looks `name` up as a [`CarKind`]; `None` means [`DEFAULT_CAR_TYPE`].
    pub fn create_named(name: Option<&str>) -> Result<Box<dyn Vehicle>> {
        let kind = name.unwrap_or(DEFAULT_CAR_TYPE).parse::<CarKind>()?;
        Ok(Self::create_kind(kind))
    }
}

fn preset(kind: CarKind) -> (f64, &'static str) {
    match kind {
        CarKind::Standard => (DEFAULT_FUEL_QUANTITY, "standard"),
        CarKind::Sports => (60.0, "v8"),
        CarKind::Minivan => (80.0, "i4"),
        CarKind::Super => (90.0, "v12"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatternError;

    #[test]
    fn create_fits_an_engine() {
        let car = CarFactory::create(3, 50.0).unwrap();
        assert_eq!(car.wheel_count(), 3);
        assert_eq!(car.fuel_quantity(), 50.0);
        assert_eq!(car.engine(), Some(&Engine::default()));
    }

    #[test]
    fn create_default_matches_builder_defaults_plus_engine() {
        let car = CarFactory::create_default().unwrap();
        assert_eq!(car.wheel_count(), 4);
        assert_eq!(car.fuel_quantity(), 100.0);
        assert!(car.engine().is_some());
    }

    #[test]
    fn create_validates_inputs() {
        assert!(CarFactory::create(0, 10.0).unwrap_err().is_invalid_configuration());
        assert!(CarFactory::create(4, -1.0).unwrap_err().is_invalid_configuration());
    }

    #[test]
    fn polymorphic_presets() {
        let sports = CarFactory::create_sportscar();
        assert_eq!(sports.kind(), CarKind::Sports);
        assert_eq!(sports.fuel_quantity(), 60.0);
        assert_eq!(sports.engine().map(Engine::designation), Some("v8"));

        let minivan = CarFactory::create_minivan();
        assert_eq!(minivan.kind(), CarKind::Minivan);
        assert_eq!(minivan.fuel_quantity(), 80.0);

        let supercar = CarFactory::create_supercar();
        assert_eq!(supercar.kind(), CarKind::Super);
        assert_eq!(supercar.engine().map(Engine::designation), Some("v12"));

        for vehicle in [&sports, &minivan, &supercar] {
            assert_eq!(vehicle.wheel_count(), 4);
        }
    }

    #[test]
    fn named_defaults_to_sports() {
        assert_eq!(CarFactory::create_named(None).unwrap().kind(), CarKind::Sports);
        assert_eq!(
            CarFactory::create_named(Some("Minivan")).unwrap().kind(),
            CarKind::Minivan
        );
    }

    #[test]
    fn named_rejects_unknown_types() {
        let err = CarFactory::create_named(Some("hovercraft")).unwrap_err();
        assert!(matches!(err, PatternError::UnknownCarType(_)));
    }
}
