//! Vehicle products and the capability contract they share.
//!
//! Code that consumes vehicles depends on the [`Vehicle`] trait only; [`Car`]
//! is the standard product and [`Sportscar`], [`Minivan`] and [`Supercar`]
//! are preset variants produced by the factory.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PatternError;

/// An engine is an opaque value: it can be compared and labelled, nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Engine {
    designation: String,
}

impl Engine {
    pub fn new(designation: impl Into<String>) -> Self {
        Engine {
            designation: designation.into(),
        }
    }

    pub fn designation(&self) -> &str {
        &self.designation
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new("standard")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarKind {
    Standard,
    Sports,
    Minivan,
    Super,
}

impl CarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarKind::Standard => "standard",
            CarKind::Sports => "sports",
            CarKind::Minivan => "minivan",
            CarKind::Super => "super",
        }
    }
}

impl fmt::Display for CarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(CarKind::Standard),
            "sports" => Ok(CarKind::Sports),
            "minivan" => Ok(CarKind::Minivan),
            "super" => Ok(CarKind::Super),
            _ => Err(PatternError::unknown_car_type(s)),
        }
    }
}

/// Capability contract every product satisfies.
pub trait Vehicle: fmt::Debug {
    fn wheel_count(&self) -> u32;
    fn fuel_quantity(&self) -> f64;
    fn engine(&self) -> Option<&Engine>;
    fn kind(&self) -> CarKind;
}

/// The standard product: an immutable snapshot of a builder's configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Car {
    wheel_count: u32,
    fuel_quantity: f64,
    engine: Option<Engine>,
}

impl Car {
    // Only the builder assembles cars; it has already validated the values.
    pub(crate) fn assemble(wheel_count: u32, fuel_quantity: f64, engine: Option<Engine>) -> Self {
        Car {
            wheel_count,
            fuel_quantity,
            engine,
        }
    }

    /// Wraps this snapshot as the product variant for `kind`.
    pub fn into_kind(self, kind: CarKind) -> Box<dyn Vehicle> {
        match kind {
            CarKind::Standard => Box::new(self),
            CarKind::Sports => Box::new(Sportscar(self)),
            CarKind::Minivan => Box::new(Minivan(self)),
            CarKind::Super => Box::new(Supercar(self)),
        }
    }
}

impl Vehicle for Car {
    fn wheel_count(&self) -> u32 {
        self.wheel_count
    }

    fn fuel_quantity(&self) -> f64 {
        self.fuel_quantity
    }

    fn engine(&self) -> Option<&Engine> {
        self.engine.as_ref()
    }

    fn kind(&self) -> CarKind {
        CarKind::Standard
    }
}

// Variants share the standard car's data and only differ in what they report.
macro_rules! car_variant {
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize)]
        pub struct $name(Car);

        impl Vehicle for $name {
            fn wheel_count(&self) -> u32 {
                self.0.wheel_count
            }

            fn fuel_quantity(&self) -> f64 {
                self.0.fuel_quantity
            }

            fn engine(&self) -> Option<&Engine> {
                self.0.engine.as_ref()
            }

            fn kind(&self) -> CarKind {
                $kind
            }
        }
    };
}

car_variant!(
    /// Light, small tank, big engine.
    Sportscar => CarKind::Sports
);
car_variant!(Minivan => CarKind::Minivan);
car_variant!(Supercar => CarKind::Super);
