//! The builder's configuration, and loading it from TOML.
//!
//! ```toml
//! wheel_count = 3
//! fuel_quantity = 999.0
//!
//! [engine]
//! designation = "v8"
//! ```
//!
//! Every key is optional. Values read from a file are plain data; they are
//! only checked when handed to [`CarBuilder::from_configuration`].
//!
//! [`CarBuilder::from_configuration`]: crate::builder::CarBuilder::from_configuration

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PatternError, Result};
use crate::vehicle::Engine;

pub const DEFAULT_WHEEL_COUNT: u32 = 4;
pub const DEFAULT_FUEL_QUANTITY: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    pub wheel_count: u32,
    pub fuel_quantity: f64,
    pub engine: Option<Engine>,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            wheel_count: DEFAULT_WHEEL_COUNT,
            fuel_quantity: DEFAULT_FUEL_QUANTITY,
            engine: None,
        }
    }
}

impl Configuration {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PatternError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded vehicle configuration");
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

pub(crate) fn check_wheel_count(count: u32) -> Result<u32> {
    if count == 0 {
        return Err(PatternError::invalid("wheel_count", count, "must be greater than 0"));
    }
    Ok(count)
}

pub(crate) fn check_fuel_quantity(amount: f64) -> Result<f64> {
    if !amount.is_finite() {
        return Err(PatternError::invalid("fuel_quantity", amount, "must be a finite number"));
    }
    if amount < 0.0 {
        return Err(PatternError::invalid("fuel_quantity", amount, "must not be negative"));
    }
    // Folds -0.0 into 0.0.
    Ok(amount + 0.0)
}
