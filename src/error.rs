use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PatternError>;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid value {value} for '{field}': {reason}")]
    InvalidConfiguration {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Unknown car type: '{0}' (expected standard, sports, minivan or super)")]
    UnknownCarType(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to write configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl PatternError {
    pub fn invalid(field: &'static str, value: impl ToString, reason: &'static str) -> Self {
        Self::InvalidConfiguration {
            field,
            value: value.to_string(),
            reason,
        }
    }

    pub fn unknown_car_type(name: impl Into<String>) -> Self {
        Self::UnknownCarType(name.into())
    }

    /// True for errors raised by a setter or smart constructor rejecting a value.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }
}
