//! Subscriber setup for the demos. The library itself only emits `tracing`
//! events; nothing is printed unless a binary installs a subscriber.

use tracing_subscriber::EnvFilter;

use crate::error::{PatternError, Result};

/// Overrides the verbosity-derived filter, e.g. `vehicle_patterns=trace`.
pub const LOG_ENV_VAR: &str = "VEHICLE_PATTERNS_LOG";

pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn env_filter(verbosity: u8) -> Result<EnvFilter> {
    match std::env::var(LOG_ENV_VAR) {
        Ok(directives) => EnvFilter::try_new(&directives).map_err(|err| {
            PatternError::Logging(format!("bad {LOG_ENV_VAR} value '{directives}': {err}"))
        }),
        Err(_) => Ok(EnvFilter::new(level_for_verbosity(verbosity))),
    }
}

/// Installs a compact stderr subscriber as the global default.
pub fn init_logging(verbosity: u8) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity)?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| PatternError::Logging(format!("Failed to initialize logging: {err}")))
}
