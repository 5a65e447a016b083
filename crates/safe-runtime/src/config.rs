//! Runtime configuration
//!
//! Driver settings come from the environment, simulator settings from an
//! optional JSON file. Both fall back to the built-in defaults.

use std::path::Path;
use std::time::Duration;

use tracing::warn;

use safe_core::{AmrConfig, DEFAULT_TICK_PERIOD};

use crate::{RuntimeError, RuntimeResult};

/// Environment variable holding the driver period, e.g. `250ms`
pub const TICK_PERIOD_ENV: &str = "AMR_TICK_PERIOD";

/// Driver configuration
#[derive(Clone, Debug, PartialEq)]
pub struct DriverConfig {
    /// Time between ticks. Zero ticks as fast as the scheduler allows.
    pub period: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            period: DEFAULT_TICK_PERIOD,
        }
    }
}

impl DriverConfig {
    pub fn with_period(period: Duration) -> Self {
        DriverConfig { period }
    }

    /// Read `AMR_TICK_PERIOD`; unset or unparsable values keep the default
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(TICK_PERIOD_ENV).ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::default();
        };
        match humantime::parse_duration(raw.trim()) {
            Ok(period) => DriverConfig { period },
            Err(e) => {
                warn!(value = raw, error = %e, "ignoring invalid {}", TICK_PERIOD_ENV);
                Self::default()
            }
        }
    }
}

/// Load and validate a simulator configuration from a JSON file
pub fn load_amr_config(path: impl AsRef<Path>) -> RuntimeResult<AmrConfig> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| RuntimeError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AmrConfig =
        serde_json::from_str(&raw).map_err(|source| RuntimeError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
    config.validate()?;
    Ok(config)
}
