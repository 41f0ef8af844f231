//! Defines the runtime configuration for the Berlin Clock binaries.
//!
//! Settings are layered, lowest precedence first: built-in defaults, an
//! optional TOML file, then `BERLINCLOCK__*` environment variables
//! (e.g. `BERLINCLOCK__WATCH__INTERVAL_MS=500`).

use crate::time::ClockTime;
use anyhow::{ensure, Context, Result};
use chrono_tz::Tz;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const ENV_PREFIX: &str = "BERLINCLOCK";
/// Looked up in the working directory when no explicit path is given.
pub const DEFAULT_CONFIG_NAME: &str = "berlinclock";

/// The top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BerlinClockConfig {
    /// How lamps are printed to the terminal.
    pub style: OutputStyle,

    /// IANA timezone for `now` and `watch` (e.g. "Europe/Berlin").
    /// The system's local timezone is used when unset.
    pub timezone: Option<Tz>,

    /// Fallback `tracing` filter when `RUST_LOG` is not set.
    pub log_level: String,

    pub watch: WatchConfig,
}

/// Terminal rendering of the lamp symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Lamps painted in their colour.
    #[default]
    Colored,
    /// The bare `Y`/`R`/`O` symbols.
    Plain,
}

/// Settings for the live `watch` mode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Milliseconds between redraws.
    pub interval_ms: u64,
}

impl Default for BerlinClockConfig {
    fn default() -> Self {
        Self {
            style: OutputStyle::default(),
            timezone: None,
            log_level: "warn".to_string(),
            watch: WatchConfig::default(),
        }
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { interval_ms: 1000 }
    }
}

impl WatchConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl BerlinClockConfig {
    /// Loads the configuration from `path` (which must exist) or, when `None`,
    /// from `berlinclock.toml` in the working directory if there is one.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    fn load_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let config: Self = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(env_prefix)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("failed to read berlinclock configuration")?
            .try_deserialize()
            .context("invalid berlinclock configuration")?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            self.watch.interval_ms > 0,
            "watch.interval_ms must be greater than zero"
        );
        Ok(())
    }

    /// The current time in the configured timezone.
    pub fn now(&self) -> ClockTime {
        match &self.timezone {
            Some(tz) => ClockTime::now_in(tz),
            None => ClockTime::now_local(),
        }
    }
}
