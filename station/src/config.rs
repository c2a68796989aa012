//! Station configuration, loaded from a TOML file.
//!
//! A missing file is not an error: every key has a default matching the
//! appliance's factory settings. The provider key may also come from the
//! `OWM_API_KEY` environment variable, which wins over the file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use weather_reporter_common::config::{LOOP_DELAY_MS, LoopTiming, PAGE_SWITCH_INTERVAL_MS};

/// Config file used when neither argv nor the environment name one.
pub const DEFAULT_CONFIG_FILE: &str = "weather-reporter.toml";

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "WEATHER_REPORTER_CONFIG";

/// Environment variable overriding `api_key`.
pub const API_KEY_ENV: &str = "OWM_API_KEY";

const MAX_UTC_OFFSET_SECS: i32 = 18 * 3600;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StationConfig {
    /// Forecast location, decimal degrees.
    pub latitude: f64,
    pub longitude: f64,
    /// Shown in the header.
    pub location_name: String,
    /// One Call API key.
    pub api_key: String,
    /// Local time zone as a fixed offset east of UTC.
    pub utc_offset_secs: i32,
    pub update_interval_secs: u64,
    pub http_timeout_secs: u64,
    /// Start with autoplay enabled.
    pub auto_advance: bool,
    pub page_switch_ms: u64,
    pub loop_delay_ms: u64,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            latitude: -26.7984,
            longitude: 153.1394,
            location_name: "Caloundra, QLD".to_string(),
            api_key: String::new(),
            utc_offset_secs: 10 * 3600,
            update_interval_secs: 300,
            http_timeout_secs: 10,
            auto_advance: false,
            page_switch_ms: PAGE_SWITCH_INTERVAL_MS,
            loop_delay_ms: LOOP_DELAY_MS,
        }
    }
}

impl StationConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(
        text: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path`, falling back to defaults if it does not exist, then
    /// apply the environment override for the API key.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Self::from_toml(&text, path)?
        } else {
            tracing::info!("no config file at {}, using defaults", path.display());
            Self::default()
        };

        if let Ok(key) = std::env::var(API_KEY_ENV)
            && !key.is_empty()
        {
            config.api_key = key;
        }
        Ok(config)
    }

    /// Config path from the first CLI argument, else `WEATHER_REPORTER_CONFIG`,
    /// else [`DEFAULT_CONFIG_FILE`].
    pub fn resolve_path(arg: Option<String>) -> PathBuf {
        arg.or_else(|| std::env::var(CONFIG_ENV).ok())
            .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ConfigError::Invalid(format!("latitude {} out of range", self.latitude)));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ConfigError::Invalid(format!("longitude {} out of range", self.longitude)));
        }
        if self.utc_offset_secs.abs() > MAX_UTC_OFFSET_SECS {
            return Err(ConfigError::Invalid(format!(
                "utc_offset_secs {} exceeds ±18 h",
                self.utc_offset_secs
            )));
        }
        if self.update_interval_secs.checked_mul(1000).is_none() {
            return Err(ConfigError::Invalid(format!(
                "update_interval_secs {} is too large",
                self.update_interval_secs
            )));
        }
        for (name, value) in [
            ("update_interval_secs", self.update_interval_secs),
            ("http_timeout_secs", self.http_timeout_secs),
            ("page_switch_ms", self.page_switch_ms),
            ("loop_delay_ms", self.loop_delay_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("{name} must be non-zero")));
            }
        }
        Ok(())
    }

    /// Loop periods for the controller.
    pub fn loop_timing(&self) -> LoopTiming {
        LoopTiming {
            update_interval_ms: self.update_interval_secs * 1000,
            page_switch_interval_ms: self.page_switch_ms,
            ..LoopTiming::new()
        }
    }

    #[inline]
    pub fn http_timeout(&self) -> Duration { Duration::from_secs(self.http_timeout_secs) }

    #[inline]
    pub fn loop_delay(&self) -> Duration { Duration::from_millis(self.loop_delay_ms) }
}
