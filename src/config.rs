//! Screen configuration loaded from TOML.

use crate::engine::DEFAULT_DATE_FORMAT;
use crate::error::ConfigError;
use crate::models::DEFAULT_TIME_FORMAT;
use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_ENV_VAR: &str = "HMS_DOCTOR_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// chrono format for the date in the empty-state message.
    pub date_format: String,
    /// chrono format for the time column of each row.
    pub time_format: String,
    pub start_in_all_mode: bool,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        ScreenConfig {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            start_in_all_mode: false,
        }
    }
}

impl ScreenConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ScreenConfig = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        info!(config = %path.display(), "loaded screen config");
        Ok(config)
    }

    /// Reject format strings chrono cannot render.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_format("date_format", &self.date_format)?;
        check_format("time_format", &self.time_format)
    }

    /// Use the explicit path if given, then `HMS_DOCTOR_CONFIG`, then defaults.
    pub fn resolve(override_path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = override_path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        match path {
            Some(path) => Self::load(&path),
            None => {
                debug!("no screen config given; using defaults");
                Ok(Self::default())
            }
        }
    }
}

fn check_format(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if StrftimeItems::new(value).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::InvalidFormat {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
