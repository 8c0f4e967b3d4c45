//! Conversion configuration.

use std::path::Path;

use radial_parser::MetadataMode;
use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};
use crate::time::TimeUnits;

/// Settings for converting radial files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Name of the time dimension and variable.
    pub time_variable: String,

    /// CF units the time variable is encoded with.
    pub cf_time_units: String,

    /// Store header attributes coerced to numbers where possible.
    pub numeric_metadata: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            time_variable: "time".to_string(),
            cf_time_units: "seconds since 1970-01-01 00:00:00".to_string(),
            numeric_metadata: true,
        }
    }
}

impl IngestConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("RADIAL_TIME_VAR") {
            config.time_variable = val;
        }

        if let Ok(val) = std::env::var("RADIAL_CF_TIME_UNITS") {
            config.cf_time_units = val;
        }

        if let Ok(val) = std::env::var("RADIAL_NUMERIC_METADATA") {
            config.numeric_metadata = val.to_lowercase() == "true" || val == "1";
        }

        config
    }

    /// Load configuration from a YAML file. Missing keys take their defaults.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            IngestError::InvalidConfig(format!("{}: {}", path.as_ref().display(), e))
        })?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.time_variable.trim().is_empty() {
            return Err("time_variable must not be empty".to_string());
        }

        if !self.cf_time_units.contains(" since ") {
            return Err(format!(
                "cf_time_units must look like '<unit> since <reference>', got '{}'",
                self.cf_time_units
            ));
        }
        TimeUnits::parse(&self.cf_time_units).map_err(|e| e.to_string())?;

        Ok(())
    }

    /// Header mode for the dataset attributes.
    pub fn metadata_mode(&self) -> MetadataMode {
        MetadataMode::from_numeric_flag(self.numeric_metadata)
    }
}
