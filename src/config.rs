use crate::error::{LResult, LocationError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default accuracy cutoff in meters; fixes at or above it are dropped
pub const DEFAULT_ACCURACY_THRESHOLD_M: f64 = 15.0;

/// Filter configuration supplied by the tracking service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterConfig {
    /// Provider identifier attached to every emitted fix and observation
    pub provider_id: i32,
    /// Fixes with accuracy at or above this radius (meters) are rejected
    pub accuracy_threshold_m: f64,
    /// Enables debug tone feedback
    pub debug: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            provider_id: 0,
            accuracy_threshold_m: DEFAULT_ACCURACY_THRESHOLD_M,
            debug: false,
        }
    }
}

impl FilterConfig {
    pub fn new(provider_id: i32) -> Self {
        Self {
            provider_id,
            ..Self::default()
        }
    }

    pub fn with_accuracy_threshold(mut self, threshold_m: f64) -> Self {
        self.accuracy_threshold_m = threshold_m;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json_str(json: &str) -> LResult<Self> {
        let config: FilterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> LResult<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded filter config from {}", path.as_ref().display());
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> LResult<()> {
        if !self.accuracy_threshold_m.is_finite() || self.accuracy_threshold_m <= 0.0 {
            return Err(LocationError::Config(format!(
                "accuracy threshold must be a positive number of meters, got {}",
                self.accuracy_threshold_m
            )));
        }
        Ok(())
    }
}
