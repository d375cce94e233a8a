use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::processing::confidence::ConfidencePolicy;

/// Tunables for a series analysis. Every field has a default, so a config
/// file only needs to name the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Two-sided confidence level for the mean interval.
    pub confidence_level: f64,
    /// Below this many games no interval is reported.
    pub min_sample_size: usize,
    /// Below this many games the report carries a warning.
    pub low_sample_warning: usize,
    pub histogram_bins: usize,
    /// Decimal places for rounded interval bounds and probabilities.
    pub display_decimals: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            confidence_level: 0.95,
            min_sample_size: 20,
            low_sample_warning: 30,
            histogram_bins: 10,
            display_decimals: 1,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::info!("Loaded engine config from {:?}", path);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(ConfigError::Invalid(format!(
                "confidence_level must be in (0, 1), got {}",
                self.confidence_level
            )));
        }
        if self.histogram_bins == 0 {
            return Err(ConfigError::Invalid("histogram_bins must be at least 1".to_string()));
        }
        if self.display_decimals > 6 {
            return Err(ConfigError::Invalid(format!(
                "display_decimals must be at most 6, got {}",
                self.display_decimals
            )));
        }
        Ok(())
    }

    pub fn confidence_policy(&self) -> ConfidencePolicy {
        ConfidencePolicy {
            level: self.confidence_level,
            min_sample_size: self.min_sample_size,
            decimals: self.display_decimals,
        }
    }
}
