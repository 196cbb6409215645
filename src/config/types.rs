//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use super::rates::RatesConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rates: RatesConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print estimates as JSON instead of the text report
    #[serde(default)]
    pub json: bool,
}

impl Config {
    /// Validate all sections.
    pub fn validate(&self) -> Result<(), String> {
        self.rates.validate()
    }
}
