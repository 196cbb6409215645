//! Reading rate configuration.
//!
//! Pure data container (serde struct + validation) consumed by the
//! estimator, so it lives in the config module.

use serde::{Deserialize, Serialize};

/// Upper bound for either words-per-minute value.
pub const MAX_WORDS_PER_MINUTE: u32 = 10_000;

/// Upper bound for the per-image viewing cost.
pub const MAX_SECONDS_PER_IMAGE: u32 = 3_600;

/// Reading speeds used to turn word and image counts into time.
///
/// ```toml
/// [rates]
/// regular_words_per_minute = 200
/// code_words_per_minute = 100
/// seconds_per_image = 12
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatesConfig {
    /// Reading speed for prose
    #[serde(default = "default_regular_words_per_minute")]
    pub regular_words_per_minute: u32,
    /// Reading speed for fenced code (slower than prose)
    #[serde(default = "default_code_words_per_minute")]
    pub code_words_per_minute: u32,
    /// Fixed viewing cost per image
    #[serde(default = "default_seconds_per_image")]
    pub seconds_per_image: u32,
}

pub fn default_regular_words_per_minute() -> u32 {
    200
}

pub fn default_code_words_per_minute() -> u32 {
    100
}

pub fn default_seconds_per_image() -> u32 {
    12
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            regular_words_per_minute: default_regular_words_per_minute(),
            code_words_per_minute: default_code_words_per_minute(),
            seconds_per_image: default_seconds_per_image(),
        }
    }
}

impl RatesConfig {
    /// Validate configuration values.
    ///
    /// Returns `Ok(())` if all values are within acceptable bounds,
    /// or an error describing the first invalid value found.
    pub fn validate(&self) -> Result<(), String> {
        check_words_per_minute("regular_words_per_minute", self.regular_words_per_minute)?;
        check_words_per_minute("code_words_per_minute", self.code_words_per_minute)?;
        if self.seconds_per_image > MAX_SECONDS_PER_IMAGE {
            return Err(format!(
                "rates.seconds_per_image {} exceeds maximum ({}s)",
                self.seconds_per_image, MAX_SECONDS_PER_IMAGE
            ));
        }
        Ok(())
    }

    /// Apply per-run overrides on top of these rates.
    pub fn with_overrides(
        mut self,
        regular_words_per_minute: Option<u32>,
        code_words_per_minute: Option<u32>,
        seconds_per_image: Option<u32>,
    ) -> Self {
        if let Some(wpm) = regular_words_per_minute {
            self.regular_words_per_minute = wpm;
        }
        if let Some(wpm) = code_words_per_minute {
            self.code_words_per_minute = wpm;
        }
        if let Some(secs) = seconds_per_image {
            self.seconds_per_image = secs;
        }
        self
    }
}

fn check_words_per_minute(field: &str, value: u32) -> Result<(), String> {
    if value == 0 {
        return Err(format!("rates.{} must be > 0", field));
    }
    if value > MAX_WORDS_PER_MINUTE {
        return Err(format!(
            "rates.{} {} exceeds maximum ({})",
            field, value, MAX_WORDS_PER_MINUTE
        ));
    }
    Ok(())
}
