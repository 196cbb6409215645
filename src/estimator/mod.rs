//! Reading time estimation.
//!
//! The estimator makes two passes over the content:
//!
//! 1. `extract` separates fenced code blocks from prose
//! 2. `words` counts each part, and the counts plus the image count are
//!    converted into seconds using the configured [`RatesConfig`]
//!
//! The total is rounded up to whole minutes. Estimation is a pure function
//! of its inputs and rates; an `Estimator` holds no mutable state and can be
//! shared freely between threads.
//!
//! # Example
//!
//! ```
//! use readtime::estimate;
//!
//! let result = estimate("Some prose.\n```rust\nlet x = 1;\n```\n", 2).unwrap();
//! assert_eq!(result.code_block_count, 1);
//! assert_eq!(result.image_count, 2);
//! ```

pub mod error;
pub mod extract;
pub mod input;
pub mod result;
pub mod words;

pub use error::{EstimateError, EMPTY_INPUT_MESSAGE};
pub use extract::{extract_code_blocks, ExtractionResult};
pub use input::{parse_image_count, parse_image_count_opt};
pub use result::{EstimateResult, ReportCell};
pub use words::{count_words, count_words_opt, is_word_separator, trim_separators};

use tracing::debug;

use crate::config::RatesConfig;

const SECONDS_PER_MINUTE: f64 = 60.0;

/// Estimates reading time using a fixed set of reading rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Estimator {
    rates: RatesConfig,
}

impl Estimator {
    /// Create an estimator with custom rates.
    ///
    /// Fails with [`EstimateError::InvalidRates`] if the rates do not pass
    /// [`RatesConfig::validate`] (e.g. a zero words-per-minute value).
    pub fn new(rates: RatesConfig) -> Result<Self, EstimateError> {
        rates.validate().map_err(EstimateError::InvalidRates)?;
        Ok(Self { rates })
    }

    /// The rates this estimator converts counts with.
    pub fn rates(&self) -> &RatesConfig {
        &self.rates
    }

    /// Estimate the reading time of `content` with `image_count` images.
    ///
    /// Fails with [`EstimateError::EmptyInput`] if `content` is empty after
    /// trimming whitespace (see [`is_word_separator`]). This is the only
    /// failure mode.
    pub fn estimate(
        &self,
        content: &str,
        image_count: u32,
    ) -> Result<EstimateResult, EstimateError> {
        let content = trim_separators(content);
        if content.is_empty() {
            return Err(EstimateError::EmptyInput);
        }

        let extraction = extract_code_blocks(content);
        let regular_word_count = count_words(&extraction.regular_text);
        let code_word_count = count_words(&extraction.code_text);
        let total_word_count = regular_word_count + code_word_count;

        let regular_seconds =
            words_to_seconds(regular_word_count, self.rates.regular_words_per_minute);
        let code_seconds = words_to_seconds(code_word_count, self.rates.code_words_per_minute);
        let image_seconds = f64::from(image_count) * f64::from(self.rates.seconds_per_image);
        let total_seconds = regular_seconds + code_seconds + image_seconds;
        let total_minutes = (total_seconds / SECONDS_PER_MINUTE).ceil() as u64;

        debug!(
            code_blocks = extraction.code_block_count,
            regular_word_count,
            code_word_count,
            image_count,
            total_seconds,
            total_minutes,
            "Estimated reading time"
        );

        Ok(EstimateResult {
            total_minutes,
            total_word_count,
            regular_word_count,
            code_word_count,
            code_block_count: extraction.code_block_count,
            image_count,
        })
    }

    /// Estimate with a free-form image count (see [`parse_image_count_opt`]).
    pub fn estimate_lenient(
        &self,
        content: &str,
        image_count: Option<&str>,
    ) -> Result<EstimateResult, EstimateError> {
        self.estimate(content, parse_image_count_opt(image_count))
    }
}

/// Estimate reading time with the default rates.
pub fn estimate(content: &str, image_count: u32) -> Result<EstimateResult, EstimateError> {
    Estimator::default().estimate(content, image_count)
}

/// Seconds needed to read `words` at `words_per_minute`.
fn words_to_seconds(words: usize, words_per_minute: u32) -> f64 {
    words as f64 / f64::from(words_per_minute) * SECONDS_PER_MINUTE
}
