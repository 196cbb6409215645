//! readtime library
//!
//! Estimates human reading time for a block of text. Prose and fenced code
//! blocks are counted separately and read at different speeds; images add a
//! fixed viewing cost each.

pub mod cli;
pub mod config;
pub mod estimator;
pub mod theme;

pub use config::{Config, RatesConfig};
pub use estimator::{
    count_words, estimate, extract_code_blocks, parse_image_count, EstimateError,
    EstimateResult, Estimator, ExtractionResult,
};
