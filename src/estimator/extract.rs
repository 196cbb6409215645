//! Fenced code block extraction.
//!
//! Splits raw content into prose and code. A fenced block runs from a
//! triple-backtick marker to the next triple-backtick marker (non-greedy,
//! may span lines). Blocks are matched left to right and never overlap.
//! An opening marker without a closing one is left in place as prose.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

/// A whole fenced region including both markers.
static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("valid fenced block regex"));

/// Opening marker plus an optional ASCII language tag and newline.
static OPENING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```[0-9A-Za-z_]*\n?").expect("valid opening fence regex"));

/// Closing marker plus the newline in front of it, at the very end of a block.
static CLOSING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n?```$").expect("valid closing fence regex"));

/// Content split into prose and code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractionResult {
    /// Input with every fenced block replaced by a single space.
    pub regular_text: String,
    /// Contents of all fenced blocks in order, joined by a single space.
    pub code_text: String,
    /// Number of fenced blocks found.
    pub code_block_count: usize,
}

/// Separate fenced code blocks from the surrounding prose.
pub fn extract_code_blocks(content: &str) -> ExtractionResult {
    let mut regular_text = String::with_capacity(content.len());
    let mut blocks: Vec<&str> = Vec::new();
    let mut last_end = 0;

    for block in FENCED_BLOCK.find_iter(content) {
        regular_text.push_str(&content[last_end..block.start()]);
        regular_text.push(' ');
        last_end = block.end();

        let code = strip_fences(block.as_str());
        trace!(
            start = block.start(),
            end = block.end(),
            code_len = code.len(),
            "Extracted fenced block"
        );
        blocks.push(code);
    }
    regular_text.push_str(&content[last_end..]);

    ExtractionResult {
        regular_text,
        code_text: blocks.join(" "),
        code_block_count: blocks.len(),
    }
}

/// Remove the markers (and language tag) from a matched block.
fn strip_fences(block: &str) -> &str {
    let body = OPENING_FENCE
        .find(block)
        .map_or(block, |opening| &block[opening.end()..]);
    CLOSING_FENCE
        .find(body)
        .map_or(body, |closing| &body[..closing.start()])
}
