//! Estimate result and its human-readable rendering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Breakdown of a reading time estimate.
///
/// Serializes with camelCase keys (`totalMinutes`, `codeBlockCount`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResult {
    /// Total reading time, rounded up to whole minutes
    pub total_minutes: u64,
    /// Prose words plus code words
    pub total_word_count: usize,
    /// Words outside fenced code blocks
    pub regular_word_count: usize,
    /// Words inside fenced code blocks
    pub code_word_count: usize,
    /// Number of fenced code blocks
    pub code_block_count: usize,
    /// Number of images accounted for
    pub image_count: u32,
}

impl EstimateResult {
    /// Reading time as "1 minute" or "N minutes".
    pub fn minutes_label(&self) -> String {
        pluralize(self.total_minutes, "minute", "minutes")
    }

    /// Code block count as "1 block" or "N blocks".
    pub fn blocks_label(&self) -> String {
        pluralize(self.code_block_count as u64, "block", "blocks")
    }

    /// Label/value rows of the full report, in display order.
    pub fn report_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Reading time", self.minutes_label()),
            ("Total words", self.total_word_count.to_string()),
            ("Regular words", self.regular_word_count.to_string()),
            ("Code blocks", self.blocks_label()),
            ("Code words", self.code_word_count.to_string()),
            ("Images", self.image_count.to_string()),
        ]
    }

    /// Render the report with labels padded to a common width.
    ///
    /// `style` decorates each cell after padding, so escape codes never
    /// affect alignment. The first row's value is the [`ReportCell::Headline`].
    pub fn render_report<F>(&self, style: F) -> String
    where
        F: Fn(ReportCell, &str) -> String,
    {
        let rows = self.report_rows();
        let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;
        rows.iter()
            .enumerate()
            .map(|(i, (label, value))| {
                let label = style(
                    ReportCell::Label,
                    &format!("{:<width$}", format!("{}:", label), width = width),
                );
                let cell = if i == 0 {
                    ReportCell::Headline
                } else {
                    ReportCell::Value
                };
                format!("{} {}", label, style(cell, value))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Part of a report row handed to the styling closure of
/// [`EstimateResult::render_report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportCell {
    /// Padded row label, including the colon
    Label,
    /// The reading time value
    Headline,
    /// Any other value
    Value,
}

impl fmt::Display for EstimateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_report(|_, text| text.to_string()))
    }
}

fn pluralize(count: u64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {}", singular)
    } else {
        format!("{} {}", count, plural)
    }
}
