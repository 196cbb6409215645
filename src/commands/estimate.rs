//! Estimate command handler

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

use readtime::theme::{current_theme, Theme};
use readtime::estimator::ReportCell;
use readtime::{Config, EstimateResult, Estimator};

/// Arguments of `readtime estimate`.
#[derive(Debug, Default)]
pub struct EstimateArgs {
    pub file: Option<PathBuf>,
    pub images: Option<String>,
    pub json: bool,
    pub regular_wpm: Option<u32>,
    pub code_wpm: Option<u32>,
    pub seconds_per_image: Option<u32>,
}

/// Estimate reading time for a file or stdin and print the result.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: EstimateArgs) -> Result<()> {
    let config = Config::load()?;
    let content = read_input(args.file.as_deref())?;
    let output = run(&args, &config, &content, &current_theme())?;
    println!("{}", output);
    Ok(())
}

/// Run an estimate against already-loaded config and content.
///
/// Returns the text to print on stdout.
pub fn run(args: &EstimateArgs, config: &Config, content: &str, theme: &Theme) -> Result<String> {
    let rates = config
        .rates
        .with_overrides(args.regular_wpm, args.code_wpm, args.seconds_per_image);
    let estimator = Estimator::new(rates)?;
    let result = estimator.estimate_lenient(content, args.images.as_deref())?;

    if args.json || config.output.json {
        Ok(serde_json::to_string_pretty(&result)?)
    } else {
        Ok(render_report(&result, theme))
    }
}

/// Read content from `path`, or stdin when absent or `-`.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "Reading input file");
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        _ => {
            debug!("Reading input from stdin");
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read from stdin")?;
            Ok(content)
        }
    }
}

/// Render the text report with the reading time highlighted.
fn render_report(result: &EstimateResult, theme: &Theme) -> String {
    result.render_report(|cell, text| match cell {
        ReportCell::Label => theme.secondary_text(text),
        ReportCell::Headline => theme.accent_text(text),
        ReportCell::Value => theme.primary_text(text),
    })
}
