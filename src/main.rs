//! readtime - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use readtime::cli::{Cli, Commands, ConfigCommands};
use readtime::theme::stderr_theme;

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "READTIME_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", stderr_theme().error_report(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Estimate {
            file,
            images,
            json,
            regular_wpm,
            code_wpm,
            seconds_per_image,
        } => commands::estimate::handle(commands::estimate::EstimateArgs {
            file,
            images,
            json,
            regular_wpm,
            code_wpm,
            seconds_per_image,
        }),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
            ConfigCommands::Edit => commands::config::handle_edit(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}

/// Install a stderr tracing subscriber.
///
/// `READTIME_LOG` takes precedence; otherwise `--verbose` selects debug level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), default_level))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
