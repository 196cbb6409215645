//! CLI definitions for readtime
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages).

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

/// Version string shown by `--version`.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "-", env!("VERGEN_GIT_SHA"));

/// Version string shown by `--version`.
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build clap styles using our theme colors.
///
/// - Green: headers, usage, command names (accent color)
/// - White: placeholders and valid values
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "readtime")]
#[command(about = "Estimate how long a text takes to read, counting code and images")]
#[command(long_about = "Estimate how long a text takes to read.

Prose and fenced code blocks (```) are counted separately: prose is read at
200 words per minute and code at 100. Each image adds a fixed 12 seconds.
The total is rounded up to whole minutes. All rates can be changed in
~/.config/readtime/config.toml or per run with flags.

QUICK START:
    readtime estimate post.md              Estimate a file
    cat post.md | readtime estimate        Estimate from stdin
    readtime estimate post.md -i 4         Account for 4 images
    readtime config show                   Show effective configuration")]
#[command(version = VERSION)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate reading time for a file or stdin
    #[command(long_about = "Estimate reading time for a file or stdin.

Fenced code blocks are delimited by ``` markers and may carry a language
tag (```rust). An opening marker without a closing one is read as prose.

The image count is read leniently: '3 images' counts as 3 and anything
that does not start with a number counts as 0.

EXAMPLES:
    readtime estimate post.md                    Text report
    readtime estimate post.md --images 3         Add 3 images
    readtime estimate post.md --json             JSON output
    readtime estimate post.md --code-wpm 80      Slower code reading
    readtime estimate - < post.md                Read stdin explicitly")]
    Estimate {
        /// File to read (stdin when omitted or '-')
        #[arg(help = "File to read (stdin when omitted or '-')")]
        file: Option<PathBuf>,
        /// Number of images in the text
        #[arg(
            long,
            short,
            value_name = "COUNT",
            allow_hyphen_values = true,
            help = "Number of images in the text"
        )]
        images: Option<String>,
        /// Print the result as JSON
        #[arg(long, help = "Print the result as JSON")]
        json: bool,
        /// Override prose reading speed
        #[arg(long, value_name = "WPM", value_parser = clap::value_parser!(u32).range(1..))]
        regular_wpm: Option<u32>,
        /// Override code reading speed
        #[arg(long, value_name = "WPM", value_parser = clap::value_parser!(u32).range(1..))]
        code_wpm: Option<u32>,
        /// Override seconds spent per image
        #[arg(long, value_name = "SECONDS")]
        seconds_per_image: Option<u32>,
    },

    /// Configuration management
    #[command(
        subcommand,
        long_about = "View and edit the readtime configuration file.

Configuration is stored in ~/.config/readtime/config.toml.

EXAMPLES:
    readtime config show        Display effective configuration
    readtime config path        Print the config file location
    readtime config init        Write a default config file
    readtime config edit        Open config in $EDITOR"
    )]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Generate shell completion scripts.

EXAMPLES:
    readtime completions --shell bash > ~/.local/share/bash-completion/completions/readtime
    readtime completions --shell zsh > ~/.zfunc/_readtime")]
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum, help = "Shell to generate completions for")]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, help = "Overwrite an existing config file")]
        force: bool,
    },
    /// Open configuration in editor
    #[command(long_about = "Open the configuration file in your editor.

Uses $EDITOR, falling back to vi. A default file is created first
if none exists.")]
    Edit,
}
