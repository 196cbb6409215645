//! ANSI color helpers and CLI text formatting

use std::io::IsTerminal;

use super::Theme;

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// ANSI color codes for CLI output
pub mod ansi {
    /// Gray color (ANSI 37) - used for descriptions
    pub const GRAY: &str = "\x1b[37m";
    /// Green color (ANSI 32) - used for accent/headers
    pub const GREEN: &str = "\x1b[32m";
    /// Red color (ANSI 31) - used for errors
    pub const RED: &str = "\x1b[31m";
    /// Dark gray (ANSI 90) - used for secondary text
    pub const DARK_GRAY: &str = "\x1b[90m";
}

/// Whether colored output should be produced on stdout.
///
/// `FORCE_COLOR` wins, then `NO_COLOR`, then whether stdout is a terminal.
pub fn colors_enabled() -> bool {
    colors_enabled_for(std::io::stdout().is_terminal())
}

/// Same as [`colors_enabled`], for stderr.
pub fn stderr_colors_enabled() -> bool {
    colors_enabled_for(std::io::stderr().is_terminal())
}

fn colors_enabled_for(is_terminal: bool) -> bool {
    resolve_colors(
        std::env::var_os("FORCE_COLOR").is_some(),
        std::env::var_os("NO_COLOR").is_some(),
        is_terminal,
    )
}

fn resolve_colors(force: bool, no_color: bool, is_terminal: bool) -> bool {
    force || (!no_color && is_terminal)
}

impl Theme {
    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        wrap(self.accent, text)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        wrap(self.text_primary, text)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        wrap(self.text_secondary, text)
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        wrap(self.error, text)
    }

    /// Format a failed command as `Error: ...` with its cause chain.
    pub fn error_report(&self, err: &anyhow::Error) -> String {
        self.error_text(&format!("Error: {:#}", err))
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        wrap(self.success, text)
    }
}

fn wrap(color: &str, text: &str) -> String {
    if color.is_empty() {
        text.to_string()
    } else {
        format!("{}{}{}", color, text, ANSI_RESET)
    }
}
