//! Theme configuration for CLI output
//!
//! Centralizes color definitions so the report, command messages and
//! errors share one palette. Colors are disabled when `NO_COLOR` is set or
//! the output stream is not a terminal, unless `FORCE_COLOR` is set.

pub mod cli;

pub use cli::{ansi, colors_enabled, stderr_colors_enabled, ANSI_RESET};

/// Theme configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: &'static str,
    /// Secondary/dimmed text color
    pub text_secondary: &'static str,
    /// Accent color for highlights and important elements
    pub accent: &'static str,
    /// Error/warning color
    pub error: &'static str,
    /// Success color
    pub success: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

impl Theme {
    /// Light gray text with a green accent.
    pub fn standard() -> Self {
        Self {
            text_primary: ansi::GRAY,
            text_secondary: ansi::DARK_GRAY,
            accent: ansi::GREEN,
            error: ansi::RED,
            success: ansi::GREEN,
        }
    }

    /// No escape codes at all.
    pub fn plain() -> Self {
        Self {
            text_primary: "",
            text_secondary: "",
            accent: "",
            error: "",
            success: "",
        }
    }
}

/// Theme for stdout, honoring `NO_COLOR`/`FORCE_COLOR`.
pub fn current_theme() -> Theme {
    theme_for(colors_enabled())
}

/// Theme for stderr, honoring `NO_COLOR`/`FORCE_COLOR`.
pub fn stderr_theme() -> Theme {
    theme_for(stderr_colors_enabled())
}

fn theme_for(colors: bool) -> Theme {
    if colors {
        Theme::standard()
    } else {
        Theme::plain()
    }
}
