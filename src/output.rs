//! # Output Decorations
//!
//! Command summaries on stdout start with a status marker: an emoji on color
//! terminals, a bracketed tag such as `[OK]` otherwise. Log records go to
//! stderr through `env_logger` and are not affected.
//!
//! Decorations are off when `--color=never` is given, when `NO_COLOR` is set,
//! or when `console` reports that stdout cannot show colors (which covers
//! `CLICOLOR=0`, `CLICOLOR_FORCE` and `TERM=dumb`). `--color=always` wins over
//! all of them.

use clap::ValueEnum;
use std::env;

/// Value of the `--color` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Decorate when stdout supports it.
    #[default]
    Auto,
    Always,
    Never,
}

/// Kind of summary line printed by a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reading from a remote repository.
    Fetch,
    Done,
    Warn,
    Info,
}

impl Status {
    fn emoji(self) -> &'static str {
        match self {
            Status::Fetch => "📦",
            Status::Done => "✅",
            Status::Warn => "⚠️ ",
            Status::Info => "ℹ️ ",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Status::Fetch => "[CLONE]",
            Status::Done => "[OK]",
            Status::Warn => "[WARN]",
            Status::Info => "[INFO]",
        }
    }
}

/// Resolved decoration settings for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    pub fn new(choice: ColorChoice) -> Self {
        let use_color = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => env::var_os("NO_COLOR").is_none() && console::colors_enabled(),
        };
        Self { use_color }
    }

    /// Marker to print in front of a summary line.
    pub fn status(&self, status: Status) -> &'static str {
        if self.use_color {
            status.emoji()
        } else {
            status.tag()
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new(ColorChoice::Auto)
    }
}
