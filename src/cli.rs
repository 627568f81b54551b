//! CLI - Command line flags for TapText
//!
//! The program has one screen; flags only adjust how it starts.
//!
//! ```bash
//! taptext                             # built-in phrases, sound on
//! taptext --mute                      # no sound
//! taptext -c phrases.toml -a ./assets # custom phrases and cue directory
//! taptext --log-file taptext.log --log-level debug
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::Config;
use crate::models::PhraseList;

/// TapText - tap a phrase, hear a tick
#[derive(Parser, Debug)]
#[command(
    name = "taptext",
    version,
    about = "Tap a phrase in the terminal, hear a tick",
    long_about = "Shows a block of phrases. Click a phrase (or focus it with Tab \
                  and press Enter) to highlight it and play a short cue.",
    after_help = "KEYS:\n\
                  click, Enter, Space   Tap a phrase\n\
                  Tab, Shift-Tab        Move focus between phrases\n\
                  Up, Down, PgUp, PgDn  Scroll\n\
                  q, Esc, Ctrl-C        Quit"
)]
pub struct Cli {
    /// Path to config file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Directory searched first for tick.wav
    #[arg(long, short = 'a')]
    pub assets: Option<PathBuf>,

    /// Start without sound
    #[arg(long, short = 'm')]
    pub mute: bool,

    /// Write diagnostics to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Diagnostic level for --log-file
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Startup settings after merging flags over the config file
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub phrases: PhraseList,
    pub assets: Option<PathBuf>,
    pub mute: bool,
}

impl Cli {
    /// Merge flags over `config`
    pub fn settings(&self, config: Config) -> Settings {
        Settings {
            phrases: config.phrase_list(),
            assets: self.assets.clone().or(config.assets),
            mute: self.mute || config.mute.unwrap_or(false),
        }
    }
}
