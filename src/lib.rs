//! TapText - tap a phrase, hear a tick
//!
//! Renders a block of phrases in the terminal. Clicking a phrase highlights
//! it and plays a short cue; the next tap restores every other phrase.
//!
//! # Modules
//!
//! - `models` - Phrase list, composed text, style table
//! - `view` - The interactive phrase view and its tap contract
//! - `layout` - Wrapping and cell-to-char hit testing
//! - `audio` - Cue decoding and output
//! - `ui` - TUI components
//! - `app` - Input handling, scroll and focus
//! - `config`, `cli`, `logging` - Startup plumbing

pub mod models;
pub mod view;
pub mod layout;
pub mod audio;
pub mod ui;
pub mod app;
pub mod config;
pub mod cli;
pub mod logging;

// Re-export commonly used types
pub use models::{
    ComposedText, PhraseId, PhraseList, StyleTable, StyleVariant, StyledRange, DEFAULT_PHRASES,
};

pub use app::App;
pub use audio::{AudioError, Cue};
pub use view::{PhraseView, Tap};
