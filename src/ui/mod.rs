//! Terminal UI components
//!
//! Built with ratatui. Mouse clicks and the keyboard both drive taps.

pub mod theme;
pub mod phrases;
pub mod screen;

pub use screen::render;
pub use theme::Theme;
