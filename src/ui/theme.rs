//! Paper-and-ink theme for TapText
//!
//! Colour palette, the two phrase style variants, and contrast helpers.

use ratatui::style::{Color, Modifier, Style};

use crate::models::StyleVariant;

/// Colour palette
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #ffffff (paper)
    pub const BACKGROUND: Color = Color::Rgb(0xff, 0xff, 0xff);

    /// Ink: #000000 (untapped phrases)
    pub const INK: Color = Color::Rgb(0x00, 0x00, 0x00);

    /// Tapped: #ff0000 (red)
    pub const TAPPED: Color = Color::Rgb(0xff, 0x00, 0x00);

    /// Underline under a tapped phrase: #aaaaaa (light gray)
    pub const UNDERLINE: Color = Color::Rgb(0xaa, 0xaa, 0xaa);

    /// Keyboard focus wash: #d6e8ff
    pub const FOCUS: Color = Color::Rgb(0xd6, 0xe8, 0xff);

    /// Accent: #0060df (key hints, title)
    pub const ACCENT: Color = Color::Rgb(0x00, 0x60, 0xdf);

    /// Dim: #6e6e73 (secondary text)
    pub const DIM: Color = Color::Rgb(0x6e, 0x6e, 0x73);

    /// Status bar background: #f0f0f0
    pub const STATUS: Color = Color::Rgb(0xf0, 0xf0, 0xf0);

    /// Border: #c7c7cc
    pub const BORDER: Color = Color::Rgb(0xc7, 0xc7, 0xcc);

    /// Success: #1e7e34 (sound on)
    pub const SUCCESS: Color = Color::Rgb(0x1e, 0x7e, 0x34);

    // ═══════════════════════════════════════════════════════════════════════
    // PHRASE STYLES
    // ═══════════════════════════════════════════════════════════════════════

    /// Shared style for every untapped phrase: ink, no underline
    pub fn untapped() -> Style {
        Style::default()
            .fg(Self::INK)
            .bg(Self::BACKGROUND)
            .remove_modifier(Modifier::UNDERLINED)
    }

    /// Style for the tapped phrase: red, underlined in light gray
    pub fn tapped() -> Style {
        Style::default()
            .fg(Self::TAPPED)
            .bg(Self::BACKGROUND)
            .add_modifier(Modifier::UNDERLINED)
            .underline_color(Self::UNDERLINE)
    }

    pub fn variant(variant: StyleVariant) -> Style {
        match variant {
            StyleVariant::Untapped => Self::untapped(),
            StyleVariant::Tapped => Self::tapped(),
        }
    }

    /// Patched over a phrase that has keyboard focus
    pub fn focused() -> Style {
        Style::default().bg(Self::FOCUS)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // CHROME
    // ═══════════════════════════════════════════════════════════════════════

    pub fn text() -> Style {
        Style::default().fg(Self::INK).bg(Self::BACKGROUND)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    pub fn keybind() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::INK).bg(Self::STATUS)
    }

    /// Sound indicator when a cue is loaded
    pub fn sound_on() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    /// Sound indicator when muted or the cue failed to load
    pub fn sound_off() -> Style {
        Style::default().fg(Self::BACKGROUND).bg(Self::DIM)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Relative luminance of an sRGB colour (WCAG 2.0)
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn linear(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
}

/// Contrast ratio between two colours, from 1 (same) to 21 (black on white)
pub fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
    let a = relative_luminance(fg.0, fg.1, fg.2);
    let b = relative_luminance(bg.0, bg.1, bg.2);
    let (lighter, darker) = if a > b { (a, b) } else { (b, a) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Extract RGB from a ratatui colour (only the `Rgb` variant)
pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}
