//! Color theme and styling definitions using ratatui colors
//!
//! This module provides color schemes and typography tokens for card rendering
//! using ratatui's color system directly to avoid unnecessary abstractions.

use ratatui::style::{Color, Modifier, Style};

/// Color and typography tokens for terminal UI elements
#[derive(Debug, Clone)]
pub struct ColorTheme {
    /// Normal text color (None uses terminal default)
    pub normal_text: Option<Color>,

    /// Card border and padding rows
    pub card_border: Color,

    /// Art panel rows
    pub art: Style,

    /// Affirmation text rows
    pub body_text: Style,

    /// Status line background
    pub status_bg: Color,

    /// Status line text
    pub status_fg: Color,

    /// Error/warning text
    pub error_text: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            normal_text: None, // Use terminal default
            card_border: Color::DarkGray,
            art: Style::default().fg(Color::Green),
            body_text: Style::default().add_modifier(Modifier::BOLD),
            status_bg: Color::Blue,
            status_fg: Color::White,
            error_text: Color::Red,
        }
    }
}

impl ColorTheme {
    /// Create a monochrome theme for terminals without color support
    pub fn monochrome() -> Self {
        Self {
            normal_text: None,
            card_border: Color::White,
            art: Style::default(),
            body_text: Style::default().add_modifier(Modifier::BOLD),
            status_bg: Color::Black,
            status_fg: Color::White,
            error_text: Color::White,
        }
    }

    /// Create a high-contrast theme for accessibility
    pub fn high_contrast() -> Self {
        Self {
            normal_text: Some(Color::White),
            card_border: Color::White,
            art: Style::default().fg(Color::LightGreen),
            body_text: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            status_bg: Color::White,
            status_fg: Color::Black,
            error_text: Color::LightRed,
        }
    }

    /// Names accepted by [`ColorTheme::by_name`].
    pub const NAMES: &'static [&'static str] = &["default", "monochrome", "high-contrast"];

    /// Look up a theme by its configuration name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default()),
            "monochrome" => Some(Self::monochrome()),
            "high-contrast" | "high_contrast" => Some(Self::high_contrast()),
            _ => None,
        }
    }
}
