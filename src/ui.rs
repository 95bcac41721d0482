//! Terminal UI module with ratatui
//!
//! This module provides the terminal interface for uplift using the ratatui
//! library. It follows a trait-based architecture with command pattern for
//! event handling: input becomes [`UICommand`]s, the application mutates
//! [`ViewState`], and a [`UIRenderer`] draws it.

pub mod cards;
pub mod events;
pub mod renderer;
pub mod state;
pub mod terminal;
pub mod theme;

// Re-export public API
pub use cards::{card_height, render_card, CardView, ART_HEIGHT};
pub use events::{DisplayCommand, NavigationCommand, UICommand};
pub use ratatui::style::{Color, Style};
pub use renderer::UIRenderer;
pub use state::{CardSlot, StatusLine, ViewState, VisibleCard};
pub use terminal::TerminalUI;
pub use theme::ColorTheme;

#[cfg(test)]
pub use renderer::tests::MockUIRenderer;
