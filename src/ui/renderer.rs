//! UI renderer trait and event handling
//!
//! This module defines the UIRenderer trait for rendering terminal interfaces
//! and handling user input events in an event-driven architecture.

use crate::error::Result;
use crate::ui::{UICommand, ViewState};
use std::time::Duration;

/// Core trait for UI rendering and event handling
pub trait UIRenderer {
    /// Render the current view state to the terminal
    ///
    /// This method should:
    /// - Clear and redraw the content area from the materialized visible cards
    /// - Slice partially visible cards at the window edges
    /// - Update the status line
    fn render(&mut self, view_state: &ViewState) -> Result<()>;

    /// Handle user input and return the next UI command
    ///
    /// This method should:
    /// - Block until user input or timeout
    /// - Parse key combinations into UICommands
    /// - Return None on timeout for periodic updates
    fn handle_input(&mut self, timeout: Option<Duration>) -> Result<Option<UICommand>>;

    /// Initialize the terminal UI
    ///
    /// This method should:
    /// - Set up raw mode
    /// - Enter the alternate screen
    /// - Enable mouse capture
    fn initialize(&mut self) -> Result<()>;

    /// Clean up and restore terminal state
    fn cleanup(&mut self) -> Result<()>;

    /// Get current terminal dimensions
    fn get_terminal_size(&self) -> Result<(u16, u16)>; // (width, height)
}
