//! UI command definitions.
//!
//! Input handling translates raw terminal events into these commands; the
//! application loop consumes them. Keeping the enums free of terminal types
//! lets tests drive the loop without a real terminal.

/// Scrolling and positioning commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCommand {
    LineUp(u16),
    LineDown(u16),
    PageUp,
    PageDown,
    HalfPageUp,
    HalfPageDown,
    GoToStart,
    GoToEnd,
}

/// Display-only commands that do not move the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayCommand {
    Refresh,
}

/// Top-level command produced by input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UICommand {
    Quit,
    Navigation(NavigationCommand),
    Display(DisplayCommand),
    Resize { width: u16, height: u16 },
}
