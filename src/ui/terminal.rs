//! Terminal UI implementation using ratatui
//!
//! This module provides the concrete implementation of UIRenderer using ratatui
//! for cross-platform terminal interface. It renders the cards the application
//! has materialized for the current window and translates key and mouse events
//! into UICommands.

use crate::error::Result;
use crate::ui::{
    ColorTheme, DisplayCommand, NavigationCommand, UICommand, UIRenderer, ViewState,
};
use ratatui::crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Rows a mouse wheel tick scrolls.
const WHEEL_SCROLL_ROWS: u16 = 3;

/// Terminal UI implementation with ratatui backend
///
/// This implementation focuses purely on rendering and input handling.
/// Layout and content materialization are handled by the Application.
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    theme: ColorTheme,
}

impl TerminalUI {
    /// Create a new terminal UI instance with the default theme
    pub fn new() -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme: ColorTheme::default(),
        })
    }

    /// Create terminal UI with custom theme
    pub fn with_theme(theme: ColorTheme) -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme,
        })
    }

    /// Convert key events to UICommands
    fn key_to_command(&self, key: KeyCode, modifiers: KeyModifiers) -> Option<UICommand> {
        match (key, modifiers) {
            // Navigation commands
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
                Some(UICommand::Navigation(NavigationCommand::LineDown(1)))
            }
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
                Some(UICommand::Navigation(NavigationCommand::LineUp(1)))
            }
            (KeyCode::Char('f'), KeyModifiers::NONE)
            | (KeyCode::PageDown, _)
            | (KeyCode::Char(' '), KeyModifiers::NONE) => {
                Some(UICommand::Navigation(NavigationCommand::PageDown))
            }
            (KeyCode::Char('b'), KeyModifiers::NONE) | (KeyCode::PageUp, _) => {
                Some(UICommand::Navigation(NavigationCommand::PageUp))
            }
            (KeyCode::Char('d'), KeyModifiers::NONE) => {
                Some(UICommand::Navigation(NavigationCommand::HalfPageDown))
            }
            (KeyCode::Char('u'), KeyModifiers::NONE) => {
                Some(UICommand::Navigation(NavigationCommand::HalfPageUp))
            }
            (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => {
                Some(UICommand::Navigation(NavigationCommand::GoToStart))
            }
            (KeyCode::Char('G'), KeyModifiers::SHIFT) | (KeyCode::End, _) => {
                Some(UICommand::Navigation(NavigationCommand::GoToEnd))
            }

            // Display commands
            (KeyCode::Char('r'), KeyModifiers::NONE) => {
                Some(UICommand::Display(DisplayCommand::Refresh))
            }

            // Quit commands
            (KeyCode::Char('q'), KeyModifiers::NONE)
            | (KeyCode::Esc, KeyModifiers::NONE)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(UICommand::Quit),

            _ => None,
        }
    }

    /// Assemble the window's rows from the materialized cards, slicing cards
    /// that are only partially inside the window.
    fn window_lines(view_state: &ViewState, theme: &ColorTheme, rows: usize) -> Vec<Line<'static>> {
        let window_top = view_state.scroll_row;
        let window_bottom = window_top + rows;
        let mut lines = vec![Line::default(); rows];

        for card in &view_state.visible_cards {
            let styled = card.view.styled_rows(theme);
            for (offset, line) in styled.into_iter().enumerate() {
                let absolute = card.top + offset;
                if absolute >= window_top && absolute < window_bottom {
                    lines[absolute - window_top] = line;
                }
            }
        }

        lines
    }

    /// Render content area from materialized cards (helper for closure)
    fn render_content_with_data(
        frame: &mut Frame,
        area: Rect,
        view_state: &ViewState,
        theme: &ColorTheme,
    ) {
        let lines = Self::window_lines(view_state, theme, area.height as usize);
        let mut paragraph = Paragraph::new(lines);
        if let Some(color) = theme.normal_text {
            paragraph = paragraph.style(Style::default().fg(color));
        }
        frame.render_widget(paragraph, area);
    }

    /// Render status line using theme colors (helper for closure)
    fn render_status_with_data(
        frame: &mut Frame,
        area: Rect,
        view_state: &ViewState,
        theme: &ColorTheme,
    ) {
        let status_text = view_state.format_status_line();
        let status_style = Style::default().bg(theme.status_bg).fg(theme.status_fg);

        let status = Paragraph::new(status_text).style(status_style);
        frame.render_widget(status, area);
    }
}

impl UIRenderer for TerminalUI {
    fn render(&mut self, view_state: &ViewState) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            // Extract theme before closure to avoid borrowing issues
            let theme = &self.theme;

            terminal.draw(move |frame| {
                let size = frame.size();

                // Split screen: content area and status line
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
                    .split(size);

                Self::render_content_with_data(frame, chunks[0], view_state, theme);
                Self::render_status_with_data(frame, chunks[1], view_state, theme);
            })?;
        }
        Ok(())
    }

    fn handle_input(&mut self, timeout: Option<Duration>) -> Result<Option<UICommand>> {
        let timeout_duration = timeout.unwrap_or(Duration::from_millis(100));

        if event::poll(timeout_duration)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    return Ok(self.key_to_command(key_event.code, key_event.modifiers));
                }
                Event::Mouse(mouse_event) => match mouse_event.kind {
                    MouseEventKind::ScrollUp => {
                        return Ok(Some(UICommand::Navigation(NavigationCommand::LineUp(
                            WHEEL_SCROLL_ROWS,
                        ))));
                    }
                    MouseEventKind::ScrollDown => {
                        return Ok(Some(UICommand::Navigation(NavigationCommand::LineDown(
                            WHEEL_SCROLL_ROWS,
                        ))));
                    }
                    _ => {}
                },
                Event::Resize(width, height) => {
                    return Ok(Some(UICommand::Resize { width, height }));
                }
                _ => {}
            }
        }

        Ok(None)
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
            self.terminal = None;
        }
        Ok(())
    }

    fn get_terminal_size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = ratatui::crossterm::terminal::size()?;
        Ok((cols, rows))
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Affirmation;
    use crate::resources::{ArtId, ResourceResolver, StringId};
    use crate::ui::cards::render_card;
    use crate::ui::state::VisibleCard;
    use ratatui::style::Color;

    #[test]
    fn test_terminal_ui_creation() {
        let ui = TerminalUI::new();
        assert!(ui.is_ok());
        let ui = ui.unwrap();
        assert!(ui.terminal.is_none());

        // Test with custom theme
        let custom_theme = ColorTheme::monochrome();
        let ui_with_theme = TerminalUI::with_theme(custom_theme);
        assert!(ui_with_theme.is_ok());
    }

    #[test]
    fn test_theme_integration() {
        let ui = TerminalUI::new().unwrap();

        assert_eq!(ui.theme.status_fg, Color::White);
        assert_eq!(ui.theme.status_bg, Color::Blue);

        let ui_with_theme = TerminalUI::with_theme(ColorTheme::monochrome()).unwrap();
        assert_eq!(ui_with_theme.theme.status_fg, Color::White);
        assert_eq!(ui_with_theme.theme.status_bg, Color::Black);
    }

    #[test]
    fn test_key_to_command_navigation() {
        let ui = TerminalUI::new().unwrap();

        assert_eq!(
            ui.key_to_command(KeyCode::Char('j'), KeyModifiers::NONE),
            Some(UICommand::Navigation(NavigationCommand::LineDown(1)))
        );

        assert_eq!(
            ui.key_to_command(KeyCode::Char('k'), KeyModifiers::NONE),
            Some(UICommand::Navigation(NavigationCommand::LineUp(1)))
        );

        assert_eq!(
            ui.key_to_command(KeyCode::Char(' '), KeyModifiers::NONE),
            Some(UICommand::Navigation(NavigationCommand::PageDown))
        );

        assert_eq!(
            ui.key_to_command(KeyCode::Char('G'), KeyModifiers::SHIFT),
            Some(UICommand::Navigation(NavigationCommand::GoToEnd))
        );

        assert_eq!(
            ui.key_to_command(KeyCode::Char('u'), KeyModifiers::NONE),
            Some(UICommand::Navigation(NavigationCommand::HalfPageUp))
        );
    }

    #[test]
    fn test_key_to_command_display_and_quit() {
        let ui = TerminalUI::new().unwrap();

        assert_eq!(
            ui.key_to_command(KeyCode::Char('r'), KeyModifiers::NONE),
            Some(UICommand::Display(DisplayCommand::Refresh))
        );

        assert_eq!(
            ui.key_to_command(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(UICommand::Quit)
        );

        assert_eq!(
            ui.key_to_command(KeyCode::Esc, KeyModifiers::NONE),
            Some(UICommand::Quit)
        );

        assert_eq!(
            ui.key_to_command(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(UICommand::Quit)
        );

        assert_eq!(ui.key_to_command(KeyCode::Char('x'), KeyModifiers::NONE), None);
    }

    struct StubResolver;

    impl ResourceResolver for StubResolver {
        fn string(&self, _id: StringId) -> crate::error::Result<&str> {
            Ok("I am strong.")
        }

        fn art(&self, _id: ArtId) -> crate::error::Result<&str> {
            Ok("***\n***\n***")
        }
    }

    #[test]
    fn test_window_lines_slice_partially_visible_cards() {
        let record = Affirmation::new(StringId::new(0), ArtId::new(0));
        let view = render_card(&record, &StubResolver, 30).unwrap();
        let card_height = view.height();
        let theme = ColorTheme::default();

        let mut state = ViewState::new(30, 9); // 8 content rows
        state.set_layout(&[card_height, card_height]);
        state.scroll_to(3);
        state.update_visible_cards(vec![
            VisibleCard {
                index: 0,
                top: 0,
                view: view.clone(),
            },
            VisibleCard {
                index: 1,
                top: card_height + 1,
                view: view.clone(),
            },
        ]);

        let rows = state.rows_per_page();
        let lines = TerminalUI::window_lines(&state, &theme, rows);
        assert_eq!(lines.len(), rows);

        // The first window row is row 3 of the first card, not its top border
        let expected = view.rows()[3].clone();
        let rendered: String = lines[0]
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_window_lines_leave_gaps_blank() {
        let record = Affirmation::new(StringId::new(0), ArtId::new(0));
        let view = render_card(&record, &StubResolver, 30).unwrap();
        let card_height = view.height();
        let theme = ColorTheme::default();

        // Window is tall enough to include the gap row after the first card
        let mut state = ViewState::new(30, card_height as u16 + 3);
        state.set_layout(&[card_height, card_height]);
        state.update_visible_cards(vec![VisibleCard {
            index: 0,
            top: 0,
            view,
        }]);

        let lines = TerminalUI::window_lines(&state, &theme, state.rows_per_page());
        let gap_row: String = lines[card_height]
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert!(gap_row.is_empty());
    }
}
