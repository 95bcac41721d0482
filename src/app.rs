//! Application orchestration layer
//!
//! This module provides minimal coordination between the data source, the
//! resource tables, and the UI. It owns the event loop and the two passes the
//! list renderer needs: a layout pass that sizes every card at the current
//! terminal width, and a content pass that materializes only the cards
//! intersecting the visible window.

use crate::datasource;
use crate::error::Result;
use crate::model::Affirmation;
use crate::resources::Resources;
use crate::ui::{
    card_height, render_card, DisplayCommand, NavigationCommand, UICommand, UIRenderer,
    ViewState, VisibleCard,
};
use std::time::Duration;

/// Application orchestrator - coordinates components without duplicating their state
pub struct Application {
    resources: Resources,
    records: Vec<Affirmation>,
    ui_renderer: Box<dyn UIRenderer>,
}

impl Application {
    /// Create application by initializing and wiring components together
    pub fn new(resources: Resources, ui_renderer: Box<dyn UIRenderer>) -> Result<Self> {
        let records = datasource::load_affirmations();
        log::debug!(
            "loaded {} affirmation records (locale '{}')",
            records.len(),
            resources.locale()
        );

        Ok(Self {
            resources,
            records,
            ui_renderer,
        })
    }

    /// Run the application - simple event loop that delegates to components
    pub async fn run(&mut self) -> Result<()> {
        // Initialize UI
        self.ui_renderer.initialize()?;

        // Create view state owned by this loop
        let (width, height) = self.ui_renderer.get_terminal_size()?;
        let mut view_state = ViewState::new(width, height);

        // Initial layout and content
        self.relayout(&mut view_state)?;
        self.update_view_content(&mut view_state)?;

        // Simple event loop - each iteration is independent
        let mut running = true;
        while running {
            // Get next command
            match self
                .ui_renderer
                .handle_input(Some(Duration::from_millis(50)))
            {
                Ok(Some(command)) => {
                    running = self.execute_command(command, &mut view_state)?;
                }
                Ok(None) => {
                    // No input - continue
                }
                Err(e) => {
                    eprintln!("Input error: {}", e);
                    break;
                }
            }

            // Render after handling input
            self.ui_renderer.render(&view_state)?;

            // Brief pause
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        self.ui_renderer.cleanup()?;
        Ok(())
    }

    /// Execute a command - returns false if should quit
    fn execute_command(&mut self, command: UICommand, view_state: &mut ViewState) -> Result<bool> {
        match command {
            UICommand::Quit => Ok(false),

            UICommand::Navigation(nav) => {
                match nav {
                    NavigationCommand::LineUp(n) => {
                        view_state.scroll_by(-(n as i64));
                    }
                    NavigationCommand::LineDown(n) => {
                        view_state.scroll_by(n as i64);
                    }
                    NavigationCommand::PageUp => {
                        view_state.scroll_by(-(view_state.rows_per_page() as i64));
                    }
                    NavigationCommand::PageDown => {
                        view_state.scroll_by(view_state.rows_per_page() as i64);
                    }
                    NavigationCommand::HalfPageUp => {
                        view_state.scroll_by(-(self.half_page(view_state)));
                    }
                    NavigationCommand::HalfPageDown => {
                        view_state.scroll_by(self.half_page(view_state));
                    }
                    NavigationCommand::GoToStart => {
                        view_state.scroll_to(0);
                    }
                    NavigationCommand::GoToEnd => {
                        let end = view_state.max_scroll();
                        view_state.scroll_to(end);
                    }
                }
                view_state.status_line.clear_message();
                self.update_view_content(view_state)?;
                Ok(true)
            }

            UICommand::Display(DisplayCommand::Refresh) => {
                self.update_view_content(view_state)?;
                view_state.status_line.set_message("Refreshed".to_string());
                Ok(true)
            }

            UICommand::Resize { width, height } => {
                if view_state.update_terminal_size(width, height) {
                    self.relayout(view_state)?;
                    self.update_view_content(view_state)?;
                }
                Ok(true)
            }
        }
    }

    /// Layout pass: size every card at the current width and rebuild the
    /// offset table. Cheap (no row content is materialized), O(n) records.
    fn relayout(&self, view_state: &mut ViewState) -> Result<()> {
        let width = view_state.viewport_width;
        let heights = self
            .records
            .iter()
            .map(|record| card_height(record, &self.resources, width))
            .collect::<Result<Vec<_>>>()?;
        view_state.set_layout(&heights);
        Ok(())
    }

    /// Content pass: materialize card views for the visible window only.
    fn update_view_content(&self, view_state: &mut ViewState) -> Result<()> {
        let width = view_state.viewport_width;
        let range = view_state.visible_range();

        let mut cards = Vec::with_capacity(range.len());
        for index in range {
            let view = render_card(&self.records[index], &self.resources, width)?;
            cards.push(VisibleCard {
                index,
                top: view_state.layout[index].top,
                view,
            });
        }

        view_state.update_visible_cards(cards);
        Ok(())
    }

    fn half_page(&self, view_state: &ViewState) -> i64 {
        (view_state.rows_per_page() / 2).max(1) as i64
    }
}
