//! UI state management structures
//!
//! This module contains viewport state for rendering: the scroll position, the
//! card offset table built by the layout pass, and the cards currently
//! materialized for the visible window. Card content itself comes from the
//! card renderer; this module only does the windowing math.

use crate::ui::cards::CardView;
use std::ops::Range;

/// Blank rows between adjacent cards.
pub const CARD_GAP: usize = 1;

/// One entry of the layout offset table: where a card starts and how tall it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    /// First row of the card, in absolute list rows
    pub top: usize,
    /// Card height in rows
    pub height: usize,
}

/// A card materialized for the current viewport window.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleCard {
    /// Index into the record sequence
    pub index: usize,
    /// First row of the card, in absolute list rows
    pub top: usize,
    pub view: CardView,
}

/// Viewport state for rendering - focused only on what's currently visible
#[derive(Debug)]
pub struct ViewState {
    /// First visible row, in absolute list rows
    pub scroll_row: usize,

    /// Card offset table from the last layout pass, in sequence order
    pub layout: Vec<CardSlot>,

    /// Total list height in rows, gaps included
    pub total_rows: usize,

    /// Cards materialized for the current window
    pub visible_cards: Vec<VisibleCard>,

    /// Status line content
    pub status_line: StatusLine,

    /// Viewport dimensions
    pub viewport_width: u16,
    pub viewport_height: u16,

    /// Whether the viewport is pinned to the end of the list
    pub at_end: bool,
}

impl ViewState {
    /// Create a new viewport state
    pub fn new(viewport_width: u16, viewport_height: u16) -> Self {
        Self {
            scroll_row: 0,
            layout: Vec::new(),
            total_rows: 0,
            visible_cards: Vec::new(),
            status_line: StatusLine::new(),
            viewport_width,
            viewport_height,
            at_end: false,
        }
    }

    /// Content rows per page (viewport height minus status line)
    pub fn rows_per_page(&self) -> usize {
        self.viewport_height.saturating_sub(1) as usize
    }

    /// Number of cards in the layout
    pub fn card_count(&self) -> usize {
        self.layout.len()
    }

    /// Rebuild the offset table from per-card heights, preserving order.
    /// Cards are separated by [`CARD_GAP`] blank rows.
    pub fn set_layout(&mut self, heights: &[usize]) {
        self.layout.clear();
        let mut top = 0;
        for (i, &height) in heights.iter().enumerate() {
            if i > 0 {
                top += CARD_GAP;
            }
            self.layout.push(CardSlot { top, height });
            top += height;
        }
        self.total_rows = top;
        // Re-clamp the scroll position against the new layout
        self.scroll_to(self.scroll_row);
    }

    /// Largest valid scroll position
    pub fn max_scroll(&self) -> usize {
        self.total_rows.saturating_sub(self.rows_per_page())
    }

    /// Scroll to an absolute row, clamped to the valid range
    pub fn scroll_to(&mut self, row: usize) {
        self.scroll_row = row.min(self.max_scroll());
        self.at_end = self.total_rows > 0 && self.scroll_row == self.max_scroll();
    }

    /// Scroll by a signed number of rows, clamped to the valid range
    pub fn scroll_by(&mut self, delta: i64) {
        let target = if delta.is_negative() {
            self.scroll_row.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            self.scroll_row.saturating_add(delta as usize)
        };
        self.scroll_to(target);
    }

    /// Indices of the cards intersecting the current window.
    ///
    /// Binary searches the offset table: O(log n) regardless of list length,
    /// and the returned range is O(visible).
    pub fn visible_range(&self) -> Range<usize> {
        let window_top = self.scroll_row;
        let window_bottom = self.scroll_row + self.rows_per_page();

        let start = self
            .layout
            .partition_point(|slot| slot.top + slot.height <= window_top);
        let end = self.layout.partition_point(|slot| slot.top < window_bottom);
        start..end
    }

    /// Replace the materialized window content
    pub fn update_visible_cards(&mut self, cards: Vec<VisibleCard>) {
        self.visible_cards = cards;
    }

    /// Update terminal dimensions and clear derived state for recalculation.
    /// Returns true if dimensions actually changed
    pub fn update_terminal_size(&mut self, width: u16, height: u16) -> bool {
        let changed = self.viewport_width != width || self.viewport_height != height;

        if changed {
            self.viewport_width = width;
            self.viewport_height = height;
            // Layout and content depend on dimensions; both must be rebuilt
            self.layout.clear();
            self.total_rows = 0;
            self.visible_cards.clear();
            self.at_end = false;
        }

        changed
    }

    /// Format the complete status line for this view state
    pub fn format_status_line(&self) -> String {
        self.status_line.format_status_line(
            "uplift",
            self.card_count(),
            self.scroll_row,
            self.max_scroll(),
            self.total_rows,
            self.rows_per_page(),
            self.at_end,
        )
    }
}

/// Status line information
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    pub message: Option<String>,
}

impl StatusLine {
    /// Create a new status line
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a temporary message
    pub fn set_message(&mut self, message: String) {
        self.message = Some(message);
    }

    /// Clear any temporary message
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Format the status line for display (with position calculated on-the-fly)
    #[allow(clippy::too_many_arguments)]
    pub fn format_status_line(
        &self,
        title: &str,
        card_count: usize,
        scroll_row: usize,
        max_scroll: usize,
        total_rows: usize,
        rows_per_page: usize,
        at_end: bool,
    ) -> String {
        let position = if total_rows == 0 {
            "Empty".to_string()
        } else if total_rows <= rows_per_page {
            "All".to_string()
        } else if at_end {
            "Bot".to_string()
        } else if scroll_row == 0 {
            "Top".to_string()
        } else {
            let percentage = (scroll_row as f32 / max_scroll as f32) * 100.0;
            format!("{:.0}%", percentage)
        };

        if let Some(ref message) = self.message {
            format!("{} | {} cards | {} | {}", title, card_count, position, message)
        } else {
            format!("{} | {} cards | {}", title, card_count, position)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_layout(heights: &[usize], width: u16, height: u16) -> ViewState {
        let mut state = ViewState::new(width, height);
        state.set_layout(heights);
        state
    }

    #[test]
    fn test_view_state_creation() {
        let state = ViewState::new(80, 24);

        assert_eq!(state.scroll_row, 0);
        assert_eq!(state.card_count(), 0);
        assert_eq!(state.total_rows, 0);
        assert_eq!(state.viewport_width, 80);
        assert_eq!(state.viewport_height, 24);
        assert!(state.visible_cards.is_empty());
        assert!(!state.at_end);
    }

    #[test]
    fn test_layout_offsets_include_gaps() {
        let state = state_with_layout(&[10, 12, 8], 80, 24);

        assert_eq!(state.layout[0], CardSlot { top: 0, height: 10 });
        assert_eq!(state.layout[1], CardSlot { top: 11, height: 12 });
        assert_eq!(state.layout[2], CardSlot { top: 24, height: 8 });
        assert_eq!(state.total_rows, 32);
    }

    #[test]
    fn test_scroll_clamps_to_valid_range() {
        let mut state = state_with_layout(&[10, 10, 10], 80, 11); // 10 content rows
        assert_eq!(state.max_scroll(), 32 - 10);

        state.scroll_to(1000);
        assert_eq!(state.scroll_row, 22);
        assert!(state.at_end);

        state.scroll_by(-5);
        assert_eq!(state.scroll_row, 17);
        assert!(!state.at_end);

        state.scroll_by(-100);
        assert_eq!(state.scroll_row, 0);
    }

    #[test]
    fn test_visible_range_windows_the_list() {
        // Cards at rows [0,10), [11,21), [22,32); 10 content rows visible
        let mut state = state_with_layout(&[10, 10, 10], 80, 11);

        assert_eq!(state.visible_range(), 0..1);

        // Window [5,15) straddles the first gap and both neighbors
        state.scroll_to(5);
        assert_eq!(state.visible_range(), 0..2);

        // Window [11,21) lands exactly on the second card
        state.scroll_to(11);
        assert_eq!(state.visible_range(), 1..2);

        state.scroll_to(1000);
        assert_eq!(state.visible_range(), 2..3);
    }

    #[test]
    fn test_visible_range_is_empty_without_layout() {
        let state = ViewState::new(80, 24);
        assert_eq!(state.visible_range(), 0..0);
    }

    #[test]
    fn test_short_list_fits_entirely() {
        let state = state_with_layout(&[5, 5], 80, 24);
        assert_eq!(state.max_scroll(), 0);
        assert_eq!(state.visible_range(), 0..2);
    }

    #[test]
    fn test_terminal_resize_clears_derived_state() {
        let mut state = state_with_layout(&[10, 10], 80, 24);
        state.scroll_to(3);

        // Same dimensions - nothing changes
        assert!(!state.update_terminal_size(80, 24));
        assert_eq!(state.card_count(), 2);

        // New dimensions - layout and content must be rebuilt
        assert!(state.update_terminal_size(120, 30));
        assert_eq!(state.card_count(), 0);
        assert_eq!(state.total_rows, 0);
        assert!(state.visible_cards.is_empty());
        assert!(!state.at_end);
    }

    #[test]
    fn test_status_line_format() {
        let mut status = StatusLine::new();

        let formatted = status.format_status_line("uplift", 10, 0, 90, 100, 23, false);
        assert_eq!(formatted, "uplift | 10 cards | Top");

        let formatted = status.format_status_line("uplift", 10, 45, 90, 100, 23, false);
        assert_eq!(formatted, "uplift | 10 cards | 50%");

        let formatted = status.format_status_line("uplift", 10, 90, 90, 100, 23, true);
        assert_eq!(formatted, "uplift | 10 cards | Bot");

        let formatted = status.format_status_line("uplift", 0, 0, 0, 0, 23, false);
        assert_eq!(formatted, "uplift | 0 cards | Empty");

        let formatted = status.format_status_line("uplift", 2, 0, 0, 12, 23, false);
        assert_eq!(formatted, "uplift | 2 cards | All");

        status.set_message("Refreshed".to_string());
        let formatted = status.format_status_line("uplift", 10, 0, 90, 100, 23, false);
        assert_eq!(formatted, "uplift | 10 cards | Top | Refreshed");

        status.clear_message();
        let formatted = status.format_status_line("uplift", 10, 0, 90, 100, 23, false);
        assert_eq!(formatted, "uplift | 10 cards | Top");
    }
}
