//! Card rendering: one record in, one card view out.
//!
//! A card stacks, top to bottom: a border row, a fixed-height art panel, a
//! padding row, the wrapped affirmation text, a padding row, and a border row.
//! The art panel uses a fill-and-crop policy on the character grid: it is
//! center-cropped where it overflows the card and padded with blanks where it
//! falls short, so the panel always fills its slot edge to edge with no
//! letterboxing.
//!
//! Resolution of both resource references happens here; an unresolvable id is
//! a fatal error surfaced through `Result`.

use crate::error::Result;
use crate::model::Affirmation;
use crate::resources::ResourceResolver;
use crate::ui::theme::ColorTheme;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Art panel height in rows, fixed for every card.
pub const ART_HEIGHT: usize = 7;

/// Horizontal padding (columns) around the text block, inside the border.
const TEXT_PAD: usize = 2;

/// Cards narrower than this are not meaningfully renderable; narrower
/// viewports get a clipped card of this width instead.
const MIN_CARD_WIDTH: u16 = 12;

/// Rows that are not art or text: two border rows and two padding rows.
const CHROME_ROWS: usize = 4;

/// A fully materialized card: resolved content shaped to a concrete width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    width: u16,
    text: String,
    art_rows: Vec<String>,
    text_rows: Vec<String>,
}

impl CardView {
    /// Total height in rows, including border and padding rows.
    pub fn height(&self) -> usize {
        self.art_rows.len() + self.text_rows.len() + CHROME_ROWS
    }

    /// Card width in columns.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// The resolved affirmation text, unwrapped.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Art panel rows at the card's inner width.
    pub fn art_rows(&self) -> &[String] {
        &self.art_rows
    }

    /// Wrapped text rows, unpadded.
    pub fn text_rows(&self) -> &[String] {
        &self.text_rows
    }

    /// Plain full-width rows in display order.
    pub fn rows(&self) -> Vec<String> {
        let inner = self.inner_width();
        let mut rows = Vec::with_capacity(self.height());
        rows.push(edge_row('┌', '┐', inner));
        for art in &self.art_rows {
            rows.push(format!("│{art}│"));
        }
        rows.push(blank_row(inner));
        for text in &self.text_rows {
            rows.push(format!("│{}│", pad_text_row(text, inner)));
        }
        rows.push(blank_row(inner));
        rows.push(edge_row('└', '┘', inner));
        rows
    }

    /// Themed rows for the terminal renderer, in display order.
    pub fn styled_rows(&self, theme: &ColorTheme) -> Vec<Line<'static>> {
        let inner = self.inner_width();
        let border = Style::default().fg(theme.card_border);
        let mut lines = Vec::with_capacity(self.height());

        lines.push(Line::from(Span::styled(edge_row('┌', '┐', inner), border)));
        for art in &self.art_rows {
            lines.push(Line::from(vec![
                Span::styled("│".to_string(), border),
                Span::styled(art.clone(), theme.art),
                Span::styled("│".to_string(), border),
            ]));
        }
        lines.push(Line::from(Span::styled(blank_row(inner), border)));
        for text in &self.text_rows {
            lines.push(Line::from(vec![
                Span::styled("│".to_string(), border),
                Span::styled(pad_text_row(text, inner), theme.body_text),
                Span::styled("│".to_string(), border),
            ]));
        }
        lines.push(Line::from(Span::styled(blank_row(inner), border)));
        lines.push(Line::from(Span::styled(edge_row('└', '┘', inner), border)));
        lines
    }

    fn inner_width(&self) -> usize {
        self.width as usize - 2
    }
}

/// Materialize one card at the given width.
pub fn render_card(
    record: &Affirmation,
    resources: &dyn ResourceResolver,
    width: u16,
) -> Result<CardView> {
    let width = width.max(MIN_CARD_WIDTH);
    let inner = width as usize - 2;

    let art = resources.art(record.art)?;
    let text = resources.string(record.text)?;

    Ok(CardView {
        width,
        text: text.to_string(),
        art_rows: fill_crop(art, inner, ART_HEIGHT),
        text_rows: wrap_text(text, inner - 2 * TEXT_PAD),
    })
}

/// Height a card will occupy at the given width, without materializing rows.
///
/// The layout pass calls this for every record; it must agree with
/// [`render_card`] on the resulting height.
pub fn card_height(
    record: &Affirmation,
    resources: &dyn ResourceResolver,
    width: u16,
) -> Result<usize> {
    let width = width.max(MIN_CARD_WIDTH);
    let inner = width as usize - 2;
    let text = resources.string(record.text)?;
    Ok(ART_HEIGHT + wrap_text(text, inner - 2 * TEXT_PAD).len() + CHROME_ROWS)
}

/// Shape an art panel to exactly `width` x `height`: center-crop overflow,
/// center-pad shortfall. Every returned row is exactly `width` chars.
fn fill_crop(source: &str, width: usize, height: usize) -> Vec<String> {
    let lines: Vec<&str> = source.lines().collect();
    let mut rows = Vec::with_capacity(height);

    if lines.len() >= height {
        let start = (lines.len() - height) / 2;
        for line in &lines[start..start + height] {
            rows.push(fit_row(line, width));
        }
    } else {
        let pad_top = (height - lines.len()) / 2;
        for _ in 0..pad_top {
            rows.push(" ".repeat(width));
        }
        for line in &lines {
            rows.push(fit_row(line, width));
        }
        while rows.len() < height {
            rows.push(" ".repeat(width));
        }
    }

    rows
}

fn fit_row(line: &str, width: usize) -> String {
    let len = line.chars().count();
    if len > width {
        let start = (len - width) / 2;
        line.chars().skip(start).take(width).collect()
    } else {
        let left = (width - len) / 2;
        let mut row = " ".repeat(left);
        row.push_str(line);
        row.extend(std::iter::repeat(' ').take(width - left - len));
        row
    }
}

/// Greedy word wrap. Words longer than `width` are hard-split; the result is
/// never empty.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > width {
            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let mut rest = word;
            while rest.chars().count() > width {
                let split = rest
                    .char_indices()
                    .nth(width)
                    .map(|(byte, _)| byte)
                    .expect("split point within word");
                rows.push(rest[..split].to_string());
                rest = &rest[split..];
            }
            current = rest.to_string();
            current_len = current.chars().count();
        } else if current.is_empty() {
            current = word.to_string();
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            rows.push(std::mem::take(&mut current));
            current = word.to_string();
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        rows.push(current);
    }
    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}

fn edge_row(left: char, right: char, inner: usize) -> String {
    let mut row = String::with_capacity(inner + 2);
    row.push(left);
    row.extend(std::iter::repeat('─').take(inner));
    row.push(right);
    row
}

fn blank_row(inner: usize) -> String {
    format!("│{}│", " ".repeat(inner))
}

fn pad_text_row(text: &str, inner: usize) -> String {
    let text_len = text.chars().count();
    let right = inner.saturating_sub(TEXT_PAD + text_len);
    format!("{}{}{}", " ".repeat(TEXT_PAD), text, " ".repeat(right))
}
