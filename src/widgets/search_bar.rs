//! Search bar widget for the tag query

use crate::state::PopoverView;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar that displays the query with an edit cursor
pub struct SearchBar<'a> {
    view: &'a PopoverView,
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(view: &'a PopoverView, theme: &'a Theme) -> Self {
        Self { view, theme }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.view.search_active {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search ");

        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.view.query.is_empty() {
            Line::from(vec![
                Span::styled(
                    "│",
                    Style::default().add_modifier(Modifier::SLOW_BLINK),
                ),
                Span::styled("Type to filter tags", self.theme.dimmed_style()),
            ])
        } else {
            let (before, after) = self.view.query.split_at(self.view.query_cursor);
            Line::from(vec![
                Span::raw(before),
                Span::styled(
                    "│",
                    Style::default().add_modifier(Modifier::SLOW_BLINK),
                ),
                Span::raw(after),
            ])
        };

        Paragraph::new(line).render(inner, buf);
    }
}
