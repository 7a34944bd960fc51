//! Composed floating popover dialog

use crate::state::PopoverView;
use crate::theme::Theme;
use crate::widgets::{AppliedBar, SearchBar, TagList};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// The floating tag-assignment dialog
///
/// Renders nothing at all while closed: a closed popover leaves no
/// footprint in the buffer and cannot intercept input, rather than being
/// drawn invisibly.
pub struct Popover<'a> {
    view: &'a PopoverView,
    theme: &'a Theme,
    open: bool,
}

impl<'a> Popover<'a> {
    /// Create a new popover widget
    #[must_use]
    pub const fn new(view: &'a PopoverView, theme: &'a Theme, open: bool) -> Self {
        Self { view, theme, open }
    }

    /// Calculate the centered area for the dialog
    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }
}

impl Widget for Popover<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.open {
            return;
        }

        let popup_area = Self::centered_rect(50, 70, area);

        // Clear the background
        Clear.render(popup_area, buf);

        let title = if self.view.selection_len == 1 {
            " Tag selected file ".to_string()
        } else {
            format!(" Tag {} selected files ", self.view.selection_len)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(title)
            .title_alignment(Alignment::Center);

        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Tag list
            Constraint::Length(3), // Applied bar
            Constraint::Length(1), // Help
        ])
        .split(inner);

        SearchBar::new(self.view, self.theme).render(chunks[0], buf);
        TagList::new(self.view, self.theme).render(chunks[1], buf);
        AppliedBar::new(self.view, self.theme).render(chunks[2], buf);

        let help = Paragraph::new("↑↓: navigate | Enter: toggle tag | Esc: close")
            .style(self.theme.dimmed_style())
            .alignment(Alignment::Center);
        help.render(chunks[3], buf);
    }
}
