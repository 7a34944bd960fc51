//! Filtered tag list widget with focus and applied indicators

use crate::state::PopoverView;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

/// List of the tags visible under the current query
///
/// Each row carries a focus indicator, a colored tag glyph, the name,
/// and a checkmark when the tag sits on at least one selected file. An
/// empty match renders a no-match line instead of a bare empty list.
pub struct TagList<'a> {
    view: &'a PopoverView,
    theme: &'a Theme,
    title: String,
}

impl<'a> TagList<'a> {
    /// Create a new tag list widget
    #[must_use]
    pub fn new(view: &'a PopoverView, theme: &'a Theme) -> Self {
        let visible = view.rows.len();
        let total = view.catalog_len;
        let title = format!(" Tags ({visible}/{total}) ");

        Self { view, theme, title }
    }

    /// Set a custom title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    fn render_row(&self, row: &crate::state::TagRow) -> ListItem<'a> {
        let cursor_char = if row.focused { ">" } else { " " };
        let check_char = if row.applied { "✓" } else { " " };

        let text_style = if row.focused {
            self.theme.focused_style()
        } else {
            self.theme.normal_style()
        };

        let line = Line::from(vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled("●", self.theme.tag_style(row.tag.color)),
            Span::raw(" "),
            Span::styled(row.tag.name.clone(), text_style),
            Span::raw(" "),
            Span::styled(check_char, self.theme.checkmark_style()),
        ]);

        if row.focused {
            ListItem::new(line).style(self.theme.focused_style())
        } else {
            ListItem::new(line)
        }
    }
}

impl Widget for TagList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.view.rows.is_empty() {
            let text = format!("No tags found matching \"{}\"", self.view.query);
            Paragraph::new(text)
                .style(self.theme.dimmed_style())
                .render(inner, buf);
            return;
        }

        // Slice the viewport out of the full row list
        let visible_height = inner.height as usize;
        let start = self.view.scroll_offset.min(self.view.rows.len().saturating_sub(1));
        let end = (start + visible_height).min(self.view.rows.len());

        let items: Vec<ListItem> = self.view.rows[start..end]
            .iter()
            .map(|row| self.render_row(row))
            .collect();

        List::new(items).render(inner, buf);
    }
}
