//! Summary bar of tags already applied to the selection

use crate::state::PopoverView;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// One-line bar listing applied tags alphabetically
///
/// Labels already carry their ` (n)` count suffix when the selection
/// holds more than one file; a selection with no tags renders a
/// placeholder instead of an empty bar.
pub struct AppliedBar<'a> {
    view: &'a PopoverView,
    theme: &'a Theme,
}

impl<'a> AppliedBar<'a> {
    /// Create a new applied-tags bar
    #[must_use]
    pub const fn new(view: &'a PopoverView, theme: &'a Theme) -> Self {
        Self { view, theme }
    }
}

impl Widget for AppliedBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Applied ");

        let inner = block.inner(area);
        block.render(area, buf);

        if self.view.applied.is_empty() {
            Paragraph::new("No tags added yet")
                .style(self.theme.dimmed_style())
                .render(inner, buf);
            return;
        }

        let mut spans: Vec<Span> = Vec::new();
        for (i, applied) in self.view.applied.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled("●", self.theme.tag_style(applied.tag.color)));
            spans.push(Span::raw(" "));
            spans.push(Span::raw(applied.label.clone()));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
