//! Color theme for the popover widgets

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the popover
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the focused row
    pub focus_bg: Color,
    /// Foreground color for the focused row
    pub focus_fg: Color,
    /// Color for the focus indicator (>)
    pub cursor: Color,
    /// Color for the applied checkmark
    pub checkmark: Color,
    /// Fallback color for tags without their own color
    pub tag: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/placeholder text
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            focus_bg: Color::Blue,
            focus_fg: Color::White,
            cursor: Color::Cyan,
            checkmark: Color::Green,
            tag: Color::Magenta,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
        }
    }

    /// Style for the focused row
    #[must_use]
    pub fn focused_style(&self) -> Style {
        Style::default()
            .bg(self.focus_bg)
            .fg(self.focus_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unfocused rows
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the focus indicator (>)
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the applied checkmark
    #[must_use]
    pub fn checkmark_style(&self) -> Style {
        Style::default()
            .fg(self.checkmark)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a tag glyph, honoring the tag's own color
    #[must_use]
    pub fn tag_style(&self, color: Option<Color>) -> Style {
        Style::default().fg(color.unwrap_or(self.tag))
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for dimmed/placeholder text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }
}
