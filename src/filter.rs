//! Incremental substring filtering of the tag catalog
//!
//! The query is stored verbatim (no trimming). Matching is plain
//! case-insensitive substring containment — no fuzzy scoring, no
//! ranking — and the visible list always preserves catalog order.

use crate::tags::{Tag, TagCatalog};

/// Search state for the popover's tag list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    query: String,
    /// Byte offset of the edit cursor within `query`
    cursor: usize,
}

impl TagFilter {
    /// Create an empty filter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current query, verbatim as typed
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Byte position of the edit cursor within the query
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the query wholesale, placing the cursor at the end
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.cursor = self.query.len();
    }

    /// Insert a character at the cursor
    pub fn push(&mut self, c: char) {
        self.query.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Remove the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev_char_boundary = self.query[..self.cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.query.remove(prev_char_boundary);
            self.cursor = prev_char_boundary;
        }
    }

    /// Move the cursor one character left
    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.query[..self.cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move the cursor one character right
    pub fn cursor_right(&mut self) {
        if self.cursor < self.query.len() {
            self.cursor = self.query[self.cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.query.len(), |(i, _)| self.cursor + i);
        }
    }

    /// Jump the cursor to the start of the query
    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Jump the cursor to the end of the query
    pub fn cursor_end(&mut self) {
        self.cursor = self.query.len();
    }

    /// Clear the query
    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor = 0;
    }

    /// Whether the query is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Tags visible under the current query, in catalog order
    ///
    /// The whole catalog when the query is empty, else the tags whose
    /// name contains the query case-insensitively. An empty result is a
    /// valid state, rendered as a no-match line by the list widget.
    #[must_use]
    pub fn visible<'a>(&self, catalog: &'a TagCatalog) -> Vec<&'a Tag> {
        if self.query.is_empty() {
            catalog.iter().collect()
        } else {
            let needle = self.query.to_lowercase();
            catalog
                .iter()
                .filter(|tag| tag.name.to_lowercase().contains(&needle))
                .collect()
        }
    }
}
