//! Widget state for the tag-assignment popover
//!
//! Composes the filter, the roving focus, and the list viewport into the
//! popover's state machine, and builds the per-render view model. The
//! view is re-derived from the live selection and catalog on every
//! render; nothing about either is cached across events.

use crate::filter::TagFilter;
use crate::focus::RoveFocus;
use crate::membership::count_tags;
use crate::selection::Taggable;
use crate::tags::{Tag, TagCatalog, TagId};

/// One row of the filtered tag list
#[derive(Debug, Clone, PartialEq)]
pub struct TagRow {
    /// The tag this row presents
    pub tag: Tag,
    /// Applied to at least one selected file (renders the checkmark)
    pub applied: bool,
    /// Holds the roving focus
    pub focused: bool,
}

/// One chip in the already-applied summary bar
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedTag {
    /// The tag this chip presents
    pub tag: Tag,
    /// Display label: the name, suffixed with ` (n)` only when the
    /// selection holds more than one file
    pub label: String,
}

/// Snapshot view model for one render
#[derive(Debug, Clone, Default)]
pub struct PopoverView {
    /// Current search query, verbatim
    pub query: String,
    /// Byte position of the edit cursor within the query
    pub query_cursor: usize,
    /// Filtered rows in catalog order
    pub rows: Vec<TagRow>,
    /// Applied tags, alphabetical, independent of catalog order
    pub applied: Vec<AppliedTag>,
    /// Number of files in the selection
    pub selection_len: usize,
    /// Total catalog size (for the list title)
    pub catalog_len: usize,
    /// First visible row of the list viewport
    pub scroll_offset: usize,
    /// Whether the search input holds keyboard focus
    pub search_active: bool,
}

/// Apply or remove a tag across every file in the selection
///
/// A two-way toggle keyed on "applied to at least one selected file":
/// if any file carries the tag it is removed from all of them, otherwise
/// it is added to all of them. Both pointer and keyboard activation go
/// through this one path.
pub fn toggle_tag<F: Taggable>(selection: &mut [F], id: TagId) {
    let applied = selection.iter().any(|file| file.has_tag(id));
    for file in selection.iter_mut() {
        if applied {
            file.remove_tag(id);
        } else {
            file.add_tag(id);
        }
    }
}

/// State machine for the popover: filter + roving focus + viewport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopoverState {
    filter: TagFilter,
    focus: RoveFocus,
    scroll_offset: usize,
    /// Height of the visible list area (set during render)
    visible_height: usize,
    /// Whether the search input holds keyboard focus; true on open,
    /// matching the autofocused input of the popover
    search_active: bool,
}

impl Default for PopoverState {
    fn default() -> Self {
        Self::new()
    }
}

impl PopoverState {
    /// Create fresh state with an empty query and no focus
    #[must_use]
    pub fn new() -> Self {
        Self {
            filter: TagFilter::new(),
            focus: RoveFocus::new(),
            scroll_offset: 0,
            visible_height: 10, // Default, updated during render
            search_active: true,
        }
    }

    /// Discard filter and focus state
    ///
    /// Called when the overlay opens; query and focus never persist
    /// across openings.
    pub fn reset(&mut self) {
        self.filter.clear();
        self.focus = RoveFocus::new();
        self.scroll_offset = 0;
        self.search_active = true;
    }

    /// The current search query
    #[must_use]
    pub fn query(&self) -> &str {
        self.filter.query()
    }

    /// The roving focus controller
    #[must_use]
    pub const fn focus(&self) -> &RoveFocus {
        &self.focus
    }

    /// Whether the search input holds keyboard focus
    #[must_use]
    pub const fn search_active(&self) -> bool {
        self.search_active
    }

    /// First visible row of the list viewport
    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Set the height of the visible list area
    ///
    /// Hosts call this with the inner list height before building the
    /// view so scroll-into-view math matches the rendered viewport.
    pub fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height.max(1);
    }

    /// Insert a character into the query and re-anchor the focus
    pub fn query_push(&mut self, c: char, catalog: &TagCatalog) {
        self.filter.push(c);
        self.search_active = true;
        self.reanchor(catalog);
    }

    /// Remove the character before the query cursor and re-anchor
    pub fn query_backspace(&mut self, catalog: &TagCatalog) {
        self.filter.backspace();
        self.search_active = true;
        self.reanchor(catalog);
    }

    /// Clear the query and re-anchor
    pub fn query_clear(&mut self, catalog: &TagCatalog) {
        self.filter.clear();
        self.reanchor(catalog);
    }

    /// Move the query cursor one character left
    pub fn query_cursor_left(&mut self) {
        self.filter.cursor_left();
    }

    /// Move the query cursor one character right
    pub fn query_cursor_right(&mut self) {
        self.filter.cursor_right();
    }

    /// Jump the query cursor to the start of the query
    pub fn query_cursor_home(&mut self) {
        self.filter.cursor_home();
    }

    /// Jump the query cursor to the end of the query
    pub fn query_cursor_end(&mut self) {
        self.filter.cursor_end();
    }

    /// Move the roving focus up one row
    pub fn focus_up(&mut self) {
        self.focus.move_by(-1);
        self.follow_focus();
    }

    /// Move the roving focus down one row
    pub fn focus_down(&mut self) {
        self.focus.move_by(1);
        self.follow_focus();
    }

    /// Move keyboard focus from the search input to the list
    pub fn focus_list(&mut self) {
        self.search_active = false;
        self.follow_focus();
    }

    /// Return keyboard focus to the search input
    pub fn focus_search(&mut self) {
        self.search_active = true;
    }

    /// Toggle the tag under the roving focus across the selection
    ///
    /// Keyboard activation path; returns the toggled tag id, or `None`
    /// when the visible list is empty.
    pub fn activate_focused<F: Taggable>(
        &mut self,
        selection: &mut [F],
        catalog: &TagCatalog,
    ) -> Option<TagId> {
        let visible = self.filter.visible(catalog);
        self.focus.set_size(visible.len());
        let i = self.focus.current()?;
        let id = visible.get(i)?.id;
        toggle_tag(selection, id);
        Some(id)
    }

    /// Toggle the tag at a specific visible row across the selection
    ///
    /// Pointer activation path: the row is focused first so it becomes
    /// authoritative for subsequent keyboard navigation, then the same
    /// toggle as keyboard activation runs.
    pub fn activate_row<F: Taggable>(
        &mut self,
        i: usize,
        selection: &mut [F],
        catalog: &TagCatalog,
    ) -> Option<TagId> {
        let visible = self.filter.visible(catalog);
        self.focus.set_size(visible.len());
        let id = visible.get(i)?.id;
        self.focus.move_to(i);
        toggle_tag(selection, id);
        Some(id)
    }

    /// Build the per-render view model from the live selection and catalog
    pub fn view<F: Taggable>(&mut self, selection: &[F], catalog: &TagCatalog) -> PopoverView {
        let visible = self.filter.visible(catalog);
        self.focus.set_size(visible.len());
        self.clamp_scroll(visible.len());

        let membership = count_tags(selection, catalog);
        let focused = self.focus.current();

        let rows = visible
            .iter()
            .enumerate()
            .map(|(i, tag)| TagRow {
                tag: (*tag).clone(),
                applied: membership.is_applied(tag.id),
                focused: focused == Some(i),
            })
            .collect();

        let applied = membership
            .applied()
            .iter()
            .map(|tag| AppliedTag {
                label: if selection.len() > 1 {
                    format!("{} ({})", tag.name, membership.count(tag.id))
                } else {
                    tag.name.clone()
                },
                tag: tag.clone(),
            })
            .collect();

        PopoverView {
            query: self.filter.query().to_string(),
            query_cursor: self.filter.cursor(),
            rows,
            applied,
            selection_len: selection.len(),
            catalog_len: catalog.len(),
            scroll_offset: self.scroll_offset,
            search_active: self.search_active,
        }
    }

    /// Re-anchor the focus after the visible list changed length
    fn reanchor(&mut self, catalog: &TagCatalog) {
        let n = self.filter.visible(catalog).len();
        self.focus.set_size(n);
        self.clamp_scroll(n);
    }

    /// Scroll the focused row into the viewport
    ///
    /// Skipped entirely while the search input holds keyboard focus, so
    /// a programmatic focus-follow never disturbs active typing.
    fn follow_focus(&mut self) {
        if self.search_active {
            return;
        }
        let Some(i) = self.focus.current() else {
            return;
        };
        if i < self.scroll_offset {
            self.scroll_offset = i;
        } else if i >= self.scroll_offset + self.visible_height {
            self.scroll_offset = i.saturating_sub(self.visible_height - 1);
        }
    }

    /// Keep the scroll offset valid for the current list length
    fn clamp_scroll(&mut self, n: usize) {
        let max_offset = n.saturating_sub(self.visible_height);
        if self.scroll_offset > max_offset {
            self.scroll_offset = max_offset;
        }
    }
}
