//! Keyboard event handling for the popover
//!
//! Maps crossterm key events to state transitions. Pointer and keyboard
//! activation converge on the same toggle path in the state machine;
//! Escape is routed through the overlay before any widget handling so a
//! consumed Escape never reaches another handler.

use crate::overlay::{KeyOutcome, OverlayHost, handle_global_escape};
use crate::selection::Taggable;
use crate::state::PopoverState;
use crate::tags::{TagCatalog, TagId};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

/// Result of handling one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// State may have changed; re-render
    Continue,
    /// Query changed; the visible list was re-derived
    QueryChanged,
    /// A tag was toggled across the selection
    Toggled(TagId),
    /// The popover was closed
    Closed,
    /// No action taken
    Ignored,
}

/// Handle a key event while the popover is open
///
/// Escape is not handled here; it belongs to the overlay (see
/// [`handle_global_escape`]).
pub fn handle_key<F: Taggable>(
    state: &mut PopoverState,
    selection: &mut [F],
    catalog: &TagCatalog,
    key: KeyEvent,
) -> EventResult {
    match (key.code, key.modifiers) {
        // Roving focus
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
            state.focus_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::CONTROL) => {
            state.focus_down();
            EventResult::Continue
        }

        // Hand keyboard focus from the search input to the list and back
        (KeyCode::Tab, _) => {
            state.focus_list();
            EventResult::Continue
        }
        (KeyCode::BackTab, _) => {
            state.focus_search();
            EventResult::Continue
        }

        // Activate the focused row
        (KeyCode::Enter, _) => match state.activate_focused(selection, catalog) {
            Some(id) => EventResult::Toggled(id),
            None => EventResult::Ignored,
        },

        // Query editing
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c, catalog);
            EventResult::QueryChanged
        }
        (KeyCode::Backspace, _) => {
            if state.query().is_empty() {
                EventResult::Ignored
            } else {
                state.query_backspace(catalog);
                EventResult::QueryChanged
            }
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            if state.query().is_empty() {
                EventResult::Ignored
            } else {
                state.query_clear(catalog);
                EventResult::QueryChanged
            }
        }
        (KeyCode::Left, _) => {
            state.query_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.query_cursor_right();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.query_cursor_home();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.query_cursor_end();
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Poll for one terminal event and route it through overlay and widget
///
/// Escape goes to the overlay first: while open it requests a close
/// exactly once and is consumed, so it never also reaches the widget.
/// Other keys reach the widget only while the overlay is open.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle<F: Taggable, H: OverlayHost>(
    state: &mut PopoverState,
    selection: &mut [F],
    catalog: &TagCatalog,
    host: &mut H,
    timeout: Duration,
) -> crate::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => {
            if handle_global_escape(host, &key) == KeyOutcome::Consumed {
                EventResult::Closed
            } else if host.is_open() {
                handle_key(state, selection, catalog, key)
            } else {
                EventResult::Ignored
            }
        }
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}
