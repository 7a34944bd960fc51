//! Integration tests for the tag-assignment popover
//!
//! Drives the widget end to end through the public API: open the
//! overlay, filter, navigate, toggle tags across a multi-file selection,
//! and close on Escape.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tagpop::{
    EventResult, KeyOutcome, Overlay, OverlayHost, PopoverState, Tag, TagCatalog, TagId,
    Taggable, TaggedFile, events, handle_global_escape,
};

const NATURE: TagId = TagId::new(1);
const URGENT: TagId = TagId::new(2);
const ARCHIVE: TagId = TagId::new(3);

fn catalog() -> TagCatalog {
    TagCatalog::from_tags([
        Tag::new(NATURE, "nature"),
        Tag::new(URGENT, "urgent"),
        Tag::new(ARCHIVE, "archive"),
    ])
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Two files sharing "urgent", one also carrying "archive"
fn selection() -> Vec<TaggedFile> {
    vec![
        TaggedFile::with_tags("item1", [URGENT]),
        TaggedFile::with_tags("item2", [URGENT, ARCHIVE]),
    ]
}

#[test]
fn test_summary_counts_and_toggle_removal() {
    let mut state = PopoverState::new();
    let mut files = selection();
    let cat = catalog();

    let view = state.view(&files, &cat);
    let labels: Vec<&str> = view.applied.iter().map(|a| a.label.as_str()).collect();
    assert_eq!(labels, vec!["archive (1)", "urgent (2)"]);

    // Activate "urgent" (row index 1 in catalog order): removed from both
    state.activate_row(1, &mut files, &cat);
    assert!(!files[0].has_tag(URGENT));
    assert!(!files[1].has_tag(URGENT));

    let view = state.view(&files, &cat);
    let labels: Vec<&str> = view.applied.iter().map(|a| a.label.as_str()).collect();
    assert_eq!(labels, vec!["archive (1)"]);
}

#[test]
fn test_query_narrows_to_substring_matches() {
    let mut state = PopoverState::new();
    let files = selection();
    let cat = catalog();

    state.query_push('a', &cat);
    state.query_push('r', &cat);

    let view = state.view(&files, &cat);
    let names: Vec<&str> = view.rows.iter().map(|r| r.tag.name.as_str()).collect();
    assert_eq!(names, vec!["archive"]);
}

#[test]
fn test_single_selection_shows_bare_name() {
    let mut state = PopoverState::new();
    let files = vec![TaggedFile::with_tags("item1", [NATURE])];
    let cat = catalog();

    let view = state.view(&files, &cat);
    assert_eq!(view.applied.len(), 1);
    assert_eq!(view.applied[0].label, "nature");
}

#[test]
fn test_escape_closes_once_and_is_consumed() {
    struct Toolbar {
        open: bool,
        close_requests: usize,
    }

    impl OverlayHost for Toolbar {
        fn is_open(&self) -> bool {
            self.open
        }

        fn request_open(&mut self) {
            self.open = true;
        }

        fn request_close(&mut self) {
            self.open = false;
            self.close_requests += 1;
        }
    }

    let mut toolbar = Toolbar {
        open: true,
        close_requests: 0,
    };

    let outcome = handle_global_escape(&mut toolbar, &key(KeyCode::Esc));
    assert_eq!(outcome, KeyOutcome::Consumed);
    assert_eq!(toolbar.close_requests, 1);

    // A second Escape arrives while closed: passed through, no new request
    let outcome = handle_global_escape(&mut toolbar, &key(KeyCode::Esc));
    assert_eq!(outcome, KeyOutcome::Passed);
    assert_eq!(toolbar.close_requests, 1);
}

#[test]
fn test_filter_shrink_clamps_focus_to_last_row() {
    let cat = TagCatalog::from_tags([
        Tag::new(TagId::new(1), "red"),
        Tag::new(TagId::new(2), "orange"),
        Tag::new(TagId::new(3), "green"),
        Tag::new(TagId::new(4), "grey"),
        Tag::new(TagId::new(5), "gold"),
    ]);
    let files: Vec<TaggedFile> = Vec::new();
    let mut state = PopoverState::new();
    let _ = state.view(&files, &cat);

    // Focus the last of five rows
    for _ in 0..4 {
        state.focus_down();
    }
    assert_eq!(state.focus().current(), Some(4));

    // "gr" keeps green and grey: five rows drop to two, focus clamps to 1
    state.query_push('g', &cat);
    state.query_push('r', &cat);
    assert_eq!(state.focus().current(), Some(1));

    let view = state.view(&files, &cat);
    assert!(view.rows[1].focused);
}

#[test]
fn test_keyboard_flow_toggles_via_events() {
    let mut state = PopoverState::new();
    let mut files = selection();
    let cat = catalog();
    let _ = state.view(&files, &cat);

    // Down to "urgent", Enter removes it from both files
    events::handle_key(&mut state, &mut files, &cat, key(KeyCode::Down));
    let result = events::handle_key(&mut state, &mut files, &cat, key(KeyCode::Enter));
    assert_eq!(result, EventResult::Toggled(URGENT));
    assert!(files.iter().all(|f| !f.has_tag(URGENT)));

    // Enter again re-applies it to both
    let result = events::handle_key(&mut state, &mut files, &cat, key(KeyCode::Enter));
    assert_eq!(result, EventResult::Toggled(URGENT));
    assert!(files.iter().all(|f| f.has_tag(URGENT)));
}

#[test]
fn test_overlay_reopen_gets_fresh_state() {
    let mut overlay = Overlay::new();
    let mut state = PopoverState::new();
    let cat = catalog();

    overlay.open(&mut state);
    state.query_push('u', &cat);
    state.focus_list();
    assert_eq!(state.query(), "u");

    handle_global_escape(&mut overlay, &key(KeyCode::Esc));
    assert!(!overlay.is_open());

    overlay.open(&mut state);
    assert!(state.query().is_empty());
    assert_eq!(state.focus().current(), None);
    assert!(state.search_active());
}

#[test]
fn test_selection_mutated_between_events_is_picked_up() {
    let mut state = PopoverState::new();
    let mut files = selection();
    let cat = catalog();

    let view = state.view(&files, &cat);
    assert_eq!(view.selection_len, 2);

    // The host mutates the selection while the popover stays open
    files.push(TaggedFile::with_tags("item3", [URGENT]));

    let view = state.view(&files, &cat);
    assert_eq!(view.selection_len, 3);
    let urgent = view.applied.iter().find(|a| a.tag.id == URGENT).unwrap();
    assert_eq!(urgent.label, "urgent (3)");
}

#[test]
fn test_membership_matches_per_file_associations() {
    let files = selection();
    let cat = catalog();

    let membership = tagpop::count_tags(&files, &cat);
    for tag in cat.iter() {
        let expected = files.iter().filter(|f| f.has_tag(tag.id)).count();
        assert_eq!(membership.count(tag.id), expected);
        assert_eq!(membership.is_applied(tag.id), expected > 0);
    }
}

#[test]
fn test_visible_rows_preserve_catalog_order_under_query() {
    let cat = TagCatalog::from_tags([
        Tag::new(TagId::new(1), "travel"),
        Tag::new(TagId::new(2), "portrait"),
        Tag::new(TagId::new(3), "art"),
        Tag::new(TagId::new(4), "cartoon"),
    ]);
    let files: Vec<TaggedFile> = Vec::new();
    let mut state = PopoverState::new();

    state.query_push('a', &cat);
    state.query_push('r', &cat);

    let view = state.view(&files, &cat);
    let names: Vec<&str> = view.rows.iter().map(|r| r.tag.name.as_str()).collect();
    // Subset of the catalog, in catalog order, every name containing "ar"
    assert_eq!(names, vec!["art", "cartoon"]);
    assert!(names.iter().all(|n| n.contains("ar")));
}
