//! Tagpop - a tag-assignment popover widget for ratatui TUIs
//!
//! This library provides the state machine and rendering for a transient
//! popover that applies or removes a shared tag across a set of selected
//! files: incremental substring filtering of a tag catalog, tri-state
//! membership accounting over the selection (a tag can sit on all, some,
//! or none of the selected files), keyboard roving focus over the
//! filtered list, and an open/close lifecycle with a global Escape path.
//!
//! The host application owns the terminal, the event loop, the file
//! entities, and the catalog. It hands the widget a snapshot of the
//! selection on every interaction; the widget never caches selection or
//! catalog contents across events, so external mutation between events
//! is always picked up on the next render.
//!
//! # Usage
//!
//! ```no_run
//! use std::time::Duration;
//! use tagpop::{
//!     Overlay, Popover, PopoverState, Tag, TagCatalog, TagId, TaggedFile, Theme,
//!     events::{self, EventResult},
//! };
//!
//! let catalog = TagCatalog::from_tags([
//!     Tag::new(TagId::new(1), "urgent"),
//!     Tag::new(TagId::new(2), "archive"),
//! ]);
//! let mut selection = vec![TaggedFile::new("a.jpg"), TaggedFile::new("b.jpg")];
//!
//! let mut overlay = Overlay::new();
//! let mut state = PopoverState::new();
//! let theme = Theme::default();
//!
//! overlay.open(&mut state);
//! while overlay.is_open() {
//!     let view = state.view(&selection, &catalog);
//!     // terminal.draw(|f| f.render_widget(Popover::new(&view, &theme, true), f.area()))?;
//!     match events::poll_and_handle(
//!         &mut state,
//!         &mut selection,
//!         &catalog,
//!         &mut overlay,
//!         Duration::from_millis(100),
//!     ) {
//!         Ok(EventResult::Closed) => break,
//!         Ok(_) => {}
//!         Err(e) => panic!("event polling failed: {e}"),
//!     }
//! }
//! ```

use thiserror::Error;

pub mod events;
pub mod filter;
pub mod focus;
pub mod membership;
pub mod overlay;
pub mod selection;
pub mod state;
pub mod tags;
pub mod theme;
pub mod widgets;

/// Error enum, contains all failure states of the widget
#[derive(Debug, Error)]
pub enum PopoverError {
    /// Represents an I/O error from terminal event polling
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for popover operations
pub type Result<T> = std::result::Result<T, PopoverError>;

pub use events::EventResult;
pub use filter::TagFilter;
pub use focus::RoveFocus;
pub use membership::{TagMembership, count_tags};
pub use overlay::{KeyOutcome, Overlay, OverlayHost, handle_global_escape};
pub use selection::{TaggedFile, Taggable};
pub use state::{AppliedTag, PopoverState, PopoverView, TagRow, toggle_tag};
pub use tags::{Tag, TagCatalog, TagId};
pub use theme::Theme;
pub use widgets::{AppliedBar, Popover, SearchBar, TagList};
