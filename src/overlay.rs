//! Open/close lifecycle for the floating popover
//!
//! The trigger (typically a toolbar button) owns visibility; the widget
//! reads it and asks for a close rather than flipping it directly. An
//! Escape observed anywhere while the popover is open closes it and is
//! consumed so it never reaches another handler.
//!
//! There is no unmanaged global handler: a key only reaches the overlay
//! through [`handle_global_escape`], which the host calls while the
//! toolbar widget is mounted. The [`Overlay`] value is the subscription
//! scope — construct it on mount, drop it on teardown, and no Escape
//! handling outlives it.

use crate::state::PopoverState;
use crossterm::event::{KeyCode, KeyEvent};

/// Trigger-side interface: a visibility flag plus open/close callbacks
///
/// The host implements this (or uses [`Overlay`]); the widget only reads
/// `is_open` and calls `request_close`.
pub trait OverlayHost {
    /// Whether the popover is currently presented
    fn is_open(&self) -> bool;

    /// Ask the trigger to open the popover
    fn request_open(&mut self);

    /// Ask the trigger to close the popover
    fn request_close(&mut self);
}

/// Whether a globally observed key was consumed by the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key closed the overlay; do not propagate it further
    Consumed,
    /// Not an overlay key; let it propagate
    Passed,
}

/// Dispatch a globally observed key to the overlay
///
/// An Escape while the overlay is open requests a close exactly once and
/// reports [`KeyOutcome::Consumed`]; hosts must stop propagating a
/// consumed key. Every other key, and any key while closed, passes
/// through untouched.
pub fn handle_global_escape<H: OverlayHost>(host: &mut H, key: &KeyEvent) -> KeyOutcome {
    if host.is_open() && key.code == KeyCode::Esc {
        host.request_close();
        KeyOutcome::Consumed
    } else {
        KeyOutcome::Passed
    }
}

/// Default overlay host: a plain open flag
///
/// Opening through [`Overlay::open`] resets the widget state so the
/// query and focus never persist across openings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlay {
    open: bool,
}

impl Overlay {
    /// Create a closed overlay
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the popover with fresh widget state
    pub fn open(&mut self, state: &mut PopoverState) {
        if !self.open {
            self.open = true;
            state.reset();
        }
    }

    /// Close the popover
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Whether the popover is currently presented
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }
}

impl OverlayHost for Overlay {
    fn is_open(&self) -> bool {
        self.open
    }

    fn request_open(&mut self) {
        self.open = true;
    }

    fn request_close(&mut self) {
        self.open = false;
    }
}
