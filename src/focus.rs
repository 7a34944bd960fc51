//! Roving keyboard focus over the filtered tag list
//!
//! A single focused index range-checked against the live list size.
//! When filtering shrinks the list below the focused index the focus
//! clamps to the last valid row instead of resetting to the top, so
//! keyboard position survives a keystroke.

/// Single focused index over a dynamically resized list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoveFocus {
    index: Option<usize>,
    size: usize,
}

impl RoveFocus {
    /// Create an unfocused controller over an empty list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-anchor against the live list length
    ///
    /// An empty list clears the focus; a non-empty list anchors an
    /// unfocused controller at the first row and clamps an out-of-range
    /// index to the last row.
    pub fn set_size(&mut self, n: usize) {
        self.size = n;
        self.index = match (self.index, n) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), n) if i >= n => Some(n - 1),
            (keep, _) => keep,
        };
    }

    /// Move the focus by a signed delta, clamped to the list bounds
    ///
    /// No wraparound: moving past either end stays at that end.
    pub fn move_by(&mut self, delta: isize) {
        if self.size == 0 {
            return;
        }
        let current = self.index.unwrap_or(0);
        let next = if delta.is_negative() {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            (current + delta.unsigned_abs()).min(self.size - 1)
        };
        self.index = Some(next);
    }

    /// Focus a specific row, clamped into range
    ///
    /// Used on pointer activation so a clicked row becomes authoritative
    /// for subsequent keyboard navigation.
    pub fn move_to(&mut self, i: usize) {
        if self.size > 0 {
            self.index = Some(i.min(self.size - 1));
        }
    }

    /// The focused index, or `None` when the list is empty
    #[must_use]
    pub const fn current(&self) -> Option<usize> {
        self.index
    }

    /// The list size the focus is currently ranged against
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }
}
