//! The file-side interface consumed by the widget
//!
//! The selection itself is owned and mutated by the host; the widget
//! takes a plain slice snapshot per interaction and re-reads it on every
//! render, so it tolerates the selection changing between events without
//! the popover closing.

use crate::tags::TagId;
use std::collections::HashSet;

/// A file (or any other entity) that can carry tag associations
///
/// Mutations are synchronous and must be observable on the next read.
pub trait Taggable {
    /// Identifiers of the tags currently attached
    fn tags(&self) -> Vec<TagId>;

    /// Whether the given tag is attached
    fn has_tag(&self, id: TagId) -> bool {
        self.tags().contains(&id)
    }

    /// Attach a tag; attaching an already present tag is a no-op
    fn add_tag(&mut self, id: TagId);

    /// Detach a tag; detaching an absent tag is a no-op
    fn remove_tag(&mut self, id: TagId);
}

/// Minimal `Taggable` implementation for hosts without their own file model
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggedFile {
    /// Display name of the file
    pub name: String,
    tags: HashSet<TagId>,
}

impl TaggedFile {
    /// Create a file with no tags attached
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: HashSet::new(),
        }
    }

    /// Create a file with the given tags attached
    pub fn with_tags(name: impl Into<String>, tags: impl IntoIterator<Item = TagId>) -> Self {
        Self {
            name: name.into(),
            tags: tags.into_iter().collect(),
        }
    }
}

impl Taggable for TaggedFile {
    fn tags(&self) -> Vec<TagId> {
        self.tags.iter().copied().collect()
    }

    fn has_tag(&self, id: TagId) -> bool {
        self.tags.contains(&id)
    }

    fn add_tag(&mut self, id: TagId) {
        self.tags.insert(id);
    }

    fn remove_tag(&mut self, id: TagId) {
        self.tags.remove(&id);
    }
}
