//! Tag identity and the catalog of assignable tags
//!
//! The catalog is owned by the host application; this crate only reads
//! it. It is an ordered, de-duplicated sequence — the order the host
//! hands over is the order the filtered list preserves.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stable, opaque identifier for a tag
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TagId(u64);

impl TagId {
    /// Create an identifier from a raw value
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw value backing this identifier
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// A named, optionally colored marker that can be attached to files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Unique identifier
    pub id: TagId,
    /// Display name, matched against the search query
    pub name: String,
    /// Display color; widgets fall back to the theme's tag color
    pub color: Option<Color>,
}

impl Tag {
    /// Create a tag with no display color
    pub fn new(id: TagId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: None,
        }
    }

    /// Set the display color
    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Ordered, de-duplicated collection of the tags available for assignment
///
/// Duplicates (by id) keep the first occurrence. Any root/sentinel tag the
/// host uses internally must be left out before handing the catalog over.
/// Serialize the tag sequence itself and rebuild with [`TagCatalog::from_tags`].
#[derive(Debug, Clone, Default)]
pub struct TagCatalog {
    tags: Vec<Tag>,
    /// id → position in `tags`, maintained on every insertion
    index: HashMap<TagId, usize>,
}

impl TagCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from an ordered sequence of tags
    pub fn from_tags(tags: impl IntoIterator<Item = Tag>) -> Self {
        let mut catalog = Self::new();
        for tag in tags {
            catalog.push(tag);
        }
        catalog
    }

    /// Append a tag, ignoring duplicates of an already present id
    pub fn push(&mut self, tag: Tag) {
        if self.index.contains_key(&tag.id) {
            return;
        }
        self.index.insert(tag.id, self.tags.len());
        self.tags.push(tag);
    }

    /// Look up a tag by id
    #[must_use]
    pub fn get(&self, id: TagId) -> Option<&Tag> {
        self.index.get(&id).and_then(|&pos| self.tags.get(pos))
    }

    /// All tags in catalog order
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Number of tags in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether the catalog holds no tags
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterate over tags in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }
}

impl<'a> IntoIterator for &'a TagCatalog {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
