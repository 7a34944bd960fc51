//! Tri-state membership accounting across the current selection
//!
//! For every tag present on at least one selected file, counts how many
//! of the selected files carry it. Counts are recomputed from scratch on
//! every view build rather than incrementally maintained, so the widget
//! never trusts stale state after the host mutates the selection.

use crate::selection::Taggable;
use crate::tags::{Tag, TagCatalog, TagId};
use std::collections::HashMap;

/// Per-tag counts over the selection
///
/// A count of zero is never stored; absent entries mean zero.
#[derive(Debug, Clone, Default)]
pub struct TagMembership {
    counts: HashMap<TagId, usize>,
    applied: Vec<Tag>,
}

impl TagMembership {
    /// Number of selected files carrying the tag
    #[must_use]
    pub fn count(&self, id: TagId) -> usize {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    /// Whether the tag is on at least one selected file
    #[must_use]
    pub fn is_applied(&self, id: TagId) -> bool {
        self.counts.contains_key(&id)
    }

    /// Tags on at least one selected file, sorted alphabetically by name
    ///
    /// Deliberately not catalog order: this feeds the applied-tags summary
    /// bar, which is sorted independently of the searchable list.
    #[must_use]
    pub fn applied(&self) -> &[Tag] {
        &self.applied
    }

    /// Whether no selected file carries any tag
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Count how many selected files carry each tag
///
/// Pure function of its inputs; an empty selection yields an empty
/// membership. Tags attached to files but missing from the catalog are
/// counted but excluded from the applied list, since they have no
/// display data.
#[must_use]
pub fn count_tags<F: Taggable>(selection: &[F], catalog: &TagCatalog) -> TagMembership {
    let mut counts: HashMap<TagId, usize> = HashMap::new();
    for file in selection {
        for id in file.tags() {
            *counts.entry(id).or_insert(0) += 1;
        }
    }

    let mut applied: Vec<Tag> = counts
        .keys()
        .filter_map(|&id| catalog.get(id))
        .cloned()
        .collect();
    applied.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    TagMembership { counts, applied }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::TaggedFile;

    fn catalog() -> TagCatalog {
        TagCatalog::from_tags([
            Tag::new(TagId::new(1), "nature"),
            Tag::new(TagId::new(2), "urgent"),
            Tag::new(TagId::new(3), "archive"),
        ])
    }

    #[test]
    fn test_counts_per_tag() {
        let selection = vec![
            TaggedFile::with_tags("a", [TagId::new(2)]),
            TaggedFile::with_tags("b", [TagId::new(2), TagId::new(3)]),
        ];

        let membership = count_tags(&selection, &catalog());

        assert_eq!(membership.count(TagId::new(2)), 2);
        assert_eq!(membership.count(TagId::new(3)), 1);
        assert_eq!(membership.count(TagId::new(1)), 0);
        assert!(!membership.is_applied(TagId::new(1)));
    }

    #[test]
    fn test_empty_selection() {
        let selection: Vec<TaggedFile> = Vec::new();
        let membership = count_tags(&selection, &catalog());

        assert!(membership.is_empty());
        assert!(membership.applied().is_empty());
    }

    #[test]
    fn test_applied_sorted_alphabetically() {
        // Catalog order is nature, urgent, archive; applied must not be.
        let selection = vec![TaggedFile::with_tags(
            "a",
            [TagId::new(1), TagId::new(2), TagId::new(3)],
        )];

        let membership = count_tags(&selection, &catalog());
        let names: Vec<&str> = membership.applied().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["archive", "nature", "urgent"]);
    }

    #[test]
    fn test_unknown_tag_counted_but_not_listed() {
        let selection = vec![TaggedFile::with_tags("a", [TagId::new(99)])];
        let membership = count_tags(&selection, &catalog());

        assert_eq!(membership.count(TagId::new(99)), 1);
        assert!(membership.applied().is_empty());
    }
}
