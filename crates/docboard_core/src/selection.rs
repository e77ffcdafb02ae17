use std::collections::BTreeSet;

use crate::DocumentId;

/// Selected row identifiers for bulk actions.
///
/// The set only knows identifiers; eligibility and membership in the Row
/// Store are enforced by the owner through `select_all` and `retain_known`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    ids: BTreeSet<DocumentId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` if absent, removes it otherwise. Returns whether it is now selected.
    pub fn toggle(&mut self, id: DocumentId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn select_all<I>(&mut self, checked: bool, eligible_ids: I)
    where
        I: IntoIterator<Item = DocumentId>,
    {
        self.ids.clear();
        if checked {
            self.ids.extend(eligible_ids);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drops identifiers for which `is_known` is false. Returns how many were dropped.
    pub fn retain_known<F>(&mut self, mut is_known: F) -> usize
    where
        F: FnMut(DocumentId) -> bool,
    {
        let before = self.ids.len();
        self.ids.retain(|id| is_known(*id));
        before - self.ids.len()
    }

    pub fn contains(&self, id: DocumentId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.ids.iter().copied()
    }
}
