//! The set of logs currently selected for display.

use std::collections::HashSet;

use trailmap_core::models::LogId;

use crate::store::LogStore;

/// Outcome of a selection toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Activated,
    Deactivated,
}

/// Identifiers currently active for rendering.
///
/// Always a subset of the identifiers known to the record store.
#[derive(Debug, Default)]
pub struct SelectionSet {
    active: HashSet<LogId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self, id: &LogId) -> bool {
        self.active.contains(id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Iterate the active identifiers (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &LogId> + '_ {
        self.active.iter()
    }

    /// Toggle a known identifier; unknown identifiers are rejected so the
    /// selection stays a subset of the catalog.
    pub fn toggle(&mut self, store: &LogStore, id: &LogId) -> Option<SelectionChange> {
        if !store.contains(id) {
            return None;
        }
        if self.active.remove(id) {
            Some(SelectionChange::Deactivated)
        } else {
            self.active.insert(id.clone());
            Some(SelectionChange::Activated)
        }
    }

    /// Drop identifiers no longer known to the store (after a reset).
    pub fn retain_known(&mut self, store: &LogStore) {
        self.active.retain(|id| store.contains(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trailmap_core::models::LogSummary;

    fn store_of(ids: &[&str]) -> LogStore {
        let mut store = LogStore::new();
        store.merge_summaries(ids.iter().map(|id| LogSummary::bare(LogId::from(*id))).collect());
        store
    }

    #[test]
    fn test_toggle_cycles_activation() {
        let store = store_of(&["X"]);
        let mut selection = SelectionSet::new();
        let id = LogId::from("X");

        assert_eq!(selection.toggle(&store, &id), Some(SelectionChange::Activated));
        assert!(selection.is_active(&id));
        assert_eq!(selection.toggle(&store, &id), Some(SelectionChange::Deactivated));
        assert!(!selection.is_active(&id));
    }

    #[test]
    fn test_unknown_identifiers_are_rejected() {
        let store = store_of(&["X"]);
        let mut selection = SelectionSet::new();

        assert_eq!(selection.toggle(&store, &LogId::from("ghost")), None);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_retain_known_prunes_after_a_reset() {
        let mut store = store_of(&["X", "Y"]);
        let mut selection = SelectionSet::new();
        selection.toggle(&store, &LogId::from("X"));
        selection.toggle(&store, &LogId::from("Y"));

        store.clear();
        store.merge_summaries(vec![LogSummary::bare(LogId::from("Y"))]);
        selection.retain_known(&store);

        assert!(!selection.is_active(&LogId::from("X")));
        assert!(selection.is_active(&LogId::from("Y")));
    }
}
