//! Property bag with per-entry change tracking.

use std::collections::BTreeMap;

use serde_json::Value;

use super::error::StateResult;
use super::snapshot::Snapshot;

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    value: Value,
    dirty: bool,
}

/// Keyed property values that remember which entries changed after
/// tracking began.
///
/// Values assigned before [`StateBag::track`] are the declarative baseline
/// and are not persisted; values assigned afterwards are.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateBag {
    entries: BTreeMap<String, Entry>,
    tracking: bool,
}

impl StateBag {
    /// Create an empty, untracked bag.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Get a string value, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Set a value. The entry becomes dirty when the bag is tracking.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let dirty = self.tracking;
        self.entries.insert(
            key.into(),
            Entry {
                value: value.into(),
                dirty,
            },
        );
    }

    /// Remove a value, returning it.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key).map(|entry| entry.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_dirty(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|entry| entry.dirty)
    }

    /// Mark every entry as modified (or unmodified).
    pub fn set_dirty(&mut self, dirty: bool) {
        for entry in self.entries.values_mut() {
            entry.dirty = dirty;
        }
    }

    /// Start recording modifications.
    pub fn track(&mut self) {
        self.tracking = true;
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the dirty entries, or `None` when nothing changed.
    pub fn save(&self) -> Option<Snapshot> {
        let dirty: BTreeMap<String, Value> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.dirty)
            .map(|(key, entry)| (key.clone(), entry.value.clone()))
            .collect();

        if dirty.is_empty() {
            None
        } else {
            Some(Snapshot::Bag(dirty))
        }
    }

    /// Apply a snapshot produced by [`StateBag::save`].
    ///
    /// Loaded values go through [`StateBag::set`], so a tracking bag keeps
    /// them dirty and persists them again on the next capture.
    pub fn load(&mut self, snapshot: &Snapshot) -> StateResult<()> {
        for (key, value) in snapshot.as_bag()? {
            self.set(key.clone(), value.clone());
        }
        Ok(())
    }
}
