//! Opaque view-state snapshots.
//!
//! A snapshot is what one node hands back from `capture_state`. Its shape is
//! owned by the node that produced it; the only promise made to the hosting
//! framework is that it serializes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{StateError, StateResult};

/// A captured piece of view state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "v", rename_all = "snake_case")]
pub enum Snapshot {
    /// Positional per-child snapshots (collections).
    List(Vec<Option<Snapshot>>),

    /// Two independent halves (an item's own values and its sub-items).
    Pair(Option<Box<Snapshot>>, Option<Box<Snapshot>>),

    /// Modified property values keyed by property name.
    Bag(BTreeMap<String, Value>),
}

impl Snapshot {
    /// Build a pair, collapsing to `None` when both halves are empty.
    pub fn pair(first: Option<Snapshot>, second: Option<Snapshot>) -> Option<Snapshot> {
        if first.is_none() && second.is_none() {
            return None;
        }
        Some(Snapshot::Pair(first.map(Box::new), second.map(Box::new)))
    }

    /// Build a list, collapsing to `None` when every slot is empty.
    pub fn list(slots: Vec<Option<Snapshot>>) -> Option<Snapshot> {
        if slots.iter().all(Option::is_none) {
            return None;
        }
        Some(Snapshot::List(slots))
    }

    /// Variant name, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Snapshot::List(_) => "list",
            Snapshot::Pair(..) => "pair",
            Snapshot::Bag(_) => "bag",
        }
    }

    pub fn as_list(&self) -> StateResult<&[Option<Snapshot>]> {
        match self {
            Snapshot::List(slots) => Ok(slots),
            other => Err(StateError::Malformed {
                expected: "list",
                found: other.kind(),
            }),
        }
    }

    pub fn as_pair(&self) -> StateResult<(Option<&Snapshot>, Option<&Snapshot>)> {
        match self {
            Snapshot::Pair(first, second) => Ok((first.as_deref(), second.as_deref())),
            other => Err(StateError::Malformed {
                expected: "pair",
                found: other.kind(),
            }),
        }
    }

    pub fn as_bag(&self) -> StateResult<&BTreeMap<String, Value>> {
        match self {
            Snapshot::Bag(values) => Ok(values),
            other => Err(StateError::Malformed {
                expected: "bag",
                found: other.kind(),
            }),
        }
    }
}
