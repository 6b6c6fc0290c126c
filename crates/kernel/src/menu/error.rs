//! Menu collection error types.

use thiserror::Error;

use super::tree::{CollectionId, ItemId};

/// Contract violations raised by menu item collections.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    /// Positional access outside the collection.
    #[error("index {index} is out of range for a collection of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// The item already belongs to a collection; remove it there first.
    #[error("{item} is already attached to {collection}")]
    ItemAttached {
        item: ItemId,
        collection: CollectionId,
    },

    /// The item owns (directly or transitively) the target collection.
    #[error("{item} cannot be added beneath itself")]
    Cycle { item: ItemId },

    /// `copy_to` destination cannot hold the collection.
    #[error("destination has {available} slots after offset {offset}, {required} required")]
    DestinationTooSmall {
        offset: usize,
        available: usize,
        required: usize,
    },
}

/// Result type alias using MenuError.
pub type MenuResult<T> = Result<T, MenuError>;
