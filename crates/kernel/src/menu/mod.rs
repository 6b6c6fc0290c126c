//! Hierarchical menu items with view-state persistence.
//!
//! A [`Menu`] owns a [`MenuTree`] arena. Collections are ordered and looked
//! up by position, by identity, or by item name; each item may own one
//! collection of sub-items, nested to any depth. Items and collections take
//! part in the [`ViewState`](crate::viewstate::ViewState) protocol.

mod collection;
mod control;
mod error;
mod item;
mod tree;

pub use collection::{CollectionMut, CollectionRef, MenuItemCollection};
pub use control::{Menu, PATH_SEPARATOR};
pub use error::{MenuError, MenuResult};
pub use item::{MenuItem, MenuType, keys};
pub use tree::{CollectionId, ItemId, MenuTree, Node};
