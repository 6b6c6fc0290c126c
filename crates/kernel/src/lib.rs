//! menustate kernel library
//!
//! Hierarchical menu item collections and the view-state protocol that
//! carries them across page round-trips. The `menustate` binary drives the
//! protocol from the command line.

pub mod config;
pub mod definition;
pub mod menu;
pub mod viewstate;

pub use config::Config;
pub use definition::{DefinitionError, ItemDefinition, MenuDefinition};
pub use menu::{
    CollectionId, CollectionMut, CollectionRef, ItemId, Menu, MenuError, MenuItem, MenuResult,
    MenuTree, MenuType,
};
pub use viewstate::{Codec, Snapshot, StateBag, StateError, StateResult, ViewState};
