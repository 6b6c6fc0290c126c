//! Arena holding every item and collection of one menu.
//!
//! Items and collections reference each other by index: an item knows the
//! collection it is attached to and the collection holding its sub-items; a
//! collection knows the item that owns it. Nodes are never freed while the
//! tree lives, so handles stay valid after an item is removed.

use std::fmt;

use crate::viewstate::{Snapshot, StateResult, ViewState};

use super::collection::{CollectionMut, CollectionRef, MenuItemCollection};
use super::error::{MenuError, MenuResult};
use super::item::MenuItem;

/// Identity of an item within its [`MenuTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u32);

/// Identity of a collection within its [`MenuTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollectionId(u32);

impl ItemId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl CollectionId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item #{}", self.0)
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "collection #{}", self.0)
    }
}

/// Either kind of tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    Item(ItemId),
    Collection(CollectionId),
}

impl From<ItemId> for Node {
    fn from(id: ItemId) -> Self {
        Node::Item(id)
    }
}

impl From<CollectionId> for Node {
    fn from(id: CollectionId) -> Self {
        Node::Collection(id)
    }
}

#[derive(Debug, Clone)]
struct ItemNode {
    item: MenuItem,
    parent: Option<CollectionId>,
    sub_items: Option<CollectionId>,
}

#[derive(Debug, Clone)]
struct CollectionNode {
    collection: MenuItemCollection,
    owner: Option<ItemId>,
}

/// Owner of all menu nodes.
///
/// Handles are only meaningful for the tree that minted them; passing a
/// handle from another tree panics on out-of-bounds access or silently
/// addresses an unrelated node.
#[derive(Debug, Clone, Default)]
pub struct MenuTree {
    items: Vec<ItemNode>,
    collections: Vec<CollectionNode>,
}

impl MenuTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a detached item with default properties.
    pub fn new_item(&mut self) -> ItemId {
        self.insert_item(MenuItem::new())
    }

    /// Move an item into the tree, detached.
    pub fn insert_item(&mut self, item: MenuItem) -> ItemId {
        let id = ItemId(next_id(self.items.len()));
        self.items.push(ItemNode {
            item,
            parent: None,
            sub_items: None,
        });
        id
    }

    /// Allocate an empty collection not owned by any item.
    pub fn new_collection(&mut self) -> CollectionId {
        self.alloc_collection(None)
    }

    fn alloc_collection(&mut self, owner: Option<ItemId>) -> CollectionId {
        let id = CollectionId(next_id(self.collections.len()));
        self.collections.push(CollectionNode {
            collection: MenuItemCollection::default(),
            owner,
        });
        id
    }

    pub fn item(&self, id: ItemId) -> &MenuItem {
        &self.items[id.index()].item
    }

    pub fn item_mut(&mut self, id: ItemId) -> &mut MenuItem {
        &mut self.items[id.index()].item
    }

    /// Collection the item is currently attached to.
    pub fn parent(&self, id: ItemId) -> Option<CollectionId> {
        self.items[id.index()].parent
    }

    /// Item that owns the collection, `None` for a root collection.
    pub fn owner(&self, id: CollectionId) -> Option<ItemId> {
        self.collections[id.index()].owner
    }

    /// The item's sub-item collection, if one has been created.
    pub fn sub_items(&self, id: ItemId) -> Option<CollectionId> {
        self.items[id.index()].sub_items
    }

    /// The item's sub-item collection, created on first use.
    ///
    /// A collection created for an item that is already tracking starts
    /// tracking immediately.
    pub fn sub_items_or_create(&mut self, id: ItemId) -> CollectionId {
        if let Some(existing) = self.items[id.index()].sub_items {
            return existing;
        }
        let collection = self.alloc_collection(Some(id));
        self.items[id.index()].sub_items = Some(collection);
        if id.is_tracking(self) {
            collection.begin_tracking(self);
        }
        collection
    }

    pub fn collection(&self, id: CollectionId) -> CollectionRef<'_> {
        CollectionRef::new(self, id)
    }

    pub fn collection_mut(&mut self, id: CollectionId) -> CollectionMut<'_> {
        CollectionMut::new(self, id)
    }

    /// Number of items ever allocated, attached or not.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn collection_count(&self) -> usize {
        self.collections.len()
    }

    /// Depth of an item: 0 when attached to a root collection.
    pub fn depth(&self, id: ItemId) -> usize {
        let mut depth = 0;
        let mut current = self.parent(id).and_then(|c| self.owner(c));
        while let Some(owner) = current {
            depth += 1;
            current = self.parent(owner).and_then(|c| self.owner(c));
        }
        depth
    }

    /// Mark every property of the item and its sub-items as modified.
    pub fn set_dirty(&mut self, id: ItemId) {
        self.item_mut(id).state_mut().set_dirty(true);
        if let Some(sub_items) = self.sub_items(id) {
            self.collection_mut(sub_items).set_dirty();
        }
    }

    pub(super) fn collection_data(&self, id: CollectionId) -> &MenuItemCollection {
        &self.collections[id.index()].collection
    }

    pub(super) fn collection_data_mut(&mut self, id: CollectionId) -> &mut MenuItemCollection {
        &mut self.collections[id.index()].collection
    }

    pub(super) fn set_parent(&mut self, item: ItemId, parent: Option<CollectionId>) {
        self.items[item.index()].parent = parent;
    }

    /// Check that `item` may be attached to `target`.
    pub(super) fn check_attachable(&self, item: ItemId, target: CollectionId) -> MenuResult<()> {
        if let Some(collection) = self.parent(item) {
            return Err(MenuError::ItemAttached { item, collection });
        }

        let mut owner = self.owner(target);
        while let Some(ancestor) = owner {
            if ancestor == item {
                return Err(MenuError::Cycle { item });
            }
            owner = self.parent(ancestor).and_then(|c| self.owner(c));
        }
        Ok(())
    }
}

fn next_id(len: usize) -> u32 {
    // An arena this size would exhaust memory long before the id space.
    u32::try_from(len).unwrap_or(u32::MAX)
}

impl ViewState<MenuTree> for ItemId {
    fn begin_tracking(self, tree: &mut MenuTree) {
        tree.item_mut(self).state_mut().track();
        if let Some(sub_items) = tree.sub_items(self) {
            sub_items.begin_tracking(tree);
        }
    }

    fn is_tracking(self, tree: &MenuTree) -> bool {
        tree.item(self).state().is_tracking()
    }

    fn capture_state(self, tree: &MenuTree) -> Option<Snapshot> {
        let own = tree.item(self).state().save();
        let sub_items = tree
            .sub_items(self)
            .and_then(|collection| collection.capture_state(tree));
        Snapshot::pair(own, sub_items)
    }

    fn restore_state(self, tree: &mut MenuTree, snapshot: Option<&Snapshot>) -> StateResult<()> {
        let Some(snapshot) = snapshot else {
            return Ok(());
        };
        let (own, sub_items) = snapshot.as_pair()?;

        if let Some(own) = own {
            tree.item_mut(self).state_mut().load(own)?;
        }
        if let Some(sub_items) = sub_items {
            let collection = tree.sub_items_or_create(self);
            collection.restore_state(tree, Some(sub_items))?;
        }
        Ok(())
    }
}

impl ViewState<MenuTree> for Node {
    fn begin_tracking(self, tree: &mut MenuTree) {
        match self {
            Node::Item(id) => id.begin_tracking(tree),
            Node::Collection(id) => id.begin_tracking(tree),
        }
    }

    fn is_tracking(self, tree: &MenuTree) -> bool {
        match self {
            Node::Item(id) => id.is_tracking(tree),
            Node::Collection(id) => id.is_tracking(tree),
        }
    }

    fn capture_state(self, tree: &MenuTree) -> Option<Snapshot> {
        match self {
            Node::Item(id) => id.capture_state(tree),
            Node::Collection(id) => id.capture_state(tree),
        }
    }

    fn restore_state(self, tree: &mut MenuTree, snapshot: Option<&Snapshot>) -> StateResult<()> {
        match self {
            Node::Item(id) => id.restore_state(tree, snapshot),
            Node::Collection(id) => id.restore_state(tree, snapshot),
        }
    }
}
