//! Ordered, name-indexed collections of menu items.

use tracing::{debug, trace};

use crate::viewstate::{Snapshot, StateResult, ViewState};

use super::error::{MenuError, MenuResult};
use super::item::MenuItem;
use super::tree::{CollectionId, ItemId, MenuTree};

/// Storage for one collection: item order plus the tracking flag.
#[derive(Debug, Clone, Default)]
pub struct MenuItemCollection {
    items: Vec<ItemId>,
    tracking: bool,
}

/// Read access to a collection.
#[derive(Debug, Clone, Copy)]
pub struct CollectionRef<'a> {
    tree: &'a MenuTree,
    id: CollectionId,
}

impl<'a> CollectionRef<'a> {
    pub(super) fn new(tree: &'a MenuTree, id: CollectionId) -> Self {
        Self { tree, id }
    }

    pub fn id(&self) -> CollectionId {
        self.id
    }

    /// Items in menu order.
    pub fn items(&self) -> &'a [ItemId] {
        &self.tree.collection_data(self.id).items
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'a, ItemId>> {
        self.items().iter().copied()
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    pub fn is_tracking(&self) -> bool {
        self.tree.collection_data(self.id).tracking
    }

    /// Item at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<ItemId> {
        self.items().get(index).copied()
    }

    /// Item at `index`.
    pub fn at(&self, index: usize) -> MenuResult<ItemId> {
        self.get(index).ok_or(MenuError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// First item, by position, whose name equals `name`.
    pub fn by_name(&self, name: &str) -> Option<ItemId> {
        self.iter().find(|&id| self.tree.item(id).name() == name)
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.index_of(item).is_some()
    }

    /// Position of `item`, compared by identity.
    pub fn index_of(&self, item: ItemId) -> Option<usize> {
        self.items().iter().position(|&id| id == item)
    }

    /// Copy the items, in order, into `dest` starting at `offset`.
    pub fn copy_to(&self, dest: &mut [ItemId], offset: usize) -> MenuResult<()> {
        let items = self.items();
        let available = dest.len().saturating_sub(offset);
        if offset > dest.len() || available < items.len() {
            return Err(MenuError::DestinationTooSmall {
                offset,
                available,
                required: items.len(),
            });
        }
        dest[offset..offset + items.len()].copy_from_slice(items);
        Ok(())
    }

    /// Collections carry no internal locking.
    pub fn is_synchronized(&self) -> bool {
        false
    }

    /// Handle callers may use to coordinate external synchronization.
    pub fn sync_root(&self) -> CollectionId {
        self.id
    }

    /// Item owning this collection, `None` for a root collection.
    pub fn owner(&self) -> Option<ItemId> {
        self.tree.owner(self.id)
    }
}

impl<'a> IntoIterator for CollectionRef<'a> {
    type Item = ItemId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, ItemId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Write access to a collection.
#[derive(Debug)]
pub struct CollectionMut<'a> {
    tree: &'a mut MenuTree,
    id: CollectionId,
}

impl<'a> CollectionMut<'a> {
    pub(super) fn new(tree: &'a mut MenuTree, id: CollectionId) -> Self {
        Self { tree, id }
    }

    pub fn id(&self) -> CollectionId {
        self.id
    }

    /// Reborrow for read-only queries.
    pub fn view(&self) -> CollectionRef<'_> {
        CollectionRef::new(&*self.tree, self.id)
    }

    pub fn len(&self) -> usize {
        self.view().len()
    }

    pub fn is_empty(&self) -> bool {
        self.view().is_empty()
    }

    /// Append a detached item, returning its position.
    pub fn add(&mut self, item: ItemId) -> MenuResult<usize> {
        self.tree.check_attachable(item, self.id)?;
        Ok(self.push(item))
    }

    /// Append a new item built from `item`, returning its handle.
    pub fn add_new(&mut self, item: MenuItem) -> ItemId {
        let id = self.tree.insert_item(item);
        self.push(id);
        id
    }

    /// Append a separator with empty text.
    pub fn add_spacer(&mut self, height: u32) -> usize {
        self.push_new(MenuItem::separator(height))
    }

    /// Append a separator with a CSS class and, optionally, text.
    pub fn add_spacer_with(
        &mut self,
        height: u32,
        css_class: impl Into<String>,
        text: Option<&str>,
    ) -> usize {
        let mut item = MenuItem::separator(height);
        item.set_css_class(css_class);
        if let Some(text) = text {
            item.set_text(text);
        }
        self.push_new(item)
    }

    /// Append a header entry.
    pub fn add_header(&mut self, text: impl Into<String>) -> usize {
        self.push_new(MenuItem::header(text))
    }

    /// Move every item of `other`, in order, to the end of this collection.
    ///
    /// `other` is left empty. Nothing moves if any item would end up beneath
    /// itself.
    pub fn add_range(&mut self, other: CollectionId) -> MenuResult<()> {
        if other == self.id {
            return Ok(());
        }

        let moved = std::mem::take(&mut self.tree.collection_data_mut(other).items);
        for &item in &moved {
            self.tree.set_parent(item, None);
        }
        if let Some(err) = moved
            .iter()
            .find_map(|&item| self.tree.check_attachable(item, self.id).err())
        {
            for &item in &moved {
                self.tree.set_parent(item, Some(other));
            }
            self.tree.collection_data_mut(other).items = moved;
            return Err(err);
        }

        for item in moved {
            self.push(item);
        }
        Ok(())
    }

    /// Detach every item.
    pub fn clear(&mut self) {
        let removed = std::mem::take(&mut self.tree.collection_data_mut(self.id).items);
        for item in removed {
            self.tree.set_parent(item, None);
        }
    }

    /// Insert a detached item at `index`, shifting later items.
    pub fn insert(&mut self, index: usize, item: ItemId) -> MenuResult<()> {
        let len = self.len();
        if index > len {
            return Err(MenuError::IndexOutOfRange { index, len });
        }
        self.tree.check_attachable(item, self.id)?;
        self.tree.collection_data_mut(self.id).items.insert(index, item);
        self.tree.set_parent(item, Some(self.id));
        self.track_added(item);
        Ok(())
    }

    /// Detach `item` if present. Returns whether anything was removed.
    pub fn remove(&mut self, item: ItemId) -> bool {
        match self.view().index_of(item) {
            Some(index) => {
                self.detach_at(index);
                true
            }
            None => false,
        }
    }

    /// Detach the item at `index`, returning it.
    pub fn remove_at(&mut self, index: usize) -> MenuResult<ItemId> {
        let len = self.len();
        if index >= len {
            return Err(MenuError::IndexOutOfRange { index, len });
        }
        Ok(self.detach_at(index))
    }

    /// Mark every property of every item below this collection as modified,
    /// so the whole structure is persisted on the next capture.
    pub fn set_dirty(&mut self) {
        let items = self.view().items().to_vec();
        for item in items {
            self.tree.set_dirty(item);
        }
    }

    fn push(&mut self, item: ItemId) -> usize {
        let index = self.attach(item);
        self.track_added(item);
        index
    }

    fn attach(&mut self, item: ItemId) -> usize {
        let items = &mut self.tree.collection_data_mut(self.id).items;
        items.push(item);
        let index = items.len() - 1;
        self.tree.set_parent(item, Some(self.id));
        index
    }

    /// Items joining a tracking collection are persisted in full.
    fn track_added(&mut self, item: ItemId) {
        if self.view().is_tracking() {
            item.begin_tracking(&mut *self.tree);
            self.tree.set_dirty(item);
        }
    }

    fn push_new(&mut self, item: MenuItem) -> usize {
        let id = self.tree.insert_item(item);
        self.push(id)
    }

    fn detach_at(&mut self, index: usize) -> ItemId {
        let item = self.tree.collection_data_mut(self.id).items.remove(index);
        self.tree.set_parent(item, None);
        item
    }
}

impl ViewState<MenuTree> for CollectionId {
    fn begin_tracking(self, tree: &mut MenuTree) {
        tree.collection_data_mut(self).tracking = true;
        let items = tree.collection(self).items().to_vec();
        for item in items {
            item.begin_tracking(tree);
        }
    }

    fn is_tracking(self, tree: &MenuTree) -> bool {
        tree.collection(self).is_tracking()
    }

    fn capture_state(self, tree: &MenuTree) -> Option<Snapshot> {
        let slots: Vec<Option<Snapshot>> = tree
            .collection(self)
            .iter()
            .map(|item| item.capture_state(tree))
            .collect();
        let len = slots.len();
        let snapshot = Snapshot::list(slots);
        trace!(
            collection = %self,
            items = len,
            empty = snapshot.is_none(),
            "captured collection state"
        );
        snapshot
    }

    fn restore_state(self, tree: &mut MenuTree, snapshot: Option<&Snapshot>) -> StateResult<()> {
        let Some(snapshot) = snapshot else {
            return Ok(());
        };
        let slots = snapshot.as_list()?;

        // Rebuild detached first; the live items stay until every slot loads.
        let mut rebuilt = Vec::with_capacity(slots.len());
        for slot in slots {
            let item = tree.new_item();
            item.begin_tracking(tree);
            if let Some(slot) = slot {
                item.restore_state(tree, Some(slot))?;
            }
            rebuilt.push(item);
        }

        let mut collection = tree.collection_mut(self);
        collection.clear();
        for item in rebuilt {
            collection.attach(item);
        }

        debug!(collection = %self, items = slots.len(), "restored collection state");
        Ok(())
    }
}
