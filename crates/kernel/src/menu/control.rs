//! The menu control: one tree and its top-level item collection.

use crate::viewstate::{Snapshot, StateResult, ViewState};

use super::collection::{CollectionMut, CollectionRef};
use super::tree::{CollectionId, ItemId, MenuTree};

/// Separator between item names in a lookup path.
pub const PATH_SEPARATOR: char = '/';

/// A menu owning its items.
///
/// This is the object the hosting page framework drives through the
/// view-state protocol; every call fans out to the top-level collection.
#[derive(Debug, Clone)]
pub struct Menu {
    tree: MenuTree,
    items: CollectionId,
}

impl Menu {
    /// Create a menu with no items.
    pub fn new() -> Self {
        let mut tree = MenuTree::new();
        let items = tree.new_collection();
        Self { tree, items }
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut MenuTree {
        &mut self.tree
    }

    /// Handle of the top-level collection.
    pub fn root(&self) -> CollectionId {
        self.items
    }

    pub fn items(&self) -> CollectionRef<'_> {
        self.tree.collection(self.items)
    }

    pub fn items_mut(&mut self) -> CollectionMut<'_> {
        self.tree.collection_mut(self.items)
    }

    /// Resolve a `/`-separated path of item names, taking the first match
    /// at each level.
    pub fn find_item(&self, path: &str) -> Option<ItemId> {
        let mut collection = Some(self.items);
        let mut found = None;
        for name in path.split(PATH_SEPARATOR) {
            if name.is_empty() {
                return None;
            }
            let current = self.tree.collection(collection?).by_name(name)?;
            collection = self.tree.sub_items(current);
            found = Some(current);
        }
        found
    }

    pub fn begin_tracking(&mut self) {
        self.items.begin_tracking(&mut self.tree);
    }

    pub fn is_tracking(&self) -> bool {
        self.items.is_tracking(&self.tree)
    }

    pub fn capture_state(&self) -> Option<Snapshot> {
        self.items.capture_state(&self.tree)
    }

    pub fn restore_state(&mut self, snapshot: Option<&Snapshot>) -> StateResult<()> {
        self.items.restore_state(&mut self.tree, snapshot)
    }

    /// Persist the whole menu on the next capture, not just later changes.
    pub fn set_dirty(&mut self) {
        self.items_mut().set_dirty();
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::menu::MenuItem;

    fn named(text: &str, name: &str) -> MenuItem {
        let mut item = MenuItem::with_text(text);
        item.set_name(name);
        item
    }

    #[test]
    fn find_item_walks_names() {
        let mut menu = Menu::new();
        let file = menu.items_mut().add_new(named("File", "file"));
        let sub_items = menu.tree_mut().sub_items_or_create(file);
        let open = menu
            .tree_mut()
            .collection_mut(sub_items)
            .add_new(named("Open", "open"));

        assert_eq!(menu.find_item("file"), Some(file));
        assert_eq!(menu.find_item("file/open"), Some(open));
        assert_eq!(menu.find_item("file/close"), None);
        assert_eq!(menu.find_item("file/open/recent"), None);
        assert_eq!(menu.find_item("edit"), None);
    }

    #[test]
    fn find_item_rejects_empty_segments() {
        let mut menu = Menu::new();
        menu.items_mut().add_header("Unnamed");
        let file = menu.items_mut().add_new(named("File", "file"));
        let sub_items = menu.tree_mut().sub_items_or_create(file);
        menu.tree_mut().collection_mut(sub_items).add_spacer(4);

        assert_eq!(menu.find_item(""), None);
        assert_eq!(menu.find_item("/file"), None);
        assert_eq!(menu.find_item("file/"), None);
        assert_eq!(menu.find_item("file//"), None);
        assert_eq!(menu.find_item("file"), Some(file));
    }

    #[test]
    fn protocol_forwards_to_root() {
        let mut menu = Menu::new();
        menu.items_mut().add_header("Section");
        assert!(!menu.is_tracking());

        menu.begin_tracking();
        assert!(menu.is_tracking());
        assert!(menu.capture_state().is_none());

        menu.set_dirty();
        let snapshot = menu.capture_state().unwrap();

        let mut restored = Menu::new();
        restored.begin_tracking();
        restored.restore_state(Some(&snapshot)).unwrap();
        assert_eq!(restored.items().len(), 1);
        let header = restored.items().at(0).unwrap();
        assert_eq!(restored.tree().item(header).text(), "Section");
    }
}
