//! menustate test utilities.
//!
//! Fixture builders and assertion helpers shared by the kernel's
//! integration tests.

use menustate_kernel::{CollectionId, ItemId, Menu, MenuDefinition, MenuItem, MenuTree};

/// Create a detached item with a name and text.
pub fn named_item(tree: &mut MenuTree, name: &str, text: &str) -> ItemId {
    let mut item = MenuItem::with_text(text);
    item.set_name(name);
    tree.insert_item(item)
}

/// Append a named item to a collection, returning its handle.
pub fn push_named(tree: &mut MenuTree, collection: CollectionId, name: &str, text: &str) -> ItemId {
    let mut item = MenuItem::with_text(text);
    item.set_name(name);
    tree.collection_mut(collection).add_new(item)
}

/// A three-level menu:
///
/// ```text
/// File
///   Open
///   (separator)
///   Recent
///     a.txt
///     b.txt
/// Edit
///   Undo
/// Tools (header)
/// ```
///
/// The menu is untracked, as if just built from markup.
pub fn file_menu() -> Menu {
    let mut menu = Menu::new();
    let root = menu.root();
    let tree = menu.tree_mut();

    let file = push_named(tree, root, "file", "File");
    let file_items = tree.sub_items_or_create(file);
    push_named(tree, file_items, "open", "Open");
    tree.collection_mut(file_items).add_spacer(6);
    let recent = push_named(tree, file_items, "recent", "Recent");
    let recent_items = tree.sub_items_or_create(recent);
    push_named(tree, recent_items, "a", "a.txt");
    push_named(tree, recent_items, "b", "b.txt");

    let edit = push_named(tree, root, "edit", "Edit");
    let edit_items = tree.sub_items_or_create(edit);
    push_named(tree, edit_items, "undo", "Undo");

    tree.collection_mut(root).add_header("Tools");
    menu
}

/// Menu contents as a definition, for structural comparison.
pub fn outline(menu: &Menu) -> MenuDefinition {
    MenuDefinition::from_menu(menu)
}

/// Assert two menus hold the same items, properties, and nesting.
#[track_caller]
pub fn assert_same_menu(left: &Menu, right: &Menu) {
    let left = outline(left);
    let right = outline(right);
    assert!(
        left == right,
        "menus differ:\n{}\n---\n{}",
        serde_json::to_string_pretty(&left).unwrap_or_default(),
        serde_json::to_string_pretty(&right).unwrap_or_default()
    );
}
