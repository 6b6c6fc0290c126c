#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Menu item collection tests.

use menustate_kernel::{ItemId, Menu, MenuError, MenuTree, MenuType};
use menustate_test_utils::{file_menu, named_item};

#[test]
fn test_mixed_operations_match_vec_model() {
    let mut tree = MenuTree::new();
    let root = tree.new_collection();
    let mut model: Vec<ItemId> = Vec::new();

    let ids: Vec<ItemId> = (0..8).map(|_| tree.new_item()).collect();

    // add, add, insert front, add, remove middle, insert end, remove_at 0, add
    let mut items = tree.collection_mut(root);
    assert_eq!(items.add(ids[0]).unwrap(), 0);
    model.push(ids[0]);
    assert_eq!(items.add(ids[1]).unwrap(), 1);
    model.push(ids[1]);
    items.insert(0, ids[2]).unwrap();
    model.insert(0, ids[2]);
    assert_eq!(items.add(ids[3]).unwrap(), 3);
    model.push(ids[3]);
    assert!(items.remove(ids[0]));
    model.retain(|&id| id != ids[0]);
    let len = items.len();
    items.insert(len, ids[4]).unwrap();
    model.push(ids[4]);
    assert_eq!(items.remove_at(0).unwrap(), ids[2]);
    model.remove(0);
    assert_eq!(items.add(ids[0]).unwrap(), model.len());
    model.push(ids[0]);

    assert_eq!(items.view().items(), model.as_slice());
    assert_eq!(items.len(), model.len());

    for &id in &ids {
        let view = items.view();
        assert_eq!(view.contains(id), view.index_of(id).is_some());
        assert_eq!(view.index_of(id), model.iter().position(|&m| m == id));
    }
}

#[test]
fn test_add_then_index_of() {
    let mut tree = MenuTree::new();
    let root = tree.new_collection();
    for i in 0..5 {
        let id = named_item(&mut tree, &format!("n{i}"), "x");
        let position = tree.collection_mut(root).add(id).unwrap();
        assert_eq!(tree.collection(root).index_of(id), Some(position));
        assert_eq!(position, i);
    }
}

#[test]
fn test_duplicate_names_first_wins() {
    let mut tree = MenuTree::new();
    let root = tree.new_collection();
    let first = named_item(&mut tree, "A", "first");
    let b = named_item(&mut tree, "B", "b");
    let second = named_item(&mut tree, "A", "second");
    for id in [first, b, second] {
        tree.collection_mut(root).add(id).unwrap();
    }

    let found = tree.collection(root).by_name("A").unwrap();
    assert_eq!(found, first);
    assert_eq!(tree.item(found).text(), "first");
    assert!(tree.collection(root).by_name("missing").is_none());
}

#[test]
fn test_spacer_and_header_shortcuts() {
    let mut menu = Menu::new();
    let spacer = menu.items_mut().add_spacer(10);
    let header = menu.items_mut().add_header("Section");

    let spacer = menu.tree().item(menu.items().at(spacer).unwrap());
    assert_eq!(spacer.menu_type(), MenuType::Separator);
    assert_eq!(spacer.text(), "");
    assert_eq!(spacer.height(), Some(10));

    let header = menu.tree().item(menu.items().at(header).unwrap());
    assert_eq!(header.menu_type(), MenuType::Header);
    assert_eq!(header.text(), "Section");
}

#[test]
fn test_index_out_of_range() {
    let menu = file_menu();
    assert_eq!(menu.items().len(), 3);
    assert_eq!(
        menu.items().at(3),
        Err(MenuError::IndexOutOfRange { index: 3, len: 3 })
    );
}

#[test]
fn test_add_range_between_menus_subtrees() {
    let mut menu = file_menu();
    let file = menu.find_item("file").unwrap();
    let edit = menu.find_item("edit").unwrap();
    let file_items = menu.tree().sub_items(file).unwrap();
    let edit_items = menu.tree().sub_items(edit).unwrap();

    menu.tree_mut()
        .collection_mut(file_items)
        .add_range(edit_items)
        .unwrap();

    assert!(menu.tree().collection(edit_items).is_empty());
    assert_eq!(menu.tree().collection(file_items).len(), 4);
    let undo = menu.find_item("file/undo").unwrap();
    assert_eq!(menu.tree().item(undo).text(), "Undo");
    assert_eq!(menu.tree().depth(undo), 1);
}

#[test]
fn test_moving_item_requires_removal_first() {
    let mut menu = file_menu();
    let open = menu.find_item("file/open").unwrap();
    let root = menu.root();

    let err = menu.tree_mut().collection_mut(root).add(open).unwrap_err();
    assert!(matches!(err, MenuError::ItemAttached { item, .. } if item == open));

    let parent = menu.tree().parent(open).unwrap();
    assert!(menu.tree_mut().collection_mut(parent).remove(open));
    menu.tree_mut().collection_mut(root).insert(0, open).unwrap();
    assert_eq!(menu.find_item("open"), Some(open));
}
