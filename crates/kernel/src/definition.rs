//! Declarative menu definitions.
//!
//! Definitions are the configuration surface of a menu: a tree of items
//! read from TOML or JSON and materialized into a [`Menu`]. A menu can also
//! be exported back into a definition.
//!
//! ```toml
//! [[items]]
//! name = "file"
//! text = "File"
//!
//! [[items.items]]
//! name = "open"
//! text = "Open"
//! navigate_url = "/file/open"
//!
//! [[items]]
//! menu_type = "separator"
//! height = 8
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::menu::{CollectionId, Menu, MenuItem, MenuResult, MenuTree, MenuType, keys};

/// Errors raised while loading a definition.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("failed to read menu definition {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("unsupported menu definition format '{extension}' (expected .toml or .json)")]
    UnsupportedFormat { extension: String },

    #[error("invalid TOML menu definition: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON menu definition: {0}")]
    Json(#[from] serde_json::Error),
}

/// A whole menu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuDefinition {
    /// Top-level items, in menu order.
    #[serde(default)]
    pub items: Vec<ItemDefinition>,
}

/// One item and its sub-items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,

    #[serde(default, skip_serializing_if = "is_normal")]
    pub menu_type: MenuType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigate_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_tip: Option<String>,

    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub enabled: bool,

    /// Sub-items, in menu order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ItemDefinition>,
}

fn default_true() -> bool {
    true
}

fn is_true(value: &bool) -> bool {
    *value
}

fn is_normal(menu_type: &MenuType) -> bool {
    *menu_type == MenuType::Normal
}

impl MenuDefinition {
    /// Load a definition, choosing the format from the file extension.
    pub fn load(path: &Path) -> Result<Self, DefinitionError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();

        let source = std::fs::read_to_string(path).map_err(|source| DefinitionError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let definition = match extension.as_str() {
            "toml" => Self::from_toml(&source)?,
            "json" => Self::from_json(&source)?,
            _ => return Err(DefinitionError::UnsupportedFormat { extension }),
        };

        debug!(
            path = %path.display(),
            items = definition.items.len(),
            "loaded menu definition"
        );
        Ok(definition)
    }

    pub fn from_toml(source: &str) -> Result<Self, DefinitionError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_json(source: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Materialize into a new, untracked menu.
    pub fn build(&self) -> MenuResult<Menu> {
        let mut menu = Menu::new();
        let root = menu.root();
        build_items(menu.tree_mut(), root, &self.items)?;
        Ok(menu)
    }

    /// Export a collection and everything below it.
    pub fn from_collection(tree: &MenuTree, collection: CollectionId) -> Self {
        Self {
            items: export_items(tree, collection),
        }
    }

    /// Export a whole menu.
    pub fn from_menu(menu: &Menu) -> Self {
        Self::from_collection(menu.tree(), menu.root())
    }
}

impl ItemDefinition {
    /// Item properties, without sub-items.
    pub fn to_item(&self) -> MenuItem {
        let mut item = MenuItem::new();
        if let Some(name) = &self.name {
            item.set_name(name.as_str());
        }
        if let Some(text) = &self.text {
            item.set_text(text.as_str());
        }
        if let Some(value) = &self.value {
            item.set_value(value.as_str());
        }
        if let Some(height) = self.height {
            item.set_height(height);
        }
        if let Some(css_class) = &self.css_class {
            item.set_css_class(css_class.as_str());
        }
        if self.menu_type != MenuType::Normal {
            item.set_menu_type(self.menu_type);
        }
        if let Some(url) = &self.navigate_url {
            item.set_navigate_url(url.as_str());
        }
        if let Some(tool_tip) = &self.tool_tip {
            item.set_tool_tip(tool_tip.as_str());
        }
        if !self.enabled {
            item.set_enabled(false);
        }
        item
    }

    /// Read an item's properties. Sub-items are not included.
    pub fn from_item(item: &MenuItem) -> Self {
        let state = item.state();
        let string = |key: &str| state.get_str(key).map(str::to_owned);
        Self {
            name: string(keys::NAME),
            text: string(keys::TEXT),
            value: string(keys::VALUE),
            height: item.height(),
            css_class: string(keys::CSS_CLASS),
            menu_type: item.menu_type(),
            navigate_url: string(keys::NAVIGATE_URL),
            tool_tip: string(keys::TOOL_TIP),
            enabled: item.enabled(),
            items: Vec::new(),
        }
    }
}

fn build_items(
    tree: &mut MenuTree,
    collection: CollectionId,
    items: &[ItemDefinition],
) -> MenuResult<()> {
    for definition in items {
        let item = tree.insert_item(definition.to_item());
        tree.collection_mut(collection).add(item)?;
        if !definition.items.is_empty() {
            let sub_items = tree.sub_items_or_create(item);
            build_items(tree, sub_items, &definition.items)?;
        }
    }
    Ok(())
}

fn export_items(tree: &MenuTree, collection: CollectionId) -> Vec<ItemDefinition> {
    tree.collection(collection)
        .iter()
        .map(|id| {
            let mut definition = ItemDefinition::from_item(tree.item(id));
            if let Some(sub_items) = tree.sub_items(id) {
                definition.items = export_items(tree, sub_items);
            }
            definition
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const FILE_MENU: &str = r#"
[[items]]
name = "file"
text = "File"

[[items.items]]
name = "open"
text = "Open"
navigate_url = "/file/open"

[[items.items]]
menu_type = "separator"
height = 4

[[items]]
menu_type = "header"
text = "Tools"
enabled = false
"#;

    #[test]
    fn toml_definition_builds_tree() {
        let definition = MenuDefinition::from_toml(FILE_MENU).unwrap();
        let menu = definition.build().unwrap();

        assert_eq!(menu.items().len(), 2);
        let open = menu.find_item("file/open").unwrap();
        assert_eq!(menu.tree().item(open).navigate_url(), "/file/open");

        let file = menu.find_item("file").unwrap();
        let sub_items = menu.tree().sub_items(file).unwrap();
        let spacer = menu.tree().collection(sub_items).at(1).unwrap();
        assert_eq!(menu.tree().item(spacer).menu_type(), MenuType::Separator);
        assert_eq!(menu.tree().item(spacer).height(), Some(4));

        let tools = menu.items().at(1).unwrap();
        assert!(!menu.tree().item(tools).enabled());
        assert!(!menu.is_tracking());
    }

    #[test]
    fn export_matches_source() {
        let definition = MenuDefinition::from_toml(FILE_MENU).unwrap();
        let menu = definition.build().unwrap();
        assert_eq!(MenuDefinition::from_menu(&menu), definition);
    }

    #[test]
    fn json_definition() {
        let definition =
            MenuDefinition::from_json(r#"{"items":[{"text":"Home","navigate_url":"/"}]}"#)
                .unwrap();
        assert_eq!(definition.items.len(), 1);
        assert!(definition.items[0].enabled);
        assert_eq!(definition.items[0].menu_type, MenuType::Normal);

        let json = serde_json::to_string(&definition).unwrap();
        assert_eq!(json, r#"{"items":[{"text":"Home","navigate_url":"/"}]}"#);
    }

    #[test]
    fn unknown_menu_type_is_rejected() {
        let result = MenuDefinition::from_json(r#"{"items":[{"menu_type":"divider"}]}"#);
        assert!(matches!(result, Err(DefinitionError::Json(_))));
    }

    #[test]
    fn unsupported_extension() {
        let path = std::env::temp_dir().join("menustate-definition-test.yaml");
        std::fs::write(&path, "items: []").unwrap();
        let result = MenuDefinition::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(
            result,
            Err(DefinitionError::UnsupportedFormat { extension }) if extension == "yaml"
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = MenuDefinition::load(Path::new("/nonexistent/menu.toml"));
        assert!(matches!(result, Err(DefinitionError::Io { .. })));
    }
}
