//! Menu item properties.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::viewstate::StateBag;

/// Property names used in an item's state bag.
pub mod keys {
    pub const NAME: &str = "name";
    pub const TEXT: &str = "text";
    pub const VALUE: &str = "value";
    pub const HEIGHT: &str = "height";
    pub const CSS_CLASS: &str = "css_class";
    pub const MENU_TYPE: &str = "menu_type";
    pub const NAVIGATE_URL: &str = "navigate_url";
    pub const TOOL_TIP: &str = "tool_tip";
    pub const ENABLED: &str = "enabled";
}

/// What kind of entry an item renders as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuType {
    /// A regular, selectable entry.
    #[default]
    Normal,
    /// A visual spacer between groups.
    Separator,
    /// A non-selectable group caption.
    Header,
}

impl MenuType {
    pub fn as_str(self) -> &'static str {
        match self {
            MenuType::Normal => "normal",
            MenuType::Separator => "separator",
            MenuType::Header => "header",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "normal" => Some(MenuType::Normal),
            "separator" => Some(MenuType::Separator),
            "header" => Some(MenuType::Header),
            _ => None,
        }
    }
}

/// A single menu entry.
///
/// Every property is stored in the item's [`StateBag`], so properties
/// assigned after tracking begins are persisted with the page's view state.
/// The item's position in the menu and its sub-items are owned by the
/// [`MenuTree`](super::MenuTree).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItem {
    state: StateBag,
}

impl MenuItem {
    /// Create an item with every property at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a normal item with the given text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut item = Self::new();
        item.set_text(text);
        item
    }

    /// Create a separator of the given height.
    pub fn separator(height: u32) -> Self {
        let mut item = Self::new();
        item.set_menu_type(MenuType::Separator);
        item.set_height(height);
        item.set_text("");
        item
    }

    /// Create a header with the given caption.
    pub fn header(text: impl Into<String>) -> Self {
        let mut item = Self::new();
        item.set_menu_type(MenuType::Header);
        item.set_text(text);
        item
    }

    /// Lookup name. Not required to be unique.
    pub fn name(&self) -> &str {
        self.string(keys::NAME)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.state.set(keys::NAME, name.into());
    }

    pub fn text(&self) -> &str {
        self.string(keys::TEXT)
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.state.set(keys::TEXT, text.into());
    }

    pub fn value(&self) -> &str {
        self.string(keys::VALUE)
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.state.set(keys::VALUE, value.into());
    }

    /// Height in pixels, if set.
    pub fn height(&self) -> Option<u32> {
        self.state
            .get(keys::HEIGHT)
            .and_then(Value::as_u64)
            .and_then(|h| u32::try_from(h).ok())
    }

    pub fn set_height(&mut self, height: u32) {
        self.state.set(keys::HEIGHT, height);
    }

    pub fn css_class(&self) -> &str {
        self.string(keys::CSS_CLASS)
    }

    pub fn set_css_class(&mut self, css_class: impl Into<String>) {
        self.state.set(keys::CSS_CLASS, css_class.into());
    }

    pub fn menu_type(&self) -> MenuType {
        self.state
            .get_str(keys::MENU_TYPE)
            .and_then(MenuType::parse)
            .unwrap_or_default()
    }

    pub fn set_menu_type(&mut self, menu_type: MenuType) {
        self.state.set(keys::MENU_TYPE, menu_type.as_str());
    }

    pub fn navigate_url(&self) -> &str {
        self.string(keys::NAVIGATE_URL)
    }

    pub fn set_navigate_url(&mut self, url: impl Into<String>) {
        self.state.set(keys::NAVIGATE_URL, url.into());
    }

    pub fn tool_tip(&self) -> &str {
        self.string(keys::TOOL_TIP)
    }

    pub fn set_tool_tip(&mut self, tool_tip: impl Into<String>) {
        self.state.set(keys::TOOL_TIP, tool_tip.into());
    }

    /// Whether the item can be selected. Defaults to `true`.
    pub fn enabled(&self) -> bool {
        self.state
            .get(keys::ENABLED)
            .and_then(Value::as_bool)
            .unwrap_or(true)
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.state.set(keys::ENABLED, enabled);
    }

    /// Backing property bag.
    pub fn state(&self) -> &StateBag {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut StateBag {
        &mut self.state
    }

    fn string(&self, key: &str) -> &str {
        self.state.get_str(key).unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let item = MenuItem::new();
        assert_eq!(item.name(), "");
        assert_eq!(item.text(), "");
        assert_eq!(item.height(), None);
        assert_eq!(item.menu_type(), MenuType::Normal);
        assert!(item.enabled());
    }

    #[test]
    fn separator_has_empty_text() {
        let item = MenuItem::separator(10);
        assert_eq!(item.menu_type(), MenuType::Separator);
        assert_eq!(item.height(), Some(10));
        assert_eq!(item.text(), "");
        assert!(item.state().contains_key(keys::TEXT));
    }

    #[test]
    fn header_keeps_text() {
        let item = MenuItem::header("Section");
        assert_eq!(item.menu_type(), MenuType::Header);
        assert_eq!(item.text(), "Section");
    }

    #[test]
    fn menu_type_names_round_trip() {
        for menu_type in [MenuType::Normal, MenuType::Separator, MenuType::Header] {
            assert_eq!(MenuType::parse(menu_type.as_str()), Some(menu_type));
        }
        assert_eq!(MenuType::parse("divider"), None);
    }

    #[test]
    fn setters_write_through_to_state() {
        let mut item = MenuItem::with_text("Open");
        item.set_name("open");
        item.set_navigate_url("/file/open");
        item.set_enabled(false);

        assert_eq!(item.state().get_str(keys::NAME), Some("open"));
        assert_eq!(item.navigate_url(), "/file/open");
        assert!(!item.enabled());
        assert_eq!(item.state().len(), 4);
    }
}
