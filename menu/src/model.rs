//! Stored menu model: named menus and their items as kept in the menu store.

use serde::{Deserialize, Serialize};

use crate::core::types::{ItemId, MenuItemRecord};
use crate::routes::UrlResolver;

/// Link target used when an item has no usable URL.
pub const FALLBACK_URL: &str = "#";

/// A named collection of items forming one navigable tree.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Menu {
    pub name: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// One stored menu item.
///
/// `named_url` takes precedence over `url` when both are set.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    pub id: ItemId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ItemId>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub named_url: String,
}

impl MenuItem {
    /// Link target for this item.
    ///
    /// Named routes that fail to resolve, and items with neither field set,
    /// yield [`FALLBACK_URL`].
    pub fn absolute_url(&self, resolver: &dyn UrlResolver) -> String {
        if !self.named_url.is_empty() {
            return resolver
                .reverse(&self.named_url)
                .unwrap_or_else(|| FALLBACK_URL.to_string());
        }
        if self.url.is_empty() {
            return FALLBACK_URL.to_string();
        }
        self.url.clone()
    }

    pub fn to_record(&self, resolver: &dyn UrlResolver) -> MenuItemRecord {
        MenuItemRecord {
            id: self.id,
            parent_id: self.parent,
            title: self.title.clone(),
            resolved_url: self.absolute_url(resolver),
        }
    }
}

impl Menu {
    /// Resolve every item into builder input, keeping stored order.
    pub fn records(&self, resolver: &dyn UrlResolver) -> Vec<MenuItemRecord> {
        self.items
            .iter()
            .map(|item| item.to_record(resolver))
            .collect()
    }
}

/// Sample menu written by `menu init`.
pub fn default_menus() -> Vec<Menu> {
    let item = |id: u64, parent: Option<u64>, title: &str, url: &str, named_url: &str| MenuItem {
        id: ItemId(id),
        title: title.to_string(),
        parent: parent.map(ItemId),
        url: url.to_string(),
        named_url: named_url.to_string(),
    };
    vec![Menu {
        name: "main_menu".to_string(),
        items: vec![
            item(1, None, "Home", "/", ""),
            item(2, None, "Shop", "", "shop"),
            item(3, Some(2), "Shoes", "/shop/shoes/", ""),
            item(4, Some(2), "Bags", "/shop/bags/", ""),
            item(5, None, "About", "/about/", ""),
        ],
    }]
}
