//! Shared deterministic types for the menu tree builder.
//!
//! Records are the builder's input and are borrowed, never mutated. Nodes are
//! built fresh for every render and reference the records they came from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a stored menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One menu item with its URL already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItemRecord {
    pub id: ItemId,
    /// Parent item, or `None` for a root-level item.
    pub parent_id: Option<ItemId>,
    pub title: String,
    /// Final link target; `"#"` when the item's route could not be resolved.
    pub resolved_url: String,
}

/// A built menu node, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuTreeNode<'a> {
    pub item: &'a MenuItemRecord,
    /// Direct children in input order.
    pub children: Vec<MenuTreeNode<'a>>,
    /// True when the current request path starts with this node's URL.
    pub is_active: bool,
    /// True when this node or any node below it is active.
    pub show_children: bool,
}

impl MenuTreeNode<'_> {
    pub fn url(&self) -> &str {
        &self.item.resolved_url
    }

    pub fn title(&self) -> &str {
        &self.item.title
    }
}
