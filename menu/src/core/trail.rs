//! Helpers for following the active branch of a built forest.

use std::cmp::Reverse;

use crate::core::types::{ItemId, MenuTreeNode};

/// Ids along the most specific active branch, root first.
///
/// At each level the expanded sibling holding the longest active URL wins,
/// so a catch-all `/` entry does not shadow a deeper match. Ties go to the
/// earlier sibling.
pub fn active_trail(forest: &[MenuTreeNode<'_>]) -> Vec<ItemId> {
    let mut trail = Vec::new();
    let mut level = forest;
    while let Some(node) = level
        .iter()
        .filter(|node| node.is_active || node.show_children)
        .min_by_key(|node| Reverse(longest_active_url(node)))
    {
        trail.push(node.item.id);
        level = node.children.as_slice();
    }
    trail
}

fn longest_active_url(node: &MenuTreeNode<'_>) -> usize {
    let own = if node.is_active { node.url().len() } else { 0 };
    node.children
        .iter()
        .map(longest_active_url)
        .fold(own, usize::max)
}
