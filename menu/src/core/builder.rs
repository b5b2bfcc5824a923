//! Assembly of a flat record list into an annotated menu forest.

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::core::types::{ItemId, MenuItemRecord, MenuTreeNode};
use crate::error::MenuError;

/// Records grouped by parent id; `None` holds the root-level items.
type ParentGroups<'a> = BTreeMap<Option<ItemId>, Vec<&'a MenuItemRecord>>;

/// Build the menu forest for `current_path`.
///
/// Sibling order follows input order. Records whose parent chain never reaches
/// the root (dangling parent, or a cycle) are left out of the forest.
///
/// Duplicate ids are rejected: they are the only way a parent cycle can be
/// reached from the root, so with unique ids the recursion depth is bounded by
/// `records.len()`.
pub fn build<'a>(
    records: &'a [MenuItemRecord],
    current_path: &str,
) -> Result<Vec<MenuTreeNode<'a>>, MenuError> {
    reject_duplicate_ids(records)?;
    let groups = group_by_parent(records);
    let forest = build_level(&groups, None, current_path);

    let built = count_nodes(&forest);
    if built < records.len() {
        debug!(
            records = records.len(),
            omitted = records.len() - built,
            "omitted menu records unreachable from root"
        );
    }
    Ok(forest)
}

/// Prefix match of the request path against a node URL.
pub fn is_active(current_path: &str, url: &str) -> bool {
    current_path.starts_with(url)
}

/// Count nodes across every level of `forest`.
pub fn count_nodes(forest: &[MenuTreeNode<'_>]) -> usize {
    forest
        .iter()
        .map(|node| 1 + count_nodes(&node.children))
        .sum()
}

fn reject_duplicate_ids(records: &[MenuItemRecord]) -> Result<(), MenuError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            return Err(MenuError::DuplicateItemId { id: record.id });
        }
    }
    Ok(())
}

fn group_by_parent(records: &[MenuItemRecord]) -> ParentGroups<'_> {
    let mut groups = ParentGroups::new();
    groups.insert(None, Vec::new());
    for record in records {
        groups.entry(record.parent_id).or_default().push(record);
    }
    groups
}

fn build_level<'a>(
    groups: &ParentGroups<'a>,
    parent: Option<ItemId>,
    current_path: &str,
) -> Vec<MenuTreeNode<'a>> {
    let Some(members) = groups.get(&parent) else {
        return Vec::new();
    };

    members
        .iter()
        .map(|&item| {
            let children = build_level(groups, Some(item.id), current_path);
            let is_active = is_active(current_path, &item.resolved_url);
            let show_children = is_active
                || children
                    .iter()
                    .any(|child| child.is_active || child.show_children);
            MenuTreeNode {
                item,
                children,
                is_active,
                show_children,
            }
        })
        .collect()
}
