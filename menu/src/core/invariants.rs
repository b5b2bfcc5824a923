//! Structural checks for a menu's records.
//!
//! The builder tolerates dangling parents and cycles by leaving the affected
//! records out of the forest. These checks surface them for `menu validate`.

use std::collections::{BTreeMap, HashSet};

use crate::core::types::{ItemId, MenuItemRecord};

/// Check menu records and return stable, human-readable violations:
/// - No duplicate ids
/// - No item is its own parent
/// - Every parent reference names an item in the same menu
/// - Every item is reachable from the root level
pub fn validate_menu(records: &[MenuItemRecord]) -> Vec<String> {
    let mut errors = Vec::new();

    let mut ids = HashSet::with_capacity(records.len());
    for record in records {
        if !ids.insert(record.id) {
            errors.push(format!("duplicate id {}", record.id));
        }
    }

    let mut flagged = HashSet::new();
    for record in records {
        match record.parent_id {
            Some(parent) if parent == record.id => {
                errors.push(format!("item {} is its own parent", record.id));
                flagged.insert(record.id);
            }
            Some(parent) if !ids.contains(&parent) => {
                errors.push(format!(
                    "item {} references missing parent {}",
                    record.id, parent
                ));
                flagged.insert(record.id);
            }
            _ => {}
        }
    }

    let reachable = reachable_ids(records);
    for record in records {
        if !reachable.contains(&record.id) && !flagged.contains(&record.id) {
            errors.push(format!("item {} is unreachable from the menu root", record.id));
        }
    }

    errors
}

/// Ids reachable by walking down from the root-level items.
fn reachable_ids(records: &[MenuItemRecord]) -> HashSet<ItemId> {
    let mut children: BTreeMap<Option<ItemId>, Vec<ItemId>> = BTreeMap::new();
    for record in records {
        children.entry(record.parent_id).or_default().push(record.id);
    }

    let mut reachable = HashSet::new();
    let mut stack: Vec<ItemId> = children.get(&None).cloned().unwrap_or_default();
    while let Some(id) = stack.pop() {
        if !reachable.insert(id) {
            continue;
        }
        if let Some(next) = children.get(&Some(id)) {
            stack.extend(next.iter().copied());
        }
    }
    reachable
}
