//! Validation for `menu validate`: config, store, and per-menu structure.

use std::path::Path;

use anyhow::Result;

use crate::core::invariants::validate_menu;
use crate::io::menu_store::MenuSource;
use crate::project::MenuProject;

/// Structural findings for one stored menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuReport {
    pub name: String,
    pub items: usize,
    pub errors: Vec<String>,
}

/// High-level validation outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateOutcome {
    pub menus: Vec<MenuReport>,
}

impl ValidateOutcome {
    pub fn is_valid(&self) -> bool {
        self.menus.iter().all(|menu| menu.errors.is_empty())
    }
}

/// Load config and store, then check every menu's invariants.
///
/// Config and store failures are errors; structural findings are reported in
/// the outcome.
pub fn validate_project(root: &Path) -> Result<ValidateOutcome> {
    let project = MenuProject::open(root)?;
    let mut menus = Vec::new();
    for name in project.names()? {
        let menu = project.store.fetch(&name)?;
        let records = menu.records(&project.routes);
        menus.push(MenuReport {
            errors: validate_menu(&records),
            items: records.len(),
            name,
        });
    }
    Ok(ValidateOutcome { menus })
}
