//! Test-only helpers for constructing menu records and project directories.

use std::path::Path;

use anyhow::Result;
use tempfile::TempDir;

use crate::core::types::{ItemId, MenuItemRecord};
use crate::io::init::{InitOptions, ProjectPaths, init_project};
use crate::io::menu_store::{MenuSet, write_menus};
use crate::model::{Menu, MenuItem};

/// Create a root-level record with an already resolved URL.
pub fn root(id: u64, title: &str, url: &str) -> MenuItemRecord {
    MenuItemRecord {
        id: ItemId(id),
        parent_id: None,
        title: title.to_string(),
        resolved_url: url.to_string(),
    }
}

/// Create a record under `parent`.
pub fn child(id: u64, parent: u64, title: &str, url: &str) -> MenuItemRecord {
    MenuItemRecord {
        parent_id: Some(ItemId(parent)),
        ..root(id, title, url)
    }
}

/// Create a stored item with a raw URL.
pub fn item(id: u64, parent: Option<u64>, title: &str, url: &str) -> MenuItem {
    MenuItem {
        id: ItemId(id),
        title: title.to_string(),
        parent: parent.map(ItemId),
        url: url.to_string(),
        named_url: String::new(),
    }
}

/// Create a stored item pointing at a named route.
pub fn named_item(id: u64, parent: Option<u64>, title: &str, named_url: &str) -> MenuItem {
    MenuItem {
        named_url: named_url.to_string(),
        ..item(id, parent, title, "")
    }
}

/// Temporary project directory initialized with `menu init` defaults.
pub struct TestProject {
    temp: TempDir,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir()?;
        init_project(temp.path(), &InitOptions { force: false })?;
        Ok(Self { temp })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn paths(&self) -> ProjectPaths {
        ProjectPaths::new(self.path())
    }

    /// Replace the project's menu store with `menus`.
    pub fn write_menus(&self, menus: Vec<Menu>) -> Result<()> {
        let cfg = self.paths().load_config()?;
        write_menus(&cfg.menus_path_in(self.path()), &MenuSet::new(menus)?)
    }
}

/// Undo minijinja's `/` escaping so tests can match URLs in rendered markup.
pub fn decode_slashes(html: &str) -> String {
    html.replace("&#x2f;", "/")
}
