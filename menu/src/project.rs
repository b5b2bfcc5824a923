//! A configured menu project: store, routes and renderer loaded from `menu.toml`.

use std::path::Path;

use anyhow::{Context, Result};

use crate::draw::{MenuTree, draw_menu, draw_menu_as};
use crate::io::config::MenuConfig;
use crate::io::init::ProjectPaths;
use crate::io::menu_store::{FileMenuStore, MenuSource};
use crate::render::{Format, MenuRenderer};
use crate::routes::RouteTable;

/// Everything needed to draw menus for a project directory.
pub struct MenuProject {
    pub config: MenuConfig,
    pub store: FileMenuStore,
    pub routes: RouteTable,
    pub renderer: MenuRenderer,
}

impl MenuProject {
    /// Load config from `root/menu.toml` and prepare the store and renderer.
    pub fn open(root: &Path) -> Result<Self> {
        let paths = ProjectPaths::new(root);
        let config = paths.load_config().context("load menu.toml")?;
        let store = FileMenuStore::new(config.menus_path_in(root));
        let renderer = MenuRenderer::for_templates_dir(config.templates_dir_in(root).as_deref())?;
        Ok(Self {
            routes: config.route_table(),
            config,
            store,
            renderer,
        })
    }

    pub fn names(&self) -> Result<Vec<String>> {
        self.store.names()
    }

    pub fn draw(&self, menu_name: &str, current_path: &str) -> Result<MenuTree> {
        draw_menu(&self.store, &self.routes, menu_name, current_path)
    }

    pub fn draw_as(&self, menu_name: &str, current_path: &str, format: Format) -> Result<String> {
        draw_menu_as(
            &self.store,
            &self.routes,
            &self.renderer,
            menu_name,
            current_path,
            format,
        )
    }
}
