//! Scaffolding for a menu project directory.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};

use super::config::{MenuConfig, load_config, write_config};
use super::menu_store::{MenuSet, write_menus};
use crate::model::default_menus;

/// Canonical paths for a project root.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub config_path: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            config_path: root.join("menu.toml"),
            root,
        }
    }

    /// Load `menu.toml` (defaults when missing).
    pub fn load_config(&self) -> Result<MenuConfig> {
        load_config(&self.config_path)
    }
}

/// Options for `init_project`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite existing config and store files.
    pub force: bool,
}

/// Write a default `menu.toml` and a sample menu store into `root`.
///
/// Fails if either file already exists unless `options.force` is set.
pub fn init_project(root: &Path, options: &InitOptions) -> Result<ProjectPaths> {
    let paths = ProjectPaths::new(root);
    let config = MenuConfig::default();
    let menus_path = config.menus_path_in(root);

    for existing in [&paths.config_path, &menus_path] {
        if existing.exists() && !options.force {
            return Err(anyhow!(
                "menu init: {} already exists (use --force to overwrite)",
                existing.display()
            ));
        }
    }

    write_config(&paths.config_path, &config)?;
    write_menus(&menus_path, &MenuSet::new(default_menus())?)?;
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::menu_store::load_menus;

    #[test]
    fn init_writes_config_and_store() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = init_project(temp.path(), &InitOptions { force: false }).expect("init");

        let cfg = paths.load_config().expect("config");
        assert_eq!(cfg, MenuConfig::default());
        let menus = load_menus(&cfg.menus_path_in(temp.path())).expect("menus");
        assert!(menus.get("main_menu").is_some());
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let temp = tempfile::tempdir().expect("tempdir");
        init_project(temp.path(), &InitOptions { force: false }).expect("init");

        let err = init_project(temp.path(), &InitOptions { force: false }).expect_err("exists");
        assert!(err.to_string().contains("already exists"));

        init_project(temp.path(), &InitOptions { force: true }).expect("forced init");
    }
}
