//! Project configuration stored in `menu.toml`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::routes::RouteTable;

/// Menu configuration (TOML).
///
/// Edited by humans. Missing fields fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MenuConfig {
    /// Menu store file, relative to the project directory unless absolute.
    pub menus_path: PathBuf,

    /// Directory holding a `draw_menu.html` override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<PathBuf>,

    /// Named routes available to `named_url` items (name -> path).
    pub routes: BTreeMap<String, String>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            menus_path: PathBuf::from("menus.json"),
            templates_dir: None,
            routes: BTreeMap::from([("shop".to_string(), "/shop/".to_string())]),
        }
    }
}

impl MenuConfig {
    pub fn validate(&self) -> Result<()> {
        if self.menus_path.as_os_str().is_empty() {
            return Err(anyhow!("menus_path must not be empty"));
        }
        for (name, path) in &self.routes {
            if name.trim().is_empty() {
                return Err(anyhow!("routes: route names must not be empty"));
            }
            if path.trim().is_empty() {
                return Err(anyhow!("routes.{name}: path must not be empty"));
            }
        }
        Ok(())
    }

    /// Menu store location resolved against `root`.
    pub fn menus_path_in(&self, root: &Path) -> PathBuf {
        root.join(&self.menus_path)
    }

    /// Template override directory resolved against `root`.
    pub fn templates_dir_in(&self, root: &Path) -> Option<PathBuf> {
        self.templates_dir.as_ref().map(|dir| root.join(dir))
    }

    pub fn route_table(&self) -> RouteTable {
        RouteTable::new(self.routes.clone())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `MenuConfig::default()`.
pub fn load_config(path: &Path) -> Result<MenuConfig> {
    if !path.exists() {
        let cfg = MenuConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: MenuConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &MenuConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
