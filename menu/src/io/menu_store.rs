//! Menu store: the record source that supplies a named menu's items.
//!
//! The file store is a single JSON document validated against an embedded
//! schema plus store invariants. It is re-read on every fetch.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow};
use jsonschema::{Validator, validator_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::MenuError;
use crate::model::Menu;

const STORE_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/schemas/menus/v1.schema.json"
));

static STORE_VALIDATOR: LazyLock<Validator> = LazyLock::new(|| {
    let schema: Value =
        serde_json::from_str(STORE_SCHEMA).expect("menu store schema should be valid json");
    validator_for(&schema).expect("menu store schema should compile")
});

/// Supplies the full, ordered item list for a named menu in one fetch.
pub trait MenuSource {
    /// Fetch the menu called `name`.
    ///
    /// Unknown names fail with [`MenuError::UnknownMenu`].
    fn fetch(&self, name: &str) -> Result<Menu>;

    /// Names of all stored menus, in store order.
    fn names(&self) -> Result<Vec<String>>;
}

/// In-memory menus keyed by unique name.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuSet {
    pub menus: Vec<Menu>,
}

impl MenuSet {
    pub fn new(menus: Vec<Menu>) -> Result<Self> {
        let set = Self { menus };
        set.validate()?;
        Ok(set)
    }

    pub fn get(&self, name: &str) -> Option<&Menu> {
        self.menus.iter().find(|menu| menu.name == name)
    }

    /// Menu names must be unique across the store.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for menu in &self.menus {
            if !seen.insert(menu.name.as_str()) {
                return Err(anyhow!("duplicate menu name '{}'", menu.name));
            }
        }
        Ok(())
    }
}

impl MenuSource for MenuSet {
    fn fetch(&self, name: &str) -> Result<Menu> {
        self.get(name).cloned().ok_or_else(|| {
            MenuError::UnknownMenu {
                name: name.to_string(),
            }
            .into()
        })
    }

    fn names(&self) -> Result<Vec<String>> {
        Ok(self.menus.iter().map(|menu| menu.name.clone()).collect())
    }
}

/// Menu store backed by a JSON file, loaded fresh on each call.
#[derive(Clone, Debug)]
pub struct FileMenuStore {
    path: PathBuf,
}

impl FileMenuStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MenuSource for FileMenuStore {
    fn fetch(&self, name: &str) -> Result<Menu> {
        let set = load_menus(&self.path)?;
        let menu = set.fetch(name)?;
        debug!(menu = name, items = menu.items.len(), "fetched menu");
        Ok(menu)
    }

    fn names(&self) -> Result<Vec<String>> {
        load_menus(&self.path)?.names()
    }
}

/// Load and validate menus from disk (schema + unique names).
pub fn load_menus(path: &Path) -> Result<MenuSet> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read menus {}", path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("parse menus {}", path.display()))?;
    validate_schema(&value).with_context(|| format!("validate menus {}", path.display()))?;
    let set: MenuSet = serde_json::from_value(value)
        .with_context(|| format!("deserialize menus {}", path.display()))?;
    set.validate()?;
    Ok(set)
}

/// Write menus to disk as pretty JSON with a trailing newline.
pub fn write_menus(path: &Path, set: &MenuSet) -> Result<()> {
    set.validate()?;
    let mut buf = serde_json::to_string_pretty(set)?;
    buf.push('\n');
    fs::write(path, buf).with_context(|| format!("write menus {}", path.display()))
}

fn validate_schema(store: &Value) -> Result<()> {
    let compiled = &*STORE_VALIDATOR;
    if !compiled.is_valid(store) {
        let messages = compiled
            .iter_errors(store)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "menu store schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}
