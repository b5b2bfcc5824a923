//! Shared application state for the menu server.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use menu::project::MenuProject;

/// Shared state accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Loaded project; the menu store itself is re-read per request.
    pub project: Arc<MenuProject>,
    /// Menu drawn into every HTML page.
    pub page_menu: String,
}

impl AppState {
    pub fn new(project_dir: &Path, page_menu: impl Into<String>) -> Result<Self> {
        Ok(Self {
            project: Arc::new(MenuProject::open(project_dir)?),
            page_menu: page_menu.into(),
        })
    }
}
