//! HTTP route handlers: the JSON API and the HTML page fallback.

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, Json};
use axum::routing::get;
use menu::core::trail::active_trail;
use menu::error::MenuError;
use menu::render::Format;
use percent_encoding::percent_decode_str;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::warn;

use crate::state::AppState;

/// Build the API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/menus", get(list_menus))
        .route("/menus/{name}", get(get_menu))
}

async fn health() -> &'static str {
    "ok"
}

/// GET /api/menus - names of all stored menus.
async fn list_menus(State(state): State<AppState>) -> Result<Json<Vec<String>>, StatusCode> {
    let names = state.project.names().map_err(|err| status_for(&err))?;
    Ok(Json(names))
}

#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    /// Request path the menu is drawn for.
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_path() -> String {
    "/".to_string()
}

/// GET /api/menus/:name?path=P - built forest and active trail for request path `P`.
async fn get_menu(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<MenuQuery>,
) -> Result<Json<Value>, StatusCode> {
    let tree = state
        .project
        .draw(&name, &query.path)
        .map_err(|err| status_for(&err))?;
    let forest = tree
        .forest()
        .map_err(|err| status_for(&anyhow::Error::from(err)))?;
    Ok(Json(json!({
        "menu": tree.menu_name,
        "path": tree.current_path,
        "trail": active_trail(&forest),
        "forest": forest,
    })))
}

/// Fallback: an HTML page with the page menu drawn for the request's own path.
///
/// The path is percent-decoded before matching so stored URLs compare as written.
///
/// A menu that cannot be drawn renders as empty rather than failing the page.
pub async fn page(State(state): State<AppState>, uri: Uri) -> Html<String> {
    let current_path = percent_decode_str(uri.path()).decode_utf8_lossy();
    let menu_html = match state
        .project
        .draw_as(&state.page_menu, &current_path, Format::Html)
    {
        Ok(html) => html,
        Err(err) => {
            warn!(
                menu = %state.page_menu,
                path = %current_path,
                error = %format!("{err:#}"),
                "menu unavailable, rendering empty"
            );
            String::new()
        }
    };
    Html(format!(
        "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>menu-ui</title></head>\n<body>\n<nav>\n{menu_html}\n</nav>\n</body>\n</html>\n"
    ))
}

fn status_for(err: &anyhow::Error) -> StatusCode {
    match err.downcast_ref::<MenuError>() {
        Some(MenuError::UnknownMenu { .. }) => StatusCode::NOT_FOUND,
        Some(MenuError::DuplicateItemId { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
        _ => {
            warn!(error = %format!("{err:#}"), "menu request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
