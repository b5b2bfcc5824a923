//! The `draw_menu` operation: fetch a named menu, resolve links, build the tree.

use anyhow::Result;
use tracing::debug;

use crate::core::builder::build;
use crate::core::types::{MenuItemRecord, MenuTreeNode};
use crate::error::MenuError;
use crate::io::menu_store::MenuSource;
use crate::render::{Format, MenuRenderer, render_as};
use crate::routes::UrlResolver;

/// A fetched menu with resolved records, ready to be built for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTree {
    pub menu_name: String,
    pub current_path: String,
    records: Vec<MenuItemRecord>,
}

impl MenuTree {
    pub fn new(
        menu_name: impl Into<String>,
        current_path: impl Into<String>,
        records: Vec<MenuItemRecord>,
    ) -> Self {
        Self {
            menu_name: menu_name.into(),
            current_path: current_path.into(),
            records,
        }
    }

    /// Build the annotated forest; nodes borrow this tree's records.
    pub fn forest(&self) -> Result<Vec<MenuTreeNode<'_>>, MenuError> {
        build(&self.records, &self.current_path)
    }
}

/// Fetch `menu_name` from `source` and resolve its links for `current_path`.
pub fn draw_menu(
    source: &dyn MenuSource,
    resolver: &dyn UrlResolver,
    menu_name: &str,
    current_path: &str,
) -> Result<MenuTree> {
    let menu = source.fetch(menu_name)?;
    let records = menu.records(resolver);
    debug!(
        menu = menu_name,
        path = current_path,
        items = records.len(),
        "drawing menu"
    );
    Ok(MenuTree::new(menu_name, current_path, records))
}

/// [`draw_menu`] followed by rendering in `format`.
pub fn draw_menu_as(
    source: &dyn MenuSource,
    resolver: &dyn UrlResolver,
    renderer: &MenuRenderer,
    menu_name: &str,
    current_path: &str,
    format: Format,
) -> Result<String> {
    let tree = draw_menu(source, resolver, menu_name, current_path)?;
    let forest = tree.forest()?;
    render_as(renderer, &forest, format)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::io::menu_store::MenuSet;
    use crate::model::Menu;
    use crate::routes::{NoRoutes, RouteTable};
    use crate::test_support::{decode_slashes, item, named_item};

    fn shop_menus() -> MenuSet {
        MenuSet::new(vec![Menu {
            name: "main_menu".to_string(),
            items: vec![
                item(1, None, "Home", "/"),
                named_item(2, None, "Shop", "shop"),
                item(3, Some(2), "Shoes", "/shop/shoes/"),
                named_item(4, None, "Legacy", "gone"),
            ],
        }])
        .expect("menus")
    }

    fn routes() -> RouteTable {
        RouteTable::new(BTreeMap::from([("shop".to_string(), "/shop/".to_string())]))
    }

    #[test]
    fn draw_resolves_named_routes_and_marks_active_branch() {
        let tree = draw_menu(&shop_menus(), &routes(), "main_menu", "/shop/shoes/red").expect("draw");
        let forest = tree.forest().expect("forest");

        let urls: Vec<&str> = forest.iter().map(|node| node.url()).collect();
        assert_eq!(urls, vec!["/", "/shop/", "#"]);
        assert!(forest[1].show_children);
        assert!(forest[1].children[0].is_active);
        assert!(!forest[2].is_active, "fallback link never matches a request path");
    }

    #[test]
    fn draw_unknown_menu_propagates_typed_error() {
        let err = draw_menu(&shop_menus(), &NoRoutes, "footer", "/").expect_err("unknown");
        assert!(matches!(
            err.downcast_ref::<MenuError>(),
            Some(MenuError::UnknownMenu { .. })
        ));
    }

    #[test]
    fn draw_as_html_renders_expanded_branch() {
        let renderer = MenuRenderer::new().expect("renderer");
        let html = draw_menu_as(
            &shop_menus(),
            &routes(),
            &renderer,
            "main_menu",
            "/shop/",
            Format::Html,
        )
        .expect("draw");
        let html = decode_slashes(&html);

        assert!(html.contains(r#"<a href="/shop/" class="active">Shop</a>"#));
        assert!(html.contains(r#"<a href="/shop/shoes/" class="">Shoes</a>"#));
        assert!(html.contains(r##"<a href="#" class="">Legacy</a>"##));
    }
}
