//! Markup rendering for built menu forests.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use minijinja::{Environment, context};
use tracing::debug;

use crate::core::types::MenuTreeNode;
use crate::error::MenuError;

/// Template name; the `.html` suffix turns on HTML auto-escaping.
pub const TEMPLATE_NAME: &str = "draw_menu.html";

const DRAW_MENU_TEMPLATE: &str = include_str!("templates/draw_menu.html");

/// Output format for a rendered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Html,
    Json,
}

/// Template engine wrapper around minijinja.
pub struct MenuRenderer {
    env: Environment<'static>,
}

impl MenuRenderer {
    /// Renderer using the built-in `draw_menu.html`.
    pub fn new() -> Result<Self, MenuError> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, DRAW_MENU_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Renderer using `draw_menu.html` from `dir`, read once at construction.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(TEMPLATE_NAME);
        let source = fs::read_to_string(&path)
            .with_context(|| format!("read template {}", path.display()))?;
        let mut env = Environment::new();
        env.add_template_owned(TEMPLATE_NAME, source)
            .with_context(|| format!("parse template {}", path.display()))?;
        Ok(Self { env })
    }

    /// Built-in renderer, or the override in `dir` when one is configured.
    pub fn for_templates_dir(dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(dir) => Self::from_dir(dir),
            None => Ok(Self::new()?),
        }
    }

    /// Render nested list markup for `forest`.
    ///
    /// A node's children are emitted only when it has children and
    /// `show_children` is set.
    pub fn render(&self, forest: &[MenuTreeNode<'_>]) -> Result<String, MenuError> {
        let template = self.env.get_template(TEMPLATE_NAME)?;
        let rendered = template.render(context! { menu_tree => forest })?;
        debug!(roots = forest.len(), bytes = rendered.len(), "rendered menu");
        Ok(rendered)
    }
}

/// Render `forest` in `format`.
pub fn render_as(
    renderer: &MenuRenderer,
    forest: &[MenuTreeNode<'_>],
    format: Format,
) -> Result<String> {
    match format {
        Format::Html => Ok(renderer.render(forest)?),
        Format::Json => {
            let mut buf = serde_json::to_string_pretty(forest).context("serialize menu json")?;
            buf.push('\n');
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::build;
    use crate::test_support::{child, decode_slashes, root};

    #[test]
    fn active_branch_renders_expanded() {
        let records = vec![
            root(1, "Shop", "/shop"),
            child(2, 1, "Shoes", "/shop/shoes"),
            root(3, "Blog", "/blog"),
            child(4, 3, "Archive", "/blog/archive"),
        ];
        let forest = build(&records, "/shop/shoes").expect("build");
        let html = MenuRenderer::new().expect("renderer").render(&forest).expect("render");
        let html = decode_slashes(&html);

        assert!(html.contains(r#"<a href="/shop" class="active">Shop</a>"#));
        assert!(html.contains(r#"<a href="/shop/shoes" class="active">Shoes</a>"#));
        assert!(html.contains(r#"<a href="/blog" class="">Blog</a>"#));
        assert!(!html.contains("Archive"), "collapsed branch must not render children");
        assert_eq!(html.matches("<ul>").count(), 2);
    }

    #[test]
    fn titles_are_html_escaped() {
        let records = vec![root(1, "Tips & <Tricks>", "/tips")];
        let forest = build(&records, "/").expect("build");
        let html = MenuRenderer::new().expect("renderer").render(&forest).expect("render");

        assert!(html.contains("Tips &amp; &lt;Tricks&gt;"));
    }

    #[test]
    fn empty_forest_renders_empty_list() {
        let html = MenuRenderer::new().expect("renderer").render(&[]).expect("render");
        assert_eq!(html.trim(), "<ul>\n</ul>");
    }

    #[test]
    fn template_override_is_loaded_from_dir() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(
            temp.path().join(TEMPLATE_NAME),
            "{% for node in menu_tree %}[{{ node.item.title }}]{% endfor %}",
        )
        .expect("write template");

        let records = vec![root(1, "Home", "/"), root(2, "Docs", "/docs")];
        let forest = build(&records, "/").expect("build");
        let renderer = MenuRenderer::for_templates_dir(Some(temp.path())).expect("renderer");
        assert_eq!(renderer.render(&forest).expect("render"), "[Home][Docs]");
    }

    #[test]
    fn json_output_carries_flags() {
        let records = vec![root(1, "Home", "/")];
        let forest = build(&records, "/").expect("build");
        let renderer = MenuRenderer::new().expect("renderer");

        let json = render_as(&renderer, &forest, Format::Json).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value[0]["item"]["title"], "Home");
        assert_eq!(value[0]["is_active"], true);
        assert_eq!(value[0]["show_children"], false);
    }
}
