//! Hierarchical navigation menus built from stored menu items.
//!
//! A menu is a named, flat list of items whose parent links form a forest.
//! For each request the items are fetched, their links resolved, and the tree
//! rebuilt with the branch leading to the current path marked active.
//!
//! - **[`core`]**: Pure, deterministic logic (tree building, invariants,
//!   active trail). No I/O.
//! - **[`io`]**: Side-effecting operations (config, menu store, scaffolding).
//!
//! [`draw`], [`render`], [`project`] and [`validate`] coordinate core logic
//! with I/O to implement the CLI commands and the web UI.

pub mod core;
pub mod draw;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod model;
pub mod project;
pub mod render;
pub mod routes;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod validate;
