//! Named-route resolution for menu links.

use std::collections::BTreeMap;

/// Resolves a symbolic route name to a URL path.
pub trait UrlResolver {
    /// Return the path for `name`, or `None` when no such route exists.
    fn reverse(&self, name: &str) -> Option<String>;
}

/// Resolver backed by a name-to-path table (the `[routes]` config section).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: BTreeMap<String, String>,
}

impl RouteTable {
    pub fn new(routes: BTreeMap<String, String>) -> Self {
        Self { routes }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl UrlResolver for RouteTable {
    fn reverse(&self, name: &str) -> Option<String> {
        self.routes.get(name).cloned()
    }
}

/// Resolver with no routes; every named link falls back to `"#"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRoutes;

impl UrlResolver for NoRoutes {
    fn reverse(&self, _name: &str) -> Option<String> {
        None
    }
}
