//! Route table entries.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::view::LazyView;

/// Arbitrary per-route metadata.
///
/// Always present on descriptors and resolved locations, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteMeta(Map<String, Value>);

impl RouteMeta {
    /// Empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// The display title, when one is set and is a string.
    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// What a route resolves to.
#[derive(Debug, Clone)]
pub enum RouteTarget {
    /// Unconditional redirect to another absolute path.
    Redirect(String),
    /// A lazily loaded view.
    View(LazyView),
}

/// One entry of a route table.
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    path: String,
    name: Option<String>,
    target: RouteTarget,
    meta: RouteMeta,
}

impl RouteDescriptor {
    /// A descriptor that sends every visit of `path` to `to`.
    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            target: RouteTarget::Redirect(to.into()),
            meta: RouteMeta::new(),
        }
    }

    /// A descriptor that renders `view` when `path` is visited.
    pub fn view(path: impl Into<String>, view: LazyView) -> Self {
        Self {
            path: path.into(),
            name: None,
            target: RouteTarget::View(view),
            meta: RouteMeta::new(),
        }
    }

    /// Set the route name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add one metadata entry.
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key, value);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn target(&self) -> &RouteTarget {
        &self.target
    }

    pub fn meta(&self) -> &RouteMeta {
        &self.meta
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self.target, RouteTarget::Redirect(_))
    }
}
