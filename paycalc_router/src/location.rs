//! Resolved locations.

#![allow(missing_docs)]

use serde::Serialize;

use crate::descriptor::{RouteDescriptor, RouteMeta};

/// A resolved navigation target, as seen by guards and hooks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLocation {
    /// Path used for matching (query and fragment removed).
    pub path: String,
    /// Path as requested, including query and fragment.
    pub full_path: String,
    pub name: Option<String>,
    pub meta: RouteMeta,
    /// `false` when no descriptor matched.
    pub matched: bool,
    /// The originally requested location when redirects were followed.
    pub redirected_from: Option<String>,
}

impl RouteLocation {
    /// The location every router starts from before its first navigation.
    pub fn start() -> Self {
        Self {
            path: "/".to_owned(),
            full_path: "/".to_owned(),
            name: None,
            meta: RouteMeta::new(),
            matched: false,
            redirected_from: None,
        }
    }

    pub(crate) fn matched(
        route: &RouteDescriptor,
        full_path: &str,
        redirected_from: Option<String>,
    ) -> Self {
        Self {
            path: strip_query(full_path).to_owned(),
            full_path: full_path.to_owned(),
            name: route.name().map(str::to_owned),
            meta: route.meta().clone(),
            matched: true,
            redirected_from,
        }
    }

    pub(crate) fn unmatched(full_path: &str, redirected_from: Option<String>) -> Self {
        Self {
            path: strip_query(full_path).to_owned(),
            full_path: full_path.to_owned(),
            name: None,
            meta: RouteMeta::new(),
            matched: false,
            redirected_from,
        }
    }
}

/// Drop the query string and fragment from a path.
pub(crate) fn strip_query(full_path: &str) -> &str {
    let end = full_path.find(['?', '#']).unwrap_or(full_path.len());
    &full_path[..end]
}

/// Redirect target carrying over the query and fragment of `full_path`,
/// unless the target has its own.
pub(crate) fn redirect_target(target: &str, full_path: &str) -> String {
    if target.contains(['?', '#']) {
        return target.to_owned();
    }

    let suffix = &full_path[strip_query(full_path).len()..];
    format!("{target}{suffix}")
}
