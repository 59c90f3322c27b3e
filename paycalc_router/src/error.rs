//! Error types produced while building a route table or navigating.

use thiserror::Error;

/// Authoring errors detected when a route table is turned into a [`Router`](crate::Router).
#[derive(Debug, Error)]
pub enum RouteTableError {
    /// The route path is not absolute.
    #[error("route path `{0}` must start with `/`")]
    InvalidPath(String),

    /// A redirect points at something that is not an absolute path.
    #[error("route `{path}` redirects to `{target}`, which does not start with `/`")]
    InvalidRedirect {
        /// Path of the redirecting route.
        path: String,
        /// The offending redirect target.
        target: String,
    },

    /// Two descriptors share the same path.
    #[error("route path `{0}` is declared more than once")]
    DuplicatePath(String),

    /// The matcher refused the path.
    #[error("failed to insert route `{path}`: {source}")]
    Insert {
        /// Path that could not be inserted.
        path: String,
        /// Error reported by the matcher.
        #[source]
        source: matchit::InsertError,
    },
}

/// A view loader failed to produce its view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LoadError {
    message: String,
}

impl LoadError {
    /// Create a load error with a human readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message the loader reported.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Reasons a navigation did not commit.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// Redirects (from descriptors or guards) exceeded the configured limit.
    #[error("too many redirects while navigating to `{path}`")]
    RedirectLoop {
        /// Location reached when the limit was hit.
        path: String,
    },

    /// A guard aborted the navigation.
    #[error("navigation to `{path}` was aborted by a guard")]
    Aborted {
        /// Location the navigation was heading to.
        path: String,
    },

    /// The target's view could not be loaded.
    #[error("failed to load the view for `{path}`: {source}")]
    Load {
        /// Location whose view failed.
        path: String,
        /// Error reported by the loader.
        #[source]
        source: LoadError,
    },

    /// The history backend rejected the update.
    #[error("history update failed: {0}")]
    History(String),
}
