//! Client-side routing for the paycalc single-page application.
//!
//! A [`Router`] is built once from an ordered list of [`RouteDescriptor`]s and a
//! [`History`] backend, then drives every navigation of the page session.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod guard;
pub mod history;
pub mod location;
pub mod router;
pub mod title;
pub mod view;

pub use config::RouterConfig;
pub use descriptor::{RouteDescriptor, RouteMeta, RouteTarget};
pub use error::{LoadError, NavigationError, RouteTableError};
pub use guard::{AfterHook, Decision, GuardOutcome, NavigationGuard, Next};
pub use history::{History, MemoryHistory};
pub use location::RouteLocation;
pub use router::{Navigation, NavigationKind, Router};
pub use title::{MemoryTitle, TitleSink};
pub use view::{LazyView, View, ViewLoader};

#[cfg(target_arch = "wasm32")]
pub use history::WebHistory;
#[cfg(target_arch = "wasm32")]
pub use title::DocumentTitle;

pub use matchit;
