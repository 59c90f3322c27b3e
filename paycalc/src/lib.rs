//! Salary calculator single-page application.
//!
//! The crate owns the route table, the page-title hook and, on wasm32, the
//! wiring that binds the router to the browser.

use paycalc_router::{History, RouteTableError, Router, TitleSink};
use std::rc::Rc;
use tracing::info;

pub mod config;
pub mod log;
pub mod routes;
pub mod title;
pub mod views;

#[cfg(target_arch = "wasm32")]
mod client;

pub use config::AppConfig;
pub use paycalc_router;
pub use routes::routes;
pub use title::{TITLE_SUFFIX, title_guard};

#[cfg(target_arch = "wasm32")]
pub use client::{NAVIGATE_EVENT, mount, navigate};

/// Build the application router with the default configuration.
pub fn create_router(
    history: impl History + 'static,
    title: Rc<dyn TitleSink>,
) -> Result<Router, RouteTableError> {
    create_router_with_config(history, title, &AppConfig::default())
}

/// Build the application router and register the title hook.
pub fn create_router_with_config(
    history: impl History + 'static,
    title: Rc<dyn TitleSink>,
    config: &AppConfig,
) -> Result<Router, RouteTableError> {
    let mut router = Router::with_config(routes(), history, config.router.clone())?;
    router.before_each(title_guard(title, config.title_suffix.clone()));

    info!(routes = router.routes().len(), "salary calculator router created");

    Ok(router)
}
