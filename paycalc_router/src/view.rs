//! Views and their lazy loaders.

use futures_util::FutureExt;
use futures_util::future::LocalBoxFuture;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use crate::error::LoadError;

/// A page the router can show once its route is resolved.
pub trait View {
    /// Stable name of the view, used in logs.
    fn name(&self) -> &'static str;

    /// Render the view to HTML markup.
    fn render(&self) -> String;
}

/// Deferred factory producing a view on first use.
pub type ViewLoader = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<Rc<dyn View>, LoadError>>>;

/// A lazily loaded view.
///
/// The loader runs on the first visit of the owning route; the first successful
/// result is cached and shared by every clone. Failed loads are not cached, so
/// the next visit calls the loader again.
#[derive(Clone)]
pub struct LazyView {
    loader: ViewLoader,
    cache: Rc<RefCell<Option<Rc<dyn View>>>>,
    loads: Rc<Cell<usize>>,
}

impl LazyView {
    /// Wrap an async loader.
    pub fn new<F, Fut>(loader: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<Rc<dyn View>, LoadError>> + 'static,
    {
        let loader: ViewLoader = Rc::new(move || loader().boxed_local());

        Self {
            loader,
            cache: Rc::new(RefCell::new(None)),
            loads: Rc::new(Cell::new(0)),
        }
    }

    /// Whether a view has already been resolved.
    pub fn is_loaded(&self) -> bool {
        self.cache.borrow().is_some()
    }

    /// How many times the loader has been invoked.
    pub fn load_count(&self) -> usize {
        self.loads.get()
    }

    /// Resolve the view, calling the loader only when nothing is cached yet.
    pub async fn load(&self) -> Result<Rc<dyn View>, LoadError> {
        if let Some(view) = self.cached() {
            return Ok(view);
        }

        self.loads.set(self.loads.get() + 1);
        let view = (self.loader)().await?;

        // Two overlapping first visits may both load; the first result wins.
        let mut cache = self.cache.borrow_mut();
        Ok(cache.get_or_insert(view).clone())
    }

    fn cached(&self) -> Option<Rc<dyn View>> {
        self.cache.borrow().clone()
    }
}

impl fmt::Debug for LazyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyView")
            .field("loader", &"<ViewLoader>")
            .field("loaded", &self.is_loaded())
            .field("loads", &self.loads.get())
            .finish()
    }
}
