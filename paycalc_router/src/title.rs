//! The page title as an injectable side effect.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Single writer of the page's display title.
pub trait TitleSink {
    /// Current title.
    fn title(&self) -> String;

    /// Replace the title.
    fn set_title(&self, title: &str);
}

impl<T: TitleSink + ?Sized> TitleSink for Rc<T> {
    fn title(&self) -> String {
        (**self).title()
    }

    fn set_title(&self, title: &str) {
        (**self).set_title(title)
    }
}

/// Title kept in memory; clones share the same cell.
#[derive(Debug, Clone, Default)]
pub struct MemoryTitle {
    title: Rc<RefCell<String>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryTitle {
    /// Start with `initial` as the title.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            title: Rc::new(RefCell::new(initial.into())),
            writes: Rc::new(Cell::new(0)),
        }
    }

    /// How many times the title was written.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl TitleSink for MemoryTitle {
    fn title(&self) -> String {
        self.title.borrow().clone()
    }

    fn set_title(&self, title: &str) {
        *self.title.borrow_mut() = title.to_owned();
        self.writes.set(self.writes.get() + 1);
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::DocumentTitle;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsValue;

    use super::TitleSink;

    /// Writes `document.title`.
    #[derive(Debug, Clone)]
    pub struct DocumentTitle {
        document: web_sys::Document,
    }

    impl DocumentTitle {
        /// Bind to the page's document.
        pub fn new() -> Result<Self, JsValue> {
            let window = web_sys::window().ok_or("No global window object")?;
            let document = window.document().ok_or("No document object")?;

            Ok(Self { document })
        }
    }

    impl TitleSink for DocumentTitle {
        fn title(&self) -> String {
            self.document.title()
        }

        fn set_title(&self, title: &str) {
            self.document.set_title(title);
        }
    }
}
