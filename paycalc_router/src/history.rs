//! History backends.
//!
//! Locations handed to and returned by a [`History`] never include the base
//! path; backends add and strip it themselves.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::NavigationError;

/// Storage for the navigation history of a router.
pub trait History {
    /// Base path all locations are mounted under (`""` for none).
    fn base(&self) -> &str;

    /// The current location, including query string and fragment.
    fn location(&self) -> String;

    /// Add a new entry and make it current.
    fn push(&self, path: &str) -> Result<(), NavigationError>;

    /// Overwrite the current entry.
    fn replace(&self, path: &str) -> Result<(), NavigationError>;
}

impl<T: History + ?Sized> History for Rc<T> {
    fn base(&self) -> &str {
        (**self).base()
    }

    fn location(&self) -> String {
        (**self).location()
    }

    fn push(&self, path: &str) -> Result<(), NavigationError> {
        (**self).push(path)
    }

    fn replace(&self, path: &str) -> Result<(), NavigationError> {
        (**self).replace(path)
    }
}

/// Normalize a base path to either `""` or `/segment` without a trailing slash.
pub(crate) fn normalize_base(base: &str) -> String {
    let trimmed = base.trim_end_matches('/');

    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

/// Remove `base` from the start of `path`, falling back to `/`.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn strip_base<'a>(base: &str, path: &'a str) -> &'a str {
    let stripped = if base.is_empty() {
        path
    } else {
        match path.strip_prefix(base) {
            Some(rest) if rest.is_empty() || rest.starts_with(['/', '?', '#']) => rest,
            _ => path,
        }
    };

    if stripped.is_empty() { "/" } else { stripped }
}

/// History kept entirely in memory.
///
/// Used off the browser and in tests.
#[derive(Debug)]
pub struct MemoryHistory {
    base: String,
    entries: RefCell<Vec<String>>,
    position: Cell<usize>,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHistory {
    /// A history with a single `/` entry.
    pub fn new() -> Self {
        Self::with_location("/")
    }

    /// A history whose single entry is `path`.
    pub fn with_location(path: impl Into<String>) -> Self {
        Self {
            base: String::new(),
            entries: RefCell::new(vec![path.into()]),
            position: Cell::new(0),
        }
    }

    /// Set the base path reported by [`History::base`].
    pub fn with_base(mut self, base: &str) -> Self {
        self.base = normalize_base(base);
        self
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Snapshot of all entries, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    /// Move one entry back, returning the new location.
    pub fn back(&self) -> Option<String> {
        let position = self.position.get().checked_sub(1)?;
        self.position.set(position);
        Some(self.location())
    }

    /// Move one entry forward, returning the new location.
    pub fn forward(&self) -> Option<String> {
        let position = self.position.get() + 1;

        if position >= self.len() {
            return None;
        }

        self.position.set(position);
        Some(self.location())
    }
}

impl History for MemoryHistory {
    fn base(&self) -> &str {
        &self.base
    }

    fn location(&self) -> String {
        self.entries
            .borrow()
            .get(self.position.get())
            .cloned()
            .unwrap_or_else(|| "/".to_owned())
    }

    fn push(&self, path: &str) -> Result<(), NavigationError> {
        let mut entries = self.entries.borrow_mut();
        let position = self.position.get() + 1;

        // Pushing after going back drops the forward entries.
        entries.truncate(position);
        entries.push(path.to_owned());
        self.position.set(position);

        Ok(())
    }

    fn replace(&self, path: &str) -> Result<(), NavigationError> {
        let mut entries = self.entries.borrow_mut();

        match entries.get_mut(self.position.get()) {
            Some(entry) => *entry = path.to_owned(),
            None => entries.push(path.to_owned()),
        }

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebHistory;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsValue;

    use super::{History, normalize_base, strip_base};
    use crate::error::NavigationError;

    /// Browser path history (`pushState` / `replaceState`, not hash routing).
    #[derive(Debug)]
    pub struct WebHistory {
        base: String,
        history: web_sys::History,
        location: web_sys::Location,
    }

    impl WebHistory {
        /// Bind to the page's history with the given base path.
        pub fn new(base: &str) -> Result<Self, JsValue> {
            let window = web_sys::window().ok_or("No global window object")?;

            Ok(Self {
                base: normalize_base(base),
                history: window.history()?,
                location: window.location(),
            })
        }

        fn href(&self, path: &str) -> String {
            format!("{}{path}", self.base)
        }
    }

    impl History for WebHistory {
        fn base(&self) -> &str {
            &self.base
        }

        fn location(&self) -> String {
            let pathname = self.location.pathname().unwrap_or_else(|_| "/".to_owned());
            let search = self.location.search().unwrap_or_default();
            let hash = self.location.hash().unwrap_or_default();

            format!("{}{search}{hash}", strip_base(&self.base, &pathname))
        }

        fn push(&self, path: &str) -> Result<(), NavigationError> {
            self.history
                .push_state_with_url(&js_sys::Object::new(), "", Some(&self.href(path)))
                .map_err(|e| NavigationError::History(format!("{e:?}")))
        }

        fn replace(&self, path: &str) -> Result<(), NavigationError> {
            self.history
                .replace_state_with_url(&js_sys::Object::new(), "", Some(&self.href(path)))
                .map_err(|e| NavigationError::History(format!("{e:?}")))
        }
    }
}
