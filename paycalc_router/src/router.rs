//! Client-side router.
//!
//! The router owns an immutable route table, a history backend and the
//! registered hooks. A navigation resolves descriptor redirects, runs the
//! `before_each` guards, loads the target view, writes history and finally
//! notifies the `after_each` hooks.

use matchit::Router as Matcher;
use std::{cell::RefCell, collections::HashSet, fmt, rc::Rc};
use tracing::{debug, info, warn};

use crate::config::RouterConfig;
use crate::descriptor::{RouteDescriptor, RouteTarget};
use crate::error::{NavigationError, RouteTableError};
use crate::guard::{AfterHook, Decision, GuardOutcome, NavigationGuard, Next};
use crate::history::History;
use crate::location::{RouteLocation, redirect_target, strip_query};
use crate::view::View;

/// How a navigation writes to history once it commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    /// Add a new entry.
    Push,
    /// Overwrite the current entry.
    Replace,
    /// The history already moved (back/forward); only fix it up after redirects.
    Pop,
}

/// A committed navigation.
#[derive(Clone)]
pub struct Navigation {
    /// Where the navigation ended.
    pub to: RouteLocation,
    /// Where it started.
    pub from: RouteLocation,
    /// The loaded view, `None` when nothing matched.
    pub view: Option<Rc<dyn View>>,
}

impl fmt::Debug for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigation")
            .field("to", &self.to)
            .field("from", &self.from)
            .field("view", &self.view.as_ref().map(|view| view.name()))
            .finish()
    }
}

/// Router over a fixed route table.
pub struct Router {
    /// Path matcher; values index into `routes`.
    matcher: Matcher<usize>,
    routes: Vec<RouteDescriptor>,
    history: Box<dyn History>,
    config: RouterConfig,
    before_guards: Vec<NavigationGuard>,
    after_hooks: Vec<AfterHook>,
    current: RefCell<RouteLocation>,
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes)
            .field("config", &self.config)
            .field("before_guards", &self.before_guards.len())
            .field("after_hooks", &self.after_hooks.len())
            .field("current", &self.current.borrow())
            .finish()
    }
}

impl Router {
    /// Build a router with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteTableError`] when a path is relative or declared twice,
    /// or when a redirect target is not absolute.
    pub fn new(
        routes: Vec<RouteDescriptor>,
        history: impl History + 'static,
    ) -> Result<Self, RouteTableError> {
        Self::with_config(routes, history, RouterConfig::default())
    }

    /// Build a router with an explicit configuration.
    pub fn with_config(
        routes: Vec<RouteDescriptor>,
        history: impl History + 'static,
        config: RouterConfig,
    ) -> Result<Self, RouteTableError> {
        let mut matcher = Matcher::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for (index, route) in routes.iter().enumerate() {
            let path = route.path();

            if !path.starts_with('/') {
                return Err(RouteTableError::InvalidPath(path.to_owned()));
            }

            if let RouteTarget::Redirect(target) = route.target() {
                if !target.starts_with('/') {
                    return Err(RouteTableError::InvalidRedirect {
                        path: path.to_owned(),
                        target: target.clone(),
                    });
                }
            }

            if !seen.insert(path) {
                return Err(RouteTableError::DuplicatePath(path.to_owned()));
            }

            matcher
                .insert(path, index)
                .map_err(|source| RouteTableError::Insert {
                    path: path.to_owned(),
                    source,
                })?;
        }

        drop(seen);
        debug!(routes = routes.len(), base = %config.base, "route table built");

        Ok(Self {
            matcher,
            routes,
            history: Box::new(history),
            config,
            before_guards: Vec::new(),
            after_hooks: Vec::new(),
            current: RefCell::new(RouteLocation::start()),
        })
    }

    /// Register a guard run before every navigation attempt.
    ///
    /// Guards run in registration order. The first one that does not proceed
    /// decides the outcome and the remaining guards are skipped.
    pub fn before_each<F>(&mut self, guard: F) -> &mut Self
    where
        F: Fn(&RouteLocation, &RouteLocation, Next) -> GuardOutcome + 'static,
    {
        self.before_guards.push(Box::new(guard));
        self
    }

    /// Register a hook run after every committed navigation.
    pub fn after_each<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(&RouteLocation, &RouteLocation) + 'static,
    {
        self.after_hooks.push(Box::new(hook));
        self
    }

    /// The validated route table, in declaration order.
    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Settings the router was built with.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// The history backend.
    pub fn history(&self) -> &dyn History {
        self.history.as_ref()
    }

    /// The last committed location.
    pub fn current_route(&self) -> RouteLocation {
        self.current.borrow().clone()
    }

    /// Look up a descriptor by route name.
    pub fn route_by_name(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.name() == Some(name))
    }

    /// Resolve a path to a location, following descriptor redirects.
    ///
    /// Guards are not consulted and nothing is loaded or committed.
    pub fn resolve(&self, path: &str) -> Result<RouteLocation, NavigationError> {
        let mut hops = 0;
        self.resolve_route(path, None, &mut hops)
            .map(|(location, _)| location)
    }

    /// Navigate to `path`, adding a history entry.
    pub async fn push(&self, path: &str) -> Result<Navigation, NavigationError> {
        self.navigate(path, NavigationKind::Push).await
    }

    /// Navigate to `path`, replacing the current history entry.
    pub async fn replace(&self, path: &str) -> Result<Navigation, NavigationError> {
        self.navigate(path, NavigationKind::Replace).await
    }

    /// Navigate to wherever the history currently points, e.g. after `popstate`.
    pub async fn sync(&self) -> Result<Navigation, NavigationError> {
        let location = self.history.location();
        self.navigate(&location, NavigationKind::Pop).await
    }

    /// Initial navigation to the location the page was opened at.
    pub async fn start(&self) -> Result<Navigation, NavigationError> {
        let location = self.history.location();
        info!(location = %location, "starting router");
        self.navigate(&location, NavigationKind::Replace).await
    }

    /// Run one navigation end to end.
    ///
    /// # Arguments
    ///
    /// * `path` - Requested location, may carry a query string
    /// * `kind` - How the committed location is written to history
    ///
    /// # Errors
    ///
    /// Fails when redirects loop, a guard aborts, the view fails to load or
    /// history rejects the update. Nothing is committed in any of those cases.
    pub async fn navigate(
        &self,
        path: &str,
        kind: NavigationKind,
    ) -> Result<Navigation, NavigationError> {
        let from = self.current_route();
        let mut hops = 0;
        let mut target = path.to_owned();
        let mut redirected_from = None;

        debug!(to = %path, from = %from.full_path, ?kind, "navigation started");

        let (to, route) = loop {
            let (to, route) = self.resolve_route(&target, redirected_from.take(), &mut hops)?;

            match self.run_guards(&to, &from) {
                Decision::Proceed => break (to, route),
                Decision::Abort => {
                    info!(to = %to.full_path, "navigation aborted by guard");
                    return Err(NavigationError::Aborted { path: to.full_path });
                }
                Decision::Redirect(next) => {
                    hops += 1;

                    if hops > self.config.max_redirects {
                        return Err(NavigationError::RedirectLoop { path: next });
                    }

                    debug!(from = %to.full_path, to = %next, "guard redirected navigation");
                    redirected_from = Some(to.redirected_from.unwrap_or(to.full_path));
                    target = next;
                }
            }
        };

        let view = match route.map(RouteDescriptor::target) {
            Some(RouteTarget::View(lazy)) => {
                let view = lazy
                    .load()
                    .await
                    .map_err(|source| NavigationError::Load {
                        path: to.full_path.clone(),
                        source,
                    })?;

                debug!(view = view.name(), loads = lazy.load_count(), "view ready");
                Some(view)
            }
            _ => {
                warn!(path = %to.full_path, "no route matches location");
                None
            }
        };

        self.write_history(&to, kind)?;
        *self.current.borrow_mut() = to.clone();

        for hook in &self.after_hooks {
            hook(&to, &from);
        }

        info!(to = %to.full_path, from = %from.full_path, "navigation committed");

        Ok(Navigation { to, from, view })
    }

    /// Match `full_path`, following redirect descriptors.
    ///
    /// `hops` is shared with guard redirects so both count toward the same limit.
    fn resolve_route(
        &self,
        full_path: &str,
        mut redirected_from: Option<String>,
        hops: &mut usize,
    ) -> Result<(RouteLocation, Option<&RouteDescriptor>), NavigationError> {
        let mut full_path = full_path.to_owned();

        loop {
            let Ok(matched) = self.matcher.at(strip_query(&full_path)) else {
                return Ok((RouteLocation::unmatched(&full_path, redirected_from), None));
            };

            let route = &self.routes[*matched.value];

            match route.target() {
                RouteTarget::Redirect(target) => {
                    *hops += 1;

                    if *hops > self.config.max_redirects {
                        return Err(NavigationError::RedirectLoop { path: full_path });
                    }

                    debug!(from = %full_path, to = %target, "following redirect");
                    redirected_from.get_or_insert_with(|| full_path.clone());
                    full_path = redirect_target(target, &full_path);
                }
                RouteTarget::View(_) => {
                    let location = RouteLocation::matched(route, &full_path, redirected_from);
                    return Ok((location, Some(route)));
                }
            }
        }
    }

    fn run_guards(&self, to: &RouteLocation, from: &RouteLocation) -> Decision {
        for guard in &self.before_guards {
            match guard(to, from, Next::new()).into_decision() {
                Decision::Proceed => continue,
                decision => return decision,
            }
        }

        Decision::Proceed
    }

    fn write_history(
        &self,
        to: &RouteLocation,
        kind: NavigationKind,
    ) -> Result<(), NavigationError> {
        let current = self.history.location();

        match kind {
            // Pushing the location we are already at would only duplicate the entry.
            NavigationKind::Push if current != to.full_path => self.history.push(&to.full_path),
            NavigationKind::Push | NavigationKind::Replace | NavigationKind::Pop => {
                if current != to.full_path {
                    self.history.replace(&to.full_path)
                } else {
                    Ok(())
                }
            }
        }
    }
}
