#![allow(missing_docs)]

use paycalc_router::{
    History, LazyView, LoadError, MemoryHistory, NavigationError, RouteDescriptor,
    RouteTableError, Router, RouterConfig, View,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// Simple test view
struct TestView {
    name: &'static str,
    content: &'static str,
}

impl View for TestView {
    fn name(&self) -> &'static str {
        self.name
    }

    fn render(&self) -> String {
        self.content.to_owned()
    }
}

fn lazy(name: &'static str, content: &'static str) -> LazyView {
    LazyView::new(move || async move { Ok(Rc::new(TestView { name, content }) as Rc<dyn View>) })
}

fn table() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::redirect("/", "/home"),
        RouteDescriptor::view("/home", lazy("Home", "Home"))
            .with_name("Home")
            .with_meta("title", "Home"),
        RouteDescriptor::view("/about", lazy("About", "About")).with_name("About"),
    ]
}

#[tokio::test]
async fn test_redirect_is_followed() {
    let router = Router::new(table(), MemoryHistory::new()).unwrap();

    let navigation = router.push("/").await.unwrap();

    assert_eq!(navigation.to.path, "/home");
    assert_eq!(navigation.to.name.as_deref(), Some("Home"));
    assert_eq!(navigation.to.redirected_from.as_deref(), Some("/"));
    assert_eq!(navigation.view.unwrap().render(), "Home");
    assert_eq!(router.current_route().path, "/home");
}

#[test]
fn test_chained_redirects() {
    let routes = vec![
        RouteDescriptor::redirect("/", "/old"),
        RouteDescriptor::redirect("/old", "/new"),
        RouteDescriptor::view("/new", lazy("New", "New")),
    ];
    let router = Router::new(routes, MemoryHistory::new()).unwrap();

    let location = router.resolve("/").unwrap();
    assert_eq!(location.path, "/new");
    assert_eq!(location.redirected_from.as_deref(), Some("/"));
}

#[tokio::test]
async fn test_redirect_loop_is_reported() {
    let routes = vec![
        RouteDescriptor::redirect("/a", "/b"),
        RouteDescriptor::redirect("/b", "/a"),
    ];
    let history = Rc::new(MemoryHistory::new());
    let router = Router::new(routes, history.clone()).unwrap();

    let result = router.push("/a").await;

    assert!(matches!(result, Err(NavigationError::RedirectLoop { .. })));
    assert_eq!(history.len(), 1);
}

#[test]
fn test_invalid_tables_are_rejected() {
    let relative = vec![RouteDescriptor::view("home", lazy("Home", "Home"))];
    assert!(matches!(
        Router::new(relative, MemoryHistory::new()),
        Err(RouteTableError::InvalidPath(path)) if path == "home"
    ));

    let duplicate = vec![
        RouteDescriptor::view("/home", lazy("Home", "Home")),
        RouteDescriptor::redirect("/home", "/about"),
    ];
    assert!(matches!(
        Router::new(duplicate, MemoryHistory::new()),
        Err(RouteTableError::DuplicatePath(path)) if path == "/home"
    ));

    let bad_redirect = vec![RouteDescriptor::redirect("/", "home")];
    assert!(matches!(
        Router::new(bad_redirect, MemoryHistory::new()),
        Err(RouteTableError::InvalidRedirect { .. })
    ));
}

#[tokio::test]
async fn test_unknown_path_commits_without_view() {
    let router = Router::new(table(), MemoryHistory::new()).unwrap();

    let navigation = router.push("/unknown").await.unwrap();

    assert!(!navigation.to.matched);
    assert!(navigation.to.meta.is_empty());
    assert!(navigation.view.is_none());
    assert_eq!(router.history().location(), "/unknown");
}

#[tokio::test]
async fn test_guard_abort_commits_nothing() {
    let history = Rc::new(MemoryHistory::new());
    let mut router = Router::new(table(), history.clone()).unwrap();
    router.before_each(|to, _from, next| {
        if to.path == "/about" {
            next.abort()
        } else {
            next.proceed()
        }
    });

    router.push("/home").await.unwrap();
    let result = router.push("/about").await;

    assert!(matches!(result, Err(NavigationError::Aborted { path }) if path == "/about"));
    assert_eq!(router.current_route().path, "/home");
    assert_eq!(history.entries(), vec!["/", "/home"]);
}

#[tokio::test]
async fn test_guard_redirect_restarts_navigation() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut router = Router::new(table(), MemoryHistory::new()).unwrap();
    {
        let seen = seen.clone();
        router.before_each(move |to, _from, next| {
            seen.borrow_mut().push(to.path.clone());
            if to.path == "/about" {
                next.redirect("/")
            } else {
                next.proceed()
            }
        });
    }

    let navigation = router.push("/about").await.unwrap();

    assert_eq!(navigation.to.path, "/home");
    assert_eq!(navigation.to.redirected_from.as_deref(), Some("/about"));
    assert_eq!(*seen.borrow(), vec!["/about", "/home"]);
}

#[tokio::test]
async fn test_guard_redirect_loop_is_bounded() {
    let config = RouterConfig {
        max_redirects: 3,
        ..RouterConfig::default()
    };
    let mut router = Router::with_config(table(), MemoryHistory::new(), config).unwrap();
    router.before_each(|to, _from, next| {
        if to.path == "/home" {
            next.redirect("/about")
        } else {
            next.redirect("/home")
        }
    });

    let result = router.push("/home").await;
    assert!(matches!(result, Err(NavigationError::RedirectLoop { .. })));
}

#[tokio::test]
async fn test_guards_run_in_order_and_stop_at_first_decision() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut router = Router::new(table(), MemoryHistory::new()).unwrap();

    for id in 0..3 {
        let calls = calls.clone();
        router.before_each(move |_to, _from, next| {
            calls.borrow_mut().push(id);
            if id == 1 { next.abort() } else { next.proceed() }
        });
    }

    assert!(router.push("/home").await.is_err());
    assert_eq!(*calls.borrow(), vec![0, 1]);
}

#[tokio::test]
async fn test_after_each_sees_committed_navigation() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut router = Router::new(table(), MemoryHistory::new()).unwrap();
    {
        let log = log.clone();
        router.after_each(move |to, from| {
            log.borrow_mut().push(format!("{} -> {}", from.path, to.path));
        });
    }

    router.push("/").await.unwrap();
    router.push("/about").await.unwrap();

    assert_eq!(*log.borrow(), vec!["/ -> /home", "/home -> /about"]);
}

#[tokio::test]
async fn test_view_loaded_once_across_visits() {
    let view = lazy("Home", "Home");
    let routes = vec![
        RouteDescriptor::view("/home", view.clone()),
        RouteDescriptor::view("/about", lazy("About", "About")),
    ];
    let router = Router::new(routes, MemoryHistory::new()).unwrap();

    router.push("/home").await.unwrap();
    router.push("/about").await.unwrap();
    router.push("/home").await.unwrap();

    assert_eq!(view.load_count(), 1);
}

#[tokio::test]
async fn test_failed_load_is_not_committed_and_retried() {
    let attempts = Rc::new(Cell::new(0));
    let view = {
        let attempts = attempts.clone();
        LazyView::new(move || {
            attempts.set(attempts.get() + 1);
            let attempt = attempts.get();
            async move {
                if attempt == 1 {
                    Err(LoadError::new("network down"))
                } else {
                    Ok(Rc::new(TestView {
                        name: "Home",
                        content: "Home",
                    }) as Rc<dyn View>)
                }
            }
        })
    };
    let router = Router::new(
        vec![RouteDescriptor::view("/home", view)],
        MemoryHistory::new(),
    )
    .unwrap();

    let err = router.push("/home").await.unwrap_err();
    assert!(matches!(err, NavigationError::Load { ref path, .. } if path == "/home"));
    assert_eq!(router.current_route().path, "/");

    assert!(router.push("/home").await.is_ok());
    assert_eq!(attempts.get(), 2);
}

#[tokio::test]
async fn test_query_is_ignored_for_matching_but_kept() {
    let router = Router::new(table(), MemoryHistory::new()).unwrap();

    let navigation = router.push("/about?tab=team").await.unwrap();

    assert!(navigation.to.matched);
    assert_eq!(navigation.to.path, "/about");
    assert_eq!(navigation.to.full_path, "/about?tab=team");
    assert_eq!(router.history().location(), "/about?tab=team");
}

#[tokio::test]
async fn test_redirect_carries_query_and_fragment() {
    let history = Rc::new(MemoryHistory::new());
    let router = Router::new(table(), history.clone()).unwrap();

    let navigation = router.push("/?tab=team#members").await.unwrap();

    assert_eq!(navigation.to.path, "/home");
    assert_eq!(navigation.to.full_path, "/home?tab=team#members");
    assert_eq!(navigation.to.redirected_from.as_deref(), Some("/?tab=team#members"));
    assert_eq!(history.location(), "/home?tab=team#members");
}

#[tokio::test]
async fn test_push_to_current_location_adds_no_entry() {
    let history = Rc::new(MemoryHistory::new());
    let router = Router::new(table(), history.clone()).unwrap();

    router.push("/home").await.unwrap();
    router.push("/home").await.unwrap();

    assert_eq!(history.entries(), vec!["/", "/home"]);
}

#[tokio::test]
async fn test_start_replaces_redirected_entry() {
    let history = Rc::new(MemoryHistory::with_location("/"));
    let router = Router::new(table(), history.clone()).unwrap();

    let navigation = router.start().await.unwrap();

    assert_eq!(navigation.to.path, "/home");
    assert_eq!(history.entries(), vec!["/home"]);
}

#[tokio::test]
async fn test_sync_follows_history_back() {
    let history = Rc::new(MemoryHistory::new());
    let router = Router::new(table(), history.clone()).unwrap();

    router.push("/home").await.unwrap();
    router.push("/about").await.unwrap();
    history.back();

    let navigation = router.sync().await.unwrap();

    assert_eq!(navigation.to.path, "/home");
    assert_eq!(navigation.from.path, "/about");
    assert_eq!(history.entries(), vec!["/", "/home", "/about"]);
}

#[test]
fn test_route_by_name() {
    let router = Router::new(table(), MemoryHistory::new()).unwrap();

    assert_eq!(router.route_by_name("About").map(|r| r.path()), Some("/about"));
    assert!(router.route_by_name("Missing").is_none());
}
