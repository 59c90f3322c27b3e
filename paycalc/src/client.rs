//! Browser wiring: history, document title, navigation events.

use paycalc_router::{DocumentTitle, Navigation, NavigationError, TitleSink, WebHistory};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::{Closure, JsValue};

use crate::config::{AppConfig, read_page_config};
use crate::create_router_with_config;

/// Custom event carrying a path in `detail`; dispatch it on `document` to navigate.
pub const NAVIGATE_EVENT: &str = "paycalc:navigate";

/// Mount the application on the current page.
pub fn mount() -> Result<(), JsValue> {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or("No global window object")?;
    let document = window.document().ok_or("No document object")?;

    let config = read_page_config(&document).unwrap_or_else(AppConfig::default);

    if let Err(e) = crate::log::setup(&config.log_level) {
        web_sys::console::warn_1(&format!("Logging already initialized: {e}").into());
    }

    let history = WebHistory::new(&config.router.base)?;
    let title: Rc<dyn TitleSink> = Rc::new(DocumentTitle::new()?);

    let router = create_router_with_config(history, title, &config)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let router = Rc::new(router);

    let navigate_callback = {
        let router = router.clone();

        Closure::wrap(Box::new(move |event: web_sys::CustomEvent| {
            if let Some(path) = event.detail().as_string() {
                let router = router.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    render(router.push(&path).await);
                });
            }
        }) as Box<dyn FnMut(_)>)
    };

    document
        .add_event_listener_with_callback(NAVIGATE_EVENT, navigate_callback.as_ref().unchecked_ref())?;
    navigate_callback.forget();

    let popstate_callback = {
        let router = router.clone();

        Closure::wrap(Box::new(move |_event: web_sys::PopStateEvent| {
            let router = router.clone();
            wasm_bindgen_futures::spawn_local(async move {
                render(router.sync().await);
            });
        }) as Box<dyn FnMut(_)>)
    };

    window.add_event_listener_with_callback("popstate", popstate_callback.as_ref().unchecked_ref())?;
    popstate_callback.forget();

    wasm_bindgen_futures::spawn_local(async move {
        render(router.start().await);
    });

    Ok(())
}

/// Ask the mounted router to navigate to `path`.
pub fn navigate(path: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("No global window object")?;
    let document = window.document().ok_or("No document object")?;

    let event_init = web_sys::CustomEventInit::new();
    event_init.set_detail(&JsValue::from_str(path));

    let event = web_sys::CustomEvent::new_with_event_init_dict(NAVIGATE_EVENT, &event_init)?;
    document.dispatch_event(&event)?;

    Ok(())
}

fn render(result: Result<Navigation, NavigationError>) {
    let navigation = match result {
        Ok(navigation) => navigation,
        Err(e) => {
            web_sys::console::error_1(&format!("Navigation failed: {e}").into());
            return;
        }
    };

    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };

    match navigation.view {
        Some(view) => body.set_inner_html(&view.render()),
        None => body.set_inner_html(""),
    }
}

