//! Page title hook.

use paycalc_router::{GuardOutcome, Next, RouteLocation, TitleSink};
use std::rc::Rc;
use tracing::debug;

/// Appended to every route title.
pub const TITLE_SUFFIX: &str = " - 工资计算器";

/// Join a route title and the application suffix.
pub fn format_title(title: &str, suffix: &str) -> String {
    format!("{title}{suffix}")
}

/// Guard that mirrors the target route's `meta.title` into the page title.
///
/// Routes without a title leave the current one untouched. The guard never
/// blocks or redirects.
pub fn title_guard(
    sink: Rc<dyn TitleSink>,
    suffix: String,
) -> impl Fn(&RouteLocation, &RouteLocation, Next) -> GuardOutcome + 'static {
    move |to, _from, next| {
        if let Some(title) = to.meta.title() {
            let title = format_title(title, &suffix);
            debug!(path = %to.path, title = %title, "updating page title");
            sink.set_title(&title);
        }

        next.proceed()
    }
}
