//! Application configuration.

use paycalc_router::RouterConfig;
use serde::{Deserialize, Serialize};

use crate::title::TITLE_SUFFIX;

/// Id of the optional `<script type="application/json">` carrying [`AppConfig`].
pub const CONFIG_SCRIPT_ID: &str = "paycalc-config";

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(flatten)]
    pub router: RouterConfig,
    /// Text appended to route titles.
    pub title_suffix: String,
    /// `EnvFilter` directives for the browser console log.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            router: RouterConfig::default(),
            title_suffix: TITLE_SUFFIX.to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Read the config embedded in the page, if any.
#[cfg(target_arch = "wasm32")]
pub fn read_page_config(document: &web_sys::Document) -> Option<AppConfig> {
    let script = document.get_element_by_id(CONFIG_SCRIPT_ID)?;
    let json = script.text_content()?;

    match AppConfig::from_json(&json) {
        Ok(config) => Some(config),
        Err(e) => {
            web_sys::console::warn_1(&format!("Ignoring invalid {CONFIG_SCRIPT_ID}: {e}").into());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.title_suffix, " - 工资计算器");
        assert_eq!(config.router, RouterConfig::default());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_flattened_router_fields() {
        let config =
            AppConfig::from_json(r#"{ "base": "/tools", "title_suffix": " | Payroll", "log_level": "paycalc_router=debug" }"#)
                .unwrap();

        assert_eq!(config.router.base, "/tools");
        assert_eq!(config.router.max_redirects, 10);
        assert_eq!(config.title_suffix, " | Payroll");
        assert_eq!(config.log_level, "paycalc_router=debug");
    }
}
