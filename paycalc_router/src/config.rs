//! Router configuration.

use serde::{Deserialize, Serialize};

/// Router settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Base path the application is served under.
    pub base: String,
    /// Redirect hops allowed within one navigation before giving up.
    pub max_redirects: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base: String::new(),
            max_redirects: 10,
        }
    }
}

impl RouterConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
