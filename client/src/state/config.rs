//! Client configuration provided through context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::net::types::ClientConfig;

/// Recognition service used when neither the build nor the host says otherwise.
pub const DEFAULT_API_URL: &str = "http://localhost:8900";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the recognition service, without a trailing slash.
    pub api_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_build(option_env!("MATHBOARD_API_URL"))
    }
}

impl AppConfig {
    /// Config seeded from a compile-time override, if any.
    #[must_use]
    pub fn from_build(api_url: Option<&str>) -> Self {
        let raw = api_url.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(DEFAULT_API_URL);
        Self { api_url: normalize_base_url(raw) }
    }

    /// Take the host server's answer, ignoring an empty URL.
    pub fn apply(&mut self, remote: &ClientConfig) {
        let url = normalize_base_url(remote.api_url.trim());
        if !url.is_empty() {
            self.api_url = url;
        }
    }
}

/// Strip trailing slashes so paths can be appended directly.
#[must_use]
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_owned()
}
