//! Client configuration.
//!
//! Values are fixed at build time: a wasm bundle has no process environment,
//! so `API_BASE_URL` is read through `option_env!` when the crate is compiled.

use std::time::Duration;

/// Base URL used when `API_BASE_URL` is not set at build time.
pub const DEFAULT_BASE_URL: &str = "https://localhost:7061/api/";

/// Dashboard-wide settings shared by the transport and every screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Root of the REST API, e.g. `https://host/api/`
    pub base_url: String,
    /// Rows per page requested from `getallbypaging`
    pub page_size: usize,
    /// Number of page buttons shown in the pager
    pub page_window: usize,
    /// Quiet period before a search keystroke triggers a fetch
    pub search_debounce: Duration,
    /// Lifetime of success/error/warning toasts
    pub toast_lifetime: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: 8,
            page_window: 5,
            search_debounce: Duration::from_millis(500),
            toast_lifetime: Duration::from_millis(3000),
        }
    }
}

impl ClientConfig {
    /// Defaults, with the base URL taken from the build environment if present.
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("API_BASE_URL"))
    }

    fn with_base_url(base_url: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.base_url = url.to_string();
        }
        config
    }

    /// Join a resource path onto the base URL with exactly one slash between.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
