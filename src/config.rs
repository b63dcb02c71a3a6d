//! API endpoint configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle cannot read process environment at runtime, so the API
//! base URL is baked in at build time from `NONITOS_API_URL` and falls back to
//! the local development backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Where the Nonito's Food REST API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config from an explicit base URL. Trailing slashes are trimmed.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_owned();
        Self { base_url }
    }

    /// Build from the compile-time `NONITOS_API_URL` variable.
    ///
    /// A missing or blank value selects [`DEFAULT_API_BASE_URL`].
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_override(option_env!("NONITOS_API_URL"))
    }

    fn from_override(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_API_BASE_URL),
        }
    }

    /// Absolute URL for an API path such as `auth/login`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
