//! API base-URL configuration.
//!
//! The portal talks to exactly one backend; every endpoint path is resolved
//! against this single value so no module carries its own URL literal.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Backend location, fixed at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Load from `PORTAL_API_BASE` at compile time, falling back to the
    /// local development backend. WASM has no runtime environment, so the
    /// value is baked into the build.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: option_env!("PORTAL_API_BASE")
                .unwrap_or(DEFAULT_API_BASE)
                .to_owned(),
        }
    }

    /// Resolve an endpoint path against the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
