//! # Client configuration
//!
//! The only setting is the backend's base URL. It is resolved in this order:
//!
//! 1. `API_URL` from the process environment (native builds only, after loading `.env`).
//! 2. `API_URL` captured at build time, which is how browser builds are configured.
//! 3. [`DEFAULT_API_URL`].
//!
//! Native launches can also ship a TOML file:
//!
//! ```toml
//! base_url = "http://localhost:8000"
//! ```

use serde::{Deserialize, Serialize};

/// Environment variable holding the backend URL.
pub const API_URL_VAR: &str = "API_URL";

/// Loopback address used when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Backend root without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve the base URL from the environment, see the module docs for precedence.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            if let Some(url) = non_empty(std::env::var(API_URL_VAR).ok().as_deref()) {
                return Self::new(url);
            }
        }

        Self::from_build_env()
    }

    /// Base URL baked in at compile time.
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("API_URL"))
    }

    fn resolve(value: Option<&str>) -> Self {
        match non_empty(value) {
            Some(url) => Self::new(url),
            None => Self::default(),
        }
    }

    /// Parse from a TOML document.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let config: Self = toml::from_str(s)?;
        Ok(Self::new(config.base_url))
    }

    /// Absolute URL for an API path such as `/api/v1/users`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
