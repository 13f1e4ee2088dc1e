//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP and fallback behavior settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Chapter text / translation / search service settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Ordered tafseer endpoint definitions
    #[serde(default = "defaults::default_endpoints")]
    pub endpoints: Vec<EndpointConfig>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.fetch.user_agent.trim().is_empty() {
            return Err(AppError::validation("fetch.user_agent is empty"));
        }
        if self.fetch.timeout_ms == 0 {
            return Err(AppError::validation("fetch.timeout_ms must be > 0"));
        }
        if self.fetch.max_concurrent == 0 {
            return Err(AppError::validation("fetch.max_concurrent must be > 0"));
        }
        if self.api.quran_base.trim().is_empty() {
            return Err(AppError::validation("api.quran_base is empty"));
        }
        Url::parse(&self.api.quran_base)
            .map_err(|e| AppError::validation(format!("api.quran_base is not a URL: {e}")))?;
        if self.endpoints.is_empty() {
            return Err(AppError::validation("No tafseer endpoints defined"));
        }
        for endpoint in &self.endpoints {
            endpoint.validate()?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            api: ApiConfig::default(),
            endpoints: defaults::default_endpoints(),
        }
    }
}

/// HTTP client and fallback behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Per-request deadline in milliseconds
    #[serde(default = "defaults::timeout_ms")]
    pub timeout_ms: u64,

    /// Cooldown between endpoint attempts in milliseconds
    #[serde(default = "defaults::cooldown_ms")]
    pub cooldown_ms: u64,

    /// Maximum concurrent per-verse tafseer requests
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,

    /// Consult the bundled tafseer data when all endpoints fail
    #[serde(default = "defaults::enable_local_fallback")]
    pub enable_local_fallback: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_ms: defaults::timeout_ms(),
            cooldown_ms: defaults::cooldown_ms(),
            max_concurrent: defaults::max_concurrent(),
            enable_local_fallback: defaults::enable_local_fallback(),
        }
    }
}

/// Chapter text, translation, and search service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the chapter text / translation / search service
    #[serde(default = "defaults::quran_base")]
    pub quran_base: String,

    /// Translation edition identifier
    #[serde(default = "defaults::translation_edition")]
    pub translation_edition: String,

    /// Language filter for verse search
    #[serde(default = "defaults::search_language")]
    pub search_language: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            quran_base: defaults::quran_base(),
            translation_edition: defaults::translation_edition(),
            search_language: defaults::search_language(),
        }
    }
}

/// One tafseer endpoint definition.
///
/// `path_template` supports the placeholders `{source}`, `{chapter}`, and
/// `{verse}`. A mirror hosting a single hard-coded edition simply omits
/// `{source}` from its template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Display name used in diagnostics and result attribution
    pub name: String,

    /// Base URL, no trailing slash
    pub base_url: String,

    /// Relative path template with placeholders
    pub path_template: String,

    /// Ascending attempt order (lowest tried first)
    pub priority: u32,
}

impl EndpointConfig {
    /// Validate a single endpoint definition.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("endpoint name is empty"));
        }
        Url::parse(&self.base_url).map_err(|e| {
            AppError::validation(format!("endpoint '{}' base_url is not a URL: {e}", self.name))
        })?;
        if !self.path_template.contains("{chapter}") || !self.path_template.contains("{verse}") {
            return Err(AppError::validation(format!(
                "endpoint '{}' path_template must contain {{chapter}} and {{verse}}",
                self.name
            )));
        }
        Ok(())
    }
}

mod defaults {
    use super::EndpointConfig;

    // Fetch defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; tafseer/0.1)".into()
    }
    pub fn timeout_ms() -> u64 {
        5000
    }
    pub fn cooldown_ms() -> u64 {
        1000
    }
    pub fn max_concurrent() -> usize {
        8
    }
    pub fn enable_local_fallback() -> bool {
        true
    }

    // API defaults
    pub fn quran_base() -> String {
        "https://api.alquran.cloud/v1".into()
    }
    pub fn translation_edition() -> String {
        "en.asad".into()
    }
    pub fn search_language() -> String {
        "en".into()
    }

    // Endpoint defaults
    pub fn default_endpoints() -> Vec<EndpointConfig> {
        vec![
            EndpointConfig {
                name: "Quran Tafseer API".to_string(),
                base_url: "http://api.quran-tafseer.com".to_string(),
                path_template: "/tafseer/{source}/{chapter}/{verse}".to_string(),
                priority: 1,
            },
            EndpointConfig {
                name: "Tafsir API CDN".to_string(),
                base_url: "https://cdn.jsdelivr.net/gh/spa5k/tafsir_api@main/tafsir".to_string(),
                path_template: "/en-tafisr-ibn-kathir/{chapter}/{verse}.json".to_string(),
                priority: 2,
            },
            EndpointConfig {
                name: "Tafsir API GitHub".to_string(),
                base_url: "https://raw.githubusercontent.com/spa5k/tafsir_api/main/tafsir"
                    .to_string(),
                path_template: "/en-tafisr-ibn-kathir/{chapter}/{verse}.json".to_string(),
                priority: 3,
            },
        ]
    }
}
