//! Configuration management using the prefer crate for file discovery.
//!
//! Precedence, lowest to highest: built-in defaults, config file,
//! environment variables.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default directory API endpoint.
pub const DEFAULT_API_ENDPOINT: &str = "http://ohana-api-demo.herokuapp.com/api";

/// Default bind address for the web server.
pub const DEFAULT_BIND: &str = "127.0.0.1:3030";

/// Port used when a bind address names only a host.
pub const DEFAULT_PORT: u16 = 3030;

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the organization directory API.
    pub api_endpoint: String,
    /// Token sent with every API request, if the API requires one.
    pub api_token: Option<String>,
    /// Request timeout in seconds.
    pub request_timeout: u64,
    /// User agent for API requests.
    pub user_agent: String,
    /// Address the web server binds to.
    pub bind: String,
    /// Fallback keyword table (None = bundled table).
    pub fallback_keywords: Option<PathBuf>,
    /// Terminology catalog (None = bundled catalog).
    pub terminology: Option<PathBuf>,
    /// How long service terms are cached (None = process lifetime).
    pub service_terms_ttl: Option<Duration>,
    /// Fixtures file; when set, the in-memory backend is used instead of the API.
    pub fixtures: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            api_token: None,
            request_timeout: 30,
            user_agent: format!("ohana-web/{}", env!("CARGO_PKG_VERSION")),
            bind: DEFAULT_BIND.to_string(),
            fallback_keywords: None,
            terminology: None,
            service_terms_ttl: None,
            fixtures: None,
        }
    }
}

/// Configuration file contents. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,
    /// Path to the fallback keyword table (relative to the config file).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_keywords: Option<String>,
    /// Path to the terminology catalog (relative to the config file).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminology: Option<String>,
    /// Service term cache lifetime in seconds; 0 keeps them for the process lifetime.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_terms_ttl: Option<u64>,
    /// Path to a fixtures file for the in-memory backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixtures: Option<String>,

    /// Path to the config file this was loaded from.
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    /// Falls back to defaults when no file is found or it fails to parse.
    pub async fn load() -> Self {
        match prefer::load("ohana-web").await {
            Ok(pref_config) => {
                if let Some(path) = pref_config.source_path() {
                    match Self::load_from_path(path).await {
                        Ok(config) => config,
                        Err(e) => {
                            tracing::warn!("Ignoring config file: {}", e);
                            Self::default()
                        }
                    }
                } else {
                    Self::default()
                }
            }
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, String> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

        let mut config: Config = match ext {
            "toml" => toml::from_str(&contents)
                .map_err(|e| format!("Failed to parse TOML config: {}", e))?,
            "yaml" | "yml" => serde_yaml::from_str(&contents)
                .map_err(|e| format!("Failed to parse YAML config: {}", e))?,
            _ => serde_json::from_str(&contents)
                .map_err(|e| format!("Failed to parse JSON config: {}", e))?,
        };

        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Directory relative paths are resolved against.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    fn resolve_path(path_str: &str, base_dir: &Path) -> PathBuf {
        let path = PathBuf::from(path_str);
        if path.is_absolute() {
            path
        } else {
            base_dir.join(path)
        }
    }

    /// Apply file values on top of `settings`.
    pub fn apply_to_settings(&self, settings: &mut Settings, base_dir: &Path) {
        if let Some(ref endpoint) = self.api_endpoint {
            settings.api_endpoint = endpoint.clone();
        }
        if let Some(ref token) = self.api_token {
            settings.api_token = Some(token.clone());
        }
        if let Some(timeout) = self.request_timeout {
            settings.request_timeout = timeout;
        }
        if let Some(ref ua) = self.user_agent {
            settings.user_agent = ua.clone();
        }
        if let Some(ref bind) = self.bind {
            settings.bind = bind.clone();
        }
        if let Some(ref path) = self.fallback_keywords {
            settings.fallback_keywords = Some(Self::resolve_path(path, base_dir));
        }
        if let Some(ref path) = self.terminology {
            settings.terminology = Some(Self::resolve_path(path, base_dir));
        }
        if let Some(ttl) = self.service_terms_ttl {
            settings.service_terms_ttl = (ttl > 0).then(|| Duration::from_secs(ttl));
        }
        if let Some(ref path) = self.fixtures {
            settings.fixtures = Some(Self::resolve_path(path, base_dir));
        }
    }
}

/// Options for loading settings.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path (overrides auto-discovery).
    pub config_path: Option<PathBuf>,
}

/// Environment variables that override config values.
#[derive(Debug, Clone, Default)]
struct EnvOverrides {
    api_endpoint: Option<String>,
    api_token: Option<String>,
    bind: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|s| !s.is_empty());
        Self {
            api_endpoint: var("OHANA_API_ENDPOINT"),
            api_token: var("OHANA_API_TOKEN"),
            bind: var("OHANA_WEB_BIND"),
        }
    }

    fn apply(self, settings: &mut Settings) {
        if let Some(endpoint) = self.api_endpoint {
            tracing::debug!("Using OHANA_API_ENDPOINT from environment: {}", endpoint);
            settings.api_endpoint = endpoint;
        }
        if let Some(token) = self.api_token {
            settings.api_token = Some(token);
        }
        if let Some(bind) = self.bind {
            settings.bind = bind;
        }
    }
}

/// Load settings with explicit options.
///
/// An explicit config path that cannot be loaded is an error; an
/// auto-discovered file that fails is skipped.
pub async fn load_settings_with_options(options: LoadOptions) -> Result<(Settings, Config), String> {
    let config = match options.config_path {
        Some(ref path) => Config::load_from_path(path).await?,
        None => Config::load().await,
    };

    let base_dir = config
        .base_dir()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings, &base_dir);
    EnvOverrides::from_env().apply(&mut settings);

    Ok((settings, config))
}
