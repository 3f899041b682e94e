//! Client configuration
//!
//! Layered: built-in defaults <- optional TOML file <- environment variables.
//! The environment always wins so containerized deployments can override a
//! checked-in config file.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::ConsoleError;

pub const DEFAULT_CONFIG_FILE: &str = "shortlink-console.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the shortener REST API, including the `/api` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Page size forwarded as the `limit` query parameter when listing.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Where the advisory "links I created" set is persisted.
    #[serde(default = "default_my_links_path")]
    pub my_links_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_page_size() -> usize {
    50
}

fn default_my_links_path() -> String {
    "my_links.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "shortlink-console.log".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            page_size: default_page_size(),
            my_links_path: default_my_links_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

impl Config {
    /// Load configuration: TOML file (if present) overlaid with environment.
    pub fn load() -> Result<Config, ConsoleError> {
        let path = env::var("SHORTLINK_CONFIG_PATH")
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let mut config = if Path::new(&path).exists() {
            let raw = fs::read_to_string(&path).map_err(|e| {
                ConsoleError::config(format!("Failed to read {}: {}", path, e))
            })?;
            let parsed: Config = toml::from_str(&raw).map_err(|e| {
                ConsoleError::config(format!("Failed to parse {}: {}", path, e))
            })?;
            debug!("Loaded configuration from {}", path);
            parsed
        } else {
            Config::default()
        };

        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(url) = env::var("SHORTLINK_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(path) = env::var("SHORTLINK_MY_LINKS_PATH") {
            self.client.my_links_path = path;
        }
        if let Ok(size) = env::var("SHORTLINK_PAGE_SIZE") {
            match size.parse::<usize>() {
                Ok(n) if n > 0 => self.client.page_size = n,
                _ => warn!("Ignoring invalid SHORTLINK_PAGE_SIZE: {}", size),
            }
        }
        if let Ok(level) = env::var("SHORTLINK_LOG_LEVEL") {
            self.logging.level = level;
        }
    }

    /// The origin short links live under, for display purposes.
    ///
    /// The backend serves redirects at the root while the API hangs under
    /// `/api`, so the public form of a short link is the base URL with the
    /// `/api` suffix stripped: `http://host:port/{code}`.
    pub fn public_base_url(&self) -> String {
        let trimmed = self.api.base_url.trim_end_matches('/');
        trimmed
            .strip_suffix("/api")
            .unwrap_or(trimmed)
            .to_string()
    }

    /// The public absolute URL for a short code.
    pub fn short_url_for(&self, code: &str) -> String {
        format!("{}/{}", self.public_base_url(), code)
    }
}
