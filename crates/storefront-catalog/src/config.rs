//! # Catalog Configuration
//!
//! Configuration for the Product Source client and the mock catalog server.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOREFRONT_CATALOG_URL=http://localhost:9000                       │
//! │     STOREFRONT_MOCK_PORT=9000                                          │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/storefront/catalog.toml (Linux)                          │
//! │     ~/Library/Application Support/com.storefront.shop/catalog.toml     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     http://127.0.0.1:8787, 5s connect, 10s request                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # catalog.toml
//! [client]
//! base_url = "http://127.0.0.1:8787"
//! connect_timeout_secs = 5
//! request_timeout_secs = 10
//!
//! [mock]
//! bind_addr = "127.0.0.1"
//! port = 8787
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{CatalogError, CatalogResult};

/// Default port for the mock catalog (and the default client target).
pub const DEFAULT_CATALOG_PORT: u16 = 8787;

// =============================================================================
// Client Settings
// =============================================================================

/// How the storefront reaches the Product Source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Base URL; `/api/products` is resolved against it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// TCP connect timeout (seconds).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Whole-request timeout (seconds).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    format!("http://127.0.0.1:{}", DEFAULT_CATALOG_PORT)
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for ClientSettings {
    fn default() -> Self {
        ClientSettings {
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ClientSettings {
    /// Connect timeout as a Duration.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

// =============================================================================
// Mock Server Settings
// =============================================================================

/// Where the mock catalog server listens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockSettings {
    /// Bind address (default: 127.0.0.1).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Port (default: 8787, 0 picks a free port).
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind_addr() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    DEFAULT_CATALOG_PORT
}

impl Default for MockSettings {
    fn default() -> Self {
        MockSettings {
            bind_addr: default_bind_addr(),
            port: default_port(),
        }
    }
}

impl MockSettings {
    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

// =============================================================================
// Main Catalog Configuration
// =============================================================================

/// Complete catalog configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Product Source client settings.
    #[serde(default)]
    pub client: ClientSettings,

    /// Mock server settings.
    #[serde(default)]
    pub mock: MockSettings,
}

impl CatalogConfig {
    /// Creates a config pointing the client at `base_url`, other values default.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.client.base_url = base_url.into();
        config
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (catalog.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CatalogResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading catalog config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load catalog config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> CatalogResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| CatalogError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CatalogError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| CatalogError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Catalog config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CatalogResult<()> {
        self.base_url()?;

        if self.client.connect_timeout_secs == 0 || self.client.request_timeout_secs == 0 {
            return Err(CatalogError::InvalidConfig(
                "timeouts must be greater than 0".into(),
            ));
        }

        if self.mock.bind_addr.trim().is_empty() {
            return Err(CatalogError::InvalidConfig("mock bind_addr is empty".into()));
        }

        Ok(())
    }

    /// Parses the client base URL, requiring http or https.
    pub fn base_url(&self) -> CatalogResult<Url> {
        let url = Url::parse(&self.client.base_url)?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(CatalogError::InvalidUrl(format!(
                "Catalog URL must use http:// or https://, got: {}://",
                other
            ))),
        }
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("STOREFRONT_CATALOG_URL") {
            debug!(url = %url, "Overriding catalog URL from environment");
            self.client.base_url = url;
        }

        if let Ok(secs) = std::env::var("STOREFRONT_CONNECT_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(s) => self.client.connect_timeout_secs = s,
                Err(_) => warn!(value = %secs, "Ignoring invalid STOREFRONT_CONNECT_TIMEOUT_SECS"),
            }
        }

        if let Ok(secs) = std::env::var("STOREFRONT_REQUEST_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(s) => self.client.request_timeout_secs = s,
                Err(_) => warn!(value = %secs, "Ignoring invalid STOREFRONT_REQUEST_TIMEOUT_SECS"),
            }
        }

        if let Ok(addr) = std::env::var("STOREFRONT_MOCK_BIND_ADDR") {
            self.mock.bind_addr = addr;
        }

        if let Ok(port) = std::env::var("STOREFRONT_MOCK_PORT") {
            if let Ok(p) = port.parse::<u16>() {
                debug!(port = p, "Overriding mock port from environment");
                self.mock.port = p;
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "shop")
            .map(|dirs| dirs.config_dir().join("catalog.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("storefront-config-{}-{}", name, std::process::id()))
            .join("catalog.toml")
    }

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.client.base_url, "http://127.0.0.1:8787");
        assert_eq!(config.client.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.mock.bind_address(), "127.0.0.1:8787");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = CatalogConfig::with_base_url("ws://localhost:8080");
        assert!(matches!(config.validate(), Err(CatalogError::InvalidUrl(_))));

        config.client.base_url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(CatalogError::InvalidUrl(_))));

        config.client.base_url = "https://shop.example.com".to_string();
        assert!(config.validate().is_ok());

        config.client.request_timeout_secs = 0;
        assert!(matches!(config.validate(), Err(CatalogError::InvalidConfig(_))));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: CatalogConfig = toml::from_str(
            r#"
            [client]
            base_url = "http://10.0.0.5:9000"
            "#,
        )
        .unwrap();

        assert_eq!(config.client.base_url, "http://10.0.0.5:9000");
        assert_eq!(config.client.connect_timeout_secs, 5);
        assert_eq!(config.mock.port, DEFAULT_CATALOG_PORT);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_config_path("roundtrip");
        let mut config = CatalogConfig::with_base_url("http://127.0.0.1:9123");
        config.mock.port = 9123;

        config.save(Some(path.clone())).unwrap();
        let loaded = CatalogConfig::load(Some(path.clone())).unwrap();

        // Environment may override; only assert when it does not
        if std::env::var("STOREFRONT_CATALOG_URL").is_err() {
            assert_eq!(loaded.client.base_url, "http://127.0.0.1:9123");
        }
        if std::env::var("STOREFRONT_MOCK_PORT").is_err() {
            assert_eq!(loaded.mock.port, 9123);
        }

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let path = temp_config_path("broken");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[client\nbase_url = ").unwrap();

        assert!(matches!(
            CatalogConfig::load(Some(path.clone())),
            Err(CatalogError::ConfigLoadFailed(_))
        ));
        assert!(CatalogConfig::load_or_default(Some(path.clone())).validate().is_ok());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&CatalogConfig::default()).unwrap();
        assert!(toml_str.contains("[client]"));
        assert!(toml_str.contains("[mock]"));
    }
}
