//! Application configuration.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tradehub_core::LOCALHOST_APP_ID;
use tradehub_session::ApiSettings;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Registered application id. Default: localhost development id.
    #[serde(default = "default_app_id")]
    pub app_id: u32,
    /// Default server host; the transient storage override takes precedence
    /// during validation.
    #[serde(default = "default_server_url")]
    pub server_url: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_brand")]
    pub brand: String,
    /// OAuth host for the header's login action.
    #[serde(default = "default_oauth_host")]
    pub oauth_host: String,
}

fn default_app_id() -> u32 {
    LOCALHOST_APP_ID
}

fn default_server_url() -> String {
    "blue.derivws.com".to_string()
}

fn default_language() -> String {
    "EN".to_string()
}

fn default_brand() -> String {
    "deriv".to_string()
}

fn default_oauth_host() -> String {
    "oauth.deriv.com".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            app_id: default_app_id(),
            server_url: default_server_url(),
            language: default_language(),
            brand: default_brand(),
            oauth_host: default_oauth_host(),
        }
    }
}

/// Storage file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON document backing the session key-value store.
    #[serde(default = "default_session_path")]
    pub session_path: String,
    /// JSON document with the browser cookies, read-only.
    #[serde(default = "default_cookies_path")]
    pub cookies_path: String,
}

fn default_session_path() -> String {
    "session.json".to_string()
}

fn default_cookies_path() -> String {
    "cookies.json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_path: default_session_path(),
            cookies_path: default_cookies_path(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        if self.api.app_id == 0 {
            return Err(AppError::Config("app_id must be non-zero".to_string()));
        }
        if self.api.server_url.is_empty() {
            return Err(AppError::Config("server_url must be set".to_string()));
        }
        Ok(())
    }

    /// Connection settings for the authorize call.
    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            app_id: self.api.app_id,
            server_url: self.api.server_url.clone(),
            language: self.api.language.clone(),
            brand: self.api.brand.clone(),
        }
    }
}
