//! Configuration management for Storefront
//!
//! Supports a `.env` file, environment variables, a config file, and runtime
//! overrides. Missing credentials are passed through as `None`; the GigaChat
//! client rejects them when it first needs a token.
//!
//! Config file location: ~/.config/storefront/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{Result, StorefrontError};

/// Default OAuth endpoint for GigaChat access tokens
pub const DEFAULT_AUTH_URL: &str = "https://ngw.devices.sberbank.ru:9443/api/v2/oauth";

/// Default GigaChat REST API base
pub const DEFAULT_BASE_URL: &str = "https://gigachat.devices.sberbank.ru/api/v1";

/// Persona and goal given to the model on every session
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a phone sales assistant. Your task is to sell \
a phone to the user by taking an order from them. If you are missing any information, ask the \
user for it.";

/// Main configuration for Storefront
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// GigaChat connection configuration
    #[serde(default)]
    pub gigachat: GigaChatConfig,
    /// Agent and conversation configuration
    #[serde(default)]
    pub agent: AgentConfig,
    /// Product catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// GigaChat connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GigaChatConfig {
    /// Authorization key (base64 client id:secret)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
    /// API scope, e.g. GIGACHAT_API_PERS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Model identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// OAuth token endpoint
    pub auth_url: String,
    /// REST API base URL
    pub base_url: String,
    /// Verify TLS certificates of both endpoints
    ///
    /// Defaults to off for the Sber endpoints, whose chain is signed by a
    /// national CA most trust stores lack. A warning is logged at startup.
    pub verify_ssl_certs: bool,
    /// Per-request timeout in seconds; unset means wait indefinitely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Extra attempts after a transient failure
    pub max_retries: u32,
}

/// Agent behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Session id the console conversation is bound to
    pub thread_id: String,
    /// Maximum model calls per user turn
    /// Default: 10
    pub max_turns: usize,
    /// Pause after each printed reply, in milliseconds
    pub turn_delay_ms: u64,
    /// System prompt fixing the assistant's persona
    pub system_prompt: String,
    /// Sampling temperature; the model's default when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Reply length cap in tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Whether to log at debug level
    pub debug: bool,
}

/// Product catalog configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON or TOML catalog file; the builtin list is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn env_flag(key: &str) -> Option<bool> {
    env::var(key).ok().map(|v| v == "true" || v == "1")
}

impl Default for GigaChatConfig {
    fn default() -> Self {
        Self {
            credentials: env::var("GIGACHAT_KEY").ok(),
            scope: env::var("GIGACHAT_SCOPE").ok(),
            model: env::var("GIGACHAT_MODEL").ok(),
            auth_url: env::var("GIGACHAT_AUTH_URL")
                .unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string()),
            base_url: env::var("GIGACHAT_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            verify_ssl_certs: env_flag("GIGACHAT_VERIFY_SSL_CERTS").unwrap_or(false),
            timeout_secs: env::var("GIGACHAT_TIMEOUT")
                .ok()
                .and_then(|t| t.parse().ok()),
            max_retries: env::var("GIGACHAT_MAX_RETRIES")
                .ok()
                .and_then(|r| r.parse().ok())
                .unwrap_or(0),
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            thread_id: env::var("STOREFRONT_THREAD_ID").unwrap_or_else(|_| "123456".to_string()),
            max_turns: 10,
            turn_delay_ms: 1000,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            temperature: None,
            max_tokens: None,
            debug: env_flag("STOREFRONT_DEBUG").unwrap_or(false),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("storefront")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from `.env`, file, environment, and defaults
    /// Priority: CLI args > config file > env vars > defaults
    ///
    /// A config file that exists but cannot be read or parsed is an error.
    pub fn load() -> Result<Self> {
        // A missing .env is fine; the keys just stay unset
        let _ = dotenvy::dotenv();

        let mut config = Self::load_or_default(&Self::config_file())?;

        if config.catalog.path.is_none() {
            config.catalog.path = env::var_os("STOREFRONT_CATALOG").map(PathBuf::from);
        }

        Ok(config)
    }

    /// Load `path` if it exists, otherwise use defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a TOML file only
    ///
    /// Keys absent from the file fall back to their env-derived defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(StorefrontError::config("Config file not found"));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| StorefrontError::config(format!("Failed to read config: {}", e)))?;

        toml::from_str(&content).map_err(|e| {
            StorefrontError::config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| StorefrontError::config(format!("Failed to parse config: {}", e)))
    }

    /// Copy of this config that is safe to print
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.gigachat.credentials.is_some() {
            config.gigachat.credentials = Some("***".to_string());
        }
        config
    }

    /// Render the effective configuration as TOML, credentials redacted
    pub fn to_display_toml(&self) -> String {
        toml::to_string_pretty(&self.redacted())
            .unwrap_or_else(|e| format!("# Error generating config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_agent_config() {
        let agent = AgentConfig::default();
        assert_eq!(agent.max_turns, 10);
        assert_eq!(agent.turn_delay_ms, 1000);
        assert!(agent.system_prompt.contains("phone"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            [gigachat]
            scope = "GIGACHAT_API_PERS"
            verify_ssl_certs = true
            timeout_secs = 30

            [agent]
            thread_id = "abc"
            temperature = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(config.gigachat.scope.as_deref(), Some("GIGACHAT_API_PERS"));
        assert!(config.gigachat.verify_ssl_certs);
        assert_eq!(config.gigachat.timeout_secs, Some(30));
        assert_eq!(config.agent.thread_id, "abc");
        assert_eq!(config.agent.max_turns, 10);
        assert_eq!(config.agent.temperature, Some(0.5));
        assert_eq!(config.agent.max_tokens, None);
        assert!(!config.gigachat.auth_url.is_empty());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = Config::from_toml("[agent]\nmax_turns = \"many\"").unwrap_err();
        assert!(matches!(err, StorefrontError::Config(_)));
    }

    #[test]
    fn test_display_redacts_credentials() {
        let mut config = Config::default();
        config.gigachat.credentials = Some("c2VjcmV0".to_string());

        let rendered = config.to_display_toml();
        assert!(!rendered.contains("c2VjcmV0"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir()
            .join(format!("storefront-{}", uuid::Uuid::new_v4()))
            .join("config.toml");

        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.agent.max_turns, 10);
    }

    #[test]
    fn test_broken_file_is_reported() {
        let dir = std::env::temp_dir().join(format!("storefront-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[gigachat]\nverify_ssl_certs = yes\n").unwrap();

        let err = Config::load_or_default(&path).unwrap_err();
        assert!(matches!(err, StorefrontError::Config(_)));
        assert!(err.to_string().contains("config.toml"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_existing_file_is_used() {
        let dir = std::env::temp_dir().join(format!("storefront-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[gigachat]\nverify_ssl_certs = true\n").unwrap();

        let config = Config::load_or_default(&path).unwrap();
        assert!(config.gigachat.verify_ssl_certs);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_config_dir() {
        let dir = Config::config_dir();
        assert!(dir.to_string_lossy().contains("storefront"));
    }
}
