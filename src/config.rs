//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::content::{default_skills, Profile, Skill};
use crate::store::{ContentSource, LocalSource, RemoteConfig, RemoteSource, StoreResult};
use crate::view::{AdminGate, DEFAULT_ADMIN_PASSWORD};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub admin: AdminConfig,

    #[serde(default)]
    pub profile: Profile,

    #[serde(default = "default_skills")]
    pub skills: Vec<Skill>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which content source to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    #[default]
    Remote,
    Local,
}

/// Content source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    #[serde(default)]
    pub source: SourceMode,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default)]
    pub strict_status: bool,

    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_api_url() -> String {
    "http://localhost:5000/api".to_string()
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            source: SourceMode::default(),
            api_url: default_api_url(),
            strict_status: false,
            request_timeout_secs: None,
        }
    }
}

impl ContentConfig {
    /// Effective mode: remote without a backend URL falls back to local
    pub fn mode(&self) -> SourceMode {
        if self.api_url.trim().is_empty() {
            SourceMode::Local
        } else {
            self.source
        }
    }

    pub fn remote_config(&self) -> RemoteConfig {
        RemoteConfig::new(self.api_url.trim())
            .strict(self.strict_status)
            .timeout(self.request_timeout_secs.map(Duration::from_secs))
    }

    /// Build the configured content source
    pub fn build_source(&self) -> StoreResult<Box<dyn ContentSource + Send + Sync>> {
        match self.mode() {
            SourceMode::Remote => {
                tracing::info!("Using portfolio backend at {}", self.api_url);
                Ok(Box::new(RemoteSource::new(self.remote_config())?))
            }
            SourceMode::Local => {
                tracing::info!("Using embedded content (no backend)");
                Ok(Box::new(LocalSource::with_defaults()))
            }
        }
    }
}

/// Admin panel configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// Client-side gate password; not an access-control mechanism
    #[serde(default = "default_admin_password")]
    pub password: String,
}

fn default_admin_password() -> String {
    DEFAULT_ADMIN_PASSWORD.to_string()
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            password: default_admin_password(),
        }
    }
}

impl AdminConfig {
    pub fn gate(&self) -> AdminGate {
        AdminGate::new(self.password.clone())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("folio").join("config.toml")),
            Some(PathBuf::from("./folio.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("FOLIO_API_URL") {
            self.content.api_url = url;
        }
        if let Ok(source) = std::env::var("FOLIO_SOURCE") {
            match source.to_ascii_lowercase().as_str() {
                "remote" => self.content.source = SourceMode::Remote,
                "local" => self.content.source = SourceMode::Local,
                other => tracing::warn!("Ignoring FOLIO_SOURCE={}", other),
            }
        }

        if let Ok(password) = std::env::var("FOLIO_ADMIN_PASSWORD") {
            self.admin.password = password;
        }

        if let Ok(level) = std::env::var("FOLIO_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("FOLIO_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content: ContentConfig::default(),
            admin: AdminConfig::default(),
            profile: Profile::default(),
            skills: default_skills(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Folio Configuration
#
# Environment variables override these settings:
# - FOLIO_API_URL
# - FOLIO_SOURCE
# - FOLIO_ADMIN_PASSWORD
# - FOLIO_LOG_LEVEL
# - FOLIO_LOG_FORMAT

[content]
# Content source: remote (portfolio backend) or local (embedded defaults)
source = "remote"

# Backend base URL including the API prefix; empty means local
api_url = "http://localhost:5000/api"

# Treat non-2xx backend responses as errors
strict_status = false

# Per-request timeout in seconds (unset: wait indefinitely)
# request_timeout_secs = 30

[admin]
# Admin panel password. This only hides the panel in the client;
# protect the backend's write endpoints separately.
password = "password123"

[profile]
name = "Jordan Avery"
title = "Full-Stack Developer & Cybersecurity Enthusiast"
email = "hello@example.com"
# bio = "..."
# avatar_url = "https://..."

[profile.socials]
github = "https://github.com/"
linkedin = "https://www.linkedin.com/"
twitter = "https://twitter.com/"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
