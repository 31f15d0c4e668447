//! Configuration resolution
//!
//! The API key, target environment, and application name are resolved
//! once at startup from, in order of precedence: command-line flags, the
//! process environment, and the config file at `~/.pmtask/config.toml`.
//!
//! Resolution is side-effect free: a missing key is reported as
//! [`ConfigError::MissingApiKey`] and the caller decides whether to exit.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paths;

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "PM_API_KEY";

/// Environment variable naming the target environment
pub const ENV_VAR: &str = "PM_ENV";

/// Environment used when nothing else is configured
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// Application name sent with every request by default
pub const DEFAULT_APP_NAME: &str = "pmtask";

const PRODUCTION_URL: &str = "https://api.projectmanager.com";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No API key in flags, environment, or config file
    #[error("Your API key is not set. Please configure the environment variable PM_API_KEY.")]
    MissingApiKey,

    /// Environment is neither a known name nor an http(s) URL
    #[error("Unknown environment '{0}'. Use 'production' or a base URL such as https://api.example.com")]
    UnknownEnvironment(String),

    /// Config file could not be read
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Config file is not valid TOML
    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },
}

/// Resolve the API key from the process environment
pub fn resolve_api_key() -> Result<String, ConfigError> {
    resolve_api_key_with(|name| std::env::var(name).ok())
}

/// Resolve the API key through `lookup`
///
/// A variable that is set but empty counts as missing.
pub fn resolve_api_key_with(lookup: impl Fn(&str) -> Option<String>) -> Result<String, ConfigError> {
    non_empty(lookup(API_KEY_VAR)).ok_or(ConfigError::MissingApiKey)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Target API environment
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Environment {
    /// The public production API
    #[default]
    Production,
    /// Any other deployment, by base URL
    Custom(String),
}

impl Environment {
    /// Base URL without a trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        match self {
            Self::Production => PRODUCTION_URL,
            Self::Custom(url) => url.trim_end_matches('/'),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Custom(url) => write!(f, "{url}"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("production") {
            Ok(Self::Production)
        } else if s.starts_with("http://") || s.starts_with("https://") {
            Ok(Self::Custom(s.to_string()))
        } else {
            Err(ConfigError::UnknownEnvironment(s.to_string()))
        }
    }
}

/// Contents of the config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Client defaults
    #[serde(default)]
    pub client: ClientConfig,
}

/// `[client]` section of the config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API key, used when neither `--api-key` nor `PM_API_KEY` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Environment name or base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    /// Application name sent to the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load the config file, or defaults if it does not exist
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load a config file from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--api-key`
    pub api_key: Option<String>,
    /// `--env`
    pub environment: Option<String>,
}

/// Fully resolved client settings
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    /// API key
    pub api_key: String,
    /// Target environment
    pub environment: Environment,
    /// Application name
    pub app_name: String,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("environment", &self.environment)
            .field("app_name", &self.app_name)
            .finish()
    }
}

impl Settings {
    /// Resolve settings from the process environment and config file
    pub fn from_env(overrides: &Overrides) -> Result<Self, ConfigError> {
        let file = GlobalConfig::load()?;
        Self::resolve(overrides, |name| std::env::var(name).ok(), &file)
    }

    /// Resolve settings: flag, then `lookup`, then config file, then default
    pub fn resolve(
        overrides: &Overrides,
        lookup: impl Fn(&str) -> Option<String>,
        file: &GlobalConfig,
    ) -> Result<Self, ConfigError> {
        let api_key = match non_empty(overrides.api_key.clone()) {
            Some(key) => key,
            None => resolve_api_key_with(&lookup)
                .or_else(|_| non_empty(file.client.api_key.clone()).ok_or(ConfigError::MissingApiKey))?,
        };

        let environment = non_empty(overrides.environment.clone())
            .or_else(|| non_empty(lookup(ENV_VAR)))
            .or_else(|| non_empty(file.client.environment.clone()))
            .map_or(Ok(Environment::Production), |env| env.parse())?;

        let app_name = non_empty(file.client.app_name.clone())
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

        Ok(Self {
            api_key,
            environment,
            app_name,
        })
    }
}
