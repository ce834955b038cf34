//! Configuration management
//!
//! A single YAML document holds one entry per account. Environment variables
//! override account fields at lookup time.
//! Priority: GRIDSCALE_* environment variable > config file

pub mod resolver;

use crate::api::client::DEFAULT_API_URL;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use resolver::ConfigResolver;

/// Account used when `--account` is not given
pub const DEFAULT_ACCOUNT: &str = "default";

/// Application configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub accounts: Vec<AccountEntry>,
    #[serde(skip)]
    env: EnvOverrides,
    #[serde(skip)]
    source: Option<PathBuf>,
}

/// One account as written in the config file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AccountEntry {
    pub name: String,
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(default)]
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Values taken from the process environment for known configuration keys
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvOverrides {
    pub user_id: Option<String>,
    pub token: Option<String>,
    pub url: Option<String>,
}

impl EnvOverrides {
    pub const USER_ID: &'static str = "GRIDSCALE_UUID";
    pub const TOKEN: &'static str = "GRIDSCALE_TOKEN";
    pub const URL: &'static str = "GRIDSCALE_URL";

    /// Build overrides from an arbitrary lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            user_id: read(Self::USER_ID),
            token: read(Self::TOKEN),
            url: read(Self::URL),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

/// Settings of one account after environment overrides are applied
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSettings {
    pub name: String,
    pub user_id: String,
    pub token: String,
    pub url: String,
}

impl Config {
    /// Parse a YAML document. An empty document is an empty configuration.
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Config {
                source: Some(path.to_path_buf()),
                ..Config::default()
            });
        }

        let mut config: Config =
            serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
                path: path.to_string_lossy().to_string(),
                message: e.to_string(),
            })?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            value: String::new(),
            reason: format!("Failed to serialize config: {}", e),
        })
    }

    pub(crate) fn with_env(mut self, env: EnvOverrides) -> Self {
        self.env = env;
        self
    }

    /// File the configuration was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn account_names(&self) -> Vec<String> {
        self.accounts.iter().map(|a| a.name.clone()).collect()
    }

    /// Look up an account and merge environment overrides into it.
    /// When a name appears twice the first entry wins.
    pub fn account(&self, name: &str) -> Option<AccountSettings> {
        let entry = self.accounts.iter().find(|a| a.name == name)?;

        Some(AccountSettings {
            name: entry.name.clone(),
            user_id: self
                .env
                .user_id
                .clone()
                .unwrap_or_else(|| entry.user_id.clone()),
            token: self.env.token.clone().unwrap_or_else(|| entry.token.clone()),
            url: self
                .env
                .url
                .clone()
                .or_else(|| entry.url.clone())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }

    /// Skeleton written by `make-config`
    pub fn template() -> Self {
        Config {
            accounts: vec![AccountEntry {
                name: DEFAULT_ACCOUNT.to_string(),
                user_id: "<your user UUID>".to_string(),
                token: "<your API token>".to_string(),
                url: Some(DEFAULT_API_URL.to_string()),
            }],
            ..Config::default()
        }
    }
}
