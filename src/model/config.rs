use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "prepdesk.json";
pub const ENV_CONFIG: &str = "PREPDESK_CONFIG";
pub const ENV_API_URL: &str = "PREPDESK_API_URL";
pub const ENV_TOKEN: &str = "PREPDESK_TOKEN";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeskConfig {
    #[serde(default)]
    pub api: ApiConfig,

    /// Mock-test series shown in the performance chart.
    #[serde(default = "default_series")]
    pub mock_series_id: String,

    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_level")]
    pub level: String,

    /// Directory for the TUI log file; defaults to the system temp dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

fn default_series() -> String {
    "default".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            token: None,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            dir: None,
        }
    }
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            mock_series_id: default_series(),
            log: LogConfig::default(),
        }
    }
}

/// Inputs that override the built-in defaults, lowest precedence first.
#[derive(Clone, Debug, Default)]
pub struct ConfigSources {
    /// Explicit `--config` path; must exist when given.
    pub explicit_path: Option<PathBuf>,
    /// Directory searched for `prepdesk.json` when no path is configured.
    pub search_dir: Option<PathBuf>,
    pub env_config: Option<String>,
    pub env_api_url: Option<String>,
    pub env_token: Option<String>,
    pub cli_api_url: Option<String>,
}

impl ConfigSources {
    pub fn from_env(explicit_path: Option<PathBuf>, cli_api_url: Option<String>) -> Self {
        let var = |k: &str| std::env::var(k).ok().filter(|v| !v.trim().is_empty());
        Self {
            explicit_path,
            search_dir: std::env::current_dir().ok(),
            env_config: var(ENV_CONFIG),
            env_api_url: var(ENV_API_URL),
            env_token: var(ENV_TOKEN),
            cli_api_url,
        }
    }
}

impl ConfigSources {
    /// The file `resolve` reads: an explicit path even if missing, else the
    /// default file only when it exists.
    pub fn config_path(&self) -> Option<PathBuf> {
        let required = self
            .explicit_path
            .clone()
            .or_else(|| self.env_config.as_ref().map(PathBuf::from));
        if required.is_some() {
            return required;
        }
        self.search_dir
            .as_ref()
            .map(|d| d.join(DEFAULT_CONFIG_FILE))
            .filter(|p| p.is_file())
    }
}

impl DeskConfig {
    pub fn resolve(sources: &ConfigSources) -> Result<Self> {
        let mut cfg = match sources.config_path() {
            Some(path) => Self::read(&path)?,
            None => Self::default(),
        };

        if let Some(url) = &sources.env_api_url {
            cfg.api.base_url = url.clone();
        }
        if let Some(token) = &sources.env_token {
            cfg.api.token = Some(token.clone());
        }
        if let Some(url) = &sources.cli_api_url {
            cfg.api.base_url = url.clone();
        }
        cfg.api.base_url = cfg.api.base_url.trim_end_matches('/').to_string();
        if cfg.api.base_url.is_empty() {
            anyhow::bail!("api.base_url is empty");
        }
        Ok(cfg)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read config {}", path.display()))?;
        let cfg: DeskConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(cfg)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log
            .dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("prepdesk"))
    }
}

#[cfg(test)]
#[path = "../tests/model/config_tests.rs"]
mod tests;
