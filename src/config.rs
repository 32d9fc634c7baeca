//! User configuration.
//!
//! Stored as YAML at `<config dir>/nexevent/config.yaml`. The directory can be
//! overridden with `NEXEVENT_CONFIG_DIR`.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;
use url::Url;

use crate::enum_display_fromstr;
use crate::error::{NexEventError, Result};

pub const CONFIG_DIR_ENV: &str = "NEXEVENT_CONFIG_DIR";
pub const API_URL_ENV: &str = "NEXEVENT_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the events API (default: http://localhost:5000)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Log level for the log file (default: warn)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_api_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            log_level: default_log_level(),
        }
    }
}

/// Keys accepted by `config get` and `config set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    ApiUrl,
    LogLevel,
}

fn unknown_config_key(key: String) -> NexEventError {
    NexEventError::Config(format!(
        "unknown config key '{key}' (expected api_url or log_level)"
    ))
}

enum_display_fromstr!(ConfigKey, unknown_config_key, {
    ApiUrl => "api_url",
    LogLevel => "log_level",
});

fn project_dirs() -> Result<directories::ProjectDirs> {
    directories::ProjectDirs::from("org", "nexevent", "nexevent")
        .ok_or_else(|| NexEventError::Config("could not determine home directory".to_string()))
}

/// Directory holding `config.yaml`.
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV)
        && !dir.is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    Ok(project_dirs()?.config_dir().to_path_buf())
}

/// Directory for the log file.
pub fn data_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.data_dir().to_path_buf())
}

pub fn parse_api_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| NexEventError::Config(format!("invalid api_url '{raw}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(NexEventError::Config(format!(
            "invalid api_url '{raw}': unsupported scheme '{other}'"
        ))),
    }
}

fn parse_log_level(raw: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(raw.trim())
        .map_err(|_| NexEventError::Config(format!("invalid log_level '{raw}'")))
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        Ok(config_dir()?.join("config.yaml"))
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            NexEventError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        Ok(serde_yaml_ng::from_str(&content)?)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            NexEventError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;
        Ok(())
    }

    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::ApiUrl => self.api_url.clone(),
            ConfigKey::LogLevel => self.log_level.clone(),
        }
    }

    /// Validate and assign one key.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        match key {
            ConfigKey::ApiUrl => {
                self.api_url = parse_api_url(value)?.to_string();
            }
            ConfigKey::LogLevel => {
                self.log_level = parse_log_level(value)?.to_string().to_lowercase();
            }
        }
        Ok(())
    }

    pub fn level_filter(&self) -> LevelFilter {
        parse_log_level(&self.log_level).unwrap_or(LevelFilter::WARN)
    }

    /// Base URL from, in order: the `--url` flag, `NEXEVENT_API_URL`, this config.
    pub fn resolve_api_url(&self, flag: Option<&str>) -> Result<Url> {
        if let Some(url) = flag {
            return parse_api_url(url);
        }
        if let Ok(url) = env::var(API_URL_ENV)
            && !url.is_empty()
        {
            return parse_api_url(&url);
        }
        parse_api_url(&self.api_url)
    }
}
