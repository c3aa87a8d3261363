// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard connection settings
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `TG_*` environment variables.

use crate::route::{Endpoints, RouteError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_URL: &str = "http://localhost:8080";
pub const DEFAULT_CONTEXT: &str = "/testgrid/dashboard";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_LOG_LIMIT: u64 = 20 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error(transparent)]
    InvalidUrl(#[from] RouteError),
}

/// Resolved dashboard settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Server origin, e.g. `https://testgrid.example.com`
    pub base_url: String,
    /// Mount point of the dashboard on the server
    pub context: String,
    /// Sent verbatim as the `Authorization` header
    pub token: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
    /// Hard cap on bytes read from a log response
    ///
    /// A log document is JSON, so it cannot be cut short: a larger response
    /// fails the download instead of being truncated.
    pub log_limit: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            context: DEFAULT_CONTEXT.to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
            log_limit: DEFAULT_LOG_LIMIT,
        }
    }
}

/// On-disk form; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    url: Option<String>,
    context: Option<String>,
    token: Option<String>,
    #[serde(with = "humantime_serde", default)]
    timeout: Option<Duration>,
    log_limit: Option<u64>,
}

impl DashboardConfig {
    /// Load settings from `path` (or the default location) and the environment
    ///
    /// An explicitly given file must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let (file, required) = match path {
            Some(p) => (Some(p.to_path_buf()), true),
            None => match std::env::var_os("TG_CONFIG") {
                Some(p) => (Some(PathBuf::from(p)), true),
                None => (default_config_path(), false),
            },
        };

        if let Some(file) = file {
            if required || file.exists() {
                config.merge_file(&file)?;
            }
        }

        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Merge settings from a TOML file
    pub fn merge_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.merge_toml(&content).map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(())
    }

    fn merge_toml(&mut self, content: &str) -> Result<(), String> {
        let raw: RawConfig = toml::from_str(content).map_err(|e| e.to_string())?;
        if let Some(url) = raw.url {
            self.base_url = url;
        }
        if let Some(context) = raw.context {
            self.context = context;
        }
        if raw.token.is_some() {
            self.token = raw.token;
        }
        if let Some(timeout) = raw.timeout {
            self.timeout = timeout;
        }
        if let Some(limit) = raw.log_limit {
            self.log_limit = limit;
        }
        Ok(())
    }

    /// Apply `TG_URL`, `TG_CONTEXT`, `TG_TOKEN` and `TG_TIMEOUT_MS`
    pub fn apply_env(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(url) = lookup("TG_URL") {
            self.base_url = url;
        }
        if let Some(context) = lookup("TG_CONTEXT") {
            self.context = context;
        }
        if let Some(token) = lookup("TG_TOKEN").filter(|t| !t.is_empty()) {
            self.token = Some(token);
        }
        if let Some(ms) = lookup("TG_TIMEOUT_MS") {
            let ms = ms.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                key: "TG_TIMEOUT_MS",
                value: ms.clone(),
            })?;
            self.timeout = Duration::from_millis(ms);
        }
        Ok(())
    }

    /// Point at a different server, e.g. from a `--url` flag
    pub fn set_base_url(&mut self, url: impl Into<String>) -> Result<(), ConfigError> {
        self.base_url = url.into();
        self.validate()
    }

    /// Endpoints for the configured server
    pub fn endpoints(&self) -> Result<Endpoints, RouteError> {
        Endpoints::new(&self.base_url, &self.context)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.endpoints()?;
        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "timeout",
                value: humantime::format_duration(self.timeout).to_string(),
            });
        }
        Ok(())
    }
}

/// `$XDG_CONFIG_HOME/tg/config.toml`, falling back to the platform config dir
fn default_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg).join("tg").join("config.toml"));
    }
    dirs::config_dir().map(|d| d.join("tg").join("config.toml"))
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;
