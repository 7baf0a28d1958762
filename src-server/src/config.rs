//! Server Configuration
//!
//! Defaults overridable through `KANBAN_*` environment variables. A `.env`
//! file in the working directory is read first when present.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got '{value}'")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Configuration for the kanban server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    /// `EnvFilter` directive, e.g. `info` or `kanban_lib=debug,info`
    pub log_level: String,
    /// Binds every interface and allows cross-origin requests
    pub dev_mode: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3170,
            db_path: PathBuf::from("data/kanban.db"),
            log_dir: PathBuf::from("logs"),
            log_level: "info".to_string(),
            dev_mode: false,
        }
    }
}

impl ServerConfig {
    /// Load `.env` (if any), then apply `KANBAN_*` overrides to the defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("KANBAN_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("KANBAN_PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "KANBAN_PORT",
                value: port.clone(),
                expected: "a port number",
            })?;
        }
        if let Some(path) = lookup("KANBAN_DB_PATH") {
            config.db_path = PathBuf::from(path);
        }
        if let Some(dir) = lookup("KANBAN_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }
        if let Some(level) = lookup("KANBAN_LOG_LEVEL") {
            config.log_level = level;
        }
        if let Some(flag) = lookup("KANBAN_DEV_MODE") {
            config.dev_mode = parse_flag(&flag).ok_or(ConfigError::InvalidValue {
                key: "KANBAN_DEV_MODE",
                value: flag.clone(),
                expected: "true or false",
            })?;
        }

        Ok(config)
    }

    /// Address to listen on. Dev mode listens on every interface.
    pub fn bind_addr(&self) -> String {
        let host = if self.dev_mode { "0.0.0.0" } else { self.host.as_str() };
        format!("{}:{}", host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
