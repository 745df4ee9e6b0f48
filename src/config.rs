//! Configuration loading and management.
//!
//! Configuration comes from a TOML file, found through the
//! `PRESENCEMON_CONFIG` environment variable or at
//! `~/.config/presencemon/config.toml`. A missing file means defaults.
//! `PRESENCEMON_DATA_CSV` and `PRESENCEMON_PORT` override single fields
//! on top of whatever was loaded.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming an explicit config file path.
pub const CONFIG_ENV: &str = "PRESENCEMON_CONFIG";

/// Environment override for the presence source path.
pub const DATA_CSV_ENV: &str = "PRESENCEMON_DATA_CSV";

/// Environment override for the HTTP port.
pub const PORT_ENV: &str = "PRESENCEMON_PORT";

/// Main configuration struct.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Path of the CSV presence source.
    #[serde(default = "default_data_csv")]
    pub data_csv: PathBuf,

    /// Optional TOML user directory (names/avatars).
    #[serde(default)]
    pub users_file: Option<PathBuf>,

    /// Port the HTTP server binds to.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Seconds the parsed dataset stays cached before a re-read.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_csv: default_data_csv(),
            users_file: None,
            port: default_port(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

fn default_data_csv() -> PathBuf {
    PathBuf::from("data/presence.csv")
}

fn default_port() -> u16 {
    5000
}

fn default_cache_ttl_secs() -> u64 {
    600
}

impl Config {
    /// Loads configuration from the default or overridden path, then
    /// applies environment overrides.
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(Self::config_path);

        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            tracing::info!(path = %path.display(), "no config file found, using defaults");
            Config::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Loads configuration from a specific TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read config file {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))
    }

    /// Returns the default config file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("presencemon")
            .join("config.toml")
    }

    /// Cache TTL as a [`Duration`].
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    fn apply_env_overrides(&mut self) {
        if let Some(path) = std::env::var_os(DATA_CSV_ENV) {
            self.data_csv = PathBuf::from(path);
        }

        if let Ok(port) = std::env::var(PORT_ENV) {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(_) => tracing::warn!(%port, "ignoring invalid {} value", PORT_ENV),
            }
        }
    }
}
