use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const APP_NAME: &str = "catalog-tui";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub suggestion_debounce_ms: u64,
    pub suggestion_limit: usize,
    pub min_query_chars: usize,
    pub discard_stale_suggestions: bool,
    pub per_page: u32,
    pub scrape_cooldown_secs: u64,
    pub admin_refresh_secs: u64,
    pub running_marker: String,
    pub alert_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub palette: PaletteType,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            suggestion_debounce_ms: 300,
            suggestion_limit: 5,
            min_query_chars: 2,
            discard_stale_suggestions: true,
            per_page: 12,
            scrape_cooldown_secs: 5,
            admin_refresh_secs: 30,
            running_marker: "Ejecutándose".to_string(),
            alert_timeout_secs: 5,
            request_timeout_secs: 10,
            palette: PaletteType::Nord,
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        home::home_dir().map(|mut path| {
            path.push(".config");
            path.push(APP_NAME);
            path.push("config.toml");
            path
        })
    }

    /// An explicit path must exist; the default location is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.suggestion_debounce_ms)
    }

    pub fn scrape_cooldown(&self) -> Duration {
        Duration::from_secs(self.scrape_cooldown_secs)
    }

    pub fn admin_refresh(&self) -> Duration {
        Duration::from_secs(self.admin_refresh_secs)
    }

    pub fn alert_timeout(&self) -> Duration {
        Duration::from_secs(self.alert_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

pub fn default_log_path() -> PathBuf {
    match home::home_dir() {
        Some(mut path) => {
            path.push(".local");
            path.push("share");
            path.push(APP_NAME);
            path.push("catalog-tui.log");
            path
        }
        None => PathBuf::from("catalog-tui.log"),
    }
}
