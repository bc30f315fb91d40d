/// User settings
///
/// Stored as `settings.toml` in the platform config directory:
/// - Linux: ~/.config/collection-tracker/settings.toml
/// - macOS: ~/Library/Application Support/collection-tracker/settings.toml
/// - Windows: %APPDATA%\collection-tracker\settings.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;

const APP_DIR: &str = "collection-tracker";
const CONFIG_FILE: &str = "settings.toml";

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/addListing";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Listing creation endpoint
    pub endpoint: String,
    /// Request timeout in seconds, unset means the transport default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_DIR);
        path.push(CONFIG_FILE);
        path
    })
}

/// Load settings from the default location
///
/// On first launch the defaults are written out so the file can be edited.
/// Without a config directory the defaults are used as-is.
pub fn load() -> Result<Config> {
    let Some(path) = default_config_path() else {
        return Ok(Config::default());
    };

    if path.exists() {
        return load_from_path(&path);
    }

    let config = Config::default();
    match save_to_path(&config, &path) {
        Ok(()) => tracing::info!(path = %path.display(), "wrote default settings"),
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "could not write default settings"),
    }
    Ok(config)
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(config)?)?;
    Ok(())
}
