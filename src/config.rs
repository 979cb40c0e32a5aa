use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tdw_core::AppMode;

const APP_DIR: &str = "thema-der-woche";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Theme catalog JSON; the bundled edition 1 catalog when unset
    pub catalog: Option<String>,

    /// Where setup.json and used_themes.json live
    pub data_dir: Option<String>,

    #[serde(default)]
    pub mode: AppMode,
}

impl Config {
    /// Data directory, falling back to the platform data dir
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(expand_path(dir)),
            None => Ok(dirs::data_dir()
                .context("Could not determine data directory")?
                .join(APP_DIR)),
        }
    }

    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog.as_deref().map(expand_path)
    }
}

/// Get the config file path (~/.config/thema-der-woche/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join(APP_DIR);
    Ok(config_dir.join("config.toml"))
}

/// Load config from ~/.config/thema-der-woche/config.toml, defaults if absent
pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config)
}

/// Expand ~ in paths to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
