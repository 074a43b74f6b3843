mod types;

pub use types::*;

use crate::error::{Result, SymcheckError};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the XDG-compliant config directory
pub fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", "symcheck")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SymcheckError::Config("Could not determine config directory".to_string()))
}

/// Get the config file path
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load the effective configuration.
///
/// An explicitly passed path must exist. Without one, a missing default
/// config file yields the built-in defaults.
pub fn load(override_path: Option<&Path>) -> Result<Config> {
    match override_path {
        Some(path) => {
            if !path.exists() {
                return Err(SymcheckError::ConfigNotFound(path.display().to_string()));
            }
            read_config(path)
        }
        None => {
            let path = config_path()?;
            if !path.exists() {
                return Ok(Config::default());
            }
            read_config(&path)
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Resolve the reference data directory: flag, then config, then `./data`
pub fn resolve_data_dir(flag: Option<&Path>, config: &Config) -> PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }
    if let Some(dir) = &config.data.dir {
        return dir.clone();
    }
    PathBuf::from("data")
}
