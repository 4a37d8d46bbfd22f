// Configuration module for advcounter
// This module handles loading and parsing the TOML configuration that selects
// the statistics engine and its default precision

mod types;

pub use types::{Config, EngineConfig};

use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "advcounter.toml";

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

impl ConfigResult {
    fn defaults(warning: Option<String>) -> Self {
        ConfigResult {
            config: Config::default(),
            warning,
        }
    }
}

/// Loads configuration from an explicit path, or from the first default location that exists
///
/// Default locations are `./advcounter.toml`, then `~/.config/advcounter/config.toml`.
/// Returns default configuration if no file is found or on read/parse errors;
/// a missing explicit path is reported as a warning.
pub fn load_config(explicit: Option<&Path>) -> ConfigResult {
    if let Some(path) = explicit {
        if !path.exists() {
            log::debug!("Config file {:?} does not exist, using defaults", path);
            return ConfigResult::defaults(Some(format!(
                "Config file '{}' not found, using defaults",
                path.display()
            )));
        }
        return load_config_from(path);
    }

    match default_config_paths().into_iter().find(|path| path.exists()) {
        Some(path) => load_config_from(&path),
        None => {
            log::debug!("No config file found, using defaults");
            ConfigResult::defaults(None)
        }
    }
}

/// Loads configuration from the given file
///
/// Returns default configuration if the file doesn't exist or on parse errors
pub fn load_config_from(config_path: &Path) -> ConfigResult {
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult::defaults(None);
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => {
            log::debug!("Config file read successfully, {} bytes", contents.len());
            contents
        }
        Err(e) => {
            log::debug!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult::defaults(Some(format!("Failed to read config: {}", e)));
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            log::debug!("Config parsed successfully: driver {}", config.default.driver);
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            log::debug!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult::defaults(Some(format!("Invalid config: {}", e)))
        }
    }
}

fn default_config_paths() -> Vec<PathBuf> {
    vec![PathBuf::from(DEFAULT_CONFIG_FILE), get_user_config_path()]
}

/// Returns the path to the per-user configuration file
///
/// Always uses ~/.config/advcounter/config.toml on all platforms for consistency.
fn get_user_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("advcounter")
        .join("config.toml")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
