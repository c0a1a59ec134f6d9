// Configuration module for alert-toast
// This module handles loading and parsing configuration from ~/.config/alert-toast/config.toml

mod types;

pub use types::{BannerAnimationSetting, Config, PlacementSetting, ToastConfig};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ToastError;

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/alert-toast/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from an explicit path with the same fallback rules
pub fn load_config_from(config_path: &Path) -> ConfigResult {
    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            #[cfg(debug_assertions)]
            log::debug!("Config parsed successfully: {:?}", config.toast);
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e.message())),
            }
        }
    }
}

fn read_config_file(config_path: &Path) -> Result<String, ToastError> {
    Ok(fs::read_to_string(config_path)?)
}

/// Parses a `--duration` argument in seconds
///
/// Only the syntax is checked here. Negative and non-finite values are
/// clamped when the duration is applied.
pub fn parse_duration_secs(value: &str) -> Result<f64, ToastError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ToastError::InvalidDuration(value.to_string()))
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/alert-toast/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("alert-toast")
        .join("config.toml")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
