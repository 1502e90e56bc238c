//! Configuration file support for Scramble.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/scramble/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub planner: PlannerConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Routine history configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Number of recent saved routines feeding the anti-repetition penalty
    #[serde(default = "default_history_window")]
    pub window: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            window: default_history_window(),
        }
    }
}

/// Session planner configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default = "default_time_budget_min")]
    pub default_time_budget_min: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_time_budget_min: default_time_budget_min(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").expect("HOME environment variable not set");
        PathBuf::from(home).join(".local/share")
    });
    base.join("scramble")
}

fn default_history_window() -> usize {
    crate::history::DEFAULT_HISTORY_WINDOW
}

fn default_time_budget_min() -> u32 {
    60
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("scramble").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.history.window, 6);
        assert_eq!(config.planner.default_time_budget_min, 60);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.history.window, parsed.history.window);
        assert_eq!(
            config.planner.default_time_budget_min,
            parsed.planner.default_time_budget_min
        );
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[history]
window = 10
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.history.window, 10);
        assert_eq!(config.planner.default_time_budget_min, 60); // default
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.history.window = 4;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.history.window, 4);
    }
}
