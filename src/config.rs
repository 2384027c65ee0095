use crate::chat::ChatLevels;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    // Chat output (per-command flags override these)
    pub log_verbose: bool,
    pub log_info: bool,
    pub log_error: bool,

    // Data
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_verbose: false,
            log_info: true,
            log_error: true,
            catalog_path: None,
        }
    }
}

impl Config {
    /// Load config from the default location, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from `path`, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                // Graceful degradation: log warning and use defaults
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                // Backup corrupt file for debugging
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Chat levels used when a command passes no flags
    pub fn chat_levels(&self) -> ChatLevels {
        ChatLevels {
            verbose: self.log_verbose,
            info: self.log_info,
            error: self.log_error,
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("aethergo")
        .join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.log_verbose);
        assert!(config.log_info);
        assert!(config.log_error);
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.chat_levels(), ChatLevels::default());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            log_verbose: true,
            catalog_path: Some(PathBuf::from("/tmp/catalog.json")),
            ..Config::default()
        };
        let json = serde_json::to_string(&config).expect("Failed to serialize");
        let restored: Config = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(config, restored);
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("config.json")).expect("load");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_save_and_load() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("aethergo/config.json");
        let config = Config {
            log_error: false,
            ..Config::default()
        };
        config.save_to(&path).expect("Failed to save");
        assert_eq!(Config::load_from(&path).expect("load"), config);
    }

    #[test]
    fn test_config_corrupt_json_handling() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not valid json").expect("write");

        let config = Config::load_from(&path).expect("corrupt config should not fail");
        assert_eq!(config, Config::default());
        assert!(!path.exists());
        assert!(dir.path().join("config.json.corrupt").exists());
    }
}
