//! Operator preferences, persisted as JSON under the home directory.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PortalError;
use crate::filter::DateRange;

fn default_page_size() -> usize {
    25
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalConfig {
    #[serde(default)]
    pub default_date_range: DateRange,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Feature flags by name; anything absent is off.
    #[serde(default)]
    pub features: HashMap<String, bool>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        PortalConfig {
            default_date_range: DateRange::default(),
            page_size: default_page_size(),
            features: HashMap::new(),
        }
    }
}

impl PortalConfig {
    pub fn feature_enabled(&self, name: &str) -> bool {
        self.features.get(name).copied().unwrap_or(false)
    }
}

/// `~/.oronno/portal.json`.
pub fn config_path() -> Result<PathBuf, PortalError> {
    let home = dirs::home_dir()
        .ok_or_else(|| PortalError::Config("Cannot determine home directory".into()))?;
    Ok(home.join(".oronno").join("portal.json"))
}

/// Read the config, falling back to defaults when the file does not exist.
pub fn load_config(path: &Path) -> Result<PortalConfig, PortalError> {
    if !path.exists() {
        log::info!("No config at {}, using defaults", path.display());
        return Ok(PortalConfig::default());
    }
    let content = fs::read_to_string(path)
        .map_err(|e| PortalError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| PortalError::Config(format!("Invalid config at {}: {}", path.display(), e)))
}

pub fn save_config(path: &Path, config: &PortalConfig) -> Result<(), PortalError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            PortalError::Config(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }
    let formatted = serde_json::to_string_pretty(config)
        .map_err(|e| PortalError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(path, formatted)
        .map_err(|e| PortalError::Config(format!("Failed to write {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portal.json");
        let config = load_config(&path).unwrap();
        assert_eq!(config.default_date_range, DateRange::Last7Days);
        assert_eq!(config.page_size, 25);
        assert!(config.features.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("portal.json");

        let mut config = PortalConfig::default();
        config.page_size = 50;
        config.default_date_range = DateRange::Last30Days;
        config.features.insert("abTesting".into(), true);

        save_config(&path, &config).unwrap();
        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.page_size, 50);
        assert_eq!(loaded.default_date_range, DateRange::Last30Days);
        assert!(loaded.feature_enabled("abTesting"));
        assert!(!loaded.feature_enabled("unknown"));
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portal.json");
        fs::write(&path, r#"{"pageSize": 10}"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.default_date_range, DateRange::Last7Days);
    }

    #[test]
    fn invalid_json_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portal.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(load_config(&path), Err(PortalError::Config(_))));
    }
}
