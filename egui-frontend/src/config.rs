//! # App Configuration
//!
//! Optional read-only `config.yaml` in the platform config directory
//! (`~/.config/AquaKidsTherapy/config.yaml` on Linux). Every key is optional;
//! a missing or broken file means defaults.
//!
//! ```yaml
//! initial_role: parent
//! store_lifetime: view
//! seed_demo_data: false
//! window:
//!   title: AquaKids Therapy
//!   inner_size: [1200.0, 800.0]
//!   min_inner_size: [800.0, 600.0]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use shared::Role;

const CONFIG_FILE_NAME: &str = "config.yaml";

/// Who owns a dashboard's in-memory stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreLifetime {
    /// Mounted on first visit, kept until the app closes
    #[default]
    Session,
    /// Discarded as soon as the user switches to another role
    View,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "AquaKids Therapy".to_string(),
            inner_size: [1200.0, 800.0],
            min_inner_size: [800.0, 600.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub initial_role: Role,
    pub store_lifetime: StoreLifetime,
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            initial_role: Role::Guest,
            store_lifetime: StoreLifetime::Session,
            seed_demo_data: true,
        }
    }
}

impl AppConfig {
    /// Load from the platform config directory, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            info!("No config directory available, using default configuration");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(Some(config)) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Ok(None) => {
                info!("No configuration at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("Ignoring configuration at {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }

    /// `Ok(None)` when the file does not exist
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&text).map(Some)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("Invalid configuration YAML")
    }

    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "AquaKids", "AquaKidsTherapy")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.initial_role, Role::Guest);
        assert_eq!(config.store_lifetime, StoreLifetime::Session);
        assert!(config.seed_demo_data);
        assert_eq!(config.window.title, "AquaKids Therapy");
        assert_eq!(config.window.inner_size, [1200.0, 800.0]);
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config = AppConfig::from_yaml("initial_role: admin\nstore_lifetime: view\n").unwrap();
        assert_eq!(config.initial_role, Role::Admin);
        assert_eq!(config.store_lifetime, StoreLifetime::View);
        assert!(config.seed_demo_data);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_empty_yaml_is_defaults() {
        assert_eq!(AppConfig::from_yaml("  \n").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_seed_flag_and_window() {
        let yaml = "seed_demo_data: false\nwindow:\n  title: Front Desk\n";
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert!(!config.seed_demo_data);
        assert_eq!(config.window.title, "Front Desk");
        assert_eq!(config.window.min_inner_size, [800.0, 600.0]);
    }

    #[test]
    fn test_unknown_role_is_an_error() {
        assert!(AppConfig::from_yaml("initial_role: superuser\n").is_err());
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempdir().unwrap();
        let result = AppConfig::load_from(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "initial_role: therapist").unwrap();

        let config = AppConfig::load_from(&path).unwrap().unwrap();
        assert_eq!(config.initial_role, Role::Therapist);
    }

    #[test]
    fn test_load_from_broken_file_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "window: [not, a, map]").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }
}
