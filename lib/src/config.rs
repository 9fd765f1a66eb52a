use crate::error::Result;
use crate::models::Category;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// Storage file; defaults to `links.db` in the data directory
    #[serde(default)]
    pub storage_path: Option<PathBuf>,

    /// Category for new links when none is given
    #[serde(default)]
    pub default_category: Category,

    /// Where exports are written; defaults to the current directory
    #[serde(default)]
    pub export_dir: Option<PathBuf>,

    /// Colored terminal output
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: None,
            default_category: Category::default(),
            export_dir: None,
            color: default_color(),
        }
    }
}

fn default_color() -> bool {
    true
}

impl Config {
    /// Load configuration from a file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from default location (~/.config/linkvault/config.yml)
    /// Falls back to default config if file doesn't exist or is invalid
    pub fn load() -> Self {
        let config_path = crate::utils::get_config_dir().join("config.yml");

        if config_path.exists() {
            match Self::load_from_path(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!(
                        "Failed to load config from {:?}: {}; using defaults",
                        config_path,
                        e
                    );
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }

    /// Resolved storage file path
    pub fn storage_path(&self) -> PathBuf {
        self.storage_path
            .clone()
            .unwrap_or_else(|| crate::utils::get_default_datadir().join("links.db"))
    }

    /// Resolved export directory
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_category, Category::Personal);
        assert!(config.color);
        assert_eq!(config.export_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_load_full_config() {
        let temp_file = NamedTempFile::new().unwrap();
        let config_path = temp_file.path();

        fs::write(
            config_path,
            "storage_path: /tmp/links.db\n\
             default_category: work\n\
             export_dir: /tmp/exports\n\
             color: false\n",
        )
        .unwrap();
        let loaded = Config::load_from_path(config_path).unwrap();

        assert_eq!(
            loaded,
            Config {
                storage_path: Some(PathBuf::from("/tmp/links.db")),
                default_category: Category::Work,
                export_dir: Some(PathBuf::from("/tmp/exports")),
                color: false,
            }
        );
        assert_eq!(loaded.storage_path(), PathBuf::from("/tmp/links.db"));
        assert_eq!(loaded.export_dir(), PathBuf::from("/tmp/exports"));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_file = NamedTempFile::new().unwrap();
        let config_path = temp_file.path();

        fs::write(config_path, "invalid: yaml: content:").unwrap();

        let result = Config::load_from_path(config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_partial_config() {
        let temp_file = NamedTempFile::new().unwrap();
        let config_path = temp_file.path();

        fs::write(config_path, "default_category: tutorial\n").unwrap();

        let config = Config::load_from_path(config_path).unwrap();
        assert_eq!(config.default_category, Category::Learning);
        assert!(config.color);
        assert_eq!(config.storage_path, None);
    }
}
