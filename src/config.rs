use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TrkError};
use crate::store::STORE_FILE_NAME;

/// Tool configuration loaded from ~/.trk/config.json
#[derive(Debug, Clone, Deserialize)]
pub struct TrkConfig {
    /// Directory holding the visit store, relative to the repository root
    #[serde(default = "default_store_dir")]
    pub store_dir: String,
    /// Whether recorder operations are appended to the operation log
    #[serde(default = "default_log_operations")]
    pub log_operations: bool,
}

fn default_store_dir() -> String {
    ".trk".to_string()
}

fn default_log_operations() -> bool {
    true
}

impl Default for TrkConfig {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
            log_operations: default_log_operations(),
        }
    }
}

impl TrkConfig {
    /// Load config from the standard location (~/.trk/config.json)
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_path())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| TrkError::Config(format!("Failed to read config file: {}", e)))?;
            let config: TrkConfig = serde_json::from_str(&content)
                .map_err(|e| TrkError::Config(format!("Failed to parse config JSON: {}", e)))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Get the standard config file path
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".trk")
            .join("config.json")
    }

    /// Path of the visit store inside `repo_dir`.
    ///
    /// The `TRK_DIR` environment variable overrides the configured store
    /// directory.
    pub fn store_path(&self, repo_dir: &Path) -> PathBuf {
        let store_dir = std::env::var("TRK_DIR").unwrap_or_else(|_| self.store_dir.clone());
        repo_dir.join(store_dir).join(STORE_FILE_NAME)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = TrkConfig::default();
        assert_eq!(config.store_dir, ".trk");
        assert!(config.log_operations);
    }

    #[test]
    fn test_load_from_json() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"{{
                "store_dir": ".tracking",
                "log_operations": false
            }}"#
        )
        .unwrap();

        let config = TrkConfig::load_from_path(&temp_file.path().to_path_buf()).unwrap();
        assert_eq!(config.store_dir, ".tracking");
        assert!(!config.log_operations);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let path = PathBuf::from("/nonexistent/path/config.json");
        let config = TrkConfig::load_from_path(&path).unwrap();
        assert_eq!(config.store_dir, ".trk");
    }

    #[test]
    fn test_load_invalid_json_returns_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "not valid json").unwrap();

        let result = TrkConfig::load_from_path(&temp_file.path().to_path_buf());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse config JSON"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, r#"{{ "store_dir": ".visits" }}"#).unwrap();

        let config = TrkConfig::load_from_path(&temp_file.path().to_path_buf()).unwrap();
        assert_eq!(config.store_dir, ".visits");
        assert!(config.log_operations);
    }

    #[test]
    fn test_config_path_contains_expected_components() {
        let path = TrkConfig::config_path();
        let path_str = path.to_string_lossy();
        assert!(path_str.contains(".trk"));
        assert!(path_str.ends_with("config.json"));
    }

    #[test]
    fn test_store_path_joins_repo_dir() {
        let config = TrkConfig::default();
        let path = config.store_path(Path::new("/repo"));
        assert_eq!(path, PathBuf::from("/repo/.trk/visits.json"));
    }
}
