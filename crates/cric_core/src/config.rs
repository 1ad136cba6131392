//! Storage configuration.
//!
//! Resolved from defaults, then an optional JSON file named by
//! `CRIC_CONFIG_PATH`, then `CRIC_DATA_DIR`. The CLI can override the data
//! directory last.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{env, fs};

pub const CONFIG_PATH_ENV: &str = "CRIC_CONFIG_PATH";
pub const DATA_DIR_ENV: &str = "CRIC_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub players_file: String,
    pub teams_file: String,
    pub matches_file: String,
    pub active_match_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            players_file: "players.json".to_string(),
            teams_file: "teams.json".to_string(),
            matches_file: "matches.json".to_string(),
            active_match_file: "current_match.json".to_string(),
        }
    }
}

impl StorageConfig {
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self, StoreError> {
        Self::resolve(env::var(CONFIG_PATH_ENV).ok(), env::var(DATA_DIR_ENV).ok())
    }

    pub fn resolve(
        config_path: Option<String>,
        data_dir: Option<String>,
    ) -> Result<Self, StoreError> {
        let mut config = match config_path.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => {
                let content = fs::read_to_string(path).map_err(|e| {
                    StoreError::InvalidConfig(format!(
                        "failed to read {CONFIG_PATH_ENV}='{path}': {e}"
                    ))
                })?;
                Self::from_json(&content).map_err(|e| {
                    StoreError::InvalidConfig(format!(
                        "failed to parse {CONFIG_PATH_ENV}='{path}': {e}"
                    ))
                })?
            }
            _ => Self::default(),
        };

        if let Some(dir) = data_dir.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        let files = [
            ("players_file", &self.players_file),
            ("teams_file", &self.teams_file),
            ("matches_file", &self.matches_file),
            ("active_match_file", &self.active_match_file),
        ];

        for (field, name) in files {
            if name.trim().is_empty() {
                return Err(StoreError::InvalidConfig(format!("{field} must not be empty")));
            }
        }

        Ok(())
    }

    pub fn players_path(&self) -> PathBuf {
        self.data_dir.join(&self.players_file)
    }

    pub fn teams_path(&self) -> PathBuf {
        self.data_dir.join(&self.teams_file)
    }

    pub fn matches_path(&self) -> PathBuf {
        self.data_dir.join(&self.matches_file)
    }

    pub fn active_match_path(&self) -> PathBuf {
        self.data_dir.join(&self.active_match_file)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = StorageConfig::resolve(None, None).unwrap();
        assert_eq!(config, StorageConfig::default());
        assert_eq!(config.players_path(), PathBuf::from("./players.json"));
    }

    #[test]
    fn test_partial_config_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cric.json");
        fs::write(&path, r#"{ "data_dir": "/srv/cric", "matches_file": "history.json" }"#).unwrap();

        let config =
            StorageConfig::resolve(Some(path.display().to_string()), None).unwrap();
        assert_eq!(config.matches_path(), PathBuf::from("/srv/cric/history.json"));
        assert_eq!(config.players_file, "players.json");
    }

    #[test]
    fn test_data_dir_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cric.json");
        fs::write(&path, r#"{ "data_dir": "/srv/cric" }"#).unwrap();

        let config = StorageConfig::resolve(
            Some(path.display().to_string()),
            Some("/tmp/other".to_string()),
        )
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/other"));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let err = StorageConfig::resolve(Some("/definitely/not/here.json".to_string()), None)
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidConfig(_)));
    }

    #[test]
    fn test_empty_file_name_rejected() {
        let err = StorageConfig::from_json(r#"{ "teams_file": " " }"#)
            .and_then(|c| c.validate())
            .unwrap_err();
        assert!(err.to_string().contains("teams_file"));
    }
}
