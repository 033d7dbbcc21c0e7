//! Project configuration stored in `.kinship/config.json`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Directory created by `kinship init`.
pub const CONFIG_DIR: &str = ".kinship";

const CONFIG_FILE: &str = "config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the network's input files live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub version: String,
    /// Roster file: member count, then `index name` pairs.
    pub roster: PathBuf,
    /// Friendship file: friendship count, then `source target` pairs.
    pub friends: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            roster: PathBuf::from("index.txt"),
            friends: PathBuf::from("friend.txt"),
        }
    }
}

impl Config {
    /// Path of the config file under `root`.
    pub fn path(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Loads the config under `root`, or the defaults if there is none.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = Self::path(root);
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Json { path, source })
    }

    /// Writes this config under `root`, creating the config directory.
    pub fn save(&self, root: &Path) -> Result<(), ConfigError> {
        let path = Self::path(root);
        let io_err = |source| ConfigError::Io {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(root.join(CONFIG_DIR)).map_err(io_err)?;
        let text = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Json {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, text).map_err(io_err)
    }

    /// Applies command-line overrides on top of the stored paths.
    pub fn with_overrides(mut self, roster: Option<PathBuf>, friends: Option<PathBuf>) -> Self {
        if let Some(roster) = roster {
            self.roster = roster;
        }
        if let Some(friends) = friends {
            self.friends = friends;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.roster, PathBuf::from("index.txt"));
    }

    #[test]
    fn test_save_load_config() {
        let dir = tempdir().unwrap();
        let config = Config {
            roster: PathBuf::from("data/members.txt"),
            ..Config::default()
        };

        config.save(dir.path()).unwrap();
        assert!(dir.path().join(CONFIG_DIR).join("config.json").exists());

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_config() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(CONFIG_DIR)).unwrap();
        fs::write(Config::path(dir.path()), "{ not json").unwrap();

        assert!(matches!(
            Config::load(dir.path()),
            Err(ConfigError::Json { .. })
        ));
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(None, Some(PathBuf::from("f.txt")));
        assert_eq!(config.roster, PathBuf::from("index.txt"));
        assert_eq!(config.friends, PathBuf::from("f.txt"));
    }
}
