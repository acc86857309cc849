use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "projboard.json";

const DEFAULT_DESCRIPTION_MIN_LENGTH: usize = 2;
const DEFAULT_PEOPLE_MIN: f64 = 1.0;
const DEFAULT_PEOPLE_MAX: f64 = 6.0;

/// Form rules for new projects, stored in `projboard.json`.
///
/// The bounds are passed straight to the validator, so `description_min_length`
/// and `people_max` are exclusive while `people_min` is inclusive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardConfig {
    #[serde(default = "default_description_min_length")]
    pub description_min_length: usize,

    #[serde(default = "default_people_min")]
    pub people_min: f64,

    #[serde(default = "default_people_max")]
    pub people_max: f64,
}

fn default_description_min_length() -> usize {
    DEFAULT_DESCRIPTION_MIN_LENGTH
}

fn default_people_min() -> f64 {
    DEFAULT_PEOPLE_MIN
}

fn default_people_max() -> f64 {
    DEFAULT_PEOPLE_MAX
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            description_min_length: DEFAULT_DESCRIPTION_MIN_LENGTH,
            people_min: DEFAULT_PEOPLE_MIN,
            people_max: DEFAULT_PEOPLE_MAX,
        }
    }
}

impl BoardConfig {
    /// Load config from the given file, or return defaults if it does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: BoardConfig = serde_json::from_str(&content)?;
        config.check()?;
        Ok(config)
    }

    /// Save config to the given file, creating parent directories.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Default location: the platform config dir for projboard.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "projboard", "projboard")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }

    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn check(&self) -> Result<()> {
        if !(self.people_min < self.people_max) {
            return Err(BoardError::Config(format!(
                "people_min ({}) must be lower than people_max ({})",
                self.people_min, self.people_max
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.description_min_length, 2);
        assert_eq!(config.people_min, 1.0);
        assert_eq!(config.people_max, 6.0);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = BoardConfig::load(dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILENAME);

        let config = BoardConfig {
            description_min_length: 5,
            ..BoardConfig::default()
        };
        config.save(&path).unwrap();

        let loaded = BoardConfig::load(&path).unwrap();
        assert_eq!(loaded.description_min_length, 5);
        assert_eq!(loaded.people_max, 6.0);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, r#"{ "people_max": 10 }"#).unwrap();

        let config = BoardConfig::load(&path).unwrap();
        assert_eq!(config.people_max, 10.0);
        assert_eq!(config.people_min, 1.0);
        assert_eq!(config.description_min_length, 2);
    }

    #[test]
    fn test_inverted_people_range_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, r#"{ "people_min": 4, "people_max": 4 }"#).unwrap();

        let err = BoardConfig::load(&path).unwrap_err();
        assert!(matches!(err, BoardError::Config(_)));
    }

    #[test]
    fn test_malformed_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "not json").unwrap();

        let err = BoardConfig::load(&path).unwrap_err();
        assert!(matches!(err, BoardError::Serialization(_)));
    }
}
