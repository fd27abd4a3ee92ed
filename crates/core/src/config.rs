use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE: &str = "config.json";

/// Settings shared by the CLI host and the link handler.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct UnlConfig {
    /// File extensions (without the dot) that open as outlines rather than
    /// being handed to the system URL opener.
    pub outline_extensions: Vec<String>,
    /// Emit "Partial UNL match" when only a prefix of a locator resolves.
    pub notify_partial_match: bool,
    /// Directory relative outline paths are joined onto when the link
    /// itself carries no base directory.
    pub base_dir: Option<PathBuf>,
    /// Where rolling log files go. Defaults to `~/.unl/logs`.
    pub log_dir: Option<PathBuf>,
}

impl Default for UnlConfig {
    fn default() -> Self {
        Self {
            outline_extensions: vec!["leo".to_string(), "json".to_string()],
            notify_partial_match: true,
            base_dir: None,
            log_dir: None,
        }
    }
}

impl UnlConfig {
    /// `~/.unl`, or `./.unl` when no home directory is known.
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".unl")
    }

    pub fn default_path() -> PathBuf {
        Self::home_dir().join(CONFIG_FILE)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| Self::home_dir().join("logs"))
    }

    /// Read a JSON config file. Missing keys take their default values.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, else the default location if it exists, else
    /// the built-in defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let default_path = Self::default_path();
        if default_path.is_file() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }
}

/// The subset of [`UnlConfig`] link handling depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
    pub outline_extensions: Vec<String>,
    pub notify_partial_match: bool,
    pub base_dir: Option<PathBuf>,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self::from(&UnlConfig::default())
    }
}

impl From<&UnlConfig> for LinkConfig {
    fn from(value: &UnlConfig) -> Self {
        Self {
            outline_extensions: value.outline_extensions.clone(),
            notify_partial_match: value.notify_partial_match,
            base_dir: value.base_dir.clone(),
        }
    }
}

impl LinkConfig {
    /// Whether `path` names an outline file, by extension (case-insensitive).
    pub fn is_outline_path(&self, path: &str) -> bool {
        let lower = path.to_ascii_lowercase();
        self.outline_extensions
            .iter()
            .any(|ext| lower.ends_with(&format!(".{}", ext.to_ascii_lowercase())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UnlConfig::default();
        assert_eq!(config.outline_extensions, vec!["leo", "json"]);
        assert!(config.notify_partial_match);
        assert!(config.base_dir.is_none());
        assert!(config.log_dir().ends_with(".unl/logs"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "notify_partial_match": false }"#).unwrap();

        let config = UnlConfig::discover(Some(&path)).unwrap();
        assert!(!config.notify_partial_match);
        assert_eq!(config.outline_extensions, vec!["leo", "json"]);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(UnlConfig::discover(Some(&dir.path().join("nope.json"))).is_err());
    }

    #[test]
    fn test_outline_path_matching() {
        let config = LinkConfig::default();
        assert!(config.is_outline_path("c:/prog/leoCvs/leo/doc/leoDocs.leo"));
        assert!(config.is_outline_path("notes.JSON"));
        assert!(!config.is_outline_path("index.html"));
        assert!(!config.is_outline_path("leo"));
    }
}
