//! Configuration for TapText
//!
//! Read-only TOML file, default location ~/.config/taptext/config.toml.
//! Every field is optional; command line flags win over the file.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::PhraseList;

/// Errors from reading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Config lists no phrases")]
    NoPhrases,
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Phrases to display, in order
    pub phrases: Option<Vec<String>>,
    /// Directory searched first for the cue
    pub assets: Option<PathBuf>,
    /// Start without sound
    pub mute: Option<bool>,
}

impl Config {
    /// Default config file path (~/.config/taptext/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("taptext").join("config.toml"))
    }

    /// Load config.
    ///
    /// An explicit path must exist. The default path is optional and a
    /// missing file there yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::path() {
                Some(path) if path.is_file() => path,
                _ => return Ok(Self::default()),
            },
        };

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "config loaded");
        Self::from_toml(&contents)
    }

    /// Parse and validate config text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        if config.phrases.as_ref().is_some_and(|p| p.is_empty()) {
            return Err(ConfigError::NoPhrases);
        }
        Ok(config)
    }

    /// Configured phrases, or the built-in ones
    pub fn phrase_list(&self) -> PhraseList {
        match &self.phrases {
            Some(phrases) => PhraseList::new(phrases.iter().cloned()),
            None => PhraseList::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.phrases.is_none());
        assert!(config.assets.is_none());
        assert_eq!(config.phrase_list(), PhraseList::default());
    }

    #[test]
    fn test_from_toml() {
        let config = Config::from_toml(
            r#"
            phrases = ["Hi. ", "Bye."]
            assets = "/opt/taptext"
            mute = true
            "#,
        )
        .unwrap();
        assert_eq!(config.phrase_list(), PhraseList::new(["Hi. ", "Bye."]));
        assert_eq!(config.assets, Some(PathBuf::from("/opt/taptext")));
        assert_eq!(config.mute, Some(true));
    }

    #[test]
    fn test_empty_phrases_rejected() {
        let result = Config::from_toml("phrases = []");
        assert!(matches!(result, Err(ConfigError::NoPhrases)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = Config::from_toml("colour = \"red\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let result = Config::load(Some(Path::new("/nonexistent/taptext.toml")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
