//! Configuration sources
//!
//! The adapter never interprets configuration; it only turns the caller's
//! source into the serialized payload handed to the engine.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::ConfigError;

/// Where the engine configuration comes from. Exactly one source is used.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfigSource {
    /// No payload; the engine uses its defaults
    #[default]
    Default,
    /// Pre-parsed structured configuration
    Value(Value),
    /// File holding the serialized configuration
    Path(PathBuf),
}

impl ConfigSource {
    /// Serialized payload for the engine
    pub fn into_payload(self) -> Result<Option<String>, ConfigError> {
        match self {
            ConfigSource::Default => Ok(None),
            ConfigSource::Value(value) => Ok(Some(serde_json::to_string(&value)?)),
            ConfigSource::Path(path) => fs::read_to_string(&path)
                .map(Some)
                .map_err(|source| ConfigError::Read { path, source }),
        }
    }
}

impl From<Value> for ConfigSource {
    fn from(value: Value) -> Self {
        ConfigSource::Value(value)
    }
}

impl From<PathBuf> for ConfigSource {
    fn from(path: PathBuf) -> Self {
        ConfigSource::Path(path)
    }
}

impl From<&Path> for ConfigSource {
    fn from(path: &Path) -> Self {
        ConfigSource::Path(path.to_path_buf())
    }
}
