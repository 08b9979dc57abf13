//! Adapter errors
//!
//! Decode-time errors are local to one `step` call and leave the episode
//! intact. Engine-time errors leave the adapter in an unknown state; the
//! caller should discard it and build a new one.

use std::path::PathBuf;

use rg_core::EngineError;
use thiserror::Error;

/// Errors raised while turning a configuration source into an engine payload
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not serialize config: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Environment adapter errors
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("engine rejected its configuration")]
    EngineInit(#[source] EngineError),

    #[error("engine failed")]
    EngineFatal(#[source] EngineError),

    #[error("unknown action index {index}, expected 0..{count}")]
    UnknownActionIndex { index: i64, count: usize },

    #[error("invalid action type: {0}")]
    InvalidActionType(String),

    #[error("engine status is missing the '{0}' field")]
    MissingStatusField(&'static str),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl EnvError {
    /// Whether the episode can continue after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EnvError::UnknownActionIndex { .. } | EnvError::InvalidActionType(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, EnvError>;
