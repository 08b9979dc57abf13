//! Engine-side errors

use thiserror::Error;

/// Failures reported by an [`Engine`](crate::Engine)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),

    #[error("engine failure: {0}")]
    Fatal(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
