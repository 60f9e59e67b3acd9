//! Error types

use thiserror::Error;

/// Errors raised while dispatching or running a command
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no command given; expected one of: {}", crate::dispatch::registered_names().join(", "))]
    NoCommand,

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to render options as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DispatchError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            DispatchError::NoCommand => 2,
            DispatchError::Io(_) | DispatchError::Json(_) => 1,
        }
    }
}
