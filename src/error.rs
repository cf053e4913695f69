use thiserror::Error;
use tonic::{Code, Status};

/// Error types for plugin operations.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Configuration error occurred during startup.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal plugin error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Failed to encode a JSON payload.
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// gRPC transport error.
    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
}

impl From<PluginError> for Status {
    fn from(err: PluginError) -> Self {
        match err {
            PluginError::Configuration(msg) => Status::new(Code::InvalidArgument, msg),
            PluginError::Internal(msg) => Status::new(Code::Internal, msg),
            PluginError::Encode(err) => Status::new(Code::Internal, err.to_string()),
            PluginError::Io(err) => Status::new(Code::Internal, err.to_string()),
            PluginError::Transport(err) => Status::new(Code::Unavailable, err.to_string()),
        }
    }
}

/// Result type for plugin operations.
pub type Result<T> = std::result::Result<T, PluginError>;
