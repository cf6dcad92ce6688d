//! Error types for msgsift

/// Result type alias using msgsift's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for msgsift operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Model artifact parsing or validation errors
    #[error("artifact error: {0}")]
    Artifact(String),

    /// Model inference errors
    #[error("model error: {0}")]
    Model(String),

    /// Detector construction errors
    #[error("detector error: {0}")]
    Detector(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new artifact error
    pub fn artifact(msg: impl Into<String>) -> Self {
        Self::Artifact(msg.into())
    }

    /// Create a new model error
    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }

    /// Create a new detector error
    pub fn detector(msg: impl Into<String>) -> Self {
        Self::Detector(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
