//! Error taxonomy. Validation failures are always surfaced to the caller.
//! Unknown constraints fall back to the default weight, so there is no
//! "not found" variant.

mod validation_error;

pub use validation_error::ValidationError;

/// Result alias used throughout the workspace.
pub type YsrnResult<T> = Result<T, YsrnError>;

/// Top-level error for every YSRN operation.
#[derive(Debug, thiserror::Error)]
pub enum YsrnError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A collaborator behind one of the ports (encoder, persistence, event bus) failed.
    #[error("{port} port failed: {reason}")]
    PortError { port: String, reason: String },

    #[error("concurrency error: {0}")]
    ConcurrencyError(String),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl YsrnError {
    /// Build a port failure.
    pub fn port(port: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PortError {
            port: port.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error is a caller-input validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The inner validation error, if any.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(v) => Some(v),
            _ => None,
        }
    }
}
