//! Error types for agentsmap-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from agentsmap-core
    #[error(transparent)]
    Core(#[from] agentsmap_core::Error),

    /// Error from agentsmap-fs
    #[error(transparent)]
    Fs(#[from] agentsmap_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Interactive prompt error
    #[error("Interactive prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },

    /// The manifest has error diagnostics
    #[error("Validation failed with {errors} error(s)")]
    ValidationFailed { errors: usize },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
