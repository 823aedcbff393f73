//! Error types for agentsmap-core

use std::path::PathBuf;

/// Result type for agentsmap-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Structural failures. Content problems are reported as
/// [`Diagnostic`](crate::Diagnostic) values instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No manifest file in the given directory
    #[error("No {map_file} found in {}. Run `agentsmap init` to create one.", .dir.display())]
    MapNotFound { dir: PathBuf, map_file: String },

    /// Priority text outside the closed set
    #[error("Invalid priority: {value} (expected critical, high, normal or low)")]
    InvalidPriority { value: String },

    /// Filesystem error from agentsmap-fs
    #[error(transparent)]
    Fs(#[from] agentsmap_fs::Error),
}
