//! Error types for pipeline operations.

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all pipeline operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An artifact's build reported one or more errors.
    ///
    /// Fatal to the whole run: artifacts after the failing one are never
    /// attempted, and no partial output set is considered valid.
    #[error("bundling `{artifact}` failed with {} error(s)", .errors.len())]
    Build {
        /// Logical name of the failing artifact
        artifact: String,
        /// Full error list reported by the engine
        errors: Vec<String>,
    },

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}
