//! Error types for policy loading.
//!
//! The computation itself cannot fail; only reading a policy file can.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating an [`crate::EstimatorPolicy`].
#[derive(Error, Debug)]
pub enum PolicyError {
    /// The policy file could not be read.
    #[error("failed to read policy file {}: {source}", path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The policy file is not valid TOML or has wrongly typed keys.
    #[error("failed to parse policy: {0}")]
    Parse(#[from] toml::de::Error),

    /// The policy parsed but its values make no sense.
    #[error("invalid policy: {0}")]
    Invalid(String),
}

/// Result alias for policy operations.
pub type Result<T> = std::result::Result<T, PolicyError>;
