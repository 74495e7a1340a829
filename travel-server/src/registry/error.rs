//! Catalog loading errors.

use std::path::PathBuf;

use crate::domain::DomainError;

/// Errors from loading a traveler catalog file.
#[derive(Debug, thiserror::Error)]
pub enum RegistryLoadError {
    /// Catalog file could not be read
    #[error("failed to read traveler catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog is not valid JSON
    #[error("traveler catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog parsed but an entry failed validation
    #[error("invalid traveler catalog: {0}")]
    Invalid(#[from] DomainError),
}
