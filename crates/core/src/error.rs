//! Error types for the symptom checker core.

use arogya_catalog::CatalogError;

/// Errors returned by core configuration and catalog loading.
///
/// Matching itself never fails: unknown or empty symptoms give an empty ranking.
#[derive(Debug, thiserror::Error)]
pub enum CheckerError {
    /// A caller-supplied value was rejected, e.g. a catalog directory that does not exist.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The catalog could not be read or failed validation.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Type alias for Results that can fail with a [`CheckerError`].
pub type CheckerResult<T> = std::result::Result<T, CheckerError>;
