//! Condition catalog for the Arogya symptom checker.
//!
//! This crate owns the static reference data that the matcher scores against:
//! - domain-level [`ConditionRecord`] values with validated ids and names
//! - a strict YAML wire model for the two bundled lists (core and extended)
//! - composition of both lists into one read-only [`Catalog`], validated once at load time
//!
//! The catalog is never mutated after it is built. Callers share it behind an `Arc`.

pub mod catalog;
pub mod condition;

pub use catalog::{Catalog, CORE_FILENAME, EXTENDED_FILENAME};
pub use condition::{ConditionRecord, Severity, Treatment};

/// Errors returned while loading or validating the condition catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Schema(String),

    #[error("failed to read catalog file {path}: {source}", path = path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog contains no conditions")]
    Empty,

    #[error("duplicate condition id: {0}")]
    DuplicateId(String),

    #[error("invalid condition '{id}': {reason}")]
    InvalidRecord { id: String, reason: String },
}

/// Type alias for Results that can fail with a [`CatalogError`].
pub type CatalogResult<T> = Result<T, CatalogError>;
