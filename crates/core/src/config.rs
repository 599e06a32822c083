//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Request handlers never read environment variables; binaries read
//! them in `main` and build a [`CoreConfig`].

use crate::{CheckerError, CheckerResult};
use arogya_catalog::{Catalog, CORE_FILENAME, EXTENDED_FILENAME};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    catalog_dir: Option<PathBuf>,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// When `catalog_dir` is `None` the catalog bundled into the binary is used.
    ///
    /// # Errors
    ///
    /// Returns [`CheckerError::InvalidInput`] if the override directory does not exist or does
    /// not contain both catalog files.
    pub fn new(catalog_dir: Option<PathBuf>) -> CheckerResult<Self> {
        if let Some(dir) = &catalog_dir {
            validate_catalog_dir(dir)?;
        }

        Ok(Self { catalog_dir })
    }

    pub fn catalog_dir(&self) -> Option<&Path> {
        self.catalog_dir.as_deref()
    }

    /// Load and validate the configured catalog.
    ///
    /// Intended to run once at startup; a malformed catalog is a configuration error and the
    /// caller should stop.
    pub fn load_catalog(&self) -> CheckerResult<Catalog> {
        let catalog = match &self.catalog_dir {
            Some(dir) => Catalog::load_dir(dir)?,
            None => Catalog::embedded()?,
        };
        Ok(catalog)
    }
}

/// Check that `dir` looks like a catalog directory.
fn validate_catalog_dir(dir: &Path) -> CheckerResult<()> {
    if !dir.is_dir() {
        return Err(CheckerError::InvalidInput(format!(
            "catalog directory does not exist: {}",
            dir.display()
        )));
    }

    for name in [CORE_FILENAME, EXTENDED_FILENAME] {
        if !dir.join(name).is_file() {
            return Err(CheckerError::InvalidInput(format!(
                "catalog directory {} is missing {name}",
                dir.display()
            )));
        }
    }

    Ok(())
}

/// Parse the catalog directory override from an optional environment value.
///
/// `None`, empty or whitespace-only values mean "use the embedded catalog".
pub fn catalog_dir_from_env_value(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
