//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! Useful for development when you want the REST server with Swagger UI and nothing else. The
//! workspace's main `arogya-run` binary additionally loads a `.env` file.

use arogya_core::config::catalog_dir_from_env_value;
use arogya_core::constants::{CATALOG_DIR_ENV, DEFAULT_REST_ADDR, REST_ADDR_ENV};
use arogya_core::{CheckerService, CoreConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the Arogya REST API server
///
/// # Environment Variables
/// - `AROGYA_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `AROGYA_CATALOG_DIR`: Directory holding `core.yaml` and `extended.yaml` (default: embedded)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the catalog override is invalid or the catalog fails validation,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("arogya_catalog=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var(REST_ADDR_ENV).unwrap_or_else(|_| DEFAULT_REST_ADDR.into());

    let cfg = CoreConfig::new(catalog_dir_from_env_value(std::env::var(CATALOG_DIR_ENV).ok()))?;
    let catalog = cfg.load_catalog()?;
    tracing::info!("-- Catalog ready with {} conditions", catalog.len());

    api_rest::serve(&addr, CheckerService::from_catalog(catalog)).await
}
