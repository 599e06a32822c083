use arogya_core::config::catalog_dir_from_env_value;
use arogya_core::constants::{CATALOG_DIR_ENV, DEFAULT_REST_ADDR, REST_ADDR_ENV};
use arogya_core::{CheckerService, CoreConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the Arogya application
///
/// Loads the condition catalog once, failing fast if it is malformed, then serves the REST API
/// on port 3000 (configurable via AROGYA_REST_ADDR).
///
/// # Environment Variables
/// - `AROGYA_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `AROGYA_CATALOG_DIR`: Directory holding `core.yaml` and `extended.yaml` (default: embedded)
/// - `RUST_LOG`: tracing filter
///
/// Variables may also come from a `.env` file in the working directory.
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, catalog loading or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("arogya_run=info".parse()?)
                .add_directive("arogya_catalog=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var(REST_ADDR_ENV).unwrap_or_else(|_| DEFAULT_REST_ADDR.into());
    let catalog_dir = catalog_dir_from_env_value(std::env::var(CATALOG_DIR_ENV).ok());

    let cfg = CoreConfig::new(catalog_dir)?;
    if let Some(dir) = cfg.catalog_dir() {
        tracing::info!("++ Using catalog override at {}", dir.display());
    }
    let catalog = cfg.load_catalog()?;

    tracing::info!(
        "++ Starting Arogya REST on {} with {} conditions",
        rest_addr,
        catalog.len()
    );

    api_rest::serve(&rest_addr, CheckerService::from_catalog(catalog)).await
}
