//! # API Shared
//!
//! Shared request/response definitions for the Arogya APIs.
//!
//! Contains:
//! - Wire types (`types` module) with serde and OpenAPI schemas
//! - Conversions from core domain values into those wire types
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and by the CLI's JSON output.

pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::*;
