//! # Arogya Core
//!
//! Core business logic for the Arogya symptom checker.
//!
//! This crate contains pure, synchronous operations over the condition catalog:
//! - ranking catalog conditions against reported symptoms
//! - deriving a recommendation bundle from the top match
//! - name/symptom search and id lookup
//! - keyword spotting over free-text transcripts
//! - [`CheckerService`], the single entry point used by the REST API and the CLI
//!
//! **No API concerns**: HTTP servers and command-line handling belong in `api-rest` and `cli`.
//! Nothing here performs I/O after the catalog has been loaded.

pub mod config;
pub mod constants;
pub mod error;
pub mod matcher;
pub mod recommendation;
pub mod service;
pub mod transcript;

pub use arogya_catalog::{Catalog, CatalogError, ConditionRecord, Severity, Treatment};
pub use config::CoreConfig;
pub use constants::SYMPTOM_OPTIONS;
pub use error::{CheckerError, CheckerResult};
pub use matcher::{MatchResult, Matcher};
pub use recommendation::RecommendationBundle;
pub use service::{CheckerService, SymptomCheck, TranscriptScan};
pub use transcript::{detected_conditions_context, extract_symptom_keywords};
