//! Condition records and their YAML wire model.
//!
//! Responsibilities:
//! - Define the public, domain-level [`ConditionRecord`] used by the matcher
//! - Define a strict wire model for the bundled YAML lists
//! - Translate wire records into domain records, validating ids, names and severities
//!
//! Notes:
//! - Records are immutable reference data; nothing here writes YAML back out
//! - Symptom phrases are stored as written; lower-casing happens in the matcher

use crate::{CatalogError, CatalogResult};
use arogya_types::{ConditionId, NonEmptyText};
use serde::{Deserialize, Serialize};

// ============================================================================
// Public domain-level types
// ============================================================================

/// How serious a condition usually is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    /// Wire/display form, e.g. `"moderate"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }

    /// Parse from the wire form. Matching is exact; the catalog is lower-case.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "mild" => Some(Severity::Mild),
            "moderate" => Some(Severity::Moderate),
            "severe" => Some(Severity::Severe),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A suggested medicine or therapy for a condition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Treatment {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One catalog entry describing a condition and its guidance text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionRecord {
    pub id: ConditionId,
    pub name: NonEmptyText,
    /// Ordered symptom phrases; this is what the matcher scores against.
    pub symptoms: Vec<String>,
    /// Informational only.
    pub common_causes: Vec<String>,
    pub treatments: Vec<Treatment>,
    pub home_remedies: Vec<String>,
    pub severity: Severity,
    pub red_flags: Vec<String>,
    /// Expected course, e.g. "5-10 days".
    pub duration: String,
    pub description: String,
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse a YAML list of condition records.
///
/// `source` names the list (e.g. `"core"`) and is only used in error messages.
///
/// # Errors
///
/// Returns [`CatalogError`] if:
/// - the text is not valid YAML,
/// - a record does not match the wire schema: unknown keys, invalid id slugs and blank names
///   are reported with their path,
/// - a severity is unknown.
pub fn parse_conditions(yaml_text: &str, source: &str) -> CatalogResult<Vec<ConditionRecord>> {
    let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

    let wire = match serde_path_to_error::deserialize::<_, Vec<ConditionWire>>(deserializer) {
        Ok(parsed) => parsed,
        Err(err) => {
            let path = err.path().to_string();
            let source_err = err.into_inner();
            if path.is_empty() || path == "." {
                return Err(CatalogError::InvalidYaml(source_err));
            }
            return Err(CatalogError::Schema(format!(
                "condition schema mismatch in {source} at {path}: {source_err}"
            )));
        }
    };

    wire.into_iter().map(wire_to_domain).collect()
}

// ============================================================================
// Wire types (internal)
// ============================================================================

/// Wire representation of a condition record in the bundled YAML.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct ConditionWire {
    id: ConditionId,
    name: NonEmptyText,
    #[serde(default)]
    description: String,
    severity: String,
    #[serde(default)]
    duration: String,
    #[serde(default)]
    symptoms: Vec<String>,
    #[serde(default)]
    common_causes: Vec<String>,
    #[serde(default)]
    treatments: Vec<Treatment>,
    #[serde(default)]
    home_remedies: Vec<String>,
    #[serde(default)]
    red_flags: Vec<String>,
}

fn wire_to_domain(wire: ConditionWire) -> CatalogResult<ConditionRecord> {
    let severity =
        Severity::from_wire(&wire.severity).ok_or_else(|| CatalogError::InvalidRecord {
            id: wire.id.to_string(),
            reason: format!("unknown severity '{}'", wire.severity),
        })?;

    Ok(ConditionRecord {
        id: wire.id,
        name: wire.name,
        symptoms: wire.symptoms,
        common_causes: wire.common_causes,
        treatments: wire.treatments,
        home_remedies: wire.home_remedies,
        severity,
        red_flags: wire.red_flags,
        duration: wire.duration,
        description: wire.description,
    })
}
