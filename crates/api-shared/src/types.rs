//! Wire types for the Arogya REST API.
//!
//! Field names are camelCase on the wire to match what existing front-end consumers expect
//! (`possibleConditions`, `homeRemedies`, ...).

use arogya_core::{ConditionRecord, MatchResult, RecommendationBundle, Treatment};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Symptom labels offered to users.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SymptomOptionsRes {
    pub symptoms: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CheckSymptomsReq {
    /// Free-text symptom labels, e.g. `["Fever", "Cough"]`. Any string is accepted.
    #[serde(default)]
    pub symptoms: Vec<String>,
}

/// One ranked condition with its score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MatchSummary {
    pub id: String,
    pub name: String,
    pub score: u32,
    pub severity: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TreatmentRes {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRes {
    pub possible_conditions: Vec<String>,
    /// `mild`, `moderate`, `severe` or `unknown`.
    pub severity: String,
    pub recommendations: Vec<String>,
    pub treatments: Vec<TreatmentRes>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CheckSymptomsRes {
    pub matches: Vec<MatchSummary>,
    pub recommendation: RecommendationRes,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExtractSymptomsReq {
    pub transcript: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExtractSymptomsRes {
    pub keywords: Vec<String>,
    /// `"Detected conditions: ..."`, absent when nothing was detected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Full condition record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConditionRes {
    pub id: String,
    pub name: String,
    pub description: String,
    pub severity: String,
    pub duration: String,
    pub symptoms: Vec<String>,
    pub common_causes: Vec<String>,
    pub treatments: Vec<TreatmentRes>,
    pub home_remedies: Vec<String>,
    pub red_flags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConditionListRes {
    pub conditions: Vec<ConditionRes>,
}

/// Query string for `GET /conditions`.
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConditionSearchQuery {
    /// Case-insensitive text matched against core condition names and symptoms.
    pub q: Option<String>,
}

// ============================================================================
// Conversions from core types
// ============================================================================

impl From<&Treatment> for TreatmentRes {
    fn from(t: &Treatment) -> Self {
        Self {
            name: t.name.clone(),
            dosage: t.dosage.clone(),
            frequency: t.frequency.clone(),
            duration: t.duration.clone(),
            notes: t.notes.clone(),
        }
    }
}

impl From<&ConditionRecord> for ConditionRes {
    fn from(c: &ConditionRecord) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name.to_string(),
            description: c.description.clone(),
            severity: c.severity.to_string(),
            duration: c.duration.clone(),
            symptoms: c.symptoms.clone(),
            common_causes: c.common_causes.clone(),
            treatments: c.treatments.iter().map(TreatmentRes::from).collect(),
            home_remedies: c.home_remedies.clone(),
            red_flags: c.red_flags.clone(),
        }
    }
}

impl From<&MatchResult<'_>> for MatchSummary {
    fn from(m: &MatchResult<'_>) -> Self {
        Self {
            id: m.condition.id.to_string(),
            name: m.condition.name.to_string(),
            score: m.score,
            severity: m.condition.severity.to_string(),
        }
    }
}

impl From<&RecommendationBundle> for RecommendationRes {
    fn from(b: &RecommendationBundle) -> Self {
        Self {
            possible_conditions: b.possible_conditions.clone(),
            severity: b.severity_label().to_string(),
            recommendations: b.recommendations.clone(),
            treatments: b.treatments.iter().map(TreatmentRes::from).collect(),
        }
    }
}

impl ConditionListRes {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a ConditionRecord>) -> Self {
        Self {
            conditions: records.into_iter().map(ConditionRes::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendation_uses_camel_case() {
        let res = RecommendationRes::from(&RecommendationBundle::undetermined());
        let json = serde_json::to_value(&res).expect("serialize");
        assert_eq!(json["severity"], "unknown");
        assert!(json.get("possibleConditions").is_some());
        assert!(json.get("possible_conditions").is_none());
    }

    #[test]
    fn check_request_defaults_to_no_symptoms() {
        let req: CheckSymptomsReq = serde_json::from_str("{}").expect("deserialize");
        assert!(req.symptoms.is_empty());
    }

    #[test]
    fn extract_response_omits_missing_context() {
        let res = ExtractSymptomsRes {
            keywords: vec![],
            context: None,
        };
        let json = serde_json::to_string(&res).expect("serialize");
        assert_eq!(json, r#"{"keywords":[]}"#);
    }
}
