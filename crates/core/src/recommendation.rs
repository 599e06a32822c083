//! Recommendation bundle derived from a ranked match list.

use crate::constants::{
    CONSULT_PROFESSIONAL, HOME_REMEDY_LINES, UNDETERMINED_CONDITION, UNKNOWN_SEVERITY,
};
use arogya_catalog::{ConditionRecord, Severity, Treatment};
use serde::Serialize;

/// Consolidated advice for one symptom check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationBundle {
    /// Names of the ranked matches, or a single "unable to determine" entry.
    pub possible_conditions: Vec<String>,
    /// Severity of the top match; `None` when nothing matched.
    #[serde(serialize_with = "serialize_severity")]
    pub severity: Option<Severity>,
    pub recommendations: Vec<String>,
    /// Treatments of the top match, unfiltered.
    pub treatments: Vec<Treatment>,
}

impl RecommendationBundle {
    /// Build the bundle from conditions in ranked order.
    pub fn from_ranked(ranked: &[&ConditionRecord]) -> Self {
        let Some(top) = ranked.first() else {
            return Self::undetermined();
        };

        let mut recommendations = Vec::with_capacity(HOME_REMEDY_LINES + 3);
        recommendations.push(format!("This appears to be: {}", top.name));
        recommendations.extend(top.home_remedies.iter().take(HOME_REMEDY_LINES).cloned());
        recommendations.push(format!("Severity: {}", top.severity));
        if let Some(flag) = top.red_flags.first() {
            recommendations.push(format!("⚠️ Red flags: {flag}"));
        }

        Self {
            possible_conditions: ranked.iter().map(|c| c.name.to_string()).collect(),
            severity: Some(top.severity),
            recommendations,
            treatments: top.treatments.clone(),
        }
    }

    /// The fallback bundle returned when no condition matched.
    pub fn undetermined() -> Self {
        Self {
            possible_conditions: vec![UNDETERMINED_CONDITION.to_string()],
            severity: None,
            recommendations: vec![CONSULT_PROFESSIONAL.to_string()],
            treatments: Vec::new(),
        }
    }

    /// `"mild"`, `"moderate"`, `"severe"` or `"unknown"`.
    pub fn severity_label(&self) -> &'static str {
        self.severity.map_or(UNKNOWN_SEVERITY, Severity::as_str)
    }

    /// Plain-text rendering suitable as context for a downstream text-completion prompt.
    pub fn summary_text(&self) -> String {
        let mut out = format!(
            "Possible conditions: {}\nSeverity: {}\n",
            self.possible_conditions.join(", "),
            self.severity_label()
        );
        for line in &self.recommendations {
            out.push_str("- ");
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

fn serialize_severity<S>(severity: &Option<Severity>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(severity.map_or(UNKNOWN_SEVERITY, Severity::as_str))
}
