//! Entry point shared by the REST API and the CLI.
//!
//! Both surfaces need the ranked matches *and* the recommendation built from them. Running the
//! match once here keeps the two in step.

use crate::matcher::{MatchResult, Matcher};
use crate::recommendation::RecommendationBundle;
use crate::transcript::{detected_conditions_context, extract_symptom_keywords};
use arogya_catalog::{Catalog, ConditionRecord};
use std::sync::Arc;

/// Result of one symptom check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymptomCheck<'a> {
    /// At most three scored conditions, best first.
    pub matches: Vec<MatchResult<'a>>,
    pub recommendation: RecommendationBundle,
}

/// Keywords spotted in a transcript and the conditions they suggest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptScan {
    pub keywords: Vec<&'static str>,
    /// `"Detected conditions: ..."`, or `None` when nothing was detected.
    pub context: Option<String>,
}

/// Service for symptom checks over a loaded catalog.
#[derive(Clone, Debug)]
pub struct CheckerService {
    matcher: Matcher,
}

impl CheckerService {
    pub fn new(matcher: Matcher) -> Self {
        Self { matcher }
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        Self::new(Matcher::new(Arc::new(catalog)))
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn catalog(&self) -> &Catalog {
        self.matcher.catalog()
    }

    /// Rank conditions for `reported` and derive the recommendation from the same ranking.
    ///
    /// The recommendation equals [`Matcher::recommend`] for the same input.
    pub fn check<S: AsRef<str>>(&self, reported: &[S]) -> SymptomCheck<'_> {
        let matches = self.matcher.score_conditions(reported);
        let ranked: Vec<&ConditionRecord> = matches.iter().map(|m| m.condition).collect();
        let recommendation = RecommendationBundle::from_ranked(&ranked);

        tracing::debug!(
            symptoms = reported.len(),
            matches = matches.len(),
            "symptom check"
        );

        SymptomCheck {
            matches,
            recommendation,
        }
    }

    /// Core conditions whose name or symptoms contain `query`, case-insensitively.
    pub fn search(&self, query: &str) -> Vec<&ConditionRecord> {
        self.matcher.search_by_name(query)
    }

    pub fn condition(&self, id: &str) -> Option<&ConditionRecord> {
        self.matcher.condition_by_id(id)
    }

    pub fn scan_transcript(&self, transcript: &str) -> TranscriptScan {
        TranscriptScan {
            keywords: extract_symptom_keywords(transcript),
            context: detected_conditions_context(transcript, &self.matcher),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::UNDETERMINED_CONDITION;

    fn service() -> CheckerService {
        CheckerService::from_catalog(Catalog::embedded().expect("embedded catalog"))
    }

    #[test]
    fn check_agrees_with_matcher() {
        let service = service();
        let queries: [&[&str]; 4] = [
            &["Sneezing", "Sore Throat", "Headache"],
            &["Fever"],
            &["wheezing", "chest pain"],
            &["Xyzzyplasm"],
        ];

        for query in queries {
            let check = service.check(query);
            assert_eq!(check.recommendation, service.matcher().recommend(query));
            assert_eq!(check.matches, service.matcher().score_conditions(query));
        }
    }

    #[test]
    fn check_ranks_common_cold_first() {
        let service = service();
        let check = service.check(&["Sneezing", "Sore Throat", "Headache"]);
        assert_eq!(check.matches[0].condition.id.as_str(), "common_cold");
        assert_eq!(check.matches[0].score, 9);
        assert_eq!(
            check.recommendation.possible_conditions[0],
            check.matches[0].condition.name.as_str()
        );
    }

    #[test]
    fn empty_check_is_undetermined() {
        let none: [&str; 0] = [];
        let service = service();
        let check = service.check(&none);
        assert!(check.matches.is_empty());
        assert_eq!(
            check.recommendation.possible_conditions,
            vec![UNDETERMINED_CONDITION]
        );
    }

    #[test]
    fn scan_transcript_reports_keywords_and_context() {
        let scan = service().scan_transcript("Bad cough and a fever since Monday");
        assert_eq!(scan.keywords, vec!["fever", "cough"]);
        assert!(scan
            .context
            .as_deref()
            .is_some_and(|c| c.starts_with("Detected conditions: ")));

        let quiet = service().scan_transcript("all good today");
        assert!(quiet.keywords.is_empty());
        assert_eq!(quiet.context, None);
    }

    #[test]
    fn search_and_lookup_delegate() {
        let service = service();
        assert!(service.search("pneumonia").is_empty());
        assert!(service.condition("pneumonia").is_some());
    }
}
