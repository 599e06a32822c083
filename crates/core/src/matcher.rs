//! Symptom-to-condition matching.
//!
//! Scoring is plain textual overlap, with no stemming or fuzzy matching:
//! - every reported symptom and every catalog phrase is lower-cased
//! - each (catalog phrase, reported symptom) pair where either string contains the other adds 1
//! - each reported symptom equal to some catalog phrase adds [`EXACT_MATCH_BONUS`]
//!
//! An exact match is therefore counted by both rules and weighs 3 in total. Existing rankings
//! depend on that weight, so it must not be "fixed".

use crate::constants::{EXACT_MATCH_BONUS, MAX_MATCHES};
use crate::recommendation::RecommendationBundle;
use arogya_catalog::{Catalog, ConditionRecord};
use serde::Serialize;
use std::sync::Arc;

/// A scored catalog entry for one query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MatchResult<'a> {
    pub condition: &'a ConditionRecord,
    pub score: u32,
}

/// Ranks catalog conditions against reported symptoms.
///
/// Cloning is cheap: the catalog and its lower-cased phrases are shared.
#[derive(Clone, Debug)]
pub struct Matcher {
    catalog: Arc<Catalog>,
    /// Lower-cased symptom phrases, parallel to `catalog.all()`.
    phrases: Arc<[Vec<String>]>,
}

impl Matcher {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let phrases: Arc<[Vec<String>]> = catalog
            .all()
            .iter()
            .map(|c| c.symptoms.iter().map(|s| s.to_lowercase()).collect::<Vec<_>>())
            .collect();

        Self { catalog, phrases }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Score every condition and return the ranked top matches.
    ///
    /// Entries scoring zero are dropped. Ties keep catalog order. At most [`MAX_MATCHES`]
    /// results are returned, and an empty query gives an empty result.
    pub fn score_conditions<S: AsRef<str>>(&self, reported: &[S]) -> Vec<MatchResult<'_>> {
        let reported = normalise(reported);

        let mut matches: Vec<MatchResult<'_>> = self
            .catalog
            .all()
            .iter()
            .zip(self.phrases.iter())
            .map(|(condition, phrases)| MatchResult {
                condition,
                score: score(phrases, &reported),
            })
            .filter(|m| m.score > 0)
            .collect();

        // `sort_by` is stable, so equal scores stay in declaration order.
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(MAX_MATCHES);

        if matches.is_empty() {
            tracing::debug!(symptoms = reported.len(), "no condition matched");
        }

        matches
    }

    /// Ranked conditions for the reported symptoms, without scores.
    pub fn detect_conditions<S: AsRef<str>>(&self, reported: &[S]) -> Vec<&ConditionRecord> {
        self.score_conditions(reported)
            .into_iter()
            .map(|m| m.condition)
            .collect()
    }

    /// Consolidated advice derived from the top-ranked condition.
    pub fn recommend<S: AsRef<str>>(&self, reported: &[S]) -> RecommendationBundle {
        RecommendationBundle::from_ranked(&self.detect_conditions(reported))
    }

    /// Case-insensitive search over names and symptom phrases of the core list only.
    ///
    /// Results keep catalog order.
    pub fn search_by_name(&self, query: &str) -> Vec<&ConditionRecord> {
        let query = query.to_lowercase();
        self.catalog
            .core()
            .iter()
            .zip(self.phrases.iter())
            .filter(|(condition, phrases)| {
                condition.name.as_str().to_lowercase().contains(&query)
                    || phrases.iter().any(|p| p.contains(&query))
            })
            .map(|(condition, _)| condition)
            .collect()
    }

    /// Look up a condition by id across the whole catalog.
    pub fn condition_by_id(&self, id: &str) -> Option<&ConditionRecord> {
        self.catalog.get(id)
    }
}

fn normalise<S: AsRef<str>>(reported: &[S]) -> Vec<String> {
    reported.iter().map(|s| s.as_ref().to_lowercase()).collect()
}

/// Score one condition's lower-cased phrases against lower-cased reported symptoms.
fn score(phrases: &[String], reported: &[String]) -> u32 {
    let soft_matches = phrases
        .iter()
        .flat_map(|phrase| reported.iter().map(move |user| (phrase, user)))
        .filter(|(phrase, user)| phrase.contains(user.as_str()) || user.contains(phrase.as_str()))
        .count();

    let exact_matches = reported
        .iter()
        .filter(|user| phrases.iter().any(|phrase| phrase == *user))
        .count();

    // Counts are bounded by catalog size times query length.
    soft_matches as u32 + EXACT_MATCH_BONUS * exact_matches as u32
}
