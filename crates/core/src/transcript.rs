//! Keyword spotting over free-text transcripts.
//!
//! Voice and chat consultations arrive as prose rather than picked labels. A fixed keyword list
//! turns that prose into symptom strings the matcher understands, and the top matches become a
//! one-line context for a downstream text-completion call.

use crate::constants::{TRANSCRIPT_CONTEXT_CONDITIONS, TRANSCRIPT_KEYWORDS};
use crate::Matcher;

/// Keywords present in `transcript`, case-insensitively, in keyword-list order.
pub fn extract_symptom_keywords(transcript: &str) -> Vec<&'static str> {
    let lowered = transcript.to_lowercase();
    TRANSCRIPT_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| lowered.contains(keyword))
        .collect()
}

/// `"Detected conditions: A, B"` for the top matches of the transcript's keywords.
///
/// Returns `None` when no keyword is present or nothing matches.
pub fn detected_conditions_context(transcript: &str, matcher: &Matcher) -> Option<String> {
    let keywords = extract_symptom_keywords(transcript);
    if keywords.is_empty() {
        return None;
    }

    let names: Vec<&str> = matcher
        .detect_conditions(&keywords)
        .into_iter()
        .take(TRANSCRIPT_CONTEXT_CONDITIONS)
        .map(|c| c.name.as_str())
        .collect();

    if names.is_empty() {
        return None;
    }

    Some(format!("Detected conditions: {}", names.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use arogya_catalog::Catalog;
    use std::sync::Arc;

    fn embedded() -> Matcher {
        Matcher::new(Arc::new(Catalog::embedded().expect("embedded catalog")))
    }

    #[test]
    fn extracts_keywords_in_list_order() {
        let keywords = extract_symptom_keywords("I feel TIRED, have a Headache and a bad cough");
        // "headache" also contains "ache"
        assert_eq!(keywords, vec!["ache", "cough", "tired", "headache"]);
    }

    #[test]
    fn no_keywords_in_small_talk() {
        assert!(extract_symptom_keywords("Hello doctor, how are you?").is_empty());
        assert_eq!(detected_conditions_context("Hello doctor", &embedded()), None);
    }

    #[test]
    fn context_names_at_most_two_conditions() {
        let context = detected_conditions_context("I have a fever and a sore throat", &embedded())
            .expect("context");
        let names = context
            .strip_prefix("Detected conditions: ")
            .expect("prefix");
        assert_eq!(names.split(", ").count(), TRANSCRIPT_CONTEXT_CONDITIONS);
    }

    #[test]
    fn keyword_without_match_gives_no_context() {
        let catalog = Catalog::parse(
            "- id: hiccups\n  name: Hiccups\n  severity: mild\n  symptoms: [hiccups]\n",
            "[]",
        )
        .expect("catalog");
        let matcher = Matcher::new(Arc::new(catalog));
        assert_eq!(detected_conditions_context("my back is in pain", &matcher), None);
    }
}
