//! Constants used throughout the Arogya core crate.
//!
//! Fixed output strings live here so that the REST API, the CLI and tests agree on them.

/// Maximum number of ranked conditions returned by a symptom check.
pub const MAX_MATCHES: usize = 3;

/// Weight added per exact (case-insensitive equal) symptom match, on top of the substring count.
pub const EXACT_MATCH_BONUS: u32 = 2;

/// Placeholder condition name used when nothing matches.
pub const UNDETERMINED_CONDITION: &str = "Unable to determine - Consult a doctor";

/// Severity label used when nothing matches.
pub const UNKNOWN_SEVERITY: &str = "unknown";

/// Sole recommendation line used when nothing matches.
pub const CONSULT_PROFESSIONAL: &str = "Visit a healthcare professional for proper diagnosis";

/// Number of home remedies copied from the top match into the recommendation.
pub const HOME_REMEDY_LINES: usize = 2;

/// Number of condition names included in a transcript context line.
pub const TRANSCRIPT_CONTEXT_CONDITIONS: usize = 2;

/// Default REST listen address when `AROGYA_REST_ADDR` is not set.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Environment variable that points at an alternative catalog directory.
pub const CATALOG_DIR_ENV: &str = "AROGYA_CATALOG_DIR";

/// Environment variable for the REST listen address.
pub const REST_ADDR_ENV: &str = "AROGYA_REST_ADDR";

/// Symptom labels offered to users by the symptom checker.
///
/// The matcher does not restrict input to this list.
pub const SYMPTOM_OPTIONS: [&str; 20] = [
    "Fever",
    "Cough",
    "Sore Throat",
    "Headache",
    "Body Ache",
    "Fatigue",
    "Nausea",
    "Vomiting",
    "Diarrhea",
    "Rash",
    "Itching",
    "Chest Pain",
    "Shortness of Breath",
    "Dizziness",
    "Loss of Appetite",
    "Chills",
    "Sweating",
    "Congestion",
    "Sneezing",
    "Watery Eyes",
];

/// Keywords looked for in free-text transcripts, in reporting order.
pub const TRANSCRIPT_KEYWORDS: [&str; 22] = [
    "pain",
    "ache",
    "fever",
    "cough",
    "rash",
    "itchy",
    "tired",
    "fatigue",
    "nausea",
    "vomit",
    "diarrhea",
    "constipation",
    "headache",
    "sore",
    "burning",
    "swelling",
    "weakness",
    "dizzy",
    "breathe",
    "sneeze",
    "discharge",
    "bleeding",
];
