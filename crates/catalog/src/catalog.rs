//! Composition and validation of the condition catalog.
//!
//! The catalog is built from two lists, "core" then "extended", concatenated once into a single
//! sequence. Keeping one sequence means ranking ties fall back to declaration order across both
//! lists. Name search only covers the core prefix.

use crate::condition::{parse_conditions, ConditionRecord};
use crate::{CatalogError, CatalogResult};
use std::collections::HashSet;
use std::path::Path;

/// Filename of the core list inside a catalog directory.
pub const CORE_FILENAME: &str = "core.yaml";

/// Filename of the extended list inside a catalog directory.
pub const EXTENDED_FILENAME: &str = "extended.yaml";

const EMBEDDED_CORE: &str = include_str!("../data/core.yaml");
const EMBEDDED_EXTENDED: &str = include_str!("../data/extended.yaml");

/// Read-only set of condition records.
#[derive(Clone, Debug)]
pub struct Catalog {
    conditions: Vec<ConditionRecord>,
    core_len: usize,
}

impl Catalog {
    /// Concatenate the core and extended lists and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if:
    /// - both lists are empty,
    /// - an id appears more than once across the two lists,
    /// - a record has no symptom phrases or a blank one.
    pub fn compose(
        core: Vec<ConditionRecord>,
        extended: Vec<ConditionRecord>,
    ) -> CatalogResult<Self> {
        let core_len = core.len();
        let mut conditions = core;
        conditions.extend(extended);

        validate(&conditions)?;

        Ok(Self {
            conditions,
            core_len,
        })
    }

    /// Parse both YAML lists and compose them.
    pub fn parse(core_yaml: &str, extended_yaml: &str) -> CatalogResult<Self> {
        let core = parse_conditions(core_yaml, "core")?;
        let extended = parse_conditions(extended_yaml, "extended")?;
        Self::compose(core, extended)
    }

    /// The catalog bundled into the binary.
    pub fn embedded() -> CatalogResult<Self> {
        let catalog = Self::parse(EMBEDDED_CORE, EMBEDDED_EXTENDED)?;
        tracing::info!(
            core = catalog.core().len(),
            extended = catalog.extended().len(),
            "loaded embedded condition catalog"
        );
        Ok(catalog)
    }

    /// Load `core.yaml` and `extended.yaml` from `dir`.
    pub fn load_dir(dir: &Path) -> CatalogResult<Self> {
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|source| CatalogError::Io { path, source })
        };

        let catalog = Self::parse(&read(CORE_FILENAME)?, &read(EXTENDED_FILENAME)?)?;
        tracing::info!(
            dir = %dir.display(),
            core = catalog.core().len(),
            extended = catalog.extended().len(),
            "loaded condition catalog"
        );
        Ok(catalog)
    }

    /// Every record, core first, in declaration order.
    pub fn all(&self) -> &[ConditionRecord] {
        &self.conditions
    }

    pub fn core(&self) -> &[ConditionRecord] {
        &self.conditions[..self.core_len]
    }

    pub fn extended(&self) -> &[ConditionRecord] {
        &self.conditions[self.core_len..]
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Look up a record by id across both lists.
    pub fn get(&self, id: &str) -> Option<&ConditionRecord> {
        self.conditions.iter().find(|c| c.id.as_str() == id)
    }
}

fn validate(conditions: &[ConditionRecord]) -> CatalogResult<()> {
    if conditions.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::with_capacity(conditions.len());
    for condition in conditions {
        if !seen.insert(condition.id.as_str()) {
            return Err(CatalogError::DuplicateId(condition.id.to_string()));
        }

        if condition.symptoms.is_empty() {
            return Err(CatalogError::InvalidRecord {
                id: condition.id.to_string(),
                reason: "at least one symptom is required".into(),
            });
        }

        // A blank phrase is a substring of every input and would match everything.
        if condition.symptoms.iter().any(|s| s.trim().is_empty()) {
            return Err(CatalogError::InvalidRecord {
                id: condition.id.to_string(),
                reason: "symptom phrases cannot be blank".into(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_yaml(id: &str, symptoms: &str) -> String {
        format!("- id: {id}\n  name: {id}\n  severity: mild\n  symptoms: {symptoms}\n")
    }

    #[test]
    fn embedded_catalog_loads() {
        let catalog = Catalog::embedded().expect("embedded catalog");
        assert_eq!(catalog.core().len(), 17);
        assert_eq!(catalog.extended().len(), 11);
        assert_eq!(catalog.len(), 28);
        assert_eq!(catalog.all()[0].id.as_str(), "common_cold");
        assert_eq!(catalog.extended()[0].id.as_str(), "pneumonia");
    }

    #[test]
    fn embedded_catalog_records_are_fully_populated() {
        let catalog = Catalog::embedded().expect("embedded catalog");
        for condition in catalog.all() {
            assert!(!condition.home_remedies.is_empty(), "{}", condition.id);
            assert!(!condition.red_flags.is_empty(), "{}", condition.id);
            assert!(!condition.treatments.is_empty(), "{}", condition.id);
            assert!(!condition.description.is_empty(), "{}", condition.id);
        }
    }

    #[test]
    fn compose_keeps_core_before_extended() {
        let catalog = Catalog::parse(
            &record_yaml("alpha", "[a]"),
            &format!("{}{}", record_yaml("beta", "[b]"), record_yaml("gamma", "[c]")),
        )
        .expect("compose");

        let ids: Vec<_> = catalog.all().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "beta", "gamma"]);
        assert_eq!(catalog.core().len(), 1);
        assert_eq!(catalog.extended().len(), 2);
    }

    #[test]
    fn get_finds_extended_records() {
        let catalog = Catalog::embedded().expect("embedded catalog");
        let gerd = catalog.get("gerd").expect("gerd is in the extended list");
        assert_eq!(gerd.name.as_str(), "GERD / Acid Reflux");
        assert!(catalog.get("unknown_condition").is_none());
    }

    #[test]
    fn rejects_empty_catalog() {
        let err = Catalog::parse("[]", "[]").expect_err("should reject empty");
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn rejects_duplicate_ids_across_lists() {
        let err = Catalog::parse(&record_yaml("flu", "[fever]"), &record_yaml("flu", "[cough]"))
            .expect_err("should reject duplicate");
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "flu"));
    }

    #[test]
    fn rejects_record_without_symptoms() {
        let err = Catalog::parse(&record_yaml("flu", "[]"), "[]").expect_err("should reject");
        assert!(matches!(err, CatalogError::InvalidRecord { id, .. } if id == "flu"));
    }

    #[test]
    fn rejects_blank_symptom_phrase() {
        let err = Catalog::parse(&record_yaml("flu", "[fever, ' ']"), "[]")
            .expect_err("should reject");
        assert!(matches!(
            err,
            CatalogError::InvalidRecord { reason, .. } if reason.contains("blank")
        ));
    }

    #[test]
    fn load_dir_reads_both_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(CORE_FILENAME), record_yaml("alpha", "[a]"))
            .expect("write core");
        std::fs::write(dir.path().join(EXTENDED_FILENAME), "[]").expect("write extended");

        let catalog = Catalog::load_dir(dir.path()).expect("load dir");
        assert_eq!(catalog.len(), 1);
        assert!(catalog.extended().is_empty());
    }

    #[test]
    fn load_dir_reports_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = Catalog::load_dir(dir.path()).expect_err("should fail");
        assert!(matches!(err, CatalogError::Io { path, .. } if path.ends_with(CORE_FILENAME)));
    }
}
