use std::collections::{BTreeMap, BTreeSet};

/// One entry of the symptom catalog.
///
/// A phrase may be empty when the source row had no text; such entries stay
/// in the catalog but never take part in matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symptom {
    pub id: String,
    pub phrase: String,
}

/// One entry of the diagnosis catalog with its symptom profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnosis {
    pub id: String,
    pub name: String,
    /// Symptom ids linked through the association table
    pub symptoms: BTreeSet<String>,
}

/// Immutable reference data, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub symptoms: BTreeMap<String, Symptom>,
    pub diagnoses: BTreeMap<String, Diagnosis>,
}

/// Per-table row counts from one catalog load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub symptoms_loaded: usize,
    pub symptoms_dropped: usize,
    /// Symptoms kept in the catalog whose phrase is empty
    pub empty_phrases: usize,
    pub diagnoses_loaded: usize,
    pub diagnoses_dropped: usize,
    pub associations_loaded: usize,
    pub associations_dropped: usize,
}

impl LoadReport {
    /// Total rows that did not make it into the catalog
    pub fn dropped_total(&self) -> usize {
        self.symptoms_dropped + self.diagnoses_dropped + self.associations_dropped
    }
}
