mod types;

pub use types::*;

use crate::error::{Result, SymcheckError};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const SYMPTOM_TABLE: &str = "sym_t.csv";
pub const DIAGNOSIS_TABLE: &str = "dia_t.csv";
pub const ASSOCIATION_TABLE: &str = "diffsydiw.csv";

#[derive(Debug, Deserialize)]
struct SymptomRow {
    syd: String,
    symptom: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DiagnosisRow {
    did: String,
    diagnose: String,
}

/// Association rows may carry extra columns (historically a weight); only
/// the two keys matter, the relation is unweighted.
#[derive(Debug, Deserialize)]
struct AssociationRow {
    syd: String,
    did: String,
}

/// Load the three reference tables from `dir` and join them into a catalog.
///
/// Malformed content is tolerated where possible: duplicate ids, duplicate
/// phrases and associations with unknown keys are dropped and counted in the
/// report. A missing or unreadable table is an error.
pub fn load(dir: &Path) -> Result<(Catalog, LoadReport)> {
    let mut report = LoadReport::default();

    let symptoms = load_symptoms(&table_path(dir, SYMPTOM_TABLE)?, &mut report)?;
    let diagnoses = load_diagnoses(&table_path(dir, DIAGNOSIS_TABLE)?, &mut report)?;

    let mut catalog = Catalog {
        symptoms,
        diagnoses,
    };
    load_associations(&table_path(dir, ASSOCIATION_TABLE)?, &mut catalog, &mut report)?;

    debug!(
        symptoms = report.symptoms_loaded,
        diagnoses = report.diagnoses_loaded,
        associations = report.associations_loaded,
        dropped = report.dropped_total(),
        "reference data loaded"
    );
    Ok((catalog, report))
}

fn table_path(dir: &Path, name: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if !path.is_file() {
        return Err(SymcheckError::TableNotFound(path.display().to_string()));
    }
    Ok(path)
}

fn reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| table_error(path, e))
}

fn table_error(path: &Path, err: csv::Error) -> SymcheckError {
    SymcheckError::Data(format!("{}: {}", path.display(), err))
}

fn load_symptoms(path: &Path, report: &mut LoadReport) -> Result<BTreeMap<String, Symptom>> {
    let mut symptoms = BTreeMap::new();
    let mut seen_phrases: BTreeSet<String> = BTreeSet::new();

    for row in reader(path)?.deserialize::<SymptomRow>() {
        let row = row.map_err(|e| table_error(path, e))?;
        let phrase = row.symptom.unwrap_or_default();

        if symptoms.contains_key(&row.syd) {
            warn!(id = %row.syd, "duplicate symptom id, row dropped");
            report.symptoms_dropped += 1;
            continue;
        }
        // Matching is case-normalized, so phrases that differ only in case
        // would be indistinguishable to the extractor.
        if !phrase.is_empty() && !seen_phrases.insert(phrase.to_lowercase()) {
            warn!(id = %row.syd, phrase = %phrase, "duplicate symptom phrase, row dropped");
            report.symptoms_dropped += 1;
            continue;
        }
        if phrase.is_empty() {
            report.empty_phrases += 1;
        }
        symptoms.insert(row.syd.clone(), Symptom { id: row.syd, phrase });
    }

    report.symptoms_loaded = symptoms.len();
    Ok(symptoms)
}

fn load_diagnoses(path: &Path, report: &mut LoadReport) -> Result<BTreeMap<String, Diagnosis>> {
    let mut diagnoses = BTreeMap::new();

    for row in reader(path)?.deserialize::<DiagnosisRow>() {
        let row = row.map_err(|e| table_error(path, e))?;

        if diagnoses.contains_key(&row.did) {
            warn!(id = %row.did, "duplicate diagnosis id, row dropped");
            report.diagnoses_dropped += 1;
            continue;
        }
        diagnoses.insert(
            row.did.clone(),
            Diagnosis {
                id: row.did,
                name: row.diagnose,
                symptoms: BTreeSet::new(),
            },
        );
    }

    report.diagnoses_loaded = diagnoses.len();
    Ok(diagnoses)
}

fn load_associations(path: &Path, catalog: &mut Catalog, report: &mut LoadReport) -> Result<()> {
    for row in reader(path)?.deserialize::<AssociationRow>() {
        let row = row.map_err(|e| table_error(path, e))?;

        if !catalog.symptoms.contains_key(&row.syd) {
            warn!(symptom = %row.syd, diagnosis = %row.did, "association references unknown symptom, row dropped");
            report.associations_dropped += 1;
            continue;
        }
        match catalog.diagnoses.get_mut(&row.did) {
            Some(diagnosis) => {
                // Duplicate pairs collapse to set membership.
                if diagnosis.symptoms.insert(row.syd) {
                    report.associations_loaded += 1;
                } else {
                    report.associations_dropped += 1;
                }
            }
            None => {
                warn!(symptom = %row.syd, diagnosis = %row.did, "association references unknown diagnosis, row dropped");
                report.associations_dropped += 1;
            }
        }
    }
    Ok(())
}
