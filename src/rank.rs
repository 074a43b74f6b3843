use crate::catalog::Catalog;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use tracing::debug;

/// One ranked diagnosis candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub diagnosis_id: String,
    pub name: String,
    /// Known symptoms that appear in the diagnosis profile
    pub matched: usize,
    /// Size of the full diagnosis profile
    pub profile_size: usize,
    /// Coverage fraction matched / profile_size, in (0, 1]
    pub score: f64,
}

/// Rank diagnoses by how much of their symptom profile the known set covers.
///
/// Diagnoses sharing no symptom with `known` are excluded, so a diagnosis
/// with an empty profile never appears. An empty `known` set yields an empty
/// ranking.
pub fn rank(known: &BTreeSet<String>, catalog: &Catalog) -> Vec<Candidate> {
    if known.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<Candidate> = catalog
        .diagnoses
        .values()
        .filter_map(|diagnosis| {
            let matched = diagnosis.symptoms.intersection(known).count();
            if matched == 0 {
                return None;
            }
            Some(Candidate {
                diagnosis_id: diagnosis.id.clone(),
                name: diagnosis.name.clone(),
                matched,
                profile_size: diagnosis.symptoms.len(),
                score: matched as f64 / diagnosis.symptoms.len() as f64,
            })
        })
        .collect();

    candidates.sort_by(compare);
    debug!(known = known.len(), candidates = candidates.len(), "diagnoses ranked");
    candidates
}

/// Score descending, then matched count descending, then id ascending.
///
/// Scores are compared as cross-multiplied integers so equal fractions tie
/// exactly regardless of float rounding.
fn compare(a: &Candidate, b: &Candidate) -> Ordering {
    (b.matched * a.profile_size)
        .cmp(&(a.matched * b.profile_size))
        .then_with(|| b.matched.cmp(&a.matched))
        .then_with(|| a.diagnosis_id.cmp(&b.diagnosis_id))
}
