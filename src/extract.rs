use crate::catalog::Catalog;
use std::collections::BTreeSet;
use tracing::debug;

/// Case-normalized phrase matcher over the symptom catalog.
///
/// Built once after the catalog loads; symptoms with an empty phrase are
/// left out of the matcher entirely.
pub struct PhraseExtractor {
    /// Lowercased phrase paired with its symptom id
    phrases: Vec<(String, String)>,
}

impl PhraseExtractor {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let phrases = catalog
            .symptoms
            .values()
            .filter(|s| !s.phrase.is_empty())
            .map(|s| (s.phrase.to_lowercase(), s.id.clone()))
            .collect();
        PhraseExtractor { phrases }
    }

    /// Report the id of every catalog phrase contained in `text`.
    ///
    /// Matching is substring containment on the lowercased input, so
    /// overlapping and nested phrases each count.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let normalized = text.to_lowercase();
        let found: BTreeSet<String> = self
            .phrases
            .iter()
            .filter(|(phrase, _)| normalized.contains(phrase.as_str()))
            .map(|(_, id)| id.clone())
            .collect();
        debug!(matched = found.len(), "symptom phrases extracted");
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Symptom;

    fn catalog_with(entries: &[(&str, &str)]) -> Catalog {
        let mut catalog = Catalog::default();
        for (id, phrase) in entries {
            catalog.symptoms.insert(
                id.to_string(),
                Symptom {
                    id: id.to_string(),
                    phrase: phrase.to_string(),
                },
            );
        }
        catalog
    }

    fn ids(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extract_is_case_insensitive() {
        let catalog = catalog_with(&[("s01", "fever"), ("s02", "cough"), ("s03", "headache")]);
        let extractor = PhraseExtractor::from_catalog(&catalog);

        let found = extractor.extract("I have a FEVER and a Cough");
        assert_eq!(found, ids(&["s01", "s02"]));
    }

    #[test]
    fn test_nested_phrases_both_match() {
        let catalog = catalog_with(&[("s01", "pain"), ("s02", "chest pain")]);
        let extractor = PhraseExtractor::from_catalog(&catalog);

        assert_eq!(extractor.extract("sharp chest pain"), ids(&["s01", "s02"]));
    }

    #[test]
    fn test_match_inside_longer_word() {
        // Containment is plain substring matching, not word-boundary aware.
        let catalog = catalog_with(&[("s01", "fever")]);
        let extractor = PhraseExtractor::from_catalog(&catalog);

        assert_eq!(extractor.extract("I feel feverish"), ids(&["s01"]));
    }

    #[test]
    fn test_empty_phrase_never_matches() {
        let catalog = catalog_with(&[("s01", "fever"), ("s02", "")]);
        let extractor = PhraseExtractor::from_catalog(&catalog);

        assert_eq!(extractor.extract("fever and more"), ids(&["s01"]));
        assert!(extractor.extract("").is_empty());
    }

    #[test]
    fn test_unrecognized_text_yields_empty_set() {
        let catalog = catalog_with(&[("s01", "fever")]);
        let extractor = PhraseExtractor::from_catalog(&catalog);

        assert!(extractor.extract("xyznotasymptom").is_empty());
    }

    #[test]
    fn test_extract_is_deterministic() {
        let catalog = catalog_with(&[("s01", "fever"), ("s02", "cough"), ("s03", "chills")]);
        let extractor = PhraseExtractor::from_catalog(&catalog);

        let text = "chills, cough and a slight fever";
        assert_eq!(extractor.extract(text), extractor.extract(text));
    }
}
