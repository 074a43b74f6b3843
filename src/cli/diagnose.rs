use crate::catalog;
use crate::chat::messages;
use crate::config::Config;
use crate::error::Result;
use crate::extract::PhraseExtractor;
use crate::rank;
use crate::ui;
use serde_json::json;
use std::path::Path;

/// One-shot ranking for a single piece of text, no conversation.
///
/// Recognizing nothing is still a valid outcome: the notice goes to stderr
/// and the exit code stays zero.
pub fn run_diagnose(
    data_dir: &Path,
    config: &Config,
    words: &[String],
    json_output: bool,
) -> Result<()> {
    let text = words.join(" ");
    let (catalog, _) = catalog::load(data_dir)?;
    let extractor = PhraseExtractor::from_catalog(&catalog);

    let found = extractor.extract(&text);
    let candidates = rank::rank(&found, &catalog);

    if json_output {
        let symptoms: Vec<serde_json::Value> = found
            .iter()
            .filter_map(|id| catalog.symptoms.get(id))
            .map(|s| json!({ "id": s.id, "phrase": s.phrase }))
            .collect();
        let output = json!({
            "text": text,
            "symptoms": symptoms,
            "candidates": candidates,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if found.is_empty() {
        ui::print_warning(&messages::no_symptoms_notice());
        return Ok(());
    }

    let phrases: Vec<&str> = found
        .iter()
        .filter_map(|id| catalog.symptoms.get(id))
        .map(|s| s.phrase.as_str())
        .collect();
    ui::print_info(&format!("Recognized: {}", phrases.join(", ")));
    println!("{}", messages::report(&candidates, config.chat.max_candidates));
    Ok(())
}
