use crate::catalog;
use crate::chat::messages;
use crate::error::Result;
use serde_json::json;
use std::path::Path;

/// Print the symptom catalog.
pub fn run_symptoms(data_dir: &Path, json_output: bool) -> Result<()> {
    let (catalog, _) = catalog::load(data_dir)?;

    if json_output {
        // JSON carries the whole table, including unmatchable empty phrases.
        let symptoms: Vec<serde_json::Value> = catalog
            .symptoms
            .values()
            .map(|s| json!({ "id": s.id, "phrase": s.phrase }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&symptoms)?);
        return Ok(());
    }

    println!("{}", messages::symptom_list(&catalog));
    Ok(())
}
