use crate::catalog::Catalog;
use crate::chat::intent::{CMD_HELP, CMD_QUIT, CMD_SHOW_SYMPTOMS};
use crate::rank::Candidate;

/// Input prompt shown before each read
pub const PROMPT: &str = "you:";

/// Opening message of a conversation
pub fn greeting() -> String {
    format!(
        "Hello, I will try to narrow down what might be bothering you.\n\n{}",
        instructions()
    )
}

/// Command overview, shown on greeting and on request
pub fn instructions() -> String {
    let commands = [
        format!("  {:<18}{}", CMD_SHOW_SYMPTOMS, "list every symptom I can recognize"),
        format!("  {:<18}{}", CMD_HELP, "show this overview"),
        format!("  {:<18}{}", CMD_QUIT.join(" | "), "end the conversation"),
    ];
    format!(
        "Describe your symptoms in plain words, for example \"I have a fever and a headache\".\nCommands:\n{}",
        commands.join("\n")
    )
}

/// Full listing of recognizable symptom phrases, alphabetical
pub fn symptom_list(catalog: &Catalog) -> String {
    let mut phrases: Vec<&str> = catalog
        .symptoms
        .values()
        .filter(|s| !s.phrase.is_empty())
        .map(|s| s.phrase.as_str())
        .collect();
    phrases.sort_unstable();

    let lines: Vec<String> = phrases.iter().map(|p| format!("  - {}", p)).collect();
    format!("I can recognize these symptoms:\n{}", lines.join("\n"))
}

/// Ranked report, capped for display; a cap of 0 shows everything
pub fn report(candidates: &[Candidate], cap: usize) -> String {
    if candidates.is_empty() {
        return "I have no matching condition for those symptoms yet. Tell me more.".to_string();
    }

    let shown = if cap == 0 {
        candidates.len()
    } else {
        cap.min(candidates.len())
    };

    let mut lines = vec!["Possible diagnoses, best match first:".to_string()];
    for (index, candidate) in candidates[..shown].iter().enumerate() {
        lines.push(format!(
            "  {:>2}. {:<28} {:>3.0}%  ({} of {} symptoms)",
            index + 1,
            candidate.name,
            candidate.score * 100.0,
            candidate.matched,
            candidate.profile_size
        ));
    }
    if shown < candidates.len() {
        lines.push(format!("  ... and {} more", candidates.len() - shown));
    }
    lines.join("\n")
}

/// Conversational notice for a turn where nothing was recognized
pub fn no_symptoms_notice() -> String {
    format!(
        "I did not recognize any symptom in that. Try different words, or type \"{}\" to see what I know.",
        CMD_SHOW_SYMPTOMS
    )
}

/// Closing message
pub fn farewell() -> &'static str {
    "Take care! Remember to see a doctor if symptoms persist."
}
