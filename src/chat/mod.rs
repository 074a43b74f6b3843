mod handlers;
mod intent;
pub mod messages;
mod session;

pub use intent::*;
pub use session::*;

use crate::catalog::Catalog;
use crate::config::ChatConfig;
use crate::error::Result;
use crate::extract::PhraseExtractor;
use crate::ui::TextIo;

/// The interactive conversation engine.
///
/// Owns the session for its whole lifetime; reference data, the matcher and
/// the I/O seam are borrowed, so the same catalog can serve any number of
/// consecutive conversations.
pub struct Conversation<'a> {
    catalog: &'a Catalog,
    extractor: &'a PhraseExtractor,
    io: &'a mut dyn TextIo,
    session: Session,
    max_candidates: usize,
}

impl<'a> Conversation<'a> {
    pub fn new(
        catalog: &'a Catalog,
        extractor: &'a PhraseExtractor,
        io: &'a mut dyn TextIo,
        chat: &ChatConfig,
    ) -> Self {
        Conversation {
            catalog,
            extractor,
            io,
            session: Session::new(),
            max_candidates: chat.max_candidates,
        }
    }

    /// Drive the conversation until the user leaves it.
    ///
    /// Each turn: surface and clear any notice left by the previous turn,
    /// resolve the pending intent into an action, execute it, then solicit
    /// the next intent. Conversational notices never end the loop; only a
    /// terminate action or exhausted input does.
    pub fn run(&mut self) -> Result<()> {
        let request = self.handle_action(Action::Greet)?;
        let mut intent = self.next_intent(request)?;

        while self.session.in_conversation() {
            if let Some(notice) = self.session.take_notice() {
                self.io.write(&notice)?;
            }
            let action = resolve_action(intent)?;
            let request = self.handle_action(action)?;
            intent = self.next_intent(request)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Diagnosis, Symptom};
    use crate::ui::testing::ScriptedIo;

    fn fixture_catalog() -> Catalog {
        let mut catalog = Catalog::default();
        for (id, phrase) in [
            ("s_cough", "cough"),
            ("s_fever", "fever"),
            ("s_head", "headache"),
            ("s_quit", "quit"),
        ] {
            catalog.symptoms.insert(
                id.to_string(),
                Symptom {
                    id: id.to_string(),
                    phrase: phrase.to_string(),
                },
            );
        }
        for (id, name, symptoms) in [
            ("d_flu", "Flu", vec!["s_fever", "s_cough"]),
            ("d_heat", "Heatstroke", vec!["s_fever"]),
            ("d_burnout", "Burnout", vec!["s_quit"]),
        ] {
            catalog.diagnoses.insert(
                id.to_string(),
                Diagnosis {
                    id: id.to_string(),
                    name: name.to_string(),
                    symptoms: symptoms.into_iter().map(|s| s.to_string()).collect(),
                },
            );
        }
        catalog
    }

    fn run_script(lines: &[&str]) -> Vec<String> {
        let catalog = fixture_catalog();
        let extractor = PhraseExtractor::from_catalog(&catalog);
        let mut io = ScriptedIo::new(lines);
        let mut conversation =
            Conversation::new(&catalog, &extractor, &mut io, &ChatConfig::default());
        conversation.run().unwrap();
        io.output
    }

    #[test]
    fn test_greets_and_says_farewell() {
        let output = run_script(&["bye"]);

        assert_eq!(output.len(), 2);
        assert!(output[0].contains("Hello"));
        assert!(output[0].contains("Commands:"));
        assert!(output[1].contains("Take care"));
    }

    #[test]
    fn test_reports_after_symptom_turn() {
        let output = run_script(&["I have a fever and a cough", "bye"]);

        let report = &output[1];
        assert!(report.contains("Possible diagnoses"));
        // Full coverage with the larger overlap ranks first.
        assert!(report.find("Flu").unwrap() < report.find("Heatstroke").unwrap());
        assert!(report.contains("(2 of 2 symptoms)"));
    }

    #[test]
    fn test_partial_coverage_ranks_lower() {
        let output = run_script(&["fever", "bye"]);

        let report = &output[1];
        assert!(report.find("Heatstroke").unwrap() < report.find("Flu").unwrap());
        assert!(report.contains("100%"));
        assert!(report.contains("50%"));
    }

    #[test]
    fn test_symptoms_accumulate_across_turns() {
        let output = run_script(&["fever", "and now a cough too", "bye"]);

        let first = &output[1];
        let second = &output[2];
        assert!(first.find("Heatstroke").unwrap() < first.find("Flu").unwrap());
        // Second turn ranks from the accumulated set, not just the new text.
        assert!(second.find("Flu").unwrap() < second.find("Heatstroke").unwrap());
        assert!(second.contains("(2 of 2 symptoms)"));
    }

    #[test]
    fn test_show_symptoms_lists_whole_catalog() {
        let output = run_script(&["show symptoms", "bye"]);

        let listing = &output[1];
        for phrase in ["cough", "fever", "headache", "quit"] {
            assert!(listing.contains(phrase));
        }
        assert!(!listing.contains("Possible diagnoses"));
    }

    #[test]
    fn test_help_repeats_instructions() {
        let output = run_script(&["help", "bye"]);
        assert!(output[1].contains("Commands:"));
    }

    #[test]
    fn test_unrecognized_turn_notices_then_recovers() {
        let output = run_script(&["xyznotasymptom", "fever", "bye"]);

        // The notice surfaces at the top of the following turn, before that
        // turn's report.
        assert!(output[1].contains("did not recognize"));
        assert!(output[2].contains("Heatstroke"));
        // The unrecognized turn added nothing to the session.
        assert!(output[2].contains("(1 of 1 symptoms)"));
        assert_eq!(output.len(), 4);
    }

    #[test]
    fn test_notice_survives_into_final_turn() {
        let output = run_script(&["xyznotasymptom", "bye"]);

        assert_eq!(output.len(), 3);
        assert!(output[1].contains("did not recognize"));
        assert!(output[2].contains("Take care"));
    }

    #[test]
    fn test_empty_line_is_an_unrecognized_turn() {
        let output = run_script(&["", "bye"]);

        assert!(output[1].contains("did not recognize"));
        assert!(output[2].contains("Take care"));
    }

    #[test]
    fn test_command_beats_identical_catalog_phrase() {
        // "quit" is both a command and a catalog phrase; the command wins.
        let output = run_script(&["quit"]);

        assert_eq!(output.len(), 2);
        assert!(output[1].contains("Take care"));
        assert!(!output.iter().any(|o| o.contains("Burnout")));
    }

    #[test]
    fn test_embedded_command_word_is_still_symptom_text() {
        let output = run_script(&["i want to quit", "bye"]);
        assert!(output[1].contains("Burnout"));
    }

    #[test]
    fn test_end_of_input_ends_conversation_cleanly() {
        let output = run_script(&[]);

        // Greeting only; no farewell and no error.
        assert_eq!(output.len(), 1);
        assert!(output[0].contains("Hello"));
    }

    #[test]
    fn test_end_of_input_after_report() {
        let output = run_script(&["fever"]);

        assert_eq!(output.len(), 2);
        assert!(output[1].contains("Heatstroke"));
    }

    #[test]
    fn test_input_is_trimmed_before_resolution() {
        let output = run_script(&["  help  ", "bye"]);
        assert!(output[1].contains("Commands:"));
    }
}
