use super::intent::{Action, Intent, IntentRequest};
use super::messages;
use super::Conversation;
use crate::error::Result;
use crate::rank;
use crate::ui::TextIo;
use tracing::debug;

impl Conversation<'_> {
    /// Execute one action and say what the conversation needs next.
    pub(super) fn handle_action(&mut self, action: Action) -> Result<IntentRequest> {
        match action {
            Action::Greet => {
                self.io.write(&messages::greeting())?;
                Ok(IntentRequest::UserInput)
            }
            Action::Help => {
                self.io.write(&messages::instructions())?;
                Ok(IntentRequest::UserInput)
            }
            Action::ShowSymptoms => {
                self.io.write(&messages::symptom_list(self.catalog))?;
                Ok(IntentRequest::UserInput)
            }
            Action::AdditionalSymptoms(text) => {
                self.additional_symptoms(&text)?;
                Ok(IntentRequest::UserInput)
            }
            Action::Terminate => {
                self.io.write(messages::farewell())?;
                Ok(IntentRequest::Terminate)
            }
        }
    }

    /// One free-text turn: extract, accumulate, report.
    ///
    /// A turn that yields nothing leaves the session untouched and parks a
    /// notice instead of printing a report.
    fn additional_symptoms(&mut self, text: &str) -> Result<()> {
        let extracted = self.extractor.extract(text);
        if extracted.is_empty() {
            self.session.set_notice(messages::no_symptoms_notice());
            return Ok(());
        }

        let new = self.session.add_symptoms(extracted);
        debug!(
            new,
            total = self.session.known_symptoms.len(),
            "session symptoms updated"
        );

        let candidates = rank::rank(&self.session.known_symptoms, self.catalog);
        self.io.write(&messages::report(&candidates, self.max_candidates))?;
        Ok(())
    }

    /// Fulfill the conversation's need for its next intent.
    ///
    /// Exhausted input is treated like an explicit terminate so piped
    /// sessions end cleanly.
    pub(super) fn next_intent(&mut self, request: IntentRequest) -> Result<Intent> {
        match request {
            IntentRequest::UserInput => match self.io.read_line(messages::PROMPT)? {
                Some(line) => Ok(Intent::UserInput(line.trim().to_string())),
                None => {
                    debug!("input exhausted, leaving conversation");
                    self.session.end_conversation();
                    Ok(Intent::ConversationOver)
                }
            },
            IntentRequest::Terminate => {
                self.session.end_conversation();
                Ok(Intent::ConversationOver)
            }
        }
    }
}
