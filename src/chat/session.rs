use std::collections::BTreeSet;

/// Mutable state of one conversation.
///
/// `known_symptoms` only ever grows. The notice slot holds at most one
/// conversational message; the loop surfaces it once and clears it.
#[derive(Debug)]
pub struct Session {
    pub known_symptoms: BTreeSet<String>,
    in_conversation: bool,
    pending_notice: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Session {
            known_symptoms: BTreeSet::new(),
            in_conversation: true,
            pending_notice: None,
        }
    }

    pub fn in_conversation(&self) -> bool {
        self.in_conversation
    }

    /// Mark the conversation as over; the loop exits at its next check.
    pub fn end_conversation(&mut self) {
        self.in_conversation = false;
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.pending_notice = Some(notice.into());
    }

    /// Take the pending notice, leaving the slot empty.
    pub fn take_notice(&mut self) -> Option<String> {
        self.pending_notice.take()
    }

    /// Union extracted symptom ids into the session, reporting how many
    /// were not known before.
    pub fn add_symptoms(&mut self, ids: BTreeSet<String>) -> usize {
        let before = self.known_symptoms.len();
        self.known_symptoms.extend(ids);
        self.known_symptoms.len() - before
    }
}
