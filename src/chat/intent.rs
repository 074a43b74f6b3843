use crate::error::{Result, SymcheckError};

/// Built-in command words, matched exactly and case-sensitively.
pub const CMD_SHOW_SYMPTOMS: &str = "show symptoms";
pub const CMD_HELP: &str = "help";
pub const CMD_QUIT: [&str; 3] = ["bye", "quit", "exit"];

/// What the user put into the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// One trimmed line of free text
    UserInput(String),
    /// The session is over; the loop exits instead of dispatching this
    ConversationOver,
}

/// What the conversation does next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Greet,
    Help,
    ShowSymptoms,
    AdditionalSymptoms(String),
    Terminate,
}

/// What the conversation needs to continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentRequest {
    UserInput,
    Terminate,
}

/// Map an intent to the action that handles it.
///
/// Built-in commands are checked before anything else, so a symptom phrase
/// spelled exactly like a command never reaches extraction. Receiving
/// [`Intent::ConversationOver`] here is a protocol violation: the loop must
/// have exited before dispatching it.
pub fn resolve_action(intent: Intent) -> Result<Action> {
    let text = match intent {
        Intent::UserInput(text) => text,
        Intent::ConversationOver => {
            return Err(SymcheckError::Protocol(
                "conversation-over intent reached the action resolver".to_string(),
            ))
        }
    };

    if text == CMD_SHOW_SYMPTOMS {
        Ok(Action::ShowSymptoms)
    } else if text == CMD_HELP {
        Ok(Action::Help)
    } else if CMD_QUIT.contains(&text.as_str()) {
        Ok(Action::Terminate)
    } else {
        Ok(Action::AdditionalSymptoms(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(text: &str) -> Action {
        resolve_action(Intent::UserInput(text.to_string())).unwrap()
    }

    #[test]
    fn test_builtin_commands_resolve() {
        assert_eq!(resolve("show symptoms"), Action::ShowSymptoms);
        assert_eq!(resolve("help"), Action::Help);
        assert_eq!(resolve("bye"), Action::Terminate);
        assert_eq!(resolve("quit"), Action::Terminate);
        assert_eq!(resolve("exit"), Action::Terminate);
    }

    #[test]
    fn test_commands_are_case_sensitive() {
        assert_eq!(resolve("HELP"), Action::AdditionalSymptoms("HELP".to_string()));
        assert_eq!(resolve("Quit"), Action::AdditionalSymptoms("Quit".to_string()));
        assert_eq!(
            resolve("Show Symptoms"),
            Action::AdditionalSymptoms("Show Symptoms".to_string())
        );
    }

    #[test]
    fn test_free_text_carries_through() {
        assert_eq!(
            resolve("I have a fever"),
            Action::AdditionalSymptoms("I have a fever".to_string())
        );
        assert_eq!(resolve(""), Action::AdditionalSymptoms(String::new()));
    }

    #[test]
    fn test_commands_win_over_embedded_text() {
        // Only the exact line is a command; surrounding words make it text.
        assert_eq!(
            resolve("please quit now"),
            Action::AdditionalSymptoms("please quit now".to_string())
        );
    }

    #[test]
    fn test_conversation_over_is_a_protocol_error() {
        let err = resolve_action(Intent::ConversationOver).unwrap_err();
        assert!(matches!(err, SymcheckError::Protocol(_)));
    }
}
