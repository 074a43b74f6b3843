use crate::catalog;
use crate::chat::Conversation;
use crate::config::Config;
use crate::error::Result;
use crate::extract::PhraseExtractor;
use crate::ui::{self, Spinner, Terminal};
use std::path::Path;

/// Run the interactive conversation against the catalog in `data_dir`.
pub fn run_chat(data_dir: &Path, config: &Config) -> Result<()> {
    let spinner = ui::is_interactive().then(|| Spinner::new("Loading reference data..."));
    let loaded = catalog::load(data_dir);
    if let Some(spinner) = &spinner {
        match &loaded {
            Ok(_) => spinner.finish_and_clear(),
            Err(_) => spinner.finish_with_error("Could not load reference data"),
        }
    }
    let (catalog, _) = loaded?;

    let extractor = PhraseExtractor::from_catalog(&catalog);
    let mut terminal = Terminal;
    let mut conversation = Conversation::new(&catalog, &extractor, &mut terminal, &config.chat);
    conversation.run()
}
