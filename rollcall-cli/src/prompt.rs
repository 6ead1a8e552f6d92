//! Terminal side of the Trello credential grant flow.

use dialoguer::Input;

use rollcall_core::SourceError;
use rollcall_fetch::credentials::Prompt;

/// Prompts on stderr so stdout carries only the report.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn notify(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn ask(&mut self, question: &str) -> Result<String, SourceError> {
        Input::<String>::new()
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| SourceError::Auth(format!("cannot read answer: {e}")))
    }
}
