//! Console reply renderer
//!
//! Implements the application's reply and markup ports for a terminal
//! host. A chat client would render a blob as a collapsible window; the
//! console prints it expanded under a colored title rule. Chat-command
//! snippets are printed as the command to re-type.

use colored::Colorize;
use crate::progress::reporter::LookupSpinner;
use std::sync::Arc;
use wikibot_application::ports::chat_markup::ChatMarkup;
use wikibot_application::ports::command_reply::CommandReply;
use wikibot_domain::Reply;

/// Prints replies to stdout.
pub struct ConsoleRenderer {
    spinner: Option<Arc<LookupSpinner>>,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Render through a running spinner so output lines stay intact.
    pub fn with_spinner(spinner: Arc<LookupSpinner>) -> Self {
        Self {
            spinner: Some(spinner),
        }
    }

    /// Format one reply for the console.
    pub fn render(reply: &Reply) -> String {
        match reply {
            Reply::Text(text) => text.clone(),
            Reply::Blob { title, body } => {
                format!("{}\n{}", format!("── {} ──", title).cyan().bold(), body)
            }
        }
    }

    fn print(&self, text: &str) {
        match &self.spinner {
            Some(spinner) => spinner.suspend(|| println!("{}", text)),
            None => println!("{}", text),
        }
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandReply for ConsoleRenderer {
    fn reply(&self, reply: Reply) {
        self.print(&Self::render(&reply));
    }
}

impl ChatMarkup for ConsoleRenderer {
    /// A terminal has no clickable links; show the command to re-type
    /// next to the label.
    fn chat_command(&self, label: &str, command: &str) -> String {
        format!("{} <{}>", label, command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_reply_renders_verbatim() {
        colored::control::set_override(false);
        let rendered = ConsoleRenderer::render(&Reply::text("Couldn't find it."));
        assert_eq!(rendered, "Couldn't find it.");
    }

    #[test]
    fn test_blob_reply_renders_title_rule_then_body() {
        colored::control::set_override(false);
        let rendered = ConsoleRenderer::render(&Reply::blob("Mercury", "A planet."));
        assert_eq!(rendered, "── Mercury ──\nA planet.");
    }

    #[test]
    fn test_empty_blob_body_still_gets_its_title() {
        colored::control::set_override(false);
        let rendered = ConsoleRenderer::render(&Reply::blob("Blank", ""));
        assert_eq!(rendered, "── Blank ──\n");
    }

    #[test]
    fn test_chat_command_shows_label_and_command() {
        let renderer = ConsoleRenderer::new();
        assert_eq!(
            renderer.chat_command("Mercury (element)", "wiki Mercury (element)"),
            "Mercury (element) <wiki Mercury (element)>"
        );
    }
}
