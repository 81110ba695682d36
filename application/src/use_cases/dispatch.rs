//! Command dispatch use case.
//!
//! Turns one line of chat input into a command invocation: split off the
//! keyword, check the caller's access level against the command's
//! definition, and route to the matching handler. The `help` command is
//! served straight from the registry.

use crate::ports::command_reply::CommandReply;
use crate::use_cases::wiki_lookup::WikiLookupUseCase;
use std::sync::Arc;
use tracing::debug;
use wikibot_domain::{AccessLevel, CommandDefinition, CommandSet, Reply, SearchTerm};

/// The commands this bot serves.
pub fn default_command_set() -> CommandSet {
    CommandSet::new()
        .register(
            CommandDefinition::new("wiki", "Look up a word in Wikipedia", AccessLevel::All)
                .with_help("wiki <term>"),
        )
        .register(
            CommandDefinition::new("help", "List commands or show one command's help", AccessLevel::All)
                .with_help("help [command]"),
        )
}

/// Routes chat input lines to command handlers.
///
/// The keyword match is ASCII case-insensitive (`WIKI rust` works); the
/// remainder of the line is passed to the handler whitespace-trimmed.
/// Every dispatched line gets a reply: the command's output, its usage
/// text when the argument is missing, or a short notice for unknown or
/// refused commands.
pub struct CommandDispatcher {
    commands: CommandSet,
    lookup: Arc<WikiLookupUseCase>,
}

impl CommandDispatcher {
    pub fn new(lookup: Arc<WikiLookupUseCase>) -> Self {
        Self {
            commands: default_command_set(),
            lookup,
        }
    }

    /// Replace the command registry (definitions, access levels, help).
    pub fn with_commands(mut self, commands: CommandSet) -> Self {
        self.commands = commands;
        self
    }

    pub fn commands(&self) -> &CommandSet {
        &self.commands
    }

    /// Dispatch one input line on behalf of a caller at `caller` level.
    pub async fn dispatch(&self, line: &str, caller: AccessLevel, sendto: &dyn CommandReply) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        let (keyword, remainder) = match line.split_once(char::is_whitespace) {
            Some((kw, rest)) => (kw.to_ascii_lowercase(), rest.trim()),
            None => (line.to_ascii_lowercase(), ""),
        };
        debug!("Dispatching command \"{}\"", keyword);

        let Some(definition) = self.commands.get(&keyword) else {
            sendto.reply(Reply::text(format!(
                "Unknown command: {}. Try \"help\".",
                keyword
            )));
            return;
        };

        if !caller.grants(definition.access_level) {
            sendto.reply(Reply::text(format!(
                "The {} command requires {} access.",
                definition.name, definition.access_level
            )));
            return;
        }

        match keyword.as_str() {
            "wiki" => self.handle_wiki(definition, remainder, sendto).await,
            "help" => self.handle_help(remainder, sendto),
            _ => sendto.reply(Reply::text(format!(
                "Unknown command: {}. Try \"help\".",
                keyword
            ))),
        }
    }

    async fn handle_wiki(
        &self,
        definition: &CommandDefinition,
        remainder: &str,
        sendto: &dyn CommandReply,
    ) {
        match SearchTerm::try_new(remainder) {
            Some(term) => {
                self.lookup.execute(&term, sendto).await;
            }
            None => sendto.reply(Reply::text(format!("Usage: {}", definition.help))),
        }
    }

    fn handle_help(&self, remainder: &str, sendto: &dyn CommandReply) {
        if remainder.is_empty() {
            let lines: Vec<String> = self
                .commands
                .all()
                .map(|c| format!("{} - {}", c.name, c.description))
                .collect();
            sendto.reply(Reply::text(lines.join("\n")));
            return;
        }

        match self.commands.get(&remainder.to_ascii_lowercase()) {
            Some(c) => sendto.reply(Reply::text(format!(
                "{} - {}\nUsage: {}",
                c.name, c.description, c.help
            ))),
            None => sendto.reply(Reply::text(format!("Unknown command: {}", remainder))),
        }
    }
}
