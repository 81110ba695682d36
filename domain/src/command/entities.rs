//! Command definition entities

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Access level required to invoke a command.
///
/// Levels are ordered; a caller may invoke any command whose required level
/// is at or below their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// Everyone, including unregistered users
    All,
    /// Registered members
    Member,
    /// Channel moderators
    Moderator,
    /// Bot administrators
    Admin,
}

impl AccessLevel {
    pub fn as_str(&self) -> &str {
        match self {
            AccessLevel::All => "all",
            AccessLevel::Member => "member",
            AccessLevel::Moderator => "moderator",
            AccessLevel::Admin => "admin",
        }
    }

    /// Whether a caller at this level may invoke a command requiring `required`.
    pub fn grants(&self, required: AccessLevel) -> bool {
        *self >= required
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Definition of a command the bot responds to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandDefinition {
    /// Keyword the command is invoked by (e.g. "wiki")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Access level required to invoke it
    pub access_level: AccessLevel,
    /// Usage/help text shown by the help command
    pub help: String,
}

impl CommandDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        access_level: AccessLevel,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            access_level,
            help: String::new(),
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }
}

/// Registry of the commands a bot instance serves.
///
/// Keyed by keyword; iteration order is alphabetical so help listings are
/// stable.
#[derive(Debug, Clone, Default)]
pub struct CommandSet {
    commands: BTreeMap<String, CommandDefinition>,
}

impl CommandSet {
    pub fn new() -> Self {
        Self {
            commands: BTreeMap::new(),
        }
    }

    pub fn register(mut self, command: CommandDefinition) -> Self {
        self.commands.insert(command.name.clone(), command);
        self
    }

    pub fn get(&self, name: &str) -> Option<&CommandDefinition> {
        self.commands.get(name)
    }

    pub fn all(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.commands.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(|s| s.as_str())
    }
}
