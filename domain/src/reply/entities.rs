//! Reply entities

use serde::{Deserialize, Serialize};

/// A message the bot sends back to whoever invoked a command.
///
/// Short notices travel as plain text; extended content travels as a blob,
/// the collapsible titled format chat hosts render as an expandable window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reply {
    /// A short plain message (errors, notices)
    Text(String),
    /// A collapsible titled message for extended content
    Blob { title: String, body: String },
}

impl Reply {
    pub fn text(message: impl Into<String>) -> Self {
        Reply::Text(message.into())
    }

    pub fn blob(title: impl Into<String>, body: impl Into<String>) -> Self {
        Reply::Blob {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Blob title, if this reply is a blob.
    pub fn title(&self) -> Option<&str> {
        match self {
            Reply::Text(_) => None,
            Reply::Blob { title, .. } => Some(title.as_str()),
        }
    }
}
