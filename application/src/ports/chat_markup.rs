//! Chat markup port

/// Renders host-specific chat markup.
///
/// Chat protocols differ in how a clickable command link is written; the
/// lookup flow only needs one primitive and leaves the syntax to the host.
pub trait ChatMarkup: Send + Sync {
    /// Render a clickable snippet labeled `label` that sends `command`
    /// when activated.
    fn chat_command(&self, label: &str, command: &str) -> String;
}
