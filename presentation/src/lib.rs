//! Presentation layer for wikibot
//!
//! This crate contains CLI definitions, the interactive chat REPL, the
//! console reply renderer, and the lookup progress spinner.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use output::console::ConsoleRenderer;
pub use progress::reporter::LookupSpinner;
