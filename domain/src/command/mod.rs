//! Command surface module
//!
//! Metadata for the commands a bot instance serves: what each command is
//! called, who may invoke it, and its help text. Dispatch itself lives in
//! the application layer; this module only carries the definitions.

pub mod entities;

pub use entities::{AccessLevel, CommandDefinition, CommandSet};
