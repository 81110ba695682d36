//! Reply surface module
//!
//! The value objects a command handler produces for the user. How a reply
//! is delivered (chat protocol, console) is an adapter concern.

pub mod entities;

pub use entities::Reply;
