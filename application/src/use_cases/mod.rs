//! Use case implementations
//!
//! Use cases orchestrate domain logic through the ports. Each use case is
//! independent and receives its collaborators via constructor injection.

pub mod dispatch;
pub mod wiki_lookup;
