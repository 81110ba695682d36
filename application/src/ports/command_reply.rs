//! Command reply port

use wikibot_domain::Reply;

/// Where replies to a command invocation are sent.
///
/// The chat host hands each invocation an opaque reply target; in this
/// program that is the console renderer, and in tests a recording sink.
/// Implementations must tolerate being called from async contexts, so
/// delivery has to be non-blocking.
pub trait CommandReply: Send + Sync {
    fn reply(&self, reply: Reply);
}
