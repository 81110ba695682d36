//! Wiki lookup use case.
//!
//! Executes one `wiki <term>` invocation end to end: fetch the intro
//! extract for the term, then either answer directly, follow up with a
//! links query when the term landed on a disambiguation page, or surface
//! a lookup failure. Whatever path is taken, exactly one reply goes to
//! the invoker.

use crate::ports::chat_markup::ChatMarkup;
use crate::ports::command_reply::CommandReply;
use crate::ports::http_gateway::HttpGateway;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use wikibot_domain::{
    LookupError, LookupQuery, Reply, SearchTerm, WikiPage, repair_sentence_spacing,
};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Terminal state of one lookup invocation.
///
/// The reply itself has already been sent through the [`CommandReply`]
/// port; this is what hosts get back for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The term resolved to an article; its extract was sent as a blob.
    DirectAnswer,
    /// The term resolved to a disambiguation page; its meanings were sent
    /// as a list of command snippets.
    Disambiguation,
    /// The lookup failed; the error's user message was sent.
    Failed(LookupError),
}

/// Use case for looking a term up on Wikipedia.
///
/// Flow:
/// 1. Build the extracts query for the normalized term and fetch it
/// 2. Parse the body into a page record
/// 3. Extract ends in `may refer to:` → fetch the page's links and reply
///    with re-invocable `wiki <title>` snippets
/// 4. Otherwise → repair sentence spacing and reply with the extract blob
///
/// Each invocation is an independent sequential flow; the links request
/// only starts after the extract request fully completed.
pub struct WikiLookupUseCase {
    gateway: Arc<dyn HttpGateway>,
    markup: Arc<dyn ChatMarkup>,
    timeout: Duration,
}

impl WikiLookupUseCase {
    pub fn new(gateway: Arc<dyn HttpGateway>, markup: Arc<dyn ChatMarkup>) -> Self {
        Self {
            gateway,
            markup,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Execute one lookup, sending exactly one reply to `sendto`.
    pub async fn execute(&self, term: &SearchTerm, sendto: &dyn CommandReply) -> LookupOutcome {
        info!("Looking up \"{}\" on Wikipedia", term);

        let page = match self.fetch_page(&LookupQuery::extracts(term)).await {
            Ok(page) => page,
            Err(err) => return self.fail(err, sendto),
        };

        if page.is_disambiguation() {
            debug!(
                "\"{}\" resolved to disambiguation page \"{}\"",
                term, page.title
            );
            return self.reply_with_links(&page.title, sendto).await;
        }

        let extract = repair_sentence_spacing(&page.extract);
        debug!(
            "Direct answer for \"{}\": {} bytes of extract",
            page.title,
            extract.len()
        );
        sendto.reply(Reply::blob(page.title, extract));
        LookupOutcome::DirectAnswer
    }

    /// Fetch the links of a disambiguation page and reply with one
    /// clickable `wiki <title>` snippet per link.
    async fn reply_with_links(&self, title: &str, sendto: &dyn CommandReply) -> LookupOutcome {
        let page = match self.fetch_page(&LookupQuery::links(title)).await {
            Ok(page) => page,
            Err(err) => return self.fail(err, sendto),
        };

        let snippets: Vec<String> = page
            .link_titles()
            .map(|link| self.markup.chat_command(link, &format!("wiki {}", link)))
            .collect();
        debug!(
            "Disambiguation page \"{}\" lists {} links",
            page.title,
            snippets.len()
        );

        sendto.reply(Reply::blob(
            format!("{} (disambiguation)", page.title),
            snippets.join("\n"),
        ));
        LookupOutcome::Disambiguation
    }

    /// Issue one request and parse its body into a page record.
    async fn fetch_page(&self, query: &LookupQuery) -> Result<WikiPage, LookupError> {
        let body = self
            .gateway
            .get(query, self.timeout)
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        wikibot_domain::parse_query_response(&body)
    }

    /// Send the error's user message and record the failure.
    fn fail(&self, err: LookupError, sendto: &dyn CommandReply) -> LookupOutcome {
        match err.detail() {
            Some(detail) => warn!("Wikipedia lookup failed: {} ({})", err, detail),
            None => warn!("Wikipedia lookup failed: {}", err),
        }
        sendto.reply(Reply::text(err.to_string()));
        LookupOutcome::Failed(err)
    }
}
