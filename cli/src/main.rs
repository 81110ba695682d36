//! CLI entrypoint for wikibot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wikibot_application::{CommandDispatcher, WikiLookupUseCase};
use wikibot_domain::SearchTerm;
use wikibot_infrastructure::{ConfigLoader, FileConfig, WikipediaGateway};
use wikibot_presentation::{ChatRepl, Cli, ConsoleRenderer, LookupSpinner};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };
    info!("Starting {} against {}", config.bot.name, config.wiki.api_url);

    // === Dependency Injection ===
    // Infrastructure adapter: the Wikipedia HTTP gateway
    let gateway = Arc::new(
        WikipediaGateway::new(config.wiki.api_url.clone(), &config.wiki.user_agent)
            .context("failed to set up the Wikipedia gateway")?,
    );

    // The console renders both replies and chat-command snippets
    let markup = Arc::new(ConsoleRenderer::new());

    let lookup = Arc::new(
        WikiLookupUseCase::new(gateway, markup).with_timeout(config.wiki.timeout()),
    );
    let dispatcher = Arc::new(CommandDispatcher::new(lookup.clone()));

    // Chat mode
    if cli.chat {
        let repl = ChatRepl::new(dispatcher, config.bot.name).with_progress(!cli.quiet);
        repl.run().await?;
        return Ok(());
    }

    // One-shot mode - a term is required
    let term = match cli.joined_term().and_then(SearchTerm::try_new) {
        Some(term) => term,
        None => bail!("A term is required. Use --chat for interactive mode."),
    };

    if cli.quiet {
        lookup.execute(&term, &ConsoleRenderer::new()).await;
    } else {
        let spinner = Arc::new(LookupSpinner::new(format!("Looking up {}...", term)));
        let renderer = ConsoleRenderer::with_spinner(spinner.clone());
        lookup.execute(&term, &renderer).await;
        spinner.finish();
    }

    Ok(())
}
