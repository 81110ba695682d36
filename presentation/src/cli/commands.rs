//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for wikibot
#[derive(Parser, Debug)]
#[command(name = "wikibot")]
#[command(author, version, about = "Look up a term on Wikipedia from your terminal")]
#[command(long_about = r#"
Wikibot looks a term up on Wikipedia's query API and prints the intro
extract. When the term lands on a disambiguation page, it prints the
possible meanings as wiki commands you can re-run.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./wikibot.toml      Project-level config
3. ~/.config/wikibot/config.toml   Global config

Example:
  wikibot rust programming language
  wikibot "O&#39;Brien"
  wikibot --chat
"#)]
pub struct Cli {
    /// The term to look up (not required in chat mode)
    pub term: Vec<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// The positional words joined into one lookup term, if any were given.
    pub fn joined_term(&self) -> Option<String> {
        if self.term.is_empty() {
            None
        } else {
            Some(self.term.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_words_become_one_term() {
        let cli = Cli::parse_from(["wikibot", "rust", "programming", "language"]);
        assert_eq!(
            cli.joined_term(),
            Some("rust programming language".to_string())
        );
    }

    #[test]
    fn test_no_term_in_chat_mode() {
        let cli = Cli::parse_from(["wikibot", "--chat"]);
        assert!(cli.chat);
        assert_eq!(cli.joined_term(), None);
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::parse_from(["wikibot", "-vv", "rust"]);
        assert_eq!(cli.verbose, 2);
    }
}
