//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; every field has a default so a partial
//! or absent file always yields a usable configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileConfig {
    /// Bot identity settings
    pub bot: FileBotConfig,
    /// Wikipedia API settings
    pub wiki: FileWikiConfig,
}

/// Bot identity from TOML (`[bot]` section)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileBotConfig {
    /// Name the bot announces itself as (REPL prompt)
    pub name: String,
}

impl Default for FileBotConfig {
    fn default() -> Self {
        Self {
            name: "wikibot".to_string(),
        }
    }
}

/// Wikipedia API settings from TOML (`[wiki]` section)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileWikiConfig {
    /// Query API endpoint
    pub api_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl FileWikiConfig {
    pub const DEFAULT_API_URL: &'static str = "https://en.wikipedia.org/w/api.php";

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for FileWikiConfig {
    fn default() -> Self {
        Self {
            api_url: Self::DEFAULT_API_URL.to_string(),
            timeout_secs: 5,
            user_agent: format!("wikibot/{} (Wikipedia lookup bot)", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.bot.name, "wikibot");
        assert_eq!(config.wiki.api_url, FileWikiConfig::DEFAULT_API_URL);
        assert_eq!(config.wiki.timeout_secs, 5);
        assert!(config.wiki.user_agent.starts_with("wikibot/"));
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[bot]
name = "encyclopedia-bot"

[wiki]
api_url = "https://de.wikipedia.org/w/api.php"
timeout_secs = 10
user_agent = "encyclopedia-bot/1.0"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.bot.name, "encyclopedia-bot");
        assert_eq!(config.wiki.api_url, "https://de.wikipedia.org/w/api.php");
        assert_eq!(config.wiki.timeout(), Duration::from_secs(10));
        assert_eq!(config.wiki.user_agent, "encyclopedia-bot/1.0");
    }

    #[test]
    fn test_deserialize_partial_config_keeps_defaults() {
        let toml_str = r#"
[wiki]
timeout_secs = 2
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.wiki.timeout_secs, 2);
        // Defaults should apply
        assert_eq!(config.bot.name, "wikibot");
        assert_eq!(config.wiki.api_url, FileWikiConfig::DEFAULT_API_URL);
    }
}
