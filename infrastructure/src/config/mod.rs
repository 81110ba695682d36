//! Configuration file loading for wikibot
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./wikibot.toml` or `./.wikibot.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/wikibot/config.toml`
//! 4. Fallback: `~/.config/wikibot/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileBotConfig, FileConfig, FileWikiConfig};
pub use loader::ConfigLoader;
