//! REPL (Read-Eval-Print Loop) for interactive chat
//!
//! Every non-empty line the user types is handed to the command
//! dispatcher, exactly as a chat host would hand it to the bot. `quit`
//! and `exit` leave the session.

use crate::output::console::ConsoleRenderer;
use crate::progress::reporter::LookupSpinner;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use wikibot_application::CommandDispatcher;
use wikibot_domain::AccessLevel;

/// Interactive chat REPL
pub struct ChatRepl {
    dispatcher: Arc<CommandDispatcher>,
    bot_name: String,
    show_progress: bool,
}

impl ChatRepl {
    pub fn new(dispatcher: Arc<CommandDispatcher>, bot_name: impl Into<String>) -> Self {
        Self {
            dispatcher,
            bot_name: bot_name.into(),
            show_progress: true,
        }
    }

    /// Set whether to show the lookup spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("wikibot").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();
        let prompt = format!("{}> ", self.bot_name);

        loop {
            let readline = rl.readline(&prompt);

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
                        println!("Bye!");
                        break;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    self.process_line(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            {:<20} Chat Mode     │", self.bot_name);
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Commands:");
        for command in self.dispatcher.commands().all() {
            println!("  {:<14} - {}", command.help, command.description);
        }
        println!("  {:<14} - Leave the session", "quit / exit");
        println!();
    }

    async fn process_line(&self, line: &str) {
        // The console user owns the bot, so every command is available.
        if self.show_progress {
            let spinner = Arc::new(LookupSpinner::new("Looking it up..."));
            let renderer = ConsoleRenderer::with_spinner(spinner.clone());
            self.dispatcher
                .dispatch(line, AccessLevel::Admin, &renderer)
                .await;
            spinner.finish();
        } else {
            let renderer = ConsoleRenderer::new();
            self.dispatcher
                .dispatch(line, AccessLevel::Admin, &renderer)
                .await;
        }
        println!();
    }
}
