//! REPL (Read-Eval-Print Loop) for interactive sessions
//!
//! Lines of conversation text are run through entity extraction; built-in
//! commands inspect the session's memory and the prompt it produces.

pub mod commands;
pub mod input;
pub mod session;

use colored::*;
use std::path::PathBuf;

use crate::errors::Result;
use crate::repl::commands::{parse, CommandHandler};
use crate::repl::input::InputHandler;
pub use crate::repl::session::CopilotSession;

/// REPL session coordinator
pub struct ReplSession {
    input_handler: InputHandler,
    command_handler: CommandHandler,
    session: CopilotSession,
}

impl ReplSession {
    /// Create new REPL session without persistent history
    pub fn new(config: &ReplConfig) -> Result<Self> {
        let input_handler = match &config.history_file {
            Some(path) => InputHandler::with_history(path.clone())?,
            None => InputHandler::new()?,
        };

        Ok(ReplSession {
            input_handler,
            command_handler: CommandHandler::new(),
            session: CopilotSession::new(config.summary_window),
        })
    }

    /// Show welcome banner
    pub fn show_welcome(&self, version: &str) {
        println!("\n{}", "=".repeat(60));
        println!("{}", format!("SUPPORT COPILOT v{}", version).bold().cyan());
        println!("{}", "=".repeat(60));
        println!("Type conversation text to remember tickets, orders and customers.");
        println!("Type {} to see conversation context.", "memory".cyan());
        println!("Type {} for commands, {} to exit.", "/help".cyan(), "quit".cyan());
        println!("{}", "-".repeat(60));
    }

    /// Handle one line of input
    ///
    /// Returns true if session should continue, false to exit
    pub fn handle_input(&mut self, input: &str) -> bool {
        if input.trim().is_empty() {
            return true;
        }
        self.command_handler.execute(parse(input), &mut self.session)
    }

    /// Read and handle lines until exit or EOF
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(line) = self.input_handler.read_line()? else {
                println!("\n{}", "Goodbye!".green());
                break;
            };
            if !self.handle_input(&line) {
                break;
            }
            self.input_handler.set_focus(self.session.focus().as_deref());
        }

        tracing::info!(
            session = %self.session.id(),
            turns = self.session.turns(),
            "session ended"
        );
        self.input_handler.save_history()
    }

    pub fn session(&self) -> &CopilotSession {
        &self.session
    }
}

/// Configuration for REPL mode
#[derive(Debug, Clone, Default)]
pub struct ReplConfig {
    pub history_file: Option<PathBuf>,
    pub summary_window: Option<usize>,
}
