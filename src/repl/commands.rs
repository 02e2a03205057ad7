//! Command handler for REPL built-in commands
//!
//! Slash commands plus the bare words `memory`, `quit`, `exit` and `bye`.
//! Anything else is conversation text.

use colored::*;

use crate::copilot::ToolRegistry;
use crate::memory::{EntityKind, ExtractedEntities};
use crate::repl::session::CopilotSession;

/// REPL input classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Memory,
    Context,
    Entities,
    Prompt,
    Tools,
    Status,
    Exit,
    Unknown { input: String },
    Text { input: String },
}

/// Parse a line of input
pub fn parse(input: &str) -> Command {
    let trimmed = input.trim();

    match trimmed.to_lowercase().as_str() {
        "quit" | "exit" | "bye" => return Command::Exit,
        "memory" => return Command::Memory,
        _ => {}
    }

    let Some(rest) = trimmed.strip_prefix('/') else {
        return Command::Text {
            input: trimmed.to_string(),
        };
    };

    match rest.split_whitespace().next().map(str::to_lowercase).as_deref() {
        Some("help") | Some("h") => Command::Help,
        Some("memory") | Some("m") => Command::Memory,
        Some("context") | Some("ctx") => Command::Context,
        Some("entities") => Command::Entities,
        Some("prompt") => Command::Prompt,
        Some("tools") => Command::Tools,
        Some("status") => Command::Status,
        Some("exit") | Some("quit") | Some("q") => Command::Exit,
        _ => Command::Unknown {
            input: trimmed.to_string(),
        },
    }
}

/// Executes commands against a session
pub struct CommandHandler {
    registry: ToolRegistry,
}

impl CommandHandler {
    pub fn new() -> Self {
        CommandHandler {
            registry: ToolRegistry::new(),
        }
    }

    /// Execute a command
    ///
    /// Returns true if REPL should continue, false if should exit
    pub fn execute(&self, command: Command, session: &mut CopilotSession) -> bool {
        match command {
            Command::Help => self.show_help(),
            Command::Memory => println!("\n{} {}", "Context:".bold(), session.summary()),
            Command::Context => println!("{}", render_current_context(session)),
            Command::Entities => println!("{}", render_entities(session)),
            Command::Prompt => println!("{}", session.system_prompt()),
            Command::Tools => self.show_tools(),
            Command::Status => self.show_status(session),
            Command::Exit => {
                println!("{}", "Thanks for using Support Copilot! Goodbye!".green());
                return false;
            }
            Command::Unknown { input } => {
                println!("{}", format!("Unknown command: {}", input).red());
                println!("Type {} for available commands", "/help".cyan());
            }
            Command::Text { input } => {
                if !input.is_empty() {
                    let added = session.ingest(&input);
                    println!("{}", render_added(&added));
                }
            }
        }
        true
    }

    fn show_help(&self) {
        println!("\n{}", "Available Commands:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        let commands = [
            ("/help, /h", "Show this help message"),
            ("/memory, memory", "Show the conversation context summary"),
            ("/context, /ctx", "Show the last fetched ticket/order/customer payloads"),
            ("/entities", "List remembered references by category"),
            ("/prompt", "Show the system prompt for the next turn"),
            ("/tools", "List tools available to the agent"),
            ("/status", "Show session status"),
            ("/exit, quit, bye", "Exit"),
        ];

        for (cmd, desc) in commands {
            println!("  {:<20} {}", cmd.green(), desc);
        }

        println!("\n{}", "Usage:".bold());
        println!("  - Type conversation text directly to extract tickets, orders and customers");
        println!("  - Press {} or type {} to exit", "Ctrl-D".cyan(), "quit".cyan());
        println!();
    }

    fn show_tools(&self) {
        println!("\n{}", format!("Tools ({}):", self.registry.len()).bold().cyan());
        for tool in self.registry.descriptors() {
            println!("  {:<22} {}", tool.name.green(), tool.description);
        }
        println!();
    }

    fn show_status(&self, session: &CopilotSession) {
        let references = session.memory().with(|memory| memory.len());
        println!("\n{}", "Session Status:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());
        println!("  Session:          {}", session.id().to_string().green());
        println!(
            "  Started:          {}",
            session.started_at().format("%Y-%m-%d %H:%M:%S UTC").to_string().green()
        );
        println!("  Duration:         {}", format!("{}s", session.duration_secs()).green());
        println!("  Turns:            {}", session.turns().to_string().green());
        println!("  References:       {}", references.to_string().green());
        println!();
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Describe the references a line added
pub fn render_added(added: &ExtractedEntities) -> String {
    if added.is_empty() {
        return "No new references.".to_string();
    }

    EntityKind::ALL
        .iter()
        .filter(|&&kind| !added.of(kind).is_empty())
        .map(|&kind| format!("New {}: {}", kind.label().to_lowercase(), added.of(kind).join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per category, empty ones marked
pub fn render_entities(session: &CopilotSession) -> String {
    EntityKind::ALL
        .iter()
        .map(|&kind| {
            let entries = session.entities(kind);
            let listed = if entries.is_empty() {
                "(none)".to_string()
            } else {
                entries.join(", ")
            };
            format!("{:<16} {}", format!("{}:", kind.label()), listed)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Last payloads per lookup category
pub fn render_current_context(session: &CopilotSession) -> String {
    let ctx = session.memory().context();
    if ctx.is_empty() {
        return "No lookups yet.".to_string();
    }

    [
        ("Last ticket", &ctx.last_ticket),
        ("Last order", &ctx.last_order),
        ("Last customer", &ctx.last_customer),
    ]
    .iter()
    .filter_map(|(label, payload)| payload.as_ref().map(|p| format!("{}:\n{}", label, p)))
    .collect::<Vec<_>>()
    .join("\n\n")
}
