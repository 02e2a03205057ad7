//! Support Copilot - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use support_copilot::{
    cli::{Args, Commands, Verbosity},
    config::Config,
    repl::{ReplConfig, ReplSession},
    telemetry, ConversationMemory,
};

/// Pick the verbosity: explicit flags win over the config file
fn resolve_verbosity(args: &Args, config: &Config) -> Verbosity {
    if args.quiet || args.verbose > 0 {
        args.verbosity()
    } else {
        Verbosity::from_config(&config.display.default_verbosity).unwrap_or(Verbosity::Normal)
    }
}

fn run_extract(text: &[String], summary: bool, config: &Config) -> Result<()> {
    let mut memory = ConversationMemory::new();
    memory.extract_entities(&text.join(" "));

    if summary {
        println!("{}", memory.summary_with_window(config.memory.summary_window));
    } else {
        println!("{}", serde_json::to_string_pretty(&memory.snapshot())?);
    }
    Ok(())
}

fn run_prompt(text: &[String], config: &Config) -> Result<()> {
    let mut memory = ConversationMemory::new();
    memory.extract_entities(&text.join(" "));
    let summary = memory.summary_with_window(config.memory.summary_window);
    println!("{}", support_copilot::copilot::prompt::build_system_prompt(&summary));
    Ok(())
}

fn run_repl(config: &Config) -> Result<()> {
    let repl_config = ReplConfig {
        history_file: Some(config.history_file()),
        summary_window: config.memory.summary_window,
    };

    let mut repl = ReplSession::new(&repl_config)?;
    repl.show_welcome(env!("CARGO_PKG_VERSION"));
    repl.run()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.clone())?;
    let verbosity = resolve_verbosity(&args, &config);

    if !config.display.color_output {
        colored::control::set_override(false);
    }
    telemetry::init(verbosity, config.display.color_output);

    match args.command() {
        Commands::Start => run_repl(&config),
        Commands::Extract { text, summary } => run_extract(&text, summary, &config),
        Commands::Prompt { text } => run_prompt(&text, &config),
        Commands::Config => {
            println!("{}", "Effective configuration:".bold());
            println!("{}", config.to_toml()?);
            Ok(())
        }
    }
}
