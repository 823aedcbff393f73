//! agentsmap CLI
//!
//! Discover, validate, and resolve AGENTS.md instruction files through the
//! root `AGENTS.map.md` manifest.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;
mod logging;

use std::path::Path;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialize logging: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Some(cmd) => execute_command(&root, cmd),
        None => {
            println!("{} AGENTS.map CLI", "agentsmap".green().bold());
            println!();
            println!("Run {} for available commands.", "agentsmap --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(root: &Path, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Init {
            non_interactive,
            deps,
        } => commands::run_init(root, non_interactive, deps),
        Commands::Validate { json } => commands::run_validate(root, json),
        Commands::Resolve { target, tag, json } => {
            commands::run_resolve(root, target.as_deref(), tag.as_deref(), json)
        }
        Commands::Discover { deps } => commands::run_discover(root, deps),
    }
}
