//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// agentsmap - Discover, validate, and resolve AGENTS.md instruction files
#[derive(Parser, Debug)]
#[command(name = "agentsmap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Repository root (defaults to the current directory)
    #[arg(long, global = true, env = "AGENTSMAP_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Scan for AGENTS.md files and generate an AGENTS.map.md file
    ///
    /// Examples:
    ///   agentsmap init                    # Prompt for each file's purpose
    ///   agentsmap init --non-interactive  # Infer purposes from file content
    ///   agentsmap init --deps             # Include node_modules packages
    Init {
        /// Skip prompts; use inferred or placeholder purposes
        #[arg(long)]
        non_interactive: bool,

        /// Include AGENTS.md files from installed dependencies (node_modules)
        #[arg(long)]
        deps: bool,
    },

    /// Validate the AGENTS.map.md file (exits 1 on errors)
    #[command(visible_alias = "check")]
    Validate {
        /// Output as JSON for CI/CD integration
        #[arg(long)]
        json: bool,
    },

    /// Show which AGENTS.md files apply to a path or tag
    ///
    /// Examples:
    ///   agentsmap resolve services/auth/login.ts
    ///   agentsmap resolve --tag backend,security
    ///   agentsmap resolve src/main.rs --json
    Resolve {
        /// Path to resolve, relative to the repository root
        target: Option<String>,

        /// Find entries by tag (comma-separated) instead of path
        #[arg(long, value_name = "TAGS")]
        tag: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Scan for all AGENTS.md files and show their listing status
    Discover {
        /// Include AGENTS.md files from installed dependencies (node_modules)
        #[arg(long)]
        deps: bool,
    },
}
