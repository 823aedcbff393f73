//! Discover command implementation
//!
//! Lists instruction files on disk and how they relate to the manifest.

use std::collections::HashSet;
use std::path::Path;

use agentsmap_core::{Manifest, load, locate};
use agentsmap_fs::infer_purpose;
use colored::Colorize;

use crate::context::Context;
use crate::error::Result;

/// Files partitioned against a manifest
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Listing {
    /// Discovered and listed
    pub listed: Vec<String>,
    /// Discovered but missing from the manifest
    pub unlisted: Vec<String>,
    /// Listed but not discovered
    pub stale: Vec<String>,
}

impl Listing {
    pub fn new(files: &[String], manifest: &Manifest) -> Self {
        let listed_paths: HashSet<&str> = manifest.paths().collect();
        let discovered: HashSet<&str> = files.iter().map(String::as_str).collect();

        let (listed, unlisted): (Vec<String>, Vec<String>) = files
            .iter()
            .cloned()
            .partition(|f| listed_paths.contains(f.as_str()));
        let stale: Vec<String> = manifest
            .paths()
            .filter(|p| !discovered.contains(p))
            .map(str::to_string)
            .collect();

        Self {
            listed,
            unlisted,
            stale,
        }
    }
}

/// Run the discover command
pub fn run_discover(path: &Path, deps: bool) -> Result<()> {
    let ctx = Context::load(path)?;
    let instruction_file = ctx.instruction_file();

    println!(
        "{} Scanning for {} files...\n",
        "=>".blue().bold(),
        instruction_file
    );
    let discovered = ctx.discover(deps)?;

    if !discovered.dependencies.is_empty() {
        println!(
            "{} Dependencies with {} ({}):\n",
            "=>".blue().bold(),
            instruction_file,
            discovered.dependencies.len()
        );
        for file in &discovered.dependencies {
            println!("  {} {}", "*".magenta(), file);
            println!("    {}", purpose_of(&ctx, file).dimmed());
        }
        println!();
    }

    let files = discovered.all();
    if files.is_empty() {
        println!("{} No {} files found.", "WARN".yellow().bold(), instruction_file);
        return Ok(());
    }

    if locate(&ctx.root, ctx.map_file()).is_none() {
        println!("Found {} {} file(s):\n", files.len(), instruction_file);
        for file in &files {
            println!("  {}", file.cyan());
            println!("    {}", purpose_of(&ctx, file).dimmed());
        }
        println!(
            "\nNo {} found. Run `agentsmap init` to create one.",
            ctx.map_file()
        );
        return Ok(());
    }

    let (manifest, _) = load(&ctx.root, ctx.map_file())?;
    let listing = Listing::new(&files, &manifest);
    print_listing(&ctx, &listing);
    Ok(())
}

fn print_listing(ctx: &Context, listing: &Listing) {
    let map_file = ctx.map_file();

    if !listing.listed.is_empty() {
        println!(
            "{}",
            format!("Listed in {} ({}):", map_file, listing.listed.len()).green()
        );
        for file in &listing.listed {
            println!("  {} {}", "+".green(), file);
        }
        println!();
    }

    if listing.unlisted.is_empty() {
        println!(
            "{} All {} files are listed in the map.",
            "OK".green().bold(),
            ctx.instruction_file()
        );
    } else {
        println!(
            "{}",
            format!("Not listed in {} ({}):", map_file, listing.unlisted.len()).yellow()
        );
        for file in &listing.unlisted {
            println!("  {} {}", "?".yellow(), file);
            println!(
                "    {}",
                format!("Suggested purpose: {}", purpose_of(ctx, file)).dimmed()
            );
        }
        println!("\nRun `agentsmap init` to regenerate the map, or manually add entries.");
    }

    if !listing.stale.is_empty() {
        println!();
        println!(
            "{}",
            format!("Stale entries in {map_file} (file missing):").red()
        );
        for path in &listing.stale {
            println!("  {} {}", "x".red(), path);
        }
    }
}

fn purpose_of(ctx: &Context, file: &str) -> String {
    infer_purpose(&ctx.root.join(file))
}
