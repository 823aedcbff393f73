//! Init command implementation
//!
//! Scans the tree for instruction files and writes a fresh manifest.

use std::path::Path;

use agentsmap_core::{Manifest, NewEntry, create_map, serialize};
use agentsmap_fs::{NormalizedPath, infer_purpose, io};
use colored::Colorize;

use crate::context::Context;
use crate::error::Result;
use crate::interactive;

/// Run the init command
///
/// Purposes are inferred from file content with `non_interactive`,
/// otherwise the user is prompted for each file.
pub fn run_init(path: &Path, non_interactive: bool, deps: bool) -> Result<()> {
    let ctx = Context::load(path)?;
    let instruction_file = ctx.instruction_file();

    println!(
        "{} Scanning for {} files...",
        "=>".blue().bold(),
        instruction_file
    );
    let discovered = ctx.discover(deps)?;

    if !discovered.dependencies.is_empty() {
        println!(
            "{} Found {} dependency {} file(s).",
            "=>".blue().bold(),
            discovered.dependencies.len(),
            instruction_file
        );
    }

    let files = discovered.all();
    if files.is_empty() {
        println!(
            "{} No {} files found in this directory tree.",
            "WARN".yellow().bold(),
            instruction_file
        );
        println!("Create an {instruction_file} file and run this command again.");
        return Ok(());
    }

    println!(
        "{} Found {} {} file(s):",
        "OK".green().bold(),
        files.len(),
        instruction_file
    );
    for file in &files {
        println!("  {}", file.cyan());
    }
    println!();

    let purposes = if non_interactive {
        files
            .iter()
            .map(|file| {
                let purpose = infer_purpose(&ctx.root.join(file));
                println!("  {} {} {}", file.cyan(), "->".dimmed(), purpose);
                purpose
            })
            .collect()
    } else {
        interactive::prompt_purposes(&ctx.root, &files)?
    };

    let manifest = build_manifest(&ctx.root, &files, purposes);
    write_manifest(&ctx, &manifest)?;

    println!(
        "\n{} Created {} with {} entries.",
        "OK".green().bold(),
        ctx.map_file().bold(),
        manifest.entries.len()
    );
    println!("Run `agentsmap validate` to check the generated file.");
    Ok(())
}

/// One entry per file, in order, stamped with the file's modification date.
pub fn build_manifest(root: &Path, files: &[String], purposes: Vec<String>) -> Manifest {
    create_map(files.iter().zip(purposes).map(|(file, purpose)| NewEntry {
        last_modified: io::modified_date(&root.join(file)),
        ..NewEntry::new(file.clone(), purpose)
    }))
}

fn write_manifest(ctx: &Context, manifest: &Manifest) -> Result<()> {
    let map_path = ctx.map_path();
    if map_path.exists() {
        println!(
            "\n{} {} already exists. Overwriting.",
            "WARN".yellow().bold(),
            ctx.map_file()
        );
    }
    io::write_text(&NormalizedPath::new(&map_path), &serialize(manifest))?;
    tracing::debug!(path = %map_path.display(), entries = manifest.entries.len(), "Wrote manifest");
    Ok(())
}
