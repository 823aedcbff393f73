//! Validate command implementation

use std::collections::BTreeSet;
use std::path::Path;

use agentsmap_core::{Manifest, ValidationResult, load, validate};
use agentsmap_fs::NormalizedPath;
use colored::Colorize;

use crate::context::Context;
use crate::error::{CliError, Result};

/// Run the validate command
///
/// Fails with [`CliError::ValidationFailed`] when any error diagnostic is
/// reported, so CI can gate on the exit code.
pub fn run_validate(path: &Path, json: bool) -> Result<()> {
    let ctx = Context::load(path)?;
    let (manifest, _) = load(&ctx.root, ctx.map_file())?;

    let known = known_files(&ctx, &manifest)?;
    let result = validate(&manifest, &known);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "{} Validating {}...\n",
            "=>".blue().bold(),
            ctx.map_file().bold()
        );
        print_report(&result);
    }

    if result.valid {
        Ok(())
    } else {
        Err(CliError::ValidationFailed {
            errors: result.errors().count(),
        })
    }
}

/// Discovered files plus manifest paths that exist on disk.
///
/// Manifest paths are only probed when they stay inside the root.
fn known_files(ctx: &Context, manifest: &Manifest) -> Result<BTreeSet<String>> {
    let mut known: BTreeSet<String> = ctx.discover(false)?.all().into_iter().collect();

    for entry_path in manifest.paths() {
        let normalized = NormalizedPath::from(entry_path);
        if entry_path.is_empty() || normalized.is_absolute() || normalized.has_parent_segment() {
            continue;
        }
        if ctx.root.join(normalized.to_native()).is_file() {
            known.insert(normalized.into_string());
        }
    }
    Ok(known)
}

fn print_report(result: &ValidationResult) {
    let errors = result.errors().count();
    let warnings = result.warnings().count();

    for diagnostic in result.errors() {
        println!("  {}  {}", "error".red(), diagnostic.message);
    }
    for diagnostic in result.warnings() {
        println!("  {}   {}", "warn".yellow(), diagnostic.message);
    }

    if errors == 0 && warnings == 0 {
        println!("{} All checks passed. No issues found.", "OK".green().bold());
        return;
    }

    println!();
    if errors > 0 {
        println!("{}", format!("{errors} error(s)").red());
    }
    if warnings > 0 {
        println!("{}", format!("{warnings} warning(s)").yellow());
    }
}
