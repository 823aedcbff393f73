//! Resolve command implementation
//!
//! Shows which instruction files apply to a path, or carry a tag.

use std::path::Path;

use agentsmap_core::{Match, Priority, PriorityValue, load, resolve_by_path, resolve_by_tag};
use colored::Colorize;
use serde::Serialize;

use crate::context::Context;
use crate::error::{CliError, Result};

/// JSON shape of one match
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MatchOutput<'a> {
    path: &'a str,
    purpose: &'a str,
    matched_pattern: &'a str,
    /// Omitted for tag matches
    #[serde(skip_serializing_if = "Option::is_none")]
    specificity: Option<u32>,
    priority: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    owners: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<&'a [String]>,
}

impl<'a> MatchOutput<'a> {
    fn new(m: &'a Match<'a>, with_specificity: bool) -> Self {
        let entry = m.entry;
        Self {
            path: &entry.path,
            purpose: &entry.purpose,
            matched_pattern: &m.matched_pattern,
            specificity: with_specificity.then_some(m.specificity),
            priority: entry
                .priority
                .as_ref()
                .map_or(Priority::Normal.as_str(), PriorityValue::as_str),
            owners: entry.owners.as_deref(),
            tags: entry.tags.as_deref(),
        }
    }
}

/// Run the resolve command
///
/// `tag` (comma-separated) switches to tag mode; otherwise `target` is
/// required.
pub fn run_resolve(path: &Path, target: Option<&str>, tag: Option<&str>, json: bool) -> Result<()> {
    let ctx = Context::load(path)?;
    let (manifest, _) = load(&ctx.root, ctx.map_file())?;

    if let Some(tag) = tag {
        let tags = split_tags(tag);
        let matches = resolve_by_tag(&manifest, &tags);

        if json {
            return print_json(&matches, false);
        }
        if matches.is_empty() {
            println!("{} No entries tagged \"{}\".", "WARN".yellow().bold(), tag);
            return Ok(());
        }

        println!(
            "{} {} entry(s) tagged {}:\n",
            "=>".blue().bold(),
            matches.len(),
            tag.bold()
        );
        for m in &matches {
            println!("{}\n", format_match(m));
        }
        return Ok(());
    }

    let target = target.ok_or_else(|| CliError::user("Provide a target path or use --tag."))?;
    let matches = resolve_by_path(&manifest, target);

    if json {
        return print_json(&matches, true);
    }
    if matches.is_empty() {
        println!(
            "{} No {} files apply to \"{}\".",
            "WARN".yellow().bold(),
            ctx.instruction_file(),
            target
        );
        return Ok(());
    }

    println!(
        "{} {} {} file(s) apply to {}:\n",
        "=>".blue().bold(),
        matches.len(),
        ctx.instruction_file(),
        target.bold()
    );
    for (i, m) in matches.iter().enumerate() {
        let label = if i == 0 {
            "(most specific)".green()
        } else {
            format!("(#{})", i + 1).dimmed()
        };
        println!("{label}");
        println!("{}\n", format_match(m));
    }
    Ok(())
}

/// Comma-separated tags, trimmed, empties dropped.
fn split_tags(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

fn print_json(matches: &[Match<'_>], with_specificity: bool) -> Result<()> {
    let output: Vec<MatchOutput<'_>> = matches
        .iter()
        .map(|m| MatchOutput::new(m, with_specificity))
        .collect();
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Human-readable block for one match. Priority is shown only when it is
/// not `normal`.
fn format_match(m: &Match<'_>) -> String {
    let entry = m.entry;
    let mut lines = vec![
        format!("  {}", entry.path.cyan()),
        format!("    Purpose: {}", entry.purpose),
        format!("    Matched pattern: {}", m.matched_pattern),
        format!("    Specificity: {}", m.specificity),
    ];
    if let Some(priority) = entry
        .priority
        .as_ref()
        .filter(|p| **p != PriorityValue::Known(Priority::Normal))
    {
        lines.push(format!("    Priority: {priority}"));
    }
    if let Some(date) = &entry.last_modified {
        lines.push(format!("    Last modified: {date}"));
    }
    if let Some(owners) = entry.owners.as_ref().filter(|o| !o.is_empty()) {
        lines.push(format!("    Owners: {}", owners.join(", ")));
    }
    if let Some(tags) = entry.tags.as_ref().filter(|t| !t.is_empty()) {
        lines.push(format!("    Tags: {}", tags.join(", ")));
    }
    lines.join("\n")
}
