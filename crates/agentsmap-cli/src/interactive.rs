//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based input.

use std::path::Path;

use agentsmap_fs::{PURPOSE_PLACEHOLDER, infer_purpose};
use colored::Colorize;
use dialoguer::Input;

use crate::error::Result;

/// Prompt for the purpose of each file, offering the inferred text as the
/// default answer.
pub fn prompt_purposes(root: &Path, files: &[String]) -> Result<Vec<String>> {
    files
        .iter()
        .map(|file| {
            let inferred = infer_purpose(&root.join(file));
            prompt_purpose(file, suggested_default(&inferred))
        })
        .collect()
}

fn prompt_purpose(file: &str, default: &str) -> Result<String> {
    let answer: String = Input::new()
        .with_prompt(format!("{} - Purpose", file.cyan()))
        .default(default.to_string())
        .show_default(!default.is_empty())
        .allow_empty(true)
        .interact_text()?;
    Ok(choose_purpose(&answer, default))
}

/// The placeholder is never offered as a default.
fn suggested_default(inferred: &str) -> &str {
    if inferred == PURPOSE_PLACEHOLDER {
        ""
    } else {
        inferred
    }
}

/// The trimmed answer, else the default, else the placeholder.
fn choose_purpose(answer: &str, default: &str) -> String {
    let answer = answer.trim();
    let chosen = if !answer.is_empty() {
        answer
    } else if !default.is_empty() {
        default
    } else {
        PURPOSE_PLACEHOLDER
    };
    chosen.to_string()
}
