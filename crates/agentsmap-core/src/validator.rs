//! Manifest validation
//!
//! Every rule runs independently against every entry and all findings are
//! collected. The only short-circuit is an unsupported schema version,
//! which makes every other rule meaningless.

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use agentsmap_fs::NormalizedPath;
use regex::Regex;
use serde::Serialize;

use crate::model::{Entry, Manifest, PriorityValue, SCHEMA_VERSION};
use crate::pattern;

static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid date regex"));

/// Severity of a validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Makes the manifest invalid
    Error,
    /// Reported, never invalidates
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Path of the entry this finding is about, when entry-scoped
    #[serde(rename = "entryPath", skip_serializing_if = "Option::is_none")]
    pub entry_path: Option<String>,
}

impl Diagnostic {
    fn error(message: String, entry_path: Option<&str>) -> Self {
        Self {
            severity: Severity::Error,
            message,
            entry_path: entry_path.map(str::to_string),
        }
    }

    fn warning(message: String, entry_path: Option<&str>) -> Self {
        Self {
            severity: Severity::Warning,
            message,
            entry_path: entry_path.map(str::to_string),
        }
    }
}

/// Outcome of [`validate`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// True iff no diagnostic has [`Severity::Error`]
    pub valid: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        let valid = diagnostics.iter().all(|d| d.severity != Severity::Error);
        Self { valid, diagnostics }
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }
}

/// Validate `manifest` against the instruction files known to exist.
///
/// `known_files` holds relative POSIX paths. Entries pointing outside it
/// are errors; known files missing from the manifest are warnings.
pub fn validate(manifest: &Manifest, known_files: &BTreeSet<String>) -> ValidationResult {
    if manifest.schema_version != SCHEMA_VERSION {
        return ValidationResult::from_diagnostics(vec![Diagnostic::error(
            format!(
                "Unsupported schema_version {}; expected {SCHEMA_VERSION}.",
                manifest.schema_version
            ),
            None,
        )]);
    }

    let known: HashSet<String> = known_files
        .iter()
        .map(|f| NormalizedPath::from(f.as_str()).into_string())
        .collect();

    let mut diagnostics = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for entry in &manifest.entries {
        check_entry(entry, &known, &mut seen, &mut diagnostics);
    }

    for file in known_files {
        let normalized = NormalizedPath::from(file.as_str()).into_string();
        if !seen.contains(&normalized) {
            diagnostics.push(Diagnostic::warning(
                format!(
                    "Found instruction file at \"{file}\" that is not listed in the map. Consider adding it."
                ),
                None,
            ));
        }
    }

    let result = ValidationResult::from_diagnostics(diagnostics);
    tracing::debug!(
        valid = result.valid,
        diagnostics = result.diagnostics.len(),
        "Validated manifest"
    );
    result
}

fn check_entry(
    entry: &Entry,
    known: &HashSet<String>,
    seen: &mut HashSet<String>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let path = entry.path.as_str();
    let has_path = !path.trim().is_empty();

    if !has_path {
        diagnostics.push(Diagnostic::error(
            "Entry is missing required field \"path\".".to_string(),
            None,
        ));
    }

    let label = Some(path);

    if entry.scope.is_empty() {
        diagnostics.push(Diagnostic::error(
            format!("Entry \"{path}\": missing or empty required field \"scope\"."),
            label,
        ));
    }

    if entry.purpose.trim().is_empty() {
        diagnostics.push(Diagnostic::error(
            format!("Entry \"{path}\": missing required field \"purpose\"."),
            label,
        ));
    }

    if has_path {
        let normalized = NormalizedPath::from(path);

        if normalized.has_parent_segment() {
            diagnostics.push(Diagnostic::error(
                format!("Entry \"{path}\": path must not contain \"..\" segments."),
                label,
            ));
        }

        if normalized.is_absolute() {
            diagnostics.push(Diagnostic::error(
                format!("Entry \"{path}\": path must not start with \"/\". Use relative POSIX paths."),
                label,
            ));
        }

        let normalized = normalized.into_string();
        if !known.contains(&normalized) {
            diagnostics.push(Diagnostic::error(
                format!("Entry \"{path}\": file does not exist in the repository."),
                label,
            ));
        }

        if !seen.insert(normalized) {
            diagnostics.push(Diagnostic::error(
                format!("Duplicate entry for path \"{path}\"."),
                label,
            ));
        }
    }

    if let Some(date) = entry
        .last_reviewed
        .as_deref()
        .filter(|d| !DATE_REGEX.is_match(d))
    {
        diagnostics.push(Diagnostic::warning(
            format!("Entry \"{path}\": last_reviewed \"{date}\" is not in YYYY-MM-DD format."),
            label,
        ));
    }

    if let Some(PriorityValue::Unrecognized(raw)) = &entry.priority {
        diagnostics.push(Diagnostic::warning(
            format!(
                "Entry \"{path}\": unrecognized priority \"{raw}\"; expected critical, high, normal or low."
            ),
            label,
        ));
    }

    for scope in &entry.scope {
        if let Err(e) = pattern::compile(scope) {
            diagnostics.push(Diagnostic::warning(
                format!("Entry \"{path}\": scope pattern \"{scope}\" is not a valid glob ({e})."),
                label,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn known(files: &[&str]) -> BTreeSet<String> {
        files.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_clean_manifest_is_valid() {
        let manifest = Manifest::new(vec![Entry::new("AGENTS.md", ["**"], "Root.")]);

        let result = validate(&manifest, &known(&["AGENTS.md"]));

        assert!(result.valid);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_unsupported_schema_version_short_circuits() {
        let mut manifest = Manifest::new(vec![Entry::new("", Vec::<String>::new(), "")]);
        manifest.schema_version = 2;

        let result = validate(&manifest, &known(&["AGENTS.md"]));

        assert!(!result.valid);
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(
            result.diagnostics[0].message,
            "Unsupported schema_version 2; expected 1."
        );
    }

    #[test]
    fn test_empty_path_skips_path_rules() {
        let manifest = Manifest::new(vec![Entry::new("", ["**"], "Orphan.")]);

        let result = validate(&manifest, &known(&[]));

        let messages: Vec<&str> = result.errors().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["Entry is missing required field \"path\"."]);
        assert_eq!(result.diagnostics[0].entry_path, None);
    }

    #[test]
    fn test_rules_are_independent() {
        let manifest = Manifest::new(vec![Entry::new(
            "../outside/AGENTS.md",
            Vec::<String>::new(),
            "  ",
        )]);

        let result = validate(&manifest, &known(&[]));

        let messages: Vec<&str> = result.errors().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Entry \"../outside/AGENTS.md\": missing or empty required field \"scope\".",
                "Entry \"../outside/AGENTS.md\": missing required field \"purpose\".",
                "Entry \"../outside/AGENTS.md\": path must not contain \"..\" segments.",
                "Entry \"../outside/AGENTS.md\": file does not exist in the repository.",
            ]
        );
        assert!(
            result
                .diagnostics
                .iter()
                .all(|d| d.entry_path.as_deref() == Some("../outside/AGENTS.md"))
        );
    }

    #[test]
    fn test_absolute_path_is_rejected() {
        let manifest = Manifest::new(vec![Entry::new("/etc/AGENTS.md", ["**"], "Abs.")]);

        let result = validate(&manifest, &known(&["/etc/AGENTS.md"]));

        assert!(!result.valid);
        assert_eq!(
            result.errors().next().map(|d| d.message.as_str()),
            Some("Entry \"/etc/AGENTS.md\": path must not start with \"/\". Use relative POSIX paths.")
        );
    }

    #[test]
    fn test_malformed_review_date_and_unknown_priority_only_warn() {
        let mut entry = Entry::new("AGENTS.md", ["**"], "Root.").with_last_reviewed("21/02/2026");
        entry.priority = Some(PriorityValue::Unrecognized("urgent".to_string()));
        let manifest = Manifest::new(vec![entry]);

        let result = validate(&manifest, &known(&["AGENTS.md"]));

        assert!(result.valid);
        assert_eq!(result.warnings().count(), 2);
    }

    #[test]
    fn test_invalid_glob_warns() {
        let manifest = Manifest::new(vec![Entry::new("AGENTS.md", ["src/[oops"], "Root.")]);

        let result = validate(&manifest, &known(&["AGENTS.md"]));

        assert!(result.valid);
        let warning = result.warnings().next().expect("warning");
        assert!(warning.message.contains("\"src/[oops\" is not a valid glob"));
    }

    #[test]
    fn test_diagnostic_serializes_entry_path_in_camel_case() {
        let diagnostic = Diagnostic::error("boom".to_string(), Some("AGENTS.md"));
        let unscoped = Diagnostic::warning("hint".to_string(), None);

        let json = serde_json::to_value(&diagnostic).unwrap();
        assert_eq!(json["severity"], "error");
        assert_eq!(json["entryPath"], "AGENTS.md");

        let json = serde_json::to_value(&unscoped).unwrap();
        assert!(json.get("entryPath").is_none());
    }
}
