//! Manifest codec: the line-oriented `AGENTS.map.md` format.
//!
//! ```text
//! - Path: /services/auth/AGENTS.md
//!   - Purpose: Auth service rules.
//!   - Applies to: /services/auth/**
//!   - Priority: high
//!   - Last modified: 2026-02-20
//!   - Owners: @security-team
//!   - Tags: backend, security
//!   - Last reviewed: 2026-02-21
//! ```
//!
//! Parsing is permissive: each line is classified on its own, field lines
//! populate the entry opened by the most recent `- Path:` line, and every
//! other line (headings, prose, blank lines) is ignored. `parse` never
//! fails; at worst it yields entries with empty or defaulted fields.

use std::sync::LazyLock;

use regex::Regex;

use crate::generator::default_scope;
use crate::model::{Entry, Manifest, Priority, PriorityValue};

/// `- <Key>: <value>` on a trimmed line. The key is the shortest run of
/// letters and spaces before the first `:` that is followed by whitespace.
static KEY_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-\s+([A-Za-z][A-Za-z\s]*?):\s+(.+)$").expect("Invalid key line regex")
});

const PREAMBLE: &[&str] = &[
    "# AGENTS.map",
    "",
    "This file lists where nested AGENTS.md files live and what they're for.",
    "The AGENTS.md files themselves are authoritative for their subtrees.",
    "",
    "## Entries",
    "",
];

/// Recognized field keys below a `- Path:` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKey {
    Purpose,
    AppliesTo,
    Priority,
    LastModified,
    Owners,
    Tags,
    LastReviewed,
}

/// Classification of a single manifest line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    /// `- Path: <value>`; carries the raw value
    NewEntry(&'a str),
    Field(FieldKey, &'a str),
    Ignored,
}

pub(crate) fn classify_line(line: &str) -> Line<'_> {
    let Some(caps) = KEY_LINE_REGEX.captures(line.trim()) else {
        return Line::Ignored;
    };
    let (Some(key), Some(value)) = (caps.get(1), caps.get(2)) else {
        return Line::Ignored;
    };
    let value = value.as_str().trim();

    let key = key
        .as_str()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase();

    match key.as_str() {
        "path" => Line::NewEntry(value),
        "purpose" => Line::Field(FieldKey::Purpose, value),
        "applies to" => Line::Field(FieldKey::AppliesTo, value),
        "priority" => Line::Field(FieldKey::Priority, value),
        "last modified" => Line::Field(FieldKey::LastModified, value),
        "owner" | "owners" => Line::Field(FieldKey::Owners, value),
        "tag" | "tags" => Line::Field(FieldKey::Tags, value),
        "last reviewed" => Line::Field(FieldKey::LastReviewed, value),
        _ => Line::Ignored,
    }
}

/// Fields accumulated for the entry currently being read.
#[derive(Debug, Default)]
struct PendingEntry {
    path: String,
    scope: Option<Vec<String>>,
    purpose: Option<String>,
    priority: Option<PriorityValue>,
    last_modified: Option<String>,
    last_reviewed: Option<String>,
    owners: Option<Vec<String>>,
    tags: Option<Vec<String>>,
}

impl PendingEntry {
    fn new(raw_path: &str) -> Self {
        let path = raw_path.strip_prefix('/').unwrap_or(raw_path).trim();
        Self {
            path: path.to_string(),
            ..Self::default()
        }
    }

    fn apply(&mut self, key: FieldKey, value: &str) {
        match key {
            FieldKey::Purpose => self.purpose = Some(value.to_string()),
            FieldKey::AppliesTo => {
                self.scope = split_list(value, |token| token.strip_prefix('/').unwrap_or(token))
            }
            FieldKey::Priority => self.priority = parse_priority(value),
            FieldKey::LastModified => self.last_modified = Some(value.to_string()),
            FieldKey::Owners => self.owners = split_list(value, |token| token),
            FieldKey::Tags => self.tags = split_list(value, |token| token),
            FieldKey::LastReviewed => self.last_reviewed = Some(value.to_string()),
        }
    }

    fn finish(self) -> Entry {
        let scope = self.scope.unwrap_or_else(|| default_scope(&self.path));
        Entry {
            path: self.path,
            scope,
            purpose: self.purpose.unwrap_or_default(),
            priority: self.priority,
            last_modified: self.last_modified,
            last_reviewed: self.last_reviewed,
            owners: self.owners,
            tags: self.tags,
        }
    }
}

/// Comma-separated tokens, trimmed, with empty tokens dropped. An empty
/// result counts as "field absent".
fn split_list(value: &str, normalize: impl Fn(&str) -> &str) -> Option<Vec<String>> {
    let tokens: Vec<String> = value
        .split(',')
        .map(|token| normalize(token.trim()).trim())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();
    (!tokens.is_empty()).then_some(tokens)
}

/// `normal` is collapsed to absent so explicit and implicit defaults
/// compare equal.
fn parse_priority(value: &str) -> Option<PriorityValue> {
    match value.parse::<Priority>() {
        Ok(Priority::Normal) => None,
        Ok(priority) => Some(PriorityValue::Known(priority)),
        Err(_) => {
            tracing::debug!(value, "Keeping unrecognized priority verbatim");
            Some(PriorityValue::Unrecognized(value.to_string()))
        }
    }
}

/// Parse manifest text into a [`Manifest`].
///
/// # Example
///
/// ```
/// use agentsmap_core::codec::parse;
///
/// let manifest = parse("- Path: /services/auth/AGENTS.md\n  - Purpose: Auth rules.\n");
/// assert_eq!(manifest.entries[0].path, "services/auth/AGENTS.md");
/// assert_eq!(manifest.entries[0].scope, vec!["services/auth/**"]);
/// ```
pub fn parse(text: &str) -> Manifest {
    let mut entries = Vec::new();
    let mut current: Option<PendingEntry> = None;

    for line in text.lines() {
        match classify_line(line) {
            Line::NewEntry(raw_path) => {
                flush(current.take(), &mut entries);
                current = Some(PendingEntry::new(raw_path));
            }
            Line::Field(key, value) => {
                if let Some(pending) = current.as_mut() {
                    pending.apply(key, value);
                }
            }
            Line::Ignored => {}
        }
    }
    flush(current, &mut entries);

    tracing::debug!(entries = entries.len(), "Parsed manifest");
    Manifest::new(entries)
}

fn flush(pending: Option<PendingEntry>, entries: &mut Vec<Entry>) {
    if let Some(pending) = pending.filter(|p| !p.path.is_empty()) {
        entries.push(pending.finish());
    }
}

/// Serialize a [`Manifest`] to manifest text.
///
/// Optional fields are written only when present; priority only when it is
/// not `normal`. Implicit default scopes are written out literally.
pub fn serialize(manifest: &Manifest) -> String {
    let mut lines: Vec<String> = PREAMBLE.iter().map(|s| s.to_string()).collect();

    for entry in &manifest.entries {
        lines.push(format!("- Path: /{}", entry.path));
        lines.push(format!("  - Purpose: {}", entry.purpose));
        let scope: Vec<String> = entry.scope.iter().map(|s| format!("/{s}")).collect();
        lines.push(format!("  - Applies to: {}", scope.join(", ")));
        if let Some(priority) = entry
            .priority
            .as_ref()
            .filter(|p| **p != PriorityValue::Known(Priority::Normal))
        {
            lines.push(format!("  - Priority: {priority}"));
        }
        if let Some(date) = &entry.last_modified {
            lines.push(format!("  - Last modified: {date}"));
        }
        if let Some(owners) = entry.owners.as_ref().filter(|o| !o.is_empty()) {
            lines.push(format!("  - Owners: {}", owners.join(", ")));
        }
        if let Some(tags) = entry.tags.as_ref().filter(|t| !t.is_empty()) {
            lines.push(format!("  - Tags: {}", tags.join(", ")));
        }
        if let Some(date) = &entry.last_reviewed {
            lines.push(format!("  - Last reviewed: {date}"));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
