//! Purpose inference from an instruction file's first meaningful line.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// Purpose used when nothing meaningful can be read from a file.
pub const PURPOSE_PLACEHOLDER: &str = "TODO: Describe this file's purpose.";

const MAX_PURPOSE_CHARS: usize = 120;

static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#+\s+(.+)$").expect("Invalid heading regex"));

static GENERIC_HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^agents(\.md)?$").expect("Invalid generic heading regex"));

static RULE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-=*]{3,}$").expect("Invalid rule regex"));

/// Infer a purpose for the file at `path`.
///
/// Falls back to [`PURPOSE_PLACEHOLDER`] when the file cannot be read or
/// contains no meaningful line.
pub fn infer_purpose(path: &Path) -> String {
    let inferred = match std::fs::read_to_string(path) {
        Ok(content) => purpose_from_content(&content),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Cannot read file for purpose inference");
            None
        }
    };
    inferred.unwrap_or_else(|| PURPOSE_PLACEHOLDER.to_string())
}

/// First meaningful line of `content`: a non-generic heading's text, or the
/// first text line that is not a horizontal rule or HTML comment.
pub fn purpose_from_content(content: &str) -> Option<String> {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(caps) = HEADING_REGEX.captures(trimmed) {
            let heading = caps[1].trim();
            if GENERIC_HEADING_REGEX.is_match(heading) {
                continue;
            }
            return Some(heading.to_string());
        }

        if RULE_REGEX.is_match(trimmed) || trimmed.starts_with("<!--") {
            continue;
        }

        if trimmed.chars().count() > MAX_PURPOSE_CHARS {
            let truncated: String = trimmed.chars().take(MAX_PURPOSE_CHARS).collect();
            return Some(format!("{truncated}..."));
        }
        return Some(trimmed.to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Payments rules\n\nMore text", Some("Payments rules"))]
    #[case("# AGENTS\n## Auth service\n", Some("Auth service"))]
    #[case("# agents.md\n\nUse strict mode.", Some("Use strict mode."))]
    #[case("---\n<!-- generated -->\nPlain first line\n", Some("Plain first line"))]
    #[case("\n\n   \n", None)]
    #[case("# AGENTS.md\n***\n", None)]
    fn infers_first_meaningful_line(#[case] content: &str, #[case] expected: Option<&str>) {
        assert_eq!(purpose_from_content(content).as_deref(), expected);
    }

    #[test]
    fn long_lines_are_truncated() {
        let line = "x".repeat(200);
        let purpose = purpose_from_content(&line).unwrap();
        assert_eq!(purpose.len(), MAX_PURPOSE_CHARS + 3);
        assert!(purpose.ends_with("..."));
    }

    #[test]
    fn unreadable_file_yields_placeholder() {
        let temp = tempfile::TempDir::new().unwrap();
        assert_eq!(infer_purpose(&temp.path().join("missing.md")), PURPOSE_PLACEHOLDER);
    }
}
