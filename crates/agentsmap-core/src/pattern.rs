//! Glob compilation for scope patterns.

use globset::{Glob, GlobBuilder, GlobMatcher};

/// Strip one leading `/` from a scope pattern.
pub fn normalize_pattern(pattern: &str) -> &str {
    pattern.strip_prefix('/').unwrap_or(pattern)
}

/// Compile a scope pattern. `*` and `?` never cross a `/`; `**` spans any
/// number of segments.
pub fn compile(pattern: &str) -> Result<GlobMatcher, globset::Error> {
    GlobBuilder::new(normalize_pattern(pattern))
        .literal_separator(true)
        .build()
        .map(|glob: Glob| glob.compile_matcher())
}

/// True when `pattern` matches the already-normalized `target`. Invalid
/// patterns never match.
pub fn matches(pattern: &str, target: &str) -> bool {
    match compile(pattern) {
        Ok(matcher) => matcher.is_match(target),
        Err(e) => {
            tracing::warn!(pattern, error = %e, "Ignoring invalid scope pattern");
            false
        }
    }
}
