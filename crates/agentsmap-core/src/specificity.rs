//! Specificity scoring for scope patterns.
//!
//! Each `/`-separated segment contributes by how literal it is:
//!
//! | Segment              | Score |
//! |----------------------|-------|
//! | `**`                 | 0     |
//! | `*`                  | 1     |
//! | partial wildcard     | 2     |
//! | literal              | 3     |
//!
//! The bare pattern `**` scores 0. A pattern extended by a literal segment
//! always outscores the pattern it extends.

use crate::pattern::normalize_pattern;

/// Score a glob pattern's precision; higher is more specific.
pub fn score(pattern: &str) -> u32 {
    let normalized = normalize_pattern(pattern);
    if normalized == "**" {
        return 0;
    }
    normalized.split('/').map(segment_score).sum()
}

fn segment_score(segment: &str) -> u32 {
    match segment {
        "**" => 0,
        "*" => 1,
        s if s.contains(['*', '?']) => 2,
        _ => 3,
    }
}
