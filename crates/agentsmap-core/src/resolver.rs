//! Resolve which entries apply to a target path or tag set.
//!
//! Results are ordered by priority rank, then (for paths) by specificity,
//! both descending. Ties keep manifest order. An empty result means
//! nothing applies; it is not an error.

use agentsmap_fs::NormalizedPath;

use crate::model::{Entry, Manifest};
use crate::pattern;
use crate::specificity;

/// One entry that applies to a resolution target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'a> {
    pub entry: &'a Entry,
    /// The scope pattern that matched, or `tag:<tag>` for tag matches
    pub matched_pattern: String,
    pub specificity: u32,
}

/// Entries whose scope matches `target`, most important first.
///
/// The target is normalized (`\` to `/`, one leading `/` stripped). Each
/// entry contributes at most one match: its first scope pattern, in
/// declaration order, that matches.
pub fn resolve_by_path<'a>(manifest: &'a Manifest, target: &str) -> Vec<Match<'a>> {
    let target = NormalizedPath::relative(target);

    let mut matches: Vec<Match<'a>> = manifest
        .entries
        .iter()
        .filter_map(|entry| {
            let matched = entry
                .scope
                .iter()
                .find(|p| pattern::matches(p, target.as_str()))?;
            tracing::debug!(entry = %entry.path, pattern = %matched, target = %target, "Scope matched");
            Some(Match {
                entry,
                matched_pattern: matched.clone(),
                specificity: specificity::score(matched),
            })
        })
        .collect();

    // sort_by is stable, so equal keys keep manifest order
    matches.sort_by(|a, b| {
        b.entry
            .priority()
            .rank()
            .cmp(&a.entry.priority().rank())
            .then(b.specificity.cmp(&a.specificity))
    });
    matches
}

/// Entries carrying any of `tags` (case-insensitive), ordered by priority.
///
/// The synthetic pattern names the first requested tag that hit.
/// Specificity is always 0.
pub fn resolve_by_tag<'a, S: AsRef<str>>(manifest: &'a Manifest, tags: &[S]) -> Vec<Match<'a>> {
    let requested: Vec<String> = tags.iter().map(|t| t.as_ref().to_lowercase()).collect();

    let mut matches: Vec<Match<'a>> = manifest
        .entries
        .iter()
        .filter_map(|entry| {
            let entry_tags: Vec<String> = entry
                .tags
                .as_ref()?
                .iter()
                .map(|t| t.to_lowercase())
                .collect();
            let hit = requested.iter().find(|t| entry_tags.contains(t))?;
            Some(Match {
                entry,
                matched_pattern: format!("tag:{hit}"),
                specificity: 0,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.entry.priority().rank().cmp(&a.entry.priority().rank()));
    matches
}
