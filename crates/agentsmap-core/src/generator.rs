//! Build new manifests from discovered instruction files.

use agentsmap_fs::NormalizedPath;

use crate::model::{Entry, Manifest, Priority};

/// Scope for an entry that declares none: everything for a root-level
/// file, otherwise everything below the file's directory.
pub fn default_scope(path: &str) -> Vec<String> {
    match NormalizedPath::from(path).parent_dir() {
        Some(dir) => vec![format!("{dir}/**")],
        None => vec!["**".to_string()],
    }
}

/// Input for one generated entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEntry {
    pub path: String,
    pub purpose: String,
    pub priority: Option<Priority>,
    pub last_modified: Option<String>,
    pub owners: Vec<String>,
    pub tags: Vec<String>,
}

impl NewEntry {
    pub fn new(path: impl Into<String>, purpose: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            purpose: purpose.into(),
            ..Self::default()
        }
    }
}

/// Create a manifest with one defaulted-scope entry per input, in order.
///
/// `normal` priority and empty owner/tag lists are left out so the entry
/// only carries metadata that changes behaviour or display.
pub fn create_map(entries: impl IntoIterator<Item = NewEntry>) -> Manifest {
    let entries = entries
        .into_iter()
        .map(|new| Entry {
            scope: default_scope(&new.path),
            path: new.path,
            purpose: new.purpose,
            priority: new
                .priority
                .filter(|p| *p != Priority::Normal)
                .map(Into::into),
            last_modified: new.last_modified,
            last_reviewed: None,
            owners: (!new.owners.is_empty()).then_some(new.owners),
            tags: (!new.tags.is_empty()).then_some(new.tags),
        })
        .collect();
    Manifest::new(entries)
}
