//! In-memory manifest model
//!
//! A [`Manifest`] is built once per invocation, either by the codec or by
//! the generator, and is only read afterwards. Optional metadata is `None`
//! when absent rather than an empty string.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::Error;

/// The only schema version this crate understands.
pub const SCHEMA_VERSION: u32 = 1;

/// Ordering weight of an entry. Absent priority behaves as `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    #[default]
    Normal,
    Low,
}

impl Priority {
    /// Numeric rank used for ordering; higher sorts first.
    pub fn rank(self) -> u8 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Normal => 2,
            Self::Low => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Normal => "normal",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "normal" => Ok(Self::Normal),
            "low" => Ok(Self::Low),
            _ => Err(Error::InvalidPriority {
                value: s.to_string(),
            }),
        }
    }
}

/// A priority as written in the manifest.
///
/// Unknown values are kept verbatim so they survive re-serialization and
/// can be reported by the validator; they rank as `Normal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriorityValue {
    Known(Priority),
    Unrecognized(String),
}

impl PriorityValue {
    /// Priority used for ordering and display.
    pub fn effective(&self) -> Priority {
        match self {
            Self::Known(priority) => *priority,
            Self::Unrecognized(_) => Priority::Normal,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(priority) => priority.as_str(),
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<Priority> for PriorityValue {
    fn from(priority: Priority) -> Self {
        Self::Known(priority)
    }
}

impl fmt::Display for PriorityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PriorityValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One instruction file's metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Relative POSIX path of the instruction file
    pub path: String,
    /// Glob patterns this entry applies to, in declaration order
    pub scope: Vec<String>,
    /// Why and when to read the file
    pub purpose: String,
    pub priority: Option<PriorityValue>,
    pub last_modified: Option<String>,
    /// Expected as `YYYY-MM-DD`; checked by the validator only
    pub last_reviewed: Option<String>,
    pub owners: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

impl Entry {
    /// Entry with the required fields and no optional metadata.
    pub fn new(
        path: impl Into<String>,
        scope: impl IntoIterator<Item = impl Into<String>>,
        purpose: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            scope: scope.into_iter().map(Into::into).collect(),
            purpose: purpose.into(),
            priority: None,
            last_modified: None,
            last_reviewed: None,
            owners: None,
            tags: None,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_owners(mut self, owners: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.owners = Some(owners.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_last_reviewed(mut self, date: impl Into<String>) -> Self {
        self.last_reviewed = Some(date.into());
        self
    }

    /// Effective priority; absent counts as `Normal`.
    pub fn priority(&self) -> Priority {
        self.priority
            .as_ref()
            .map(PriorityValue::effective)
            .unwrap_or_default()
    }
}

/// The parsed root index of instruction files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub schema_version: u32,
    pub entries: Vec<Entry>,
}

impl Manifest {
    /// Manifest at the current schema version.
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry paths in manifest order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.path.as_str())
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
