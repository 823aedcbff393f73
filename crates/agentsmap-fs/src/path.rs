//! Normalized path handling for manifest entries and resolution targets

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Manifest paths, scope patterns and resolution targets are all compared
/// in POSIX form, whatever platform produced them. Conversion back to a
/// platform-native path happens only at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes for internal storage.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self::from_text(&path_str)
    }

    fn from_text(text: &str) -> Self {
        Self {
            inner: text.replace('\\', "/"),
        }
    }

    /// Normalize a repository-relative path: backslashes become forward
    /// slashes and one leading `/` is stripped.
    pub fn relative(path: &str) -> Self {
        let normalized = Self::from_text(path);
        match normalized.inner.strip_prefix('/') {
            Some(rest) => Self {
                inner: rest.to_string(),
            },
            None => normalized,
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Consume the path, returning the normalized string.
    pub fn into_string(self) -> String {
        self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = segment.replace('\\', "/");
        if self.inner.is_empty() {
            return Self {
                inner: segment_normalized,
            };
        }
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self { inner: joined }
    }

    /// The POSIX `dirname` of a relative path, or `None` when the path has
    /// no directory component.
    pub fn parent_dir(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) if idx > 0 => Some(&trimmed[..idx]),
            _ => None,
        }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Iterate over the `/`-separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.inner.split('/')
    }

    /// True when any segment is exactly `..`.
    pub fn has_parent_segment(&self) -> bool {
        self.segments().any(|segment| segment == "..")
    }

    /// True when the path is rooted (`/...`).
    pub fn is_absolute(&self) -> bool {
        self.inner.starts_with('/')
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::from_text(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::from_text(&s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
