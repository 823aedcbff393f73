//! [`TestRepo`] builder for agentsmap test scenarios.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A temporary source tree with helpers for writing instruction files and
/// a manifest, and for asserting on the result.
///
/// # Example
///
/// ```rust,no_run
/// use agentsmap_test_utils::repo::TestRepo;
///
/// let repo = TestRepo::new();
/// repo.write_file("AGENTS.md", "# Root conventions");
/// repo.write_file("services/auth/AGENTS.md", "# Auth rules");
/// repo.assert_file_exists("services/auth/AGENTS.md");
/// ```
pub struct TestRepo {
    temp_dir: TempDir,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `path` (relative to root), creating parents.
    pub fn write_file(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("TestRepo::write_file: failed to create {}: {e}", parent.display())
            });
        }
        fs::write(&full_path, content).unwrap_or_else(|e| {
            panic!("TestRepo::write_file: failed to write {}: {e}", full_path.display())
        });
    }

    /// Write a heading-only instruction file at each of `paths`.
    pub fn with_instruction_files(self, paths: &[&str]) -> Self {
        for path in paths {
            self.write_file(path, &format!("# Rules for {path}\n"));
        }
        self
    }

    /// Write `content` as the root `AGENTS.map.md`.
    pub fn with_map(self, content: &str) -> Self {
        self.write_file("AGENTS.map.md", content);
        self
    }

    /// Read a file relative to the root.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_file(&self, path: &str) -> String {
        let full_path = self.root().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Assert that `path` (relative to the repo root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read_file(path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }
}
