//! Discovery of instruction files on disk.
//!
//! Produces sorted, `/`-separated paths relative to the repository root.
//! These feed `init` (new entries) and the validator (known files).

use std::fs;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::config::AgentsMapConfig;
use crate::constants::{DEPENDENCY_DIR, SKIP_DIRS};
use crate::{Error, NormalizedPath, Result};

/// Recursively scan `root` for files named `config.instruction_file`.
///
/// Skips the built-in skip-list, `config.skip_dirs`, and every hidden
/// directory not listed in `config.allow_hidden_dirs`. Unreadable
/// directories are logged and skipped. Symlinks are not followed.
pub fn discover_instruction_files(root: &Path, config: &AgentsMapConfig) -> Result<Vec<String>> {
    if !root.is_dir() {
        return Err(Error::io(
            root,
            std::io::Error::new(std::io::ErrorKind::NotFound, "root is not a directory"),
        ));
    }

    let mut results = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry, config));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unreadable path during discovery");
                continue;
            }
        };
        if !entry.file_type().is_file() || entry.file_name() != config.instruction_file.as_str() {
            continue;
        }
        let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let rel = NormalizedPath::new(rel).into_string();
        tracing::debug!(path = %rel, "Discovered instruction file");
        results.push(rel);
    }

    results.sort();
    Ok(results)
}

fn is_skipped_dir(entry: &DirEntry, config: &AgentsMapConfig) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    let name: &str = &name;
    if config.allow_hidden_dirs.iter().any(|d| d == name) {
        return false;
    }
    let skipped = SKIP_DIRS.contains(&name)
        || config.skip_dirs.iter().any(|d| d == name)
        || name.starts_with('.');
    if skipped {
        tracing::debug!(dir = %entry.path().display(), "Skipping directory");
    }
    skipped
}

/// Scan installed packages for a top-level instruction file.
///
/// Only `node_modules/<pkg>/` and `node_modules/@scope/<pkg>/` roots are
/// checked; packages are not searched recursively.
pub fn discover_dependency_files(root: &Path, config: &AgentsMapConfig) -> Result<Vec<String>> {
    let modules_dir = root.join(DEPENDENCY_DIR);
    let mut results = Vec::new();
    if !modules_dir.is_dir() {
        return Ok(results);
    }

    for (name, path) in list_dirs(&modules_dir)? {
        if let Some(scope) = name.strip_prefix('@') {
            let scoped = match list_dirs(&path) {
                Ok(scoped) => scoped,
                Err(e) => {
                    tracing::warn!(scope, error = %e, "Skipping unreadable package scope");
                    continue;
                }
            };
            for (pkg, pkg_path) in scoped {
                let rel = format!("{DEPENDENCY_DIR}/{name}/{pkg}");
                check_package(&pkg_path, &rel, config, &mut results);
            }
        } else if !name.starts_with('.') {
            let rel = format!("{DEPENDENCY_DIR}/{name}");
            check_package(&path, &rel, config, &mut results);
        }
    }

    results.sort();
    Ok(results)
}

fn list_dirs(dir: &Path) -> Result<Vec<(String, std::path::PathBuf)>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    Ok(entries
        .flatten()
        .filter(|e| e.file_type().is_ok_and(|t| t.is_dir()))
        .map(|e| (e.file_name().to_string_lossy().into_owned(), e.path()))
        .collect())
}

fn check_package(pkg_dir: &Path, rel: &str, config: &AgentsMapConfig, results: &mut Vec<String>) {
    if pkg_dir.join(&config.instruction_file).is_file() {
        results.push(format!("{rel}/{}", config.instruction_file));
    }
}
