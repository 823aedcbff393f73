//! Locate and load the manifest file from a repository root.

use std::path::{Path, PathBuf};

use agentsmap_fs::{NormalizedPath, io};

use crate::codec;
use crate::error::{Error, Result};
use crate::model::Manifest;

/// Path of `map_file` inside `dir`, if it exists as a regular file.
pub fn locate(dir: &Path, map_file: &str) -> Option<PathBuf> {
    let candidate = dir.join(map_file);
    candidate.is_file().then_some(candidate)
}

/// Read and parse the manifest in `dir`.
///
/// Returns the manifest together with the path it was read from.
pub fn load(dir: &Path, map_file: &str) -> Result<(Manifest, PathBuf)> {
    let path = locate(dir, map_file).ok_or_else(|| Error::MapNotFound {
        dir: dir.to_path_buf(),
        map_file: map_file.to_string(),
    })?;

    let text = io::read_text(&NormalizedPath::new(&path))?;
    tracing::debug!(path = %path.display(), "Loaded manifest");
    Ok((codec::parse(&text), path))
}
