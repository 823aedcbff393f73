//! Per-invocation repository context
//!
//! Resolves the project configuration once for the repository root so
//! every command discovers files and locates the manifest the same way.

use std::path::{Path, PathBuf};

use agentsmap_fs::{AgentsMapConfig, discover_dependency_files, discover_instruction_files};

use crate::error::Result;

/// Repository root plus its loaded configuration
#[derive(Debug, Clone)]
pub struct Context {
    pub root: PathBuf,
    pub config: AgentsMapConfig,
}

/// Instruction files found on disk, split by origin
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovered {
    /// Files inside the repository tree
    pub local: Vec<String>,
    /// Files shipped by installed packages
    pub dependencies: Vec<String>,
}

impl Discovered {
    /// All files, local first.
    pub fn all(&self) -> Vec<String> {
        self.local
            .iter()
            .chain(&self.dependencies)
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.local.is_empty() && self.dependencies.is_empty()
    }
}

impl Context {
    /// Load `.agentsmap.toml` from `root` (defaults when absent).
    pub fn load(root: &Path) -> Result<Self> {
        let config = AgentsMapConfig::load(root)?;
        tracing::debug!(root = %root.display(), map_file = %config.map_file, "Loaded context");
        Ok(Self {
            root: root.to_path_buf(),
            config,
        })
    }

    /// Name of the instruction files this repository uses
    pub fn instruction_file(&self) -> &str {
        &self.config.instruction_file
    }

    /// Name of the manifest file this repository uses
    pub fn map_file(&self) -> &str {
        &self.config.map_file
    }

    pub fn map_path(&self) -> PathBuf {
        self.root.join(&self.config.map_file)
    }

    /// Discover instruction files. Dependency packages are scanned when
    /// `deps` is set or the config enables them.
    pub fn discover(&self, deps: bool) -> Result<Discovered> {
        let local = discover_instruction_files(&self.root, &self.config)?;
        let dependencies = if deps || self.config.include_dependencies {
            discover_dependency_files(&self.root, &self.config)?
        } else {
            Vec::new()
        };
        Ok(Discovered {
            local,
            dependencies,
        })
    }
}
