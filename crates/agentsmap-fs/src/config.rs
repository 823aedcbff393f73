//! Project configuration loading
//!
//! `ConfigStore` is format-agnostic: the file extension picks the
//! deserializer. `AgentsMapConfig` is the optional `.agentsmap.toml` at the
//! repository root.

use std::path::Path;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::constants::{ALLOWED_HIDDEN_DIRS, CONFIG_FILENAME, INSTRUCTION_FILENAME, MAP_FILENAME};
use crate::{Error, NormalizedPath, Result, io};

/// Format-agnostic configuration store.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let content = io::read_text(path)?;
        let extension = path.extension().unwrap_or("");

        match extension.to_lowercase().as_str() {
            "toml" => toml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_native(),
                format: "TOML".into(),
                message: e.to_string(),
            }),
            "json" => serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_native(),
                format: "JSON".into(),
                message: e.to_string(),
            }),
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_native(),
                format: "YAML".into(),
                message: e.to_string(),
            }),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }
}

fn default_map_file() -> String {
    MAP_FILENAME.to_string()
}

fn default_instruction_file() -> String {
    INSTRUCTION_FILENAME.to_string()
}

fn default_allow_hidden_dirs() -> Vec<String> {
    ALLOWED_HIDDEN_DIRS.iter().map(|s| s.to_string()).collect()
}

/// Project settings for discovery and manifest lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentsMapConfig {
    /// Manifest file name at the repository root
    #[serde(default = "default_map_file")]
    pub map_file: String,

    /// Instruction file name discovery looks for
    #[serde(default = "default_instruction_file")]
    pub instruction_file: String,

    /// Directory names skipped in addition to the built-in list
    #[serde(default)]
    pub skip_dirs: Vec<String>,

    /// Dot-directories that are still scanned
    #[serde(default = "default_allow_hidden_dirs")]
    pub allow_hidden_dirs: Vec<String>,

    /// Also scan installed packages under `node_modules`
    #[serde(default)]
    pub include_dependencies: bool,
}

impl Default for AgentsMapConfig {
    fn default() -> Self {
        Self {
            map_file: default_map_file(),
            instruction_file: default_instruction_file(),
            skip_dirs: Vec::new(),
            allow_hidden_dirs: default_allow_hidden_dirs(),
            include_dependencies: false,
        }
    }
}

impl AgentsMapConfig {
    /// Load `.agentsmap.toml` from `root`, falling back to defaults when the
    /// file does not exist.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILENAME);
        if !path.is_file() {
            tracing::debug!(?path, "No project config, using defaults");
            return Ok(Self::default());
        }
        tracing::debug!(?path, "Loading project config");
        ConfigStore::new().load(&NormalizedPath::new(path))
    }
}
