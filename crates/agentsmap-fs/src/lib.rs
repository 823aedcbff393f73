//! Filesystem layer for agentsmap
//!
//! Provides forward-slash path normalization, atomic I/O, project
//! configuration loading, and discovery of instruction files on disk.

pub mod config;
pub mod constants;
pub mod discovery;
pub mod error;
pub mod io;
pub mod path;
pub mod purpose;

pub use config::{AgentsMapConfig, ConfigStore};
pub use constants::{CONFIG_FILENAME, INSTRUCTION_FILENAME, MAP_FILENAME, SKIP_DIRS};
pub use discovery::{discover_dependency_files, discover_instruction_files};
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use purpose::{PURPOSE_PLACEHOLDER, infer_purpose};
