//! Core of agentsmap: the `AGENTS.map.md` manifest and what can be asked of it
//!
//! This crate implements:
//!
//! - **Codec**: permissive line-oriented parsing and deterministic serialization
//! - **Specificity scoring**: how literal a scope pattern is
//! - **Resolution**: which entries apply to a path or a tag set, ranked
//! - **Validation**: structural and content diagnostics against files on disk
//! - **Generation**: new manifests from discovered instruction files
//!
//! # Architecture
//!
//! ```text
//!        agentsmap (CLI)
//!              |
//!        agentsmap-core
//!              |
//!        agentsmap-fs
//! ```
//!
//! Every operation is a free function over an immutable [`Manifest`]; only
//! [`load`] touches the filesystem.
//!
//! # Example
//!
//! ```
//! use agentsmap_core::{parse, resolve_by_path};
//!
//! let manifest = parse(
//!     "- Path: /AGENTS.md\n\
//!        - Purpose: Root.\n\
//!      - Path: /services/auth/AGENTS.md\n\
//!        - Purpose: Auth.\n",
//! );
//! let matches = resolve_by_path(&manifest, "services/auth/login.ts");
//! assert_eq!(matches[0].entry.path, "services/auth/AGENTS.md");
//! assert_eq!(matches[1].entry.path, "AGENTS.md");
//! ```

pub mod codec;
pub mod error;
pub mod generator;
pub mod loader;
pub mod model;
pub mod pattern;
pub mod resolver;
pub mod specificity;
pub mod validator;

pub use codec::{parse, serialize};
pub use error::{Error, Result};
pub use generator::{NewEntry, create_map, default_scope};
pub use loader::{load, locate};
pub use model::{Entry, Manifest, Priority, PriorityValue, SCHEMA_VERSION};
pub use resolver::{Match, resolve_by_path, resolve_by_tag};
pub use specificity::score;
pub use validator::{Diagnostic, Severity, ValidationResult, validate};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn error_map_not_found_displays_dir_and_file() {
        let error = Error::MapNotFound {
            dir: PathBuf::from("/work/repo"),
            map_file: "AGENTS.map.md".to_string(),
        };

        let display = error.to_string();
        assert!(display.contains("/work/repo"), "got: {display}");
        assert!(display.contains("AGENTS.map.md"), "got: {display}");
    }
}
