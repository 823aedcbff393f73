//! Well-known file names and the discovery skip-list.

/// Manifest file name looked up at the repository root.
pub const MAP_FILENAME: &str = "AGENTS.map.md";

/// Instruction file name discovery looks for.
pub const INSTRUCTION_FILENAME: &str = "AGENTS.md";

/// Optional project configuration file at the repository root.
pub const CONFIG_FILENAME: &str = ".agentsmap.toml";

/// Directories that are never descended into during discovery.
pub const SKIP_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".hg",
    ".svn",
    "dist",
    "build",
    ".next",
    ".nuxt",
    "__pycache__",
    ".venv",
    "venv",
    ".tox",
    "vendor",
    ".bundle",
    "target",
    "coverage",
    ".cache",
    ".turbo",
];

/// Dot-directories that are scanned despite being hidden.
pub const ALLOWED_HIDDEN_DIRS: &[&str] = &[".github"];

/// Directory holding installed JavaScript dependencies.
pub const DEPENDENCY_DIR: &str = "node_modules";
