use agentsmap_fs::{AgentsMapConfig, discover_dependency_files, discover_instruction_files};
use agentsmap_test_utils::TestRepo;
use pretty_assertions::assert_eq;

#[test]
fn test_discovers_nested_files_sorted() {
    let repo = TestRepo::new().with_instruction_files(&[
        "services/payments/AGENTS.md",
        "AGENTS.md",
        "frontend/AGENTS.md",
        "services/auth/AGENTS.md",
    ]);

    let files = discover_instruction_files(repo.root(), &AgentsMapConfig::default()).unwrap();

    assert_eq!(
        files,
        vec![
            "AGENTS.md",
            "frontend/AGENTS.md",
            "services/auth/AGENTS.md",
            "services/payments/AGENTS.md",
        ]
    );
}

#[test]
fn test_skips_builtin_and_hidden_dirs() {
    let repo = TestRepo::new().with_instruction_files(&[
        "AGENTS.md",
        "node_modules/pkg/AGENTS.md",
        "target/debug/AGENTS.md",
        ".venv/lib/AGENTS.md",
        ".idea/AGENTS.md",
        ".github/AGENTS.md",
    ]);

    let files = discover_instruction_files(repo.root(), &AgentsMapConfig::default()).unwrap();

    assert_eq!(files, vec![".github/AGENTS.md", "AGENTS.md"]);
}

#[test]
fn test_config_extends_skip_list_and_file_name() {
    let repo = TestRepo::new().with_instruction_files(&[
        "CLAUDE.md",
        "generated/CLAUDE.md",
        "docs/CLAUDE.md",
        "docs/AGENTS.md",
    ]);
    let config = AgentsMapConfig {
        instruction_file: "CLAUDE.md".to_string(),
        skip_dirs: vec!["generated".to_string()],
        ..AgentsMapConfig::default()
    };

    let files = discover_instruction_files(repo.root(), &config).unwrap();

    assert_eq!(files, vec!["CLAUDE.md", "docs/CLAUDE.md"]);
}

#[test]
fn test_ignores_similarly_named_files() {
    let repo = TestRepo::new().with_instruction_files(&["AGENTS.md", "docs/AGENTS.md.bak"]);
    repo.write_file("docs/agents.md", "lowercase");

    let files = discover_instruction_files(repo.root(), &AgentsMapConfig::default()).unwrap();

    assert_eq!(files, vec!["AGENTS.md"]);
}

#[test]
fn test_missing_root_is_an_error() {
    let repo = TestRepo::new();
    let result = discover_instruction_files(&repo.root().join("absent"), &AgentsMapConfig::default());
    assert!(result.is_err());
}

#[test]
fn test_dependency_files_plain_and_scoped() {
    let repo = TestRepo::new().with_instruction_files(&[
        "node_modules/left-pad/AGENTS.md",
        "node_modules/@acme/ui/AGENTS.md",
        "node_modules/@acme/core/docs/AGENTS.md",
        "node_modules/.cache/AGENTS.md",
    ]);
    repo.write_file("node_modules/no-docs/index.js", "");

    let files = discover_dependency_files(repo.root(), &AgentsMapConfig::default()).unwrap();

    assert_eq!(
        files,
        vec![
            "node_modules/@acme/ui/AGENTS.md",
            "node_modules/left-pad/AGENTS.md",
        ]
    );
}

#[test]
fn test_dependency_scan_without_node_modules() {
    let repo = TestRepo::new().with_instruction_files(&["AGENTS.md"]);
    let files = discover_dependency_files(repo.root(), &AgentsMapConfig::default()).unwrap();
    assert!(files.is_empty());
}
