//! End-to-end integration test for the vertical slice
//!
//! Exercises the complete flow across crates: discovery -> purpose
//! inference -> generation -> atomic write -> load -> validate -> resolve.

use std::collections::BTreeSet;

use agentsmap_core::{NewEntry, create_map, load, resolve_by_path, resolve_by_tag, serialize, validate};
use agentsmap_fs::{AgentsMapConfig, MAP_FILENAME, NormalizedPath, discover_instruction_files, infer_purpose, io};
use agentsmap_test_utils::TestRepo;
use pretty_assertions::assert_eq;

/// A monorepo with instruction files at several depths, plus noise that
/// discovery must skip.
fn setup_monorepo() -> TestRepo {
    let repo = TestRepo::new();
    repo.write_file("AGENTS.md", "# AGENTS\n\nUse conventional commits.\n");
    repo.write_file("services/auth/AGENTS.md", "# Auth service\n\nNever log tokens.\n");
    repo.write_file("services/payments/AGENTS.md", "---\n<!-- owner: payments -->\nPCI scope.\n");
    repo.write_file(".github/AGENTS.md", "# CI workflows\n");
    repo.write_file("node_modules/pkg/AGENTS.md", "# Vendored\n");
    repo.write_file("target/debug/AGENTS.md", "# Build output\n");
    repo.write_file(".idea/AGENTS.md", "# Editor\n");
    repo
}

#[test]
fn test_generate_validate_resolve() {
    let repo = setup_monorepo();
    let config = AgentsMapConfig::default();

    // Discover
    let files = discover_instruction_files(repo.root(), &config).unwrap();
    assert_eq!(
        files,
        vec![
            ".github/AGENTS.md",
            "AGENTS.md",
            "services/auth/AGENTS.md",
            "services/payments/AGENTS.md",
        ]
    );

    // Generate and write
    let manifest = create_map(files.iter().map(|file| {
        NewEntry::new(file.clone(), infer_purpose(&repo.root().join(file)))
    }));
    let map_path = NormalizedPath::new(repo.root().join(MAP_FILENAME));
    io::write_text(&map_path, &serialize(&manifest)).unwrap();
    repo.assert_file_contains(MAP_FILENAME, "- Path: /services/payments/AGENTS.md");

    // Load back
    let (loaded, path) = load(repo.root(), MAP_FILENAME).unwrap();
    assert_eq!(path, repo.root().join(MAP_FILENAME));
    assert_eq!(loaded, manifest);
    assert_eq!(loaded.entries[1].purpose, "Use conventional commits.");
    assert_eq!(loaded.entries[2].purpose, "Auth service");
    assert_eq!(loaded.entries[3].purpose, "PCI scope.");

    // Validate
    let known: BTreeSet<String> = files.iter().cloned().collect();
    let result = validate(&loaded, &known);
    assert!(result.valid, "diagnostics: {:?}", result.diagnostics);
    assert!(result.diagnostics.is_empty());

    // Resolve
    let matches = resolve_by_path(&loaded, "services/auth/handlers/login.ts");
    let paths: Vec<&str> = matches.iter().map(|m| m.entry.path.as_str()).collect();
    assert_eq!(paths, vec!["services/auth/AGENTS.md", "AGENTS.md"]);

    let ci = resolve_by_path(&loaded, ".github/workflows/ci.yml");
    assert_eq!(ci[0].entry.path, ".github/AGENTS.md");
}

#[test]
fn test_hand_edited_metadata_survives_and_drives_resolution() {
    let repo = setup_monorepo();
    repo.write_file(
        MAP_FILENAME,
        "# AGENTS.map\n\n\
         - Path: /AGENTS.md\n  - Purpose: Root.\n  - Applies to: /**\n  - Priority: critical\n\n\
         - Path: /services/auth/AGENTS.md\n  - Purpose: Auth.\n  - Tags: Security\n\n\
         - Path: /services/payments/AGENTS.md\n  - Purpose: Payments.\n  - Tags: security, pci\n  - Priority: high\n\n\
         - Path: /.github/AGENTS.md\n  - Purpose: CI.\n  - Last reviewed: last week\n",
    );

    let (manifest, _) = load(repo.root(), MAP_FILENAME).unwrap();

    // Critical root outranks the more specific auth entry
    let matches = resolve_by_path(&manifest, "services/auth/login.ts");
    let paths: Vec<&str> = matches.iter().map(|m| m.entry.path.as_str()).collect();
    assert_eq!(paths, vec!["AGENTS.md", "services/auth/AGENTS.md"]);

    // Tag resolution orders by priority only
    let tagged = resolve_by_tag(&manifest, &["SECURITY"]);
    let paths: Vec<&str> = tagged.iter().map(|m| m.entry.path.as_str()).collect();
    assert_eq!(paths, vec!["services/payments/AGENTS.md", "services/auth/AGENTS.md"]);

    // Malformed review date is a warning, not an error
    let known = discover_instruction_files(repo.root(), &AgentsMapConfig::default())
        .unwrap()
        .into_iter()
        .collect();
    let result = validate(&manifest, &known);
    assert!(result.valid);
    assert_eq!(result.warnings().count(), 1);
}
