//! Tests for manifest parsing and serialization

use agentsmap_core::{Entry, Manifest, Priority, PriorityValue, parse, serialize};
use agentsmap_test_utils::fixtures;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_parse_full_manifest() {
    let manifest = parse(fixtures::FULL_MAP);

    assert_eq!(manifest.schema_version, 1);
    assert_eq!(
        manifest.paths().collect::<Vec<_>>(),
        vec!["AGENTS.md", "services/payments/AGENTS.md", "infra/AGENTS.md"]
    );

    let root = &manifest.entries[0];
    assert_eq!(root.scope, vec!["**"]);
    assert_eq!(root.priority, Some(PriorityValue::Known(Priority::High)));
    assert_eq!(root.last_modified.as_deref(), Some("2026-02-21"));

    let payments = &manifest.entries[1];
    assert_eq!(payments.purpose, "PCI rules, Stripe patterns.");
    assert_eq!(payments.owners, Some(vec!["@payments-team".to_string()]));
    assert_eq!(
        payments.tags,
        Some(vec!["backend".to_string(), "compliance".to_string()])
    );
    assert_eq!(payments.last_reviewed.as_deref(), Some("2026-02-21"));

    let infra = &manifest.entries[2];
    assert_eq!(infra.scope, vec!["infra/**", "terraform/**", ".github/**"]);
    assert_eq!(infra.priority, None);
    assert_eq!(infra.tags, None);
}

#[test]
fn test_missing_scope_defaults_from_path() {
    let manifest = parse(
        "- Path: /AGENTS.md\n  - Purpose: Root.\n- Path: /packages/ui/AGENTS.md\n  - Purpose: UI.\n",
    );

    assert_eq!(manifest.entries[0].scope, vec!["**"]);
    assert_eq!(manifest.entries[1].scope, vec!["packages/ui/**"]);
}

#[test]
fn test_entry_without_purpose_parses_with_empty_purpose() {
    let manifest = parse("- Path: /docs/AGENTS.md\n");

    assert_eq!(manifest.entries.len(), 1);
    assert_eq!(manifest.entries[0].purpose, "");
}

#[test]
fn test_unrelated_markdown_yields_empty_manifest() {
    let manifest = parse("# Notes\n\nJust some prose.\n\n- a bullet\n- Another: bullet\n");

    assert!(manifest.is_empty());
}

#[test]
fn test_serialize_exact_output() {
    let manifest = Manifest::new(vec![
        Entry::new("AGENTS.md", ["**"], "Root conventions.").with_priority(Priority::High),
        Entry::new("services/auth/AGENTS.md", ["services/auth/**"], "Auth service rules.")
            .with_owners(["@security-team"])
            .with_tags(["backend", "security"])
            .with_last_reviewed("2026-02-21"),
    ]);

    let text = serialize(&manifest);

    insta::assert_snapshot!(text, @r"
    # AGENTS.map

    This file lists where nested AGENTS.md files live and what they're for.
    The AGENTS.md files themselves are authoritative for their subtrees.

    ## Entries

    - Path: /AGENTS.md
      - Purpose: Root conventions.
      - Applies to: /**
      - Priority: high

    - Path: /services/auth/AGENTS.md
      - Purpose: Auth service rules.
      - Applies to: /services/auth/**
      - Owners: @security-team
      - Tags: backend, security
      - Last reviewed: 2026-02-21
    ");
}

#[test]
fn test_round_trip_makes_default_scope_explicit() {
    let text = "- Path: /services/auth/AGENTS.md\n  - Purpose: Auth.\n";

    let serialized = serialize(&parse(text));

    assert!(serialized.contains("  - Applies to: /services/auth/**"));
    assert_eq!(parse(&serialized), parse(text));
}

#[test]
fn test_round_trip_keeps_unrecognized_priority() {
    let text = "- Path: /AGENTS.md\n  - Purpose: Root.\n  - Priority: P0\n";

    let reparsed = parse(&serialize(&parse(text)));

    assert_eq!(
        reparsed.entries[0].priority,
        Some(PriorityValue::Unrecognized("P0".to_string()))
    );
}

#[test]
fn test_round_trip_full_fixture() {
    let first = parse(fixtures::FULL_MAP);
    let second = parse(&serialize(&first));

    assert_eq!(second, first);
}

prop_compose! {
    fn arb_entry()(
        path in "[a-z]{1,8}(/[a-z]{1,8}){0,2}/AGENTS\\.md",
        scope in prop::collection::vec("[a-z*]{1,6}(/[a-z*?]{1,6}){0,2}", 1..4),
        purpose in "[A-Z][A-Za-z0-9 ,:.]{0,30}[a-z.]",
        priority in prop_oneof![
            Just(None),
            Just(Some(Priority::Critical)),
            Just(Some(Priority::High)),
            Just(Some(Priority::Low)),
        ],
        last_modified in prop::option::of("20[0-9]{2}-[01][0-9]-[0-3][0-9]"),
        last_reviewed in prop::option::of("20[0-9]{2}-[01][0-9]-[0-3][0-9]"),
        owners in prop::option::of(prop::collection::vec("@[a-z]{1,8}", 1..3)),
        tags in prop::option::of(prop::collection::vec("[a-z]{1,8}", 1..4)),
    ) -> Entry {
        Entry {
            path,
            scope,
            purpose,
            priority: priority.map(PriorityValue::Known),
            last_modified,
            last_reviewed,
            owners,
            tags,
        }
    }
}

proptest! {
    #[test]
    fn prop_serialize_then_parse_is_identity(entries in prop::collection::vec(arb_entry(), 0..6)) {
        let manifest = Manifest::new(entries);

        let reparsed = parse(&serialize(&manifest));

        prop_assert_eq!(reparsed, manifest);
    }
}
