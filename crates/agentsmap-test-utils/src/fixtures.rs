//! Canned manifest documents shared by parser, resolver and CLI tests.

/// Two-entry manifest: a root file and a nested auth service file.
pub const ROOT_AND_AUTH_MAP: &str = "\
# AGENTS.map

## Entries

- Path: /AGENTS.md
  - Purpose: Global repo conventions.
  - Applies to: /**

- Path: /services/auth/AGENTS.md
  - Purpose: Auth service rules.
  - Applies to: /services/auth/**
  - Owners: @security-team
  - Tags: backend, security
";

/// Manifest exercising every optional field plus surrounding prose.
pub const FULL_MAP: &str = "\
# AGENTS.map

This file lists where nested AGENTS.md files live and what they're for.

## Entries

- Path: /AGENTS.md
  - Purpose: Root conventions.
  - Applies to: /**
  - Priority: high
  - Last modified: 2026-02-21

Some prose that the parser ignores.

- Path: /services/payments/AGENTS.md
  - Purpose: PCI rules, Stripe patterns.
  - Applies to: /services/payments/**
  - Priority: critical
  - Last modified: 2026-02-20
  - Owners: @payments-team
  - Tags: backend, compliance
  - Last reviewed: 2026-02-21

- Path: /infra/AGENTS.md
  - Purpose: Infrastructure rules.
  - Applies to: /infra/**, /terraform/**, /.github/**
  - Owners: @devops
";
