//! Shared test utilities for the agentsmap workspace.
//!
//! This crate provides standardised fixtures so crate test suites do not
//! each hand-roll temporary source trees. It is a dev-dependency only.
//!
//! # Modules
//!
//! - [`repo`]: [`TestRepo`](repo::TestRepo) builder for instruction-file trees
//! - [`fixtures`]: canned manifest documents

pub mod fixtures;
pub mod repo;

pub use repo::TestRepo;
