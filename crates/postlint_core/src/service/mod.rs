//! Lint orchestration services.
//!
//! # Responsibility
//! - Coordinate load, parse and lint for single posts and whole stores.
//! - Shape aggregated reports for CLI and machine consumers.
//!
//! # Invariants
//! - One unparsable post never aborts a whole-store run.
//! - Report entries are sorted by slug.

pub mod lint_service;
