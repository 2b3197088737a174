//! Content lint rules and diagnostics.
//!
//! # Responsibility
//! - Define the diagnostic record and severity scale shared by all rules.
//! - Implement the structural content checks: front-matter fields,
//!   balanced code fences, resolvable link references.
//!
//! # Invariants
//! - Rules only read post content; they never rewrite it.
//! - `lint_post` runs rules in a fixed order so reports are deterministic.

pub mod diagnostic;
pub mod rules;
