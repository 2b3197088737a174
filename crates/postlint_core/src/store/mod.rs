//! Post source contracts and filesystem implementation.
//!
//! # Responsibility
//! - Define the use-case oriented access contract for post collections.
//! - Isolate filesystem layout details from lint orchestration.
//!
//! # Invariants
//! - Stores only read; post files are never written, moved or deleted.
//! - Store APIs return semantic errors (`NotFound`) in addition to I/O
//!   transport errors.

pub mod post_store;
