//! Domain model for post content files.
//!
//! # Responsibility
//! - Define the canonical shape of one post: front-matter metadata + body.
//! - Own the field-level invariants lint rules are built on.
//!
//! # Invariants
//! - `layout`, `title` and `author` are required and non-empty.
//! - `categories` behaves as a set of free-text tags.
//! - Posts are static content; nothing in this crate mutates them.

pub mod post;
