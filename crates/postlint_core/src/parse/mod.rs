//! Parsing of post source files.
//!
//! # Responsibility
//! - Split a source file into its `---` delimited front-matter block and
//!   markdown body.
//! - Deserialize the metadata block into the domain model.
//!
//! # Invariants
//! - Line accounting is 1-based against the original file so diagnostics
//!   point at real source lines.
//! - Parsing never mutates or rewrites the source text.

pub mod front_matter;
