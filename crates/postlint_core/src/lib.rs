//! Core content-lint logic for postlint.
//! This crate is the single source of truth for post structure invariants.

pub mod lint;
pub mod logging;
pub mod model;
pub mod parse;
pub mod service;
pub mod store;

pub use lint::diagnostic::{
    Diagnostic, Severity, RULE_CATEGORY, RULE_CODE_FENCE, RULE_FRONT_MATTER, RULE_LINK,
    RULE_STRUCTURE,
};
pub use lint::rules::{check_code_fences, check_front_matter, check_links, lint_post};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::post::{FrontMatter, Post, PostValidationError};
pub use parse::front_matter::{parse_post, split_document, ParseError, ParseResult, RawDocument};
pub use service::lint_service::{LintReport, LintService, LintServiceError, PostReport};
pub use store::post_store::{FsPostStore, PostSource, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
