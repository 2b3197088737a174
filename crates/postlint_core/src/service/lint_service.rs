//! Lint run orchestration over a post source.
//!
//! # Responsibility
//! - Drive load -> parse -> lint for one slug or a whole collection.
//! - Aggregate findings into a serializable report.
//!
//! # Invariants
//! - A post that fails structural parsing yields a report entry with one
//!   `structure` diagnostic; the run continues with the next post.
//! - `lint_all` report entries follow the store's sorted slug order.

use crate::lint::diagnostic::{Diagnostic, Severity, RULE_STRUCTURE};
use crate::lint::rules::lint_post;
use crate::store::post_store::{PostSource, StoreError};
use log::{info, warn};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service failure for lint use-cases.
#[derive(Debug)]
pub enum LintServiceError {
    /// The requested slug does not exist in the source.
    PostNotFound(String),
    /// Source-layer failure other than parse problems.
    Store(StoreError),
}

impl Display for LintServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PostNotFound(slug) => write!(f, "post not found: {slug}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LintServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::PostNotFound(_) => None,
        }
    }
}

impl From<StoreError> for LintServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(slug) => Self::PostNotFound(slug),
            other => Self::Store(other),
        }
    }
}

/// Findings for one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostReport {
    pub slug: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl PostReport {
    /// Returns whether any finding is error severity.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diagnostic| diagnostic.severity == Severity::Error)
    }
}

/// Aggregated findings for one lint run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LintReport {
    pub entries: Vec<PostReport>,
}

impl LintReport {
    /// Total error-severity findings across all posts.
    pub fn error_count(&self) -> usize {
        self.count_severity(Severity::Error)
    }

    /// Total warning-severity findings across all posts.
    pub fn warning_count(&self) -> usize {
        self.count_severity(Severity::Warning)
    }

    /// Returns whether the run produced no findings at all.
    pub fn is_clean(&self) -> bool {
        self.entries.iter().all(|entry| entry.diagnostics.is_empty())
    }

    fn count_severity(&self, severity: Severity) -> usize {
        self.entries
            .iter()
            .flat_map(|entry| entry.diagnostics.iter())
            .filter(|diagnostic| diagnostic.severity == severity)
            .count()
    }
}

/// Lint use-case service over any `PostSource`.
pub struct LintService<S: PostSource> {
    source: S,
}

impl<S: PostSource> LintService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Lints one post by slug.
    ///
    /// # Errors
    /// - `PostNotFound` when the slug does not exist.
    /// - `Store` for I/O failures. Parse failures are findings, not
    ///   errors, so broken files still show up in reports.
    pub fn lint_slug(&self, slug: &str) -> Result<PostReport, LintServiceError> {
        match self.source.load(slug) {
            Ok(post) => {
                let diagnostics = lint_post(&post);
                info!(
                    "event=post_linted module=service slug={} findings={}",
                    post.slug,
                    diagnostics.len()
                );
                Ok(PostReport {
                    slug: post.slug,
                    diagnostics,
                })
            }
            Err(StoreError::Parse { slug, source }) => {
                warn!("event=post_unparsable module=service slug={slug} reason={source}");
                Ok(PostReport {
                    slug,
                    diagnostics: vec![Diagnostic::error(RULE_STRUCTURE, None, source.to_string())],
                })
            }
            Err(other) => Err(other.into()),
        }
    }

    /// Lints every post the source knows about.
    pub fn lint_all(&self) -> Result<LintReport, LintServiceError> {
        let slugs = self.source.list_slugs()?;
        let mut entries = Vec::with_capacity(slugs.len());
        for slug in &slugs {
            entries.push(self.lint_slug(slug)?);
        }

        let report = LintReport { entries };
        info!(
            "event=lint_run module=service posts={} errors={} warnings={}",
            slugs.len(),
            report.error_count(),
            report.warning_count()
        );
        Ok(report)
    }
}
