//! Diagnostic record shared by every lint rule.

use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Rule id for front-matter required-field checks.
pub const RULE_FRONT_MATTER: &str = "front-matter";
/// Rule id for category set hygiene checks.
pub const RULE_CATEGORY: &str = "category";
/// Rule id for fenced code block balance checks.
pub const RULE_CODE_FENCE: &str = "code-fence";
/// Rule id for link reference resolution checks.
pub const RULE_LINK: &str = "link";
/// Rule id for document structure failures (missing or broken front-matter).
pub const RULE_STRUCTURE: &str = "structure";

/// Severity scale for content findings.
///
/// Ordered so `Warning < Error`, letting callers take the maximum over a
/// report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Style or hygiene problem; the post still renders.
    Warning,
    /// Structural problem an external renderer would reject or mangle.
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One content finding against one post source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Stable rule identifier, e.g. `code-fence`.
    pub rule: &'static str,
    pub severity: Severity,
    /// 1-based line in the original source file, when one applies.
    pub line: Option<usize>,
    /// Human-readable finding text.
    pub message: String,
}

impl Diagnostic {
    /// Creates an error-severity finding.
    pub fn error(rule: &'static str, line: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity: Severity::Error,
            line,
            message: message.into(),
        }
    }

    /// Creates a warning-severity finding.
    pub fn warning(rule: &'static str, line: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity: Severity::Warning,
            line,
            message: message.into(),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "{} [{}] line {}: {}",
                self.severity, self.rule, line, self.message
            ),
            None => write!(f, "{} [{}]: {}", self.severity, self.rule, self.message),
        }
    }
}
