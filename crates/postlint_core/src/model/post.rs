//! Post domain model.
//!
//! # Responsibility
//! - Define the `FrontMatter` and `Post` records shared by parser, lint
//!   rules and store.
//! - Provide field validation in first-error (`validate`) and all-errors
//!   (`violations`) forms.
//!
//! # Invariants
//! - `layout`, `title` and `author` must be non-empty after trimming.
//! - Category values are non-empty and unique after ASCII-lowercase
//!   normalization.
//! - A constructed `Post` is never mutated; posts live in files owned by
//!   their author, not by this program.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Front-matter metadata consumed by an external site generator.
///
/// Fields default to empty when absent so a missing key and an empty value
/// are reported the same way by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontMatter {
    /// Identifier naming a presentation template.
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub layout: String,
    /// Free-text post title.
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub title: String,
    /// Free-text author name.
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub author: String,
    /// Free-text tags. Accepts a YAML sequence or a space-separated scalar.
    #[serde(default, deserialize_with = "deserialize_categories")]
    pub categories: Vec<String>,
}

impl FrontMatter {
    /// Validates field invariants, stopping at the first violation.
    pub fn validate(&self) -> Result<(), PostValidationError> {
        match self.violations().into_iter().next() {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }

    /// Returns every field invariant violation in declaration order.
    ///
    /// Lint rules consume this form so one post reports all of its
    /// metadata problems at once.
    pub fn violations(&self) -> Vec<PostValidationError> {
        let mut found = Vec::new();

        if self.layout.trim().is_empty() {
            found.push(PostValidationError::EmptyLayout);
        }
        if self.title.trim().is_empty() {
            found.push(PostValidationError::EmptyTitle);
        }
        if self.author.trim().is_empty() {
            found.push(PostValidationError::EmptyAuthor);
        }

        let mut seen = BTreeSet::<String>::new();
        for category in &self.categories {
            let normalized = category.trim().to_ascii_lowercase();
            if normalized.is_empty() {
                found.push(PostValidationError::EmptyCategory);
                continue;
            }
            if !seen.insert(normalized.clone()) {
                found.push(PostValidationError::DuplicateCategory(normalized));
            }
        }

        found
    }

    /// Returns categories lowercased and deduplicated, preserving first
    /// occurrence order.
    pub fn normalized_categories(&self) -> Vec<String> {
        let mut seen = BTreeSet::<String>::new();
        self.categories
            .iter()
            .map(|category| category.trim().to_ascii_lowercase())
            .filter(|normalized| !normalized.is_empty() && seen.insert(normalized.clone()))
            .collect()
    }
}

/// Field invariant violation for post front-matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostValidationError {
    /// `layout` is missing or blank.
    EmptyLayout,
    /// `title` is missing or blank.
    EmptyTitle,
    /// `author` is missing or blank.
    EmptyAuthor,
    /// A category value is blank.
    EmptyCategory,
    /// The same category appears more than once (case-insensitive).
    DuplicateCategory(String),
}

impl Display for PostValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyLayout => write!(f, "front-matter `layout` is missing or empty"),
            Self::EmptyTitle => write!(f, "front-matter `title` is missing or empty"),
            Self::EmptyAuthor => write!(f, "front-matter `author` is missing or empty"),
            Self::EmptyCategory => write!(f, "front-matter contains an empty category"),
            Self::DuplicateCategory(name) => {
                write!(f, "front-matter repeats category `{name}`")
            }
        }
    }
}

impl Error for PostValidationError {}

/// One parsed post source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    /// Stable identifier derived from the source file stem.
    pub slug: String,
    /// Parsed front-matter metadata.
    pub front_matter: FrontMatter,
    /// Markdown body: prose plus fenced code blocks.
    pub body: String,
    /// 1-based source line on which the body begins. Keeps lint
    /// diagnostics addressable against the original file.
    pub body_start_line: usize,
}

/// A key written as `title:` with no value reads as YAML null; treat it
/// the same as an absent key.
fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_categories<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCategories {
        List(Vec<String>),
        Scalar(String),
    }

    match Option::<RawCategories>::deserialize(deserializer)? {
        None => Ok(Vec::new()),
        Some(RawCategories::List(values)) => Ok(values),
        // Jekyll-style front-matter also writes `categories: a b c`.
        Some(RawCategories::Scalar(value)) => {
            Ok(value.split_whitespace().map(str::to_string).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FrontMatter, PostValidationError};

    fn complete_front_matter() -> FrontMatter {
        FrontMatter {
            layout: "post".to_string(),
            title: "Reflection in practice".to_string(),
            author: "J. Writer".to_string(),
            categories: vec!["java".to_string(), "tutorial".to_string()],
        }
    }

    #[test]
    fn complete_metadata_validates() {
        assert_eq!(complete_front_matter().validate(), Ok(()));
    }

    #[test]
    fn blank_required_field_is_rejected() {
        let mut front_matter = complete_front_matter();
        front_matter.title = "   ".to_string();
        assert_eq!(
            front_matter.validate(),
            Err(PostValidationError::EmptyTitle)
        );
    }

    #[test]
    fn violations_reports_every_problem() {
        let front_matter = FrontMatter {
            layout: String::new(),
            title: String::new(),
            author: "someone".to_string(),
            categories: vec!["Java".to_string(), "java".to_string(), " ".to_string()],
        };
        assert_eq!(
            front_matter.violations(),
            vec![
                PostValidationError::EmptyLayout,
                PostValidationError::EmptyTitle,
                PostValidationError::DuplicateCategory("java".to_string()),
                PostValidationError::EmptyCategory,
            ]
        );
    }

    #[test]
    fn normalized_categories_dedupes_case_insensitively() {
        let mut front_matter = complete_front_matter();
        front_matter.categories = vec![
            "Java".to_string(),
            "java".to_string(),
            "Tutorial".to_string(),
        ];
        assert_eq!(front_matter.normalized_categories(), vec!["java", "tutorial"]);
    }
}
