//! Front-matter block recognition and metadata deserialization.
//!
//! # Responsibility
//! - Recognize the front-matter block: a file beginning with a `---` line,
//!   closed by the next `---` line, followed by the body.
//! - Deserialize the block into `FrontMatter` via serde_yaml.
//!
//! # Invariants
//! - `body_start_line` is the 1-based source line of the first body line.
//! - Delimiter matching tolerates CRLF sources and trailing spaces.
//! - Unknown metadata keys are ignored; the external site generator owns
//!   the full schema.

use crate::model::post::{FrontMatter, Post};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Delimiter line opening and closing the front-matter block.
pub const FRONT_MATTER_DELIMITER: &str = "---";

pub type ParseResult<T> = Result<T, ParseError>;

/// Structural or metadata failure while parsing one post source.
#[derive(Debug)]
pub enum ParseError {
    /// The file does not begin with a `---` delimiter line.
    MissingFrontMatter,
    /// The opening `---` is never closed before end of file.
    UnterminatedFrontMatter,
    /// The metadata block is not well-formed key/value YAML.
    Metadata(serde_yaml::Error),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFrontMatter => {
                write!(f, "post does not begin with a `---` front-matter delimiter")
            }
            Self::UnterminatedFrontMatter => {
                write!(f, "front-matter block is never closed by a `---` line")
            }
            Self::Metadata(err) => write!(f, "front-matter is not valid metadata: {err}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Metadata(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_yaml::Error> for ParseError {
    fn from(value: serde_yaml::Error) -> Self {
        Self::Metadata(value)
    }
}

/// Raw structural split of one source file, before metadata parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// Text between the two delimiter lines, delimiters excluded.
    pub front_matter: String,
    /// Everything after the closing delimiter line.
    pub body: String,
    /// 1-based source line on which the body begins.
    pub body_start_line: usize,
}

/// Splits a source file into front-matter block and body.
///
/// # Errors
/// - `MissingFrontMatter` when the first line is not a `---` delimiter.
/// - `UnterminatedFrontMatter` when no closing `---` line exists.
pub fn split_document(source: &str) -> ParseResult<RawDocument> {
    let mut lines = source.lines();

    match lines.next() {
        Some(first) if is_delimiter_line(first) => {}
        _ => return Err(ParseError::MissingFrontMatter),
    }

    let mut metadata_lines = Vec::new();
    let mut body_lines = Vec::new();
    let mut closed = false;
    for line in lines {
        if closed {
            body_lines.push(line);
        } else if is_delimiter_line(line) {
            closed = true;
        } else {
            metadata_lines.push(line);
        }
    }

    if !closed {
        return Err(ParseError::UnterminatedFrontMatter);
    }

    // Line 1 is the opener, then the metadata lines, then the closer.
    let body_start_line = metadata_lines.len() + 3;
    Ok(RawDocument {
        front_matter: metadata_lines.join("\n"),
        body: body_lines.join("\n"),
        body_start_line,
    })
}

/// Parses one post source file into the domain model.
///
/// An empty metadata block is structurally valid and yields default
/// (empty) fields; field-level problems are validation concerns, not
/// parse failures.
pub fn parse_post(slug: impl Into<String>, source: &str) -> ParseResult<Post> {
    let raw = split_document(source)?;
    let front_matter = if raw.front_matter.trim().is_empty() {
        FrontMatter::default()
    } else {
        serde_yaml::from_str::<FrontMatter>(&raw.front_matter)?
    };

    Ok(Post {
        slug: slug.into(),
        front_matter,
        body: raw.body,
        body_start_line: raw.body_start_line,
    })
}

fn is_delimiter_line(line: &str) -> bool {
    line.trim_end() == FRONT_MATTER_DELIMITER
}
