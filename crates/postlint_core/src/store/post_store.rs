//! Post source contract and flat-directory implementation.
//!
//! # Responsibility
//! - Provide stable list/load APIs over a collection of post files.
//! - Keep path and extension conventions inside the store boundary.
//!
//! # Invariants
//! - Slugs are file stems; `load` never escapes the store root.
//! - `list_slugs` output is sorted so downstream reports are stable.
//! - Only `.md` and `.markdown` files (case-insensitive) are posts.

use crate::model::post::Post;
use crate::parse::front_matter::{parse_post, ParseError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const POST_EXTENSIONS: &[&str] = &["md", "markdown"];

pub type StoreResult<T> = Result<T, StoreError>;

/// Access failure for post collections.
#[derive(Debug)]
pub enum StoreError {
    /// The store root does not exist or is not a directory.
    NotADirectory(PathBuf),
    /// No post file exists for the requested slug.
    NotFound(String),
    /// Filesystem transport failure.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file exists but is not a structurally valid post.
    Parse { slug: String, source: ParseError },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotADirectory(path) => {
                write!(f, "post store root is not a directory: {}", path.display())
            }
            Self::NotFound(slug) => write!(f, "post not found: {slug}"),
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Parse { slug, source } => write!(f, "failed to parse post `{slug}`: {source}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Read contract for one post collection.
pub trait PostSource {
    /// Returns all known slugs, sorted ascending.
    fn list_slugs(&self) -> StoreResult<Vec<String>>;
    /// Loads and parses one post by slug.
    fn load(&self, slug: &str) -> StoreResult<Post>;
}

/// Flat-directory post store: one collection, one directory, no recursion.
pub struct FsPostStore {
    root: PathBuf,
}

impl FsPostStore {
    /// Opens a store rooted at an existing directory.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(StoreError::NotADirectory(root));
        }
        Ok(Self { root })
    }

    /// Returns the store root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loads and parses a single post file outside any store root.
    ///
    /// Used by callers handed explicit file paths; the slug is the file
    /// stem, matching store semantics.
    pub fn load_file(path: &Path) -> StoreResult<Post> {
        let slug = match path.file_stem().and_then(|stem| stem.to_str()) {
            Some(stem) => stem.to_string(),
            None => return Err(StoreError::NotFound(path.display().to_string())),
        };
        let source = std::fs::read_to_string(path).map_err(|err| StoreError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
        parse_post(slug.clone(), &source).map_err(|err| StoreError::Parse { slug, source: err })
    }
}

impl PostSource for FsPostStore {
    fn list_slugs(&self) -> StoreResult<Vec<String>> {
        let entries = std::fs::read_dir(&self.root).map_err(|err| StoreError::Io {
            path: self.root.clone(),
            source: err,
        })?;

        let mut slugs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| StoreError::Io {
                path: self.root.clone(),
                source: err,
            })?;
            let path = entry.path();
            if path.is_file() && has_post_extension(&path) {
                if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                    slugs.push(stem.to_string());
                }
            }
        }

        slugs.sort();
        Ok(slugs)
    }

    fn load(&self, slug: &str) -> StoreResult<Post> {
        // Slugs are bare file stems; anything path-like cannot name a
        // post in this store and must not reach the filesystem join.
        if !is_plain_slug(slug) {
            return Err(StoreError::NotFound(slug.to_string()));
        }
        for extension in POST_EXTENSIONS {
            let candidate = self.root.join(format!("{slug}.{extension}"));
            if candidate.is_file() {
                return Self::load_file(&candidate);
            }
        }
        Err(StoreError::NotFound(slug.to_string()))
    }
}

/// Returns whether `slug` is a bare file stem with no path structure.
fn is_plain_slug(slug: &str) -> bool {
    !slug.is_empty() && !slug.contains(['/', '\\']) && slug != "." && slug != ".."
}

fn has_post_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lowered = ext.to_ascii_lowercase();
            POST_EXTENSIONS.contains(&lowered.as_str())
        })
        .unwrap_or(false)
}
