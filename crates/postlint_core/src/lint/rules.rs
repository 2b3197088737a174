//! Structural content checks for post bodies and metadata.
//!
//! # Responsibility
//! - Check front-matter required fields and category set hygiene.
//! - Check that every fenced code block is closed.
//! - Check that every markdown link resolves to a non-empty URL.
//!
//! # Invariants
//! - Reported line numbers are 1-based positions in the original source
//!   file, computed from `body_start_line`.
//! - Link and fence scanning ignores content inside fenced code blocks.
//! - Rules run in a fixed order: front-matter, fences, links.

use crate::lint::diagnostic::{
    Diagnostic, RULE_CATEGORY, RULE_CODE_FENCE, RULE_FRONT_MATTER, RULE_LINK,
};
use crate::model::post::{FrontMatter, Post, PostValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static INLINE_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").expect("valid inline link regex"));
static REFERENCE_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\[([^\]]*)\]").expect("valid reference link regex"));
static LINK_DEFINITION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ {0,3}\[([^\]]+)\]:\s*(\S*)\s*$").expect("valid link definition regex")
});

/// Runs all content checks against one parsed post.
///
/// Diagnostics come back grouped by rule in a fixed order so repeated
/// runs over the same file produce identical reports.
pub fn lint_post(post: &Post) -> Vec<Diagnostic> {
    let mut diagnostics = check_front_matter(&post.front_matter);
    diagnostics.extend(check_code_fences(&post.body, post.body_start_line));
    diagnostics.extend(check_links(&post.body, post.body_start_line));
    diagnostics
}

/// Maps front-matter field violations to diagnostics.
///
/// Missing required fields and empty category values are errors; a
/// repeated category is a warning, since renderers tolerate it.
pub fn check_front_matter(front_matter: &FrontMatter) -> Vec<Diagnostic> {
    front_matter
        .violations()
        .into_iter()
        .map(|violation| match &violation {
            PostValidationError::DuplicateCategory(_) => {
                Diagnostic::warning(RULE_CATEGORY, None, violation.to_string())
            }
            PostValidationError::EmptyCategory => {
                Diagnostic::error(RULE_CATEGORY, None, violation.to_string())
            }
            _ => Diagnostic::error(RULE_FRONT_MATTER, None, violation.to_string()),
        })
        .collect()
}

/// Checks that every fenced code block opened with backticks is closed.
pub fn check_code_fences(body: &str, body_start_line: usize) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut open_fence: Option<(usize, usize)> = None;

    for (index, line) in body.lines().enumerate() {
        let source_line = body_start_line + index;
        let Some(run) = fence_backtick_run(line) else {
            continue;
        };

        match open_fence {
            None => open_fence = Some((source_line, run)),
            // A closing fence must be at least as long as the opener and
            // carry no info string.
            Some((_, open_run)) if run >= open_run && fence_rest_is_blank(line, run) => {
                open_fence = None;
            }
            Some(_) => {}
        }
    }

    if let Some((opened_at, _)) = open_fence {
        diagnostics.push(Diagnostic::error(
            RULE_CODE_FENCE,
            Some(opened_at),
            "code fence opened here is never closed",
        ));
    }

    diagnostics
}

/// Checks that every markdown link resolves to a non-empty URL.
///
/// Covers inline links `[text](url)` and reference links `[text][label]`
/// (including the collapsed `[text][]` form). Reference labels match
/// case-insensitively and the first definition of a label wins.
pub fn check_links(body: &str, body_start_line: usize) -> Vec<Diagnostic> {
    let definitions = collect_link_definitions(body);
    let mut diagnostics = Vec::new();

    for (source_line, line) in prose_lines(body, body_start_line) {
        if LINK_DEFINITION_RE.is_match(line) {
            continue;
        }

        for capture in INLINE_LINK_RE.captures_iter(line) {
            let text = capture.get(1).map_or("", |m| m.as_str());
            let url = normalize_url(capture.get(2).map_or("", |m| m.as_str()));
            if url.is_empty() {
                diagnostics.push(Diagnostic::error(
                    RULE_LINK,
                    Some(source_line),
                    format!("link `[{text}]` has an empty URL"),
                ));
            }
        }

        for capture in REFERENCE_LINK_RE.captures_iter(line) {
            let text = capture.get(1).map_or("", |m| m.as_str());
            let label_raw = capture.get(2).map_or("", |m| m.as_str()).trim();
            let label = if label_raw.is_empty() { text } else { label_raw }
                .trim()
                .to_ascii_lowercase();

            match definitions.get(&label) {
                None => diagnostics.push(Diagnostic::error(
                    RULE_LINK,
                    Some(source_line),
                    format!("link reference `[{label}]` has no definition"),
                )),
                Some(url) if url.is_empty() => diagnostics.push(Diagnostic::error(
                    RULE_LINK,
                    Some(source_line),
                    format!("link reference `[{label}]` resolves to an empty URL"),
                )),
                Some(_) => {}
            }
        }
    }

    diagnostics
}

/// Collects `[label]: url` definitions outside fenced code blocks.
fn collect_link_definitions(body: &str) -> HashMap<String, String> {
    let mut definitions = HashMap::new();
    for (_, line) in prose_lines(body, 1) {
        if let Some(capture) = LINK_DEFINITION_RE.captures(line) {
            let label = capture[1].trim().to_ascii_lowercase();
            let url = normalize_url(&capture[2]);
            definitions.entry(label).or_insert(url);
        }
    }
    definitions
}

/// Yields `(source_line, line)` pairs for lines outside fenced code
/// blocks. Fence delimiter lines themselves are skipped too.
fn prose_lines(body: &str, body_start_line: usize) -> impl Iterator<Item = (usize, &str)> {
    let mut open_run: Option<usize> = None;
    body.lines().enumerate().filter_map(move |(index, line)| {
        if let Some(run) = fence_backtick_run(line) {
            match open_run {
                None => open_run = Some(run),
                Some(opened) if run >= opened && fence_rest_is_blank(line, run) => {
                    open_run = None;
                }
                Some(_) => {}
            }
            return None;
        }
        if open_run.is_some() {
            return None;
        }
        Some((body_start_line + index, line))
    })
}

/// Returns the backtick run length when `line` is a fence delimiter
/// candidate: at most 3 spaces of indent, then 3+ backticks.
fn fence_backtick_run(line: &str) -> Option<usize> {
    let trimmed = line.trim_start_matches(' ');
    if line.len() - trimmed.len() > 3 {
        return None;
    }
    let run = trimmed.chars().take_while(|c| *c == '`').count();
    (run >= 3).then_some(run)
}

/// Returns whether a fence line carries nothing after its backtick run.
fn fence_rest_is_blank(line: &str, run: usize) -> bool {
    line.trim_start_matches(' ')
        .chars()
        .skip(run)
        .all(char::is_whitespace)
}

/// Trims a URL and strips one layer of `<...>` wrapping.
fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();
    let unwrapped = trimmed
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .unwrap_or(trimmed);
    unwrapped.trim().to_string()
}
