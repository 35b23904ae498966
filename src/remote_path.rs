//! Remote path extraction and segment indexing.
//!
//! Derives a filesystem-style path from the provider-specific part of a
//! connection string, handling fully-qualified remote URLs, SCP-style
//! references (`[user@]host:path`) and plain local paths, then chunks it
//! into an ordered segment sequence addressable by positive and negative
//! logical indices.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

// Schemes that mark a string as a fully-qualified URL. The trailing `.`
// requires at least one character after the colon.
static SCHEME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:ssh|git|https?|ftps?|file):.").expect("scheme pattern is valid")
});

/// Extract the path portion of a provider-specific URL.
///
/// A single trailing `.git` or `.git/` suffix is stripped first. Strings
/// carrying a recognized scheme are parsed as URLs and contribute their path
/// component verbatim. Scheme-less strings are either SCP-style references
/// (everything after the first `:` is the path) or local paths returned
/// unchanged; a `/` before the first `:` rules out SCP syntax, so paths such
/// as `./foo:bar` survive intact.
#[must_use]
pub fn extract_path(url: &str) -> String {
    let trimmed = url
        .strip_suffix(".git/")
        .or_else(|| url.strip_suffix(".git"))
        .unwrap_or(url);

    if SCHEME_PATTERN.is_match(trimmed) {
        if let Ok(parsed) = Url::parse(trimmed) {
            return parsed.path().to_string();
        }
        // Unparseable despite the scheme match; treat like a scheme-less
        // string below.
    }

    let Some(colon) = trimmed.find(':') else {
        // No colon anywhere: a bare local path.
        return trimmed.to_string();
    };

    match trimmed.find('/') {
        // A colon after a slash cannot start an SCP host specification.
        Some(slash) if slash < colon => trimmed.to_string(),
        _ => trimmed.get(colon + 1..).unwrap_or_default().to_string(),
    }
}

/// Split a path on `/` into non-blank segments, preserving order.
///
/// Leading, trailing, and repeated slashes never produce segments; blank
/// input yields an empty sequence.
#[must_use]
pub fn chunk_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|part| !part.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Address a segment by logical index.
///
/// Positive indices count from the front (`0 ≤ i < N`); negative indices
/// count from the back (`-1` is the last segment, `-N` the first). Out of
/// range on either side yields `None`.
#[must_use]
pub fn segment_at(segments: &[String], index: isize) -> Option<&str> {
    let len = segments.len() as isize;
    let resolved = if index < 0 { len + index } else { index };

    if (0..len).contains(&resolved) {
        segments.get(resolved as usize).map(String::as_str)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "remote_path_tests_1.rs"]
mod tests_1;
#[cfg(test)]
#[path = "remote_path_tests_2.rs"]
mod tests_2;
