//! Path-derived fields: raw tokens, trimmed segments, extension.

use serde::Serialize;

/// A non-empty path token and its 1-based depth.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Segment {
    pub depth: usize,
    pub value: String,
}

impl Segment {
    pub fn new(depth: usize, value: impl Into<String>) -> Self {
        Self {
            depth,
            value: value.into(),
        }
    }
}

/// Raw `/` tokens, empty ones included ("/a/" -> ["", "a", ""]).
pub fn raw_tokens(path: &str) -> impl Iterator<Item = &str> {
    path.split('/')
}

/// Number of raw tokens, not segments: "/a/b" has length 3.
pub fn path_length(path: &str) -> usize {
    raw_tokens(path).count()
}

/// Everything before the first `;` or `?`.
pub fn path_without_params(path: &str) -> &str {
    let end = path
        .find(|c: char| c == ';' || c == '?')
        .unwrap_or(path.len());
    &path[..end]
}

/// Extension of the final raw token, empty when that token has no `.`.
/// A path ending in `/` therefore never has an extension.
pub fn file_extension(path: &str) -> &str {
    let last = path.rsplit('/').next().unwrap_or("");
    last.rsplit_once('.').map_or("", |(_, ext)| ext)
}

/// Non-empty tokens of the path with leading/trailing slashes trimmed.
/// Depth is the token's 1-based position in the trimmed split, so an empty
/// middle token still takes up a level: "/a//b" puts `b` at depth 3.
pub fn segments(path: &str) -> Vec<Segment> {
    path.trim_matches('/')
        .split('/')
        .enumerate()
        .filter(|(_, s)| !s.is_empty())
        .map(|(i, value)| Segment::new(i + 1, value))
        .collect()
}
