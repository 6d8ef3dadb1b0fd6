//! Structural URL splitting: scheme, network location, path, params, query, fragment.
//!
//! Nothing is normalized. Relative references ("/a/b", "a/b?x=1") are valid
//! and simply have an empty scheme and network location.

use crate::error::DecomposeError;

/// Schemes whose last path segment may carry `;params`.
const USES_PARAMS: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtsps", "rtspu",
    "sip", "sips", "mms", "sftp", "tel",
];

/// The six generic components of a URL string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    pub netloc: String,
    pub path: String,
    pub params: String,
    pub query: String,
    pub fragment: String,
}

/// Splits `raw` into its components.
///
/// Leading control characters and spaces are stripped and embedded tab/CR/LF
/// removed before splitting. Fails on unbalanced IPv6 brackets in the network
/// location and on malformed `%` escapes in the path or query.
pub fn split_url(raw: &str) -> Result<UrlParts, DecomposeError> {
    let cleaned: String = raw
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();

    let mut rest = cleaned.as_str();
    let mut scheme = String::new();
    if let Some(i) = rest.find(':') {
        let candidate = &rest[..i];
        if candidate.starts_with(|c: char| c.is_ascii_alphabetic())
            && candidate.chars().all(is_scheme_char)
        {
            scheme = candidate.to_ascii_lowercase();
            rest = &rest[i + 1..];
        }
    }

    let mut netloc = "";
    if let Some(after) = rest.strip_prefix("//") {
        let end = after
            .find(|c: char| matches!(c, '/' | '?' | '#'))
            .unwrap_or(after.len());
        netloc = &after[..end];
        rest = &after[end..];
        if netloc.contains('[') != netloc.contains(']') {
            return Err(DecomposeError::InvalidIpv6 {
                netloc: netloc.to_string(),
            });
        }
    }

    let mut fragment = "";
    if let Some((before, frag)) = rest.split_once('#') {
        fragment = frag;
        rest = before;
    }
    let mut query = "";
    if let Some((before, q)) = rest.split_once('?') {
        query = q;
        rest = before;
    }

    check_percent_escapes("path", rest)?;
    check_percent_escapes("query", query)?;

    let (path, params) = if USES_PARAMS.contains(&scheme.as_str()) {
        split_params(rest)
    } else {
        (rest, "")
    };

    Ok(UrlParts {
        netloc: netloc.to_string(),
        path: path.to_string(),
        params: params.to_string(),
        query: query.to_string(),
        fragment: fragment.to_string(),
        scheme,
    })
}

fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

/// `;params` are only split off the last path segment; a `;` in an earlier
/// segment stays in the path.
fn split_params(path: &str) -> (&str, &str) {
    let start = match path.rfind('/') {
        Some(slash) => match path[slash..].find(';') {
            Some(i) => slash + i,
            None => return (path, ""),
        },
        None => match path.find(';') {
            Some(i) => i,
            None => return (path, ""),
        },
    };
    (&path[..start], &path[start + 1..])
}

fn check_percent_escapes(component: &'static str, s: &str) -> Result<(), DecomposeError> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let ok = bytes.len() > i + 2 && is_hex(bytes[i + 1]) && is_hex(bytes[i + 2]);
            if !ok {
                return Err(DecomposeError::MalformedPercentEncoding {
                    component,
                    offset: i,
                });
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

fn is_hex(b: u8) -> bool {
    b.is_ascii_hexdigit()
}
