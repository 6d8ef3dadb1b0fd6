//! URL decomposition.
//!
//! Splits a raw URL string into the structural fields the aggregator counts:
//! protocol, domain/subdomain, path variants, segments, query parameter names
//! and file extension. Pure string work, no I/O.

mod host;
mod path;
mod query;
mod split;

pub use host::split_host;
pub use path::{file_extension, path_length, path_without_params, raw_tokens, segments, Segment};
pub use query::query_param_names;
pub use split::{split_url, UrlParts};

use serde::Serialize;

use crate::error::DecomposeError;

/// Structural record for one URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedUrl {
    pub protocol: String,
    pub domain: String,
    pub subdomain: String,
    pub path: String,
    pub path_without_params: String,
    pub segments: Vec<Segment>,
    pub query_param_names: Vec<String>,
    pub file_extension: String,
    pub path_length: usize,
    pub query_param_count: usize,
}

/// Decomposes one URL.
///
/// # Examples
///
/// - `decompose("https://sub.a.example.com/path/to/page.html?x=1&y=2")` gives
///   domain `example.com`, subdomain `sub.a`, extension `html`, path length 4.
/// - `decompose("/relative/path")` succeeds with empty protocol and domain.
pub fn decompose(url: &str) -> Result<ParsedUrl, DecomposeError> {
    let parts = split_url(url)?;
    let (subdomain, domain) = split_host(&parts.netloc);
    let query_param_names = query_param_names(&parts.query);

    Ok(ParsedUrl {
        protocol: parts.scheme,
        domain,
        subdomain,
        path_without_params: path_without_params(&parts.path).to_string(),
        segments: segments(&parts.path),
        query_param_count: query_param_names.len(),
        query_param_names,
        file_extension: file_extension(&parts.path).to_string(),
        path_length: path_length(&parts.path),
        path: parts.path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decompose_full_url() {
        let p = decompose("https://sub.a.example.com/path/to/page.html?x=1&y=2").unwrap();
        assert_eq!(p.protocol, "https");
        assert_eq!(p.domain, "example.com");
        assert_eq!(p.subdomain, "sub.a");
        assert_eq!(p.path, "/path/to/page.html");
        assert_eq!(p.path_without_params, "/path/to/page.html");
        assert_eq!(p.file_extension, "html");
        assert_eq!(p.query_param_names, vec!["x", "y"]);
        assert_eq!(p.query_param_count, 2);
        assert_eq!(p.path_length, 4);
        assert_eq!(
            p.segments,
            vec![
                Segment::new(1, "path"),
                Segment::new(2, "to"),
                Segment::new(3, "page.html"),
            ]
        );
    }

    #[test]
    fn decompose_relative_path() {
        let p = decompose("/relative/path").unwrap();
        assert_eq!(p.protocol, "");
        assert_eq!(p.domain, "");
        assert_eq!(p.subdomain, "");
        assert_eq!(p.path_length, 3);
        assert_eq!(p.segments.len(), 2);
    }

    #[test]
    fn decompose_root_has_no_extension_or_segments() {
        let p = decompose("http://example.com/").unwrap();
        assert_eq!(p.subdomain, "");
        assert_eq!(p.file_extension, "");
        assert!(p.segments.is_empty());
        assert_eq!(p.path_length, 2);
    }

    #[test]
    fn decompose_host_only() {
        let p = decompose("https://www.example.com").unwrap();
        assert_eq!(p.path, "");
        assert_eq!(p.path_length, 1);
        assert_eq!(p.subdomain, "www");
    }

    #[test]
    fn decompose_failure_is_a_value() {
        assert!(decompose("https://example.com/a%zz").is_err());
        assert!(decompose("http://[fe80::1/").is_err());
    }

    #[test]
    fn decompose_mid_path_params() {
        let p = decompose("https://example.com/shop;sid=9/item").unwrap();
        assert_eq!(p.path, "/shop;sid=9/item");
        assert_eq!(p.path_without_params, "/shop");
    }
}
