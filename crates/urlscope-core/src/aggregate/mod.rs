//! Frequency tables over decomposed URLs.
//!
//! One [`FrequencyTable`] per field, built by folding [`ParsedUrl`]s in input
//! order. Tables from contiguous chunks can be merged in order and give the
//! same result as a single pass.

mod table;

pub use table::FrequencyTable;

use serde::Serialize;

use crate::url_model::ParsedUrl;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateTables {
    pub subdomains: FrequencyTable<String>,
    pub domains: FrequencyTable<String>,
    pub paths: FrequencyTable<String>,
    pub paths_without_params: FrequencyTable<String>,
    pub query_params: FrequencyTable<String>,
    pub file_extensions: FrequencyTable<String>,
    /// Segment values across all depths; repeats within a URL each count.
    pub segments: FrequencyTable<String>,
    pub protocols: FrequencyTable<String>,
    pub path_lengths: FrequencyTable<usize>,
    pub query_param_counts: FrequencyTable<usize>,
}

impl AggregateTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-pass fold over `parsed`.
    pub fn fold<'a>(parsed: impl IntoIterator<Item = &'a ParsedUrl>) -> Self {
        let mut tables = Self::new();
        for p in parsed {
            tables.record(p);
        }
        tables
    }

    pub fn record(&mut self, p: &ParsedUrl) {
        self.subdomains.increment(p.subdomain.clone());
        self.domains.increment(p.domain.clone());
        self.paths.increment(p.path.clone());
        self.paths_without_params
            .increment(p.path_without_params.clone());
        for name in &p.query_param_names {
            self.query_params.increment(name.clone());
        }
        if !p.file_extension.is_empty() {
            self.file_extensions.increment(p.file_extension.clone());
        }
        for seg in &p.segments {
            self.segments.increment(seg.value.clone());
        }
        self.protocols.increment(p.protocol.clone());
        self.path_lengths.increment(p.path_length);
        self.query_param_counts.increment(p.query_param_count);
    }

    /// Appends a later chunk's tables.
    pub fn merge(&mut self, other: AggregateTables) {
        self.subdomains.merge(other.subdomains);
        self.domains.merge(other.domains);
        self.paths.merge(other.paths);
        self.paths_without_params.merge(other.paths_without_params);
        self.query_params.merge(other.query_params);
        self.file_extensions.merge(other.file_extensions);
        self.segments.merge(other.segments);
        self.protocols.merge(other.protocols);
        self.path_lengths.merge(other.path_lengths);
        self.query_param_counts.merge(other.query_param_counts);
    }

    /// Number of URLs folded in. Every record bumps the protocol table once,
    /// so its sum is the authoritative total.
    pub fn total_urls(&self) -> usize {
        self.protocols.total()
    }

    /// Named string tables in report order.
    pub fn string_tables(&self) -> [(&'static str, &FrequencyTable<String>); 8] {
        [
            ("subdomains", &self.subdomains),
            ("domains", &self.domains),
            ("paths", &self.paths),
            ("paths_without_params", &self.paths_without_params),
            ("query_params", &self.query_params),
            ("file_extensions", &self.file_extensions),
            ("segments", &self.segments),
            ("protocol", &self.protocols),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url_model::decompose;

    fn parsed(urls: &[&str]) -> Vec<ParsedUrl> {
        urls.iter().map(|u| decompose(u).unwrap()).collect()
    }

    const SAMPLE: &[&str] = &[
        "https://www.example.com/blog/post-1.html?utm_source=x&page=2",
        "https://example.com/blog/post-2",
        "http://shop.example.org/cart;sid=1/checkout?page=1&page=3",
        "/relative/blog/blog",
        "https://www.example.com/",
        "ftp://files.example.net/pub/archive.tar.gz",
    ];

    #[test]
    fn record_counts_every_field() {
        let tables = AggregateTables::fold(&parsed(SAMPLE));
        assert_eq!(tables.total_urls(), 6);
        assert_eq!(tables.protocols.get(&"https".to_string()), 3);
        assert_eq!(tables.protocols.get(&String::new()), 1);
        assert_eq!(tables.subdomains.get(&"www".to_string()), 2);
        assert_eq!(tables.domains.get(&"example.com".to_string()), 3);
        assert_eq!(tables.query_params.get(&"page".to_string()), 2);
        assert_eq!(tables.query_params.get(&"utm_source".to_string()), 1);
        assert_eq!(tables.file_extensions.total(), 2);
        assert_eq!(tables.query_param_counts.get(&0), 4);
    }

    #[test]
    fn repeated_segment_counts_each_occurrence() {
        let tables = AggregateTables::fold(&parsed(SAMPLE));
        // two from "/blog/post-*" and two from "/relative/blog/blog"
        assert_eq!(tables.segments.get(&"blog".to_string()), 4);
    }

    #[test]
    fn chunked_merge_equals_single_pass() {
        let all = parsed(SAMPLE);
        let whole = AggregateTables::fold(&all);
        for size in 1..=all.len() {
            let mut merged = AggregateTables::new();
            for chunk in all.chunks(size) {
                merged.merge(AggregateTables::fold(chunk));
            }
            assert_eq!(merged, whole, "chunk size {size}");
        }
    }

    #[test]
    fn empty_fold() {
        let tables = AggregateTables::fold(&Vec::<ParsedUrl>::new());
        assert_eq!(tables.total_urls(), 0);
        assert!(tables.domains.is_empty());
    }
}
