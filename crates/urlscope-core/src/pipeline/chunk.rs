//! Per-chunk decomposition and the ordered accumulator.

use crate::aggregate::AggregateTables;
use crate::segmentation::{catalogue_insert, merge_catalogues, DepthCatalogue};
use crate::url_model::decompose;

/// What one chunk contributes to the run.
#[derive(Debug, Default)]
pub(super) struct ChunkOutcome {
    tables: AggregateTables,
    catalogue: DepthCatalogue,
    failed: usize,
}

/// Decomposes every URL in `urls`. Failures are logged and counted, never returned.
pub(super) fn decompose_chunk<S: AsRef<str>>(index: usize, urls: &[S]) -> ChunkOutcome {
    let mut out = ChunkOutcome::default();
    for url in urls {
        let url = url.as_ref();
        match decompose(url) {
            Ok(parsed) => {
                out.tables.record(&parsed);
                for seg in &parsed.segments {
                    catalogue_insert(&mut out.catalogue, seg);
                }
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "skipping URL that failed to parse");
                out.failed += 1;
            }
        }
    }
    tracing::debug!(chunk = index, urls = urls.len(), failed = out.failed, "chunk decomposed");
    out
}

/// Running totals; chunks must be absorbed in input order.
#[derive(Debug, Default)]
pub(super) struct Accumulator {
    pub(super) tables: AggregateTables,
    pub(super) catalogue: DepthCatalogue,
    pub(super) failed: usize,
}

impl Accumulator {
    pub(super) fn absorb(&mut self, outcome: ChunkOutcome) {
        self.tables.merge(outcome.tables);
        merge_catalogues(&mut self.catalogue, outcome.catalogue);
        self.failed += outcome.failed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_counts_failures() {
        let out = decompose_chunk(0, &["https://a.com/x", "https://a.com/%", "/y/z"]);
        assert_eq!(out.failed, 1);
        assert_eq!(out.tables.total_urls(), 2);
        assert_eq!(out.tables.segments.total(), 3);
        assert_eq!(out.catalogue.len(), 2);
    }

    #[test]
    fn absorb_in_order() {
        let mut acc = Accumulator::default();
        acc.absorb(decompose_chunk(0, &["/b"]));
        acc.absorb(decompose_chunk(1, &["/a", "/b//c"]));
        let order: Vec<_> = acc.tables.segments.iter().map(|(k, c)| (k.as_str(), c)).collect();
        assert_eq!(order, vec![("b", 2), ("a", 1), ("c", 1)]);
        let level1: Vec<_> = acc.catalogue[&1].iter().map(String::as_str).collect();
        assert_eq!(level1, vec!["a", "b"]);
        assert!(acc.catalogue[&3].contains("c"));
        assert!(!acc.catalogue.contains_key(&2));
    }
}
