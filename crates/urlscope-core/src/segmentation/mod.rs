//! Segmentation suggestions from path segments.
//!
//! Two views of the same segments: a top-N list ranked by overall frequency
//! (depth ignored), and an exhaustive catalogue of distinct values per depth
//! for manual review.

mod rule;

pub use rule::{path_pattern, render_rule_file, rule_block, SegmentationRule, RULE_FILE_HEADER};

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::aggregate::FrequencyTable;
use crate::url_model::Segment;

pub const DEFAULT_TOP_N: usize = 10;

/// Distinct segment values per depth, sorted within each depth.
pub type DepthCatalogue = BTreeMap<usize, BTreeSet<String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Segmentation {
    pub top: Vec<SegmentationRule>,
    pub catalogue: DepthCatalogue,
}

/// Ranks `segments` and groups them by depth.
///
/// Top list: every occurrence counts, count descending, ties by first-seen
/// order, truncated to `top_n`.
pub fn recommend<'a>(
    segments: impl IntoIterator<Item = &'a Segment>,
    top_n: usize,
) -> Segmentation {
    let mut counts: FrequencyTable<&str> = FrequencyTable::new();
    let mut catalogue = DepthCatalogue::new();

    for seg in segments {
        counts.increment(seg.value.as_str());
        catalogue_insert(&mut catalogue, seg);
    }

    Segmentation {
        top: top_rules(&counts, top_n),
        catalogue,
    }
}

/// Files `seg.value` under `seg.depth`.
pub fn catalogue_insert(catalogue: &mut DepthCatalogue, seg: &Segment) {
    if let Some(values) = catalogue.get_mut(&seg.depth) {
        if !values.contains(&seg.value) {
            values.insert(seg.value.clone());
        }
    } else {
        catalogue.insert(seg.depth, BTreeSet::from([seg.value.clone()]));
    }
}

/// Unions `other` into `catalogue`. Sets are order-free, so chunks may be
/// merged in any order.
pub fn merge_catalogues(catalogue: &mut DepthCatalogue, other: DepthCatalogue) {
    for (depth, values) in other {
        catalogue.entry(depth).or_default().extend(values);
    }
}

/// Top-`top_n` rules from an already-built flat frequency table.
pub fn top_rules<K: AsRef<str> + Eq + std::hash::Hash + Clone>(
    counts: &FrequencyTable<K>,
    top_n: usize,
) -> Vec<SegmentationRule> {
    counts
        .top(top_n)
        .into_iter()
        .enumerate()
        .map(|(i, (value, count))| SegmentationRule {
            value: value.as_ref().to_string(),
            count,
            rank: i + 1,
        })
        .collect()
}
