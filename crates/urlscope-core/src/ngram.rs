//! N-grams over raw path tokens.
//!
//! Tokens come from splitting the path on `/` without trimming, so the empty
//! token before a leading slash takes part: "/a/b" has 2-grams "/a" and "a/b".

use serde::Serialize;

use crate::aggregate::FrequencyTable;
use crate::error::ConfigError;
use crate::url_model::{raw_tokens, split_url};

pub const DEFAULT_NGRAM_SIZE: usize = 2;
pub const DEFAULT_MIN_COUNT: usize = 5;

/// Window size and occurrence threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NgramParams {
    pub n: usize,
    pub min_count: usize,
}

impl Default for NgramParams {
    fn default() -> Self {
        Self {
            n: DEFAULT_NGRAM_SIZE,
            min_count: DEFAULT_MIN_COUNT,
        }
    }
}

impl NgramParams {
    pub fn new(n: usize, min_count: usize) -> Result<Self, ConfigError> {
        let params = Self { n, min_count };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n < 1 {
            return Err(ConfigError::InvalidNgramSize(self.n));
        }
        if self.min_count < 1 {
            return Err(ConfigError::InvalidMinCount(self.min_count));
        }
        Ok(())
    }
}

/// N-gram counts at or above the threshold, first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NgramTable(FrequencyTable<String>);

impl NgramTable {
    pub fn get(&self, ngram: &str) -> usize {
        self.0.get(&ngram.to_string())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Count descending; ties keep first-seen order.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        self.0
            .ranked()
            .into_iter()
            .map(|(k, c)| (k.as_str(), c))
            .collect()
    }

    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

/// Counts width-`n` windows of consecutive raw path tokens across `urls`.
///
/// Each URL's path is split again from the raw string. URLs that fail to
/// split are skipped; the pipeline has already logged them.
pub fn ngrams<S: AsRef<str>>(urls: &[S], params: NgramParams) -> Result<NgramTable, ConfigError> {
    params.validate()?;
    let mut counts: FrequencyTable<String> = FrequencyTable::new();

    for url in urls {
        let Ok(parts) = split_url(url.as_ref()) else {
            continue;
        };
        let tokens: Vec<&str> = raw_tokens(&parts.path).collect();
        for window in tokens.windows(params.n) {
            counts.increment(window.join("/"));
        }
    }

    counts.retain(|_, c| c >= params.min_count);
    Ok(NgramTable(counts))
}
