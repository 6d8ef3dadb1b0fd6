//! Analysis pipeline: chunked decomposition, in-order fold, derived outputs.
//!
//! Input is cut into fixed-size chunks. Chunks are decomposed on the blocking
//! pool with a bounded number in flight; finished chunks are folded strictly
//! in chunk order, so the result never depends on chunk size or completion
//! order. Insights, n-grams and segmentation run only after every chunk has
//! been folded.

mod chunk;

use anyhow::Result;
use serde::Serialize;
use std::ops::Range;
use std::sync::Arc;
use tokio::task::JoinSet;

use crate::aggregate::AggregateTables;
use crate::config::UrlscopeConfig;
use crate::error::ConfigError;
use crate::insights::{generate_insights, Insight};
use crate::ngram::{ngrams, NgramParams, NgramTable};
use crate::segmentation::{top_rules, Segmentation};

use chunk::{decompose_chunk, Accumulator, ChunkOutcome};

/// Everything one analysis run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// URLs handed to the pipeline, failures included.
    pub total_input: usize,
    /// URLs that could not be decomposed and were left out of every table.
    pub failed: usize,
    pub tables: AggregateTables,
    pub insights: Vec<Insight>,
    pub ngrams: NgramTable,
    pub segmentation: Segmentation,
}

impl AnalysisResult {
    /// Insight statements as report lines.
    pub fn insight_lines(&self) -> Vec<String> {
        self.insights.iter().map(ToString::to_string).collect()
    }
}

#[derive(Debug, Clone)]
pub struct Pipeline {
    chunk_size: usize,
    concurrency: usize,
    top_n: usize,
    ngram: NgramParams,
}

impl Pipeline {
    /// Validates `cfg` up front; nothing is processed with bad parameters.
    pub fn new(cfg: &UrlscopeConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            chunk_size: cfg.chunk_size,
            concurrency: cfg.concurrency(),
            top_n: cfg.top_n,
            ngram: cfg.ngram_params(),
        })
    }

    /// Runs the pipeline inside a tokio runtime.
    ///
    /// Up to `max_concurrent_chunks` chunks are decomposed at once. Every task
    /// reads its range straight out of the shared input. The task yields after
    /// each completed chunk so other work on the runtime keeps moving during
    /// large runs.
    pub async fn run(&self, urls: impl Into<Arc<[String]>>) -> Result<AnalysisResult> {
        let urls: Arc<[String]> = urls.into();
        let ranges = chunk_ranges(urls.len(), self.chunk_size);
        tracing::debug!(
            urls = urls.len(),
            chunks = ranges.len(),
            concurrency = self.concurrency,
            "starting analysis"
        );

        let mut slots: Vec<Option<ChunkOutcome>> = (0..ranges.len()).map(|_| None).collect();
        let mut next_to_fold = 0usize;
        let mut acc = Accumulator::default();
        let mut queue = ranges.into_iter().enumerate();
        let mut join_set = JoinSet::new();

        loop {
            while join_set.len() < self.concurrency {
                let Some((index, range)) = queue.next() else {
                    break;
                };
                let urls = Arc::clone(&urls);
                join_set.spawn_blocking(move || (index, decompose_chunk(index, &urls[range])));
            }

            let Some(res) = join_set.join_next().await else {
                break;
            };
            let (index, outcome) = res.map_err(|e| anyhow::anyhow!("chunk task join: {}", e))?;
            slots[index] = Some(outcome);

            while let Some(outcome) = slots.get_mut(next_to_fold).and_then(Option::take) {
                acc.absorb(outcome);
                next_to_fold += 1;
            }

            tokio::task::yield_now().await;
        }

        self.finish(acc, &urls[..])
    }

    /// Same chunked fold on the current thread, no runtime needed.
    pub fn run_blocking<S: AsRef<str>>(&self, urls: &[S]) -> Result<AnalysisResult> {
        let mut acc = Accumulator::default();
        for (index, chunk) in urls.chunks(self.chunk_size).enumerate() {
            acc.absorb(decompose_chunk(index, chunk));
        }
        self.finish(acc, urls)
    }

    fn finish<S: AsRef<str>>(&self, acc: Accumulator, urls: &[S]) -> Result<AnalysisResult> {
        let Accumulator {
            tables,
            catalogue,
            failed,
        } = acc;

        let insights = generate_insights(&tables);
        let ngrams = ngrams(urls, self.ngram)?;
        let segmentation = Segmentation {
            top: top_rules(&tables.segments, self.top_n),
            catalogue,
        };

        tracing::info!(
            total = urls.len(),
            analyzed = tables.total_urls(),
            failed,
            ngrams = ngrams.len(),
            "analysis complete"
        );

        Ok(AnalysisResult {
            total_input: urls.len(),
            failed,
            tables,
            insights,
            ngrams,
            segmentation,
        })
    }
}

/// Contiguous `size`-long index ranges covering `0..len`; the last may be short.
fn chunk_ranges(len: usize, size: usize) -> Vec<Range<usize>> {
    (0..len)
        .step_by(size)
        .map(|start| start..(start + size).min(len))
        .collect()
}
