//! Error types for the analysis engine.
//!
//! Per-URL failures are values, not panics: the pipeline logs and counts them
//! and keeps going. Configuration errors are rejected before any work starts.

use thiserror::Error;

/// A single URL could not be split into its structural parts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecomposeError {
    /// Network location has a `[` without `]` or the other way round.
    #[error("invalid IPv6 literal in network location: {netloc}")]
    InvalidIpv6 { netloc: String },
    /// A `%` not followed by two hex digits.
    #[error("malformed percent-encoding in {component} at byte {offset}")]
    MalformedPercentEncoding {
        component: &'static str,
        offset: usize,
    },
}

/// Invalid analysis parameters (n-gram size, thresholds, chunking).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("n-gram size must be at least 1 (got {0})")]
    InvalidNgramSize(usize),
    #[error("n-gram minimum count must be at least 1 (got {0})")]
    InvalidMinCount(usize),
    #[error("chunk size must be at least 1 (got {0})")]
    InvalidChunkSize(usize),
    #[error("top-N must be at least 1 (got {0})")]
    InvalidTopN(usize),
}

/// CSV ingestion failures.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("input has no header row")]
    MissingHeader,
    #[error("no URL column found; columns: {}", .columns.join(", "))]
    NoUrlColumn { columns: Vec<String> },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}
