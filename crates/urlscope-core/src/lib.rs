pub mod config;
pub mod error;
pub mod logging;

// Analysis engine
pub mod aggregate;
pub mod insights;
pub mod ngram;
pub mod pipeline;
pub mod segmentation;
pub mod url_model;

// I/O around the engine
pub mod export;
pub mod ingest;

pub use pipeline::{AnalysisResult, Pipeline};
