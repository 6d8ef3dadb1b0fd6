use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::ngram::{NgramParams, DEFAULT_MIN_COUNT, DEFAULT_NGRAM_SIZE};
use crate::segmentation::DEFAULT_TOP_N;

/// Default number of URLs decomposed per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// N-gram parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NgramConfig {
    /// Window width in raw path tokens.
    pub size: usize,
    /// N-grams seen fewer times than this are dropped.
    pub min_count: usize,
}

impl Default for NgramConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_NGRAM_SIZE,
            min_count: DEFAULT_MIN_COUNT,
        }
    }
}

/// Global configuration loaded from `~/.config/urlscope/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlscopeConfig {
    /// URLs per decomposition chunk.
    pub chunk_size: usize,
    /// Chunks decomposed concurrently (None = available parallelism).
    #[serde(default)]
    pub max_concurrent_chunks: Option<usize>,
    /// Length of the segmentation suggestion list.
    pub top_n: usize,
    /// Entries per table in the text report.
    pub report_top_n: usize,
    /// Where `list` looks for input CSV files.
    pub uploads_dir: PathBuf,
    /// Where reports are written.
    pub results_dir: PathBuf,
    #[serde(default)]
    pub ngram: NgramConfig,
}

impl Default for UrlscopeConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_concurrent_chunks: None,
            top_n: DEFAULT_TOP_N,
            report_top_n: 20,
            uploads_dir: PathBuf::from("uploads"),
            results_dir: PathBuf::from("results"),
            ngram: NgramConfig::default(),
        }
    }
}

impl UrlscopeConfig {
    pub fn ngram_params(&self) -> NgramParams {
        NgramParams {
            n: self.ngram.size,
            min_count: self.ngram.min_count,
        }
    }

    /// Rejects values the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size < 1 {
            return Err(ConfigError::InvalidChunkSize(self.chunk_size));
        }
        if self.top_n < 1 {
            return Err(ConfigError::InvalidTopN(self.top_n));
        }
        self.ngram_params().validate()
    }

    pub fn concurrency(&self) -> usize {
        self.max_concurrent_chunks
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(1)
            })
            .max(1)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlscope")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlscopeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlscopeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UrlscopeConfig = toml::from_str(&data)?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = UrlscopeConfig::default();
        assert_eq!(cfg.chunk_size, 1000);
        assert_eq!(cfg.top_n, 10);
        assert_eq!(cfg.report_top_n, 20);
        assert_eq!(cfg.ngram.size, 2);
        assert_eq!(cfg.ngram.min_count, 5);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UrlscopeConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UrlscopeConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.chunk_size, cfg.chunk_size);
        assert_eq!(parsed.top_n, cfg.top_n);
        assert_eq!(parsed.results_dir, cfg.results_dir);
        assert_eq!(parsed.ngram.size, cfg.ngram.size);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            chunk_size = 250
            top_n = 5
            report_top_n = 50
            uploads_dir = "/srv/in"
            results_dir = "/srv/out"
            max_concurrent_chunks = 2

            [ngram]
            size = 3
            min_count = 1
        "#;
        let cfg: UrlscopeConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.chunk_size, 250);
        assert_eq!(cfg.concurrency(), 2);
        assert_eq!(cfg.results_dir, PathBuf::from("/srv/out"));
        assert_eq!(cfg.ngram_params(), NgramParams { n: 3, min_count: 1 });
    }

    #[test]
    fn config_toml_ngram_section_optional() {
        let toml = r#"
            chunk_size = 10
            top_n = 3
            report_top_n = 20
            uploads_dir = "uploads"
            results_dir = "results"
        "#;
        let cfg: UrlscopeConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.ngram.size, 2);
        assert!(cfg.max_concurrent_chunks.is_none());
        assert!(cfg.concurrency() >= 1);
    }

    #[test]
    fn validate_rejects_zeroes() {
        let cfg = UrlscopeConfig {
            chunk_size: 0,
            ..UrlscopeConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidChunkSize(0)));
        let mut cfg = UrlscopeConfig::default();
        cfg.ngram.min_count = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidMinCount(0)));
    }
}
