//! `urlscope analyze <FILE>` – ingest, analyze, write reports, print a summary.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Instant;
use urlscope_core::config::UrlscopeConfig;
use urlscope_core::export::{self, ReportNames};
use urlscope_core::ingest;
use urlscope_core::insights::thousands;
use urlscope_core::{AnalysisResult, Pipeline};

/// N-grams shown in the terminal summary.
const SUMMARY_NGRAMS: usize = 10;

#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub file: PathBuf,
    pub client: String,
    pub out: Option<PathBuf>,
    pub ngram_size: Option<usize>,
    pub min_count: Option<usize>,
    pub top: Option<usize>,
    pub json: bool,
}

impl AnalyzeOptions {
    /// Config with command-line overrides applied.
    fn effective_config(&self, cfg: &UrlscopeConfig) -> UrlscopeConfig {
        let mut cfg = cfg.clone();
        if let Some(n) = self.ngram_size {
            cfg.ngram.size = n;
        }
        if let Some(n) = self.min_count {
            cfg.ngram.min_count = n;
        }
        if let Some(n) = self.top {
            cfg.top_n = n;
        }
        if let Some(out) = &self.out {
            cfg.results_dir = out.clone();
        }
        cfg
    }
}

pub async fn run_analyze(cfg: &UrlscopeConfig, opts: AnalyzeOptions) -> Result<()> {
    let started = Instant::now();
    let cfg = opts.effective_config(cfg);
    let pipeline = Pipeline::new(&cfg)?;

    let urls = ingest::read_urls(&opts.file)?;
    let result = pipeline.run(urls).await?;

    let date = chrono::Local::now().date_naive();
    let names = export::write_reports(&result, &cfg.results_dir, &opts.client, date, cfg.report_top_n)?;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let size = std::fs::metadata(&opts.file)
            .with_context(|| format!("stat {}", opts.file.display()))?
            .len();
        print_summary(&result, &names, &cfg.results_dir, started.elapsed().as_secs_f64(), size);
    }
    Ok(())
}

fn print_summary(
    result: &AnalysisResult,
    names: &ReportNames,
    dir: &Path,
    elapsed_secs: f64,
    input_bytes: u64,
) {
    println!("Analysis complete");
    println!(
        "  URLs processed: {} ({} skipped)",
        thousands(result.total_input),
        thousands(result.failed)
    );
    println!("  Input size: {:.2} MiB", input_bytes as f64 / 1_048_576.0);
    println!("  Processing time: {elapsed_secs:.2}s");

    println!("\nInsights:");
    for line in result.insight_lines() {
        println!("  - {line}");
    }

    println!("\nSegmentation suggestions:");
    for rule in &result.segmentation.top {
        println!("{rule}\n");
    }

    println!("Top n-grams:");
    for (ngram, count) in result.ngrams.top(SUMMARY_NGRAMS) {
        println!("  {ngram}: {}", thousands(count));
    }

    println!("\nReports written to {}:", dir.display());
    for name in [&names.text, &names.ngram_csv, &names.rules, &names.catalogue] {
        println!("  {name}");
    }
}
