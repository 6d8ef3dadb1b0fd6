//! CLI for urlscope.

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use urlscope_core::config;

use commands::{run_analyze, run_clean, run_list, AnalyzeOptions};

/// Top-level CLI for urlscope.
#[derive(Debug, Parser)]
#[command(name = "urlscope")]
#[command(about = "urlscope: URL structure analysis and segmentation suggestions", long_about = None)]
pub struct Cli {
    /// Increase log detail (-v, -vv). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Analyze the URLs in a CSV export and write the reports.
    Analyze {
        /// CSV file with a column whose name contains "url".
        file: PathBuf,

        /// Client name used in report file names.
        #[arg(long, default_value = "unnamed_client")]
        client: String,

        /// Directory for report files (default: results_dir from config).
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// N-gram window width in path tokens.
        #[arg(long, value_name = "N")]
        ngram_size: Option<usize>,

        /// Drop n-grams seen fewer than N times.
        #[arg(long, value_name = "N")]
        min_count: Option<usize>,

        /// Number of segmentation suggestions.
        #[arg(long, value_name = "N")]
        top: Option<usize>,

        /// Print the full analysis as JSON instead of the summary.
        #[arg(long)]
        json: bool,
    },

    /// List CSV files available for analysis.
    List {
        /// Directory to scan (default: uploads_dir from config).
        dir: Option<PathBuf>,
    },

    /// Delete generated reports and uploaded inputs.
    Clean {
        /// File name in the uploads dir to keep (repeatable).
        #[arg(long, value_name = "NAME")]
        keep: Vec<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match self.command {
            CliCommand::Analyze {
                file,
                client,
                out,
                ngram_size,
                min_count,
                top,
                json,
            } => {
                let opts = AnalyzeOptions {
                    file,
                    client,
                    out,
                    ngram_size,
                    min_count,
                    top,
                    json,
                };
                run_analyze(&cfg, opts).await?;
            }
            CliCommand::List { dir } => run_list(&dir.unwrap_or_else(|| cfg.uploads_dir.clone()))?,
            CliCommand::Clean { keep } => run_clean(&cfg, &keep)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
