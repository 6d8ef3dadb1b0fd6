//! `urlscope clean` – delete generated reports and uploaded inputs.

use anyhow::Result;
use urlscope_core::config::UrlscopeConfig;
use urlscope_core::export;

pub fn run_clean(cfg: &UrlscopeConfig, keep: &[String]) -> Result<()> {
    let results = export::clean_dir(&cfg.results_dir, &[])?;
    let uploads = export::clean_dir(&cfg.uploads_dir, keep)?;
    tracing::info!(results, uploads, "cleaned output and upload dirs");
    println!(
        "Removed {results} report file(s) from {} and {uploads} upload(s) from {}.",
        cfg.results_dir.display(),
        cfg.uploads_dir.display()
    );
    Ok(())
}
