//! Report export: renders an analysis and writes the report files.

mod filename;
mod render;

pub use filename::{sanitize_client_name, ReportNames};
pub use render::{
    render_catalogue_markdown, render_ngram_csv, render_rules, render_text_report,
};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::pipeline::AnalysisResult;

/// Writes the text report, n-gram CSV, rule file and markdown catalogue into
/// `dir` (created if missing). Returns the file names written.
pub fn write_reports(
    result: &AnalysisResult,
    dir: &Path,
    client: &str,
    date: NaiveDate,
    report_top_n: usize,
) -> Result<ReportNames> {
    fs::create_dir_all(dir).with_context(|| format!("create results dir: {}", dir.display()))?;
    let names = ReportNames::new(client, date);

    let files = [
        (&names.text, render_text_report(result, report_top_n)?),
        (&names.ngram_csv, render_ngram_csv(result)?),
        (&names.rules, render_rules(result)),
        (
            &names.catalogue,
            render_catalogue_markdown(&result.segmentation.catalogue)?,
        ),
    ];
    for (name, contents) in files {
        let path = dir.join(name);
        fs::write(&path, contents).with_context(|| format!("write report: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "wrote report");
    }

    Ok(names)
}

/// Deletes regular files directly inside `dir`, skipping names in `keep`.
/// A missing directory counts as already clean. Returns how many were removed.
pub fn clean_dir(dir: &Path, keep: &[String]) -> Result<usize> {
    if !dir.exists() {
        return Ok(0);
    }
    let mut removed = 0;
    for entry in fs::read_dir(dir).with_context(|| format!("read dir: {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if keep.iter().any(|k| entry.file_name().to_string_lossy() == k.as_str()) {
            continue;
        }
        fs::remove_file(&path).with_context(|| format!("remove: {}", path.display()))?;
        removed += 1;
    }
    Ok(removed)
}

/// `.csv` files directly inside `dir`, sorted by name.
pub fn list_csv_files(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read dir: {}", dir.display()))? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_csv = Path::new(&name)
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
        if is_csv && entry.path().is_file() {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UrlscopeConfig;
    use crate::pipeline::Pipeline;
    use tempfile::tempdir;

    #[test]
    fn writes_all_four_files() {
        let result = Pipeline::new(&UrlscopeConfig::default())
            .unwrap()
            .run_blocking(&["https://example.com/blog/x"])
            .unwrap();
        let dir = tempdir().unwrap();
        let out = dir.path().join("results");
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let names = write_reports(&result, &out, "Acme Co", date, 20).unwrap();

        assert_eq!(names.text, "url_analysis_Acme_Co_20240131.txt");
        for name in [&names.text, &names.ngram_csv, &names.rules, &names.catalogue] {
            assert!(out.join(name).is_file(), "{name} missing");
        }
        let rules = fs::read_to_string(out.join(&names.rules)).unwrap();
        assert!(rules.starts_with("[segment:auto_generated]"));
    }

    #[test]
    fn clean_keeps_named_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("sample.csv"), "url\n").unwrap();
        fs::write(dir.path().join("other.csv"), "url\n").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let removed = clean_dir(dir.path(), &["sample.csv".to_string()]).unwrap();
        assert_eq!(removed, 1);
        assert!(dir.path().join("sample.csv").exists());
        assert!(dir.path().join("sub").exists());
    }

    #[test]
    fn clean_missing_dir_is_noop() {
        let dir = tempdir().unwrap();
        assert_eq!(clean_dir(&dir.path().join("nope"), &[]).unwrap(), 0);
    }

    #[test]
    fn lists_only_csv() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.CSV"), "").unwrap();
        fs::write(dir.path().join("a.csv"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        assert_eq!(list_csv_files(dir.path()).unwrap(), vec!["a.csv", "b.CSV"]);
    }
}
