//! Pure renderers: each turns an [`AnalysisResult`] into file contents.

use anyhow::Result;
use std::fmt::{self, Display, Write};
use std::hash::Hash;

use crate::aggregate::FrequencyTable;
use crate::insights::thousands;
use crate::pipeline::AnalysisResult;
use crate::segmentation::{render_rule_file, rule_block, DepthCatalogue};

/// N-grams listed in the text report.
const REPORT_NGRAMS: usize = 20;

/// Human-readable report. `top_n` bounds each frequency table.
pub fn render_text_report(result: &AnalysisResult, top_n: usize) -> Result<String, fmt::Error> {
    let mut out = String::new();
    out.push_str("URL Analysis Results\n\n");

    out.push_str("Insights:\n");
    for line in result.insight_lines() {
        writeln!(out, "- {line}")?;
    }
    if result.failed > 0 {
        writeln!(out, "- URLs skipped (could not be parsed): {}", thousands(result.failed))?;
    }

    out.push_str("\nSegmentation Suggestions:\n");
    for rule in &result.segmentation.top {
        write!(out, "{rule}\n\n")?;
    }

    out.push_str("Segmentation Rules:\n");
    out.push_str(&render_rule_file(&result.segmentation.top));

    out.push_str("\n\nFull Analysis:\n");
    for (name, table) in result.tables.string_tables() {
        write_table(&mut out, name, table, top_n)?;
    }
    write_table(&mut out, "path_length", &result.tables.path_lengths, top_n)?;
    write_table(&mut out, "query_param_count", &result.tables.query_param_counts, top_n)?;

    out.push_str("Ngram Analysis:\n");
    for (ngram, count) in result.ngrams.top(REPORT_NGRAMS) {
        writeln!(out, "  {ngram}: {}", thousands(count))?;
    }
    Ok(out)
}

fn write_table<K: Display + Eq + Hash + Clone>(
    out: &mut String,
    name: &str,
    table: &FrequencyTable<K>,
    top_n: usize,
) -> fmt::Result {
    writeln!(out, "{name}:")?;
    for (value, count) in table.top(top_n) {
        writeln!(out, "  {value}: {}", thousands(count))?;
    }
    out.push('\n');
    Ok(())
}

/// Two-column `Ngram,Count` table, most frequent first.
pub fn render_ngram_csv(result: &AnalysisResult) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Ngram", "Count"])?;
    for (ngram, count) in result.ngrams.ranked() {
        writer.write_record([ngram, count.to_string().as_str()])?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Segmentation rule file for the top suggestions.
pub fn render_rules(result: &AnalysisResult) -> String {
    render_rule_file(&result.segmentation.top)
}

/// Markdown catalogue: one section per depth, one fenced rule per value.
pub fn render_catalogue_markdown(catalogue: &DepthCatalogue) -> Result<String, fmt::Error> {
    let mut out = String::from("# Segmentation Recommendations\n\n");
    for (level, values) in catalogue {
        write!(out, "## Level {level}\n\n")?;
        for value in values {
            write!(out, "```\n{}\n```\n\n", rule_block(value))?;
        }
    }
    Ok(out)
}
