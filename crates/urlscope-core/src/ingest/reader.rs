//! Delimited-text reading on top of the `csv` crate, plus the `sep=<c>`
//! first line that spreadsheet exports sometimes carry.

use crate::error::IngestError;

/// Delimiter from a leading `sep=<c>` line, if present, and the remaining text.
/// Only single-byte delimiters are honoured; any other `sep=` line is dropped
/// and `,` is used.
pub fn detect_separator(text: &str) -> (u8, &str) {
    let (first, rest) = text.split_once('\n').unwrap_or((text, ""));
    let first = first.trim_start_matches('\u{feff}').trim_end_matches('\r');
    match first.strip_prefix("sep=").map(|sep| sep.chars().last()) {
        Some(Some(c)) if c.is_ascii() => (c as u8, rest),
        Some(_) => (b',', rest),
        None => (b',', text),
    }
}

/// Every record of `text`, header row first. Rows may differ in length.
pub fn parse_records(text: &str, delimiter: u8) -> Result<Vec<Vec<String>>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    reader
        .records()
        .map(|record| -> Result<Vec<String>, IngestError> {
            Ok(record?.iter().map(str::to_owned).collect())
        })
        .collect()
}
