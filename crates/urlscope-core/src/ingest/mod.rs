//! URL extraction from spreadsheet exports.
//!
//! Picks the first column whose header contains "url" (any case) and returns
//! its non-empty cells in row order.

mod reader;

pub use reader::{detect_separator, parse_records};

use std::path::Path;

use crate::error::IngestError;

/// Index of the first header containing "url", case-insensitive.
pub fn find_url_column(headers: &[String]) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.to_lowercase().contains("url"))
}

/// Extracts URLs from CSV text.
pub fn urls_from_csv(text: &str) -> Result<Vec<String>, IngestError> {
    let (delimiter, body) = detect_separator(text);
    let mut records = parse_records(body, delimiter)?.into_iter();
    let headers = records.next().ok_or(IngestError::MissingHeader)?;
    let headers: Vec<String> = headers
        .into_iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    let Some(col) = find_url_column(&headers) else {
        tracing::warn!(columns = ?headers, "no URL column found");
        return Err(IngestError::NoUrlColumn { columns: headers });
    };
    tracing::debug!(column = %headers[col], "using URL column");

    Ok(records
        .filter_map(|mut row| {
            if col < row.len() {
                Some(row.swap_remove(col))
            } else {
                None
            }
        })
        .filter(|v| !v.trim().is_empty())
        .collect())
}

/// Reads `path` and extracts its URLs.
pub fn read_urls(path: &Path) -> Result<Vec<String>, IngestError> {
    let bytes = std::fs::read(path).map_err(|source| IngestError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    let urls = urls_from_csv(&text)?;
    tracing::info!(path = %path.display(), urls = urls.len(), "read URLs");
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn picks_first_url_column() {
        let csv = "id,Page URL,canonical_url\n1,https://a.com/x,https://c.com\n2,https://b.com/y,\n";
        assert_eq!(urls_from_csv(csv).unwrap(), vec!["https://a.com/x", "https://b.com/y"]);
    }

    #[test]
    fn skips_empty_cells_and_short_rows() {
        let csv = "url,n\nhttps://a.com,1\n,2\n   ,3\n\nhttps://b.com,4\n";
        assert_eq!(urls_from_csv(csv).unwrap(), vec!["https://a.com", "https://b.com"]);
    }

    #[test]
    fn honours_sep_header() {
        let csv = "sep=;\nFull URL;Status\nhttps://a.com/x?a=1,2;200\n";
        assert_eq!(urls_from_csv(csv).unwrap(), vec!["https://a.com/x?a=1,2"]);
    }

    #[test]
    fn missing_url_column() {
        let err = urls_from_csv("name,status\nx,1\n").unwrap_err();
        match err {
            IngestError::NoUrlColumn { columns } => assert_eq!(columns, vec!["name", "status"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_input_has_no_header() {
        assert!(matches!(urls_from_csv(""), Err(IngestError::MissingHeader)));
    }

    #[test]
    fn read_urls_from_file() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"\xef\xbb\xbfURL\nhttps://example.com/a\n").unwrap();
        f.flush().unwrap();
        assert_eq!(read_urls(f.path()).unwrap(), vec!["https://example.com/a"]);
    }

    #[test]
    fn read_urls_missing_file() {
        let err = read_urls(Path::new("/nonexistent/urlscope/input.csv")).unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
    }
}
