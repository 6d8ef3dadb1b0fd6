//! Report file naming.

use chrono::NaiveDate;

/// Fallback when a client name sanitizes to nothing.
const DEFAULT_CLIENT: &str = "unnamed_client";

/// Makes a client name safe to embed in a report filename.
///
/// - Keeps ASCII letters, digits, `-`, `_` and `.`
/// - Replaces everything else (spaces, slashes, control chars) with `_`
/// - Collapses consecutive underscores, trims leading/trailing `.` and `_`
/// - Limits length to 100 bytes
pub fn sanitize_client_name(name: &str) -> String {
    const MAX_LEN: usize = 100;

    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;

    for c in name.chars() {
        let replacement = if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
            c
        } else {
            '_'
        };

        if replacement == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(replacement);
            prev_underscore = false;
        }
    }

    let trimmed = out.trim_matches(|c| c == '.' || c == '_');
    let trimmed = &trimmed[..trimmed.len().min(MAX_LEN)];
    if trimmed.is_empty() {
        DEFAULT_CLIENT.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Names of the four report files for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportNames {
    pub text: String,
    pub ngram_csv: String,
    pub rules: String,
    pub catalogue: String,
}

impl ReportNames {
    pub fn new(client: &str, date: NaiveDate) -> Self {
        let client = sanitize_client_name(client);
        let stamp = date.format("%Y%m%d");
        Self {
            text: format!("url_analysis_{client}_{stamp}.txt"),
            ngram_csv: format!("url_analysis_{client}_{stamp}.csv"),
            rules: format!("segmentation_{client}_{stamp}.txt"),
            catalogue: format!("all_segmentation_{client}_{stamp}.md"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_separators_and_spaces() {
        assert_eq!(sanitize_client_name("Acme Corp/EU"), "Acme_Corp_EU");
    }

    #[test]
    fn trims_dots_and_underscores() {
        assert_eq!(sanitize_client_name("  ..acme..  "), "acme");
    }

    #[test]
    fn collapses_underscores() {
        assert_eq!(sanitize_client_name("a___b  c"), "a_b_c");
    }

    #[test]
    fn empty_falls_back() {
        assert_eq!(sanitize_client_name("../"), "unnamed_client");
        assert_eq!(sanitize_client_name(""), "unnamed_client");
    }

    #[test]
    fn report_names_are_date_stamped() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let names = ReportNames::new("acme", date);
        assert_eq!(names.text, "url_analysis_acme_20240307.txt");
        assert_eq!(names.ngram_csv, "url_analysis_acme_20240307.csv");
        assert_eq!(names.rules, "segmentation_acme_20240307.txt");
        assert_eq!(names.catalogue, "all_segmentation_acme_20240307.md");
    }
}
