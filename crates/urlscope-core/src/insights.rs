//! Summary statements derived from the aggregate tables.

use serde::Serialize;
use std::fmt;

use crate::aggregate::{AggregateTables, FrequencyTable};

/// One derived statement. `Display` renders the report line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Insight {
    TotalUrls(usize),
    MostCommonProtocol(String),
    MostCommonSubdomain(String),
    MostCommonDomain(String),
    MostCommonPath(String),
    MostCommonPathWithoutParams(String),
    MostCommonQueryParam(String),
    MostCommonFileExtension(String),
    AveragePathDepth(f64),
    AverageQueryParams(f64),
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Insight::TotalUrls(n) => write!(f, "Total URLs analyzed: {}", thousands(*n)),
            Insight::MostCommonProtocol(v) => write!(f, "Most common protocol: {v}"),
            Insight::MostCommonSubdomain(v) => write!(f, "Most common subdomain: {v}"),
            Insight::MostCommonDomain(v) => write!(f, "Most common domain: {v}"),
            Insight::MostCommonPath(v) => write!(f, "Most common path: {v}"),
            Insight::MostCommonPathWithoutParams(v) => {
                write!(f, "Most common path without parameters: {v}")
            }
            Insight::MostCommonQueryParam(v) => write!(f, "Most common query parameter: {v}"),
            Insight::MostCommonFileExtension(v) => write!(f, "Most common file extension: {v}"),
            Insight::AveragePathDepth(avg) => write!(f, "Average path depth: {avg:.2}"),
            Insight::AverageQueryParams(avg) => {
                write!(f, "Average number of query parameters: {avg:.2}")
            }
        }
    }
}

/// Builds the insight list in report order.
///
/// "Most common" ties go to the value seen first. The subdomain statement
/// only considers non-empty subdomains. Averages are omitted when no URL was
/// counted.
pub fn generate_insights(tables: &AggregateTables) -> Vec<Insight> {
    let total = tables.total_urls();
    let mut out = vec![Insight::TotalUrls(total)];

    let top = |t: &FrequencyTable<String>| t.most_common().map(|(v, _)| v.clone());

    if let Some(v) = top(&tables.protocols) {
        out.push(Insight::MostCommonProtocol(v));
    }
    if let Some((v, _)) = tables.subdomains.most_common_by(|s| !s.is_empty()) {
        out.push(Insight::MostCommonSubdomain(v.clone()));
    }
    if let Some(v) = top(&tables.domains) {
        out.push(Insight::MostCommonDomain(v));
    }
    if let Some(v) = top(&tables.paths) {
        out.push(Insight::MostCommonPath(v));
    }
    if let Some(v) = top(&tables.paths_without_params) {
        out.push(Insight::MostCommonPathWithoutParams(v));
    }
    if let Some(v) = top(&tables.query_params) {
        out.push(Insight::MostCommonQueryParam(v));
    }
    if let Some(v) = top(&tables.file_extensions) {
        out.push(Insight::MostCommonFileExtension(v));
    }

    if let Some(avg) = weighted_mean(&tables.path_lengths, total) {
        out.push(Insight::AveragePathDepth(avg));
    }
    if let Some(avg) = weighted_mean(&tables.query_param_counts, total) {
        out.push(Insight::AverageQueryParams(avg));
    }
    out
}

/// `Σ(k × count) / total`, `None` when `total` is zero.
fn weighted_mean(table: &FrequencyTable<usize>, total: usize) -> Option<f64> {
    if total == 0 {
        return None;
    }
    let sum: usize = table.iter().map(|(k, c)| k * c).sum();
    Some(sum as f64 / total as f64)
}

/// Formats with `,` thousands separators: 1234567 -> "1,234,567".
pub fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url_model::decompose;

    fn tables(urls: &[&str]) -> AggregateTables {
        let parsed: Vec<_> = urls.iter().map(|u| decompose(u).unwrap()).collect();
        AggregateTables::fold(&parsed)
    }

    fn lines(insights: &[Insight]) -> Vec<String> {
        insights.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn full_insight_list() {
        let t = tables(&[
            "https://www.example.com/a/b.html?x=1",
            "https://www.example.com/a/b.html?x=2&y=3",
            "http://example.com/c",
        ]);
        assert_eq!(
            lines(&generate_insights(&t)),
            vec![
                "Total URLs analyzed: 3",
                "Most common protocol: https",
                "Most common subdomain: www",
                "Most common domain: example.com",
                "Most common path: /a/b.html",
                "Most common path without parameters: /a/b.html",
                "Most common query parameter: x",
                "Most common file extension: html",
                "Average path depth: 2.67",
                "Average number of query parameters: 1.00",
            ]
        );
    }

    #[test]
    fn optional_statements_are_skipped() {
        let t = tables(&["https://example.com/a", "https://example.com/b"]);
        let out = generate_insights(&t);
        assert!(!out
            .iter()
            .any(|i| matches!(i, Insight::MostCommonSubdomain(_))));
        assert!(!out
            .iter()
            .any(|i| matches!(i, Insight::MostCommonQueryParam(_))));
        assert!(!out
            .iter()
            .any(|i| matches!(i, Insight::MostCommonFileExtension(_))));
    }

    #[test]
    fn ties_pick_first_seen() {
        let t = tables(&["https://a.com/x", "https://b.com/y", "https://b.com/x", "https://a.com/y"]);
        let out = generate_insights(&t);
        assert!(out.contains(&Insight::MostCommonDomain("a.com".into())));
        assert!(out.contains(&Insight::MostCommonPath("/x".into())));
    }

    #[test]
    fn empty_input_has_no_averages() {
        let out = generate_insights(&AggregateTables::new());
        assert_eq!(out, vec![Insight::TotalUrls(0)]);
    }

    #[test]
    fn thousands_separator() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(1234567), "1,234,567");
    }
}
