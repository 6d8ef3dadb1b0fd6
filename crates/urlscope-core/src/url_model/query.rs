//! Query parameter names.

/// Distinct parameter names in first-occurrence order.
///
/// Pairs are split on `&` and decoded as `application/x-www-form-urlencoded`.
/// A pair whose value is empty (`a=` or a bare `a`) does not count.
pub fn query_param_names(query: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        if !names.iter().any(|n| *n == name) {
            names.push(name.into_owned());
        }
    }
    names
}
