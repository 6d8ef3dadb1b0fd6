//! Domain / subdomain split of a network location.

/// Splits `netloc` on `.` into `(subdomain, domain)`.
///
/// The domain is always the last two labels; everything before them is the
/// subdomain. No public-suffix awareness: `a.b.co.uk` yields `("a.b", "co.uk")`.
/// The network location is used as-is, so a port or userinfo stays attached
/// to whichever label it sits in.
pub fn split_host(netloc: &str) -> (String, String) {
    if netloc.is_empty() {
        return (String::new(), String::new());
    }
    let labels: Vec<&str> = netloc.split('.').collect();
    let cut = labels.len().saturating_sub(2);
    (labels[..cut].join("."), labels[cut..].join("."))
}
