//! URL normalisation for cross-channel deduplication

use url::Url;

/// Normalise a URL into its deduplication key
///
/// Drops the scheme, a leading `www.` label, trailing slashes and the
/// fragment, keeps the query string, and lowercases everything. Strings that
/// do not parse as absolute URLs fall back to lowercase, trim, and strip
/// trailing slashes.
///
/// # Examples
///
/// ```
/// use qualifai_discovery::normalize_url_for_dedup;
///
/// assert_eq!(normalize_url_for_dedup("https://www.example.com/page/"), "example.com/page");
/// assert_eq!(normalize_url_for_dedup("http://example.com/page"), "example.com/page");
/// ```
pub fn normalize_url_for_dedup(raw: &str) -> String {
    let Ok(parsed) = Url::parse(raw) else {
        return raw.to_lowercase().trim().trim_end_matches('/').to_string();
    };

    let host = parsed.host_str().unwrap_or_default().to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    let path = parsed.path().trim_end_matches('/').to_lowercase();
    let query = match parsed.query() {
        Some(q) if !q.is_empty() => format!("?{}", q.to_lowercase()),
        _ => String::new(),
    };

    format!("{host}{path}{query}")
}
