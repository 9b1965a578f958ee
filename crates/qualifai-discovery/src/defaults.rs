//! Guessed research paths for a bare domain

/// Paths likely to describe how a company works
///
/// Dutch conventions first since most prospects are Dutch, English after.
pub const DEFAULT_RESEARCH_PATHS: &[&str] = &[
    "",
    // Dutch company pages
    "/over-ons",
    "/diensten",
    "/vacatures",
    "/werken-bij",
    "/projecten",
    // Dutch process pages
    "/werkwijze",
    "/aanpak",
    "/wat-we-doen",
    "/ons-proces",
    "/zo-werken-wij",
    "/tarieven",
    "/offerte",
    "/offerte-aanvragen",
    "/contact",
    // English
    "/about",
    "/services",
    "/careers",
    "/jobs",
];

/// Guessed research URLs for a domain, home page first
///
/// # Examples
///
/// ```
/// use qualifai_discovery::default_research_urls;
///
/// let urls = default_research_urls("example.nl");
/// assert_eq!(urls[0], "https://example.nl");
/// assert!(urls.contains(&"https://example.nl/werkwijze".to_string()));
/// ```
pub fn default_research_urls(domain: &str) -> Vec<String> {
    let base = format!("https://{}", domain.trim().trim_end_matches('/'));
    DEFAULT_RESEARCH_PATHS
        .iter()
        .map(|path| format!("{base}{path}"))
        .collect()
}
