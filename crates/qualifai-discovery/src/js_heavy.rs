//! Detection of pages that need a browser rather than a static fetch

use regex::{RegexSet, RegexSetBuilder};
use std::sync::LazyLock;

/// Domains and path shapes known to render client-side or block scrapers
///
/// Matched case-insensitively against the raw URL; extend the table rather
/// than adding branches.
pub const JS_HEAVY_PATTERNS: &[&str] = &[
    // Review platforms
    r"trustpilot\.com",
    // Job boards
    r"indeed\.com",
    r"glassdoor\.",
    r"werkzoeken\.",
    r"jobbird\.",
    r"monsterboard\.",
    // Professional network
    r"linkedin\.com",
    // Map providers
    r"google\.com/maps",
    r"maps\.app\.goo",
    // Site builders
    r"webflow\.io",
    r"framer\.website",
    r"framer\.com",
    // Hash-route single page apps
    r"#/",
];

static JS_HEAVY_SET: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSetBuilder::new(JS_HEAVY_PATTERNS)
        .case_insensitive(true)
        .build()
        .expect("JS_HEAVY_PATTERNS are valid regexes")
});

/// Whether the URL likely needs full browser rendering
///
/// # Examples
///
/// ```
/// use qualifai_discovery::detect_js_heavy;
///
/// assert!(detect_js_heavy("https://nl.trustpilot.com/review/example.nl"));
/// assert!(!detect_js_heavy("https://example.nl/over-ons"));
/// ```
pub fn detect_js_heavy(url: &str) -> bool {
    JS_HEAVY_SET.is_match(url)
}
