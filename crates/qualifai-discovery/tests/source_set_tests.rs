//! Integration tests for qualifai-discovery
//!
//! These tests drive the public API the way the research pipeline does:
//! build a source set, cache it in a snapshot, read it back, dedupe evidence.

use chrono::{Duration, TimeZone, Utc};
use qualifai_discovery::{
    build_source_set, default_research_urls, extract_source_set, source_set_snapshot,
    ChannelCounts, DiscoveryConfig, EvidenceDeduplicator, SourceSetBuilder,
};
use qualifai_domain::{EvidenceItem, EvidenceMetadata, SourceType, UrlProvenance};

fn numbered(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("https://example.com/{prefix}/{i}")).collect()
}

#[test]
fn test_caps_without_overlap() {
    let set = build_source_set(&numbered("s", 50), &numbered("q", 20), &numbered("d", 25), None);

    assert_eq!(set.urls.len(), 25 + 15 + 20);
    assert_eq!(set.raw_counts.sitemap, ChannelCounts { discovered: 50, capped: 25 });
    assert_eq!(set.raw_counts.serp, ChannelCounts { discovered: 20, capped: 15 });
    assert_eq!(set.raw_counts.default, ChannelCounts { discovered: 25, capped: 20 });
    assert_eq!(set.dedup_removed_count, 0);
}

#[test]
fn test_shared_page_keeps_sitemap_provenance() {
    let shared = vec!["https://example.com/shared-page".to_string()];
    let set = build_source_set(&shared, &shared, &Vec::<String>::new(), None);

    let matches: Vec<_> = set
        .urls
        .iter()
        .filter(|u| u.url == "https://example.com/shared-page")
        .collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].provenance, UrlProvenance::Sitemap);
    assert_eq!(set.dedup_removed_count, 1);
}

#[test]
fn test_default_guesses_fill_in_behind_sitemap() {
    let sitemap = vec![
        "https://www.example.nl/".to_string(),
        "https://www.example.nl/werkwijze/".to_string(),
    ];
    let guesses = default_research_urls("example.nl");
    let set = build_source_set(&sitemap, &Vec::<String>::new(), &guesses, None);

    assert_eq!(set.dedup_removed_count, 2);
    assert_eq!(set.urls.len(), guesses.len());
    assert!(set.urls_from(UrlProvenance::Default).all(|u| !u.js_heavy_hint));
}

#[test]
fn test_cached_set_survives_snapshot_and_expires() {
    let built_at = Utc.with_ymd_and_hms(2026, 2, 27, 10, 0, 0).unwrap();
    let config = DiscoveryConfig::default();
    let set = SourceSetBuilder::new(config.clone()).build_at(
        &numbered("s", 3),
        &["https://www.linkedin.com/company/example"],
        &default_research_urls("example.com"),
        Some(built_at),
        built_at,
    );

    let snapshot = source_set_snapshot(&set).unwrap();
    let cached = extract_source_set(&snapshot).expect("snapshot should round-trip");
    assert_eq!(cached, set);

    assert!(cached.is_fresh(built_at + Duration::hours(12), config.source_set_max_age()));
    assert!(!cached.is_fresh(built_at + Duration::hours(25), config.source_set_max_age()));
}

#[test]
fn test_evidence_items_dedupe_by_url_tag_and_snippet() {
    let item = |tag: &str, snippet: &str| {
        EvidenceItem::new(
            SourceType::Website,
            "https://example.nl/werkwijze",
            tag,
            0.7,
            EvidenceMetadata::from_adapter("crawl4ai"),
        )
        .with_snippet(snippet)
    };

    let drafts = vec![
        item("planning", "Planning gaat via Excel"),
        item("planning", "planning gaat via excel"),
        item("handoff", "Planning gaat via Excel"),
    ];
    let unique = EvidenceDeduplicator::from_config(&DiscoveryConfig::default()).dedupe(drafts);

    assert_eq!(unique.len(), 2);
    assert_eq!(unique[0].snippet, "Planning gaat via Excel");
    assert_eq!(unique[1].workflow_tag, "handoff");
}
