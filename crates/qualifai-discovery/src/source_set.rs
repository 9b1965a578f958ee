//! Merging discovery channels into one bounded, deduplicated source set

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{detect_js_heavy, normalize_url_for_dedup, DiscoveryConfig};
use qualifai_domain::UrlProvenance;

/// A research URL tagged with where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredUrl {
    /// The URL as discovered, not normalised
    pub url: String,

    /// Channel that contributed it
    pub provenance: UrlProvenance,

    /// True when the page likely needs a browser to render
    #[serde(default)]
    pub js_heavy_hint: bool,
}

/// Pre-cap and post-cap sizes of one channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelCounts {
    /// URLs the channel produced
    pub discovered: usize,

    /// URLs left after the channel cap
    pub capped: usize,
}

/// Channel counts for every provenance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCounts {
    /// Sitemap channel
    pub sitemap: ChannelCounts,

    /// Search-engine results channel
    pub serp: ChannelCounts,

    /// Guessed default paths
    pub default: ChannelCounts,
}

impl RawCounts {
    /// Counts for one channel
    pub fn for_provenance(&self, provenance: UrlProvenance) -> ChannelCounts {
        match provenance {
            UrlProvenance::Sitemap => self.sitemap,
            UrlProvenance::Serp => self.serp,
            UrlProvenance::Default => self.default,
        }
    }

    fn set(&mut self, provenance: UrlProvenance, counts: ChannelCounts) {
        match provenance {
            UrlProvenance::Sitemap => self.sitemap = counts,
            UrlProvenance::Serp => self.serp = counts,
            UrlProvenance::Default => self.default = counts,
        }
    }
}

/// The merged URL list a research run crawls
///
/// No two entries share a normalised URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSet {
    /// Surviving URLs in merge order
    pub urls: Vec<DiscoveredUrl>,

    /// When the set was built
    pub discovered_at: DateTime<Utc>,

    /// Duplicates dropped across and within channels
    #[serde(default)]
    pub dedup_removed_count: usize,

    /// Per-channel sizes before and after capping
    pub raw_counts: RawCounts,

    /// When search-engine discovery ran, if it did
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serp_discovered_at: Option<DateTime<Utc>>,
}

impl SourceSet {
    /// URLs contributed by one channel
    pub fn urls_from(&self, provenance: UrlProvenance) -> impl Iterator<Item = &DiscoveredUrl> {
        self.urls.iter().filter(move |u| u.provenance == provenance)
    }

    /// URLs that should go to the browser renderer
    pub fn js_heavy_urls(&self) -> impl Iterator<Item = &DiscoveredUrl> {
        self.urls.iter().filter(|u| u.js_heavy_hint)
    }

    /// Whether a cached set is still young enough to reuse
    pub fn is_fresh(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        now.signed_duration_since(self.discovered_at) < max_age
    }
}

/// Builds source sets with configurable channel caps
#[derive(Debug, Clone, Default)]
pub struct SourceSetBuilder {
    config: DiscoveryConfig,
}

impl SourceSetBuilder {
    /// Create a builder with the given configuration
    pub fn new(config: DiscoveryConfig) -> Self {
        Self { config }
    }

    /// Build a source set stamped with the current time
    pub fn build(
        &self,
        sitemap_urls: &[impl AsRef<str>],
        serp_urls: &[impl AsRef<str>],
        default_urls: &[impl AsRef<str>],
        serp_discovered_at: Option<DateTime<Utc>>,
    ) -> SourceSet {
        self.build_at(sitemap_urls, serp_urls, default_urls, serp_discovered_at, Utc::now())
    }

    /// Build a source set stamped with `discovered_at`
    ///
    /// Each channel is capped by prefix, then channels merge in precedence
    /// order (sitemap, serp, default) and the first occurrence of every
    /// normalised URL wins.
    pub fn build_at(
        &self,
        sitemap_urls: &[impl AsRef<str>],
        serp_urls: &[impl AsRef<str>],
        default_urls: &[impl AsRef<str>],
        serp_discovered_at: Option<DateTime<Utc>>,
        discovered_at: DateTime<Utc>,
    ) -> SourceSet {
        let channels: [(UrlProvenance, Vec<&str>); 3] = [
            (UrlProvenance::Sitemap, as_strs(sitemap_urls)),
            (UrlProvenance::Serp, as_strs(serp_urls)),
            (UrlProvenance::Default, as_strs(default_urls)),
        ];

        let mut seen = HashSet::new();
        let mut urls = Vec::new();
        let mut dedup_removed_count = 0;
        let mut raw_counts = RawCounts::default();

        for (provenance, list) in channels {
            let cap = self.config.cap_for(provenance);
            let capped = &list[..list.len().min(cap)];
            raw_counts.set(
                provenance,
                ChannelCounts {
                    discovered: list.len(),
                    capped: capped.len(),
                },
            );

            for &url in capped {
                if !seen.insert(normalize_url_for_dedup(url)) {
                    dedup_removed_count += 1;
                    continue;
                }
                urls.push(DiscoveredUrl {
                    url: url.to_string(),
                    provenance,
                    js_heavy_hint: detect_js_heavy(url),
                });
            }
        }

        debug!(
            kept = urls.len(),
            dedup_removed = dedup_removed_count,
            js_heavy = urls.iter().filter(|u| u.js_heavy_hint).count(),
            "Built source set"
        );

        SourceSet {
            urls,
            discovered_at,
            dedup_removed_count,
            raw_counts,
            serp_discovered_at,
        }
    }
}

fn as_strs(list: &[impl AsRef<str>]) -> Vec<&str> {
    list.iter().map(AsRef::as_ref).collect()
}

/// Build a source set with the default channel caps (25 / 15 / 20)
///
/// # Examples
///
/// ```
/// use qualifai_discovery::build_source_set;
///
/// let set = build_source_set(
///     &["https://example.com/shared-page"],
///     &["https://example.com/shared-page"],
///     &[] as &[&str],
///     None,
/// );
/// assert_eq!(set.urls.len(), 1);
/// assert_eq!(set.dedup_removed_count, 1);
/// ```
pub fn build_source_set(
    sitemap_urls: &[impl AsRef<str>],
    serp_urls: &[impl AsRef<str>],
    default_urls: &[impl AsRef<str>],
    serp_discovered_at: Option<DateTime<Utc>>,
) -> SourceSet {
    SourceSetBuilder::default().build(sitemap_urls, serp_urls, default_urls, serp_discovered_at)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const CHANNELS: [UrlProvenance; 3] = [
        UrlProvenance::Sitemap,
        UrlProvenance::Serp,
        UrlProvenance::Default,
    ];

    fn distinct(prefix: &str, n: usize) -> Vec<String> {
        (0..n).map(|i| format!("https://example.com/{prefix}/{i}")).collect()
    }

    fn pages(indices: &[usize]) -> Vec<String> {
        indices
            .iter()
            .map(|i| format!("https://example.com/page-{i}"))
            .collect()
    }

    proptest! {
        /// Property: each channel keeps min(len, cap) URLs when nothing overlaps
        #[test]
        fn test_channel_caps_hold_for_any_length(
            sitemap_len in 0usize..=60,
            serp_len in 0usize..=60,
            default_len in 0usize..=60,
        ) {
            let set = build_source_set(
                &distinct("s", sitemap_len),
                &distinct("q", serp_len),
                &distinct("d", default_len),
                None,
            );
            let config = DiscoveryConfig::default();

            for (provenance, len) in CHANNELS.into_iter().zip([sitemap_len, serp_len, default_len]) {
                let kept = len.min(config.cap_for(provenance));
                prop_assert_eq!(set.urls_from(provenance).count(), kept);
                prop_assert_eq!(
                    set.raw_counts.for_provenance(provenance),
                    ChannelCounts { discovered: len, capped: kept }
                );
            }
            prop_assert_eq!(set.dedup_removed_count, 0);
        }

        /// Property: with overlapping channels the earliest capped channel owns a URL
        #[test]
        fn test_earliest_channel_owns_shared_urls(
            sitemap in prop::collection::vec(0usize..20, 0..40),
            serp in prop::collection::vec(0usize..20, 0..40),
            default in prop::collection::vec(0usize..20, 0..40),
        ) {
            let lists = [pages(&sitemap), pages(&serp), pages(&default)];
            let set = build_source_set(&lists[0], &lists[1], &lists[2], None);
            let config = DiscoveryConfig::default();

            let mut expected: Vec<(String, UrlProvenance)> = Vec::new();
            let mut capped_total = 0;
            for (provenance, list) in CHANNELS.into_iter().zip(&lists) {
                let capped = &list[..list.len().min(config.cap_for(provenance))];
                capped_total += capped.len();
                for url in capped {
                    if !expected.iter().any(|(seen, _)| seen == url) {
                        expected.push((url.clone(), provenance));
                    }
                }
            }

            let actual: Vec<(String, UrlProvenance)> = set
                .urls
                .iter()
                .map(|u| (u.url.clone(), u.provenance))
                .collect();
            prop_assert_eq!(actual, expected);
            prop_assert_eq!(set.urls.len() + set.dedup_removed_count, capped_total);
        }
    }
}
