//! Qualifai Discovery
//!
//! Turns raw discovery output into the bounded inputs a research run works on.
//!
//! # Overview
//!
//! - **Source sets**: merge sitemap, search-engine and guessed URLs, cap each
//!   channel, deduplicate across channels with sitemap > serp > default
//!   precedence, and tag pages that need a browser to render
//! - **Default paths**: the static table of business pages to guess for a
//!   bare domain
//! - **Snapshots**: read a cached source set back from a persisted run without
//!   trusting its shape
//! - **Evidence deduplication**: collapse near-identical drafts from several
//!   adapters and bound the result
//!
//! # Architecture
//!
//! ```text
//! sitemap / serp / guesses → SourceSetBuilder → SourceSet → (crawl) → drafts
//! drafts → EvidenceDeduplicator → evidence → Gatekeeper
//! ```
//!
//! Everything here is pure and synchronous: no network, no storage.
//!
//! # Example Usage
//!
//! ```
//! use qualifai_discovery::{build_source_set, default_research_urls};
//! use qualifai_domain::UrlProvenance;
//!
//! let sitemap = vec!["https://www.example.nl/over-ons/".to_string()];
//! let serp = vec!["https://nl.trustpilot.com/review/example.nl".to_string()];
//! let guesses = default_research_urls("example.nl");
//!
//! let set = build_source_set(&sitemap, &serp, &guesses, None);
//!
//! // The guessed /over-ons duplicates the sitemap entry and is dropped
//! assert_eq!(set.dedup_removed_count, 1);
//! assert_eq!(set.urls[0].provenance, UrlProvenance::Sitemap);
//! assert!(set.urls[1].js_heavy_hint);
//! ```

#![warn(missing_docs)]

mod config;
mod dedup;
mod defaults;
mod error;
mod js_heavy;
mod normalize;
mod snapshot;
mod source_set;

pub use config::DiscoveryConfig;
pub use dedup::{dedupe_evidence, EvidenceDeduplicator};
pub use defaults::{default_research_urls, DEFAULT_RESEARCH_PATHS};
pub use error::DiscoveryError;
pub use js_heavy::{detect_js_heavy, JS_HEAVY_PATTERNS};
pub use normalize::normalize_url_for_dedup;
pub use snapshot::{extract_source_set, source_set_snapshot, SOURCE_SET_KEY};
pub use source_set::{
    build_source_set, ChannelCounts, DiscoveredUrl, RawCounts, SourceSet, SourceSetBuilder,
};
