//! URL provenance - which discovery channel contributed a research URL

use std::fmt;

/// Discovery channel that produced a URL
///
/// Declaration order is merge precedence: when two channels yield the same
/// page, the earlier channel's entry is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UrlProvenance {
    /// Parsed from the prospect's sitemap
    Sitemap,

    /// Taken from search-engine results
    Serp,

    /// Guessed from common business-page paths
    Default,
}

impl UrlProvenance {
    /// All channels in merge precedence order
    pub const PRECEDENCE: [UrlProvenance; 3] = [
        UrlProvenance::Sitemap,
        UrlProvenance::Serp,
        UrlProvenance::Default,
    ];

    /// Get the persisted name of the channel
    pub fn as_str(&self) -> &'static str {
        match self {
            UrlProvenance::Sitemap => "sitemap",
            UrlProvenance::Serp => "serp",
            UrlProvenance::Default => "default",
        }
    }
}

impl fmt::Display for UrlProvenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
