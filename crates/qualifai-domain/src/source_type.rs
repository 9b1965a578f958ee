//! Source type module - the channel a piece of evidence came from

use std::fmt;

/// Channel a piece of evidence was gathered from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum SourceType {
    /// The prospect's own website
    Website,

    /// Product or process documentation
    Docs,

    /// Careers pages on the prospect's site
    Careers,

    /// Help center or support articles
    HelpCenter,

    /// External job boards
    JobBoard,

    /// A URL an operator added by hand
    ManualUrl,

    /// Review platforms
    Reviews,

    /// Company registries
    Registry,
}

impl SourceType {
    /// Every source type, in declaration order
    pub const ALL: [SourceType; 8] = [
        SourceType::Website,
        SourceType::Docs,
        SourceType::Careers,
        SourceType::HelpCenter,
        SourceType::JobBoard,
        SourceType::ManualUrl,
        SourceType::Reviews,
        SourceType::Registry,
    ];

    /// Get the persisted name of the source type
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Website => "WEBSITE",
            SourceType::Docs => "DOCS",
            SourceType::Careers => "CAREERS",
            SourceType::HelpCenter => "HELP_CENTER",
            SourceType::JobBoard => "JOB_BOARD",
            SourceType::ManualUrl => "MANUAL_URL",
            SourceType::Reviews => "REVIEWS",
            SourceType::Registry => "REGISTRY",
        }
    }

    /// Parse a source type, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        let upper = s.trim().to_uppercase();
        Self::ALL.into_iter().find(|t| t.as_str() == upper)
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid source type: {}", s))
    }
}
