//! Qualifai Domain Layer
//!
//! Value types shared by the discovery and gatekeeper crates. Like the rest of
//! the domain layer this crate carries no behaviour beyond what the types
//! themselves guarantee, and depends on nothing but `uuid` (plus `serde`
//! behind the `serde` feature).
//!
//! ## Key Concepts
//!
//! - **Evidence item**: one piece of scraped or generated text about a
//!   prospect's workflow, tagged with a source type, a workflow tag and a
//!   confidence score
//! - **Source type**: the channel the evidence came from (website, reviews, ...)
//! - **Evidence metadata**: which adapter produced the item and whether it is
//!   a templated fallback
//! - **URL provenance**: which discovery channel contributed a research URL
//! - **Traffic light**: the red/amber/green send-time view of evidence quality

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod confidence;
pub mod evidence;
pub mod provenance;
pub mod source_type;
pub mod traffic_light;
pub mod traits;

// Re-exports for convenience
pub use evidence::{EvidenceId, EvidenceItem, EvidenceMetadata};
pub use provenance::UrlProvenance;
pub use source_type::SourceType;
pub use traffic_light::TrafficLight;
pub use traits::EvidenceKey;
