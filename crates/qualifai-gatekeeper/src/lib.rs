//! Qualifai Gatekeeper
//!
//! Decides whether a research run produced enough trustworthy evidence to
//! generate and send outreach.
//!
//! The Gatekeeper provides:
//! - Observed versus synthetic classification of evidence
//! - Pain confirmation over observed evidence
//! - The all-or-nothing quality gate
//! - The red/amber/green traffic light used at send time
//! - The human override policy layered on both
//!
//! # Examples
//!
//! ```
//! use qualifai_domain::{EvidenceItem, EvidenceMetadata, SourceType, TrafficLight};
//! use qualifai_gatekeeper::Gatekeeper;
//!
//! let gatekeeper = Gatekeeper::default_config();
//! let items = vec![
//!     EvidenceItem::new(SourceType::Reviews, "https://www.trustpilot.com/review/example.nl",
//!         "planning", 0.8, EvidenceMetadata::from_adapter("crawl4ai")),
//!     EvidenceItem::new(SourceType::Careers, "https://example.nl/vacatures",
//!         "handoff", 0.7, EvidenceMetadata::from_adapter("crawl4ai")),
//!     EvidenceItem::new(SourceType::Website, "https://example.nl/over-ons",
//!         "workflow-context", 0.72, EvidenceMetadata::from_adapter("crawl4ai")),
//! ];
//!
//! let result = gatekeeper.evaluate(&items);
//! assert!(result.passed);
//! assert_eq!(result.average_confidence, 0.74);
//! assert_eq!(gatekeeper.traffic_light(&result), TrafficLight::Green);
//! ```

#![warn(missing_docs)]

mod classify;
mod config;
mod error;
mod gate;
mod pain;
mod record;
mod review;
mod summary;
mod tags;
mod taxonomy;
mod traffic_light;

pub use classify::{classify_evidence, EvidenceOrigin, SyntheticCause};
pub use config::GateConfig;
pub use error::GatekeeperError;
pub use gate::{evaluate_quality_gate, GateReason, Gatekeeper, QualityGateResult};
pub use pain::{confirm_pain, evaluate_pain_confirmation, PainConfirmationResult, PainReason};
pub use record::{parse_evidence_records, parse_metadata, EvidenceRecord};
pub use review::{asset_generation_decision, record_review, send_decision, Decision, QualityReview};
pub use summary::{GateSummary, GATE_KEY};
pub use tags::{confirm_pain_tags, PainTagConfirmation};
pub use taxonomy::{SourceCategory, Taxonomy};
pub use traffic_light::{classify_traffic_light, compute_traffic_light};
