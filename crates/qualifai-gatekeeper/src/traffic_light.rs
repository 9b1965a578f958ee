//! Red/amber/green classification from aggregate numbers

use tracing::debug;

use qualifai_domain::TrafficLight;

use crate::GateConfig;

/// Classify aggregate evidence numbers against explicit thresholds
///
/// Pain confirmation is not consulted. Red is reserved for the volume floor,
/// which no reviewer may override.
pub fn classify_traffic_light(
    evidence_count: usize,
    source_type_count: usize,
    average_confidence: f64,
    config: &GateConfig,
) -> TrafficLight {
    let light = if evidence_count < config.min_evidence_count {
        TrafficLight::Red
    } else if source_type_count < config.min_source_types
        || average_confidence < config.min_average_confidence
    {
        TrafficLight::Amber
    } else {
        TrafficLight::Green
    };

    debug!(
        evidence_count,
        source_type_count,
        average_confidence,
        light = %light,
        "Classified traffic light"
    );
    light
}

/// Classify with the default thresholds
pub fn compute_traffic_light(
    evidence_count: usize,
    source_type_count: usize,
    average_confidence: f64,
) -> TrafficLight {
    classify_traffic_light(
        evidence_count,
        source_type_count,
        average_confidence,
        &GateConfig::default(),
    )
}
