//! Confidence score helpers

/// Whether a score lies in [0.0, 1.0]
pub fn is_valid_confidence(score: f64) -> bool {
    (0.0..=1.0).contains(&score)
}

/// Round to two decimal places, half away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Arithmetic mean of the scores, 0.0 for an empty slice
pub fn mean(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}
