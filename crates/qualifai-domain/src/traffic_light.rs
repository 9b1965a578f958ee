//! Traffic light - the send-time view of evidence quality

use std::fmt;

/// Three-state evidence quality used before outreach is sent
///
/// - Red: evidence is too thin, nothing may be sent
/// - Amber: a diversity or confidence shortfall a reviewer may override
/// - Green: sending proceeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TrafficLight {
    /// Hard block
    Red,

    /// Blocked unless a reviewer approved the run
    Amber,

    /// Clear to send
    Green,
}

impl TrafficLight {
    /// Get the light's name
    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficLight::Red => "red",
            TrafficLight::Amber => "amber",
            TrafficLight::Green => "green",
        }
    }

    /// Only amber can be lifted by a human override
    pub fn is_overridable(&self) -> bool {
        matches!(self, TrafficLight::Amber)
    }
}

impl fmt::Display for TrafficLight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
