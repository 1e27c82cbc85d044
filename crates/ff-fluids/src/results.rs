//! Calculation result definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Flow regime predicted from the Reynolds number.
///
/// Laminar iff Re < 2300; the tie at exactly 2300 goes to turbulent because
/// the comparison is strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowRegime {
    Laminar,
    Turbulent,
}

impl FlowRegime {
    pub fn label(self) -> &'static str {
        match self {
            Self::Laminar => "laminar",
            Self::Turbulent => "turbulent",
        }
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One sample of the pressure-vs-distance profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    /// Distance from the injection point [mm]
    pub distance_mm: f64,
    /// Local pressure [kPa]
    pub pressure_kpa: f64,
}

/// Results of one injection calculation.
///
/// Produced fresh per calculation and never mutated after return. Numeric
/// fields carry display rounding (2 dp, viscosity 4 dp); the profile always
/// holds exactly 20 points with non-increasing pressure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResults {
    /// Required injection pressure [kPa]
    pub required_pressure_kpa: f64,
    /// Wall shear rate [s⁻¹]
    pub shear_rate_per_s: f64,
    /// Apparent viscosity at process conditions [Pa·s]
    pub apparent_viscosity_pa_s: f64,
    /// Reynolds number (dimensionless)
    pub reynolds_number: f64,
    /// Time to fill the cavity at the requested flow rate [s]
    pub optimal_injection_time_s: f64,
    /// Pressure along the pipe, injection point first
    pub pressure_profile: Vec<ProfilePoint>,
    /// Laminar or turbulent, from the Reynolds number
    pub flow_regime: FlowRegime,
    /// Process warnings in detection order; may be empty
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regime_labels() {
        assert_eq!(FlowRegime::Laminar.label(), "laminar");
        assert_eq!(FlowRegime::Turbulent.to_string(), "turbulent");
    }

    #[test]
    fn regime_serializes_lowercase() {
        let json = serde_json::to_string(&FlowRegime::Laminar).unwrap();
        assert_eq!(json, "\"laminar\"");
    }
}
