//! Process parameter value object and validation.

use ff_core::units::{Density, DynVisc, Length, Temperature, VolumeRate};
use ff_core::units::{celsius, cp, g_cm3, mm, m3ps};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single rejected input rule.
///
/// Validation is the only failure mode that crosses the engine boundary, so
/// the message for each rule is fixed and user-facing. Checks run in a fixed
/// order and the first violated rule wins; rules are never aggregated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Pipe length must be at least 50mm")]
    PipeLengthTooShort,

    #[error("Pipe thickness must be positive")]
    PipeThicknessNotPositive,

    #[error("Temperature must be between 5°C and 40°C")]
    TemperatureOutOfRange,

    #[error("Flow rate must be positive")]
    FlowRateNotPositive,

    #[error("Viscosity must be positive")]
    ViscosityNotPositive,

    #[error("Density must be positive")]
    DensityNotPositive,
}

/// Parameters for a polyurethane injection request.
///
/// Immutable value object, constructed per request. Field units follow the
/// operator-facing form: millimeters, degrees Celsius, m³/s, centipoise and
/// g/cm³. The SI accessors below are the only unit conversion point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcessParameters {
    /// Pipe length [mm]
    pub pipe_length_mm: f64,
    /// Insulation cavity thickness, treated as the flow diameter [mm]
    pub pipe_thickness_mm: f64,
    /// Process temperature [°C]
    pub temperature_c: f64,
    /// Volumetric flow rate [m³/s]
    pub flow_rate_m3_s: f64,
    /// Base viscosity at 25 °C [cP]
    #[serde(default = "default_viscosity_cp")]
    pub viscosity_cp: f64,
    /// Material density [g/cm³]
    #[serde(default = "default_density_g_cm3")]
    pub density_g_cm3: f64,
}

fn default_viscosity_cp() -> f64 {
    ProcessParameters::DEFAULT_VISCOSITY_CP
}

fn default_density_g_cm3() -> f64 {
    ProcessParameters::DEFAULT_DENSITY_G_CM3
}

impl ProcessParameters {
    /// Base viscosity of the standard material blend at 25 °C [cP]
    pub const DEFAULT_VISCOSITY_CP: f64 = 350.0;

    /// Density of the standard material blend [g/cm³]
    pub const DEFAULT_DENSITY_G_CM3: f64 = 1.12;

    /// Create parameters with the standard material defaults.
    pub fn new(
        pipe_length_mm: f64,
        pipe_thickness_mm: f64,
        temperature_c: f64,
        flow_rate_m3_s: f64,
    ) -> Self {
        Self {
            pipe_length_mm,
            pipe_thickness_mm,
            temperature_c,
            flow_rate_m3_s,
            viscosity_cp: Self::DEFAULT_VISCOSITY_CP,
            density_g_cm3: Self::DEFAULT_DENSITY_G_CM3,
        }
    }

    /// Override the material properties.
    pub fn with_material(mut self, viscosity_cp: f64, density_g_cm3: f64) -> Self {
        self.viscosity_cp = viscosity_cp;
        self.density_g_cm3 = density_g_cm3;
        self
    }

    /// Validate against the physical admissibility rules.
    ///
    /// No side effects; returns the first violated rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.pipe_length_mm < 50.0 {
            return Err(ValidationError::PipeLengthTooShort);
        }
        if self.pipe_thickness_mm <= 0.0 {
            return Err(ValidationError::PipeThicknessNotPositive);
        }
        if !(5.0..=40.0).contains(&self.temperature_c) {
            return Err(ValidationError::TemperatureOutOfRange);
        }
        if self.flow_rate_m3_s <= 0.0 {
            return Err(ValidationError::FlowRateNotPositive);
        }
        if self.viscosity_cp <= 0.0 {
            return Err(ValidationError::ViscosityNotPositive);
        }
        if self.density_g_cm3 <= 0.0 {
            return Err(ValidationError::DensityNotPositive);
        }
        Ok(())
    }

    /// Flow radius. The thickness field carries the equivalent flow diameter.
    pub fn pipe_radius(&self) -> Length {
        mm(self.pipe_thickness_mm / 2.0)
    }

    /// Pipe length [Length].
    pub fn pipe_length(&self) -> Length {
        mm(self.pipe_length_mm)
    }

    /// Process temperature as an absolute temperature.
    pub fn temperature(&self) -> Temperature {
        celsius(self.temperature_c)
    }

    /// Volumetric flow rate.
    pub fn flow_rate(&self) -> VolumeRate {
        m3ps(self.flow_rate_m3_s)
    }

    /// Base viscosity at the 25 °C reference.
    pub fn base_viscosity(&self) -> DynVisc {
        cp(self.viscosity_cp)
    }

    /// Material density.
    pub fn density(&self) -> Density {
        g_cm3(self.density_g_cm3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::length::meter;
    use uom::si::thermodynamic_temperature::kelvin;

    fn valid() -> ProcessParameters {
        ProcessParameters::new(100.0, 20.0, 25.0, 0.001)
    }

    #[test]
    fn defaults_applied() {
        let p = valid();
        assert_eq!(p.viscosity_cp, 350.0);
        assert_eq!(p.density_g_cm3, 1.12);
    }

    #[test]
    fn valid_params_pass() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn pipe_length_boundary() {
        let mut p = valid();
        p.pipe_length_mm = 49.0;
        let err = p.validate().unwrap_err();
        assert_eq!(err, ValidationError::PipeLengthTooShort);
        assert!(err.to_string().contains("50mm"));

        p.pipe_length_mm = 50.0;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn temperature_boundaries() {
        let mut p = valid();
        p.temperature_c = 4.9;
        assert_eq!(
            p.validate().unwrap_err(),
            ValidationError::TemperatureOutOfRange
        );
        p.temperature_c = 40.1;
        assert_eq!(
            p.validate().unwrap_err(),
            ValidationError::TemperatureOutOfRange
        );
        p.temperature_c = 5.0;
        assert!(p.validate().is_ok());
        p.temperature_c = 40.0;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn first_violation_wins() {
        // Both length and flow rate are bad; the length rule is checked first.
        let mut p = valid();
        p.pipe_length_mm = 10.0;
        p.flow_rate_m3_s = -1.0;
        assert_eq!(p.validate().unwrap_err(), ValidationError::PipeLengthTooShort);
    }

    #[test]
    fn nonpositive_inputs_rejected() {
        let mut p = valid();
        p.pipe_thickness_mm = 0.0;
        assert_eq!(
            p.validate().unwrap_err(),
            ValidationError::PipeThicknessNotPositive
        );

        let mut p = valid();
        p.flow_rate_m3_s = 0.0;
        assert_eq!(p.validate().unwrap_err(), ValidationError::FlowRateNotPositive);

        let mut p = valid();
        p.viscosity_cp = -10.0;
        assert_eq!(p.validate().unwrap_err(), ValidationError::ViscosityNotPositive);

        let mut p = valid();
        p.density_g_cm3 = 0.0;
        assert_eq!(p.validate().unwrap_err(), ValidationError::DensityNotPositive);
    }

    #[test]
    fn si_accessors() {
        let p = valid();
        // 20 mm bore means a 10 mm radius
        assert!((p.pipe_radius().get::<meter>() - 0.01).abs() < 1e-12);
        assert!((p.pipe_length().get::<meter>() - 0.1).abs() < 1e-12);
        assert!((p.temperature().get::<kelvin>() - 298.15).abs() < 1e-9);
    }
}
