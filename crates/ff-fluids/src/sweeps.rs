//! Injection parameter sweep generation.
//!
//! Supports parametric sweeps across temperature, flow rate, and pipe length.
//! Used to generate comparison tables and sensitivity checks around an
//! operating point.

use crate::error::{FluidError, FluidResult};
use crate::params::ProcessParameters;
use std::fmt;
use std::str::FromStr;

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepType {
    /// Uniformly spaced points
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Input variable being swept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepVariable {
    /// Process temperature [°C]
    Temperature,
    /// Volumetric flow rate [m³/s]
    FlowRate,
    /// Pipe length [mm]
    PipeLength,
}

impl SweepVariable {
    pub fn label(self) -> &'static str {
        match self {
            Self::Temperature => "temperature [°C]",
            Self::FlowRate => "flow rate [m³/s]",
            Self::PipeLength => "pipe length [mm]",
        }
    }

    /// Base parameters with this variable replaced by `value`.
    pub fn apply(self, base: &ProcessParameters, value: f64) -> ProcessParameters {
        let mut params = *base;
        match self {
            Self::Temperature => params.temperature_c = value,
            Self::FlowRate => params.flow_rate_m3_s = value,
            Self::PipeLength => params.pipe_length_mm = value,
        }
        params
    }
}

impl FromStr for SweepVariable {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "temperature" | "temp" => Ok(Self::Temperature),
            "flow-rate" | "flow_rate" | "flow" => Ok(Self::FlowRate),
            "pipe-length" | "pipe_length" | "length" => Ok(Self::PipeLength),
            _ => Err("unknown sweep variable (expected temperature, flow-rate or pipe-length)"),
        }
    }
}

/// Definition of a single parameter sweep.
#[derive(Debug, Clone)]
pub struct SweepDefinition {
    /// Variable being swept
    pub variable: SweepVariable,
    /// Start value, in the variable's input units
    pub start: f64,
    /// End value, in the variable's input units
    pub end: f64,
    /// Number of points to generate
    pub num_points: usize,
    /// Spacing type
    pub sweep_type: SweepType,
}

impl SweepDefinition {
    /// Create a sweep, rejecting degenerate bounds up front.
    pub fn new(
        variable: SweepVariable,
        start: f64,
        end: f64,
        num_points: usize,
        sweep_type: SweepType,
    ) -> FluidResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(FluidError::InvalidArg {
                what: "sweep bounds must be finite",
            });
        }
        if num_points < 2 {
            return Err(FluidError::InvalidArg {
                what: "sweep must have at least 2 points",
            });
        }
        if (start - end).abs() < 1e-12 {
            return Err(FluidError::InvalidArg {
                what: "sweep start and end values must be different",
            });
        }

        Ok(SweepDefinition {
            variable,
            start,
            end,
            num_points,
            sweep_type,
        })
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.sweep_type {
            SweepType::Linear => self.generate_linear(),
            SweepType::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let mut points = Vec::with_capacity(self.num_points);
        let delta = (self.end - self.start) / (self.num_points - 1) as f64;

        for i in 0..self.num_points {
            points.push(self.start + i as f64 * delta);
        }

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        // Log spacing needs positive bounds; fall back to linear otherwise
        if self.start <= 0.0 || self.end <= 0.0 {
            return self.generate_linear();
        }

        let mut points = Vec::with_capacity(self.num_points);
        let log_start = self.start.ln();
        let log_end = self.end.ln();
        let log_delta = (log_end - log_start) / (self.num_points - 1) as f64;

        for i in 0..self.num_points {
            points.push((log_start + i as f64 * log_delta).exp());
        }

        points[self.num_points - 1] = self.end;
        points
    }
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep {} from {} to {} ({} points, {})",
            self.variable.label(),
            self.start,
            self.end,
            self.num_points,
            self.sweep_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_sweep_generation() {
        let sweep =
            SweepDefinition::new(SweepVariable::Temperature, 10.0, 40.0, 4, SweepType::Linear)
                .unwrap();

        let points = sweep.generate_points();
        assert_eq!(points.len(), 4);
        assert!((points[0] - 10.0).abs() < 1e-9);
        assert!((points[1] - 20.0).abs() < 1e-9);
        assert!((points[3] - 40.0).abs() < 1e-9);
    }

    #[test]
    fn logarithmic_sweep_generation() {
        let sweep = SweepDefinition::new(
            SweepVariable::FlowRate,
            1e-4,
            1e-2,
            3,
            SweepType::Logarithmic,
        )
        .unwrap();

        let points = sweep.generate_points();
        assert_eq!(points.len(), 3);
        assert!((points[0] - 1e-4).abs() < 1e-12);
        assert!((points[2] - 1e-2).abs() < 1e-12);
        let expected_mid = (1e-4_f64 * 1e-2_f64).sqrt();
        assert!((points[1] - expected_mid).abs() / expected_mid < 1e-6);
    }

    #[test]
    fn apply_replaces_only_the_swept_variable() {
        let base = ProcessParameters::new(100.0, 20.0, 25.0, 0.001);
        let swept = SweepVariable::FlowRate.apply(&base, 0.005);
        assert_eq!(swept.flow_rate_m3_s, 0.005);
        assert_eq!(swept.pipe_length_mm, base.pipe_length_mm);
        assert_eq!(swept.temperature_c, base.temperature_c);
    }

    #[test]
    fn reject_invalid_point_count() {
        let result =
            SweepDefinition::new(SweepVariable::Temperature, 10.0, 40.0, 1, SweepType::Linear);
        assert!(result.is_err());
    }

    #[test]
    fn reject_identical_bounds() {
        let result =
            SweepDefinition::new(SweepVariable::Temperature, 25.0, 25.0, 5, SweepType::Linear);
        assert!(result.is_err());
    }

    #[test]
    fn variable_parses_from_cli_spellings() {
        assert_eq!(
            "temperature".parse::<SweepVariable>().unwrap(),
            SweepVariable::Temperature
        );
        assert_eq!(
            "flow-rate".parse::<SweepVariable>().unwrap(),
            SweepVariable::FlowRate
        );
        assert!("pressure".parse::<SweepVariable>().is_err());
    }
}
