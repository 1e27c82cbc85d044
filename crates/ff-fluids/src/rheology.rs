//! The canonical non-Newtonian injection formula set.
//!
//! Models the polyurethane blend as a shear-thinning Power-Law fluid with an
//! Arrhenius temperature dependence, flowing through a circular section. All
//! internal math is SI f64; unit conversion happens once, through the
//! `ProcessParameters` accessors, and display rounding happens once, when the
//! result struct is filled.

use crate::error::{FluidError, FluidResult};
use crate::params::ProcessParameters;
use crate::results::{CalculationResults, FlowRegime, ProfilePoint};
use ff_core::numeric::{ensure_finite, round_dp};
use ff_core::units::constants::{R_J_PER_MOL_K, T_REF_K};
use std::f64::consts::PI;
use uom::si::dynamic_viscosity::pascal_second;
use uom::si::length::meter;
use uom::si::mass_density::kilogram_per_cubic_meter;
use uom::si::thermodynamic_temperature::kelvin;
use uom::si::volume_rate::cubic_meter_per_second;

/// Activation energy of the viscosity-temperature response [J/mol]
pub const ACTIVATION_ENERGY_J_PER_MOL: f64 = 50_000.0;

/// Power-Law flow index for the shear-thinning blend (n = 1 is Newtonian)
pub const POWER_LAW_INDEX: f64 = 0.85;

/// Laminar/turbulent transition Reynolds number; ties go to turbulent
pub const LAMINAR_REYNOLDS_LIMIT: f64 = 2300.0;

/// Number of samples in the pressure profile
pub const PROFILE_POINTS: usize = 20;

const HIGH_SHEAR_LIMIT_PER_S: f64 = 1000.0;
const HIGH_VISCOSITY_LIMIT_PA_S: f64 = 1.0;

/// Wall shear rate for pipe flow [s⁻¹].
fn shear_rate(flow_m3_s: f64, radius_m: f64) -> f64 {
    (4.0 * flow_m3_s) / (PI * radius_m.powi(3))
}

/// Arrhenius viscosity multiplier relative to the 25 °C reference.
fn temperature_factor(temp_k: f64) -> f64 {
    ((ACTIVATION_ENERGY_J_PER_MOL / R_J_PER_MOL_K) * (1.0 / temp_k - 1.0 / T_REF_K)).exp()
}

/// Apparent viscosity [Pa·s] from the base viscosity, temperature and shear.
fn apparent_viscosity(base_visc_pa_s: f64, temp_k: f64, shear_rate_per_s: f64) -> f64 {
    base_visc_pa_s * temperature_factor(temp_k) * shear_rate_per_s.powf(POWER_LAW_INDEX - 1.0)
}

/// Reynolds number for the equivalent circular section.
fn reynolds_number(flow_m3_s: f64, radius_m: f64, visc_pa_s: f64, density_kg_m3: f64) -> f64 {
    let velocity = flow_m3_s / (PI * radius_m.powi(2));
    (2.0 * radius_m * velocity * density_kg_m3) / visc_pa_s
}

/// Pressure drop [Pa], Hagen-Poiseuille with the Power-Law correction term.
fn pressure_drop_pa(visc_pa_s: f64, flow_m3_s: f64, length_m: f64, radius_m: f64) -> f64 {
    let n = POWER_LAW_INDEX;
    ((8.0 * visc_pa_s * length_m * flow_m3_s) / (PI * radius_m.powi(4)))
        * ((3.0 * n + 1.0) / (4.0 * n))
}

/// Pressure along the pipe as a linear decay from the injection point.
///
/// An approximation for display purposes, not a re-solve of the flow field.
/// Always `PROFILE_POINTS` samples from distance 0 to the full pipe length.
pub fn pressure_profile(total_pressure_kpa: f64, pipe_length_mm: f64) -> Vec<ProfilePoint> {
    (0..PROFILE_POINTS)
        .map(|i| {
            let distance = (i as f64 * pipe_length_mm) / (PROFILE_POINTS - 1) as f64;
            let pressure = total_pressure_kpa * (1.0 - distance / pipe_length_mm);
            ProfilePoint {
                distance_mm: round_dp(distance, 1),
                pressure_kpa: round_dp(pressure, 2),
            }
        })
        .collect()
}

/// Process warnings in fixed check order; every applicable one is appended.
fn process_warnings(reynolds: f64, shear_rate_per_s: f64, visc_pa_s: f64) -> Vec<String> {
    let mut warnings = Vec::new();

    if reynolds > LAMINAR_REYNOLDS_LIMIT {
        warnings.push("Flow is turbulent (Re > 2300) - consider reducing flow rate".to_string());
    }
    if shear_rate_per_s > HIGH_SHEAR_LIMIT_PER_S {
        warnings.push("High shear rate may affect material properties".to_string());
    }
    if visc_pa_s > HIGH_VISCOSITY_LIMIT_PA_S {
        warnings.push("High viscosity may require increased pressure".to_string());
    }

    warnings
}

/// Compute injection parameters for already-validated inputs.
///
/// Full precision is carried through every dependent step; the result fields
/// are rounded for display at the very end. A non-finite intermediate is
/// reported as a typed error so the caller can degrade instead of returning
/// NaN to the UI.
pub fn calculate(params: &ProcessParameters) -> FluidResult<CalculationResults> {
    let radius_m = params.pipe_radius().get::<meter>();
    let length_m = params.pipe_length().get::<meter>();
    let temp_k = params.temperature().get::<kelvin>();
    let flow_m3_s = params.flow_rate().get::<cubic_meter_per_second>();
    let base_visc_pa_s = params.base_viscosity().get::<pascal_second>();
    let density_kg_m3 = params.density().get::<kilogram_per_cubic_meter>();

    // Redundant with upstream validation; kept so unvalidated callers get a
    // typed failure instead of NaN.
    if radius_m <= 0.0 || flow_m3_s <= 0.0 {
        return Err(FluidError::NonPhysical {
            what: "pipe radius and flow rate must be positive",
        });
    }

    let shear = ensure_finite(shear_rate(flow_m3_s, radius_m), "shear rate")?;
    let visc = ensure_finite(
        apparent_viscosity(base_visc_pa_s, temp_k, shear),
        "apparent viscosity",
    )?;
    let reynolds = ensure_finite(
        reynolds_number(flow_m3_s, radius_m, visc, density_kg_m3),
        "Reynolds number",
    )?;
    let pressure_kpa =
        ensure_finite(pressure_drop_pa(visc, flow_m3_s, length_m, radius_m), "pressure drop")?
            / 1000.0;

    let pipe_volume_m3 = PI * radius_m.powi(2) * length_m;
    let injection_time_s = ensure_finite(pipe_volume_m3 / flow_m3_s, "injection time")?;

    let flow_regime = if reynolds < LAMINAR_REYNOLDS_LIMIT {
        FlowRegime::Laminar
    } else {
        FlowRegime::Turbulent
    };

    Ok(CalculationResults {
        required_pressure_kpa: round_dp(pressure_kpa, 2),
        shear_rate_per_s: round_dp(shear, 2),
        apparent_viscosity_pa_s: round_dp(visc, 4),
        reynolds_number: round_dp(reynolds, 2),
        optimal_injection_time_s: round_dp(injection_time_s, 2),
        pressure_profile: pressure_profile(pressure_kpa, params.pipe_length_mm),
        flow_regime,
        warnings: process_warnings(reynolds, shear, visc),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_params() -> ProcessParameters {
        ProcessParameters::new(100.0, 20.0, 25.0, 0.001)
    }

    #[test]
    fn temperature_factor_is_unity_at_reference() {
        assert!((temperature_factor(T_REF_K) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn temperature_factor_thickens_cold_material() {
        // Colder than the reference raises viscosity, warmer lowers it
        assert!(temperature_factor(278.15) > 1.0);
        assert!(temperature_factor(313.15) < 1.0);
    }

    #[test]
    fn reference_case_values() {
        let results = calculate(&reference_params()).unwrap();

        assert!((results.required_pressure_kpa - 3.18).abs() < 1e-2);
        assert!((results.shear_rate_per_s - 1273.24).abs() < 1e-2);
        assert!((results.apparent_viscosity_pa_s - 0.1198).abs() < 1e-4);
        assert!((results.reynolds_number - 595.35).abs() < 0.5);
        assert!((results.optimal_injection_time_s - 0.03).abs() < 1e-2);
        assert_eq!(results.flow_regime, FlowRegime::Laminar);
        assert_eq!(
            results.warnings,
            vec!["High shear rate may affect material properties".to_string()]
        );
    }

    #[test]
    fn regime_matches_reynolds_invariant() {
        let results = calculate(&reference_params()).unwrap();
        assert_eq!(
            results.reynolds_number < LAMINAR_REYNOLDS_LIMIT,
            results.flow_regime == FlowRegime::Laminar
        );
    }

    #[test]
    fn fast_flow_goes_turbulent() {
        let params = ProcessParameters::new(100.0, 20.0, 25.0, 0.01);
        let results = calculate(&params).unwrap();

        assert_eq!(results.flow_regime, FlowRegime::Turbulent);
        assert!(results.reynolds_number > LAMINAR_REYNOLDS_LIMIT);
        // Turbulence is reported before the shear warning
        assert_eq!(results.warnings.len(), 2);
        assert!(results.warnings[0].contains("turbulent"));
        assert!(results.warnings[1].contains("shear"));
    }

    #[test]
    fn cold_thick_material_warns_on_viscosity() {
        // Slow flow through a wide section: low shear, but the cold blend is thick
        let params =
            ProcessParameters::new(100.0, 100.0, 5.0, 0.000_001).with_material(5000.0, 1.12);
        let results = calculate(&params).unwrap();

        assert!(results.apparent_viscosity_pa_s > 1.0);
        assert_eq!(results.warnings.len(), 1);
        assert!(results.warnings[0].contains("viscosity"));
    }

    #[test]
    fn profile_shape() {
        let results = calculate(&reference_params()).unwrap();
        let profile = &results.pressure_profile;

        assert_eq!(profile.len(), PROFILE_POINTS);
        assert_eq!(profile[0].distance_mm, 0.0);
        assert!((profile[0].pressure_kpa - results.required_pressure_kpa).abs() < 1e-2);
        assert!((profile[19].distance_mm - 100.0).abs() < 0.1);
        assert!(profile[19].pressure_kpa.abs() < 1e-9);
        for pair in profile.windows(2) {
            assert!(pair[1].pressure_kpa <= pair[0].pressure_kpa);
            assert!(pair[1].distance_mm > pair[0].distance_mm);
        }
    }

    #[test]
    fn degenerate_geometry_is_a_typed_error() {
        // Passes validation (positive thickness) but overflows the pressure
        // formula; the caller is expected to degrade.
        let params = ProcessParameters::new(50.0, 1e-100, 25.0, 0.001);
        assert!(params.validate().is_ok());
        let err = calculate(&params).unwrap_err();
        assert!(matches!(err, FluidError::NonFinite { .. }));
    }

    #[test]
    fn unvalidated_zero_radius_rejected() {
        let params = ProcessParameters::new(100.0, 0.0, 25.0, 0.001);
        let err = calculate(&params).unwrap_err();
        assert!(matches!(err, FluidError::NonPhysical { .. }));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_valid_params() -> impl Strategy<Value = ProcessParameters> {
        (
            50.0_f64..5000.0,
            1.0_f64..200.0,
            5.0_f64..40.0,
            1e-6_f64..0.1,
            10.0_f64..5000.0,
            0.5_f64..2.0,
        )
            .prop_map(|(length, thickness, temp, flow, visc, density)| {
                ProcessParameters::new(length, thickness, temp, flow)
                    .with_material(visc, density)
            })
    }

    proptest! {
        #[test]
        fn regime_invariant_holds(params in arb_valid_params()) {
            let results = calculate(&params).unwrap();
            prop_assert_eq!(
                results.reynolds_number < LAMINAR_REYNOLDS_LIMIT,
                results.flow_regime == FlowRegime::Laminar
            );
        }

        #[test]
        fn profile_is_complete_and_monotone(params in arb_valid_params()) {
            let results = calculate(&params).unwrap();
            let profile = &results.pressure_profile;
            prop_assert_eq!(profile.len(), PROFILE_POINTS);
            prop_assert_eq!(profile[0].distance_mm, 0.0);
            prop_assert!((profile[19].distance_mm - params.pipe_length_mm).abs() <= 0.05 + 1e-9);
            for pair in profile.windows(2) {
                prop_assert!(pair[1].pressure_kpa <= pair[0].pressure_kpa);
            }
        }

        #[test]
        fn calculation_is_idempotent(params in arb_valid_params()) {
            let first = calculate(&params).unwrap();
            let second = calculate(&params).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
