//! Blowing agent catalog and environmental impact comparison.

use crate::error::FluidResult;
use ff_core::numeric::{ensure_finite, round_dp};
use serde::{Deserialize, Serialize};

/// Reference data for one blowing agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlowingAgent {
    pub name: &'static str,
    /// Global Warming Potential (CO₂-equivalent per kg)
    pub gwp: f64,
    /// Ozone Depletion Potential
    pub odp: f64,
    /// Thermal conductivity of the foamed insulation [W/(m·K)]
    pub lambda_w_m_k: f64,
    /// Unit cost [currency per kg]
    pub cost_per_kg: f64,
}

impl BlowingAgent {
    fn matches(&self, query: &str) -> bool {
        self.name.eq_ignore_ascii_case(query.trim())
    }
}

const BLOWING_AGENT_TABLE: [BlowingAgent; 5] = [
    BlowingAgent {
        name: "HFC",
        gwp: 1430.0,
        odp: 0.0,
        lambda_w_m_k: 0.022,
        cost_per_kg: 4.50,
    },
    BlowingAgent {
        name: "HCFC",
        gwp: 725.0,
        odp: 0.07,
        lambda_w_m_k: 0.023,
        cost_per_kg: 4.20,
    },
    BlowingAgent {
        name: "Pentane",
        gwp: 5.0,
        odp: 0.0,
        lambda_w_m_k: 0.024,
        cost_per_kg: 3.80,
    },
    BlowingAgent {
        name: "HFO",
        gwp: 1.0,
        odp: 0.0,
        lambda_w_m_k: 0.022,
        cost_per_kg: 5.20,
    },
    BlowingAgent {
        name: "Ecomate",
        gwp: 0.0,
        odp: 0.0,
        lambda_w_m_k: 0.019,
        cost_per_kg: 3.95,
    },
];

/// The zero-impact agent every comparison is made against.
pub const REFERENCE_AGENT: &str = "Ecomate";

/// The entry unknown agent names resolve to. A documented default, not an
/// error: the comparison form predates half the trade names in the field.
pub const DEFAULT_AGENT: &str = "HFC";

pub fn blowing_agent_table() -> &'static [BlowingAgent] {
    &BLOWING_AGENT_TABLE
}

/// Find an agent by name, case-insensitively; unknown names resolve to HFC.
pub fn lookup_agent(name: &str) -> &'static BlowingAgent {
    BLOWING_AGENT_TABLE
        .iter()
        .find(|agent| agent.matches(name))
        // Entry 0 is HFC, the documented default for unknown names
        .unwrap_or(&BLOWING_AGENT_TABLE[0])
}

pub fn reference_agent() -> &'static BlowingAgent {
    // Entry 4 is Ecomate, the zero-impact reference
    &BLOWING_AGENT_TABLE[4]
}

/// Yearly impact of switching the given agent to the reference agent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalImpact {
    /// Avoided CO₂-equivalent emissions [tonnes/year]
    pub co2_reduction_t_per_year: f64,
    /// Relative thermal conductivity improvement [%]
    pub thermal_improvement_pct: f64,
    /// Cost difference at the given consumption [currency/year]
    pub cost_savings_per_year: f64,
    /// Avoided ozone-depleting load [ODP·kg]
    pub odp_reduction_kg: f64,
}

/// Compare a blowing agent against the reference at a yearly consumption.
///
/// Consumption is deliberately not validated: zero or negative values produce
/// zero or negative impact figures, which is accepted behavior for what-if
/// entries in the comparison form.
pub fn compare(agent_type: &str, annual_consumption_kg: f64) -> FluidResult<EnvironmentalImpact> {
    let agent = lookup_agent(agent_type);
    let reference = reference_agent();

    let co2_t = ensure_finite(
        agent.gwp * annual_consumption_kg / 1000.0,
        "CO2 reduction",
    )?;
    let thermal_pct = ensure_finite(
        (agent.lambda_w_m_k - reference.lambda_w_m_k) / agent.lambda_w_m_k * 100.0,
        "thermal improvement",
    )?;
    let cost = ensure_finite(
        (agent.cost_per_kg - reference.cost_per_kg) * annual_consumption_kg,
        "cost savings",
    )?;
    let odp = ensure_finite(agent.odp * annual_consumption_kg, "ODP reduction")?;

    Ok(EnvironmentalImpact {
        co2_reduction_t_per_year: round_dp(co2_t, 2),
        thermal_improvement_pct: round_dp(thermal_pct, 2),
        cost_savings_per_year: round_dp(cost, 2),
        odp_reduction_kg: odp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_order_backs_the_lookup_shortcuts() {
        assert_eq!(BLOWING_AGENT_TABLE[0].name, DEFAULT_AGENT);
        assert_eq!(BLOWING_AGENT_TABLE[4].name, REFERENCE_AGENT);
    }

    #[test]
    fn agent_names_are_unique() {
        let mut seen = HashSet::new();
        for agent in blowing_agent_table() {
            assert!(seen.insert(agent.name), "duplicate agent: {}", agent.name);
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup_agent("ecomate").name, "Ecomate");
        assert_eq!(lookup_agent("  hfo ").name, "HFO");
    }

    #[test]
    fn unknown_agent_resolves_to_hfc() {
        assert_eq!(lookup_agent("CFC-11").name, "HFC");
        assert_eq!(lookup_agent("").name, "HFC");
    }

    #[test]
    fn reference_compared_to_itself_is_neutral() {
        let impact = compare("Ecomate", 5000.0).unwrap();
        assert_eq!(impact.co2_reduction_t_per_year, 0.0);
        assert_eq!(impact.thermal_improvement_pct, 0.0);
        assert_eq!(impact.cost_savings_per_year, 0.0);
        assert_eq!(impact.odp_reduction_kg, 0.0);
    }

    #[test]
    fn hfc_switch_figures() {
        let impact = compare("HFC", 5000.0).unwrap();
        assert!((impact.co2_reduction_t_per_year - 7150.0).abs() < 1e-9);
        assert!((impact.thermal_improvement_pct - 13.64).abs() < 1e-9);
        assert!((impact.cost_savings_per_year - 2750.0).abs() < 1e-9);
        assert_eq!(impact.odp_reduction_kg, 0.0);
    }

    #[test]
    fn hcfc_carries_odp_load() {
        let impact = compare("HCFC", 1000.0).unwrap();
        assert!((impact.odp_reduction_kg - 70.0).abs() < 1e-9);
    }

    #[test]
    fn negative_consumption_is_accepted() {
        let impact = compare("HFC", -100.0).unwrap();
        assert!(impact.co2_reduction_t_per_year < 0.0);
        assert!(impact.cost_savings_per_year < 0.0);
    }

    #[test]
    fn non_finite_consumption_is_a_typed_error() {
        assert!(compare("HFC", f64::NAN).is_err());
    }
}
