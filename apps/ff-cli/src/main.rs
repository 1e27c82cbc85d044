use clap::{Args, Parser, Subcommand};
use ff_app::{AppError, AppResult, InjectionEngine};
use ff_fluids::{
    ProcessParameters, SweepDefinition, SweepType, SweepVariable, blowing_agent_table,
    reference_agent,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ff-cli")]
#[command(about = "Foamflow CLI - Polyurethane injection parameter tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ParamArgs {
    /// Path to a parameter YAML file
    #[arg(long)]
    params: Option<PathBuf>,
    /// Pipe length [mm]
    #[arg(long)]
    pipe_length: Option<f64>,
    /// Insulation cavity thickness [mm]
    #[arg(long)]
    pipe_thickness: Option<f64>,
    /// Process temperature [°C]
    #[arg(long)]
    temperature: Option<f64>,
    /// Volumetric flow rate [m³/s]
    #[arg(long)]
    flow_rate: Option<f64>,
    /// Base viscosity at 25°C [cP]
    #[arg(long)]
    viscosity: Option<f64>,
    /// Material density [g/cm³]
    #[arg(long)]
    density: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate injection parameters
    Calc {
        #[command(flatten)]
        params: ParamArgs,
        /// Also print the pressure profile table
        #[arg(long)]
        profile: bool,
    },
    /// Compare a blowing agent against the reference agent
    Impact {
        /// Current blowing agent (HFC, HCFC, Pentane, HFO, Ecomate)
        #[arg(long)]
        agent: String,
        /// Annual consumption [kg/year]
        #[arg(long)]
        consumption: f64,
    },
    /// Sweep one input variable across a range
    Sweep {
        #[command(flatten)]
        params: ParamArgs,
        /// Variable to sweep: temperature, flow-rate or pipe-length
        #[arg(long)]
        variable: String,
        /// Sweep start value, in the variable's input units
        #[arg(long)]
        start: f64,
        /// Sweep end value, in the variable's input units
        #[arg(long)]
        end: f64,
        /// Number of points
        #[arg(long, default_value_t = 10)]
        points: usize,
        /// Use logarithmic spacing
        #[arg(long)]
        log: bool,
    },
    /// List the blowing agent reference table
    Agents,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Calc { params, profile } => cmd_calc(&params, profile),
        Commands::Impact {
            agent,
            consumption,
        } => cmd_impact(&agent, consumption),
        Commands::Sweep {
            params,
            variable,
            start,
            end,
            points,
            log,
        } => cmd_sweep(&params, &variable, start, end, points, log),
        Commands::Agents => cmd_agents(),
    }
}

fn load_params_file(path: &Path) -> AppResult<ProcessParameters> {
    let text = std::fs::read_to_string(path).map_err(|source| AppError::ParameterFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&text).map_err(|err| AppError::ParameterFileParse(err.to_string()))
}

fn resolve_params(args: &ParamArgs) -> AppResult<ProcessParameters> {
    let mut params = match &args.params {
        Some(path) => load_params_file(path)?,
        None => {
            let (Some(length), Some(thickness), Some(temperature), Some(flow)) = (
                args.pipe_length,
                args.pipe_thickness,
                args.temperature,
                args.flow_rate,
            ) else {
                return Err(AppError::InvalidInput(
                    "provide --params or all of --pipe-length, --pipe-thickness, \
                     --temperature and --flow-rate"
                        .to_string(),
                ));
            };
            ProcessParameters::new(length, thickness, temperature, flow)
        }
    };

    // Explicit flags override file values
    if let Some(v) = args.pipe_length {
        params.pipe_length_mm = v;
    }
    if let Some(v) = args.pipe_thickness {
        params.pipe_thickness_mm = v;
    }
    if let Some(v) = args.temperature {
        params.temperature_c = v;
    }
    if let Some(v) = args.flow_rate {
        params.flow_rate_m3_s = v;
    }
    if let Some(v) = args.viscosity {
        params.viscosity_cp = v;
    }
    if let Some(v) = args.density {
        params.density_g_cm3 = v;
    }

    Ok(params)
}

fn cmd_calc(args: &ParamArgs, show_profile: bool) -> AppResult<()> {
    let params = resolve_params(args)?;
    let engine = InjectionEngine::native();

    let results = engine.calculate_parameters(&params)?;
    tracing::debug!(state = ?engine.engine_state(), "calculation complete");

    println!("Required Injection Pressure: {} kPa", results.required_pressure_kpa);
    println!("Shear Rate: {} s⁻¹", results.shear_rate_per_s);
    println!("Apparent Viscosity: {} Pa·s", results.apparent_viscosity_pa_s);
    println!("Reynolds Number: {}", results.reynolds_number);
    println!("Flow Regime: {}", results.flow_regime);
    println!("Optimal Injection Time: {} s", results.optimal_injection_time_s);

    if !results.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in &results.warnings {
            println!("- {warning}");
        }
    }

    if show_profile {
        println!();
        println!("Pressure profile:");
        println!("{:>13}  {:>14}", "distance [mm]", "pressure [kPa]");
        for point in &results.pressure_profile {
            println!("{:>13.1}  {:>14.2}", point.distance_mm, point.pressure_kpa);
        }
    }

    Ok(())
}

fn cmd_impact(agent: &str, consumption: f64) -> AppResult<()> {
    let engine = InjectionEngine::native();
    let impact = engine.calculate_environmental_impact(agent, consumption);

    println!(
        "Environmental impact of switching {} kg/year from {} to {}:",
        consumption, agent, reference_agent().name
    );
    println!("CO₂ Reduction: {} tonnes/year", impact.co2_reduction_t_per_year);
    println!(
        "Thermal Efficiency Improvement: {}%",
        impact.thermal_improvement_pct
    );
    println!("Cost Savings: €{}", impact.cost_savings_per_year);
    println!("ODP Reduction: {} ODP·kg", impact.odp_reduction_kg);

    Ok(())
}

fn cmd_sweep(
    args: &ParamArgs,
    variable: &str,
    start: f64,
    end: f64,
    points: usize,
    log: bool,
) -> AppResult<()> {
    let base = resolve_params(args)?;
    let variable: SweepVariable = variable
        .parse()
        .map_err(|err: &str| AppError::InvalidInput(err.to_string()))?;
    let sweep_type = if log {
        SweepType::Logarithmic
    } else {
        SweepType::Linear
    };
    let sweep = SweepDefinition::new(variable, start, end, points, sweep_type)?;

    println!("{sweep}");
    println!(
        "{:>14}  {:>14}  {:>12}  {:>10}  warnings",
        "value", "pressure [kPa]", "Re", "regime"
    );

    let engine = InjectionEngine::native();
    for sample in engine.calculate_sweep(&base, &sweep)? {
        println!(
            "{:>14.6}  {:>14.2}  {:>12.2}  {:>10}  {}",
            sample.value,
            sample.results.required_pressure_kpa,
            sample.results.reynolds_number,
            sample.results.flow_regime,
            sample.results.warnings.len()
        );
    }

    Ok(())
}

fn cmd_agents() -> AppResult<()> {
    println!("Blowing agents:");
    for agent in blowing_agent_table() {
        let marker = if agent.name == reference_agent().name {
            " (reference)"
        } else {
            ""
        };
        println!(
            "  {:<8} GWP {:>6}  ODP {:>5}  λ {:.3} W/(m·K)  €{:.2}/kg{}",
            agent.name, agent.gwp, agent.odp, agent.lambda_w_m_k, agent.cost_per_kg, marker
        );
    }
    Ok(())
}
