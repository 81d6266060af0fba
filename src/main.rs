//! Displacement Risk CLI
//!
//! Command-line interface for risk scoring, premium quotes and transition simulations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;

use displacement_risk::{
    profile::load_requests, Coverage, Environment, EvaluationRequest, EvaluationResult,
    ParameterBundle, ParameterOverrides, Profile, ReferenceTables, ScenarioRunner, Transition,
    TransitionSimulation,
};

#[derive(Parser, Debug)]
#[command(
    name = "displacement-risk",
    about = "Score AI displacement risk and price income protection cover",
    version
)]
struct Cli {
    /// Directory with reference CSV files (built-in tables when omitted)
    #[arg(long, global = true)]
    reference_dir: Option<PathBuf>,
    /// JSON parameter file (defaults when omitted)
    #[arg(long, global = true)]
    params: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one profile and print every intermediate value
    Evaluate(EvaluateArgs),
    /// Simulate systematic risk over a career transition
    Simulate(SimulateArgs),
    /// Evaluate every request in a CSV file
    Batch(BatchArgs),
    /// List the occupations in the reference data
    Jobs,
}

#[derive(Args, Debug)]
struct EnvironmentArgs {
    /// Economic climate modifier
    #[arg(long, default_value_t = 1.0)]
    m_econ: f64,
    /// AI innovation index
    #[arg(long, default_value_t = 1.0)]
    iai: f64,
}

impl EnvironmentArgs {
    fn to_environment(&self) -> Environment {
        Environment { m_econ: self.m_econ, iai: self.iai }
    }
}

#[derive(Args, Debug)]
struct OverrideArgs {
    /// Override the premium loading factor
    #[arg(long)]
    loading_factor: Option<f64>,
    /// Override the minimum monthly premium
    #[arg(long)]
    min_premium: Option<f64>,
    /// Override beta_systemic
    #[arg(long)]
    beta_systemic: Option<f64>,
    /// Override beta_individual
    #[arg(long)]
    beta_individual: Option<f64>,
}

impl OverrideArgs {
    fn to_overrides(&self) -> ParameterOverrides {
        ParameterOverrides {
            loading_factor: self.loading_factor,
            min_monthly_premium: self.min_premium,
            beta_systemic: self.beta_systemic,
            beta_individual: self.beta_individual,
            ..Default::default()
        }
    }
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    #[arg(long, default_value = "Software Engineer")]
    job: String,
    #[arg(long, default_value_t = 5)]
    years: u32,
    #[arg(long, default_value = "Bachelor's")]
    education_level: String,
    #[arg(long, default_value = "Tech/Engineering")]
    education_field: String,
    #[arg(long, default_value = "Tier 2 (Top 25%)")]
    school_tier: String,
    #[arg(long, default_value = "Big Firm (Stable)")]
    company_type: String,
    /// % general skill training completed
    #[arg(long, default_value_t = 0.0)]
    p_gen: f64,
    /// % firm-specific skill training completed
    #[arg(long, default_value_t = 0.0)]
    p_spec: f64,
    #[command(flatten)]
    environment: EnvironmentArgs,
    #[arg(long, default_value_t = 90_000.0)]
    salary: f64,
    /// % of salary covered
    #[arg(long, default_value_t = 25.0)]
    coverage_pct: f64,
    #[arg(long, default_value_t = 6)]
    coverage_months: u32,
    /// Evaluate mid-transition towards this job
    #[arg(long, requires = "months_elapsed")]
    target_job: Option<String>,
    #[arg(long, requires = "target_job")]
    months_elapsed: Option<u32>,
    #[arg(long, requires = "target_job")]
    ttv: Option<u32>,
    #[command(flatten)]
    overrides: OverrideArgs,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct SimulateArgs {
    #[arg(long)]
    job: String,
    #[arg(long)]
    target_job: String,
    /// Month k to report
    #[arg(long, default_value_t = 0)]
    months_elapsed: u32,
    /// Time-to-Value in months (parameter default when omitted)
    #[arg(long)]
    ttv: Option<u32>,
    #[command(flatten)]
    environment: EnvironmentArgs,
    /// Write the month-by-month path to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Request CSV file
    #[arg(long)]
    input: PathBuf,
    #[arg(long, default_value = "evaluation_output.csv")]
    output: PathBuf,
    #[command(flatten)]
    overrides: OverrideArgs,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let runner = build_runner(&cli)?;

    match cli.command {
        Command::Evaluate(args) => run_evaluate(&runner, args),
        Command::Simulate(args) => run_simulate(&runner, args),
        Command::Batch(args) => run_batch(&runner, args),
        Command::Jobs => {
            print_jobs(runner.tables());
            Ok(())
        }
    }
}

fn build_runner(cli: &Cli) -> Result<ScenarioRunner> {
    let tables = match &cli.reference_dir {
        Some(dir) => ReferenceTables::from_csv_path(dir)
            .with_context(|| format!("loading reference data from {}", dir.display()))?,
        None => ReferenceTables::default_tables(),
    };
    let params = match &cli.params {
        Some(path) => ParameterBundle::from_json_path(path)
            .with_context(|| format!("loading parameters from {}", path.display()))?,
        None => ParameterBundle::default(),
    };
    Ok(ScenarioRunner::with_inputs(tables, params)?)
}

fn run_evaluate(runner: &ScenarioRunner, args: EvaluateArgs) -> Result<()> {
    let transition = match (args.target_job, args.months_elapsed) {
        (Some(target_job), Some(months_elapsed)) => Some(Transition {
            target_job,
            months_elapsed,
            ttv_months: args.ttv,
        }),
        _ => None,
    };
    let request = EvaluationRequest {
        profile: Profile {
            job_title: args.job,
            years_experience: args.years,
            education_level: args.education_level,
            education_field: args.education_field,
            school_tier: args.school_tier,
            company_type: args.company_type,
            p_gen_pct: args.p_gen,
            p_spec_pct: args.p_spec,
        },
        environment: args.environment.to_environment(),
        coverage: Coverage {
            annual_salary: args.salary,
            coverage_percentage: args.coverage_pct,
            coverage_duration_months: args.coverage_months,
        },
        transition,
    };

    let result = runner
        .run_with_overrides(&request, &args.overrides.to_overrides())
        .context("evaluation failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }
    Ok(())
}

fn print_result(result: &EvaluationResult) {
    println!("Risk Profile: {}", result.job_title);
    println!("{}", "=".repeat(40));

    println!("\nHuman Capital:");
    println!("  f_role:   {:>10.4}", result.f_role);
    println!("  f_level:  {:>10.4}", result.f_level);
    println!("  f_field:  {:>10.4}", result.f_field);
    println!("  f_school: {:>10.4}", result.f_school);
    println!("  f_exp:    {:>10.4}", result.f_exp);
    println!("  FHC:      {:>10.4}", result.fhc);

    println!("\nIdiosyncratic Risk:");
    println!("  FCR:      {:>10.4}", result.fcr);
    println!("  FUS:      {:>10.4}", result.fus);
    println!("  V_raw:    {:>10.4}", result.v_raw);
    println!("  V_i(t):   {:>10.2}", result.v_i_t);

    println!("\nSystematic Risk:");
    println!("  H_current:{:>10.2}", result.h_current);
    if let Some(h_target) = result.h_target {
        println!("  H_target: {:>10.2}", h_target);
    }
    println!("  H_base:   {:>10.2}", result.h_base);
    println!("  H_i:      {:>10.2}", result.h_i);

    println!("\nPremium:");
    println!("  L_payout:     ${:>12.2}", result.l_payout);
    println!("  P_systemic:    {:>12.6}", result.p_systemic);
    println!("  P_individual:  {:>12.6}", result.p_individual);
    println!("  P_claim:       {:>12.6}", result.p_claim);
    println!("  E[Loss]:      ${:>12.2}", result.e_loss);
    println!("  P_monthly:    ${:>12.2}", result.p_monthly);
}

fn run_simulate(runner: &ScenarioRunner, args: SimulateArgs) -> Result<()> {
    let transition = Transition {
        target_job: args.target_job,
        months_elapsed: args.months_elapsed,
        ttv_months: args.ttv,
    };
    let simulation = runner
        .simulate(&args.job, &transition, &args.environment.to_environment())
        .context("simulation failed")?;

    print_simulation(&simulation);

    if let Some(path) = args.output {
        write_simulation_csv(&path, &simulation)?;
        println!("\nTransition path written to: {}", path.display());
    }
    Ok(())
}

fn print_simulation(simulation: &TransitionSimulation) {
    println!(
        "Transition: {} (H={:.2}) -> {} (H={:.2}) over {} months",
        simulation.current_job,
        simulation.h_current,
        simulation.target_job,
        simulation.h_target,
        simulation.ttv_months
    );
    println!(
        "Systematic risk at month {}: {:.2}\n",
        simulation.at_month.month, simulation.at_month.h_i
    );

    println!("{:>5} {:>10} {:>10}", "Month", "H_base", "H_i");
    println!("{}", "-".repeat(27));
    for point in &simulation.points {
        println!("{:>5} {:>10.2} {:>10.2}", point.month, point.h_base, point.h_i);
    }
    println!("\nTotal reduction: {:.2}", simulation.total_reduction());
}

fn write_simulation_csv(path: &Path, simulation: &TransitionSimulation) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    for point in &simulation.points {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}

fn run_batch(runner: &ScenarioRunner, args: BatchArgs) -> Result<()> {
    let requests = load_requests(&args.input)
        .with_context(|| format!("loading requests from {}", args.input.display()))?;
    info!("loaded {} requests from {}", requests.len(), args.input.display());

    let results = runner
        .run_batch_with_overrides(&requests, &args.overrides.to_overrides())
        .context("invalid parameter overrides")?;

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    let mut rejected = 0;
    for (idx, result) in results.iter().enumerate() {
        match result {
            Ok(result) => writer.serialize(result)?,
            Err(e) => {
                rejected += 1;
                eprintln!("Row {}: {}", idx + 1, e);
            }
        }
    }
    writer.flush()?;

    println!(
        "Evaluated {} of {} requests, results written to: {}",
        requests.len() - rejected,
        requests.len(),
        args.output.display()
    );
    Ok(())
}

fn print_jobs(tables: &ReferenceTables) {
    println!("{:<24} {:>8} {:>8}  {}", "Job Title", "f_role", "H_base", "Industry");
    println!("{}", "-".repeat(56));
    for (title, job) in tables.jobs.iter() {
        println!(
            "{:<24} {:>8.2} {:>8.1}  {}",
            title, job.role_factor, job.base_hazard, job.industry
        );
    }
}
