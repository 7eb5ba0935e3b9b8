//! # pricing-render
//!
//! Prerenders the pricing page to a static HTML file.
//!
//! ```bash
//! # Default page
//! pricing-render --out dist/pricing.html
//!
//! # Tuned assumptions and a different starting scenario
//! pricing-render --policy policy.toml --tier competitor --employees 500
//!
//! # Just the numbers
//! pricing-render --estimate-json --incidents 4
//! ```
//!
//! Developed by The Bastion Team (c)2025

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use pricing_page::{DEFAULT_PRODUCT_NAME, PageOptions, render_page};
use roi_core::types::{
    DEFAULT_ANNUAL_INCIDENT_COUNT, DEFAULT_COST_PER_INCIDENT, DEFAULT_EMPLOYEE_COUNT,
    DEFAULT_MONTHLY_PROCESSING_VOLUME,
};
use roi_core::{CostEstimator, EstimatorInput, EstimatorPolicy, SolutionTier};

#[derive(Parser, Debug)]
#[command(name = "pricing-render")]
#[command(about = "Render the pricing page to static HTML")]
#[command(version)]
struct Args {
    /// Output file ('-' for stdout)
    #[arg(long, short, default_value = "pricing.html")]
    out: PathBuf,

    /// TOML file overriding the estimator policy
    #[arg(long)]
    policy: Option<PathBuf>,

    /// Product name used in headings and the page title
    #[arg(long, default_value = DEFAULT_PRODUCT_NAME)]
    product_name: String,

    /// Initial employee count
    #[arg(long, default_value_t = DEFAULT_EMPLOYEE_COUNT)]
    employees: u64,

    /// Initial security incidents per year
    #[arg(long, default_value_t = DEFAULT_ANNUAL_INCIDENT_COUNT)]
    incidents: u64,

    /// Initial cost per incident
    #[arg(long, default_value_t = DEFAULT_COST_PER_INCIDENT)]
    cost_per_incident: f64,

    /// Initial solution tier (basic, competitor, inhouse, none)
    #[arg(long, default_value_t = SolutionTier::Basic)]
    tier: SolutionTier,

    /// Initial monthly processing volume
    #[arg(long, default_value_t = DEFAULT_MONTHLY_PROCESSING_VOLUME)]
    volume: u64,

    /// Print the estimate for the initial input as JSON and exit
    #[arg(long)]
    estimate_json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn initial_input(&self) -> EstimatorInput {
        EstimatorInput {
            employee_count: self.employees,
            annual_incident_count: self.incidents,
            cost_per_incident: self.cost_per_incident,
            current_solution_tier: self.tier,
            monthly_processing_volume: self.volume,
        }
        .sanitized()
    }

    fn load_policy(&self) -> Result<EstimatorPolicy> {
        match &self.policy {
            Some(path) => EstimatorPolicy::load_from_path(path)
                .with_context(|| format!("cannot use policy file {}", path.display())),
            None => Ok(EstimatorPolicy::default()),
        }
    }
}

fn run(args: Args) -> Result<()> {
    let policy = args.load_policy()?;
    let input = args.initial_input();
    debug!(?input, "initial estimator input");

    if args.estimate_json {
        let result = CostEstimator::new(policy).compute(&input);
        let json = serde_json::to_string_pretty(&result).context("failed to serialize estimate")?;
        println!("{}", json);
        return Ok(());
    }

    let html = render_page(&PageOptions {
        product_name: args.product_name.clone(),
        policy,
        initial_input: input,
    });

    if args.out.as_os_str() == "-" {
        print!("{}", html);
        return Ok(());
    }

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&args.out, &html)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    info!(path = %args.out.display(), bytes = html.len(), "pricing page written");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[pricing-render][error] {:#}", e);
            ExitCode::FAILURE
        }
    }
}
