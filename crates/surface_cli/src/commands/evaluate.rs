//! Evaluate command implementation
//!
//! Builds a surface request from the flags, runs (or fetches) the tensor
//! and prints one Greek's grid for each of the four option variants.

use anyhow::Context;
use clap::Args;
use tracing::info;

use surface_core::{linspace, GreekKind, OptionKind, SurfaceRequest};
use surface_engine::{EngineConfig, GreekGrid, SurfaceManager};

/// Flags for one surface evaluation.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Spot price of the underlying
    #[arg(short, long)]
    pub spot: f64,

    /// Continuously compounded risk-free rate
    #[arg(short, long, default_value_t = 0.05)]
    pub rate: f64,

    /// Continuous dividend yield
    #[arg(short = 'q', long, default_value_t = 0.0)]
    pub div_yield: f64,

    /// Time to maturity in years
    #[arg(short, long)]
    pub tau: f64,

    /// Lower bound of the volatility axis
    #[arg(long, default_value_t = 0.1)]
    pub sigma_min: f64,

    /// Upper bound of the volatility axis
    #[arg(long, default_value_t = 0.5)]
    pub sigma_max: f64,

    /// Lower bound of the strike axis
    #[arg(long)]
    pub strike_min: f64,

    /// Upper bound of the strike axis
    #[arg(long)]
    pub strike_max: f64,

    /// Greek to print (price, delta, gamma, vega, theta, rho)
    #[arg(short, long, default_value = "price")]
    pub greek: String,

    /// Steps per axis; defaults to SURFACE_GRID_RESOLUTION
    #[arg(long)]
    pub resolution: Option<usize>,

    /// Tensors retained by the LRU cache; defaults to SURFACE_CACHE_CAPACITY
    #[arg(long)]
    pub cache_capacity: Option<usize>,

    /// Worker threads for grid evaluation; defaults to SURFACE_THREADS
    #[arg(long)]
    pub threads: Option<usize>,
}

/// Engine configuration: environment values with flag overrides applied.
fn engine_config(args: &EvaluateArgs) -> anyhow::Result<EngineConfig> {
    let mut config = EngineConfig::from_env().context("loading engine configuration")?;
    if let Some(capacity) = args.cache_capacity {
        config.cache_capacity = capacity;
    }
    if let Some(threads) = args.threads {
        config.threads = Some(threads);
    }
    config.validate().context("validating engine configuration")?;
    Ok(config)
}

/// Run the evaluate command
pub fn run(args: &EvaluateArgs) -> anyhow::Result<()> {
    let greek: GreekKind = args
        .greek
        .parse()
        .with_context(|| format!("unsupported greek {:?}", args.greek))?;

    let config = engine_config(args)?;
    let steps = args.resolution.unwrap_or(config.grid_resolution);

    let request = SurfaceRequest::new(
        steps,
        steps,
        args.spot,
        args.rate,
        args.div_yield,
        args.tau,
        (args.sigma_min, args.sigma_max),
        (args.strike_min, args.strike_max),
    )
    .context("building surface request")?;

    info!(
        spot = args.spot,
        tau = args.tau,
        steps,
        %greek,
        "evaluating surface"
    );

    let manager = SurfaceManager::new(&config).context("starting surface manager")?;
    let surfaces = manager.get_greek(&request, greek)?;

    let sigmas = linspace(steps, args.sigma_min, args.sigma_max)?;
    let strikes = linspace(steps, args.strike_min, args.strike_max)?;

    for option in OptionKind::ALL {
        println!("\n{option} {greek}");
        print_grid(surfaces.grid(option), &sigmas, &strikes);
    }

    Ok(())
}

/// Print one grid with strike column headers and sigma row labels.
fn print_grid(grid: &GreekGrid, sigmas: &[f64], strikes: &[f64]) {
    print!("{:>8}", "sigma\\K");
    for strike in strikes {
        print!("{strike:>11.2}");
    }
    println!();

    for (row, sigma) in sigmas.iter().enumerate() {
        print!("{sigma:>8.3}");
        for col in 0..grid.cols() {
            print!("{:>11.4}", grid.at(row, col));
        }
        println!();
    }
}
