use std::path::PathBuf;

use clap::{Parser, Subcommand};

use demscan::loader::DemTable;
use demscan::paths::RunLocator;
use demscan::{init_logging, report};
use demscan_core::analysis::{SweepConfig, WaitTimeRange, sweep_evaluate};
use demscan_core::heating::{AmpDistribution, HeatingConfig, PulseShape, Species};
use demscan_core::model::Curve;

#[derive(Parser, Debug)]
#[command(name = "demscan")]
#[command(about = "Shoulder-asymmetry diagnostics for EBTEL-2fluid DEM output")]
struct Args {
    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze the DEM tables of a wait-time sweep
    Analyze(AnalyzeArgs),
    /// Show the run plan for a sweep without touching any output tree
    Plan(PlanArgs),
}

#[derive(clap::Args, Debug)]
struct SweepArgs {
    /// First wait time of the sweep (s)
    #[arg(long, default_value_t = 250.0)]
    tn_start: f64,

    /// Last wait time of the sweep, inclusive (s)
    #[arg(long, default_value_t = 5000.0)]
    tn_stop: f64,

    /// Wait-time increment (s)
    #[arg(long, default_value_t = 250.0)]
    tn_step: f64,
}

#[derive(clap::Args, Debug)]
struct AnalyzeArgs {
    /// Root of the simulation output tree
    #[arg(short, long)]
    data_dir: PathBuf,

    /// Heated species subtree (electron or ion)
    #[arg(long, default_value = "electron")]
    species: Species,

    /// Power-law index of the amplitude distribution; omit for uniform runs
    #[arg(long, allow_negative_numbers = true)]
    alpha: Option<f64>,

    /// Loop half-length (Mm)
    #[arg(long, default_value_t = 40.0)]
    loop_length: f64,

    /// Full heating pulse duration (s)
    #[arg(long, default_value_t = 500.0)]
    t_pulse: f64,

    /// Solver tag in the run file names
    #[arg(long, default_value = "rka4")]
    solver: String,

    #[command(flatten)]
    sweep: SweepArgs,

    /// Orders of magnitude below the DEM peak delimiting a shoulder
    #[arg(long, default_value_t = 2.0)]
    delta: f64,

    /// DEM column to analyze (0 is the temperature axis)
    #[arg(long, default_value_t = 2)]
    dem_column: usize,

    /// Also write the report as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct PlanArgs {
    /// Total simulated time per run (s)
    #[arg(long, default_value_t = 80_000.0)]
    total_time: f64,

    /// Full heating pulse duration (s)
    #[arg(long, default_value_t = 500.0)]
    t_pulse: f64,

    /// Loop half-length (Mm)
    #[arg(long, default_value_t = 40.0)]
    loop_length: f64,

    /// Cross-sectional loop area (cm^2)
    #[arg(long, default_value_t = 1.0)]
    cross_sectional_area: f64,

    /// Time-averaged heating rate to preserve (erg cm^-3 s^-1)
    #[arg(long)]
    heating_rate: f64,

    /// Heated species (electron or ion)
    #[arg(long, default_value = "electron")]
    species: Species,

    /// Power-law index of the amplitude distribution; omit for uniform runs
    #[arg(long, allow_negative_numbers = true)]
    alpha: Option<f64>,

    /// Dynamic range of the power-law amplitude distribution
    #[arg(long, default_value_t = 100.0)]
    delta_q: f64,

    /// Pulse profile (triangle, square, or gaussian)
    #[arg(long, default_value = "triangle")]
    pulse_shape: PulseShape,

    /// Target heating-event count per wait time (repeats runs to reach it)
    #[arg(long)]
    target_events: Option<usize>,

    #[command(flatten)]
    sweep: SweepArgs,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level);

    match args.command {
        Command::Analyze(args) => analyze(args),
        Command::Plan(args) => plan(args),
    }
}

fn analyze(args: AnalyzeArgs) -> color_eyre::Result<()> {
    let locator = RunLocator {
        species: args.species,
        alpha: args.alpha,
        loop_length: args.loop_length,
        t_pulse: args.t_pulse,
        solver: args.solver.clone(),
    };
    let config = SweepConfig {
        wait_times: WaitTimeRange::new(args.sweep.tn_start, args.sweep.tn_stop, args.sweep.tn_step),
        delta: args.delta,
        ..Default::default()
    };

    let mut curves: Vec<(f64, Curve)> = Vec::new();
    for t_wait in config.wait_times.values() {
        let path = locator.dem_file(&args.data_dir, t_wait);
        tracing::debug!(t_wait, path = %path.display(), "loading DEM table");
        let curve = DemTable::load(&path)?.curve(args.dem_column)?;
        curves.push((t_wait, curve));
    }
    tracing::info!(points = curves.len(), delta = config.delta, "running sweep");

    let results = sweep_evaluate(&curves, &config);
    for (t_wait, err) in results.failures() {
        tracing::warn!(t_wait, error = %err, "skipping sweep point");
    }

    print!("{}", report::render_table(&results, &config.metrics));

    if let Some(path) = args.json {
        std::fs::write(&path, report::to_json(&results)?)?;
        tracing::info!(path = %path.display(), "wrote JSON report");
    }

    Ok(())
}

fn plan(args: PlanArgs) -> color_eyre::Result<()> {
    let amplitude = match args.alpha {
        Some(alpha) => AmpDistribution::PowerLaw {
            alpha,
            delta_q: args.delta_q,
        },
        None => AmpDistribution::Uniform,
    };
    let heating = HeatingConfig {
        total_time: args.total_time,
        t_pulse_half: args.t_pulse / 2.0,
        loop_length: args.loop_length,
        cross_sectional_area: args.cross_sectional_area,
        mean_heating_rate: args.heating_rate,
        species: args.species,
        pulse_shape: args.pulse_shape,
        amplitude,
    };
    let wait_times =
        WaitTimeRange::new(args.sweep.tn_start, args.sweep.tn_stop, args.sweep.tn_step);

    print!(
        "{}",
        report::render_plan(&heating, &wait_times, args.target_events)
    );
    Ok(())
}
