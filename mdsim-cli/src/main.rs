use clap::{Args, Parser, Subcommand};
use log::info;
use mdsim_core::{
    compare_positions, load_particles, parse_positions, write_positions, write_velocities,
    LennardJones, Simulation, SimulationConfig, XyzTrajectory,
};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "mdsim")]
#[command(about = "mdsim - Lennard-Jones molecular dynamics with velocity Verlet", long_about = None)]
struct Cli {
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation from initial positions and velocities
    Run(RunArgs),
    /// Compare a final-positions file against reference positions
    Verify {
        /// Positions produced by a run
        observed: PathBuf,
        /// Reference positions
        reference: PathBuf,
        /// Absolute tolerance per coordinate
        #[arg(long, default_value_t = 1e-3)]
        tolerance: f64,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Initial positions, one `x y z` record per line
    #[arg(long, default_value = "data/positions.txt")]
    positions: PathBuf,

    /// Initial velocities, one `x y z` record per line
    #[arg(long, default_value = "data/velocities.txt")]
    velocities: PathBuf,

    /// Well depth scale
    #[arg(long, default_value_t = 100.0)]
    epsilon: f64,

    /// Length scale
    #[arg(long, default_value_t = 1.7)]
    sigma: f64,

    #[arg(long, default_value_t = 0.01)]
    timestep: f64,

    #[arg(long, default_value_t = 10_000)]
    steps: u64,

    /// Write an XYZ trajectory, one frame per step
    #[arg(long)]
    trajectory: Option<PathBuf>,

    /// Final positions output
    #[arg(short, long, default_value = "final_positions.txt")]
    output: PathBuf,

    /// Final velocities output
    #[arg(long)]
    velocities_output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let outcome = match cli.command {
        Commands::Run(args) => run_file(&args).map(|()| true),
        Commands::Verify {
            observed,
            reference,
            tolerance,
        } => verify_file(&observed, &reference, tolerance),
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => std::process::exit(2),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_file(args: &RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let particles = load_particles(&args.positions, &args.velocities)?;
    let potential = LennardJones::new(args.epsilon, args.sigma)?;
    let config = SimulationConfig::new(args.timestep, args.steps, args.trajectory.is_some())?;
    info!(
        "loaded {} particles from {}",
        particles.len(),
        args.positions.display()
    );

    let mut sim = Simulation::new(particles, potential, config);
    let start = Instant::now();
    let summary = match &args.trajectory {
        Some(path) => {
            let mut sink = XyzTrajectory::new(BufWriter::new(File::create(path)?));
            let summary = sim.run_with(&mut sink)?;
            info!("wrote {} frames to {}", sink.frames(), path.display());
            summary
        }
        None => sim.run()?,
    };
    info!(
        "{} steps, {} force passes in {:.3} s",
        summary.steps,
        summary.force_passes,
        start.elapsed().as_secs_f64()
    );

    let particles = sim.into_particles();
    write_positions(BufWriter::new(File::create(&args.output)?), &particles)?;
    info!("final positions written to {}", args.output.display());

    if let Some(path) = &args.velocities_output {
        write_velocities(BufWriter::new(File::create(path)?), &particles)?;
        info!("final velocities written to {}", path.display());
    }

    Ok(())
}

fn verify_file(
    observed: &PathBuf,
    reference: &PathBuf,
    tolerance: f64,
) -> Result<bool, Box<dyn std::error::Error>> {
    let observed = parse_positions(&fs::read_to_string(observed)?)?;
    let reference = parse_positions(&fs::read_to_string(reference)?)?;

    let cmp = compare_positions(&observed, &reference, tolerance);

    if let Some((found, expected)) = cmp.count_mismatch {
        println!("particle count mismatch: {} vs {}", found, expected);
    }
    for dev in &cmp.failures {
        println!(
            "particle {} axis {}: observed {} expected {} (diff {:.3e})",
            dev.particle,
            ["x", "y", "z"][dev.axis],
            dev.observed,
            dev.expected,
            (dev.observed - dev.expected).abs()
        );
    }
    println!(
        "max deviation {:.3e}, tolerance {:.1e}: {}",
        cmp.max_deviation,
        tolerance,
        if cmp.passed() { "validated" } else { "FAILED" }
    );

    Ok(cmp.passed())
}
