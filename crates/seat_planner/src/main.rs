use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use seat_planner::{PlaneConfig, SeatingRun, report, roster};
use std::{io::Write, path::PathBuf};

#[derive(Parser)]
#[command(author, version, about = "Assign passengers to aircraft seats", long_about = None)]
struct Args {
    /// Plane configuration file (TOML)
    #[arg(short = 'c', long = "config", default_value = "config/plane.toml")]
    config: PathBuf,

    /// Passenger roster CSV (`Name,Priority`); the built-in sample is used if omitted
    #[arg(short = 'p', long = "passengers")]
    passengers: Option<PathBuf>,

    /// Seed for the fallback shuffle
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Print the assignment list as CSV instead of text
    #[arg(long = "csv")]
    csv: bool,
}

fn main() -> Result<()> {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
    let args = Args::parse();

    let config = if args.config.exists() {
        PlaneConfig::load_from_file(&args.config)
            .with_context(|| format!("loading {}", args.config.display()))?
    } else {
        warn!(
            "Config file not found: {}, using default plane",
            args.config.display()
        );
        PlaneConfig::default()
    };
    let mut config = config.apply_env()?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let passengers = match &args.passengers {
        Some(path) => roster::read_roster_csv(path)
            .with_context(|| format!("reading roster {}", path.display()))?,
        None => {
            info!("No roster given, using the sample passenger list");
            roster::sample_roster()?
        }
    };

    let mut run = SeatingRun::new(config, passengers)?;
    let plane = run.config();
    info!(
        "Plane: {} rows x {} seats, {} priority seats",
        plane.rows,
        plane.seats_per_row,
        plane.priority_seats.len()
    );
    let summary = run.allocate()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::write_seating_chart(&run, &mut out)?;
    if args.csv {
        report::write_assignments_csv(&run, &mut out)?;
    } else {
        report::write_assignments(&run, &mut out)?;
    }
    out.flush()?;

    if summary.unassigned > 0 {
        warn!(
            "{} of {} passengers have no seat",
            summary.unassigned,
            run.registry().len()
        );
    }
    Ok(())
}
