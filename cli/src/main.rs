#![forbid(unsafe_code)]

mod game;
mod input;
mod render;
mod setup;

use std::io;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use sweeper_core::{BoardEngine, Coord, mult};

use crate::game::{AutoPlayer, ManualPlayer, Session};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Reveal random hidden cells
    Auto,
    /// Type `x,y` coordinates
    Manual,
}

#[derive(Parser, Debug)]
#[command(version, about = "Reveal cells on a hidden minefield", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,

    /// Number of board rows
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(Coord).range(1..))]
    rows: Coord,

    /// Number of board columns
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(Coord).range(1..))]
    cols: Coord,

    /// Exact number of mines
    #[arg(short, long, allow_negative_numbers = true, conflicts_with = "density")]
    mines: Option<i64>,

    /// Scales a random mine count when --mines is not given, between 0 and 1
    #[arg(short, long, default_value_t = 0.5, value_parser = setup::parse_density)]
    density: f64,

    /// Play mode, asked interactively when omitted
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Pause between turns in milliseconds
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print a JSON summary of the finished game
    #[arg(long)]
    json: bool,
}

fn init_logging(verbose: &Verbosity<InfoLevel>) {
    use tracing_subscriber::filter::LevelFilter;

    let level = match verbose.log_level_filter() {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose);
    log::debug!("seed: {:?}", args.seed);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut engine = BoardEngine::new((args.rows, args.cols))?;
    let mines = match args.mines {
        Some(mines) => setup::mine_count_arg(mines)?,
        None => setup::density_mine_count(args.density, mult(args.rows, args.cols), &mut rng)?,
    };
    info!("Creating minesweeper [{}, {}] with {} bombs", args.rows, args.cols, mines);
    engine
        .initialize(mines, &mut rng)
        .with_context(|| format!("cannot place {mines} mines on a {}x{} board", args.rows, args.cols))?;

    let mut stdin = io::stdin().lock();
    let mode = match args.mode {
        Some(mode) => mode,
        None => input::prompt_mode(&mut stdin, &mut io::stdout())?,
    };

    let mut session = Session::new(engine, io::stdout(), Duration::from_millis(args.delay_ms));
    let outcome = match mode {
        Mode::Auto => session.play(&mut AutoPlayer::new(rng))?,
        Mode::Manual => session.play(&mut ManualPlayer::new(stdin, io::stdout()))?,
    };
    log::debug!(
        "Finished with {:?} after revealing {} safe cells",
        outcome,
        session.engine().revealed_safe_count()
    );

    if args.json {
        serde_json::to_writer_pretty(io::stdout(), &session.snapshot(outcome))?;
        println!();
    }
    Ok(())
}
