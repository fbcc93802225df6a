//! SKIRMISH headless driver.
//!
//! Usage:
//!   skirmish [--levels <file>] [--no-intro] [--ticks <n>] < commands.txt > snapshots.jsonl
//!   RUST_LOG=info skirmish --export-levels campaign.json

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing::{error, info};

use skirmish_app::error::AppError;
use skirmish_app::game_loop::{LoopOptions, SnapshotSink, TICK_DURATION};
use skirmish_app::input;
use skirmish_app::state::AppState;
use skirmish_core::constants::CREEP_FIRE_CHANCE;
use skirmish_core::enums::{BottomExitPolicy, DistanceComparison};
use skirmish_sim::{SimConfig, SimulationEngine};

#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(about = "Headless SKIRMISH simulation: commands on stdin, JSON snapshots on stdout")]
struct Args {
    /// Level set (.json or compact rule stream); the built-in campaign when omitted
    #[arg(short, long)]
    levels: Option<PathBuf>,

    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Start at the countdown instead of the intro screen
    #[arg(long)]
    no_intro: bool,

    /// How distance-limited rules compare travelled distance with their threshold
    #[arg(long, value_enum, default_value_t = CliDistance::Inclusive)]
    distance: CliDistance,

    /// What happens to creeps that fall off the bottom of the field
    #[arg(long, value_enum, default_value_t = CliBottomExit::Recycle)]
    bottom_exit: CliBottomExit,

    /// Per-tick creep fire chance, out of 1000
    #[arg(long, default_value_t = CREEP_FIRE_CHANCE)]
    fire_chance: u32,

    /// Let creeps fire while an earlier shot is still live
    #[arg(long)]
    multi_shot: bool,

    /// Stop after this many ticks
    #[arg(long)]
    ticks: Option<u64>,

    /// Run as fast as possible instead of at the fixed tick rate
    #[arg(long)]
    unpaced: bool,

    /// Write snapshots to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the level set to this file (.json or compact stream) and exit
    #[arg(long)]
    export_levels: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliDistance {
    Inclusive,
    Strict,
}

impl From<CliDistance> for DistanceComparison {
    fn from(value: CliDistance) -> Self {
        match value {
            CliDistance::Inclusive => DistanceComparison::Inclusive,
            CliDistance::Strict => DistanceComparison::Strict,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliBottomExit {
    Recycle,
    Exit,
}

impl From<CliBottomExit> for BottomExitPolicy {
    fn from(value: CliBottomExit) -> Self {
        match value {
            CliBottomExit::Recycle => BottomExitPolicy::Recycle,
            CliBottomExit::Exit => BottomExitPolicy::Exit,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "skirmish failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let levels = match &args.levels {
        Some(path) => skirmish_levels::load_file(path)?,
        None => skirmish_levels::default_campaign(),
    };

    if let Some(path) = &args.export_levels {
        skirmish_levels::save_file(path, &levels)?;
        return Ok(());
    }

    let config = SimConfig {
        seed: args.seed,
        show_intro: !args.no_intro,
        distance_comparison: args.distance.into(),
        bottom_exit: args.bottom_exit.into(),
        fire_chance: args.fire_chance,
        single_live_shot: !args.multi_shot,
        ..Default::default()
    };
    let engine = SimulationEngine::new(config, &levels);

    let sink: SnapshotSink = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(std::io::stdout()),
    };
    let options = LoopOptions {
        tick_duration: if args.unpaced {
            Duration::ZERO
        } else {
            TICK_DURATION
        },
        tick_limit: args.ticks,
    };

    info!(seed = config.seed, levels = levels.len(), "starting simulation");
    let state = AppState::new();
    let game_loop = state.start(engine, options, sink)?;
    input::spawn_stdin_reader(state.sender()?)?;

    game_loop.join().map_err(|_| AppError::LoopStopped)?;

    if let Some(snapshot) = state.snapshot()? {
        info!(
            tick = snapshot.time.tick,
            state = ?snapshot.state,
            level = snapshot.level,
            currency = snapshot.currency,
            "simulation stopped"
        );
    }
    Ok(())
}
