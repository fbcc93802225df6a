//! Game loop thread: ticks the simulation engine at a fixed rate and emits snapshots.
//!
//! The engine is moved into this thread and owned by it alone. Commands
//! arrive via `mpsc` channel. Snapshots are written as JSON lines to the
//! sink and stored in shared state for polling.

use std::io::Write;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{error, info};

use skirmish_core::constants::TICK_MS;
use skirmish_core::state::GameSnapshot;
use skirmish_sim::SimulationEngine;

use crate::error::AppError;
use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_millis(TICK_MS);

/// Where snapshots go.
pub type SnapshotSink = Box<dyn Write + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopOptions {
    /// Zero runs unpaced.
    pub tick_duration: Duration,
    /// Stop on its own after this many ticks.
    pub tick_limit: Option<u64>,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            tick_duration: TICK_DURATION,
            tick_limit: None,
        }
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    options: LoopOptions,
    sink: SnapshotSink,
    latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("skirmish-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, options, sink, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// Serialize one snapshot as a single JSON line.
pub fn write_snapshot<W: Write>(sink: &mut W, snapshot: &GameSnapshot) -> Result<(), AppError> {
    serde_json::to_writer(&mut *sink, snapshot)?;
    sink.write_all(b"\n")?;
    sink.flush()?;
    Ok(())
}

/// The game loop. Runs until Shutdown, channel disconnect, the tick limit,
/// or a sink failure.
fn run_game_loop(
    mut engine: SimulationEngine,
    options: LoopOptions,
    mut sink: SnapshotSink,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameSnapshot>>,
) {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    info!(tick = engine.time().tick, "game loop shut down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        if let Some(limit) = options.tick_limit {
            if engine.time().tick >= limit {
                info!(tick = limit, "tick limit reached");
                return;
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();

        // 3. Emit snapshot
        if let Err(err) = write_snapshot(&mut sink, &snapshot) {
            error!(%err, "snapshot sink failed, stopping game loop");
            return;
        }

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick
        if options.tick_duration.is_zero() {
            continue;
        }
        next_tick_time += options.tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > options.tick_duration * 2 {
            // Too far behind; reset to avoid a catch-up burst
            next_tick_time = now;
        }
    }
}
