//! Driver state shared between the main thread, the input reader and the
//! game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use skirmish_core::commands::PlayerCommand;
use skirmish_core::state::GameSnapshot;
use skirmish_sim::SimulationEngine;

use crate::error::AppError;
use crate::game_loop::{self, LoopOptions, SnapshotSink};

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared driver state.
///
/// - `command_tx` is `None` until `start` spawns the loop
/// - `latest_snapshot` is shared with the loop thread, which replaces it every tick
pub struct AppState {
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    pub latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop around `engine`. Fails if a loop was already started.
    pub fn start(
        &self,
        engine: SimulationEngine,
        options: LoopOptions,
        sink: SnapshotSink,
    ) -> Result<JoinHandle<()>, AppError> {
        let mut running = self.running.lock().map_err(|_| AppError::Poisoned)?;
        if *running {
            return Err(AppError::AlreadyRunning);
        }

        let (cmd_tx, handle) =
            game_loop::spawn_game_loop(engine, options, sink, self.latest_snapshot.clone())?;

        let mut tx_lock = self.command_tx.lock().map_err(|_| AppError::Poisoned)?;
        *tx_lock = Some(cmd_tx);
        *running = true;

        Ok(handle)
    }

    /// A sender for another producer thread (the input reader).
    pub fn sender(&self) -> Result<mpsc::Sender<GameLoopCommand>, AppError> {
        let tx_lock = self.command_tx.lock().map_err(|_| AppError::Poisoned)?;
        tx_lock.clone().ok_or(AppError::NotRunning)
    }

    /// Forward a player command to the simulation.
    pub fn send_command(&self, command: PlayerCommand) -> Result<(), AppError> {
        self.send(GameLoopCommand::PlayerCommand(command))
    }

    /// Ask the game loop to stop after its current tick.
    pub fn shutdown(&self) -> Result<(), AppError> {
        self.send(GameLoopCommand::Shutdown)
    }

    fn send(&self, command: GameLoopCommand) -> Result<(), AppError> {
        let tx_lock = self.command_tx.lock().map_err(|_| AppError::Poisoned)?;
        match tx_lock.as_ref() {
            Some(tx) => tx.send(command).map_err(|_| AppError::LoopStopped),
            None => Err(AppError::NotRunning),
        }
    }

    /// Latest snapshot, for polling.
    pub fn snapshot(&self) -> Result<Option<GameSnapshot>, AppError> {
        let lock = self.latest_snapshot.lock().map_err(|_| AppError::Poisoned)?;
        Ok(lock.clone())
    }
}
