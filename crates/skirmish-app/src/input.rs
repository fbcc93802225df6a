//! Text input adapter: one command per line.
//!
//! ```text
//! left | right | none       steering
//! tilt <n>                  raw tilt sample, thresholded by the dead zone
//! confirm | up | down       buttons
//! quit                      stop the game loop
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use std::io::BufRead;
use std::sync::mpsc;
use std::thread::JoinHandle;

use tracing::{debug, warn};

use skirmish_core::commands::PlayerCommand;
use skirmish_core::enums::Steering;

use crate::error::AppError;
use crate::state::GameLoopCommand;

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputLine {
    Command(PlayerCommand),
    Quit,
}

/// Parse one line. `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<InputLine>, AppError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let keyword = words.next().unwrap_or_default().to_ascii_lowercase();
    let steer = |steering| Ok(Some(InputLine::Command(PlayerCommand::Steer { steering })));

    match keyword.as_str() {
        "left" => steer(Steering::Left),
        "right" => steer(Steering::Right),
        "none" | "idle" => steer(Steering::Idle),
        "tilt" => {
            let raw = words.next().unwrap_or_default();
            let value: i32 = raw
                .parse()
                .map_err(|_| AppError::InvalidTilt(raw.to_string()))?;
            steer(Steering::from_tilt(value))
        }
        "confirm" | "select" => Ok(Some(InputLine::Command(PlayerCommand::Confirm))),
        "up" => Ok(Some(InputLine::Command(PlayerCommand::NavigateUp))),
        "down" => Ok(Some(InputLine::Command(PlayerCommand::NavigateDown))),
        "quit" | "exit" => Ok(Some(InputLine::Quit)),
        _ => Err(AppError::UnknownInput(line.to_string())),
    }
}

/// Forward every line of `reader` to the game loop until `quit` or end of
/// input. Bad lines are logged and skipped.
pub fn forward_lines<R: BufRead>(
    reader: R,
    tx: &mpsc::Sender<GameLoopCommand>,
) -> Result<(), AppError> {
    for line in reader.lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(Some(InputLine::Command(command))) => {
                tx.send(GameLoopCommand::PlayerCommand(command))
                    .map_err(|_| AppError::LoopStopped)?;
            }
            Ok(Some(InputLine::Quit)) => {
                tx.send(GameLoopCommand::Shutdown)
                    .map_err(|_| AppError::LoopStopped)?;
                return Ok(());
            }
            Ok(None) => {}
            Err(err) => warn!(%err, "ignoring input line"),
        }
    }
    debug!("input closed");
    Ok(())
}

/// Spawn a thread reading commands from stdin.
pub fn spawn_stdin_reader(tx: mpsc::Sender<GameLoopCommand>) -> Result<JoinHandle<()>, AppError> {
    let handle = std::thread::Builder::new()
        .name("skirmish-input".into())
        .spawn(move || {
            let stdin = std::io::stdin();
            if let Err(err) = forward_lines(stdin.lock(), &tx) {
                debug!(%err, "input reader stopped");
            }
        })?;
    Ok(handle)
}
