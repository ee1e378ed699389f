//! Game loop thread — runs the simulation engine at the fixed tick
//! rate until the game ends.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel from the stdin reader;
//! audio events are logged as they fire, with the sound asset each one
//! maps to.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use tankfield_core::commands::PlayerCommand;
use tankfield_core::constants::{BANG_SOUND, SHOOT_SOUND, TICK_RATE};
use tankfield_core::events::AudioEvent;
use tankfield_core::level::Placement;
use tankfield_core::state::GameSnapshot;
use tankfield_sim::engine::{GameEngine, SimConfig};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Commands the loop thread accepts from the outside.
#[derive(Debug)]
pub enum GameLoopCommand {
    Player(PlayerCommand),
    Shutdown,
}

/// Run the game loop until the game reaches a terminal outcome, a
/// Shutdown arrives, or the command channel disconnects. Returns the
/// last snapshot produced.
pub fn run_game_loop(
    engine: &mut GameEngine,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
) -> GameSnapshot {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return engine.tick(),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return engine.tick(),
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();

        // 3. Surface this tick's sounds
        for event in &snapshot.audio_events {
            match event {
                AudioEvent::Shot { faction } => {
                    log::info!("{SHOOT_SOUND}: {faction:?} fired");
                }
                AudioEvent::Explosion { center } => {
                    log::info!("{BANG_SOUND}: explosion at {center}");
                }
            }
        }

        if snapshot.outcome.is_terminal() {
            return snapshot;
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Build an engine and run the loop on the current thread.
pub fn play(
    placements: &[Placement],
    seed: u64,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
) -> Result<GameSnapshot, tankfield_core::level::LevelError> {
    let config = SimConfig {
        seed,
        ..Default::default()
    };
    let mut engine = GameEngine::new(config, placements)?;
    Ok(run_game_loop(&mut engine, cmd_rx))
}
