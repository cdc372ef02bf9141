//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is built (and its config validated) before the thread starts,
//! then moved in. Inputs arrive via `mpsc` channel; the most recent one is
//! applied to every tick until a newer one arrives. Snapshots are stored in
//! shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use starship_core::constants::TICK_RATE;
use starship_core::input::InputSnapshot;
use starship_core::state::GameStateSnapshot;
use starship_core::types::SimTime;
use starship_sim::SimulationEngine;

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle, which yields the final
/// simulation time once the loop stops.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<SimTime>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("starship-game-loop".into())
        .spawn(move || run_game_loop(engine, cmd_rx, &latest_snapshot))?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) -> SimTime {
    let center = engine.state().half_screen_size();
    let mut input = InputSnapshot::idle(center);
    let mut next_tick_time = Instant::now();

    tracing::info!(seed = engine.config().seed, "game loop started");

    loop {
        // 1. Drain all pending commands; the latest input wins
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Input(latest)) => input = latest,
                Ok(GameLoopCommand::Shutdown) => return finish(&engine),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return finish(&engine),
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick(&input);

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            tracing::warn!(
                behind_ms = (now - next_tick_time).as_millis() as u64,
                "game loop fell behind"
            );
            next_tick_time = now;
        }
    }
}

fn finish(engine: &SimulationEngine) -> SimTime {
    let time = engine.time();
    tracing::info!(ticks = time.tick, elapsed_secs = time.elapsed_secs, "game loop stopped");
    time
}
