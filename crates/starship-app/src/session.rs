//! Session handlers: start, drive, poll and stop the simulation.
//!
//! These bridge callers to the game loop thread via channels. Errors are
//! plain strings meant for display.

use starship_core::input::InputSnapshot;
use starship_core::state::GameStateSnapshot;
use starship_core::types::SimTime;
use starship_sim::SimulationEngine;

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation on its own thread. Fails if one is already running.
pub fn start_simulation(state: &AppState, engine: SimulationEngine) -> Result<(), String> {
    let mut thread = state.loop_thread.lock().map_err(|e| e.to_string())?;

    if thread.is_some() {
        return Err("Simulation already running".into());
    }

    let (cmd_tx, handle) = game_loop::spawn_game_loop(engine, state.latest_snapshot.clone())
        .map_err(|e| format!("Failed to spawn game loop: {}", e))?;

    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
    *tx_lock = Some(cmd_tx);
    *thread = Some(handle);

    Ok(())
}

/// Send fresh input to the simulation.
pub fn send_input(input: InputSnapshot, state: &AppState) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::Input(input))
            .map_err(|e| format!("Failed to send input: {}", e)),
        None => Err("Simulation not started".into()),
    }
}

/// Get the latest snapshot synchronously.
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Stop the game loop and wait for it. Returns the final simulation time.
pub fn stop_simulation(state: &AppState) -> Result<SimTime, String> {
    let handle = state
        .loop_thread
        .lock()
        .map_err(|e| e.to_string())?
        .take()
        .ok_or_else(|| String::from("Simulation not started"))?;

    if let Some(tx) = state.command_tx.lock().map_err(|e| e.to_string())?.take() {
        // A closed channel means the loop already exited; joining still works.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }

    handle
        .join()
        .map_err(|_| String::from("Game loop thread panicked"))
}
