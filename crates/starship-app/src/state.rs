//! Application state shared between the session handlers and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use starship_core::input::InputSnapshot;
use starship_core::state::GameStateSnapshot;
use starship_core::types::SimTime;

/// Commands sent from the session layer to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Input to apply from the next tick on.
    Input(InputSnapshot),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// Everything sits behind a `Mutex` so the state can be shared by reference
/// across threads:
/// - `mpsc::Sender` is Send but not Sync
/// - the loop handle and sender only exist between start and stop
/// - the latest snapshot is shared with the game loop thread through `Arc`
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` before `start_simulation` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous `get_snapshot` queries.
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Join handle of the game loop thread; yields the final sim time.
    pub loop_thread: Mutex<Option<JoinHandle<SimTime>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_thread: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a game loop thread is currently attached.
    pub fn is_running(&self) -> bool {
        self.loop_thread
            .lock()
            .map(|handle| handle.is_some())
            .unwrap_or(false)
    }
}
