//! Per-tick input from the presentation layer.
//!
//! The simulation never polls devices; the caller samples them once per
//! frame and hands the result to `SimulationEngine::tick`.

use serde::{Deserialize, Serialize};

use crate::types::Vector2;

/// Pointer and trigger state sampled for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    /// Pointer position in screen coordinates.
    pub pointer: Vector2,
    /// Whether the fire trigger is held down.
    pub fire_held: bool,
}

impl InputSnapshot {
    pub fn new(pointer: Vector2, fire_held: bool) -> Self {
        Self { pointer, fire_held }
    }

    /// Input with the pointer resting at `center` and the trigger released.
    /// Leaves the player's aim unchanged.
    pub fn idle(center: Vector2) -> Self {
        Self {
            pointer: center,
            fire_held: false,
        }
    }
}
