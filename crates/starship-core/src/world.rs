//! World-level state shared by every ship: dimensions, player aim, and the
//! engagement-slot counter.

use serde::{Deserialize, Serialize};

use crate::angles;
use crate::types::Vector2;

/// Dimensions, aim and engagement bookkeeping for one running simulation.
///
/// Owns no ships. The engine writes `engaged_count` once per tick after all
/// enemies have updated, so enemies always see the previous tick's count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    screen_size: Vector2,
    world_size: Vector2,
    aim_angle: f64,
    engaged_count: u32,
    engaged_count_max: u32,
}

impl WorldState {
    pub fn new(screen_size: Vector2, world_size: Vector2, engaged_count_max: u32) -> Self {
        Self {
            screen_size,
            world_size,
            aim_angle: 0.0,
            engaged_count: 0,
            engaged_count_max,
        }
    }

    /// Point the player's aim at `pointer` (screen coordinates).
    ///
    /// A pointer resting exactly on the viewport center leaves the aim as is.
    /// The angle is measured from where the player is drawn and rounded to a
    /// whole degree.
    pub fn update_aim(&mut self, pointer: Vector2, player_draw_position: Vector2) {
        if pointer == self.half_screen_size() {
            return;
        }
        let raw = angles::heading_between(player_draw_position, pointer);
        self.aim_angle = angles::normalize(raw.round());
    }

    pub fn aim_angle(&self) -> f64 {
        self.aim_angle
    }

    pub fn screen_size(&self) -> Vector2 {
        self.screen_size
    }

    pub fn half_screen_size(&self) -> Vector2 {
        self.screen_size.half_floor()
    }

    pub fn world_size(&self) -> Vector2 {
        self.world_size
    }

    pub fn world_center(&self) -> Vector2 {
        self.world_size.half()
    }

    pub fn engaged_count(&self) -> u32 {
        self.engaged_count
    }

    pub fn engaged_count_max(&self) -> u32 {
        self.engaged_count_max
    }

    /// Whether a new engagement may be committed under the current count.
    pub fn has_free_slot(&self) -> bool {
        self.engaged_count < self.engaged_count_max
    }

    pub fn set_engaged_count(&mut self, count: u32) {
        self.engaged_count = count;
    }
}
