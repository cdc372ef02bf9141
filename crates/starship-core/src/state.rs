//! Game state snapshot: everything the presentation layer reads each frame.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Camera, SimTime, Vector2};

/// Complete visible state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub world: WorldView,
    pub camera: Camera,
    pub player: ShipView,
    pub enemies: Vec<EnemyView>,
    pub plasmas: Vec<PlasmaView>,
    /// Where the cursor reticle is drawn (the pointer position).
    pub reticle: Vector2,
}

/// World dimensions and engagement status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldView {
    pub world_size: Vector2,
    pub screen_size: Vector2,
    /// Player aim (degrees).
    pub aim_angle: f64,
    pub engaged_count: u32,
    pub engaged_count_max: u32,
}

/// A ship as the renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipView {
    pub position: Vector2,
    pub draw_position: Vector2,
    /// Heading (degrees, 0 = up, clockwise).
    pub angle: f64,
    /// Rotation to apply to the ship sprite (degrees).
    pub sprite_rotation: f64,
    pub size: Vector2,
    pub layer: DrawLayer,
}

impl Default for ShipView {
    fn default() -> Self {
        Self {
            position: Vector2::ZERO,
            draw_position: Vector2::ZERO,
            angle: 0.0,
            sprite_rotation: 0.0,
            size: Vector2::ZERO,
            layer: DrawLayer::Ship,
        }
    }
}

/// An enemy ship plus its decision state, for display and debugging overlays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub ship: ShipView,
    pub target_angle: f64,
    pub engaged: bool,
    pub smartness: Smartness,
}

/// A plasma ball, charging or in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlasmaView {
    pub owner: Allegiance,
    pub stage: PlasmaStage,
    pub draw_position: Vector2,
    /// Visual radius.
    pub radius: f64,
    /// Cosmetic spin (degrees).
    pub rotation: f64,
    pub layer: DrawLayer,
}
