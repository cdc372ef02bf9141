//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Vector2;

/// Kinematic body shared by the player and enemies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ship {
    /// Authoritative world position. Stays inside `[0, world_size)`.
    pub position: Vector2,
    /// Camera-relative position for rendering.
    pub draw_position: Vector2,
    /// Heading in degrees, `[0, 360)`.
    pub angle: f64,
    /// Distance moved per tick.
    pub speed: f64,
    /// Sprite footprint (length, beam).
    pub size: Vector2,
}

/// A ship's projectiles: at most one charging, any number in flight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Arsenal {
    pub charging: Option<PlasmaBall>,
    pub fired: Vec<PlasmaBall>,
}

/// Charge-up plasma projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlasmaBall {
    pub stage: PlasmaStage,
    /// Mount heading relative to the ship's heading (degrees).
    pub mount_angle: f64,
    /// Mount distance from the ship's center.
    pub mount_distance: f64,
    /// Heading captured at launch.
    pub heading: f64,
    /// Distance per tick once fired.
    pub speed: f64,
    pub position: Vector2,
    pub draw_position: Vector2,
    pub radius: f64,
    /// Cosmetic rotation (degrees), rendering only.
    pub spin: f64,
    pub distance_travelled: f64,
}

/// Marks the player-controlled ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Decision state for an autonomous enemy ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyBrain {
    /// Heading the ship is turning toward.
    pub target_angle: f64,
    /// Whether this enemy holds an engagement slot.
    pub engaged: bool,
    pub smartness: Smartness,
    /// Ticks since spawn; drives the periodic checks.
    pub tick_counter: u32,
}
