//! Startup configuration.
//!
//! [`SimConfig`] mirrors the tuning constants in [`crate::constants`]. Missing
//! keys in a TOML file fall back to those defaults, so a minimal file can
//! override just the values you care about:
//!
//! ```toml
//! seed = 7
//! enemy_count = 4
//!
//! [enemy]
//! engage_radius = 800.0
//! ```
//!
//! Every loaded config goes through [`SimConfig::validate`]; a config that
//! would divide by zero or place the viewport outside the world is rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ConfigError, ConfigResult};
use crate::types::Vector2;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub world_size: Vector2,
    pub screen_size: Vector2,
    pub enemy_count: usize,
    /// Engagement slots available to enemies deciding to engage.
    pub engaged_count_max: u32,
    pub player: PilotTuning,
    pub enemy: EnemyTuning,
    pub plasma: PlasmaTuning,
}

/// Movement and turning for the player ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PilotTuning {
    pub speed: f64,
    pub turn_step: f64,
    pub turn_deadband: f64,
    pub ship_size: Vector2,
}

/// Movement, turning and decision parameters for enemy ships.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub speed: f64,
    pub turn_step: f64,
    pub turn_deadband: f64,
    pub retarget_interval: u32,
    pub charge_check_interval: u32,
    pub release_check_interval: u32,
    pub engage_radius: f64,
    pub too_close_radius: f64,
    pub point_blank_radius: f64,
    pub charge_aim_tolerance: f64,
    pub release_aim_tolerance: f64,
    pub roam_distance: i32,
    pub edge_jitter: i32,
}

/// Plasma ball growth, flight and expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlasmaTuning {
    pub initial_radius: f64,
    pub max_radius: f64,
    pub growth: f64,
    pub spin_step: f64,
    pub speed_factor: f64,
    pub travel_budget: f64,
    /// Mount point ahead of the ship as a fraction of ship length.
    pub mount_factor: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            world_size: Vector2::new(WORLD_WIDTH, WORLD_HEIGHT),
            screen_size: Vector2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            enemy_count: ENEMY_COUNT,
            engaged_count_max: ENGAGED_COUNT_MAX,
            player: PilotTuning::default(),
            enemy: EnemyTuning::default(),
            plasma: PlasmaTuning::default(),
        }
    }
}

impl Default for PilotTuning {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            turn_step: PLAYER_TURN_STEP,
            turn_deadband: PLAYER_TURN_DEADBAND,
            ship_size: Vector2::new(SHIP_LENGTH, SHIP_BEAM),
        }
    }
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            speed: ENEMY_SPEED,
            turn_step: ENEMY_TURN_STEP,
            turn_deadband: ENEMY_TURN_DEADBAND,
            retarget_interval: ENEMY_RETARGET_INTERVAL,
            charge_check_interval: ENEMY_CHARGE_CHECK_INTERVAL,
            release_check_interval: ENEMY_RELEASE_CHECK_INTERVAL,
            engage_radius: ENGAGE_RADIUS,
            too_close_radius: TOO_CLOSE_RADIUS,
            point_blank_radius: POINT_BLANK_RADIUS,
            charge_aim_tolerance: CHARGE_AIM_TOLERANCE,
            release_aim_tolerance: RELEASE_AIM_TOLERANCE,
            roam_distance: ROAM_DISTANCE,
            edge_jitter: EDGE_JITTER,
        }
    }
}

impl Default for PlasmaTuning {
    fn default() -> Self {
        Self {
            initial_radius: PLASMA_INITIAL_RADIUS,
            max_radius: PLASMA_MAX_RADIUS,
            growth: PLASMA_GROWTH,
            spin_step: PLASMA_SPIN_STEP,
            speed_factor: PLASMA_SPEED_FACTOR,
            travel_budget: PLASMA_TRAVEL_BUDGET,
            mount_factor: PLASMA_MOUNT_FACTOR,
        }
    }
}

impl SimConfig {
    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: SimConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), seed = config.seed, "loaded sim config");
        Ok(config)
    }

    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> ConfigResult<()> {
        if !positive_axes(self.world_size) {
            return Err(invalid("world_size", "both axes must be finite and positive"));
        }
        if !positive_axes(self.screen_size) {
            return Err(invalid("screen_size", "both axes must be finite and positive"));
        }
        if self.screen_size.x > self.world_size.x || self.screen_size.y > self.world_size.y {
            return Err(invalid("screen_size", "must fit inside world_size"));
        }
        self.player.validate()?;
        self.enemy.validate()?;
        self.plasma.validate()
    }
}

impl PilotTuning {
    fn validate(&self) -> ConfigResult<()> {
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(invalid("player.speed", "must be finite and not negative"));
        }
        check_turning("player.turn_step", self.turn_step, self.turn_deadband)
    }
}

impl EnemyTuning {
    fn validate(&self) -> ConfigResult<()> {
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(invalid("enemy.speed", "must be finite and not negative"));
        }
        check_turning("enemy.turn_step", self.turn_step, self.turn_deadband)?;
        if self.retarget_interval == 0 {
            return Err(invalid("enemy.retarget_interval", "must be at least 1"));
        }
        if self.charge_check_interval == 0 {
            return Err(invalid("enemy.charge_check_interval", "must be at least 1"));
        }
        if self.release_check_interval == 0 {
            return Err(invalid("enemy.release_check_interval", "must be at least 1"));
        }
        if self.too_close_radius < 0.0 || self.engage_radius < 0.0 || self.point_blank_radius < 0.0
        {
            return Err(invalid("enemy", "radii must not be negative"));
        }
        if self.roam_distance < 0 {
            return Err(invalid("enemy.roam_distance", "must not be negative"));
        }
        if self.edge_jitter < 0 {
            return Err(invalid("enemy.edge_jitter", "must not be negative"));
        }
        Ok(())
    }
}

impl PlasmaTuning {
    fn validate(&self) -> ConfigResult<()> {
        if !self.growth.is_finite() || self.growth <= 0.0 {
            return Err(invalid("plasma.growth", "must be finite and positive"));
        }
        if self.initial_radius <= 0.0 || self.max_radius < self.initial_radius {
            return Err(invalid(
                "plasma.max_radius",
                "must be at least initial_radius, which must be positive",
            ));
        }
        if !self.travel_budget.is_finite() || self.travel_budget < 0.0 {
            return Err(invalid("plasma.travel_budget", "must not be negative"));
        }
        Ok(())
    }
}

fn check_turning(field: &'static str, step: f64, deadband: f64) -> ConfigResult<()> {
    if step <= 0.0 {
        return Err(invalid(field, "must be positive"));
    }
    if !step.is_finite() || !deadband.is_finite() || deadband < 0.0 {
        return Err(invalid(field, "step and deadband must be finite, deadband not negative"));
    }
    // The difference is rounded before the deadband test, so a step of up to
    // `2 * deadband + 1` always lands inside the band.
    if step > deadband * 2.0 + 1.0 {
        return Err(invalid(field, "must not exceed twice the turn deadband plus one"));
    }
    Ok(())
}

fn positive_axes(size: Vector2) -> bool {
    size.is_finite() && size.x > 0.0 && size.y > 0.0
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
