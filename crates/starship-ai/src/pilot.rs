//! Enemy steering decisions.
//!
//! Each function takes plain data about one enemy and the player and returns
//! the heading the enemy should turn toward. The caller applies the result.

use rand::Rng;

use starship_core::angles;
use starship_core::config::EnemyTuning;
use starship_core::types::Vector2;

/// Input to a re-target decision for a single enemy.
pub struct RetargetContext {
    pub position: Vector2,
    pub player_position: Vector2,
    pub target_angle: f64,
    pub engaged: bool,
    /// Whether the world had a free engagement slot as of the last recount.
    pub slot_free: bool,
}

/// Output from a re-target decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Retarget {
    pub target_angle: f64,
    pub engaged: bool,
}

/// Choose a new heading and engagement state.
///
/// Inside the engage radius the enemy heads for a random roam point around
/// the player, provided it already holds a slot or one is free; if neither,
/// it keeps its current heading and stays disengaged. Outside the radius it
/// disengages and wanders on a random heading.
///
/// The roam heading and distance are drawn every call, in that order, so the
/// RNG stream does not depend on which branch is taken.
pub fn retarget<R: Rng + ?Sized>(
    ctx: &RetargetContext,
    tuning: &EnemyTuning,
    rng: &mut R,
) -> Retarget {
    let roam_heading = rng.gen_range(0..360) as f64;
    let roam_distance = rng.gen_range(-tuning.roam_distance..=tuning.roam_distance) as f64;
    let destination = ctx.player_position + angles::offset(roam_heading, roam_distance);

    let distance = ctx.position.distance_to(&ctx.player_position);
    if distance < tuning.engage_radius {
        if ctx.slot_free || ctx.engaged {
            return Retarget {
                target_angle: ctx.position.angle_to(&destination),
                engaged: true,
            };
        }
        return Retarget {
            target_angle: ctx.target_angle,
            engaged: ctx.engaged,
        };
    }

    Retarget {
        target_angle: rng.gen_range(0..360) as f64,
        engaged: false,
    }
}

/// Heading directly away from the player when it is closer than `too_close_radius`.
pub fn flee_heading(
    position: Vector2,
    player_position: Vector2,
    too_close_radius: f64,
) -> Option<f64> {
    if position.distance_to(&player_position) < too_close_radius {
        Some(angles::normalize(position.angle_to(&player_position) + 180.0))
    } else {
        None
    }
}

/// Heading back toward the world center with random jitter of up to `±jitter` degrees.
///
/// Used after the ship's movement was stopped at the world seam.
pub fn edge_escape_heading<R: Rng + ?Sized>(
    position: Vector2,
    world_center: Vector2,
    jitter: i32,
    rng: &mut R,
) -> f64 {
    let offset = rng.gen_range(-jitter..=jitter) as f64;
    angles::normalize(position.angle_to(&world_center) + offset)
}
