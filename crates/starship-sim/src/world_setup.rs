//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player ship and the enemy population with their component
//! bundles.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starship_ai::pilot::{self, RetargetContext};
use starship_core::components::*;
use starship_core::config::SimConfig;
use starship_core::constants::{ENEMY_PARKED_DRAW_POS, ENEMY_SPAWN_ANGLE};
use starship_core::enums::Smartness;
use starship_core::types::Vector2;
use starship_core::world::WorldState;

/// Populate a fresh world: the player, then `enemy_count` enemies, all at the
/// world center. Returns the player entity.
pub fn setup_world(
    world: &mut World,
    state: &WorldState,
    config: &SimConfig,
    rng: &mut ChaCha8Rng,
) -> Entity {
    let player = spawn_player(world, state, config);
    let center = state.world_center();
    for _ in 0..config.enemy_count {
        spawn_enemy(world, config, center, center, rng);
    }
    player
}

/// Spawn the player at the world center, facing the current aim, drawn at
/// the middle of the viewport.
pub fn spawn_player(world: &mut World, state: &WorldState, config: &SimConfig) -> Entity {
    world.spawn((
        Player,
        Ship {
            position: state.world_center(),
            draw_position: state.half_screen_size(),
            angle: state.aim_angle(),
            speed: config.player.speed,
            size: config.player.ship_size,
        },
        Arsenal::default(),
    ))
}

/// Spawn one enemy at `position` and make its first targeting decision.
///
/// Nobody is engaged yet at spawn, so the decision always sees a free slot.
/// The enemy is parked off screen until its first update computes a draw
/// position.
pub fn spawn_enemy(
    world: &mut World,
    config: &SimConfig,
    position: Vector2,
    player_position: Vector2,
    rng: &mut ChaCha8Rng,
) -> Entity {
    let smartness = Smartness::from_level(rng.gen_range(0..=2));
    let ship = Ship {
        position,
        draw_position: Vector2::new(ENEMY_PARKED_DRAW_POS, ENEMY_PARKED_DRAW_POS),
        angle: ENEMY_SPAWN_ANGLE,
        speed: config.enemy.speed,
        size: config.player.ship_size,
    };

    let ctx = RetargetContext {
        position,
        player_position,
        target_angle: ENEMY_SPAWN_ANGLE,
        engaged: false,
        slot_free: true,
    };
    let initial = pilot::retarget(&ctx, &config.enemy, rng);

    world.spawn((
        ship,
        Arsenal::default(),
        EnemyBrain {
            target_angle: initial.target_angle,
            engaged: initial.engaged,
            smartness,
            tick_counter: 0,
        },
    ))
}
