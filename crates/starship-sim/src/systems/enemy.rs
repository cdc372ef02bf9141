//! Enemy system: applies the AI decisions from starship-ai to each enemy ship.
//!
//! Enemies read the player through the camera produced by the player system
//! this tick, and the engagement count recorded at the end of the previous
//! tick.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use starship_ai::gunnery;
use starship_ai::pilot::{self, RetargetContext};
use starship_core::angles;
use starship_core::components::{Arsenal, EnemyBrain, Ship};
use starship_core::config::{EnemyTuning, PlasmaTuning};
use starship_core::types::Camera;
use starship_core::world::WorldState;

use crate::systems::{movement, plasma};

/// Run one tick for every enemy.
pub fn run(
    world: &mut World,
    state: &WorldState,
    camera: &Camera,
    tuning: &EnemyTuning,
    plasma_tuning: &PlasmaTuning,
    rng: &mut ChaCha8Rng,
) {
    for (entity, (ship, arsenal, brain)) in
        world.query_mut::<(&mut Ship, &mut Arsenal, &mut EnemyBrain)>()
    {
        let was_engaged = brain.engaged;
        update_enemy(ship, arsenal, brain, state, camera, tuning, plasma_tuning, rng);
        if brain.engaged != was_engaged {
            tracing::debug!(
                ?entity,
                engaged = brain.engaged,
                target_angle = brain.target_angle,
                "enemy engagement changed"
            );
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn update_enemy(
    ship: &mut Ship,
    arsenal: &mut Arsenal,
    brain: &mut EnemyBrain,
    state: &WorldState,
    camera: &Camera,
    tuning: &EnemyTuning,
    plasma_tuning: &PlasmaTuning,
    rng: &mut ChaCha8Rng,
) {
    let player_position = camera.anchor_world;

    // 1. Periodic re-target
    if brain.tick_counter % tuning.retarget_interval == 0 {
        let ctx = RetargetContext {
            position: ship.position,
            player_position,
            target_angle: brain.target_angle,
            engaged: brain.engaged,
            slot_free: state.has_free_slot(),
        };
        let update = pilot::retarget(&ctx, tuning, rng);
        brain.target_angle = update.target_angle;
        brain.engaged = update.engaged;
    }

    // 2. Flee overrides pursuit
    let flee = pilot::flee_heading(ship.position, player_position, tuning.too_close_radius);
    if let Some(heading) = flee {
        brain.target_angle = heading;
    }

    // 3-4. Turn and move; bounce off the seam toward the center
    ship.angle = angles::turn_toward(
        ship.angle,
        brain.target_angle,
        tuning.turn_deadband,
        tuning.turn_step,
    );
    if movement::advance(ship, state.world_size()).any() {
        let center = state.world_center();
        brain.target_angle =
            pilot::edge_escape_heading(ship.position, center, tuning.edge_jitter, rng);
    }

    // 5-7. Charge and release on their own cadences
    let gate = gunnery::evaluate(ship.position, ship.angle, player_position, tuning);
    let charging = arsenal.charging.is_some();
    if gunnery::should_begin_charge(gate, charging, brain.tick_counter, tuning) {
        plasma::begin_charge(arsenal, ship, plasma_tuning);
    }
    let charging = arsenal.charging.is_some();
    if gunnery::should_release(gate, charging, brain.tick_counter, tuning) {
        plasma::release(arsenal, ship, plasma_tuning);
        tracing::trace!(heading = ship.angle, "enemy plasma released");
    }

    // 8. Projectiles
    let report = plasma::update_arsenal(arsenal, ship, camera, plasma_tuning);
    if report.auto_fired {
        tracing::trace!(heading = ship.angle, "enemy plasma fired at full charge");
    }
    if report.expired > 0 {
        tracing::trace!(expired = report.expired, "enemy plasma expired");
    }

    // 9-10. Draw position and cadence counter
    ship.draw_position = camera.to_screen(ship.position);
    brain.tick_counter = brain.tick_counter.wrapping_add(1);
}
