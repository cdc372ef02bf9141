//! Player ship system: turn toward aim, move, pan the camera, handle the trigger.

use hecs::{Entity, World};

use starship_core::angles;
use starship_core::components::{Arsenal, Ship};
use starship_core::config::{PilotTuning, PlasmaTuning};
use starship_core::input::InputSnapshot;
use starship_core::types::Camera;
use starship_core::world::WorldState;

use crate::systems::{movement, plasma};

/// Run one tick for the player and return the camera for everything drawn after it.
///
/// Holding the trigger with nothing charging starts a charge; letting go
/// while charging fires. A ball that fills up before release fires on its own.
pub fn run(
    world: &mut World,
    player: Entity,
    state: &WorldState,
    input: &InputSnapshot,
    pilot: &PilotTuning,
    plasma_tuning: &PlasmaTuning,
) -> Camera {
    let Ok((ship, arsenal)) = world.query_one_mut::<(&mut Ship, &mut Arsenal)>(player) else {
        return Camera::default();
    };

    ship.angle = angles::turn_toward(
        ship.angle,
        state.aim_angle(),
        pilot.turn_deadband,
        pilot.turn_step,
    );
    movement::advance(ship, state.world_size());
    movement::update_player_camera(ship, state.world_size(), state.screen_size());

    if input.fire_held {
        plasma::begin_charge(arsenal, ship, plasma_tuning);
    } else if plasma::release(arsenal, ship, plasma_tuning) {
        tracing::trace!(heading = ship.angle, "player plasma released");
    }

    let camera = Camera::new(ship.position, ship.draw_position);
    let report = plasma::update_arsenal(arsenal, ship, &camera, plasma_tuning);
    if report.auto_fired {
        tracing::trace!(heading = ship.angle, "player plasma fired at full charge");
    }
    if report.expired > 0 {
        tracing::trace!(expired = report.expired, "player plasma expired");
    }

    camera
}
