//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use starship_core::angles;
use starship_core::components::*;
use starship_core::constants::SPRITE_ROTATION_OFFSET;
use starship_core::enums::*;
use starship_core::state::*;
use starship_core::types::{Camera, SimTime, Vector2};
use starship_core::world::WorldState;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    state: &WorldState,
    time: &SimTime,
    camera: &Camera,
    reticle: Vector2,
) -> GameStateSnapshot {
    let player = world
        .query::<(&Player, &Ship)>()
        .iter()
        .next()
        .map(|(_, (_, ship))| build_ship(ship, DrawLayer::Ship))
        .unwrap_or_default();

    GameStateSnapshot {
        time: *time,
        world: WorldView {
            world_size: state.world_size(),
            screen_size: state.screen_size(),
            aim_angle: state.aim_angle(),
            engaged_count: state.engaged_count(),
            engaged_count_max: state.engaged_count_max(),
        },
        camera: *camera,
        player,
        enemies: build_enemies(world),
        plasmas: build_plasmas(world),
        reticle,
    }
}

fn build_ship(ship: &Ship, layer: DrawLayer) -> ShipView {
    ShipView {
        position: ship.position,
        draw_position: ship.draw_position,
        angle: ship.angle,
        sprite_rotation: angles::normalize(ship.angle - SPRITE_ROTATION_OFFSET),
        size: ship.size,
        layer,
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    world
        .query::<(&Ship, &EnemyBrain)>()
        .iter()
        .map(|(_, (ship, brain))| EnemyView {
            ship: build_ship(ship, DrawLayer::EnemyShip),
            target_angle: brain.target_angle,
            engaged: brain.engaged,
            smartness: brain.smartness,
        })
        .collect()
}

/// Player projectiles first, then each enemy's, charging before fired.
fn build_plasmas(world: &World) -> Vec<PlasmaView> {
    let mut plasmas = Vec::new();
    for (_, (_, arsenal)) in world.query::<(&Player, &Arsenal)>().iter() {
        push_arsenal(&mut plasmas, arsenal, Allegiance::Player);
    }
    for (_, (_, arsenal)) in world.query::<(&EnemyBrain, &Arsenal)>().iter() {
        push_arsenal(&mut plasmas, arsenal, Allegiance::Enemy);
    }
    plasmas
}

fn push_arsenal(out: &mut Vec<PlasmaView>, arsenal: &Arsenal, owner: Allegiance) {
    let balls = arsenal.charging.iter().chain(arsenal.fired.iter());
    out.extend(balls.map(|ball| PlasmaView {
        owner,
        stage: ball.stage,
        draw_position: ball.draw_position,
        radius: ball.radius,
        rotation: ball.spin,
        layer: DrawLayer::Plasma,
    }));
}
