//! Kinematic integration with seam clamping, and the player's bounded camera.
//!
//! Ships move along their heading by `speed` each tick. A move that would
//! carry a coordinate across the world seam is cancelled on that axis only;
//! ships never teleport to the opposite edge.

use starship_core::angles;
use starship_core::components::Ship;
use starship_core::types::Vector2;

/// Which axes had their movement cancelled this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeamRevert {
    pub x: bool,
    pub y: bool,
}

impl SeamRevert {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Move a ship one tick along its heading, reverting any axis that would wrap.
pub fn advance(ship: &mut Ship, world_size: Vector2) -> SeamRevert {
    let previous = ship.position;
    let moved = previous + angles::offset(ship.angle, ship.speed);
    let wrapped = moved % world_size;

    let revert = SeamRevert {
        x: wrapped.x != moved.x,
        y: wrapped.y != moved.y,
    };

    ship.position = Vector2::new(
        if revert.x { previous.x } else { moved.x },
        if revert.y { previous.y } else { moved.y },
    );
    revert
}

/// Keep the player centered on screen, except near the world edges where the
/// camera stops panning and the ship drifts toward the edge of the viewport.
pub fn update_player_camera(ship: &mut Ship, world_size: Vector2, screen_size: Vector2) {
    let half = screen_size.half_floor();
    let to_end = world_size - ship.position;
    let mut draw = half;

    if ship.position.x < half.x {
        draw.x = ship.position.x;
    }
    if ship.position.y < half.y {
        draw.y = ship.position.y;
    }
    if to_end.x < half.x {
        draw.x = screen_size.x - to_end.x;
    }
    if to_end.y < half.y {
        draw.y = screen_size.y - to_end.y;
    }

    ship.draw_position = draw;
}
