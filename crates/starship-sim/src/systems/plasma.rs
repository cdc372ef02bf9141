//! Plasma ball lifecycle: charge, launch, flight, expiry.
//!
//! A ball is created in `Charging`, riding on its ship's mount point and
//! growing. It moves to the ship's fired list exactly once, either when the
//! owner releases it or the first tick it reaches full size. Fired balls fly
//! straight along the heading captured at launch and are purged once they
//! have travelled past the budget.

use starship_core::angles;
use starship_core::components::{Arsenal, PlasmaBall, Ship};
use starship_core::config::PlasmaTuning;
use starship_core::enums::PlasmaStage;
use starship_core::types::{Camera, Vector2};

/// What happened to an arsenal during one update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArsenalReport {
    /// The charging ball reached full size and launched itself.
    pub auto_fired: bool,
    /// Fired balls removed for exceeding the travel budget.
    pub expired: usize,
}

/// Create a charging ball on the ship's forward mount.
pub fn spawn(ship: &Ship, tuning: &PlasmaTuning) -> PlasmaBall {
    let mount = Vector2::new((ship.size.x * tuning.mount_factor).round(), 0.0);
    let mut ball = PlasmaBall {
        stage: PlasmaStage::Charging,
        mount_angle: Vector2::ZERO.angle_to(&mount) - 90.0,
        mount_distance: mount.length(),
        heading: 0.0,
        speed: 0.0,
        position: ship.position,
        draw_position: ship.position,
        radius: tuning.initial_radius,
        spin: 0.0,
        distance_travelled: 0.0,
    };
    ball.position = mount_position(&ball, ship);
    ball
}

/// Start charging if the ship is not already charging. Returns whether a ball was created.
pub fn begin_charge(arsenal: &mut Arsenal, ship: &Ship, tuning: &PlasmaTuning) -> bool {
    if arsenal.charging.is_some() {
        return false;
    }
    arsenal.charging = Some(spawn(ship, tuning));
    true
}

/// Launch the charging ball, if any. Returns whether a ball was launched.
pub fn release(arsenal: &mut Arsenal, ship: &Ship, tuning: &PlasmaTuning) -> bool {
    match arsenal.charging.take() {
        Some(mut ball) => {
            launch(&mut ball, ship, tuning);
            arsenal.fired.push(ball);
            true
        }
        None => false,
    }
}

/// Advance every ball the ship owns by one tick, then purge expired ones.
///
/// The charging ball is updated first; if that fills it, it launches and is
/// then advanced once more with the rest of the fired list.
pub fn update_arsenal(
    arsenal: &mut Arsenal,
    ship: &Ship,
    camera: &Camera,
    tuning: &PlasmaTuning,
) -> ArsenalReport {
    let mut report = ArsenalReport::default();

    let full = match arsenal.charging.as_mut() {
        Some(ball) => {
            update_charging(ball, ship, tuning);
            ball.draw_position = camera.to_screen(ball.position);
            ball.radius >= tuning.max_radius
        }
        None => false,
    };
    if full {
        report.auto_fired = release(arsenal, ship, tuning);
    }

    for ball in &mut arsenal.fired {
        update_fired(ball, tuning);
        ball.draw_position = camera.to_screen(ball.position);
    }

    let before = arsenal.fired.len();
    arsenal
        .fired
        .retain(|ball| ball.distance_travelled <= tuning.travel_budget);
    report.expired = before - arsenal.fired.len();

    report
}

fn launch(ball: &mut PlasmaBall, ship: &Ship, tuning: &PlasmaTuning) {
    ball.stage = PlasmaStage::Fired;
    ball.heading = ship.angle;
    ball.speed = ship.speed * tuning.speed_factor;
}

fn mount_position(ball: &PlasmaBall, ship: &Ship) -> Vector2 {
    let heading = angles::normalize(ship.angle + ball.mount_angle);
    ship.position + angles::offset(heading, ball.mount_distance)
}

fn update_charging(ball: &mut PlasmaBall, ship: &Ship, tuning: &PlasmaTuning) {
    ball.position = mount_position(ball, ship);
    if ball.radius < tuning.max_radius {
        ball.radius = (ball.radius + tuning.growth).min(tuning.max_radius);
    }
    ball.spin = angles::normalize(ball.spin + tuning.spin_step);
}

fn update_fired(ball: &mut PlasmaBall, tuning: &PlasmaTuning) {
    ball.spin = angles::normalize(ball.spin + tuning.spin_step);
    ball.position += angles::offset(ball.heading, ball.speed);
    ball.distance_travelled += ball.speed;
}
