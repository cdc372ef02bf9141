//! Enemy firing gate.

use starship_core::angles;
use starship_core::config::EnemyTuning;
use starship_core::types::Vector2;

/// Whether an enemy wants to start charging and whether it wants to release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FiringGate {
    pub start_charging: bool,
    pub shoot: bool,
}

/// Evaluate the gate for an enemy at `position` facing `angle`.
///
/// Charging starts when roughly facing the player inside the engage radius,
/// or at point-blank range regardless of facing. Release needs a tighter aim,
/// or the player inside the too-close radius.
pub fn evaluate(
    position: Vector2,
    angle: f64,
    player_position: Vector2,
    tuning: &EnemyTuning,
) -> FiringGate {
    let distance = position.distance_to(&player_position);
    let aim_error = angles::diff(angle, position.angle_to(&player_position)).abs();
    let in_range = distance < tuning.engage_radius;

    FiringGate {
        start_charging: (in_range && aim_error < tuning.charge_aim_tolerance)
            || distance < tuning.point_blank_radius,
        shoot: (in_range && aim_error < tuning.release_aim_tolerance)
            || distance < tuning.too_close_radius,
    }
}

/// Start a charge: nothing charging, on a charge-check tick, and the gate allows it.
pub fn should_begin_charge(
    gate: FiringGate,
    charging: bool,
    tick_counter: u32,
    tuning: &EnemyTuning,
) -> bool {
    !charging && tick_counter % tuning.charge_check_interval == 0 && gate.start_charging
}

/// Release a charge: something charging, the gate allows it, on a release-check tick.
pub fn should_release(
    gate: FiringGate,
    charging: bool,
    tick_counter: u32,
    tuning: &EnemyTuning,
) -> bool {
    charging && gate.shoot && tick_counter % tuning.release_check_interval == 0
}
