//! Heading math in degrees.
//!
//! Heading 0 points up the screen (negative y) and grows clockwise, so a
//! heading of 90 points along +x.

use crate::types::Vector2;

/// Degrees in a full turn.
pub const FULL_TURN: f64 = 360.0;

/// Wrap an angle into `[0, 360)`.
pub fn normalize(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_TURN);
    // rem_euclid of a tiny negative value rounds up to exactly 360.0
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

/// Signed shortest rotation from `from` to `to`, in `(-180, 180]`.
pub fn diff(from: f64, to: f64) -> f64 {
    let d = normalize(to - from);
    if d > FULL_TURN / 2.0 {
        d - FULL_TURN
    } else {
        d
    }
}

/// Displacement of `distance` along `heading`.
pub fn offset(heading: f64, distance: f64) -> Vector2 {
    let rad = heading.to_radians();
    Vector2::new(rad.sin() * distance, -rad.cos() * distance)
}

/// Heading from `from` toward `to`. Coincident points yield 0.
pub fn heading_between(from: Vector2, to: Vector2) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }
    normalize(dx.atan2(-dy).to_degrees())
}

/// One tick of deadband-stepped turning toward `target`.
///
/// The rounded shortest difference is compared against `deadband`; outside
/// it the heading moves by exactly `step` toward the target.
pub fn turn_toward(current: f64, target: f64, deadband: f64, step: f64) -> f64 {
    let dif = diff(current, target).round();
    if dif == 0.0 || dif.abs() <= deadband {
        return current;
    }
    normalize(current + step * dif.signum())
}
