//! Scripted pilot standing in for a mouse in headless runs.
//!
//! The pointer sweeps slowly around the viewport center so the ship flies a
//! wide circle, and the trigger is held in bursts long enough to reach full
//! charge now and then.

use starship_core::angles;
use starship_core::input::InputSnapshot;
use starship_core::types::Vector2;

/// Degrees the pointer advances around the center per tick.
const SWEEP_RATE: f64 = 0.5;

/// Pointer distance from the viewport center.
const SWEEP_RADIUS: f64 = 200.0;

/// Trigger cycle: held for `FIRE_HOLD_TICKS`, then released for the rest.
const FIRE_CYCLE_TICKS: u64 = 240;
const FIRE_HOLD_TICKS: u64 = 90;

#[derive(Debug, Clone)]
pub struct ScriptedPilot {
    center: Vector2,
    tick: u64,
}

impl ScriptedPilot {
    pub fn new(screen_size: Vector2) -> Self {
        Self {
            center: screen_size.half_floor(),
            tick: 0,
        }
    }

    /// Input for the next tick.
    pub fn next_input(&mut self) -> InputSnapshot {
        let heading = angles::normalize(self.tick as f64 * SWEEP_RATE);
        let pointer = self.center + angles::offset(heading, SWEEP_RADIUS);
        let fire_held = self.tick % FIRE_CYCLE_TICKS < FIRE_HOLD_TICKS;
        self.tick += 1;
        InputSnapshot::new(pointer, fire_held)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_circles_center() {
        let screen = Vector2::new(1280.0, 720.0);
        let mut pilot = ScriptedPilot::new(screen);
        for _ in 0..800 {
            let input = pilot.next_input();
            let radius = input.pointer.distance_to(&screen.half_floor());
            assert!((radius - SWEEP_RADIUS).abs() < 1e-6);
            // Never rests on the center, so the aim always follows.
            assert_ne!(input.pointer, screen.half_floor());
        }
    }

    #[test]
    fn test_fire_bursts() {
        let mut pilot = ScriptedPilot::new(Vector2::new(1280.0, 720.0));
        let held: Vec<bool> = (0..FIRE_CYCLE_TICKS)
            .map(|_| pilot.next_input().fire_held)
            .collect();
        assert_eq!(held.iter().filter(|h| **h).count() as u64, FIRE_HOLD_TICKS);
        assert!(held[0]);
        assert!(!held[FIRE_CYCLE_TICKS as usize - 1]);
    }
}
