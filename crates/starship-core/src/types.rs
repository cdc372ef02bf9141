//! Fundamental geometric and simulation types.

use std::ops::{Add, AddAssign, Deref, DerefMut, Div, Mul, Neg, Rem, Sub, SubAssign};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::angles;

/// 2D vector in simulation space (world units, screen-style axes: +y is down).
///
/// Thin value wrapper over `glam::DVec2`. All operators are component-wise.
/// `%` is a Euclidean modulo, so wrapping by a positive size never yields a
/// negative component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector2(pub DVec2);

impl Vector2 {
    pub const ZERO: Self = Self(DVec2::ZERO);

    pub const fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.0.length()
    }

    /// Straight-line distance to another point.
    pub fn distance_to(&self, other: &Vector2) -> f64 {
        self.0.distance(other.0)
    }

    /// Heading in degrees from this point toward `other` (0 = up, clockwise).
    pub fn angle_to(&self, other: &Vector2) -> f64 {
        angles::heading_between(*self, *other)
    }

    /// Half of each component.
    pub fn half(&self) -> Self {
        Self(self.0 * 0.5)
    }

    /// Half of each component, rounded down to a whole unit. Viewport centers
    /// use this so whole-pixel pointers can land on them exactly.
    pub fn half_floor(&self) -> Self {
        Self((self.0 * 0.5).floor())
    }
}

impl Deref for Vector2 {
    type Target = DVec2;

    fn deref(&self) -> &DVec2 {
        &self.0
    }
}

impl DerefMut for Vector2 {
    fn deref_mut(&mut self) -> &mut DVec2 {
        &mut self.0
    }
}

impl From<DVec2> for Vector2 {
    fn from(v: DVec2) -> Self {
        Self(v)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        self.0 += rhs.0;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        self.0 -= rhs.0;
    }
}

impl Mul for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Vector2 {
        Self(self.0 * rhs.0)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Vector2 {
        Self(self.0 * rhs)
    }
}

impl Div for Vector2 {
    type Output = Vector2;

    fn div(self, rhs: Vector2) -> Vector2 {
        Self(self.0 / rhs.0)
    }
}

impl Rem for Vector2 {
    type Output = Vector2;

    fn rem(self, rhs: Vector2) -> Vector2 {
        Self(self.0.rem_euclid(rhs.0))
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Self(-self.0)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Viewport anchor: the player's world position and where it is drawn.
///
/// Everything else is drawn relative to this pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub anchor_world: Vector2,
    pub anchor_draw: Vector2,
}

impl Camera {
    pub fn new(anchor_world: Vector2, anchor_draw: Vector2) -> Self {
        Self {
            anchor_world,
            anchor_draw,
        }
    }

    /// Map a world position to screen space.
    pub fn to_screen(&self, world_pos: Vector2) -> Vector2 {
        world_pos - self.anchor_world + self.anchor_draw
    }

    /// Top-left offset of a repeating background tile of `tile_size`.
    ///
    /// The renderer draws the tile at this offset and at the three neighbours
    /// shifted back by one tile on each axis.
    pub fn background_offset(&self, tile_size: Vector2) -> Vector2 {
        self.to_screen(Vector2::ZERO) % tile_size
    }
}
