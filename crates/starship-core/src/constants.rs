//! Simulation constants and tuning defaults.
//!
//! `SimConfig::default()` is built from these values.

/// Simulation tick rate (Hz). One tick per rendered frame.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

// --- World ---

/// World width in world units.
pub const WORLD_WIDTH: f64 = 2560.0;

/// World height in world units.
pub const WORLD_HEIGHT: f64 = 1600.0;

/// Default viewport width in pixels.
pub const SCREEN_WIDTH: f64 = 1280.0;

/// Default viewport height in pixels.
pub const SCREEN_HEIGHT: f64 = 720.0;

/// Default enemy population.
pub const ENEMY_COUNT: usize = 10;

/// Number of enemies allowed to newly commit to an engagement.
pub const ENGAGED_COUNT_MAX: u32 = 3;

// --- Ships ---

/// Ship sprite footprint (length along heading).
pub const SHIP_LENGTH: f64 = 128.0;

/// Ship sprite footprint (beam).
pub const SHIP_BEAM: f64 = 32.0;

/// Player speed (units per tick).
pub const PLAYER_SPEED: f64 = 5.0;

/// Player turn step (degrees per tick).
pub const PLAYER_TURN_STEP: f64 = 4.0;

/// Player turn deadband (degrees).
pub const PLAYER_TURN_DEADBAND: f64 = 2.0;

/// Enemy speed (units per tick).
pub const ENEMY_SPEED: f64 = 4.0;

/// Enemy turn step (degrees per tick).
pub const ENEMY_TURN_STEP: f64 = 2.0;

/// Enemy turn deadband (degrees).
pub const ENEMY_TURN_DEADBAND: f64 = 1.0;

/// Heading enemies spawn with.
pub const ENEMY_SPAWN_ANGLE: f64 = 90.0;

/// Off-screen draw position held by an enemy until its first update.
pub const ENEMY_PARKED_DRAW_POS: f64 = -100.0;

// --- Enemy AI ---

/// Ticks between re-target decisions.
pub const ENEMY_RETARGET_INTERVAL: u32 = 60;

/// Ticks between checks for starting a charge.
pub const ENEMY_CHARGE_CHECK_INTERVAL: u32 = 30;

/// Ticks between checks for releasing a charged shot.
pub const ENEMY_RELEASE_CHECK_INTERVAL: u32 = 20;

/// Distance below which an enemy may engage the player.
pub const ENGAGE_RADIUS: f64 = 1000.0;

/// Distance below which an enemy flees and fires regardless of aim.
pub const TOO_CLOSE_RADIUS: f64 = 100.0;

/// Distance below which an enemy starts charging regardless of aim.
pub const POINT_BLANK_RADIUS: f64 = 200.0;

/// Aim error (degrees) within which an engaged enemy starts charging.
pub const CHARGE_AIM_TOLERANCE: f64 = 20.0;

/// Aim error (degrees) within which an engaged enemy releases its shot.
pub const RELEASE_AIM_TOLERANCE: f64 = 10.0;

/// Maximum signed roam offset from the player when re-targeting.
pub const ROAM_DISTANCE: i32 = 2000;

/// Random heading jitter (degrees, ±) when bouncing off the world seam.
pub const EDGE_JITTER: i32 = 20;

// --- Plasma ---

/// Radius of a freshly created plasma ball.
pub const PLASMA_INITIAL_RADIUS: f64 = 10.0;

/// Radius at which a charging plasma ball fires on its own.
pub const PLASMA_MAX_RADIUS: f64 = 40.0;

/// Radius gained per charging tick.
pub const PLASMA_GROWTH: f64 = 0.2;

/// Cosmetic spin per tick (degrees).
pub const PLASMA_SPIN_STEP: f64 = 2.0;

/// Plasma speed as a multiple of the firing ship's speed.
pub const PLASMA_SPEED_FACTOR: f64 = 2.0;

/// Distance a fired plasma ball travels before it expires.
pub const PLASMA_TRAVEL_BUDGET: f64 = 10_000.0;

/// Mount point ahead of the ship, as a fraction of ship length.
pub const PLASMA_MOUNT_FACTOR: f64 = 0.7;

// --- Display ---

/// Ship art points along +x; sprite rotation is `heading - SPRITE_ROTATION_OFFSET`.
pub const SPRITE_ROTATION_OFFSET: f64 = 90.0;
