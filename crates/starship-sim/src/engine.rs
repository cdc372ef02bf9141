//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, applies one input snapshot per
//! tick, runs all systems, and produces `GameStateSnapshot`s. Completely
//! headless, enabling deterministic testing.

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starship_core::components::Ship;
use starship_core::config::SimConfig;
use starship_core::error::ConfigResult;
use starship_core::input::InputSnapshot;
use starship_core::state::GameStateSnapshot;
use starship_core::types::{Camera, SimTime};
use starship_core::world::WorldState;

use crate::systems;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    state: WorldState,
    time: SimTime,
    rng: ChaCha8Rng,
    config: SimConfig,
    player: Entity,
    camera: Camera,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    ///
    /// The world is populated immediately: the player and every enemy exist
    /// before the first tick.
    pub fn new(config: SimConfig) -> ConfigResult<Self> {
        config.validate()?;

        let mut world = World::new();
        let state = WorldState::new(
            config.screen_size,
            config.world_size,
            config.engaged_count_max,
        );
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let player = world_setup::setup_world(&mut world, &state, &config, &mut rng);
        let camera = Camera::new(state.world_center(), state.half_screen_size());

        tracing::info!(
            seed = config.seed,
            enemies = config.enemy_count,
            world_w = config.world_size.x,
            world_h = config.world_size.y,
            "simulation created"
        );

        Ok(Self {
            world,
            state,
            time: SimTime::default(),
            rng,
            config,
            player,
            camera,
        })
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self, input: &InputSnapshot) -> GameStateSnapshot {
        self.run_systems(input);
        self.time.advance();

        systems::snapshot::build_snapshot(
            &self.world,
            &self.state,
            &self.time,
            &self.camera,
            input.pointer,
        )
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the world-level state (dimensions, aim, engagement count).
    pub fn state(&self) -> &WorldState {
        &self.state
    }

    /// Get the config this engine was built from.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get the player entity.
    pub fn player(&self) -> Entity {
        self.player
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the ECS world (for tests that stage scenarios).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Remove every enemy (for tests that stage their own).
    #[cfg(test)]
    pub fn clear_enemies(&mut self) {
        let enemies: Vec<Entity> = self
            .world
            .query::<&starship_core::components::EnemyBrain>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in enemies {
            let _ = self.world.despawn(entity);
        }
        self.state.set_engaged_count(0);
    }

    /// Spawn an enemy at a chosen position (for tests).
    #[cfg(test)]
    pub fn spawn_enemy_at(&mut self, position: starship_core::types::Vector2) -> Entity {
        let player_position = self.player_ship().position;
        world_setup::spawn_enemy(
            &mut self.world,
            &self.config,
            position,
            player_position,
            &mut self.rng,
        )
    }

    /// Override the recorded engagement count (for tests).
    #[cfg(test)]
    pub fn set_engaged_count(&mut self, count: u32) {
        self.state.set_engaged_count(count);
    }

    /// Copy of the player's ship component.
    pub fn player_ship(&self) -> Ship {
        self.world
            .get::<&Ship>(self.player)
            .map(|ship| *ship)
            .unwrap_or(Ship {
                position: self.camera.anchor_world,
                draw_position: self.camera.anchor_draw,
                angle: 0.0,
                speed: 0.0,
                size: self.config.player.ship_size,
            })
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: &InputSnapshot) {
        // 1. Aim, measured from where the player was drawn last tick
        let previous_draw = self.player_ship().draw_position;
        self.state.update_aim(input.pointer, previous_draw);
        // 2. Player ship, which also fixes the camera for this tick
        self.camera = systems::player::run(
            &mut self.world,
            self.player,
            &self.state,
            input,
            &self.config.player,
            &self.config.plasma,
        );
        // 3. Enemies, against the player's updated position
        systems::enemy::run(
            &mut self.world,
            &self.state,
            &self.camera,
            &self.config.enemy,
            &self.config.plasma,
            &mut self.rng,
        );
        // 4. Engagement recount, read by enemies next tick
        systems::engagement::run(&self.world, &mut self.state);
    }
}
