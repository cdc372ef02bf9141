//! Engagement bookkeeping: how many enemies currently hold a slot.

use hecs::World;

use starship_core::components::EnemyBrain;
use starship_core::world::WorldState;

/// Count engaged enemies.
pub fn count_engaged(world: &World) -> u32 {
    world
        .query::<&EnemyBrain>()
        .iter()
        .filter(|(_, brain)| brain.engaged)
        .count() as u32
}

/// Record the end-of-tick count. Enemies read it on the next tick.
pub fn run(world: &World, state: &mut WorldState) {
    let count = count_engaged(world);
    if count != state.engaged_count() {
        tracing::debug!(
            previous = state.engaged_count(),
            count,
            max = state.engaged_count_max(),
            "engaged count changed"
        );
    }
    state.set_engaged_count(count);
}
