//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` when read-only).
//! They hold no state of their own; everything lives in components or in the
//! engine's `WorldState`.

pub mod enemy;
pub mod engagement;
pub mod movement;
pub mod plasma;
pub mod player;
pub mod snapshot;
