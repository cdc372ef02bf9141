//! Enemy AI for STARSHIP.
//!
//! Pure decision functions for enemy ships: periodic re-targeting with
//! engagement-slot negotiation, flee and edge-escape overrides, and the
//! charge/release firing gate. No ECS dependency; randomness is injected.

pub mod gunnery;
pub mod pilot;

pub use starship_core as core;

#[cfg(test)]
mod tests;
