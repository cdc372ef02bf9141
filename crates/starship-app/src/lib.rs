//! STARSHIP headless application.
//!
//! This crate wires the simulation to a game loop thread and exposes
//! session handlers to start, drive, poll and stop it.

pub mod config;
pub mod game_loop;
pub mod pilot;
pub mod session;
pub mod state;

pub use starship_core as core;
