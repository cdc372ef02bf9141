//! Core types and definitions for the STARSHIP simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! vectors and heading math, components, input, state snapshots,
//! configuration, and constants. It has no dependency on any runtime
//! or rendering framework.

pub mod angles;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod input;
pub mod state;
pub mod types;
pub mod world;

pub use config::SimConfig;
pub use error::{ConfigError, ConfigResult};
pub use types::Vector2;
