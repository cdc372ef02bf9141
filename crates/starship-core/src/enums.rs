//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Plasma ball lifecycle stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlasmaStage {
    /// Attached to the ship's mount, growing.
    #[default]
    Charging,
    /// Released, travelling in a straight line.
    Fired,
}

/// Enemy pilot skill. Part of an enemy's identity; no behavior branches on it yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Smartness {
    #[default]
    Rookie,
    Regular,
    Veteran,
}

impl Smartness {
    /// Map a level in `0..=2` to a variant; anything higher saturates.
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Smartness::Rookie,
            1 => Smartness::Regular,
            _ => Smartness::Veteran,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Smartness::Rookie => 0,
            Smartness::Regular => 1,
            Smartness::Veteran => 2,
        }
    }
}

/// Which side a ship (or its plasma) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Allegiance {
    Player,
    Enemy,
}

/// Z-order for the presentation layer, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DrawLayer {
    Background,
    Plasma,
    EnemyShip,
    Ship,
    Cursor,
}
