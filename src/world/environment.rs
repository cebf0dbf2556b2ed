//! Stronghold environments and their combat modifiers
//!
//! The table is fixed at compile time. Strongholds hold `&'static`
//! references into it, so every stronghold built on "Forest" shares the
//! same entry.

use crate::core::error::{Result, SiegeError};
use serde::Serialize;

/// A named modifier bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Environment {
    pub name: &'static str,
    /// Carried for completeness; no combat rule reads it
    pub attack_bonus: i32,
    /// Subtracted from the attacker's base attack when this ground is hit
    pub defense_bonus: i32,
}

impl Environment {
    const fn new(name: &'static str, attack_bonus: i32, defense_bonus: i32) -> Self {
        Self {
            name,
            attack_bonus,
            defense_bonus,
        }
    }
}

pub static ENVIRONMENTS: [Environment; 10] = [
    Environment::new("Forest", 0, 5),
    Environment::new("Mountain", 5, 0),
    Environment::new("Swamp", 0, 2),
    Environment::new("Plains", 0, 0),
    Environment::new("Desert", 2, -2),
    Environment::new("Volcano", 10, -5),
    Environment::new("Ice", 0, 10),
    Environment::new("River", 0, 5),
    Environment::new("Cave", 2, 7),
    Environment::new("Ruins", 3, 0),
];

/// Look up an environment by exact name
pub fn environment(name: &str) -> Option<&'static Environment> {
    ENVIRONMENTS.iter().find(|env| env.name == name)
}

/// Look up an environment, treating a missing name as a data error
pub fn require_environment(name: &str) -> Result<&'static Environment> {
    environment(name).ok_or_else(|| SiegeError::UnknownEnvironment(name.to_string()))
}
