//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Round counter (one human attack followed by one computer attack)
pub type Round = u32;

/// Stronghold hit points
pub type Health = u32;

/// The two playable factions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Race {
    Human,
    Orc,
}

impl Race {
    /// Menu order for race selection
    pub const ALL: [Race; 2] = [Race::Human, Race::Orc];

    /// The race on the other side of the field
    pub fn opponent(&self) -> Race {
        match self {
            Race::Human => Race::Orc,
            Race::Orc => Race::Human,
        }
    }

    pub fn from_name(name: &str) -> Option<Race> {
        Self::ALL
            .into_iter()
            .find(|race| race.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Race::Human => "Human",
            Race::Orc => "Orc",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Character class, which fixes base attack and defense
///
/// `Unknown` is never offered in a menu. It exists so that a class name
/// coming from outside the menus still maps onto a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerClass {
    Warrior,
    Mage,
    Rogue,
    Unknown,
}

impl PlayerClass {
    /// Menu order for class selection
    pub const PLAYABLE: [PlayerClass; 3] =
        [PlayerClass::Warrior, PlayerClass::Mage, PlayerClass::Rogue];

    /// Parse a class name; anything unrecognized becomes `Unknown`
    pub fn from_name(name: &str) -> PlayerClass {
        Self::PLAYABLE
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or(PlayerClass::Unknown)
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlayerClass::Warrior => "warrior",
            PlayerClass::Mage => "mage",
            PlayerClass::Rogue => "rogue",
            PlayerClass::Unknown => "unknown",
        }
    }

    pub fn is_playable(&self) -> bool {
        !matches!(self, PlayerClass::Unknown)
    }
}

impl fmt::Display for PlayerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
