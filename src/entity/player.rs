//! One side of a match: a race, a class, and the strongholds it holds

use crate::core::error::Result;
use crate::core::types::{Health, PlayerClass, Race};
use crate::entity::stronghold::Stronghold;
use crate::world::roster::build_strongholds;
use serde::Serialize;

/// Base combat numbers derived from class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassStats {
    pub attack: u32,
    /// Not read by any combat rule yet
    pub defense: u32,
}

impl ClassStats {
    pub const fn new(attack: u32, defense: u32) -> Self {
        Self { attack, defense }
    }
}

/// Stats for a class
pub fn class_stats(class: PlayerClass) -> ClassStats {
    match class {
        PlayerClass::Warrior => ClassStats::new(25, 20),
        PlayerClass::Mage => ClassStats::new(20, 15),
        PlayerClass::Rogue => ClassStats::new(15, 10),
        // Same numbers as mage
        PlayerClass::Unknown => ClassStats::new(20, 15),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub race: Race,
    pub class: PlayerClass,
    pub strongholds: Vec<Stronghold>,
    pub base_attack: u32,
    pub base_defense: u32,
}

impl Player {
    pub fn new(race: Race, class: PlayerClass, strongholds: Vec<Stronghold>) -> Self {
        let stats = class_stats(class);
        Self {
            race,
            class,
            strongholds,
            base_attack: stats.attack,
            base_defense: stats.defense,
        }
    }

    /// Player holding the full starting roster of `race`
    pub fn for_race(race: Race, class: PlayerClass) -> Result<Self> {
        Ok(Self::new(race, class, build_strongholds(race)?))
    }

    /// True once every stronghold is at zero health
    pub fn is_defeated(&self) -> bool {
        self.strongholds.iter().all(|sh| !sh.is_standing())
    }

    /// Standing strongholds with their index in `strongholds`
    pub fn living_strongholds(&self) -> impl Iterator<Item = (usize, &Stronghold)> {
        self.strongholds
            .iter()
            .enumerate()
            .filter(|(_, sh)| sh.is_standing())
    }

    pub fn standing_count(&self) -> usize {
        self.living_strongholds().count()
    }

    pub fn total_health(&self) -> Health {
        self.strongholds.iter().map(Stronghold::health).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_stats_table() {
        assert_eq!(class_stats(PlayerClass::Warrior), ClassStats::new(25, 20));
        assert_eq!(class_stats(PlayerClass::Mage), ClassStats::new(20, 15));
        assert_eq!(class_stats(PlayerClass::Rogue), ClassStats::new(15, 10));
    }

    #[test]
    fn test_unknown_class_falls_back() {
        assert_eq!(class_stats(PlayerClass::Unknown), ClassStats::new(20, 15));
        let player = Player::new(Race::Orc, PlayerClass::from_name("bard"), Vec::new());
        assert_eq!(player.base_attack, 20);
        assert_eq!(player.base_defense, 15);
    }

    #[test]
    fn test_for_race_uses_roster() {
        let player = Player::for_race(Race::Human, PlayerClass::Warrior).unwrap();
        assert_eq!(player.strongholds.len(), 20);
        assert_eq!(player.strongholds[0].name, "Aurora Keep");
        assert_eq!(player.base_attack, 25);
        assert_eq!(player.total_health(), 2000);
    }

    #[test]
    fn test_defeated_only_when_all_fall() {
        let mut player = Player::for_race(Race::Orc, PlayerClass::Rogue).unwrap();
        assert!(!player.is_defeated());

        let last = player.strongholds.len() - 1;
        for sh in &mut player.strongholds[..last] {
            sh.apply_damage(100);
        }
        assert!(!player.is_defeated());
        assert_eq!(player.standing_count(), 1);

        player.strongholds[last].apply_damage(100);
        assert!(player.is_defeated());
        assert_eq!(player.standing_count(), 0);
    }

    #[test]
    fn test_living_strongholds_keep_original_index() {
        let mut player = Player::for_race(Race::Human, PlayerClass::Mage).unwrap();
        player.strongholds[0].apply_damage(100);
        let first = player.living_strongholds().next().unwrap();
        assert_eq!(first.0, 1);
        assert_eq!(first.1.name, "Brighton Hold");
    }
}
