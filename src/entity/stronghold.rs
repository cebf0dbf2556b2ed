//! A fortified location with health

use crate::battle::constants::STARTING_HEALTH;
use crate::core::types::Health;
use crate::world::environment::Environment;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Stronghold {
    pub name: String,
    pub environment: &'static Environment,
    /// Always within `0..=STARTING_HEALTH`
    health: Health,
}

impl Stronghold {
    pub fn new(name: impl Into<String>, environment: &'static Environment) -> Self {
        Self {
            name: name.into(),
            environment,
            health: STARTING_HEALTH,
        }
    }

    pub fn health(&self) -> Health {
        self.health
    }

    /// Still has health left
    pub fn is_standing(&self) -> bool {
        self.health > 0
    }

    /// Reduce health, stopping at zero
    pub fn apply_damage(&mut self, amount: Health) {
        self.health = self.health.saturating_sub(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::environment::environment;

    fn keep() -> Stronghold {
        Stronghold::new("Aurora Keep", environment("Plains").unwrap())
    }

    #[test]
    fn test_new_stronghold_full_health() {
        let sh = keep();
        assert_eq!(sh.health(), 100);
        assert!(sh.is_standing());
    }

    #[test]
    fn test_damage_reduces_health() {
        let mut sh = keep();
        sh.apply_damage(20);
        assert_eq!(sh.health(), 80);
    }

    #[test]
    fn test_damage_clamps_at_zero() {
        let mut sh = keep();
        sh.apply_damage(95);
        sh.apply_damage(20);
        assert_eq!(sh.health(), 0);
        assert!(!sh.is_standing());

        sh.apply_damage(u32::MAX);
        assert_eq!(sh.health(), 0);
    }

    #[test]
    fn test_zero_damage_is_noop() {
        let mut sh = keep();
        sh.apply_damage(0);
        sh.apply_damage(0);
        assert_eq!(sh.health(), 100);
    }
}
