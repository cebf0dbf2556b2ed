//! Attack resolution
//!
//! Only the target's environment matters: its defense bonus is subtracted
//! from the attacker's base attack. The attacker's own ground and the
//! defender's attack bonus play no part.

use crate::battle::constants::MIN_DAMAGE;
use crate::core::error::{Result, SiegeError};
use crate::core::types::{Health, PlayerClass, Race};
use crate::entity::player::Player;
use crate::world::environment::Environment;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single attack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackReport {
    pub attacker_race: Race,
    pub attacker_class: PlayerClass,
    pub defender_race: Race,
    pub target: String,
    pub damage: u32,
    pub health_left: Health,
}

impl fmt::Display for AttackReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} attacks {}'s {} for {} damage. Health left: {}",
            self.attacker_race,
            self.attacker_class,
            self.defender_race,
            self.target,
            self.damage,
            self.health_left
        )
    }
}

/// Damage dealt by `base_attack` against a stronghold on `environment`
pub fn resolve_damage(base_attack: u32, environment: &Environment) -> u32 {
    let raw = i64::from(base_attack) - i64::from(environment.defense_bonus);
    // raw is at most u32::MAX + 5 before the clamp
    raw.clamp(i64::from(MIN_DAMAGE), i64::from(u32::MAX)) as u32
}

/// Resolve `attacker` hitting `defender.strongholds[target]`
pub fn attack(attacker: &Player, defender: &mut Player, target: usize) -> Result<AttackReport> {
    let available = defender.strongholds.len();
    let stronghold = defender
        .strongholds
        .get_mut(target)
        .ok_or(SiegeError::InvalidTarget {
            index: target,
            available,
        })?;

    let damage = resolve_damage(attacker.base_attack, stronghold.environment);
    stronghold.apply_damage(damage);

    let report = AttackReport {
        attacker_race: attacker.race,
        attacker_class: attacker.class,
        defender_race: defender.race,
        target: stronghold.name.clone(),
        damage,
        health_left: stronghold.health(),
    };
    tracing::debug!(
        attacker = %attacker.race,
        target = %report.target,
        damage,
        health_left = report.health_left,
        "attack resolved"
    );
    Ok(report)
}
