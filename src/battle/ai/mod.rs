//! Target selection for both sides of a match
//!
//! Architecture: a `Commander` trait with swappable implementations.
//! The computer side uses `RandomCommander`; the interactive binary plugs a
//! console-backed commander into the human side.

pub mod commander;

pub use commander::{random_class, RandomCommander};

use crate::core::error::Result;
use crate::core::types::{Health, Race, Round};
use crate::entity::player::Player;
use serde::Serialize;

/// One attackable stronghold as presented to a commander
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetOption {
    /// Index into the defender's `strongholds`
    pub index: usize,
    pub name: String,
    pub health: Health,
    pub environment: &'static str,
}

/// What a commander sees when picking a target
#[derive(Debug, Clone, Serialize)]
pub struct TargetView {
    pub round: Round,
    pub defender: Race,
    /// Only standing strongholds, in the defender's order
    pub options: Vec<TargetOption>,
}

impl TargetView {
    pub fn of(defender: &Player, round: Round) -> Self {
        let options = defender
            .living_strongholds()
            .map(|(index, sh)| TargetOption {
                index,
                name: sh.name.clone(),
                health: sh.health(),
                environment: sh.environment.name,
            })
            .collect();

        Self {
            round,
            defender: defender.race,
            options,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Trait for anything that can pick a target
pub trait Commander {
    /// Index into `view.options`; only called with a non-empty view
    fn choose_target(&mut self, view: &TargetView) -> Result<usize>;
}
