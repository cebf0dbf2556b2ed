//! Battle constants - all tunable values in one place

use crate::core::types::{Health, Round};

/// Health every stronghold starts with (and the ceiling it never exceeds)
pub const STARTING_HEALTH: Health = 100;

/// Every attack lands for at least this much
pub const MIN_DAMAGE: u32 = 1;

/// Round numbering starts here
pub const FIRST_ROUND: Round = 1;
