//! Match summary for headless runs

use crate::battle::execution::{MatchOutcome, MatchState};
use crate::core::types::{Health, PlayerClass, Race, Round};
use crate::entity::player::Player;
use serde::{Deserialize, Serialize};

/// Where one side stands at the end of a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideSummary {
    pub race: Race,
    pub class: PlayerClass,
    pub strongholds_standing: usize,
    pub health_remaining: Health,
}

impl SideSummary {
    pub fn of(player: &Player) -> Self {
        Self {
            race: player.race,
            class: player.class,
            strongholds_standing: player.standing_count(),
            health_remaining: player.total_health(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub outcome: Option<MatchOutcome>,
    /// Rounds that ran to completion
    pub rounds_played: Round,
    pub human: SideSummary,
    pub computer: SideSummary,
    pub seed: Option<u64>,
}

/// Summarize a match (finished or not)
pub fn summarize(state: &MatchState, seed: Option<u64>) -> MatchSummary {
    MatchSummary {
        outcome: state.outcome(),
        rounds_played: state.round.saturating_sub(1),
        human: SideSummary::of(&state.human),
        computer: SideSummary::of(&state.computer),
        seed,
    }
}
