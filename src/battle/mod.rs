//! Battle system - attack resolution and the turn loop
//!
//! Two sides trade blows against each other's strongholds, one attack each
//! per round, until one side has nothing left standing.

pub mod ai;
pub mod constants;
pub mod execution;
pub mod resolution;
pub mod scoring;
pub mod setup;

// Re-exports for convenient access
pub use ai::{random_class, Commander, RandomCommander, TargetOption, TargetView};
pub use constants::*;
pub use execution::{
    MatchEvent, MatchEventType, MatchObserver, MatchOutcome, MatchState, NullObserver, Side,
    TurnPhase,
};
pub use resolution::{attack, resolve_damage, AttackReport};
pub use scoring::{summarize, MatchSummary, SideSummary};
pub use setup::setup_match;
