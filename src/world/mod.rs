//! Static world data: environments and race rosters

pub mod environment;
pub mod roster;

pub use environment::{environment, require_environment, Environment, ENVIRONMENTS};
pub use roster::{build_strongholds, roster, RosterEntry, HUMAN_ROSTER, ORC_ROSTER};
