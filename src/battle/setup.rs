//! Match setup

use crate::battle::execution::MatchState;
use crate::core::error::Result;
use crate::core::types::{PlayerClass, Race};
use crate::entity::player::Player;

/// Build a fresh match: the user takes their race's roster, the computer
/// takes the other race's
pub fn setup_match(
    user_race: Race,
    user_class: PlayerClass,
    computer_class: PlayerClass,
) -> Result<MatchState> {
    let human = Player::for_race(user_race, user_class)?;
    let computer = Player::for_race(user_race.opponent(), computer_class)?;

    tracing::info!(
        "Match set up: {} {} vs {} {}",
        human.race,
        human.class,
        computer.race,
        computer.class
    );
    Ok(MatchState::new(human, computer))
}
