//! Match integration tests
//!
//! Whole matches driven through the public API: console input scripted
//! from memory, computer choices seeded.

use std::io::Cursor;
use strongholds::battle::{
    resolve_damage, setup_match, Commander, MatchEventType, MatchOutcome, MatchState,
    NullObserver, RandomCommander, Side, TargetView, TurnPhase,
};
use strongholds::core::error::Result;
use strongholds::core::types::{PlayerClass, Race};
use strongholds::entity::Player;
use strongholds::ui::console::{DEFEAT_MESSAGE, VICTORY_MESSAGE};
use strongholds::ui::{ConsoleCommander, ConsoleNarrator};
use strongholds::world::environment;

fn flatten(player: &mut Player) {
    for sh in &mut player.strongholds {
        sh.apply_damage(100);
    }
}

/// Reference damage figures: class base attack against a target's ground
#[test]
fn test_reference_damage_table() {
    let cases = [
        (PlayerClass::Warrior, "Forest", 20),
        (PlayerClass::Rogue, "Ice", 5),
        (PlayerClass::Mage, "Volcano", 25),
    ];
    for (class, ground, expected) in cases {
        let attacker = Player::new(Race::Human, class, Vec::new());
        let env = environment(ground).unwrap();
        assert_eq!(resolve_damage(attacker.base_attack, env), expected);
    }
}

#[test]
fn test_console_match_until_victory() {
    let mut state = setup_match(Race::Human, PlayerClass::Warrior, PlayerClass::Rogue).unwrap();

    // Leave one Orc stronghold on Plains (warrior hits for 25) at 40 health
    for (i, sh) in state.computer.strongholds.iter_mut().enumerate() {
        if i != 14 {
            sh.apply_damage(100);
        }
    }
    state.computer.strongholds[14].apply_damage(60);
    assert_eq!(state.computer.strongholds[14].name, "Orc Haven");

    // First entry is junk and should be re-prompted
    let input = Cursor::new("abc\n1\n1\n");
    let mut human = ConsoleCommander::new(input, Vec::new());
    let mut computer = RandomCommander::with_seed(3);
    let mut narrator = ConsoleNarrator::new(Vec::new());

    let outcome = state.run(&mut human, &mut computer, &mut narrator).unwrap();
    assert_eq!(outcome, MatchOutcome::HumanVictory);
    assert_eq!(state.round, 3);

    let (_, menu_output) = human.into_inner();
    let menu_text = String::from_utf8(menu_output).unwrap();
    assert!(menu_text.contains("1. Orc Haven (40 HP, Env: Plains)"));
    assert!(menu_text.contains("1. Orc Haven (15 HP, Env: Plains)"));
    assert_eq!(menu_text.matches("Invalid choice.").count(), 1);

    let narration = String::from_utf8(narrator.into_inner()).unwrap();
    assert!(narration.contains("-- Round 1 --"));
    assert!(narration.contains("-- Round 3 --"));
    assert!(narration.contains(
        "Human warrior attacks Orc's Orc Haven for 25 damage. Health left: 15"
    ));
    assert!(narration.contains("Human warrior attacks Orc's Orc Haven for 25 damage. Health left: 0"));
    assert!(narration.trim_end().ends_with(VICTORY_MESSAGE));

    // The computer still strikes back in the round its last stronghold fell
    let round_two_sides: Vec<Side> = state
        .log
        .iter()
        .filter(|e| e.round == 2)
        .filter_map(|e| match &e.event_type {
            MatchEventType::Attack { side, .. } => Some(*side),
            _ => None,
        })
        .collect();
    assert_eq!(round_two_sides, vec![Side::Human, Side::Computer]);
    assert!(narration.contains("Orc rogue attacks Human's"));
}

#[test]
fn test_defeat_message_when_human_starts_flattened() {
    let mut state = setup_match(Race::Orc, PlayerClass::Mage, PlayerClass::Warrior).unwrap();
    flatten(&mut state.human);

    let mut human = ConsoleCommander::new(Cursor::new(""), Vec::new());
    let mut narrator = ConsoleNarrator::new(Vec::new());
    let outcome = state
        .run(&mut human, &mut RandomCommander::with_seed(0), &mut narrator)
        .unwrap();

    assert_eq!(outcome, MatchOutcome::HumanDefeat);
    let (_, menu_output) = human.into_inner();
    assert!(menu_output.is_empty(), "no target menu should be shown");

    let narration = String::from_utf8(narrator.into_inner()).unwrap();
    assert_eq!(narration, format!("\n-- Round 1 --\n{}\n", DEFEAT_MESSAGE));
}

#[test]
fn test_console_input_closed_is_error() {
    let mut state = setup_match(Race::Human, PlayerClass::Rogue, PlayerClass::Rogue).unwrap();
    let mut human = ConsoleCommander::new(Cursor::new("9999\n"), Vec::new());
    let result = state.run(
        &mut human,
        &mut RandomCommander::with_seed(0),
        &mut NullObserver,
    );
    assert!(result.is_err());
    assert_eq!(state.phase, TurnPhase::SelectingTarget);
}

#[test]
fn test_seeded_matches_are_reproducible() {
    let play = |seed: u64| -> MatchState {
        let mut state = setup_match(Race::Human, PlayerClass::Mage, PlayerClass::Mage).unwrap();
        state
            .run(
                &mut RandomCommander::with_seed(seed),
                &mut RandomCommander::with_seed(seed + 1),
                &mut NullObserver,
            )
            .unwrap();
        state
    };

    let a = play(77);
    let b = play(77);
    assert_eq!(a.outcome(), b.outcome());
    assert_eq!(a.round, b.round);
    let descriptions = |s: &MatchState| -> Vec<String> {
        s.log.iter().map(|e| e.description.clone()).collect()
    };
    assert_eq!(descriptions(&a), descriptions(&b));
}

/// Records the health of whatever the computer was offered
struct Auditor {
    inner: RandomCommander,
    offered_health: Vec<u32>,
}

impl Commander for Auditor {
    fn choose_target(&mut self, view: &TargetView) -> Result<usize> {
        let choice = self.inner.choose_target(view)?;
        self.offered_health.push(view.options[choice].health);
        Ok(choice)
    }
}

#[test]
fn test_computer_only_targets_standing_strongholds() {
    let mut state = setup_match(Race::Orc, PlayerClass::Rogue, PlayerClass::Warrior).unwrap();
    let mut computer = Auditor {
        inner: RandomCommander::with_seed(21),
        offered_health: Vec::new(),
    };
    state
        .run(
            &mut RandomCommander::with_seed(20),
            &mut computer,
            &mut NullObserver,
        )
        .unwrap();

    assert!(!computer.offered_health.is_empty());
    assert!(computer.offered_health.iter().all(|h| *h > 0));
}

#[test]
fn test_log_has_one_attack_per_side_per_round() {
    let mut state = setup_match(Race::Human, PlayerClass::Warrior, PlayerClass::Warrior).unwrap();
    state
        .run(
            &mut RandomCommander::with_seed(5),
            &mut RandomCommander::with_seed(6),
            &mut NullObserver,
        )
        .unwrap();

    let rounds_played = state.round - 1;
    let human_attacks = state
        .log
        .iter()
        .filter(|e| matches!(e.event_type, MatchEventType::Attack { side: Side::Human, .. }))
        .count() as u32;
    assert_eq!(human_attacks, rounds_played);

    for sh in state.human.strongholds.iter().chain(&state.computer.strongholds) {
        assert!(sh.health() <= 100);
    }
}
