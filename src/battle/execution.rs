//! Match execution - the turn loop
//!
//! A round is: check termination, human picks and hits a target, computer
//! hits back at a random standing stronghold. Each phase of that is an
//! explicit `TurnPhase`, and `MatchState::advance` performs one transition.

use crate::battle::ai::{Commander, TargetView};
use crate::battle::constants::FIRST_ROUND;
use crate::battle::resolution::{attack, AttackReport};
use crate::core::error::{Result, SiegeError};
use crate::core::types::Round;
use crate::entity::player::Player;
use serde::{Deserialize, Serialize};

/// How a match ended, from the human side's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    HumanVictory,
    HumanDefeat,
}

/// Where the turn loop currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    CheckingTermination,
    SelectingTarget,
    ResolvingHumanAttack { target: usize },
    ComputerTurn,
    ResolvingComputerAttack { target: usize },
    Finished(MatchOutcome),
}

/// Which side made a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Human,
    Computer,
}

/// Log entry for match events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEvent {
    pub round: Round,
    pub event_type: MatchEventType,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MatchEventType {
    RoundStarted,
    Attack { side: Side, report: AttackReport },
    ComputerTurnSkipped,
    MatchEnded { outcome: MatchOutcome },
}

/// Receives match events as they happen
///
/// All methods default to doing nothing, so headless runs can pass
/// `&mut NullObserver`.
pub trait MatchObserver {
    fn round_started(&mut self, _round: Round) -> Result<()> {
        Ok(())
    }

    fn attack_resolved(&mut self, _side: Side, _report: &AttackReport) -> Result<()> {
        Ok(())
    }

    fn match_ended(&mut self, _outcome: MatchOutcome) -> Result<()> {
        Ok(())
    }
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl MatchObserver for NullObserver {}

/// Complete match state
#[derive(Debug, Clone)]
pub struct MatchState {
    /// The side controlled by the person at the keyboard
    pub human: Player,
    pub computer: Player,
    pub round: Round,
    pub phase: TurnPhase,
    pub log: Vec<MatchEvent>,
}

impl MatchState {
    pub fn new(human: Player, computer: Player) -> Self {
        Self {
            human,
            computer,
            round: FIRST_ROUND,
            phase: TurnPhase::CheckingTermination,
            log: Vec::new(),
        }
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        match self.phase {
            TurnPhase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Winner check; the computer side is tested first
    pub fn check_termination(&self) -> Option<MatchOutcome> {
        if self.computer.is_defeated() {
            Some(MatchOutcome::HumanVictory)
        } else if self.human.is_defeated() {
            Some(MatchOutcome::HumanDefeat)
        } else {
            None
        }
    }

    /// Perform one phase transition and return the new phase
    ///
    /// The transition is committed (health, log, round and phase) before
    /// the observer hears about it. An observer error is returned after the
    /// state has moved on, so calling `advance` again never replays a step.
    pub fn advance(
        &mut self,
        human: &mut dyn Commander,
        computer: &mut dyn Commander,
        observer: &mut dyn MatchObserver,
    ) -> Result<TurnPhase> {
        let first_new = self.log.len();

        self.phase = match self.phase {
            TurnPhase::CheckingTermination => {
                self.log_event(MatchEventType::RoundStarted, format!("Round {}", self.round));

                match self.check_termination() {
                    Some(outcome) => {
                        self.log_event(
                            MatchEventType::MatchEnded { outcome },
                            format!("Match ended: {:?}", outcome),
                        );
                        tracing::info!(round = self.round, ?outcome, "match finished");
                        TurnPhase::Finished(outcome)
                    }
                    None => TurnPhase::SelectingTarget,
                }
            }
            TurnPhase::SelectingTarget => {
                let view = TargetView::of(&self.computer, self.round);
                let target = pick(human, &view)?;
                TurnPhase::ResolvingHumanAttack { target }
            }
            TurnPhase::ResolvingHumanAttack { target } => {
                let report = attack(&self.human, &mut self.computer, target)?;
                self.record_attack(Side::Human, report);
                TurnPhase::ComputerTurn
            }
            TurnPhase::ComputerTurn => {
                let view = TargetView::of(&self.human, self.round);
                if view.is_empty() {
                    self.log_event(
                        MatchEventType::ComputerTurnSkipped,
                        "No standing strongholds to attack".into(),
                    );
                    self.round += 1;
                    TurnPhase::CheckingTermination
                } else {
                    let target = pick(computer, &view)?;
                    TurnPhase::ResolvingComputerAttack { target }
                }
            }
            TurnPhase::ResolvingComputerAttack { target } => {
                let report = attack(&self.computer, &mut self.human, target)?;
                self.record_attack(Side::Computer, report);
                self.round += 1;
                TurnPhase::CheckingTermination
            }
            TurnPhase::Finished(outcome) => TurnPhase::Finished(outcome),
        };

        for event in &self.log[first_new..] {
            notify(observer, event)?;
        }
        Ok(self.phase)
    }

    /// Run until one side has no standing strongholds
    pub fn run(
        &mut self,
        human: &mut dyn Commander,
        computer: &mut dyn Commander,
        observer: &mut dyn MatchObserver,
    ) -> Result<MatchOutcome> {
        loop {
            if let TurnPhase::Finished(outcome) = self.advance(human, computer, observer)? {
                return Ok(outcome);
            }
        }
    }

    fn record_attack(&mut self, side: Side, report: AttackReport) {
        let description = report.to_string();
        self.log_event(MatchEventType::Attack { side, report }, description);
    }

    fn log_event(&mut self, event_type: MatchEventType, description: String) {
        self.log.push(MatchEvent {
            round: self.round,
            event_type,
            description,
        });
    }
}

/// Forward a logged event to the observer
fn notify(observer: &mut dyn MatchObserver, event: &MatchEvent) -> Result<()> {
    match &event.event_type {
        MatchEventType::RoundStarted => observer.round_started(event.round),
        MatchEventType::Attack { side, report } => observer.attack_resolved(*side, report),
        MatchEventType::MatchEnded { outcome } => observer.match_ended(*outcome),
        MatchEventType::ComputerTurnSkipped => Ok(()),
    }
}

/// Ask a commander for a target and map it back to a stronghold index
fn pick(commander: &mut dyn Commander, view: &TargetView) -> Result<usize> {
    let choice = commander.choose_target(view)?;
    view.options
        .get(choice)
        .map(|option| option.index)
        .ok_or(SiegeError::InvalidTarget {
            index: choice,
            available: view.options.len(),
        })
}
