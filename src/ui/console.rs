//! Line-based console front end
//!
//! `ConsoleCommander` lets a person pick targets for the human side;
//! `ConsoleNarrator` prints what happens. Both take any reader/writer so
//! tests can run them against in-memory buffers.

use crate::battle::ai::{Commander, TargetView};
use crate::battle::execution::{MatchObserver, MatchOutcome, Side};
use crate::battle::resolution::AttackReport;
use crate::core::error::Result;
use crate::core::types::{PlayerClass, Race, Round};
use crate::ui::menu::choose_option;
use std::io::{BufRead, Write};

pub const VICTORY_MESSAGE: &str = "You have defeated all enemy strongholds!";
pub const DEFEAT_MESSAGE: &str = "All your strongholds are lost!";
pub const TARGET_PROMPT: &str = "Choose a stronghold to attack:";

/// Human-side commander reading choices from a terminal
#[derive(Debug)]
pub struct ConsoleCommander<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleCommander<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Hand back the reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Commander for ConsoleCommander<R, W> {
    fn choose_target(&mut self, view: &TargetView) -> Result<usize> {
        writeln!(self.output, "Enemy strongholds:")?;
        for (i, option) in view.options.iter().enumerate() {
            writeln!(
                self.output,
                "{}. {} ({} HP, Env: {})",
                i + 1,
                option.name,
                option.health,
                option.environment
            )?;
        }

        let names: Vec<&str> = view.options.iter().map(|o| o.name.as_str()).collect();
        choose_option(&mut self.input, &mut self.output, TARGET_PROMPT, &names)
    }
}

/// Prints round headers, attack narration and the final message
#[derive(Debug)]
pub struct ConsoleNarrator<W> {
    output: W,
}

impl<W: Write> ConsoleNarrator<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> MatchObserver for ConsoleNarrator<W> {
    fn round_started(&mut self, round: Round) -> Result<()> {
        writeln!(self.output, "\n-- Round {} --", round)?;
        Ok(())
    }

    fn attack_resolved(&mut self, _side: Side, report: &AttackReport) -> Result<()> {
        writeln!(self.output, "{}", report)?;
        Ok(())
    }

    fn match_ended(&mut self, outcome: MatchOutcome) -> Result<()> {
        let message = match outcome {
            MatchOutcome::HumanVictory => VICTORY_MESSAGE,
            MatchOutcome::HumanDefeat => DEFEAT_MESSAGE,
        };
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;
        Ok(())
    }
}

/// Prompt for the user's race
pub fn select_race<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Race> {
    let index = choose_option(input, output, "Select your race:", &Race::ALL)?;
    Ok(Race::ALL[index])
}

/// Prompt for the user's class (only playable classes are offered)
pub fn select_class<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PlayerClass> {
    let index = choose_option(input, output, "Select your class:", &PlayerClass::PLAYABLE)?;
    Ok(PlayerClass::PLAYABLE[index])
}
