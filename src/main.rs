//! Strongholds - Entry Point
//!
//! Interactive match: pick a race and class, then trade attacks with the
//! computer until one side has no strongholds left standing.

use clap::Parser;
use std::io;
use std::path::PathBuf;
use strongholds::battle::{random_class, setup_match, RandomCommander};
use strongholds::core::config::{load_config, parse_class, parse_race, MatchConfig};
use strongholds::core::error::Result;
use strongholds::ui::{select_class, select_race, ConsoleCommander, ConsoleNarrator};
use tracing_subscriber::EnvFilter;

/// Turn-based siege between Human and Orc strongholds
#[derive(Parser, Debug)]
#[command(name = "strongholds")]
#[command(about = "Lead Humans or Orcs against the other side's strongholds")]
struct Args {
    /// Match config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for the computer's choices
    #[arg(long)]
    seed: Option<u64>,

    /// Play as this race instead of choosing from the menu (human/orc)
    #[arg(long)]
    race: Option<String>,

    /// Play as this class instead of choosing from the menu
    #[arg(long)]
    class: Option<String>,

    /// Fix the computer's class instead of picking one at random
    #[arg(long)]
    computer_class: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => MatchConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(name) = &args.computer_class {
        config.computer_class = Some(parse_class(name)?);
    }
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!("Strongholds starting...");

    let mut input = io::stdin().lock();
    let mut output = io::stdout();

    let race = match &args.race {
        Some(name) => parse_race(name)?,
        None => select_race(&mut input, &mut output)?,
    };
    let class = match &args.class {
        Some(name) => parse_class(name)?,
        None => select_class(&mut input, &mut output)?,
    };

    let mut computer = match config.seed {
        Some(seed) => {
            tracing::info!(seed, "Using fixed seed");
            RandomCommander::with_seed(seed)
        }
        None => RandomCommander::new(),
    };
    let computer_class = config
        .computer_class
        .unwrap_or_else(|| random_class(computer.rng_mut()));

    let mut state = setup_match(race, class, computer_class)?;
    let mut human = ConsoleCommander::new(input, output);
    let mut narrator = ConsoleNarrator::new(io::stdout());

    let outcome = state.run(&mut human, &mut computer, &mut narrator)?;
    tracing::info!(?outcome, rounds = state.round - 1, "Match over");
    Ok(())
}
