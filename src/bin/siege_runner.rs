//! Headless Siege Runner
//!
//! Plays computer vs computer matches and prints a summary as JSON or text.

use clap::Parser;
use std::process::ExitCode;
use strongholds::battle::{
    random_class, setup_match, summarize, AttackReport, MatchObserver, MatchSummary,
    NullObserver, RandomCommander, Side,
};
use strongholds::core::config::{parse_class, parse_race};
use strongholds::core::error::Result;
use strongholds::core::types::{PlayerClass, Round};
use tracing_subscriber::EnvFilter;

/// Headless Siege Runner - both sides pick targets at random
#[derive(Parser, Debug)]
#[command(name = "siege_runner")]
#[command(about = "Run a computer vs computer siege and output a summary")]
struct Args {
    /// Race of the side that moves first (human/orc)
    #[arg(long, default_value = "human")]
    race: String,

    /// Class of the side that moves first (random when unset)
    #[arg(long)]
    class: Option<String>,

    /// Class of the second side (random when unset)
    #[arg(long)]
    computer_class: Option<String>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Print every attack to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Echoes the match to stderr
struct VerboseLog;

impl MatchObserver for VerboseLog {
    fn round_started(&mut self, round: Round) -> Result<()> {
        eprintln!("=== Round {} ===", round);
        Ok(())
    }

    fn attack_resolved(&mut self, side: Side, report: &AttackReport) -> Result<()> {
        eprintln!("  [{:?}] {}", side, report);
        Ok(())
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("strongholds=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(summary) => {
            print_summary(&summary, &args.format);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<MatchSummary> {
    let seed = args.seed.unwrap_or_else(rand::random);

    let race = parse_race(&args.race)?;

    let mut first = RandomCommander::with_seed(seed);
    let mut second = RandomCommander::with_seed(seed.wrapping_add(1));

    let first_class = class_or_random(args.class.as_deref(), &mut first)?;
    let second_class = class_or_random(args.computer_class.as_deref(), &mut second)?;

    let mut state = setup_match(race, first_class, second_class)?;
    if args.verbose {
        state.run(&mut first, &mut second, &mut VerboseLog)?;
    } else {
        state.run(&mut first, &mut second, &mut NullObserver)?;
    }

    Ok(summarize(&state, Some(seed)))
}

fn class_or_random(name: Option<&str>, commander: &mut RandomCommander) -> Result<PlayerClass> {
    match name {
        Some(name) => parse_class(name),
        None => Ok(random_class(commander.rng_mut())),
    }
}

fn print_summary(summary: &MatchSummary, format: &str) {
    match format {
        "json" => print_json(summary),
        "text" => {
            println!("Siege Result");
            println!("============");
            println!("Outcome: {:?}", summary.outcome);
            println!("Rounds: {}", summary.rounds_played);
            for (label, side) in [("First", &summary.human), ("Second", &summary.computer)] {
                println!(
                    "{} side: {} {} - {} strongholds standing, {} health left",
                    label, side.race, side.class, side.strongholds_standing, side.health_remaining
                );
            }
            if let Some(seed) = summary.seed {
                println!("Seed: {}", seed);
            }
        }
        _ => {
            eprintln!("Unknown format '{}', defaulting to json", format);
            print_json(summary);
        }
    }
}

fn print_json(summary: &MatchSummary) {
    match serde_json::to_string_pretty(summary) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize summary: {}", e),
    }
}
