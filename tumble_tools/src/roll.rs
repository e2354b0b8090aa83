//! Rolls dice expressions from the command line.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tumble::prelude::*;

#[derive(Parser)]
#[command(about = "Roll a dice expression like \"3d6 + 1\"")]
struct Args {
    /// The dice expression to roll.
    expression: String,

    /// How many times to roll it.
    #[arg(short = 'n', long, default_value_t = 1)]
    rolls: usize,

    /// Seed for the generator. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let dice: DiceRoll = args.expression.parse()?;
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64
    });
    log::debug!("rolling {:?} seeded with {seed}", args.expression);

    let mut rng = Xoshiro256PlusPlus::new(seed);
    for _ in 0..args.rolls {
        println!("{}", dice.roll(&mut rng).to_string().bold());
    }
    println!("{}", format!("(range {}..={})", dice.min(), dice.max()).dimmed());

    Ok(())
}
