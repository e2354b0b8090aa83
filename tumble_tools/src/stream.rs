//! Streams raw generator output to stdout as native-endian bytes, one word
//! per step with no framing, for piping into statistical test suites:
//!
//! ```text
//! stream --engine xoshiro256-plus-plus | RNG_test stdin64
//! stream --engine xoroshiro64-star | dieharder -a -g 200
//! ```

use std::io::{self, BufWriter, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tumble::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Variant {
    Xoshiro256PlusPlus,
    Xoshiro256StarStar,
    Xoshiro256Plus,
    Xoroshiro128PlusPlus,
    Xoroshiro128StarStar,
    Xoroshiro128Plus,
    Xoshiro128PlusPlus,
    Xoshiro128StarStar,
    Xoshiro128Plus,
    Xoroshiro64StarStar,
    Xoroshiro64Star,
}

#[derive(Parser)]
#[command(about = "Dump raw generator output to stdout, forever")]
struct Args {
    /// Which generator variant to stream.
    #[arg(long, value_enum, default_value = "xoshiro256-plus-plus")]
    engine: Variant,

    /// Seed for the generator. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
}

macro_rules! pump {
    ($engine:ty, $seed:expr, $out:expr) => {{
        let mut rng = <$engine>::new($seed);
        loop {
            $out.write_all(&rng.next().to_ne_bytes())?;
        }
    }};
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64
    });
    log::info!("streaming {:?} seeded with {seed}", args.engine);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match args.engine {
        Variant::Xoshiro256PlusPlus => pump!(Xoshiro256PlusPlus, seed, out),
        Variant::Xoshiro256StarStar => pump!(Xoshiro256StarStar, seed, out),
        Variant::Xoshiro256Plus => pump!(Xoshiro256Plus, seed, out),
        Variant::Xoroshiro128PlusPlus => pump!(Xoroshiro128PlusPlus, seed, out),
        Variant::Xoroshiro128StarStar => pump!(Xoroshiro128StarStar, seed, out),
        Variant::Xoroshiro128Plus => pump!(Xoroshiro128Plus, seed, out),
        Variant::Xoshiro128PlusPlus => pump!(Xoshiro128PlusPlus, seed, out),
        Variant::Xoshiro128StarStar => pump!(Xoshiro128StarStar, seed, out),
        Variant::Xoshiro128Plus => pump!(Xoshiro128Plus, seed, out),
        Variant::Xoroshiro64StarStar => pump!(Xoroshiro64StarStar, seed, out),
        Variant::Xoroshiro64Star => pump!(Xoroshiro64Star, seed, out),
    }
}
