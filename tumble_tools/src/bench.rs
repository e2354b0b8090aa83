//! Times raw generator throughput for every variant, then dice sampling
//! through the parsed-expression API.

use std::hint::black_box;
use std::time::Instant;

use colored::Colorize;
use tumble::prelude::*;

const WORDS: usize = 50_000_000;
const ROLLS: usize = 5_000_000;

macro_rules! bench_engine {
    ($label:literal, $engine:ty) => {{
        let mut rng = <$engine>::new(42);

        let now = Instant::now();
        for _ in 0..WORDS {
            black_box(rng.next());
        }
        let elapsed = now.elapsed();

        let mwps = WORDS as f32 / elapsed.as_secs_f32() / 1_000_000.0;
        println!("{:<16} {:>8.1} M words/sec", $label.cyan(), mwps);
    }};
}

fn bench_roll(expression: &str) {
    let dice: DiceRoll = expression.parse().unwrap();
    let mut rng = Xoshiro256PlusPlus::new(42);

    let now = Instant::now();
    for _ in 0..ROLLS {
        black_box(dice.roll(&mut rng));
    }
    let elapsed = now.elapsed();

    let mrps = ROLLS as f32 / elapsed.as_secs_f32() / 1_000_000.0;
    println!("{:<16} {:>8.1} M rolls/sec", expression.cyan(), mrps);
}

fn main() {
    println!("{}", "Generator throughput".bold());
    bench_engine!("xoshiro256++", Xoshiro256PlusPlus);
    bench_engine!("xoshiro256**", Xoshiro256StarStar);
    bench_engine!("xoshiro256+", Xoshiro256Plus);
    bench_engine!("xoroshiro128++", Xoroshiro128PlusPlus);
    bench_engine!("xoroshiro128**", Xoroshiro128StarStar);
    bench_engine!("xoroshiro128+", Xoroshiro128Plus);
    bench_engine!("xoshiro128++", Xoshiro128PlusPlus);
    bench_engine!("xoshiro128**", Xoshiro128StarStar);
    bench_engine!("xoshiro128+", Xoshiro128Plus);
    bench_engine!("xoroshiro64**", Xoroshiro64StarStar);
    bench_engine!("xoroshiro64*", Xoroshiro64Star);

    println!();
    println!("{}", "Dice sampling (xoshiro256++)".bold());
    bench_roll("3d6 + 1");
    bench_roll("1d100");
    bench_roll("1d4-1");
    bench_roll("100d2");
}
