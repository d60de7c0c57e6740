use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use sift_heap::heap;

#[derive(Parser)]
#[command(name = "heap-example", about = "Push shuffled values onto a binary heap and drain it")]
struct Args {
    /// Push the values 1..=count
    #[arg(long, default_value_t = 20)]
    count: u64,
    /// Seed for the shuffle and mutations; random if absent
    #[arg(long)]
    seed: Option<u64>,
    /// Number of in-place mutations repaired with `fix` before draining
    #[arg(long = "fix-rounds", default_value_t = 0)]
    fix_rounds: usize,
}

fn fill_heap(count: u64, rng: &mut impl RngCore) -> Vec<u64> {
    let mut values: Vec<u64> = (1..=count).collect();
    values.shuffle(rng);
    info!(?values, "push order");
    let mut h = Vec::with_capacity(values.len());
    for v in values {
        heap::push(&mut h, v);
    }
    h
}

fn mutate_and_fix(h: &mut Vec<u64>, rounds: usize, rng: &mut impl RngCore) {
    for round in 0..rounds {
        if h.is_empty() {
            return;
        }
        let index = rng.gen_range(0, h.len());
        let old = h[index];
        h[index] = if round % 2 == 0 { old.saturating_mul(2) } else { old / 2 };
        info!(index, old, new = h[index], "mutated");
        if let Err(e) = heap::fix(h, index) {
            error!(%e, "fix failed");
        }
    }
}

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    let mut h = fill_heap(args.count, &mut rng);
    mutate_and_fix(&mut h, args.fix_rounds, &mut rng);
    if !heap::is_heap(&h) {
        error!("heap invariant does not hold before draining");
    }

    let mut drained = Vec::with_capacity(h.len());
    while let Ok(v) = heap::pop(&mut h) {
        drained.push(v);
    }
    for v in drained.iter() {
        print!("{} ", v);
    }
    println!();
    if drained.windows(2).any(|w| w[0] > w[1]) {
        error!("values did not come out in ascending order");
    }
}
