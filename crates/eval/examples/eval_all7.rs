// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Evaluates every 7 cards hand and prints the number of hands per category:
//
// ```bash
// $ RUST_LOG=debug cargo r --release --example eval_all7
// ...
// Total hands      133784560
//
// High Card:       23294460
// One Pair:        58627800
// Two Pair:        31433400
// Three of a Kind: 6461620
// Straight:        6180020
// Flush:           4047644
// Full House:      3473184
// Four of a Kind:  224848
// Straight Flush:  41584
// ```
use anyhow::Result;
use std::time::Instant;

use holdem_eval::{eval::lookup, *};

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    // Build the tables before timing.
    lookup::init();

    let now = Instant::now();
    let mut counts = [0usize; 9];
    let mut error = None;

    Deck::default().for_each(7, |hand| match HandValue::eval(hand) {
        Ok(value) => counts[value.rank() as usize] += 1,
        Err(e) => error = Some(e),
    });

    if let Some(e) = error {
        return Err(e.into());
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks() {
        let label = format!("{rank}:");
        println!("{label:<17}{}", counts[rank as usize]);
    }

    Ok(())
}
