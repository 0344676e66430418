// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Deals a hand street by street and shows the winners:
//
// ```bash
// $ cargo r --example showdown -- --players 4 --seed 42
// ```
use anyhow::Result;
use clap::Parser;
use log::info;
use rand::{SeedableRng, rngs::StdRng};

use holdem_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The number of players.
    #[clap(long, short, default_value_t = 3, value_parser = clap::value_parser!(u8).range(2..=9))]
    players: u8,
    /// The deck shuffle seed, random if not set.
    #[clap(long, short)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut deck = Deck::new();
    deck.shuffle(&mut rng)?;

    let holes = (0..cli.players)
        .map(|_| deck.pop_hole())
        .collect::<Result<Vec<_>, _>>()?;

    for (player, hole) in holes.iter().enumerate() {
        info!("Player {} {} {}", player + 1, hole[0], hole[1]);
    }

    let mut board = Board::preflop();
    for street in [Street::Flop, Street::Turn, Street::River] {
        board = board.convert_from_deck(street, &mut deck)?;
        let label = format!("{street}:");
        info!("{label:<8}{board}");
    }

    let mut values = Vec::with_capacity(holes.len());
    for (player, hole) in holes.iter().enumerate() {
        let mut cards = hole.to_vec();
        cards.extend_from_slice(board.cards());

        let (value, best) = HandValue::eval_with_best_hand(&cards)?;
        let best = best.map(|c| c.to_string()).join(" ");
        let label = value.to_string();
        println!("Player {} {label:<24} {best}", player + 1);
        values.push(value);
    }

    if let Some(top) = values.iter().max() {
        let winners = values
            .iter()
            .enumerate()
            .filter(|(_, v)| *v == top)
            .map(|(player, _)| (player + 1).to_string())
            .collect::<Vec<_>>();
        println!("Winners: {}", winners.join(", "));
    }

    Ok(())
}
