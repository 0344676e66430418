// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Texas Hold'em hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. The evaluator finds the
//! best 5 cards out of the hand and returns a [HandValue] that orders hands
//! by category and kickers, equal values are split pots.
//!
//! To use the evaluator deal some cards and compare their values:
//!
//! ```
//! # use holdem_eval::*;
//! let mut deck = Deck::new();
//! let board = Board::river(Card::parse_many("AsKsQh7d2c").unwrap().try_into().unwrap());
//!
//! let mut hand = |hole: &str| {
//!     let mut cards = deck.pop_cards(Card::parse_many(hole).unwrap()).unwrap();
//!     cards.extend_from_slice(board.cards());
//!     HandValue::eval(&cards).unwrap()
//! };
//!
//! let aces = hand("AhAd");
//! let straight = hand("JcTc");
//! assert_eq!(aces.rank(), HandRank::ThreeOfAKind);
//! assert_eq!(straight.rank(), HandRank::Straight);
//! assert!(straight > aces);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandValue};

// Reexport cards types.
pub use holdem_cards::{Board, Card, Deck, Error, Rank, Result, Street, Suit};
