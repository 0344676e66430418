// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Texas Hold'em cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use holdem_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "Kd".parse().unwrap();
//! assert_eq!(kd.rank(), Rank::King);
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! a [Deck] type that deals cards without repetition:
//!
//! ```
//! # use holdem_cards::Deck;
//! # use rand::{SeedableRng, rngs::StdRng};
//! let mut deck = Deck::new();
//! deck.shuffle(&mut StdRng::seed_from_u64(42)).unwrap();
//!
//! let hole = deck.pop_hole().unwrap();
//! assert_eq!(deck.remaining(), 50);
//! assert!(deck.dealt(hole[0]));
//!
//! // No more shuffling once cards have been dealt.
//! assert!(deck.shuffle(&mut StdRng::seed_from_u64(42)).is_err());
//! ```
//!
//! and a [Board] type for the community cards on each [Street]:
//!
//! ```
//! # use holdem_cards::{Board, Deck, Street};
//! let mut deck = Deck::new();
//! let flop = Board::deal(&mut deck, Street::Flop).unwrap();
//! let turn = flop.convert_from_deck(Street::Turn, &mut deck).unwrap();
//! assert_eq!(turn.len(), 4);
//! assert_eq!(turn.convert(Street::Flop).unwrap(), flop);
//! ```
//!
//! The **`serde`** feature derives `Serialize` and `Deserialize` for the cards
//! types, cards serialize to their labels (`"Ah"`).
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod board;
mod card;
mod deck;
mod error;

pub use board::{Board, Street};
pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use error::{Error, Result};
