// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator goes through every 5 cards subset of a 5, 6 or 7 cards hand
//! and keeps the best one. Subsets are classified with lookup tables in the
//! style of the [Cactus Kev's][kevlink] evaluator, a [reference] classifier that
//! checks each category in turn builds the tables and is kept to validate them.
//!
//! It provides a [HandValue::eval] method that computes a hand value and a
//! [HandValue::eval_with_best_hand] that also returns the five best cards,
//! useful for UIs to show a winning hand.
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
#[allow(clippy::module_inception)]
mod eval;
pub use eval::{HandRank, HandValue};

pub mod lookup;
pub mod reference;
