// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Errors returned by cards, deck, board and evaluator operations.
use thiserror::Error;

use crate::Card;

/// Cards error.
///
/// Every variant reports a misuse by the caller, nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed card, rank or suit text.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Wrong number of cards or duplicated cards.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The operation is not allowed in the current state.
    #[error("Illegal state: {0}")]
    IllegalState(String),
    /// The requested card has already been dealt.
    #[error("Card {0} already dealt")]
    AlreadyDealt(Card),
    /// No cards left in the deck.
    #[error("No cards left in the deck")]
    Exhausted,
}

/// Cards result type.
pub type Result<T> = std::result::Result<T, Error>;
