// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand value and rank types.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{lookup, reference};
use crate::{Card, Error, Rank, Result};

/// The hand rank category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    const ALL: [HandRank; 9] = [
        HandRank::HighCard,
        HandRank::OnePair,
        HandRank::TwoPair,
        HandRank::ThreeOfAKind,
        HandRank::Straight,
        HandRank::Flush,
        HandRank::FullHouse,
        HandRank::FourOfAKind,
        HandRank::StraightFlush,
    ];

    /// Returns all hand ranks from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        Self::ALL.into_iter()
    }

    /// The number of ranks in the tie-break key for this category.
    pub fn key_len(self) -> usize {
        match self {
            HandRank::HighCard | HandRank::Flush => 5,
            HandRank::OnePair => 4,
            HandRank::TwoPair | HandRank::ThreeOfAKind => 3,
            HandRank::FullHouse | HandRank::FourOfAKind => 2,
            HandRank::Straight | HandRank::StraightFlush => 1,
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{rank}")
    }
}

/// A hand value, a greater value is a stronger hand.
///
/// The value packs the hand rank and the tie-break key, the ranks that decide
/// between hands of the same category ordered by multiplicity and strength:
///
/// ```text
///   +--------+--------+--------+--------+
///   |xxxxxxxx|hhhhaaaa|bbbbcccc|ddddeeee|
///   +--------+--------+--------+--------+
///   h = hand rank (high card=0,...,straight flush=8)
///   a..e = key ranks strength (deuce=0,...,ace=12), unused are zero
/// ```
///
/// Straights are keyed by their top card, the wheel A-2-3-4-5 by the five.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u32);

impl HandValue {
    /// Creates a value from a hand rank and its tie-break key.
    pub(crate) fn new(rank: HandRank, key: &[Rank]) -> Self {
        debug_assert_eq!(key.len(), rank.key_len(), "{rank} key {key:?}");

        let key = key.iter().enumerate().fold(0u32, |acc, (idx, r)| {
            acc | ((r.strength() as u32) << (16 - 4 * idx))
        });

        Self(((rank as u32) << 20) | key)
    }

    /// Evaluates a 5 to 7 cards hand.
    ///
    /// Fails if the number of cards is not 5 <= n <= 7 or a card is repeated.
    pub fn eval(cards: &[Card]) -> Result<Self> {
        Self::best_hand(cards, lookup::classify).map(|(value, _)| value)
    }

    /// Evaluates a 5 to 7 cards hand and returns the best five cards.
    ///
    /// Fails if the number of cards is not 5 <= n <= 7 or a card is repeated.
    pub fn eval_with_best_hand(cards: &[Card]) -> Result<(Self, [Card; 5])> {
        Self::best_hand(cards, lookup::classify)
    }

    /// Evaluates a 5 to 7 cards hand using the reference classifier.
    ///
    /// This is slower than [HandValue::eval] and returns the same values.
    pub fn eval_reference(cards: &[Card]) -> Result<Self> {
        Self::best_hand(cards, reference::classify).map(|(value, _)| value)
    }

    /// The hand rank.
    pub fn rank(&self) -> HandRank {
        HandRank::ALL[(self.0 >> 20) as usize]
    }

    /// The tie-break key ranks.
    pub fn ranks(&self) -> Vec<Rank> {
        (0..self.rank().key_len())
            .map(|idx| Rank::from_strength(((self.0 >> (16 - 4 * idx)) & 0xf) as u8))
            .collect()
    }

    /// The packed value.
    pub fn value(&self) -> u32 {
        self.0
    }

    fn best_hand<F>(cards: &[Card], classify: F) -> Result<(Self, [Card; 5])>
    where
        F: Fn(&[Card; 5]) -> HandValue,
    {
        if !(5..=7).contains(&cards.len()) {
            return Err(Error::InvalidArgument(format!(
                "cannot evaluate {} cards, need 5 to 7",
                cards.len()
            )));
        }

        for (idx, card) in cards.iter().enumerate() {
            if cards[..idx].contains(card) {
                return Err(Error::InvalidArgument(format!("card {card} is repeated")));
            }
        }

        let n = cards.len();
        let first = hand_from(cards, [0, 1, 2, 3, 4]);
        let mut best = (classify(&first), first);
        let mut hand = first;

        for c1 in 0..n {
            hand[0] = cards[c1];

            for c2 in (c1 + 1)..n {
                hand[1] = cards[c2];

                for c3 in (c2 + 1)..n {
                    hand[2] = cards[c3];

                    for c4 in (c3 + 1)..n {
                        hand[3] = cards[c4];

                        for c5 in (c4 + 1)..n {
                            hand[4] = cards[c5];

                            let value = classify(&hand);
                            if value > best.0 {
                                best = (value, hand);
                            }
                        }
                    }
                }
            }
        }

        Ok(best)
    }
}

fn hand_from(cards: &[Card], idx: [usize; 5]) -> [Card; 5] {
    idx.map(|i| cards[i])
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.rank())?;
        for rank in self.ranks() {
            write!(f, "{rank}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HandValue({self})")
    }
}
