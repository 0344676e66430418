// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Reference 5 cards classifier.
//!
//! Classifies a hand by counting ranks and checking each category from the
//! strongest to the weakest. It is slow but easy to check by hand, the lookup
//! tables are built from it.
use super::{HandRank, HandValue};
use crate::{Card, Rank};

/// The A-2-3-4-5 rank bits.
const WHEEL: u16 = 0b1_0000_0000_1111;

/// Five consecutive rank bits.
const STRAIGHT: u16 = 0b1_1111;

/// Classifies a 5 cards hand.
pub fn classify(cards: &[Card; 5]) -> HandValue {
    let suit = cards[0].suit();
    let is_flush = cards.iter().all(|c| c.suit() == suit);
    let straight = straight_top(cards.iter().fold(0, |m, c| m | c.strength_bit()));

    let mut counts = [0u8; 13];
    for c in cards {
        counts[c.rank().strength() as usize] += 1;
    }

    // Groups of equal ranks by size and then by strength.
    let mut groups = (0..13u8)
        .rev()
        .filter(|&s| counts[s as usize] > 0)
        .map(|s| (counts[s as usize], Rank::from_strength(s)))
        .collect::<Vec<_>>();
    groups.sort_by(|a, b| b.0.cmp(&a.0));

    let shape = groups.iter().map(|(n, _)| *n).collect::<Vec<_>>();
    let key = groups.iter().map(|(_, r)| *r).collect::<Vec<_>>();

    match (is_flush, straight, shape.as_slice()) {
        (true, Some(top), _) => HandValue::new(HandRank::StraightFlush, &[top]),
        (_, _, [4, 1]) => HandValue::new(HandRank::FourOfAKind, &key),
        (_, _, [3, 2]) => HandValue::new(HandRank::FullHouse, &key),
        (true, None, [1, 1, 1, 1, 1]) => HandValue::new(HandRank::Flush, &key),
        (false, Some(top), _) => HandValue::new(HandRank::Straight, &[top]),
        (_, _, [3, 1, 1]) => HandValue::new(HandRank::ThreeOfAKind, &key),
        (_, _, [2, 2, 1]) => HandValue::new(HandRank::TwoPair, &key),
        (_, _, [2, 1, 1, 1]) => HandValue::new(HandRank::OnePair, &key),
        _ => HandValue::new(HandRank::HighCard, &key),
    }
}

/// Returns the top rank if the rank bits make a straight.
///
/// The ace is either high or low, the wheel is checked only when the bits
/// are not five consecutive ranks.
fn straight_top(bits: u16) -> Option<Rank> {
    if bits.count_ones() != 5 {
        return None;
    }

    let low = bits.trailing_zeros();
    if bits >> low == STRAIGHT {
        Some(Rank::from_strength(low as u8 + 4))
    } else if bits == WHEEL {
        Some(Rank::Five)
    } else {
        None
    }
}
