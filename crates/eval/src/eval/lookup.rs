// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Lookup tables 5 cards classifier.
//!
//! Follows the [Cactus Kev's][kevlink] approach: flushes are looked up by their
//! 13 rank bits, every other hand by the product of the cards rank primes that
//! is unique for each ranks multiset. The tables are built once from the
//! [reference](super::reference) classifier the first time they are used.
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
use ahash::AHashMap;
use log::debug;
use std::{sync::LazyLock, time::Instant};

use super::{HandValue, reference};
use crate::{Card, Rank, Suit};

/// Number of distinct flush ranks.
const NUM_FLUSHES: usize = 1_287;

/// Number of distinct non flush ranks multisets.
const NUM_PRODUCTS: usize = 6_175;

static TABLES: LazyLock<Tables> = LazyLock::new(Tables::build);

struct Tables {
    /// Flush values indexed by the hand rank bits.
    flushes: Vec<Option<HandValue>>,
    /// Non flush values by rank primes product.
    products: AHashMap<u32, HandValue>,
}

impl Tables {
    fn build() -> Tables {
        let now = Instant::now();
        let mut flushes = vec![None; 1 << 13];
        let mut products = AHashMap::with_capacity(NUM_PRODUCTS);

        // Every multiset of 5 ranks as non decreasing strengths.
        for s1 in 0..13u8 {
            for s2 in s1..13 {
                for s3 in s2..13 {
                    for s4 in s3..13 {
                        for s5 in s4..13 {
                            let strengths = [s1, s2, s3, s4, s5];

                            if s1 == s5 {
                                // Five of a kind.
                                continue;
                            }

                            let hand = unsuited_hand(strengths);
                            let product = hand.iter().map(|c| c.prime()).product::<u32>();
                            products.insert(product, reference::classify(&hand));

                            if s1 < s2 && s2 < s3 && s3 < s4 && s4 < s5 {
                                let hand = strengths.map(|s| Card::new(Rank::from_strength(s), Suit::Spades));
                                let bits = hand.iter().fold(0, |m, c| m | c.strength_bit());
                                flushes[bits as usize] = Some(reference::classify(&hand));
                            }
                        }
                    }
                }
            }
        }

        let num_flushes = flushes.iter().flatten().count();
        debug_assert_eq!(num_flushes, NUM_FLUSHES);
        debug_assert_eq!(products.len(), NUM_PRODUCTS);

        debug!(
            "Built lookup tables with {num_flushes} flushes and {} products in {:.3}ms",
            products.len(),
            now.elapsed().as_secs_f64() * 1000.0
        );

        Tables { flushes, products }
    }
}

/// Builds a hand with the given rank strengths that is not a flush.
fn unsuited_hand(strengths: [u8; 5]) -> [Card; 5] {
    const SUITS: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    // Repeated ranks take the next suit, so only 5 distinct ranks share a suit.
    let mut hand = [Card::new(Rank::Ace, Suit::Clubs); 5];
    for (idx, &s) in strengths.iter().enumerate() {
        let repeats = strengths[..idx].iter().filter(|&&p| p == s).count();
        hand[idx] = Card::new(Rank::from_strength(s), SUITS[repeats]);
    }

    if hand.iter().all(|c| c.suit() == Suit::Clubs) {
        hand[4] = Card::new(hand[4].rank(), Suit::Diamonds);
    }

    hand
}

/// Forces the tables initialization.
pub fn init() {
    LazyLock::force(&TABLES);
}

/// Classifies a 5 cards hand.
pub fn classify(cards: &[Card; 5]) -> HandValue {
    let tables = &*TABLES;

    let suits = cards.iter().fold(0xf, |m, c| m & c.suit_bits());
    if suits != 0 {
        let bits = cards.iter().fold(0, |m, c| m | c.strength_bit());
        if let Some(value) = tables.flushes[bits as usize] {
            return value;
        }
    }

    let product = cards.iter().map(|c| c.prime()).product::<u32>();
    match tables.products.get(&product) {
        Some(value) => *value,
        // Only reachable with repeated cards.
        None => reference::classify(cards),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    use crate::{Deck, HandRank};

    #[test]
    fn tables_size() {
        init();
        assert_eq!(TABLES.flushes.iter().flatten().count(), NUM_FLUSHES);
        assert_eq!(TABLES.products.len(), NUM_PRODUCTS);

        let straight_flushes = TABLES
            .flushes
            .iter()
            .flatten()
            .filter(|v| v.rank() == HandRank::StraightFlush)
            .count();
        assert_eq!(straight_flushes, 10);
    }

    #[test]
    fn unsuited_hands() {
        let hand = unsuited_hand([0, 1, 2, 3, 5]);
        assert!(hand.iter().any(|c| c.suit() != hand[0].suit()));

        let hand = unsuited_hand([12, 12, 12, 12, 11]);
        let suits = hand[..4].iter().map(|c| c.suit()).collect::<Vec<_>>();
        assert_eq!(
            suits,
            [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
        );
    }

    // Goes through all 2.6M hands, slow in debug mode.
    #[test]
    fn same_as_reference() {
        Deck::default().for_each(5, |hand| {
            let hand = [hand[0], hand[1], hand[2], hand[3], hand[4]];
            assert_eq!(classify(&hand), reference::classify(&hand), "{hand:?}");
        });
    }

    #[test]
    fn same_as_reference_seven_cards() {
        let mut rng = StdRng::seed_from_u64(101);

        for _ in 0..10_000 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let cards = (0..7).map(|_| deck.pop().unwrap()).collect::<Vec<_>>();
            assert_eq!(
                HandValue::eval(&cards),
                HandValue::eval_reference(&cards),
                "{cards:?}"
            );
        }
    }
}
