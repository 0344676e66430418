// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A cards deck with a dealing cursor.
use log::debug;
use rand::prelude::*;

use crate::{Card, Error, Rank, Result, Suit};

/// A cards Deck.
///
/// The deck always holds all 52 cards, a cursor splits them into a dealt prefix
/// and an available suffix. Dealing moves the cursor forward, so a card can be
/// dealt only once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a deck in canonical order, suit by suit with aces first.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Shuffles the deck using the given random source.
    ///
    /// Fails if any card has been dealt.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        if self.cursor > 0 {
            return Err(Error::IllegalState(format!(
                "cannot shuffle after {} cards have been dealt",
                self.cursor
            )));
        }

        self.cards.shuffle(rng);
        debug!("Shuffled deck, top card {}", self.cards[0]);
        Ok(())
    }

    /// Deals the card at the cursor.
    pub fn pop(&mut self) -> Result<Card> {
        let card = self.peek()?;
        self.cursor += 1;
        Ok(card)
    }

    /// Deals a specific card.
    ///
    /// The card is swapped with the card at the cursor and then dealt, the
    /// other available cards keep their positions.
    pub fn pop_card(&mut self, card: Card) -> Result<Card> {
        let idx = self.position(card);
        if idx < self.cursor {
            return Err(Error::AlreadyDealt(card));
        }

        self.cards.swap(idx, self.cursor);
        self.pop()
    }

    /// Deals the given cards in order.
    ///
    /// This is not transactional, if a card fails to deal the cards before it
    /// stay dealt.
    pub fn pop_cards<I>(&mut self, cards: I) -> Result<Vec<Card>>
    where
        I: IntoIterator<Item = Card>,
    {
        cards.into_iter().map(|c| self.pop_card(c)).collect()
    }

    /// Deals two hole cards.
    pub fn pop_hole(&mut self) -> Result<[Card; 2]> {
        if self.remaining() < 2 {
            return Err(Error::Exhausted);
        }

        Ok([self.pop()?, self.pop()?])
    }

    /// Returns the card at the cursor without dealing it.
    pub fn peek(&self) -> Result<Card> {
        self.cards.get(self.cursor).copied().ok_or(Error::Exhausted)
    }

    /// Number of cards that can still be dealt.
    pub fn remaining(&self) -> usize {
        Self::SIZE - self.cursor
    }

    /// Checks if all cards have been dealt.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Checks if a card has been dealt.
    pub fn dealt(&self, card: Card) -> bool {
        self.position(card) < self.cursor
    }

    /// All the deck cards in their current order, dealt cards first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The dealt cards in dealing order.
    pub fn dealt_cards(&self) -> &[Card] {
        &self.cards[..self.cursor]
    }

    /// The cards that can still be dealt in dealing order.
    pub fn available(&self) -> &[Card] {
        &self.cards[self.cursor..]
    }

    /// Calls the `f` closure for each k-cards hand from the available cards.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let cards = self.available();
        if k > cards.len() {
            return;
        }

        // Indices of the current combination in lexicographic order.
        let n = cards.len();
        let mut idx = (0..k).collect::<Vec<_>>();
        let mut hand = idx.iter().map(|&i| cards[i]).collect::<Vec<_>>();

        loop {
            f(&hand);

            // Find the rightmost index that can still move right.
            let Some(pos) = (0..k).rev().find(|&p| idx[p] < n - k + p) else {
                break;
            };

            idx[pos] += 1;
            hand[pos] = cards[idx[pos]];
            for p in (pos + 1)..k {
                idx[p] = idx[p - 1] + 1;
                hand[p] = cards[idx[p]];
            }
        }
    }

    fn position(&self, card: Card) -> usize {
        // A deck always holds every card.
        self.cards
            .iter()
            .position(|c| *c == card)
            .unwrap_or(Self::SIZE)
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards, cursor: 0 }
    }
}
