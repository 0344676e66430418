// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};

use crate::{Error, Result};

/// Primes used to encode a card rank, indexed by rank strength.
const PRIMES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// A Poker card.
///
/// A card is represented using the encoding in the [Cactus Kev's][kevlink] Poker
/// hand evaluator with each card having the following format:
///
/// ```text
///   +--------+--------+--------+--------+
///   |xxxbbbbb|bbbbbbbb|cdhsrrrr|xxpppppp|
///   +--------+--------+--------+--------+
///   p = prime number of rank strength (deuce=2,trey=3,four=5,...,ace=41)
///   r = rank ordinal (ace=0,deuce=1,trey=2,...,king=12)
///   cdhs = suit of card
///   b = bit turned on depending on rank strength (deuce=bit 0,...,ace=bit 12)
/// ```
///
/// [kevlink]: http://suffe.cool/poker/evaluator.html
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct Card(u32);

impl Card {
    /// Create a card given a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        let strength = rank.strength() as u32;
        let ordinal = rank.ordinal() as u32;
        let prime = PRIMES[strength as usize];
        Self(prime | (ordinal << 8) | ((suit as u32) << 12) | (1 << (strength + 16)))
    }

    /// Parses concatenated card labels, for example `"AcAdAh"`.
    pub fn parse_many(s: &str) -> Result<Vec<Card>> {
        let chars = s.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>();
        if chars.len() % 2 != 0 {
            return Err(Error::InvalidFormat(format!("odd number of labels in '{s}'")));
        }

        chars
            .chunks(2)
            .map(|pair| Ok(Card::new(Rank::from_label(pair[0])?, Suit::from_label(pair[1])?)))
            .collect()
    }

    /// This card unique id.
    pub fn id(&self) -> u32 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.suit_bits() {
            0x8 => Suit::Clubs,
            0x4 => Suit::Diamonds,
            0x2 => Suit::Hearts,
            0x1 => Suit::Spades,
            _ => unreachable!("invalid suit bits 0x{:x}", self.0),
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::ALL[self.rank_bits() as usize]
    }

    /// Returns the rank ordinal bits.
    #[inline]
    pub fn rank_bits(&self) -> u8 {
        ((self.0 >> 8) & 0xf) as u8
    }

    /// Returns the suit bits.
    #[inline]
    pub fn suit_bits(&self) -> u8 {
        ((self.0 >> 12) & 0xf) as u8
    }

    /// Returns the rank prime.
    #[inline]
    pub fn prime(&self) -> u32 {
        self.0 & 0x3f
    }

    /// Returns the rank bit, bit 0 for deuces up to bit 12 for aces.
    #[inline]
    pub fn strength_bit(&self) -> u16 {
        (self.0 >> 16) as u16
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => {
                Ok(Card::new(Rank::from_label(rank)?, Suit::from_label(suit)?))
            }
            _ => Err(Error::InvalidFormat(format!("invalid card '{s}'"))),
        }
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Card rank.
///
/// The discriminant is the rank ordinal with aces first, ranks compare by
/// playing strength with aces high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rank {
    /// Ace
    Ace = 0,
    /// Deuce
    Deuce,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
}

impl Rank {
    /// Rank labels in ordinal order.
    pub const LABELS: [char; 13] = ['A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K'];

    /// Ranks in ordinal order.
    const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Ace, Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King,
        ]
    };

    /// Returns all ranks in ordinal order, aces first.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// The rank ordinal, 0 for aces up to 12 for kings.
    #[inline]
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// The playing strength, 0 for deuces up to 12 for aces.
    #[inline]
    pub fn strength(self) -> u8 {
        match self {
            Rank::Ace => 12,
            r => r as u8 - 1,
        }
    }

    /// Returns the rank with the given playing strength.
    ///
    /// Panics if strength is greater than 12.
    pub fn from_strength(strength: u8) -> Rank {
        assert!(strength <= 12, "strength={strength} must be <= 12");
        Self::ALL[(strength as usize + 1) % 13]
    }

    /// The rank label.
    pub fn label(self) -> char {
        Self::LABELS[self as usize]
    }

    /// Parses a rank label.
    pub fn from_label(label: char) -> Result<Rank> {
        Self::LABELS
            .iter()
            .position(|&l| l == label)
            .map(|idx| Self::ALL[idx])
            .ok_or_else(|| Error::InvalidFormat(format!("invalid rank label '{label}'")))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength().cmp(&other.strength())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Card suit.
///
/// Suits have no ordering, they only matter for flushes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Suit {
    /// Clubs suit.
    Clubs = 8,
    /// Diamonds suit.
    Diamonds = 4,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 1,
}

impl Suit {
    /// Suit labels in [Suit::suits] order.
    pub const LABELS: [char; 4] = ['c', 'd', 'h', 's'];

    const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::ALL.into_iter()
    }

    /// The suit label.
    pub fn label(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    /// The suit display glyph.
    pub fn glyph(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    /// Parses a suit label.
    pub fn from_label(label: char) -> Result<Suit> {
        Self::LABELS
            .iter()
            .position(|&l| l == label)
            .map(|idx| Self::ALL[idx])
            .ok_or_else(|| Error::InvalidFormat(format!("invalid suit label '{label}'")))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
