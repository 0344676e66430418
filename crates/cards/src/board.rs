// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Community cards and betting streets.
use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Card, Deck, Error, Result};

/// A betting street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Street {
    /// No community cards.
    Preflop,
    /// Three community cards.
    Flop,
    /// Four community cards.
    Turn,
    /// Five community cards.
    River,
}

impl Street {
    /// Returns all streets in dealing order.
    pub fn streets() -> impl DoubleEndedIterator<Item = Street> {
        [Street::Preflop, Street::Flop, Street::Turn, Street::River].into_iter()
    }

    /// The number of community cards on this street.
    pub const fn num_cards(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    /// The street with the given number of community cards.
    pub fn from_num_cards(n: usize) -> Option<Street> {
        Self::streets().find(|s| s.num_cards() == n)
    }

    /// The following street, none after the river.
    pub fn next(self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }

    /// The previous street, none before the preflop.
    pub fn prev(self) -> Option<Street> {
        match self {
            Street::Preflop => None,
            Street::Flop => Some(Street::Preflop),
            Street::Turn => Some(Street::Flop),
            Street::River => Some(Street::Turn),
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let street = match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        };

        write!(f, "{street}")
    }
}

/// The board community cards.
///
/// A board is immutable, moving to another street creates a new board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "Vec<Card>", try_from = "Vec<Card>")
)]
pub struct Board {
    street: Street,
    cards: Vec<Card>,
}

impl Board {
    /// Creates a board with the street given by the number of cards.
    pub fn new(cards: &[Card]) -> Result<Self> {
        let street = Street::from_num_cards(cards.len()).ok_or_else(|| {
            Error::InvalidArgument(format!("no street has {} board cards", cards.len()))
        })?;

        Ok(Self {
            street,
            cards: cards.to_vec(),
        })
    }

    /// Creates a board for a street, the cards must match the street.
    pub fn with_street(street: Street, cards: &[Card]) -> Result<Self> {
        if cards.len() != street.num_cards() {
            return Err(Error::InvalidArgument(format!(
                "{street} needs {} cards, got {}",
                street.num_cards(),
                cards.len()
            )));
        }

        Ok(Self {
            street,
            cards: cards.to_vec(),
        })
    }

    /// An empty preflop board.
    pub fn preflop() -> Self {
        Self {
            street: Street::Preflop,
            cards: Vec::new(),
        }
    }

    /// A flop board.
    pub fn flop(cards: [Card; 3]) -> Self {
        Self {
            street: Street::Flop,
            cards: cards.to_vec(),
        }
    }

    /// A turn board.
    pub fn turn(cards: [Card; 4]) -> Self {
        Self {
            street: Street::Turn,
            cards: cards.to_vec(),
        }
    }

    /// A river board.
    pub fn river(cards: [Card; 5]) -> Self {
        Self {
            street: Street::River,
            cards: cards.to_vec(),
        }
    }

    /// Deals a board for a street from the deck.
    ///
    /// Fails without dealing if the deck doesn't have enough cards.
    pub fn deal(deck: &mut Deck, street: Street) -> Result<Self> {
        Self::preflop().convert_from_deck(street, deck)
    }

    /// The board street.
    pub fn street(&self) -> Street {
        self.street
    }

    /// The board cards in dealing order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The number of board cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if this is a preflop board.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Moves the board back to an earlier or equal street dropping the
    /// trailing cards.
    pub fn convert(&self, street: Street) -> Result<Self> {
        self.convert_with(street, &[])
    }

    /// Moves the board to a street appending the given cards.
    ///
    /// Without cards this truncates the board, with cards the board plus the
    /// cards must match the street.
    pub fn convert_with(&self, street: Street, cards: &[Card]) -> Result<Self> {
        let board = if cards.is_empty() {
            if street.num_cards() > self.len() {
                return Err(Error::InvalidArgument(format!(
                    "cannot move {} cards {} board to {street} without new cards",
                    self.len(),
                    self.street
                )));
            }

            Self {
                street,
                cards: self.cards[..street.num_cards()].to_vec(),
            }
        } else {
            if self.len() + cards.len() != street.num_cards() {
                return Err(Error::InvalidArgument(format!(
                    "{street} needs {} cards, got {} board and {} new cards",
                    street.num_cards(),
                    self.len(),
                    cards.len()
                )));
            }

            let mut all = self.cards.clone();
            all.extend_from_slice(cards);
            Self { street, cards: all }
        };

        trace!("Converted {} board to {}", self.street, board.street);
        Ok(board)
    }

    /// Moves the board to a street dealing any missing cards from the deck.
    ///
    /// Fails without dealing if the deck doesn't have enough cards.
    pub fn convert_from_deck(&self, street: Street, deck: &mut Deck) -> Result<Self> {
        let missing = street.num_cards().saturating_sub(self.len());
        if missing > deck.remaining() {
            return Err(Error::Exhausted);
        }

        let cards = (0..missing)
            .map(|_| deck.pop())
            .collect::<Result<Vec<_>>>()?;
        self.convert_with(street, &cards)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::preflop()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(&Card::parse_many(s)?)
    }
}

impl From<Board> for Vec<Card> {
    fn from(board: Board) -> Self {
        board.cards
    }
}

impl TryFrom<Vec<Card>> for Board {
    type Error = Error;

    fn try_from(cards: Vec<Card>) -> Result<Self> {
        Self::new(&cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::{SeedableRng, rngs::StdRng};

    fn cards(s: &str) -> Vec<Card> {
        Card::parse_many(s).unwrap()
    }

    #[test]
    fn street_num_cards() {
        let counts = Street::streets().map(|s| s.num_cards()).collect::<Vec<_>>();
        assert_eq!(counts, [0, 3, 4, 5]);

        for street in Street::streets() {
            assert_eq!(Street::from_num_cards(street.num_cards()), Some(street));
        }

        for n in [1, 2, 6, 7] {
            assert_eq!(Street::from_num_cards(n), None);
        }

        assert_eq!(Street::Preflop.next(), Some(Street::Flop));
        assert_eq!(Street::River.next(), None);
        assert_eq!(Street::Turn.prev(), Some(Street::Flop));
        assert_eq!(Street::Preflop.prev(), None);
    }

    #[test]
    fn board_street() {
        let board = Board::new(&cards("AcAdAh")).unwrap();
        assert_eq!(board.street(), Street::Flop);
        assert_eq!(board.cards(), cards("AcAdAh"));

        assert_eq!(Board::new(&[]).unwrap().street(), Street::Preflop);
        assert_eq!(Board::new(&cards("AcAdAhAs")).unwrap().street(), Street::Turn);
        assert_eq!(Board::new(&cards("AcAdAhAsKd")).unwrap().street(), Street::River);
    }

    #[test]
    fn wrong_number_of_cards() {
        for s in ["As", "AsAh", "AsAhAdAcKdKh"] {
            assert!(matches!(
                Board::new(&cards(s)),
                Err(Error::InvalidArgument(_))
            ));
        }

        // Four cards are not a flop.
        assert!(matches!(
            Board::with_street(Street::Flop, &cards("AcAdAhAs")),
            Err(Error::InvalidArgument(_))
        ));

        let board = Board::with_street(Street::Turn, &cards("AcAdAhAs")).unwrap();
        assert_eq!(board, Board::new(&cards("AcAdAhAs")).unwrap());
    }

    #[test]
    fn board_conversion() {
        let flop = Board::new(&cards("AcAdAh")).unwrap();

        // flop -> turn
        let turn = flop.convert_with(Street::Turn, &cards("As")).unwrap();
        assert_eq!(turn.street(), Street::Turn);
        assert_eq!(turn.cards(), cards("AcAdAhAs"));

        // turn -> river
        let river = turn.convert_with(Street::River, &cards("Kh")).unwrap();
        assert_eq!(river.street(), Street::River);
        assert_eq!(river.cards(), cards("AcAdAhAsKh"));

        // river -> turn
        let back = river.convert(Street::Turn).unwrap();
        assert_eq!(back, turn);

        // turn -> flop
        assert_eq!(turn.convert(Street::Flop).unwrap(), flop);
        assert_eq!(river.convert(Street::Preflop).unwrap(), Board::preflop());
        assert_eq!(flop.convert(Street::Flop).unwrap(), flop);

        // The original boards are untouched.
        assert_eq!(flop.cards(), cards("AcAdAh"));
        assert_eq!(turn.cards(), cards("AcAdAhAs"));
    }

    #[test]
    fn board_round_trip() {
        let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(21));
        let flop = Board::deal(&mut deck, Street::Flop).unwrap();

        while !deck.is_empty() {
            let c4 = deck.pop().unwrap();
            let turn = flop.convert_with(Street::Turn, &[c4]).unwrap();
            assert_eq!(turn.convert(Street::Flop).unwrap(), flop);
        }
    }

    #[test]
    fn illegal_conversion() {
        let turn = Board::new(&cards("AcAdAhAs")).unwrap();
        assert!(matches!(
            turn.convert(Street::River),
            Err(Error::InvalidArgument(_))
        ));

        // Too many new cards.
        assert!(matches!(
            turn.convert_with(Street::River, &cards("KhKd")),
            Err(Error::InvalidArgument(_))
        ));

        // New cards on an earlier street.
        assert!(matches!(
            turn.convert_with(Street::Flop, &cards("Kh")),
            Err(Error::InvalidArgument(_))
        ));

        // Too few new cards.
        let flop = turn.convert(Street::Flop).unwrap();
        assert!(matches!(
            flop.convert_with(Street::River, &cards("Kh")),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn board_deal() {
        let board = Board::deal(&mut Deck::new(), Street::River).unwrap();
        let mut comparison = Deck::new();
        for card in board.cards() {
            assert_eq!(comparison.pop().unwrap(), *card);
        }

        let mut deck = Deck::new();
        let flop = Board::deal(&mut deck, Street::Flop).unwrap();
        assert_eq!(flop.street(), Street::Flop);
        assert_eq!(deck.remaining(), Deck::SIZE - 3);

        let river = flop.convert_from_deck(Street::River, &mut deck).unwrap();
        assert_eq!(river.cards(), cards("Ac2c3c4c5c"));
        assert_eq!(deck.remaining(), Deck::SIZE - 5);

        // Moving back doesn't deal.
        let turn = river.convert_from_deck(Street::Turn, &mut deck).unwrap();
        assert_eq!(turn.cards(), cards("Ac2c3c4c"));
        assert_eq!(deck.remaining(), Deck::SIZE - 5);

        let preflop = Board::deal(&mut deck, Street::Preflop).unwrap();
        assert!(preflop.is_empty());
        assert_eq!(deck.remaining(), Deck::SIZE - 5);
    }

    #[test]
    fn board_deal_exhausted() {
        let mut deck = Deck::new();
        while deck.remaining() > 2 {
            deck.pop().unwrap();
        }

        assert_eq!(Board::deal(&mut deck, Street::Flop), Err(Error::Exhausted));
        assert_eq!(deck.remaining(), 2);
    }

    #[test]
    fn board_equality() {
        let a = Board::new(&cards("AsTd3h")).unwrap();
        let b: Board = "AsTd3h".parse().unwrap();
        let c = Board::new(&cards("TdAs3h")).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Board::preflop());

        let set = [a.clone(), b, c].into_iter().collect::<HashSet<_>>();
        assert_eq!(set.len(), 2);

        assert_eq!(a.to_string(), "As Td 3h");
        assert_eq!(Board::preflop().to_string(), "");
    }

    #[test]
    fn board_constructors() {
        let [a, b, c, d, e] = ["As", "Ah", "Ad", "Ac", "Kd"].map(|s| s.parse::<Card>().unwrap());
        assert_eq!(Board::flop([a, b, c]).street(), Street::Flop);
        assert_eq!(Board::turn([a, b, c, d]).street(), Street::Turn);
        assert_eq!(Board::river([a, b, c, d, e]).street(), Street::River);
        assert_eq!(Board::default(), Board::preflop());
    }
}
