//! Ordered piles of cards and atomic movement between them.
//!
//! A `Pile` is a position-addressable sequence. Index 0 is the *front*: the
//! top of a deck, the leftmost card of a hand or field. Prompts number cards
//! from 1; everything in the engine is 0-based.
//!
//! Moving a card is a single call that validates the source position before
//! touching either pile, so a failed move leaves both piles untouched and a
//! successful one never leaves the card in two places.
//!
//! ## Usage
//!
//! ```
//! use duchess::cards::{Card, Rank, Suit};
//! use duchess::zones::{move_card, Pile, Zone, ZonePosition};
//!
//! let mut hand = Pile::new(Zone::Hand);
//! let mut grave = Pile::new(Zone::Grave);
//! hand.receive(Card::new(Rank::Ace, Suit::Spades), ZonePosition::Back);
//! hand.receive(Card::new(Rank::Nine, Suit::Diamonds), ZonePosition::Back);
//!
//! move_card(&mut hand, &mut grave, ZonePosition::Index(1), ZonePosition::Back).unwrap();
//! assert_eq!(hand.to_string(), "As [1]");
//! assert_eq!(grave.to_string(), "9d [1]");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;
use crate::core::error::{DuchessError, Result};

/// Which of a player's piles (or the match reserve) a card sits in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Deck,
    Hand,
    Field,
    Battlefield,
    Grave,
    /// Cards left undealt at setup.
    Reserve,
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Zone::Deck => "deck",
            Zone::Hand => "hand",
            Zone::Field => "field",
            Zone::Battlefield => "battlefield",
            Zone::Grave => "grave",
            Zone::Reserve => "reserve",
        };
        f.write_str(name)
    }
}

/// Position for taking from or inserting into a pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePosition {
    /// Index 0 (top of a deck).
    Front,
    /// After the last card.
    Back,
    /// Explicit 0-based index. Insertion clamps to the pile length.
    Index(usize),
}

/// An ordered, position-addressable collection of cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    zone: Zone,
    cards: Vec<Card>,
    /// Soft limit; exceeding it is legal but reported by `is_full`/`overflow`.
    capacity: Option<usize>,
}

impl Pile {
    /// Create an empty unbounded pile.
    #[must_use]
    pub fn new(zone: Zone) -> Self {
        Self {
            zone,
            cards: Vec::new(),
            capacity: None,
        }
    }

    /// Create an empty pile with a capacity.
    #[must_use]
    pub fn bounded(zone: Zone, capacity: usize) -> Self {
        Self {
            zone,
            cards: Vec::with_capacity(capacity + 1),
            capacity: Some(capacity),
        }
    }

    /// Create an unbounded pile holding `cards` in order.
    #[must_use]
    pub fn from_cards(zone: Zone, cards: Vec<Card>) -> Self {
        Self {
            zone,
            cards,
            capacity: None,
        }
    }

    #[must_use]
    pub fn zone(&self) -> Zone {
        self.zone
    }

    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Check if the pile has reached its capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|cap| self.cards.len() >= cap)
    }

    /// Number of cards above capacity.
    #[must_use]
    pub fn overflow(&self) -> usize {
        self.capacity
            .map_or(0, |cap| self.cards.len().saturating_sub(cap))
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Card> {
        self.cards.iter_mut()
    }

    /// Get the card at a 0-based position.
    pub fn get(&self, position: usize) -> Result<&Card> {
        self.cards
            .get(position)
            .ok_or_else(|| DuchessError::out_of_range(self.zone, position, self.cards.len()))
    }

    /// Get the card at a 0-based position mutably.
    pub fn get_mut(&mut self, position: usize) -> Result<&mut Card> {
        let (zone, len) = (self.zone, self.cards.len());
        self.cards
            .get_mut(position)
            .ok_or_else(|| DuchessError::out_of_range(zone, position, len))
    }

    /// Resolve a removal position to an existing index.
    pub fn index_of(&self, position: ZonePosition) -> Result<usize> {
        let len = self.cards.len();
        let index = match position {
            ZonePosition::Front => 0,
            ZonePosition::Back => len.saturating_sub(1),
            ZonePosition::Index(i) => i,
        };
        if index < len {
            Ok(index)
        } else {
            Err(DuchessError::out_of_range(self.zone, index, len))
        }
    }

    /// Insert a card. Out-of-range indices append.
    pub fn receive(&mut self, card: Card, position: ZonePosition) {
        match position {
            ZonePosition::Front => self.cards.insert(0, card),
            ZonePosition::Back => self.cards.push(card),
            ZonePosition::Index(i) => {
                let idx = i.min(self.cards.len());
                self.cards.insert(idx, card);
            }
        }
    }

    /// Remove and return a card.
    pub fn take(&mut self, position: ZonePosition) -> Result<Card> {
        let index = self.index_of(position)?;
        Ok(self.cards.remove(index))
    }

    /// Move one card from this pile to `dest`.
    pub fn send(&mut self, dest: &mut Pile, from: ZonePosition, to: ZonePosition) -> Result<()> {
        move_card(self, dest, from, to)
    }

    /// Replace the order of the cards without changing the multiset.
    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }
}

impl fmt::Display for Pile {
    /// Renders `"As [1], 9d [2]"`; prompt content only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} [{}]", card, i + 1)?;
        }
        Ok(())
    }
}

/// Move the card at `from_pos` in `from` to `to_pos` in `to`.
///
/// Fails with `OutOfRange` before mutating anything if `from_pos` does not
/// address a card.
pub fn move_card(
    from: &mut Pile,
    to: &mut Pile,
    from_pos: ZonePosition,
    to_pos: ZonePosition,
) -> Result<()> {
    let card = from.take(from_pos)?;
    to.receive(card, to_pos);
    Ok(())
}
