//! Deck behaviour: populating, shuffling and dealing.

use tracing::trace;

use super::pile::{Pile, Zone, ZonePosition};
use crate::cards::{Card, Rank, Suit};
use crate::core::error::Result;
use crate::core::rng::GameRng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

impl Pile {
    /// A fresh 52-card deck in populate order.
    #[must_use]
    pub fn standard_deck() -> Self {
        let mut deck = Pile::new(Zone::Deck);
        deck.populate();
        deck
    }

    /// Append the 52-card rank×suit product, rank-major (`Ad Ac Ah As 2d ...`).
    pub fn populate(&mut self) {
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                self.receive(Card::new(rank, suit), ZonePosition::Back);
            }
        }
    }

    /// Randomly permute the pile.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards_mut());
        trace!(zone = %self.zone(), cards = self.len(), "shuffled");
    }

    /// Move up to `amount` cards from the front to the back of `dest`, one at
    /// a time. Returns how many were dealt.
    pub fn deal(&mut self, dest: &mut Pile, amount: usize) -> Result<usize> {
        let count = amount.min(self.len());
        for _ in 0..count {
            self.send(dest, ZonePosition::Front, ZonePosition::Back)?;
        }
        Ok(count)
    }
}
