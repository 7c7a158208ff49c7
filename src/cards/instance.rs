//! Card instances - runtime card state.
//!
//! A `Card` is a face plus the flags the rules flip during play. Special
//! ranks additionally carry an [`Ability`] tag recording whether their
//! ability has already fired in this life and whether the card won a battle
//! this turn.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::definition::{Rank, Suit};

/// Ability capability of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    /// No ability (A, 3-6, 9, 10).
    Plain,
    /// Ability-bearing card (2, 7, 8, J, Q, K).
    Special {
        /// Ability not yet consumed in this life.
        active: bool,
        /// Took part in a won battle since the last privilege reset.
        battled: bool,
    },
}

/// A card in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    destroyed: bool,
    ability: Ability,
}

impl Card {
    /// Create a fresh card. Special ranks start with their ability active.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        let ability = if rank.is_special() {
            Ability::Special {
                active: true,
                battled: false,
            }
        } else {
            Ability::Plain
        };

        Self {
            rank,
            suit,
            destroyed: false,
            ability,
        }
    }

    #[must_use]
    pub const fn ability(&self) -> Ability {
        self.ability
    }

    #[must_use]
    pub const fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Mark the card destroyed. The caller buries it immediately afterwards.
    pub fn destroy(&mut self) {
        self.destroyed = true;
        self.clear_battled();
    }

    /// Bring a destroyed card back to life, re-arming its ability. The card
    /// comes back without any battle record.
    pub fn revive(&mut self) {
        self.destroyed = false;
        if let Ability::Special { active, battled } = &mut self.ability {
            *active = true;
            *battled = false;
        }
    }

    /// Check if this card has an unused ability.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.ability, Ability::Special { active: true, .. })
    }

    /// Spend the ability. No-op on plain cards.
    pub fn consume(&mut self) {
        if let Ability::Special { active, .. } = &mut self.ability {
            *active = false;
        }
    }

    #[must_use]
    pub const fn has_battled(&self) -> bool {
        matches!(self.ability, Ability::Special { battled: true, .. })
    }

    /// Record a won battle. Only special cards track this.
    pub fn mark_battled(&mut self) {
        if let Ability::Special { battled, .. } = &mut self.ability {
            *battled = true;
        }
    }

    pub fn clear_battled(&mut self) {
        if let Ability::Special { battled, .. } = &mut self.ability {
            *battled = false;
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
