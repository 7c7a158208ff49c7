//! Card faces: ranks and suits.
//!
//! A Duchess deck is the plain 52-card French deck. What makes it Duchess is
//! how faces are valued:
//!
//! - Aces have two values: 1 when attacking or paying for a play, 14 when
//!   defending.
//! - 2, 7, 8, J, Q and K are *special* and carry a once-per-life ability.
//! - Suits form a beats-cycle: diamonds → clubs → hearts → spades → diamonds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Card rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    /// All ranks in deck order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Value used when attacking and when paying tribute costs.
    #[must_use]
    pub const fn low(self) -> u8 {
        self as u8
    }

    /// Value used when defending. Only the Ace differs from `low`.
    #[must_use]
    pub const fn high(self) -> u8 {
        match self {
            Rank::Ace => 14,
            other => other as u8,
        }
    }

    /// Check if cards of this rank carry an ability.
    #[must_use]
    pub const fn is_special(self) -> bool {
        matches!(
            self,
            Rank::Two | Rank::Seven | Rank::Eight | Rank::Jack | Rank::Queen | Rank::King
        )
    }

    /// Check if this is a J, Q or K.
    #[must_use]
    pub const fn is_royal(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }

    /// Short symbol as printed on prompts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card suit, in beats-cycle order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Diamonds = 0,
    Clubs = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    /// All suits in cycle order.
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades];

    /// The suit this one beats.
    #[must_use]
    pub const fn successor(self) -> Suit {
        match self {
            Suit::Diamonds => Suit::Clubs,
            Suit::Clubs => Suit::Hearts,
            Suit::Hearts => Suit::Spades,
            Suit::Spades => Suit::Diamonds,
        }
    }

    /// Check if this suit beats `other` in a suit battle.
    #[must_use]
    pub const fn beats(self, other: Suit) -> bool {
        self.successor() as u8 == other as u8
    }

    /// Single-letter symbol as printed on prompts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Hearts => "h",
            Suit::Spades => "s",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
