//! Special abilities carried by 2, 7, 8, J, Q and K.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Rank;
use crate::zones::Zone;

/// Where a royal brings a card back to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoyalEffect {
    /// Jack: grave → field.
    Revive,
    /// Queen: grave → hand.
    Rescue,
    /// King: grave → deck, then the deck is reshuffled.
    Reset,
}

impl RoyalEffect {
    /// Pile the revived card is moved to.
    #[must_use]
    pub const fn destination(self) -> Zone {
        match self {
            RoyalEffect::Revive => Zone::Field,
            RoyalEffect::Rescue => Zone::Hand,
            RoyalEffect::Reset => Zone::Deck,
        }
    }

    /// Verb used when prompting for the grave card.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            RoyalEffect::Revive => "revive",
            RoyalEffect::Rescue => "rescue",
            RoyalEffect::Reset => "reset",
        }
    }
}

/// A once-per-life ability, fired when its card is on the field of a player
/// who has just played a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialAbility {
    /// 2: every other active player draws.
    DrawOthers,
    /// 7: every other active player burns the top card of their deck.
    BurnOthers,
    /// 8: the turn player's go starts again, without a new draw.
    Refresh,
    /// J, Q, K: bring back a destroyed card from the grave.
    Royal(RoyalEffect),
}

impl SpecialAbility {
    /// Ability printed on cards of `rank`, if any.
    #[must_use]
    pub const fn for_rank(rank: Rank) -> Option<Self> {
        match rank {
            Rank::Two => Some(SpecialAbility::DrawOthers),
            Rank::Seven => Some(SpecialAbility::BurnOthers),
            Rank::Eight => Some(SpecialAbility::Refresh),
            Rank::Jack => Some(SpecialAbility::Royal(RoyalEffect::Revive)),
            Rank::Queen => Some(SpecialAbility::Royal(RoyalEffect::Rescue)),
            Rank::King => Some(SpecialAbility::Royal(RoyalEffect::Reset)),
            _ => None,
        }
    }

    /// Message shown to the table once the ability has resolved.
    #[must_use]
    pub const fn announcement(self) -> Option<&'static str> {
        match self {
            SpecialAbility::DrawOthers => Some("All other players draw a card!"),
            SpecialAbility::BurnOthers => {
                Some("All other players burn the top card of their deck!")
            }
            SpecialAbility::Refresh => Some("Your go starts again!"),
            SpecialAbility::Royal(_) => None,
        }
    }
}

impl fmt::Display for SpecialAbility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecialAbility::DrawOthers => f.write_str("draw"),
            SpecialAbility::BurnOthers => f.write_str("burn"),
            SpecialAbility::Refresh => f.write_str("refresh"),
            SpecialAbility::Royal(effect) => f.write_str(effect.verb()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_special_rank_has_an_ability() {
        for rank in Rank::ALL {
            assert_eq!(SpecialAbility::for_rank(rank).is_some(), rank.is_special());
        }
    }

    #[test]
    fn test_royal_destinations() {
        let dest = |rank| match SpecialAbility::for_rank(rank) {
            Some(SpecialAbility::Royal(effect)) => effect.destination(),
            other => panic!("{rank} is not royal: {other:?}"),
        };
        assert_eq!(dest(Rank::Jack), Zone::Field);
        assert_eq!(dest(Rank::Queen), Zone::Hand);
        assert_eq!(dest(Rank::King), Zone::Deck);
    }
}
