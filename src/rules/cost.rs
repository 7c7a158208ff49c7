//! Tribute costs for playing a card.
//!
//! | Rank (low value) | Tributes needed |
//! |------------------|-----------------|
//! | A–5              | 0               |
//! | 6–10             | 1               |
//! | J, Q, K          | 2               |
//!
//! Paying more than needed is allowed and has no extra effect.

use crate::cards::{Card, Rank};

/// Tributes required before a card of `rank` may be played.
#[must_use]
pub const fn tributes_required(rank: Rank) -> u32 {
    match rank.low() {
        0..=5 => 0,
        6..=10 => 1,
        _ => 2,
    }
}

/// Check if `card` may be played after `tributes` tributes this turn.
#[must_use]
pub fn can_play(card: &Card, tributes: u32) -> bool {
    tributes >= tributes_required(card.rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Spades)
    }

    #[test]
    fn test_thresholds() {
        assert!(can_play(&card(Rank::Five), 0));
        assert!(!can_play(&card(Rank::Six), 0));
        assert!(can_play(&card(Rank::Ten), 1));
        assert!(!can_play(&card(Rank::Jack), 1));
        assert!(can_play(&card(Rank::King), 2));
    }

    #[test]
    fn test_ace_costs_nothing() {
        assert!(can_play(&card(Rank::Ace), 0));
        assert_eq!(tributes_required(Rank::Ace), 0);
    }

    #[test]
    fn test_extra_tributes_allow_everything() {
        for rank in Rank::ALL {
            assert!(can_play(&card(rank), 3));
        }
    }

    #[test]
    fn test_required_matches_gate() {
        for rank in Rank::ALL {
            let needed = tributes_required(rank);
            assert!(can_play(&card(rank), needed), "{rank} with {needed}");
            if needed > 0 {
                assert!(!can_play(&card(rank), needed - 1), "{rank} with {}", needed - 1);
            }
        }
    }
}
