//! Triggered special abilities.
//!
//! Whenever a player plays a card, every still-active special card on that
//! player's field fires once, in field order, and is then spent. A spent card
//! is re-armed only by dying and being brought back by a royal.
//!
//! The field is scanned live rather than from a snapshot: a Jack that revives
//! a special card onto the field appends it behind the scan position, so the
//! revived card fires in the same dispatch.
//!
//! ```
//! use duchess::cards::{Card, Rank, Suit};
//! use duchess::triggers::{next_trigger, SpecialAbility};
//! use duchess::zones::{Pile, Zone};
//!
//! let field = Pile::from_cards(
//!     Zone::Field,
//!     vec![Card::new(Rank::Four, Suit::Clubs), Card::new(Rank::Seven, Suit::Hearts)],
//! );
//! assert_eq!(next_trigger(&field, 0), Some((1, SpecialAbility::BurnOthers)));
//! assert_eq!(next_trigger(&field, 2), None);
//! ```

mod ability;

pub use ability::{RoyalEffect, SpecialAbility};

use crate::zones::Pile;

/// Find the first active special card at or after position `from`.
#[must_use]
pub fn next_trigger(field: &Pile, from: usize) -> Option<(usize, SpecialAbility)> {
    field
        .iter()
        .enumerate()
        .skip(from)
        .filter(|(_, card)| card.is_active())
        .find_map(|(i, card)| SpecialAbility::for_rank(card.rank).map(|ability| (i, ability)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};
    use crate::zones::Zone;

    #[test]
    fn test_spent_cards_do_not_trigger() {
        let mut spent = Card::new(Rank::Two, Suit::Clubs);
        spent.consume();
        let field = Pile::from_cards(
            Zone::Field,
            vec![spent, Card::new(Rank::Nine, Suit::Clubs), Card::new(Rank::Queen, Suit::Clubs)],
        );

        assert_eq!(
            next_trigger(&field, 0),
            Some((2, SpecialAbility::Royal(RoyalEffect::Rescue)))
        );
    }

    #[test]
    fn test_empty_field() {
        assert_eq!(next_trigger(&Pile::new(Zone::Field), 0), None);
    }
}
