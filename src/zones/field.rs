//! The field: a bounded pile plus this turn's tribute count.

use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

use super::pile::{Pile, Zone};

/// Cards in play, with the number of tributes paid since the last play.
///
/// The counter is deliberately uncapped; play costs only distinguish 0, 1
/// and 2-or-more.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pile: Pile,
    tributes: u32,
}

impl Field {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            pile: Pile::bounded(Zone::Field, capacity),
            tributes: 0,
        }
    }

    #[must_use]
    pub fn tributes(&self) -> u32 {
        self.tributes
    }

    pub fn add_tribute(&mut self) {
        self.tributes += 1;
    }

    pub fn reset_tributes(&mut self) {
        self.tributes = 0;
    }

    #[must_use]
    pub fn pile(&self) -> &Pile {
        &self.pile
    }

    pub fn pile_mut(&mut self) -> &mut Pile {
        &mut self.pile
    }
}

impl Deref for Field {
    type Target = Pile;

    fn deref(&self) -> &Pile {
        &self.pile
    }
}

impl DerefMut for Field {
    fn deref_mut(&mut self) -> &mut Pile {
        &mut self.pile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};
    use crate::zones::ZonePosition;

    #[test]
    fn test_tribute_counter() {
        let mut field = Field::new(5);
        assert_eq!(field.tributes(), 0);
        field.add_tribute();
        field.add_tribute();
        field.add_tribute();
        assert_eq!(field.tributes(), 3);
        field.reset_tributes();
        assert_eq!(field.tributes(), 0);
    }

    #[test]
    fn test_derefs_to_bounded_pile() {
        let mut field = Field::new(1);
        assert_eq!(field.zone(), Zone::Field);
        field.receive(Card::new(Rank::Five, Suit::Hearts), ZonePosition::Back);
        assert!(field.is_full());
        assert_eq!(field.to_string(), "5h [1]");
    }
}
