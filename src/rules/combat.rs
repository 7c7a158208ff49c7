//! Combat resolution.
//!
//! A battle puts the attacker in battlefield slot 0 and the defender in slot
//! 1. The attacker first tries a *rank battle*: its low value must strictly
//! exceed the defender's high value, so an attacking Ace counts 1 and a
//! defending Ace counts 14. If that fails, a *suit battle* is tried: the
//! attacker wins when the defender's suit directly follows its own in the
//! cycle diamonds → clubs → hearts → spades → diamonds.
//!
//! On a win the defender is marked destroyed and both cards are marked as
//! having battled. A loss changes nothing.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::error::{DuchessError, Result};
use crate::zones::Pile;

/// Slot of the attacking card on a battlefield.
pub const ATTACKER_SLOT: usize = 0;

/// Slot of the defending card on a battlefield.
pub const DEFENDER_SLOT: usize = 1;

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatResult {
    /// Attacker's low rank beat the defender's high rank.
    RankWin,
    /// Rank battle lost, but the attacker's suit beats the defender's.
    SuitWin,
    /// Attacker lost both battles; nothing happens.
    Repelled,
}

impl CombatResult {
    #[must_use]
    pub fn attacker_won(self) -> bool {
        !matches!(self, CombatResult::Repelled)
    }
}

/// Rank battle: `attacker.low > defender.high`.
#[must_use]
pub fn battle_ranks(attacker: &Card, defender: &Card) -> bool {
    attacker.rank.low() > defender.rank.high()
}

/// Suit battle: the defender's suit is the successor of the attacker's.
#[must_use]
pub fn battle_suits(attacker: &Card, defender: &Card) -> bool {
    attacker.suit.beats(defender.suit)
}

/// Compare two cards without touching their state.
#[must_use]
pub fn judge(attacker: &Card, defender: &Card) -> CombatResult {
    if battle_ranks(attacker, defender) {
        CombatResult::RankWin
    } else if battle_suits(attacker, defender) {
        CombatResult::SuitWin
    } else {
        CombatResult::Repelled
    }
}

/// Resolve the battle staged on `battlefield`, applying the outcome to the
/// cards in place.
pub fn resolve(battlefield: &mut Pile) -> Result<CombatResult> {
    if battlefield.len() != 2 {
        return Err(DuchessError::IllegalAction(
            "a battle needs exactly one attacker and one defender",
        ));
    }

    let result = judge(
        battlefield.get(ATTACKER_SLOT)?,
        battlefield.get(DEFENDER_SLOT)?,
    );

    if result.attacker_won() {
        let defender = battlefield.get_mut(DEFENDER_SLOT)?;
        defender.destroy();
        defender.mark_battled();
        battlefield.get_mut(ATTACKER_SLOT)?.mark_battled();
    }

    Ok(result)
}
