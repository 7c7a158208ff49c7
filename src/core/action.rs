//! Action history.
//!
//! Every successful engine action is recorded with the turn it happened in,
//! which gives tests and front ends a replayable log of the match.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::Rank;
use crate::zones::Zone;

/// An engine action that changed the match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Hand overflow discard (0-based hand position).
    Discard { position: usize },
    /// Tribute from the hand or the field.
    Tribute { source: Zone, position: usize },
    /// Play a card from the hand.
    Play { position: usize },
    /// Battle attempt and its outcome.
    Battle {
        opponent: PlayerId,
        attacker: usize,
        defender: usize,
        won: bool,
    },
    /// A special ability resolved.
    Ability { rank: Rank },
    /// End of go.
    EndTurn,
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serde() {
        let record = ActionRecord::new(
            PlayerId::new(1),
            Action::Tribute {
                source: Zone::Field,
                position: 2,
            },
            4,
            0,
        );

        let json = serde_json::to_string(&record).unwrap();
        let back: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
