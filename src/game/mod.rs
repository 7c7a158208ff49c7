//! The match: setup, turn order, cross-player effects and elimination.

mod duchess;
mod effects;

pub use duchess::{Duchess, DuchessBuilder};

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

/// How a finished match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Exactly one player is left.
    Winner(PlayerId),
    /// The last players were knocked out by the same end-of-turn sweep.
    Draw,
}

impl MatchOutcome {
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            MatchOutcome::Winner(id) => Some(id),
            MatchOutcome::Draw => None,
        }
    }
}
