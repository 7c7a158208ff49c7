//! Engine error types.
//!
//! Two tiers of failure exist in Duchess:
//!
//! - **Input rejection** never reaches this module. An invalid menu choice is
//!   re-prompted by the [`InteractionSurface`](crate::interaction::InteractionSurface).
//! - **Contract violations** are reported as [`DuchessError`]. They mean the
//!   caller asked for something the rules forbid; the orchestrator checks
//!   preconditions first and never retries them.

use thiserror::Error;

use crate::zones::Zone;

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, DuchessError>;

/// Errors raised by the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DuchessError {
    /// A pile position outside `0..len`.
    #[error("position {position} is out of range for {zone} ({len} cards)")]
    OutOfRange {
        /// Pile that was addressed.
        zone: Zone,
        /// 0-based position requested.
        position: usize,
        /// Number of cards in the pile.
        len: usize,
    },

    /// The action is not allowed in the current turn state.
    #[error("illegal action: {0}")]
    IllegalAction(&'static str),

    /// The targeted card does not meet the action's requirements.
    #[error("card {card} is not eligible: {reason}")]
    NotEligible {
        /// Rendered card, e.g. `Qh`.
        card: String,
        /// Which requirement failed.
        reason: &'static str,
    },

    /// Match construction parameters were rejected.
    #[error("invalid match configuration: {0}")]
    InvalidConfig(String),

    /// The interaction surface could not supply an answer.
    #[error("interaction failed: {0}")]
    Interaction(String),
}

impl DuchessError {
    /// Shorthand for an out-of-range position.
    #[must_use]
    pub fn out_of_range(zone: Zone, position: usize, len: usize) -> Self {
        Self::OutOfRange { zone, position, len }
    }

    /// Check if this error is an engine contract violation.
    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. } | Self::IllegalAction(_) | Self::NotEligible { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = DuchessError::out_of_range(Zone::Hand, 9, 3);
        assert_eq!(err.to_string(), "position 9 is out of range for hand (3 cards)");
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_config_errors_are_not_contract_violations() {
        let err = DuchessError::InvalidConfig("need two players".into());
        assert!(!err.is_contract_violation());
        assert_eq!(
            err.to_string(),
            "invalid match configuration: need two players"
        );
    }
}
