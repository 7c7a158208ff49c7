//! Match configuration.
//!
//! The rules fix most numbers (52 cards, tribute tiers), but pile capacities
//! and the opening hand are carried here so tests can build small scenarios
//! and so a front end can report the exact parameters a match ran with.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::{DuchessError, Result};

/// Default maximum hand size after overflow is resolved.
pub const HAND_CAPACITY: usize = 8;

/// Default maximum number of cards on a field.
pub const FIELD_CAPACITY: usize = 5;

/// Cards dealt to each player when their hand, field and grave are empty.
pub const OPENING_HAND: usize = 5;

/// Parameters of a single match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Hand size the overflow check discards down to.
    pub hand_capacity: usize,

    /// Maximum cards on a field; playing onto a full field is refused.
    pub field_capacity: usize,

    /// Size of the opening deal.
    pub opening_hand: usize,

    /// Shuffle seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            hand_capacity: HAND_CAPACITY,
            field_capacity: FIELD_CAPACITY,
            opening_hand: OPENING_HAND,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration against a roster of player names.
    pub fn validate(&self, names: &[String]) -> Result<()> {
        if names.len() < 2 {
            return Err(DuchessError::InvalidConfig(format!(
                "a match needs at least 2 players, got {}",
                names.len()
            )));
        }
        if names.len() > 52 {
            return Err(DuchessError::InvalidConfig(format!(
                "at most 52 players can share one deck, got {}",
                names.len()
            )));
        }

        let mut seen = FxHashSet::default();
        for name in names {
            if name.trim().is_empty() {
                return Err(DuchessError::InvalidConfig(
                    "player names must not be empty".into(),
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(DuchessError::InvalidConfig(format!(
                    "player name {name:?} is used twice"
                )));
            }
        }

        if self.hand_capacity == 0 || self.field_capacity == 0 {
            return Err(DuchessError::InvalidConfig(
                "hand and field capacity must be at least 1".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = MatchConfig::new();
        assert_eq!(config.hand_capacity, 8);
        assert_eq!(config.field_capacity, 5);
        assert_eq!(config.opening_hand, 5);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_validate_roster() {
        let config = MatchConfig::new();
        assert!(config.validate(&names(&["Ann", "Bo"])).is_ok());
        assert!(config.validate(&names(&["Ann"])).is_err());
        assert!(config.validate(&names(&["Ann", "Ann"])).is_err());
        assert!(config.validate(&names(&["Ann", " "])).is_err());
    }

    #[test]
    fn test_validate_capacity() {
        let config = MatchConfig {
            field_capacity: 0,
            ..MatchConfig::default()
        };
        assert!(matches!(
            config.validate(&names(&["Ann", "Bo"])),
            Err(DuchessError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: MatchConfig = serde_json::from_str(r#"{"seed": 9}"#).unwrap();
        assert_eq!(config, MatchConfig::new().with_seed(9));
    }
}
