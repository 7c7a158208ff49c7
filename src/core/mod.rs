//! Core engine types: seats, RNG, configuration, errors, action history.
//!
//! Everything here is independent of the Duchess rules themselves; the
//! rule-bearing modules (`cards`, `zones`, `rules`, `turn`, `game`) build on it.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Action, ActionRecord};
pub use config::{MatchConfig, FIELD_CAPACITY, HAND_CAPACITY, OPENING_HAND};
pub use error::{DuchessError, Result};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
