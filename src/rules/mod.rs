//! The rules that decide outcomes: combat and play costs.
//!
//! Both are pure functions over cards so they can be checked in isolation;
//! the turn engine applies them to a player's piles.

pub mod combat;
pub mod cost;

pub use combat::{resolve, CombatResult, ATTACKER_SLOT, DEFENDER_SLOT};
pub use cost::{can_play, tributes_required};
