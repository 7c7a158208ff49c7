//! Per-player turn machinery.
//!
//! - [`Seat`]: one player's piles and turn flags, and the actions on them
//! - [`TurnEngine`]: the resumable menu protocol for a single go

mod protocol;
mod seat;

pub use protocol::{TurnEngine, TurnPhase, TurnStatus};
pub use seat::Seat;
