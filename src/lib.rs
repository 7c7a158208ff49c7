//! # duchess
//!
//! A rules engine for Duchess, a turn-based card battle game for two or
//! more players sharing one 52-card deck.
//!
//! ## Design Principles
//!
//! 1. **I/O-Free Engine**: The engine never touches a terminal. Every
//!    decision goes through an [`InteractionSurface`], so the same rules
//!    drive the console binary, scripted tests and replays.
//!
//! 2. **N-Player First**: Seats are addressed by [`PlayerId`] and stored in
//!    a [`PlayerMap`]. Turn order and elimination follow seat identity, not
//!    list positions.
//!
//! 3. **All-or-Nothing Actions**: Every action validates before it moves a
//!    card. An `Err` means the match is unchanged.
//!
//! ## Architecture
//!
//! - **Turn Protocol**: The current player's menu runs as a resumable state
//!   machine ([`TurnEngine`]). It stops whenever another seat is involved and
//!   the orchestrator ([`Duchess`]) resumes it afterwards.
//!
//! - **Deterministic Shuffles**: One seeded ChaCha RNG per match drives
//!   every shuffle, so a seed plus a script replays a whole match.
//!
//! ## Modules
//!
//! - `core`: Player ids, per-player storage, RNG, configuration, errors, history
//! - `cards`: Ranks, suits and runtime card state
//! - `zones`: Piles, decks and fields
//! - `rules`: Combat resolution and play costs
//! - `triggers`: Special abilities and the trigger scan
//! - `turn`: Player seats and the turn protocol
//! - `game`: The match orchestrator
//! - `interaction`: The interaction surface and its scripted implementation
//!
//! ## Example
//!
//! ```
//! use duchess::{DuchessBuilder, FallbackStrategy, ScriptedSurface};
//!
//! let mut game = DuchessBuilder::new()
//!     .players(["Ann", "Bo"])
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! // End the first go straight away.
//! let mut surface = ScriptedSurface::new(["q"]).with_fallback(FallbackStrategy::FirstOption);
//! game.run_turn(&mut surface).unwrap();
//!
//! assert_eq!(game.turn_number(), 2);
//! assert_eq!(game.card_count(), 52);
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod triggers;
pub mod turn;
pub mod game;
pub mod interaction;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng,
    MatchConfig,
    Action, ActionRecord,
    DuchessError, Result,
};

pub use crate::cards::{Ability, Card, Rank, Suit};

pub use crate::zones::{Field, Pile, Zone, ZonePosition, DECK_SIZE};

pub use crate::rules::CombatResult;

pub use crate::triggers::{RoyalEffect, SpecialAbility};

pub use crate::turn::{Seat, TurnEngine, TurnPhase, TurnStatus};

pub use crate::game::{Duchess, DuchessBuilder, MatchOutcome};

pub use crate::interaction::{FallbackStrategy, InteractionSurface, Options, ScriptedSurface};
