//! Piles: where cards live.
//!
//! Every card of a match sits in exactly one pile. Each player owns a deck,
//! hand, field, battlefield and grave; the match owns a reserve for cards
//! that could not be dealt evenly.
//!
//! ## Key Types
//!
//! - `Zone`: which pile a card is in
//! - `ZonePosition`: front/back/index addressing
//! - `Pile`: ordered collection with optional capacity, plus deck behaviour
//! - `Field`: bounded pile that also counts tributes
//! - `move_card`: atomic single-card transfer

pub mod deck;
pub mod field;
pub mod pile;

pub use deck::DECK_SIZE;
pub use field::Field;
pub use pile::{move_card, Pile, Zone, ZonePosition};
