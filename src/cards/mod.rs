//! Card system: faces and runtime instances.
//!
//! ## Key Types
//!
//! - `Rank`, `Suit`: static card faces and their Duchess values
//! - `Card`: a face plus destroyed/ability state
//! - `Ability`: `Plain` or `Special { active, battled }`

pub mod definition;
pub mod instance;

pub use definition::{Rank, Suit};
pub use instance::{Ability, Card};
