//! The interaction surface: how the engine asks players things.
//!
//! The engine never reads a keyboard or writes to a terminal. When it needs
//! a decision it calls [`InteractionSurface::ask_choice`] with the prompt
//! text and the exact set of acceptable answers; the surface re-prompts until
//! it has one of them. Notices go through [`InteractionSurface::notify`].
//!
//! Implementations:
//!
//! - [`ScriptedSurface`]: canned answers, for tests and replays
//! - the console surface in the `duchess` binary

pub mod prompts;
mod scripted;

pub use scripted::{FallbackStrategy, ScriptedSurface};

use crate::core::error::Result;

/// Answer that aborts the current sub-action.
pub const CANCEL: &str = "c";

/// Answer that ends the current go.
pub const END_TURN: &str = "q";

/// Something that can put questions to the players.
pub trait InteractionSurface {
    /// Ask until the answer is one of `options` and return it.
    ///
    /// `rejection` is shown after an invalid answer, if given.
    fn ask_choice(&mut self, prompt: &str, options: &Options, rejection: Option<&str>)
        -> Result<String>;

    /// Show a message and wait for acknowledgement.
    fn notify(&mut self, message: &str) -> Result<()>;
}

/// The set of answers a prompt accepts, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    items: Vec<String>,
}

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options `"1"..="count"`, one per card of a pile.
    #[must_use]
    pub fn positions(count: usize) -> Self {
        Self {
            items: (1..=count).map(|i| i.to_string()).collect(),
        }
    }

    /// Options for an explicit list of 0-based positions, shown 1-based.
    #[must_use]
    pub fn of_positions(positions: impl IntoIterator<Item = usize>) -> Self {
        Self {
            items: positions.into_iter().map(|i| (i + 1).to_string()).collect(),
        }
    }

    /// Add one more accepted answer.
    #[must_use]
    pub fn with(mut self, option: impl Into<String>) -> Self {
        self.items.push(option.into());
        self
    }

    /// Add the cancel answer.
    #[must_use]
    pub fn cancellable(self) -> Self {
        self.with(CANCEL)
    }

    #[must_use]
    pub fn contains(&self, answer: &str) -> bool {
        self.items.iter().any(|item| item == answer)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Parse a 1-based position answer into a 0-based index.
#[must_use]
pub fn parse_position(answer: &str) -> Option<usize> {
    answer.parse::<usize>().ok().filter(|&n| n > 0).map(|n| n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions() {
        let options = Options::positions(3).cancellable();
        assert_eq!(options.as_slice(), &["1", "2", "3", "c"]);
        assert!(options.contains("2"));
        assert!(!options.contains("12"));
        assert!(!options.contains("4"));
    }

    #[test]
    fn test_of_positions() {
        let options = Options::of_positions([0, 4]);
        assert_eq!(options.as_slice(), &["1", "5"]);
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("1"), Some(0));
        assert_eq!(parse_position("8"), Some(7));
        assert_eq!(parse_position("0"), None);
        assert_eq!(parse_position("c"), None);
    }
}
