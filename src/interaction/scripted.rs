//! A surface that answers from a script.

use std::collections::VecDeque;

use super::{InteractionSurface, Options};
use crate::core::error::{DuchessError, Result};

/// What a [`ScriptedSurface`] does once its script runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackStrategy {
    /// Fail with an `Interaction` error.
    #[default]
    Fail,
    /// Choose the first accepted option.
    FirstOption,
    /// Choose the last accepted option (usually cancel or end-of-go).
    LastOption,
}

/// Answers prompts from a queue and records everything it was shown.
///
/// Answers that are not accepted by the prompt are counted as rejections and
/// skipped, the same way a person re-typing would be re-prompted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSurface {
    answers: VecDeque<String>,
    fallback: FallbackStrategy,
    prompts: Vec<String>,
    notices: Vec<String>,
    rejections: usize,
}

impl ScriptedSurface {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the behaviour after the script is exhausted.
    #[must_use]
    pub fn with_fallback(mut self, fallback: FallbackStrategy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Queue more answers.
    pub fn push(&mut self, answer: impl Into<String>) {
        self.answers.push_back(answer.into());
    }

    /// Answers not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    #[must_use]
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Check if any notice contains `needle`.
    #[must_use]
    pub fn was_notified(&self, needle: &str) -> bool {
        self.notices.iter().any(|n| n.contains(needle))
    }

    #[must_use]
    pub fn rejections(&self) -> usize {
        self.rejections
    }

    fn fall_back(&self, prompt: &str, options: &Options) -> Result<String> {
        let pick = match self.fallback {
            FallbackStrategy::Fail => None,
            FallbackStrategy::FirstOption => options.as_slice().first(),
            FallbackStrategy::LastOption => options.as_slice().last(),
        };
        pick.cloned().ok_or_else(|| {
            let headline = prompt.trim().lines().last().unwrap_or_default();
            DuchessError::Interaction(format!("script exhausted at prompt {headline:?}"))
        })
    }
}

impl InteractionSurface for ScriptedSurface {
    fn ask_choice(
        &mut self,
        prompt: &str,
        options: &Options,
        _rejection: Option<&str>,
    ) -> Result<String> {
        self.prompts.push(prompt.to_string());

        while let Some(answer) = self.answers.pop_front() {
            if options.contains(&answer) {
                return Ok(answer);
            }
            self.rejections += 1;
        }

        self.fall_back(prompt, options)
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        self.notices.push(message.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_rejected_answers() {
        let mut surface = ScriptedSurface::new(["9", "x", "2"]);
        let answer = surface
            .ask_choice("pick", &Options::positions(3), None)
            .unwrap();

        assert_eq!(answer, "2");
        assert_eq!(surface.rejections(), 2);
        assert_eq!(surface.remaining(), 0);
    }

    #[test]
    fn test_exhausted_script_fails() {
        let mut surface = ScriptedSurface::new(Vec::<String>::new());
        let err = surface
            .ask_choice("\nEnter a card\n", &Options::positions(2), None)
            .unwrap_err();
        assert!(matches!(err, DuchessError::Interaction(_)));
    }

    #[test]
    fn test_fallbacks() {
        let options = Options::positions(2).cancellable();

        let mut first = ScriptedSurface::default().with_fallback(FallbackStrategy::FirstOption);
        assert_eq!(first.ask_choice("", &options, None).unwrap(), "1");

        let mut last = ScriptedSurface::default().with_fallback(FallbackStrategy::LastOption);
        assert_eq!(last.ask_choice("", &options, None).unwrap(), "c");

        assert!(first.ask_choice("", &Options::new(), None).is_err());
    }

    #[test]
    fn test_records_notices() {
        let mut surface = ScriptedSurface::default();
        surface.notify("Target destroyed!").unwrap();
        assert!(surface.was_notified("destroyed"));
        assert_eq!(surface.notices().len(), 1);
    }
}
