//! Special-ability dispatch.

use tracing::debug;

use super::Duchess;
use crate::core::action::Action;
use crate::core::error::{DuchessError, Result};
use crate::interaction::{parse_position, prompts, InteractionSurface, Options};
use crate::triggers::{next_trigger, RoyalEffect, SpecialAbility};

impl Duchess {
    /// Fire every unused ability on the current player's field, in field
    /// order, and spend each card afterwards. Returns how many fired.
    ///
    /// Cards a Jack revives onto the field land behind the scan position and
    /// fire in the same dispatch.
    pub fn dispatch_abilities(&mut self, surface: &mut dyn InteractionSurface) -> Result<usize> {
        let current = self.current;
        let mut from = 0;
        let mut fired = 0;

        while let Some((position, ability)) = next_trigger(&self.seats[current].field, from) {
            let rank = self.seats[current].field.get(position)?.rank;
            self.apply_ability(ability, surface)?;
            self.seats[current].field.get_mut(position)?.consume();
            self.record(current, Action::Ability { rank });
            if let Some(announcement) = ability.announcement() {
                surface.notify(announcement)?;
            }

            fired += 1;
            from = position + 1;
        }
        Ok(fired)
    }

    fn apply_ability(&mut self, ability: SpecialAbility, surface: &mut dyn InteractionSurface) -> Result<()> {
        let current = self.current;
        debug!(player = %current, %ability, "ability");

        match ability {
            SpecialAbility::DrawOthers => {
                for rival in self.opponents_of(current) {
                    self.seats[rival].draw()?;
                }
            }
            SpecialAbility::BurnOthers => {
                for rival in self.opponents_of(current) {
                    self.seats[rival].burn_top()?;
                }
            }
            SpecialAbility::Refresh => self.seats[current].reset_privileges(),
            SpecialAbility::Royal(effect) => self.bring_back(effect, surface)?,
        }
        Ok(())
    }

    fn bring_back(&mut self, effect: RoyalEffect, surface: &mut dyn InteractionSurface) -> Result<()> {
        let seat = &self.seats[self.current];
        let revivable = seat.revivable();
        if revivable.is_empty() {
            return surface.notify(prompts::NOTHING_TO_REVIVE);
        }

        let prompt = prompts::royal(&seat.grave, effect.verb());
        let answer = surface.ask_choice(&prompt, &Options::of_positions(revivable), None)?;
        let position = parse_position(&answer)
            .ok_or_else(|| DuchessError::Interaction(format!("not a card number: {answer:?}")))?;

        let current = self.current;
        self.seats[current].revive(effect, position, &mut self.rng)?;
        Ok(())
    }
}
