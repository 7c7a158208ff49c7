//! The turn protocol: a resumable menu-driven state machine.
//!
//! The protocol owns only the current player's menu loop. Whenever it needs
//! something outside that player's seat it stops and hands back a
//! [`TurnStatus`], and the orchestrator resumes it afterwards:
//!
//! - `Playing`: a card was played, dispatch abilities
//! - `Battling`: an opponent must be chosen ([`TurnEngine::resume_with_opponent`]
//!   or [`TurnEngine::cancel`])
//! - `BattleComplete`: a battle attempt finished
//! - `Viewing`: show the other players' fields
//! - `Done`: the player ended their go

use tracing::debug;

use super::seat::Seat;
use crate::core::error::{DuchessError, Result};
use crate::core::player::PlayerId;
use crate::interaction::{parse_position, prompts, InteractionSurface, Options, CANCEL, END_TURN};
use crate::rules::CombatResult;
use crate::zones::Zone;

/// Where the protocol is within a go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    Menu,
    Tribute,
    Play,
    AwaitingOpponent,
    AwaitingBattleCards,
    ViewingFields,
    Done,
}

/// What a protocol step hands back to the orchestrator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnStatus {
    Playing,
    Battling,
    BattleComplete { opponent: PlayerId },
    Viewing,
    Done,
}

impl TurnStatus {
    /// Short tag for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TurnStatus::Playing => "playing",
            TurnStatus::Battling => "battling",
            TurnStatus::BattleComplete { .. } => "battle complete",
            TurnStatus::Viewing => "viewing",
            TurnStatus::Done => "done",
        }
    }
}

/// Per-go protocol state for one player.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    player: PlayerId,
    phase: TurnPhase,
    opponent: Option<PlayerId>,
}

impl TurnEngine {
    #[must_use]
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            phase: TurnPhase::Menu,
            opponent: None,
        }
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Opponent selected for the pending battle.
    #[must_use]
    pub fn opponent(&self) -> Option<PlayerId> {
        self.opponent
    }

    /// Continue a `Battling` stop with the chosen opponent.
    pub fn resume_with_opponent(&mut self, opponent: PlayerId) {
        self.opponent = Some(opponent);
        self.phase = TurnPhase::AwaitingBattleCards;
    }

    /// Abandon the pending sub-action and go back to the menu.
    pub fn cancel(&mut self) {
        self.opponent = None;
        self.phase = TurnPhase::Menu;
    }

    /// Run the menu until the orchestrator is needed.
    ///
    /// `opponent` must be the selected opponent's seat when resuming from
    /// [`TurnPhase::AwaitingBattleCards`], and is ignored otherwise.
    pub fn step(
        &mut self,
        seat: &mut Seat,
        mut opponent: Option<&mut Seat>,
        surface: &mut dyn InteractionSurface,
    ) -> Result<TurnStatus> {
        loop {
            match self.phase {
                TurnPhase::Menu => {
                    self.phase = self.menu(seat, surface)?;
                }
                TurnPhase::Tribute => {
                    self.phase = TurnPhase::Menu;
                    tribute(seat, surface)?;
                }
                TurnPhase::Play => {
                    self.phase = TurnPhase::Menu;
                    if play(seat, surface)? {
                        return Ok(TurnStatus::Playing);
                    }
                }
                TurnPhase::AwaitingOpponent => {
                    if seat.has_battled() {
                        surface.notify(prompts::ALREADY_BATTLED)?;
                        self.phase = TurnPhase::Menu;
                    } else if seat.field.is_empty() {
                        surface.notify(prompts::BATTLE_EMPTY_FIELD)?;
                        self.phase = TurnPhase::Menu;
                    } else {
                        return Ok(TurnStatus::Battling);
                    }
                }
                TurnPhase::AwaitingBattleCards => {
                    let (Some(target), Some(rival)) = (self.opponent, opponent.take()) else {
                        return Err(DuchessError::IllegalAction("battle resumed without an opponent"));
                    };
                    self.cancel();
                    battle(seat, rival, surface)?;
                    return Ok(TurnStatus::BattleComplete { opponent: target });
                }
                TurnPhase::ViewingFields => {
                    self.phase = TurnPhase::Menu;
                    return Ok(TurnStatus::Viewing);
                }
                TurnPhase::Done => return Ok(TurnStatus::Done),
            }
        }
    }

    fn menu(&self, seat: &Seat, surface: &mut dyn InteractionSurface) -> Result<TurnPhase> {
        let options = Options::positions(4).with(END_TURN);
        let choice = surface.ask_choice(
            &prompts::menu(&seat.to_string()),
            &options,
            Some(prompts::MENU_REJECTION),
        )?;
        debug!(player = %self.player, choice = %choice, "menu");

        Ok(match choice.as_str() {
            "1" => TurnPhase::Tribute,
            "2" => TurnPhase::Play,
            "3" => TurnPhase::AwaitingOpponent,
            "4" => TurnPhase::ViewingFields,
            _ => TurnPhase::Done,
        })
    }
}

/// Ask which card to use, or `None` on cancel.
fn choose_position(
    surface: &mut dyn InteractionSurface,
    prompt: &str,
    options: Options,
) -> Result<Option<usize>> {
    let answer = surface.ask_choice(prompt, &options.cancellable(), None)?;
    if answer == CANCEL {
        return Ok(None);
    }
    parse_position(&answer)
        .map(Some)
        .ok_or_else(|| DuchessError::Interaction(format!("not a card number: {answer:?}")))
}

fn tribute(seat: &mut Seat, surface: &mut dyn InteractionSurface) -> Result<()> {
    if seat.has_played() {
        return surface.notify(prompts::TRIBUTE_AFTER_PLAY);
    }
    if seat.field.is_empty() {
        return surface.notify(prompts::TRIBUTE_EMPTY_FIELD);
    }

    // The hand is only on offer once the deck has run dry.
    let mut source = Zone::Field;
    if seat.deck.is_empty() {
        let options = Options::new().with("y").with("n");
        if surface.ask_choice(prompts::HAND_TRIBUTE_QUESTION, &options, None)? == "y" {
            source = Zone::Hand;
        }
    }

    let (label, pile) = match source {
        Zone::Hand => ("Your hand", &seat.hand),
        _ => ("Your field", seat.field.pile()),
    };
    let prompt = prompts::tribute(label, pile);
    if let Some(position) = choose_position(surface, &prompt, Options::positions(pile.len()))? {
        seat.tribute(source, position)?;
    }
    Ok(())
}

/// Returns `true` if a card was played.
fn play(seat: &mut Seat, surface: &mut dyn InteractionSurface) -> Result<bool> {
    if seat.has_played() {
        surface.notify(prompts::ALREADY_PLAYED)?;
        return Ok(false);
    }
    if seat.field.is_full() {
        surface.notify(prompts::FIELD_FULL)?;
        return Ok(false);
    }

    let prompt = prompts::play(&seat.hand);
    let Some(position) = choose_position(surface, &prompt, Options::positions(seat.hand.len()))? else {
        return Ok(false);
    };
    if !seat.can_play(position)? {
        surface.notify(prompts::NEED_TRIBUTE)?;
        return Ok(false);
    }
    seat.play(position)?;
    Ok(true)
}

fn battle(seat: &mut Seat, rival: &mut Seat, surface: &mut dyn InteractionSurface) -> Result<()> {
    let prompt = prompts::attacker(seat.field.pile());
    let Some(attacker) = choose_position(surface, &prompt, Options::positions(seat.field.len()))? else {
        return Ok(());
    };

    let prompt = prompts::defender(rival.field.pile());
    let targets = Options::positions(rival.field.len());
    let Some(defender) = choose_position(surface, &prompt, targets)? else {
        return Ok(());
    };

    match seat.battle(rival, attacker, defender)? {
        CombatResult::Repelled => surface.notify(prompts::BATTLE_REPELLED),
        CombatResult::RankWin | CombatResult::SuitWin => surface.notify(prompts::TARGET_DESTROYED),
    }
}
