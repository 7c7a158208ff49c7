//! A player's seat: their piles, per-turn privileges, and the actions that
//! only touch their own cards (plus the defender's in a battle).
//!
//! Every action validates all of its preconditions before moving a card, so
//! an `Err` always means nothing changed.

use std::fmt;

use tracing::debug;

use crate::cards::Card;
use crate::core::action::Action;
use crate::core::config::MatchConfig;
use crate::core::error::{DuchessError, Result};
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::rules::{self, CombatResult, ATTACKER_SLOT, DEFENDER_SLOT};
use crate::triggers::RoyalEffect;
use crate::zones::{move_card, Field, Pile, Zone, ZonePosition};

/// One player's piles and turn flags.
#[derive(Clone, Debug)]
pub struct Seat {
    id: PlayerId,
    name: String,

    /// Face-down draw pile; index 0 is the top.
    pub deck: Pile,
    /// Cards available to play (soft capacity 8).
    pub hand: Pile,
    /// Cards in play (capacity 5) and this turn's tributes.
    pub field: Field,
    /// Two-slot staging area used while one of this player's battles resolves.
    pub battlefield: Pile,
    /// Destroyed cards.
    pub grave: Pile,

    opening_hand: usize,
    played: bool,
    battled: bool,
    journal: Vec<Action>,
}

impl Seat {
    /// Create an empty seat.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, config: &MatchConfig) -> Self {
        Self {
            id,
            name: name.into(),
            deck: Pile::new(Zone::Deck),
            hand: Pile::bounded(Zone::Hand, config.hand_capacity),
            field: Field::new(config.field_capacity),
            battlefield: Pile::bounded(Zone::Battlefield, 2),
            grave: Pile::new(Zone::Grave),
            opening_hand: config.opening_hand,
            played: false,
            battled: false,
            journal: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn has_played(&self) -> bool {
        self.played
    }

    #[must_use]
    pub fn has_battled(&self) -> bool {
        self.battled
    }

    /// Total cards held in all of this seat's piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.hand.len() + self.field.len() + self.battlefield.len() + self.grave.len()
    }

    /// Out of the match: nothing left in hand, field or deck. The grave does
    /// not count.
    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.hand.is_empty() && self.field.is_empty() && self.deck.is_empty()
    }

    /// Actions performed since the last call, oldest first.
    pub fn drain_journal(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.journal)
    }

    /// Deal the opening hand if hand, field and grave are all empty,
    /// otherwise draw one card if the deck has any. Returns the number drawn.
    pub fn draw(&mut self) -> Result<usize> {
        let amount = if self.hand.is_empty() && self.field.is_empty() && self.grave.is_empty() {
            self.opening_hand
        } else {
            1
        };
        let drawn = self.deck.deal(&mut self.hand, amount)?;
        debug!(player = %self.name, drawn, deck = self.deck.len(), "draw");
        Ok(drawn)
    }

    /// Restore this turn's privileges: tributes, play, battle, and the
    /// battled markers on field cards.
    pub fn reset_privileges(&mut self) {
        self.field.reset_tributes();
        self.played = false;
        self.battled = false;
        for card in self.field.iter_mut() {
            card.clear_battled();
        }
    }

    /// Reset privileges, then draw. The caller resolves any hand overflow.
    pub fn start_turn(&mut self) -> Result<usize> {
        self.reset_privileges();
        self.draw()
    }

    /// Cards that must be discarded before the turn can go on.
    #[must_use]
    pub fn hand_overflow(&self) -> usize {
        self.hand.overflow()
    }

    /// Destroy and bury a hand card to resolve overflow.
    pub fn discard(&mut self, position: usize) -> Result<()> {
        self.hand.index_of(ZonePosition::Index(position))?;
        bury(&mut self.hand, &mut self.grave, position)?;
        self.journal.push(Action::Discard { position });
        debug!(player = %self.name, position, "discard");
        Ok(())
    }

    /// Destroy and bury one of this player's own hand or field cards,
    /// paying one tribute.
    ///
    /// Tributes need a card on the field, and the hand may only be tributed
    /// once the deck is empty.
    pub fn tribute(&mut self, source: Zone, position: usize) -> Result<()> {
        if self.played {
            return Err(DuchessError::IllegalAction("cannot tribute after playing a card"));
        }
        if self.field.is_empty() {
            return Err(DuchessError::IllegalAction("cannot tribute with an empty field"));
        }
        let pile = match source {
            Zone::Hand if !self.deck.is_empty() => {
                return Err(DuchessError::IllegalAction("hand tributes wait until the deck is empty"))
            }
            Zone::Hand => &mut self.hand,
            Zone::Field => self.field.pile_mut(),
            _ => return Err(DuchessError::IllegalAction("tributes come from the hand or the field")),
        };
        if pile.is_empty() {
            return Err(DuchessError::IllegalAction("nothing to tribute"));
        }

        bury(pile, &mut self.grave, position)?;
        self.field.add_tribute();
        self.journal.push(Action::Tribute { source, position });
        debug!(player = %self.name, %source, position, tributes = self.field.tributes(), "tribute");
        Ok(())
    }

    /// Check if the hand card at `position` is affordable right now.
    pub fn can_play(&self, position: usize) -> Result<bool> {
        let card = self.hand.get(position)?;
        Ok(rules::can_play(card, self.field.tributes()))
    }

    /// Move a hand card onto the field.
    ///
    /// Returns `true` when the played card carries an unused ability, in
    /// which case the orchestrator must dispatch abilities next.
    pub fn play(&mut self, position: usize) -> Result<bool> {
        if self.played {
            return Err(DuchessError::IllegalAction("already played a card this turn"));
        }
        if self.field.is_full() {
            return Err(DuchessError::IllegalAction("the field is full"));
        }
        let card = *self.hand.get(position)?;
        if !rules::can_play(&card, self.field.tributes()) {
            return Err(DuchessError::NotEligible {
                card: card.to_string(),
                reason: "not enough tributes paid",
            });
        }

        move_card(
            &mut self.hand,
            self.field.pile_mut(),
            ZonePosition::Index(position),
            ZonePosition::Back,
        )?;
        self.played = true;
        self.field.reset_tributes();
        self.journal.push(Action::Play { position });
        debug!(player = %self.name, %card, "play");
        Ok(card.is_active())
    }

    /// Battle `opponent`'s field card at `defender` with this player's field
    /// card at `attacker`.
    ///
    /// Only a win uses up the battle action; a repelled attacker may try
    /// again this turn.
    pub fn battle(&mut self, opponent: &mut Seat, attacker: usize, defender: usize) -> Result<CombatResult> {
        if self.battled {
            return Err(DuchessError::IllegalAction("already won a battle this turn"));
        }
        if self.field.is_empty() {
            return Err(DuchessError::IllegalAction("no card on the field to battle with"));
        }
        let attacking = *self.field.get(attacker)?;
        let defending = *opponent.field.get(defender)?;

        move_card(
            self.field.pile_mut(),
            &mut self.battlefield,
            ZonePosition::Index(attacker),
            ZonePosition::Index(ATTACKER_SLOT),
        )?;
        move_card(
            opponent.field.pile_mut(),
            &mut self.battlefield,
            ZonePosition::Index(defender),
            ZonePosition::Index(DEFENDER_SLOT),
        )?;

        let result = rules::resolve(&mut self.battlefield)?;
        self.battled = result.attacker_won();

        let defender_home = if self.battlefield.get(DEFENDER_SLOT)?.is_destroyed() {
            (&mut opponent.grave, ZonePosition::Back)
        } else {
            (opponent.field.pile_mut(), ZonePosition::Index(defender))
        };
        move_card(
            &mut self.battlefield,
            defender_home.0,
            ZonePosition::Index(DEFENDER_SLOT),
            defender_home.1,
        )?;
        move_card(
            &mut self.battlefield,
            self.field.pile_mut(),
            ZonePosition::Index(ATTACKER_SLOT),
            ZonePosition::Index(attacker),
        )?;

        self.journal.push(Action::Battle {
            opponent: opponent.id,
            attacker,
            defender,
            won: result.attacker_won(),
        });
        debug!(
            player = %self.name,
            opponent = %opponent.name,
            %attacking,
            %defending,
            ?result,
            "battle"
        );
        Ok(result)
    }

    /// Destroy and bury the top card of the deck. Returns the burned card.
    pub fn burn_top(&mut self) -> Result<Option<Card>> {
        if self.deck.is_empty() {
            return Ok(None);
        }
        let card = *self.deck.get(0)?;
        bury(&mut self.deck, &mut self.grave, 0)?;
        debug!(player = %self.name, %card, "burn");
        Ok(Some(card))
    }

    /// Grave positions holding a destroyed card.
    #[must_use]
    pub fn revivable(&self) -> Vec<usize> {
        self.grave
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_destroyed())
            .map(|(i, _)| i)
            .collect()
    }

    /// Bring the grave card at `position` back to life at the royal's
    /// destination. A King's reset reshuffles the deck afterwards.
    pub fn revive(&mut self, effect: RoyalEffect, position: usize, rng: &mut GameRng) -> Result<Card> {
        let card = self.grave.get_mut(position)?;
        if !card.is_destroyed() {
            return Err(DuchessError::NotEligible {
                card: card.to_string(),
                reason: "only destroyed cards can be revived",
            });
        }
        card.revive();
        let card = *card;

        let dest = match effect {
            RoyalEffect::Revive => self.field.pile_mut(),
            RoyalEffect::Rescue => &mut self.hand,
            RoyalEffect::Reset => &mut self.deck,
        };
        move_card(&mut self.grave, dest, ZonePosition::Index(position), ZonePosition::Back)?;
        if effect == RoyalEffect::Reset {
            self.deck.shuffle(rng);
        }

        debug!(player = %self.name, %card, to = %effect.destination(), "revive");
        Ok(card)
    }
}

impl fmt::Display for Seat {
    /// Status block shown above the menu.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\nName: {}\nField: {}\nHand: {}\nNo. of cards in deck: {}\nNo. of cards tributed this go: {}",
            self.name,
            self.field.pile(),
            self.hand,
            self.deck.len(),
            self.field.tributes()
        )
    }
}

/// Destroy the card at `position` and move it to the back of `grave`.
fn bury(source: &mut Pile, grave: &mut Pile, position: usize) -> Result<()> {
    source.get_mut(position)?.destroy();
    move_card(source, grave, ZonePosition::Index(position), ZonePosition::Back)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn seat() -> Seat {
        Seat::new(PlayerId::new(0), "Ann", &MatchConfig::default())
    }

    fn fill(pile: &mut Pile, cards: &[(Rank, Suit)]) {
        for &(rank, suit) in cards {
            pile.receive(Card::new(rank, suit), ZonePosition::Back);
        }
    }

    #[test]
    fn test_opening_draw_deals_five() {
        let mut s = seat();
        s.deck = Pile::standard_deck();

        assert_eq!(s.draw().unwrap(), 5);
        assert_eq!(s.hand.len(), 5);
        assert_eq!(s.draw().unwrap(), 1);
        assert_eq!(s.hand.len(), 6);
    }

    #[test]
    fn test_draw_from_empty_deck_is_noop() {
        let mut s = seat();
        fill(&mut s.hand, &[(Rank::Two, Suit::Clubs)]);
        assert_eq!(s.draw().unwrap(), 0);
        assert_eq!(s.hand.len(), 1);
    }

    #[test]
    fn test_tribute_buries_and_counts() {
        let mut s = seat();
        fill(s.field.pile_mut(), &[(Rank::Four, Suit::Hearts), (Rank::Nine, Suit::Clubs)]);

        s.tribute(Zone::Field, 1).unwrap();

        assert_eq!(s.field.len(), 1);
        assert_eq!(s.field.tributes(), 1);
        assert!(s.grave.cards()[0].is_destroyed());
        assert_eq!(s.grave.cards()[0].rank, Rank::Nine);
        assert_eq!(s.drain_journal(), vec![Action::Tribute { source: Zone::Field, position: 1 }]);
    }

    #[test]
    fn test_tribute_rejections() {
        let mut s = seat();
        fill(&mut s.hand, &[(Rank::Ace, Suit::Hearts)]);
        assert!(matches!(s.tribute(Zone::Field, 0), Err(DuchessError::IllegalAction(_))));
        // nothing on the field, so the hand is off limits too
        assert!(matches!(s.tribute(Zone::Hand, 0), Err(DuchessError::IllegalAction(_))));

        fill(s.field.pile_mut(), &[(Rank::Six, Suit::Hearts)]);
        assert!(matches!(s.tribute(Zone::Grave, 0), Err(DuchessError::IllegalAction(_))));
        assert!(matches!(s.tribute(Zone::Hand, 4), Err(DuchessError::OutOfRange { .. })));
        assert_eq!(s.hand.len(), 1);
        assert_eq!(s.field.tributes(), 0);
    }

    #[test]
    fn test_hand_tribute_waits_for_empty_deck() {
        let mut s = seat();
        fill(&mut s.hand, &[(Rank::Ace, Suit::Hearts)]);
        fill(s.field.pile_mut(), &[(Rank::Six, Suit::Hearts)]);
        fill(&mut s.deck, &[(Rank::Two, Suit::Hearts)]);

        assert!(matches!(s.tribute(Zone::Hand, 0), Err(DuchessError::IllegalAction(_))));
        assert_eq!(s.hand.len(), 1);

        s.deck.take(ZonePosition::Front).unwrap();
        s.tribute(Zone::Hand, 0).unwrap();
        assert!(s.hand.is_empty());
        assert_eq!(s.field.tributes(), 1);
    }

    #[test]
    fn test_play_onto_full_field_refused() {
        let mut s = seat();
        fill(&mut s.hand, &[(Rank::Three, Suit::Spades)]);
        fill(s.field.pile_mut(), &[(Rank::Four, Suit::Clubs); 5]);

        assert!(matches!(s.play(0), Err(DuchessError::IllegalAction(_))));
        assert_eq!(s.field.len(), 5);
        assert_eq!(s.hand.len(), 1);
        assert!(!s.has_played());
    }

    #[test]
    fn test_play_resets_tributes() {
        let mut s = seat();
        fill(&mut s.hand, &[(Rank::Nine, Suit::Diamonds)]);
        fill(s.field.pile_mut(), &[(Rank::Three, Suit::Diamonds)]);

        assert!(matches!(s.play(0), Err(DuchessError::NotEligible { .. })));
        s.tribute(Zone::Field, 0).unwrap();
        assert!(!s.play(0).unwrap());

        assert!(s.has_played());
        assert_eq!(s.field.tributes(), 0);
        assert_eq!(s.field.cards()[0].rank, Rank::Nine);
        assert!(matches!(s.tribute(Zone::Hand, 0), Err(DuchessError::IllegalAction(_))));
    }

    #[test]
    fn test_play_reports_active_special() {
        let mut s = seat();
        fill(&mut s.hand, &[(Rank::Two, Suit::Spades)]);
        assert!(s.play(0).unwrap());
        assert!(matches!(s.play(0), Err(DuchessError::IllegalAction(_))));
    }

    #[test]
    fn test_reset_privileges_clears_markers() {
        let mut s = seat();
        fill(&mut s.hand, &[(Rank::Ace, Suit::Spades)]);
        let mut eight = Card::new(Rank::Eight, Suit::Clubs);
        eight.mark_battled();
        s.field.receive(eight, ZonePosition::Back);
        s.field.add_tribute();
        s.play(0).unwrap();

        s.reset_privileges();

        assert!(!s.has_played());
        assert!(!s.has_battled());
        assert_eq!(s.field.tributes(), 0);
        assert!(!s.field.cards()[0].has_battled());
    }

    #[test]
    fn test_burn_top() {
        let mut s = seat();
        assert_eq!(s.burn_top().unwrap(), None);

        fill(&mut s.deck, &[(Rank::Queen, Suit::Hearts), (Rank::Two, Suit::Hearts)]);
        let burned = s.burn_top().unwrap().unwrap();

        assert_eq!(burned.rank, Rank::Queen);
        assert_eq!(s.deck.len(), 1);
        assert!(s.grave.cards()[0].is_destroyed());
    }

    #[test]
    fn test_revive_to_field_rearms() {
        let mut s = seat();
        let mut two = Card::new(Rank::Two, Suit::Clubs);
        two.consume();
        two.destroy();
        s.grave.receive(two, ZonePosition::Back);

        let mut rng = GameRng::new(1);
        let revived = s.revive(RoyalEffect::Revive, 0, &mut rng).unwrap();

        assert!(revived.is_active());
        assert!(!revived.is_destroyed());
        assert!(s.grave.is_empty());
        assert_eq!(s.field.cards(), &[revived]);
    }

    #[test]
    fn test_revive_requires_destroyed_card() {
        let mut s = seat();
        fill(&mut s.grave, &[(Rank::Five, Suit::Spades)]);
        let mut rng = GameRng::new(1);
        assert!(matches!(
            s.revive(RoyalEffect::Rescue, 0, &mut rng),
            Err(DuchessError::NotEligible { .. })
        ));
        assert!(s.revivable().is_empty());
    }

    #[test]
    fn test_rescued_card_can_attack_on_a_later_turn() {
        let mut ann = Seat::new(PlayerId::new(0), "Ann", &MatchConfig::default());
        let mut bo = Seat::new(PlayerId::new(1), "Bo", &MatchConfig::default());
        fill(ann.field.pile_mut(), &[(Rank::King, Suit::Clubs), (Rank::Four, Suit::Spades)]);
        fill(bo.field.pile_mut(), &[(Rank::Seven, Suit::Hearts), (Rank::Three, Suit::Diamonds)]);

        assert!(ann.battle(&mut bo, 0, 0).unwrap().attacker_won());
        assert_eq!(bo.grave.cards()[0].rank, Rank::Seven);

        let mut rng = GameRng::new(3);
        let seven = bo.revive(RoyalEffect::Rescue, 0, &mut rng).unwrap();
        assert!(!seven.has_battled());

        bo.start_turn().unwrap();
        bo.tribute(Zone::Field, 0).unwrap();
        assert!(bo.play(0).unwrap());
        assert!(!bo.has_battled());

        let result = bo.battle(&mut ann, 0, 1).unwrap();
        assert_eq!(result, CombatResult::RankWin);
        assert_eq!(ann.grave.cards()[0].rank, Rank::Four);
    }

    #[test]
    fn test_elimination_ignores_grave() {
        let mut s = seat();
        fill(&mut s.grave, &[(Rank::Five, Suit::Spades)]);
        assert!(s.is_eliminated());
        fill(&mut s.deck, &[(Rank::Five, Suit::Hearts)]);
        assert!(!s.is_eliminated());
    }

    #[test]
    fn test_summary() {
        let mut s = seat();
        fill(&mut s.hand, &[(Rank::Ten, Suit::Hearts)]);
        let text = s.to_string();
        assert!(text.contains("Name: Ann"));
        assert!(text.contains("Hand: 10h [1]"));
        assert!(text.contains("No. of cards in deck: 0"));
    }
}
