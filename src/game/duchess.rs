//! The match orchestrator.
//!
//! `Duchess` owns every seat, the roster of active and eliminated players,
//! the match RNG and the action history. It runs the turn protocol for the
//! current player and performs everything the protocol cannot do alone:
//! picking an opponent, showing other fields, dispatching abilities that
//! reach other seats, and the end-of-turn elimination sweep.

use smallvec::SmallVec;
use tracing::{debug, info};

use super::MatchOutcome;
use crate::core::action::{Action, ActionRecord};
use crate::core::config::MatchConfig;
use crate::core::error::{DuchessError, Result};
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::GameRng;
use crate::interaction::{parse_position, prompts, InteractionSurface, Options, CANCEL};
use crate::rules::CombatResult;
use crate::turn::{Seat, TurnEngine, TurnPhase, TurnStatus};
use crate::zones::{Pile, Zone, DECK_SIZE};

/// A match of Duchess.
#[derive(Clone, Debug)]
pub struct Duchess {
    config: MatchConfig,
    pub(super) seats: PlayerMap<Seat>,
    /// Players still in the match, in seat order.
    active: Vec<PlayerId>,
    /// Players knocked out, in elimination order.
    eliminated: Vec<PlayerId>,
    pub(super) current: PlayerId,
    /// Undealt cards when the player count does not divide the deck.
    reserve: Pile,
    pub(super) rng: GameRng,
    turn: u32,
    sequence: u32,
    history: Vec<ActionRecord>,
}

impl Duchess {
    /// Set up a match: shuffle one deck, split it evenly between the
    /// players, shuffle each player's share and deal opening hands.
    pub fn new(names: &[String], config: MatchConfig) -> Result<Self> {
        config.validate(names)?;
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);

        let mut master = Pile::standard_deck();
        master.shuffle(&mut rng);
        let share = DECK_SIZE / names.len();

        let mut seats = Vec::with_capacity(names.len());
        for (id, name) in PlayerId::all(names.len()).zip(names) {
            let mut seat = Seat::new(id, name.as_str(), &config);
            master.deal(&mut seat.deck, share)?;
            seat.deck.shuffle(&mut rng);
            seat.draw()?;
            seats.push(seat);
        }
        let reserve = Pile::from_cards(Zone::Reserve, master.cards().to_vec());

        info!(players = names.len(), seed = rng.seed(), share, reserve = reserve.len(), "match set up");
        Ok(Self::assemble(config, seats, reserve, rng))
    }

    /// Start a match from prepared seats, skipping the deal.
    ///
    /// Seat ids must be `0..n` in order. Useful for replaying a position.
    pub fn from_seats(seats: Vec<Seat>, config: MatchConfig) -> Result<Self> {
        let names: Vec<String> = seats.iter().map(|s| s.name().to_string()).collect();
        config.validate(&names)?;
        if let Some((i, seat)) = seats.iter().enumerate().find(|(i, s)| s.id().index() != *i) {
            return Err(DuchessError::InvalidConfig(format!(
                "seat {} carries id {}",
                i,
                seat.id()
            )));
        }

        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Ok(Self::assemble(config, seats, Pile::new(Zone::Reserve), rng))
    }

    fn assemble(config: MatchConfig, seats: Vec<Seat>, reserve: Pile, rng: GameRng) -> Self {
        let seats = PlayerMap::from_vec(seats);
        let active = seats.player_ids().collect();
        Self {
            config,
            seats,
            active,
            eliminated: Vec::new(),
            current: PlayerId::new(0),
            reserve,
            rng,
            turn: 1,
            sequence: 0,
            history: Vec::new(),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.player_count()
    }

    #[must_use]
    pub fn seat(&self, player: PlayerId) -> &Seat {
        &self.seats[player]
    }

    /// Mutable seat access, for setting up positions.
    pub fn seat_mut(&mut self, player: PlayerId) -> &mut Seat {
        &mut self.seats[player]
    }

    pub fn seats(&self) -> impl Iterator<Item = (PlayerId, &Seat)> {
        self.seats.iter()
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn active_players(&self) -> &[PlayerId] {
        &self.active
    }

    #[must_use]
    pub fn eliminated_players(&self) -> &[PlayerId] {
        &self.eliminated
    }

    /// Active players other than `player`, in seat order.
    #[must_use]
    pub fn opponents_of(&self, player: PlayerId) -> SmallVec<[PlayerId; 4]> {
        self.active.iter().copied().filter(|&p| p != player).collect()
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    #[must_use]
    pub fn reserve(&self) -> &Pile {
        &self.reserve
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Cards across every pile in the match, including the reserve.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.seats.iter().map(|(_, s)| s.card_count()).sum::<usize>() + self.reserve.len()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<MatchOutcome> {
        match self.active.as_slice() {
            [] => Some(MatchOutcome::Draw),
            [winner] => Some(MatchOutcome::Winner(*winner)),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.outcome().and_then(MatchOutcome::winner)
    }

    /// Every opponent's name and field, numbered for the opponent prompt.
    #[must_use]
    pub fn opponent_listing(&self) -> String {
        self.opponents_of(self.current)
            .into_iter()
            .enumerate()
            .map(|(i, id)| {
                let seat = &self.seats[id];
                prompts::opponent_entry(seat.name(), i + 1, seat.field.pile())
            })
            .collect()
    }

    // === Driving ===

    /// Play turns until one player is left.
    pub fn run(&mut self, surface: &mut dyn InteractionSurface) -> Result<MatchOutcome> {
        loop {
            if let Some(outcome) = self.outcome() {
                if let MatchOutcome::Winner(id) = outcome {
                    surface.notify(&prompts::won(self.seats[id].name()))?;
                }
                return Ok(outcome);
            }
            self.run_turn(surface)?;
        }
    }

    /// Play the current player's go through the menu protocol. Returns the
    /// players eliminated at its end.
    pub fn run_turn(&mut self, surface: &mut dyn InteractionSurface) -> Result<Vec<PlayerId>> {
        self.begin_turn(surface)?;

        let mut engine = TurnEngine::new(self.current);
        loop {
            let status = self.step(&mut engine, surface)?;
            self.collect(self.current);
            debug!(player = %self.current, status = status.as_str(), "turn step");

            match status {
                TurnStatus::Playing => {
                    self.dispatch_abilities(surface)?;
                }
                TurnStatus::Battling => match self.choose_opponent(surface)? {
                    Some(opponent) => engine.resume_with_opponent(opponent),
                    None => engine.cancel(),
                },
                TurnStatus::BattleComplete { .. } => {}
                TurnStatus::Viewing => {
                    let listing = self.opponent_listing();
                    surface.notify(&listing)?;
                }
                TurnStatus::Done => break,
            }
        }

        self.end_turn(surface)
    }

    fn step(&mut self, engine: &mut TurnEngine, surface: &mut dyn InteractionSurface) -> Result<TurnStatus> {
        let current = self.current;
        match engine.opponent() {
            Some(rival) if engine.phase() == TurnPhase::AwaitingBattleCards => {
                let (seat, opponent) = self.seats.pair_mut(current, rival);
                engine.step(seat, Some(opponent), surface)
            }
            _ => engine.step(&mut self.seats[current], None, surface),
        }
    }

    /// Pick the battle target: automatic with one opponent left, otherwise
    /// a cancellable prompt. `None` means cancelled.
    fn choose_opponent(&self, surface: &mut dyn InteractionSurface) -> Result<Option<PlayerId>> {
        let rivals = self.opponents_of(self.current);
        if let [only] = rivals.as_slice() {
            return Ok(Some(*only));
        }

        let prompt = prompts::opponent(&self.opponent_listing());
        let answer = surface.ask_choice(&prompt, &Options::positions(rivals.len()).cancellable(), None)?;
        if answer == CANCEL {
            return Ok(None);
        }
        parse_position(&answer)
            .and_then(|i| rivals.get(i).copied())
            .map(Some)
            .ok_or_else(|| DuchessError::Interaction(format!("no opponent numbered {answer:?}")))
    }

    // === Direct actions (current player) ===

    /// Announce the go, reset privileges, draw, and have the player discard
    /// down to hand capacity.
    pub fn begin_turn(&mut self, surface: &mut dyn InteractionSurface) -> Result<()> {
        if self.is_over() {
            return Err(DuchessError::IllegalAction("the match is over"));
        }
        let current = self.current;
        let name = self.seats[current].name().to_string();
        surface.notify(&prompts::turn_banner(&name))?;
        info!(turn = self.turn, player = %name, "turn start");

        self.seats[current].start_turn()?;
        while self.seats[current].hand_overflow() > 0 {
            let hand = &self.seats[current].hand;
            let answer = surface.ask_choice(&prompts::overflow(hand), &Options::positions(hand.len()), None)?;
            let position = parse_position(&answer)
                .ok_or_else(|| DuchessError::Interaction(format!("not a card number: {answer:?}")))?;
            self.seats[current].discard(position)?;
        }
        self.collect(current);
        Ok(())
    }

    /// Tribute one of the current player's hand or field cards.
    pub fn tribute(&mut self, source: Zone, position: usize) -> Result<()> {
        let current = self.current;
        self.seats[current].tribute(source, position)?;
        self.collect(current);
        Ok(())
    }

    /// Play a hand card and dispatch any abilities it sets off. Returns
    /// whether any ability fired.
    pub fn play_card(&mut self, position: usize, surface: &mut dyn InteractionSurface) -> Result<bool> {
        let current = self.current;
        self.seats[current].play(position)?;
        self.collect(current);
        Ok(self.dispatch_abilities(surface)? > 0)
    }

    /// Battle an opponent's field card.
    pub fn battle(&mut self, opponent: PlayerId, attacker: usize, defender: usize) -> Result<CombatResult> {
        let current = self.current;
        if opponent == current || !self.active.contains(&opponent) {
            return Err(DuchessError::IllegalAction("battles must target an active opponent"));
        }
        let (seat, rival) = self.seats.pair_mut(current, opponent);
        let result = seat.battle(rival, attacker, defender)?;
        self.collect(current);
        Ok(result)
    }

    /// Close the go: knock out every player with no cards left in hand,
    /// field and deck, then pass the turn to the next active seat.
    pub fn end_turn(&mut self, surface: &mut dyn InteractionSurface) -> Result<Vec<PlayerId>> {
        let current = self.current;
        self.record(current, Action::EndTurn);

        let knocked_out: Vec<PlayerId> = self
            .active
            .iter()
            .copied()
            .filter(|&id| self.seats[id].is_eliminated())
            .collect();
        for &id in &knocked_out {
            self.active.retain(|&p| p != id);
            self.eliminated.push(id);
            let name = self.seats[id].name();
            info!(player = %name, turn = self.turn, "eliminated");
            surface.notify(&prompts::lost(name))?;
        }

        match self.outcome() {
            Some(MatchOutcome::Winner(id)) => info!(player = %self.seats[id].name(), "victory"),
            Some(MatchOutcome::Draw) => info!("no players left"),
            None => {}
        }

        self.current = self.next_after(current);
        self.turn += 1;
        self.sequence = 0;
        Ok(knocked_out)
    }

    /// First active seat after `player`, wrapping around. `player` itself
    /// need not be active.
    fn next_after(&self, player: PlayerId) -> PlayerId {
        self.active
            .iter()
            .copied()
            .find(|&p| p > player)
            .or_else(|| self.active.first().copied())
            .unwrap_or(player)
    }

    // === History ===

    pub(super) fn record(&mut self, player: PlayerId, action: Action) {
        self.history
            .push(ActionRecord::new(player, action, self.turn, self.sequence));
        self.sequence += 1;
    }

    pub(super) fn collect(&mut self, player: PlayerId) {
        for action in self.seats[player].drain_journal() {
            self.record(player, action);
        }
    }
}

/// Builder for creating a [`Duchess`] match.
#[derive(Clone, Debug, Default)]
pub struct DuchessBuilder {
    names: Vec<String>,
    config: MatchConfig,
}

impl DuchessBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one player. Seats are assigned in the order players are added.
    #[must_use]
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    #[must_use]
    pub fn players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn hand_capacity(mut self, capacity: usize) -> Self {
        self.config.hand_capacity = capacity;
        self
    }

    #[must_use]
    pub fn field_capacity(mut self, capacity: usize) -> Self {
        self.config.field_capacity = capacity;
        self
    }

    #[must_use]
    pub fn opening_hand(mut self, size: usize) -> Self {
        self.config.opening_hand = size;
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<Duchess> {
        Duchess::new(&self.names, self.config)
    }
}
