//! The menu protocol driven through the orchestrator with scripted answers.

use duchess::interaction::prompts;
use duchess::{
    Action, Card, Duchess, MatchConfig, PlayerId, Rank, ScriptedSurface, Seat, Suit, Zone, ZonePosition,
};

const ANN: PlayerId = PlayerId::new(0);
const BO: PlayerId = PlayerId::new(1);
const CY: PlayerId = PlayerId::new(2);

fn put(seat: &mut Seat, zone: Zone, cards: &[(Rank, Suit)]) {
    let pile = match zone {
        Zone::Deck => &mut seat.deck,
        Zone::Hand => &mut seat.hand,
        Zone::Field => seat.field.pile_mut(),
        Zone::Grave => &mut seat.grave,
        other => panic!("cannot stock {other}"),
    };
    for &(rank, suit) in cards {
        pile.receive(Card::new(rank, suit), ZonePosition::Back);
    }
}

fn table(players: usize) -> Duchess {
    let config = MatchConfig::new().with_seed(17);
    let names = ["Ann", "Bo", "Cy"];
    let seats = PlayerId::all(players)
        .map(|id| {
            let mut seat = Seat::new(id, names[id.index()], &config);
            put(&mut seat, Zone::Deck, &[(Rank::Four, Suit::Hearts), (Rank::Five, Suit::Hearts)]);
            seat
        })
        .collect();
    Duchess::from_seats(seats, config).unwrap()
}

#[test]
fn test_overflow_discard_before_menu() {
    let mut game = table(2);
    let spare = [(Rank::Three, Suit::Clubs); 8];
    put(game.seat_mut(ANN), Zone::Hand, &spare);
    put(game.seat_mut(ANN), Zone::Grave, &[(Rank::Two, Suit::Clubs)]);

    let mut surface = ScriptedSurface::new(["9", "q"]);
    game.run_turn(&mut surface).unwrap();

    let ann = game.seat(ANN);
    assert_eq!(ann.hand.len(), 8);
    assert_eq!(ann.grave.len(), 2);
    assert!(ann.grave.cards()[1].is_destroyed());
    assert_eq!(ann.grave.cards()[1].rank, Rank::Four);
    assert!(surface.prompts()[0].contains("Your hand is too full"));
    assert_eq!(game.history()[0].action, Action::Discard { position: 8 });
}

#[test]
fn test_menu_play_dispatches_ability() {
    let mut game = table(2);
    put(game.seat_mut(ANN), Zone::Hand, &[(Rank::Two, Suit::Diamonds)]);
    put(game.seat_mut(BO), Zone::Hand, &[(Rank::Ace, Suit::Diamonds)]);

    let mut surface = ScriptedSurface::new(["2", "1", "q"]);
    game.run_turn(&mut surface).unwrap();

    assert_eq!(game.seat(BO).hand.len(), 2);
    assert!(surface.was_notified("All other players draw a card!"));
    let actions: Vec<_> = game.history().iter().map(|r| r.action.clone()).collect();
    assert_eq!(
        actions,
        vec![
            Action::Play { position: 0 },
            Action::Ability { rank: Rank::Two },
            Action::EndTurn
        ]
    );
}

#[test]
fn test_second_play_refused() {
    let mut game = table(2);
    put(game.seat_mut(ANN), Zone::Hand, &[(Rank::Three, Suit::Diamonds), (Rank::Four, Suit::Diamonds)]);

    let mut surface = ScriptedSurface::new(["2", "1", "2", "q"]);
    game.run_turn(&mut surface).unwrap();

    assert!(surface.was_notified(prompts::ALREADY_PLAYED));
    assert_eq!(game.seat(ANN).field.len(), 1);
}

#[test]
fn test_two_player_battle_skips_opponent_prompt() {
    let mut game = table(2);
    put(game.seat_mut(ANN), Zone::Field, &[(Rank::Ten, Suit::Spades)]);
    put(game.seat_mut(BO), Zone::Field, &[(Rank::Six, Suit::Clubs)]);

    let mut surface = ScriptedSurface::new(["3", "1", "1", "q"]);
    game.run_turn(&mut surface).unwrap();

    assert!(surface.prompts().iter().all(|p| !p.contains("player you wish to battle")));
    assert!(game.seat(BO).field.is_empty());
    assert!(surface.was_notified(prompts::TARGET_DESTROYED));
}

#[test]
fn test_three_player_battle_picks_opponent() {
    let mut game = table(3);
    put(game.seat_mut(ANN), Zone::Field, &[(Rank::King, Suit::Spades)]);
    put(game.seat_mut(BO), Zone::Field, &[(Rank::Five, Suit::Clubs)]);
    put(game.seat_mut(CY), Zone::Field, &[(Rank::Four, Suit::Clubs)]);

    let mut surface = ScriptedSurface::new(["3", "2", "1", "1", "q"]);
    game.run_turn(&mut surface).unwrap();

    let listing = surface
        .prompts()
        .iter()
        .find(|p| p.contains("player you wish to battle"))
        .unwrap();
    assert!(listing.contains("\nBo[1]\n5c [1]\n"));
    assert!(listing.contains("\nCy[2]\n4c [1]\n"));

    assert_eq!(game.seat(BO).field.len(), 1);
    assert!(game.seat(CY).field.is_empty());
    assert_eq!(game.seat(CY).grave.cards()[0].rank, Rank::Four);
}

#[test]
fn test_cancel_opponent_choice() {
    let mut game = table(3);
    put(game.seat_mut(ANN), Zone::Field, &[(Rank::King, Suit::Spades)]);
    put(game.seat_mut(BO), Zone::Field, &[(Rank::Five, Suit::Clubs)]);

    let mut surface = ScriptedSurface::new(["3", "c", "q"]);
    game.run_turn(&mut surface).unwrap();

    assert_eq!(game.seat(BO).field.len(), 1);
    assert!(!game.seat(ANN).has_battled());
}

#[test]
fn test_view_other_fields() {
    let mut game = table(3);
    put(game.seat_mut(CY), Zone::Field, &[(Rank::Queen, Suit::Hearts)]);

    let mut surface = ScriptedSurface::new(["4", "q"]);
    game.run_turn(&mut surface).unwrap();

    assert!(surface.was_notified("\nBo[1]\n\n"));
    assert!(surface.was_notified("\nCy[2]\nQh [1]\n"));
}

#[test]
fn test_retry_after_repelled_battle() {
    let mut game = table(2);
    put(game.seat_mut(ANN), Zone::Field, &[(Rank::Two, Suit::Hearts), (Rank::Nine, Suit::Hearts)]);
    put(game.seat_mut(BO), Zone::Field, &[(Rank::Five, Suit::Diamonds)]);

    let mut surface = ScriptedSurface::new(["3", "1", "1", "3", "2", "1", "q"]);
    game.run_turn(&mut surface).unwrap();

    assert!(surface.was_notified(prompts::BATTLE_REPELLED));
    assert!(surface.was_notified(prompts::TARGET_DESTROYED));
    assert!(game.seat(BO).field.is_empty());

    let battles: Vec<bool> = game
        .history()
        .iter()
        .filter_map(|r| match r.action {
            Action::Battle { won, .. } => Some(won),
            _ => None,
        })
        .collect();
    assert_eq!(battles, vec![false, true]);
}
