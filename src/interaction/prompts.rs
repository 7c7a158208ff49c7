//! Prompt and notice wording.
//!
//! Kept in one place so surfaces can be tested against stable text and the
//! engine code stays free of string building.

use crate::zones::Pile;

pub const MENU_REJECTION: &str = "Please enter a valid option.";

pub const TRIBUTE_AFTER_PLAY: &str = "You can't tribute after you've played a card.";
pub const TRIBUTE_EMPTY_FIELD: &str = "Your field is empty. Play a card and tribute next turn.";
pub const ALREADY_PLAYED: &str = "You've already played a card this turn.";
pub const FIELD_FULL: &str = "Your field is too full to play anymore cards right now.";
pub const NEED_TRIBUTE: &str = "You can't do that. Please tribute more cards.";
pub const ALREADY_BATTLED: &str = "You've already battled cards this turn.";
pub const BATTLE_EMPTY_FIELD: &str = "Your field is empty. Play a card if you want to battle it.";
pub const TARGET_DESTROYED: &str = "Target destroyed!";
pub const BATTLE_REPELLED: &str = "Please choose appropriate cards to battle.";
pub const NOTHING_TO_REVIVE: &str = "There is nothing in your grave to bring back.";

/// Main menu, under the player's status block.
#[must_use]
pub fn menu(summary: &str) -> String {
    format!(
        "{summary}\nEnter:\n\t1 - Tribute\n\t2 - Play\n\t3 - Battle\n\t4 - View other fields\n\tq - End your go\n"
    )
}

#[must_use]
pub fn overflow(hand: &Pile) -> String {
    format!(
        "\nYour hand:\n{hand}\nYour hand is too full\nEnter the number of a card to destroy so you can continue"
    )
}

pub const HAND_TRIBUTE_QUESTION: &str = "\nWould you like to tribute from the hand? (y/n)\n";

#[must_use]
pub fn tribute(label: &str, source: &Pile) -> String {
    format!(
        "\n{label}:{source}\nEnter the number of the card you want to tribute\n(or 'c' to cancel)\n"
    )
}

#[must_use]
pub fn play(hand: &Pile) -> String {
    format!("\nYour hand:\n{hand}\nEnter the number of the card you want to play\n(or c to cancel)\n")
}

#[must_use]
pub fn attacker(field: &Pile) -> String {
    format!(
        "\nYour Field:\n{field}\nEnter the number of the card you want to attack with:\n(or 'c' to cancel)\n"
    )
}

#[must_use]
pub fn defender(field: &Pile) -> String {
    format!(
        "\nYour Opponent's Field:\n{field}\nEnter the number of the card you want to attack:\n(or 'c' to cancel)\n"
    )
}

#[must_use]
pub fn opponent(listing: &str) -> String {
    format!("{listing}\nEnter the number of the player you wish to battle with\n")
}

/// One entry of the opponent listing: `"\n<name>[<n>]\n<field>\n"`.
#[must_use]
pub fn opponent_entry(name: &str, number: usize, field: &Pile) -> String {
    format!("\n{name}[{number}]\n{field}\n")
}

#[must_use]
pub fn royal(grave: &Pile, verb: &str) -> String {
    format!("\nYour Grave:\n{grave}\nEnter the number of the card you wish to {verb}\n")
}

#[must_use]
pub fn turn_banner(name: &str) -> String {
    format!("This turn: {name}")
}

#[must_use]
pub fn lost(name: &str) -> String {
    format!("{name} has lost!")
}

#[must_use]
pub fn won(name: &str) -> String {
    format!("{name} has won!")
}
