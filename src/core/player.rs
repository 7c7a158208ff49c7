//! Player identification and per-player storage.
//!
//! ## PlayerId
//!
//! Seat number of a player, fixed for the whole match. Seats are assigned in
//! the order names were given when the match was built, so `PlayerId` order
//! is also turn order.
//!
//! ## PlayerMap
//!
//! One entry per seat, backed by a `Vec`. Elimination never removes an
//! entry; the orchestrator tracks who is still active separately, so a
//! `PlayerId` stays valid for the whole match.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat number of a player (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats of a match with `player_count` players.
    ///
    /// ```
    /// use duchess::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat storage with O(1) access.
///
/// ```
/// use duchess::core::{PlayerId, PlayerMap};
///
/// let mut names = PlayerMap::from_vec(vec![String::from("p0"), String::from("p1")]);
/// names[PlayerId::new(1)].push('!');
/// assert_eq!(names[PlayerId::new(1)], "p1!");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build a map from values already in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Get the number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Borrow two different seats mutably at once.
    ///
    /// Battles move cards between the attacker's and the defender's piles in
    /// one step, so both must be borrowed together.
    ///
    /// Panics if `a == b`.
    pub fn pair_mut(&mut self, a: PlayerId, b: PlayerId) -> (&mut T, &mut T) {
        assert_ne!(a, b, "Cannot borrow the same seat twice");
        let (ai, bi) = (a.index(), b.index());
        if ai < bi {
            let (left, right) = self.data.split_at_mut(bi);
            (&mut left[ai], &mut right[0])
        } else {
            let (left, right) = self.data.split_at_mut(ai);
            (&mut right[0], &mut left[bi])
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all seats.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
