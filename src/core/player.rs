//! Player and team identification.
//!
//! ## PlayerId / TeamId
//!
//! Type-safe identifiers supporting up to 255 players and teams. Both are
//! 0-based and double as indices into `Game::players` and `Game::teams`.
//!
//! ## Player
//!
//! A seat at the table: name, team back-reference and private hand.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Team identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub u8);

impl TeamId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.0)
    }
}

/// A player and their hand.
///
/// The hand is an unordered multiset; `Vec` order is incidental.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Team this player belongs to. The team owns the tableau, not the player.
    pub team: TeamId,
    pub name: String,
    pub hand: Vec<Card>,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, team: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            team,
            name: name.into(),
            hand: Vec::new(),
        }
    }

    /// Remove exactly one copy of `card` from the hand.
    ///
    /// Returns true if the card was found and removed.
    pub fn remove_from_hand(&mut self, card: Card) -> bool {
        if let Some(pos) = self.hand.iter().position(|&c| c == card) {
            self.hand.swap_remove(pos);
            true
        } else {
            false
        }
    }
}
