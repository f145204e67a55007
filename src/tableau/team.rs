//! Teams.

use serde::{Deserialize, Serialize};

use super::areas::Tableau;
use crate::core::player::{PlayerId, TeamId};

/// A team: its members in seating order and the tableau it owns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub players: Vec<PlayerId>,
    pub tableau: Tableau,
    /// Display color, opaque to the engine.
    pub color: String,
}

impl Team {
    #[must_use]
    pub fn new(id: TeamId, players: Vec<PlayerId>, color: impl Into<String>) -> Self {
        Self {
            id,
            players,
            tableau: Tableau::new(),
            color: color.into(),
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.players.len()
    }
}
