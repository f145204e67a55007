//! Game state for one round.
//!
//! ## Game
//!
//! The aggregate the engine mutates:
//! - Deck (top = index 0) and the single visible discard
//! - Teams with their tableaux, players with their hands
//! - Current player and the extension flag
//! - Play history
//!
//! The deck and history use `im` persistent vectors, so `snapshot()` is cheap
//! and a UI can hold a read-only copy between turns.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::RoundConfig;
use super::player::{Player, PlayerId, TeamId};
use crate::cards::Card;
use crate::tableau::Team;

/// Where a played card ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// Accepted onto this team's tableau.
    Tableau(TeamId),
    /// Illegal or untargeted; went to the discard.
    Discard,
}

/// One completed play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    /// Turn number the play was made on (starts at 1).
    pub turn: u32,
    pub player: PlayerId,
    /// The card as placed (safeties carry their coup-fourré flag).
    pub card: Card,
    pub target: Option<TeamId>,
    pub placement: Placement,
}

/// Complete state of a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Draw pile, top at index 0.
    deck: Vector<Card>,

    /// Top of the discard pile.
    pub discard: Option<Card>,

    /// Teams in seating order. `teams[i].id == TeamId(i)`.
    pub teams: Vec<Team>,

    /// Players by id. `players[i].id == PlayerId(i)`.
    pub players: Vec<Player>,

    current_player: PlayerId,

    /// Whether the round is played to the extended distance.
    pub extension: bool,

    pub config: RoundConfig,

    history: Vector<PlayRecord>,

    turn_number: u32,
}

impl Game {
    /// Assemble a game from consistent parts. Used by `GameBuilder`, which
    /// validates team and player composition first.
    pub(crate) fn new(
        teams: Vec<Team>,
        players: Vec<Player>,
        deck: Vec<Card>,
        current_player: PlayerId,
        extension: bool,
        config: RoundConfig,
    ) -> Self {
        Self {
            deck: deck.into_iter().collect(),
            discard: None,
            teams,
            players,
            current_player,
            extension,
            config,
            history: Vector::new(),
            turn_number: 1,
        }
    }

    /// Cheap read-only copy for display between turns.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    // === Turn ===

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Team of the current player, or `None` if the current player is not
    /// seated (only possible in a hand-built or deserialized game).
    #[must_use]
    pub fn current_team(&self) -> Option<TeamId> {
        self.team_of(self.current_player)
    }

    /// Turn number (starts at 1, increments on every play).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub(crate) fn set_current_player(&mut self, player: PlayerId) {
        self.current_player = player;
        self.turn_number += 1;
    }

    // === Players and teams ===

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.index())
    }

    #[must_use]
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(id.index())
    }

    pub fn team_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.teams.get_mut(id.index())
    }

    /// Team a player belongs to.
    #[must_use]
    pub fn team_of(&self, player: PlayerId) -> Option<TeamId> {
        self.player(player).map(|p| p.team)
    }

    /// Every team other than `team`, in seating order.
    pub fn opponents(&self, team: TeamId) -> impl Iterator<Item = TeamId> + '_ {
        self.teams.iter().map(|t| t.id).filter(move |&id| id != team)
    }

    /// Current player's hand. Empty if the current player is not seated.
    #[must_use]
    pub fn current_hand(&self) -> &[Card] {
        self.player(self.current_player)
            .map(|p| p.hand.as_slice())
            .unwrap_or_default()
    }

    // === Deck ===

    #[must_use]
    pub fn deck(&self) -> &Vector<Card> {
        &self.deck
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Move the top card of the deck into a player's hand.
    ///
    /// Returns the drawn card, or `None` if the deck is empty.
    pub(crate) fn draw(&mut self, player: PlayerId) -> Option<Card> {
        let hand = &mut self.players.get_mut(player.index())?.hand;
        let card = self.deck.pop_front()?;
        hand.push(card);
        Some(card)
    }

    // === Distance ===

    /// Distance a team must cover this round.
    #[must_use]
    pub fn required_distance(&self) -> u32 {
        self.config.required_distance(self.extension)
    }

    // === History ===

    #[must_use]
    pub fn history(&self) -> &Vector<PlayRecord> {
        &self.history
    }

    #[must_use]
    pub fn last_play(&self) -> Option<&PlayRecord> {
        self.history.back()
    }

    pub(crate) fn record(&mut self, record: PlayRecord) {
        self.history.push_back(record);
    }
}
