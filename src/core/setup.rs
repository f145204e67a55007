//! Round setup.
//!
//! `GameBuilder` seats the teams, shuffles the deck with a seeded `GameRng`,
//! deals every player a hand in turn order and lets the first player draw to
//! begin their turn.

use tracing::info;

use super::config::RoundConfig;
use super::error::SetupError;
use super::player::{Player, PlayerId, TeamId};
use super::rng::GameRng;
use super::state::Game;
use crate::cards::{standard_deck, Card};
use crate::rules::sequencer::player_order;
use crate::tableau::Team;

/// Most players (and teams) a round supports.
pub const MAX_PLAYERS: usize = 255;

#[derive(Clone, Debug)]
struct TeamSeat {
    color: String,
    names: Vec<String>,
}

/// Builder for the opening state of a round.
///
/// ```
/// use mille_bornes::core::GameBuilder;
///
/// let game = GameBuilder::new()
///     .team("blue", ["Ada", "Cy"])
///     .team("red", ["Bo"])
///     .build(42)
///     .unwrap();
///
/// assert_eq!(game.players.len(), 3);
/// // Everyone holds six cards; the first player has drawn a seventh.
/// assert_eq!(game.current_hand().len(), 7);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    teams: Vec<TeamSeat>,
    config: RoundConfig,
    extension: bool,
    deck: Option<Vec<Card>>,
    unshuffled: bool,
    random_first_player: bool,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a team. Teams take turns in the order they are added.
    pub fn team<I, S>(mut self, color: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.teams.push(TeamSeat {
            color: color.into(),
            names: names.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Play the round to the extended distance.
    pub fn extension(mut self, extension: bool) -> Self {
        self.extension = extension;
        self
    }

    pub fn config(mut self, config: RoundConfig) -> Self {
        self.config = config;
        self
    }

    pub fn hand_size(mut self, size: usize) -> Self {
        self.config.hand_size = size;
        self
    }

    /// Use a custom deck instead of the standard one.
    pub fn deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Keep the deck in the given order (index 0 is drawn first).
    pub fn unshuffled(mut self) -> Self {
        self.unshuffled = true;
        self
    }

    /// Pick the starting player at random instead of the first seat.
    pub fn random_first_player(mut self) -> Self {
        self.random_first_player = true;
        self
    }

    /// Build the opening state.
    pub fn build(self, seed: u64) -> Result<Game, SetupError> {
        if self.teams.is_empty() {
            return Err(SetupError::NoTeams);
        }
        if let Some(team) = self.teams.iter().position(|t| t.names.is_empty()) {
            return Err(SetupError::EmptyTeam { team });
        }
        let player_count: usize = self.teams.iter().map(|t| t.names.len()).sum();
        if player_count > MAX_PLAYERS || self.teams.len() > MAX_PLAYERS {
            return Err(SetupError::TooManyPlayers {
                got: player_count.max(self.teams.len()),
                max: MAX_PLAYERS,
            });
        }

        let mut deck = self.deck.unwrap_or_else(standard_deck);
        let need = player_count * self.config.hand_size;
        if deck.len() < need {
            return Err(SetupError::NotEnoughCards {
                have: deck.len(),
                need,
            });
        }

        let rng = GameRng::new(seed);
        if !self.unshuffled {
            rng.for_context("deck").shuffle(&mut deck);
        }

        let mut teams = Vec::with_capacity(self.teams.len());
        let mut players = Vec::with_capacity(player_count);
        for (team_idx, seat) in self.teams.into_iter().enumerate() {
            let team_id = TeamId::new(team_idx as u8);
            let mut members = Vec::with_capacity(seat.names.len());
            for name in seat.names {
                let id = PlayerId::new(players.len() as u8);
                players.push(Player::new(id, team_id, name));
                members.push(id);
            }
            teams.push(Team::new(team_id, members, seat.color));
        }

        let order = player_order(&teams);
        let first = if self.random_first_player {
            order[rng.for_context("seats").gen_range_usize(0..order.len())]
        } else {
            order[0]
        };

        let hand_size = self.config.hand_size;
        let mut game = Game::new(teams, players, deck, first, self.extension, self.config);

        for _ in 0..hand_size {
            for &player in &order {
                game.draw(player);
            }
        }
        game.draw(first);

        info!(
            seed = rng.seed(),
            players = player_count,
            teams = game.teams.len(),
            extension = game.extension,
            first = %first,
            "round dealt"
        );

        Ok(game)
    }
}
