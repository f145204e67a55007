//! Round status.

use serde::{Deserialize, Serialize};

use crate::core::{Game, TeamId};

/// How a round ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// These teams covered the required distance.
    TripCompleted(Vec<TeamId>),
    /// Deck and hands are empty and nobody finished.
    Exhausted,
}

impl RoundOutcome {
    /// Check if a team finished the trip.
    #[must_use]
    pub fn is_winner(&self, team: TeamId) -> bool {
        match self {
            RoundOutcome::TripCompleted(teams) => teams.contains(&team),
            RoundOutcome::Exhausted => false,
        }
    }
}

/// Kilometres `team` still has to cover. Zero once the trip is complete;
/// `None` for an unknown team.
#[must_use]
pub fn remaining_distance(game: &Game, team: TeamId) -> Option<u32> {
    let total = game.team(team)?.tableau.total_distance();
    Some(game.required_distance().saturating_sub(total))
}

/// Whether `team` has covered the required distance.
#[must_use]
pub fn has_completed_trip(game: &Game, team: TeamId) -> bool {
    remaining_distance(game, team) == Some(0)
}

/// Teams that have covered the required distance.
#[must_use]
pub fn completed_teams(game: &Game) -> Vec<TeamId> {
    game.teams
        .iter()
        .map(|t| t.id)
        .filter(|&id| has_completed_trip(game, id))
        .collect()
}

/// `Some` once the round is over, `None` while it continues.
#[must_use]
pub fn round_outcome(game: &Game) -> Option<RoundOutcome> {
    let finished = completed_teams(game);
    if !finished.is_empty() {
        return Some(RoundOutcome::TripCompleted(finished));
    }

    let cards_left = game.deck_size() > 0 || game.players.iter().any(|p| !p.hand.is_empty());
    if cards_left {
        None
    } else {
        Some(RoundOutcome::Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Distance, Hazard};
    use crate::core::GameBuilder;

    fn duel() -> Game {
        GameBuilder::new()
            .team("blue", ["Ada"])
            .team("red", ["Bo"])
            .hand_size(0)
            .deck(vec![Card::Hazard(Hazard::Stop)])
            .unshuffled()
            .build(0)
            .unwrap()
    }

    #[test]
    fn test_remaining_distance() {
        let mut game = duel();
        assert_eq!(remaining_distance(&game, TeamId::new(0)), Some(700));

        game.teams[0].tableau.distance_area = vec![Distance::D200, Distance::D100];
        assert_eq!(remaining_distance(&game, TeamId::new(0)), Some(400));
        assert_eq!(remaining_distance(&game, TeamId::new(9)), None);
    }

    #[test]
    fn test_round_in_progress() {
        let game = duel();
        assert_eq!(round_outcome(&game), None);
    }

    #[test]
    fn test_trip_completed() {
        let mut game = duel();
        game.teams[1].tableau.distance_area = vec![Distance::D200; 4];

        let outcome = round_outcome(&game).unwrap();
        assert_eq!(outcome, RoundOutcome::TripCompleted(vec![TeamId::new(1)]));
        assert!(outcome.is_winner(TeamId::new(1)));
        assert!(!outcome.is_winner(TeamId::new(0)));
    }

    #[test]
    fn test_extension_raises_target() {
        let mut game = duel();
        game.extension = true;
        game.teams[0].tableau.distance_area = vec![Distance::D100; 7];
        assert_eq!(remaining_distance(&game, TeamId::new(0)), Some(300));
        assert!(completed_teams(&game).is_empty());
    }

    #[test]
    fn test_exhausted() {
        let mut game = duel();
        game.players[0].hand.clear();
        assert_eq!(round_outcome(&game), Some(RoundOutcome::Exhausted));
    }
}
