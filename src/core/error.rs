//! Error types.
//!
//! Only caller mistakes are errors. An illegal play is a defined outcome (the
//! card goes to the discard) and drawing from an empty deck is a no-op, so
//! neither appears here.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::Card;

/// Rejected play. The game is left untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlayError {
    #[error("{player} does not hold {card}")]
    InvalidCardInHand { player: PlayerId, card: Card },
    #[error("{submitted} played out of turn (current player is {expected})")]
    OutOfTurn {
        expected: PlayerId,
        submitted: PlayerId,
    },
}

/// Invalid round setup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("a round needs at least one team")]
    NoTeams,
    #[error("team {team} has no players")]
    EmptyTeam { team: usize },
    #[error("too many players or teams (got={got}, max={max})")]
    TooManyPlayers { got: usize, max: usize },
    #[error("deck too small to deal (have={have}, need={need})")]
    NotEnoughCards { have: usize, need: usize },
}
