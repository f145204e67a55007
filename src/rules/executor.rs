//! Play execution.
//!
//! One call to [`apply`] is one atomic turn:
//!
//! 1. Remove one copy of the card from the current player's hand. If the card
//!    is not there the call fails and nothing changes.
//! 2. If a target was named and the play is legal, place the card on the
//!    target's tableau.
//! 3. Otherwise the card becomes the top of the discard.
//! 4. Advance to the next player.
//! 5. The new current player draws from the deck, if any cards remain.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::legality::is_legal_against;
use super::sequencer::next_player;
use crate::cards::{BattleCard, Card, SafetyCard};
use crate::core::{Game, Placement, PlayError, PlayRecord, PlayerId, TeamId};

/// A card choice and optional target, as submitted by a player.
///
/// `target: None` discards the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub card: Card,
    pub target: Option<TeamId>,
}

impl Move {
    #[must_use]
    pub const fn play(card: Card, target: TeamId) -> Self {
        Self {
            card,
            target: Some(target),
        }
    }

    #[must_use]
    pub const fn discard(card: Card) -> Self {
        Self { card, target: None }
    }
}

/// Play `card` from the current player's hand.
///
/// An illegal play is not an error: the card is discarded and the turn still
/// passes. Only a card missing from the hand is rejected.
pub fn apply(game: &mut Game, card: Card, target: Option<TeamId>) -> Result<Placement, PlayError> {
    let player = game.current_player();

    // Everything after this point is infallible.
    let removed = game
        .player_mut(player)
        .is_some_and(|p| p.remove_from_hand(card));
    if !removed {
        return Err(PlayError::InvalidCardInHand { player, card });
    }

    let legal_target = target.filter(|&team| is_legal_against(card, &*game, team));
    let (placed, placement) = match legal_target {
        Some(team) => place(game, card, team),
        None => (card, Placement::Discard),
    };
    if placement == Placement::Discard {
        debug!(%player, %card, "discarded");
        game.discard = Some(placed);
    }

    game.record(PlayRecord {
        turn: game.turn_number(),
        player,
        card: placed,
        target,
        placement,
    });

    let next = next_player(game);
    game.set_current_player(next);
    match game.draw(next) {
        Some(drawn) => debug!(player = %next, card = %drawn, remaining = game.deck_size(), "drew"),
        None => debug!(player = %next, "deck empty, no draw"),
    }

    Ok(placement)
}

/// [`apply`] taking a [`Move`].
pub fn apply_move(game: &mut Game, mv: Move) -> Result<Placement, PlayError> {
    apply(game, mv.card, mv.target)
}

/// [`apply_move`] on behalf of `player`, rejecting anyone but the current
/// player. Submissions are never queued: legality depends on the exact
/// preceding state.
pub fn submit(game: &mut Game, player: PlayerId, mv: Move) -> Result<Placement, PlayError> {
    let expected = game.current_player();
    if player != expected {
        return Err(PlayError::OutOfTurn {
            expected,
            submitted: player,
        });
    }
    apply_move(game, mv)
}

/// Put a legal card on `team`'s tableau. Returns the card as placed.
fn place(game: &mut Game, card: Card, team: TeamId) -> (Card, Placement) {
    let coup_fourre = match card {
        Card::Safety(safety) => is_coup_fourre(game, safety, team),
        _ => false,
    };

    let Some(tableau) = game.team_mut(team).map(|t| &mut t.tableau) else {
        return (card, Placement::Discard);
    };

    let placed = match card {
        Card::Distance(distance) => {
            tableau.push_distance(distance);
            card
        }
        Card::Speed(speed) => {
            tableau.set_speed(speed);
            card
        }
        Card::Hazard(hazard) => {
            tableau.set_battle(BattleCard::Hazard(hazard));
            card
        }
        Card::Remedy(remedy) => {
            tableau.set_battle(BattleCard::Remedy(remedy));
            card
        }
        Card::Safety(safety) => {
            let safety = if coup_fourre { safety.as_coup_fourre() } else { safety };
            if !tableau.push_safety(safety) {
                return (card, Placement::Discard);
            }
            Card::Safety(safety)
        }
    };

    debug!(%placed, %team, "placed");
    (placed, Placement::Tableau(team))
}

/// A safety is a coup-fourré when the play just before it landed the matching
/// hazard on the same team.
fn is_coup_fourre(game: &Game, safety: SafetyCard, team: TeamId) -> bool {
    matches!(
        game.last_play(),
        Some(PlayRecord {
            card: Card::Hazard(hazard),
            placement: Placement::Tableau(hit),
            ..
        }) if *hit == team && hazard.safety() == safety.kind
    )
}
