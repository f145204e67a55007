//! Legal move enumeration for the current player.

use rustc_hash::FxHashSet;

use super::executor::Move;
use super::legality::valid_targets;
use crate::core::Game;

/// Every move the current player may choose.
///
/// For each distinct card in hand: one play per team the card is legal
/// against, followed by discarding it. Discarding is always available, so the
/// list is empty only when the hand is.
#[must_use]
pub fn legal_moves(game: &Game) -> Vec<Move> {
    let mut seen = FxHashSet::default();
    let mut moves = Vec::new();

    for &card in game.current_hand() {
        if !seen.insert(card) {
            continue;
        }
        moves.extend(valid_targets(card, game).into_iter().map(|team| Move::play(card, team)));
        moves.push(Move::discard(card));
    }

    moves
}

/// Moves that put a card on a tableau, leaving out discards.
#[must_use]
pub fn legal_plays(game: &Game) -> Vec<Move> {
    legal_moves(game)
        .into_iter()
        .filter(|mv| mv.target.is_some())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Distance, Hazard, Remedy};
    use crate::core::{GameBuilder, TeamId};

    #[test]
    fn test_opening_hand_moves() {
        let mut game = GameBuilder::new()
            .team("blue", ["Ada"])
            .team("red", ["Bo"])
            .hand_size(0)
            .deck(vec![Card::Hazard(Hazard::Stop); 4])
            .unshuffled()
            .build(0)
            .unwrap();
        game.players[0].hand = vec![
            Card::Remedy(Remedy::Roll),
            Card::Remedy(Remedy::Roll),
            Card::Distance(Distance::D100),
            Card::Hazard(Hazard::Stop),
        ];

        let moves = legal_moves(&game);

        assert_eq!(
            moves,
            vec![
                Move::play(Card::Remedy(Remedy::Roll), TeamId::new(0)),
                Move::discard(Card::Remedy(Remedy::Roll)),
                Move::discard(Card::Distance(Distance::D100)),
                Move::discard(Card::Hazard(Hazard::Stop)),
            ]
        );
        assert_eq!(
            legal_plays(&game),
            vec![Move::play(Card::Remedy(Remedy::Roll), TeamId::new(0))]
        );
    }
}
