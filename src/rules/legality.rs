//! Legality adjudication.
//!
//! Cards fall into three groups:
//!
//! - **Self-directed** (remedy, distance, `Unlimited`) go on the acting team's
//!   own tableau and are judged against it.
//! - **Attacks** (hazard, `Limit`) go on an opponent's tableau and are judged
//!   against that opponent.
//! - **Safeties** are never blocked and may go on any team's tableau.
//!
//! `is_legal_against` answers for one specific target; `has_valid_target`
//! searches for any. `is_legal` keeps the optional-target form for callers
//! that do not care which.

use tracing::trace;

use crate::cards::{BattleCard, Card, Distance, Hazard, Remedy, Speed};
use crate::core::{Game, TeamId};
use crate::tableau::Tableau;

/// Whether `card` may be played by the current player.
///
/// With `Some(team)` the card is judged against that team. With `None`,
/// attacks need at least one valid opponent and self-directed cards are judged
/// against the acting team.
#[must_use]
pub fn is_legal(card: Card, game: &Game, target: Option<TeamId>) -> bool {
    match target {
        Some(team) => is_legal_against(card, game, team),
        None => has_valid_target(card, game),
    }
}

/// Whether `card` may be played by the current player onto `target`'s
/// tableau. Unknown teams are never legal targets.
#[must_use]
pub fn is_legal_against(card: Card, game: &Game, target: TeamId) -> bool {
    let (Some(acting), Some(team)) = (game.current_team(), game.team(target)) else {
        return false;
    };

    let legal = match card {
        Card::Safety(_) => true,
        _ if card.is_attack() => target != acting && attack_lands(card, &team.tableau),
        _ => target == acting && self_play_allowed(card, &team.tableau, game.config.max_speed),
    };

    trace!(%card, %target, legal, "legality");
    legal
}

/// Whether `card` has at least one legal target.
#[must_use]
pub fn has_valid_target(card: Card, game: &Game) -> bool {
    match game.current_team() {
        Some(acting) if card.is_attack() => game
            .opponents(acting)
            .any(|team| is_legal_against(card, game, team)),
        Some(acting) => is_legal_against(card, game, acting),
        None => false,
    }
}

/// Every team `card` may legally be played onto.
#[must_use]
pub fn valid_targets(card: Card, game: &Game) -> Vec<TeamId> {
    game.teams
        .iter()
        .map(|t| t.id)
        .filter(|&id| is_legal_against(card, game, id))
        .collect()
}

fn self_play_allowed(card: Card, tableau: &Tableau, max_speed: u32) -> bool {
    match card {
        Card::Remedy(remedy) => remedy_allowed(remedy, tableau.battle_area),
        Card::Distance(distance) => distance_allowed(distance, tableau, max_speed),
        Card::Speed(Speed::Unlimited) => tableau.is_limited(),
        Card::Safety(_) => true,
        Card::Speed(Speed::Limit(_)) | Card::Hazard(_) => false,
    }
}

fn attack_lands(card: Card, tableau: &Tableau) -> bool {
    match card {
        Card::Speed(Speed::Limit(_)) => !tableau.is_limited(),
        Card::Hazard(_) => tableau.is_rolling(),
        Card::Speed(Speed::Unlimited)
        | Card::Remedy(_)
        | Card::Distance(_)
        | Card::Safety(_) => false,
    }
}

fn remedy_allowed(remedy: Remedy, battle: Option<BattleCard>) -> bool {
    match remedy {
        Remedy::Roll => matches!(
            battle,
            None | Some(BattleCard::Hazard(Hazard::Stop))
                | Some(BattleCard::Remedy(Remedy::Gas | Remedy::Repair | Remedy::Spare))
        ),
        Remedy::Repair | Remedy::Gas | Remedy::Spare => {
            matches!(battle, Some(BattleCard::Hazard(h)) if remedy.cures() == Some(h))
        }
    }
}

fn distance_allowed(distance: Distance, tableau: &Tableau, max_speed: u32) -> bool {
    tableau.is_rolling() && distance.amount() <= tableau.speed_limit(max_speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_after_resolved_remedy() {
        assert!(remedy_allowed(Remedy::Roll, None));
        assert!(remedy_allowed(Remedy::Roll, Some(BattleCard::Hazard(Hazard::Stop))));
        assert!(remedy_allowed(Remedy::Roll, Some(BattleCard::Remedy(Remedy::Gas))));
        assert!(remedy_allowed(Remedy::Roll, Some(BattleCard::Remedy(Remedy::Repair))));
        assert!(remedy_allowed(Remedy::Roll, Some(BattleCard::Remedy(Remedy::Spare))));

        assert!(!remedy_allowed(Remedy::Roll, Some(BattleCard::Remedy(Remedy::Roll))));
        assert!(!remedy_allowed(Remedy::Roll, Some(BattleCard::Hazard(Hazard::Crash))));
        assert!(!remedy_allowed(Remedy::Roll, Some(BattleCard::Hazard(Hazard::Empty))));
        assert!(!remedy_allowed(Remedy::Roll, Some(BattleCard::Hazard(Hazard::Flat))));
    }

    #[test]
    fn test_remedy_matches_exact_hazard() {
        for hazard in [Hazard::Crash, Hazard::Empty, Hazard::Flat] {
            for remedy in [Remedy::Repair, Remedy::Gas, Remedy::Spare] {
                let expected = remedy == hazard.remedy();
                assert_eq!(remedy_allowed(remedy, Some(BattleCard::Hazard(hazard))), expected);
            }
        }
        assert!(!remedy_allowed(Remedy::Gas, None));
        assert!(!remedy_allowed(Remedy::Spare, Some(BattleCard::Remedy(Remedy::Roll))));
    }

    #[test]
    fn test_distance_respects_limit() {
        let mut tableau = Tableau::rolling();
        assert!(distance_allowed(Distance::D200, &tableau, 200));

        tableau.speed_area = Some(Speed::Limit(50));
        assert!(distance_allowed(Distance::D50, &tableau, 200));
        assert!(!distance_allowed(Distance::D75, &tableau, 200));

        tableau.speed_area = Some(Speed::Unlimited);
        assert!(distance_allowed(Distance::D200, &tableau, 200));
        assert!(!distance_allowed(Distance::D200, &tableau, 100));
    }

    #[test]
    fn test_distance_needs_roll() {
        let mut tableau = Tableau::new();
        assert!(!distance_allowed(Distance::D25, &tableau, 200));

        tableau.battle_area = Some(BattleCard::Hazard(Hazard::Stop));
        assert!(!distance_allowed(Distance::D25, &tableau, 200));

        tableau.battle_area = Some(BattleCard::Remedy(Remedy::Gas));
        assert!(!distance_allowed(Distance::D25, &tableau, 200));
    }

    #[test]
    fn test_attacks() {
        let mut tableau = Tableau::rolling();
        assert!(attack_lands(Card::Hazard(Hazard::Crash), &tableau));
        assert!(attack_lands(Card::Speed(Speed::Limit(50)), &tableau));

        tableau.speed_area = Some(Speed::Limit(50));
        assert!(!attack_lands(Card::Speed(Speed::Limit(50)), &tableau));

        tableau.speed_area = Some(Speed::Unlimited);
        assert!(attack_lands(Card::Speed(Speed::Limit(50)), &tableau));

        tableau.battle_area = Some(BattleCard::Hazard(Hazard::Stop));
        assert!(!attack_lands(Card::Hazard(Hazard::Flat), &tableau));
    }
}
